//! CSV tokenizing for the comparison table sources
//!
//! Both `data.csv` and `notes.csv` go through the same tokenizer and land in
//! a `Table`:
//!
//! ```text
//! raw text ──tokenize──▶ Table
//!                        ├── header()  (row 0)
//!                        └── body()    (rows 1..)
//! ```

mod model;
mod parser;

pub use model::{CellPosition, Row, Table};
pub use parser::{parse_strict, tokenize, ParseError};
