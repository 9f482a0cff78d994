//! Benchmarks for table parsing and rendering
//!
//! Run with: cargo bench render

use compare_table::csv::{parse_strict, tokenize};
use compare_table::notes::NotesMap;
use compare_table::render::{html, render_footnote_list, render_page, render_table, PageContent};
use compare_table::theme::ThemeMode;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

fn generate_data(rows: usize) -> String {
    let mut out = String::from("Feature,Basic,Pro,Enterprise\n");
    for i in 0..rows {
        out.push_str(&format!(
            "Feature {i},\"{i} GB, shared\"[1],{i} TB|good,Unlimited**|good\n"
        ));
    }
    out
}

fn generate_notes(count: usize) -> NotesMap {
    let mut notes = NotesMap::new();
    for i in 1..=count {
        notes.insert(i.to_string(), format!("Note number {}", i));
    }
    notes
}

// ============================================================================
// Tokenizing
// ============================================================================

#[divan::bench(args = [10, 100, 1000])]
fn tokenize_lenient(bencher: divan::Bencher, rows: usize) {
    let data = generate_data(rows);
    bencher.bench(|| divan::black_box(tokenize(&data)));
}

#[divan::bench(args = [10, 100, 1000])]
fn tokenize_strict(bencher: divan::Bencher, rows: usize) {
    let data = generate_data(rows);
    bencher.bench(|| divan::black_box(parse_strict(&data)));
}

// ============================================================================
// Rendering
// ============================================================================

#[divan::bench(args = [10, 100, 1000])]
fn table_render(bencher: divan::Bencher, rows: usize) {
    let table = tokenize(&generate_data(rows));
    let notes = generate_notes(3);
    bencher.bench(|| divan::black_box(render_table(&table, &notes)));
}

#[divan::bench(args = [10, 100, 1000])]
fn table_to_html(bencher: divan::Bencher, rows: usize) {
    let rendered = render_table(&tokenize(&generate_data(rows)), &generate_notes(3));
    bencher.bench(|| divan::black_box(html::table_to_html(&rendered)));
}

#[divan::bench(args = [10, 100, 1000])]
fn footnote_list(bencher: divan::Bencher, count: usize) {
    let notes = generate_notes(count);
    bencher.bench(|| divan::black_box(render_footnote_list(&notes)));
}

#[divan::bench]
fn full_page(bencher: divan::Bencher) {
    let notes = generate_notes(20);
    let table = render_table(&tokenize(&generate_data(100)), &notes);
    let footnotes = render_footnote_list(&notes);
    bencher.bench(|| {
        divan::black_box(render_page(&PageContent {
            title: "Plans",
            table: &table,
            footnotes: &footnotes,
            theme: ThemeMode::Light,
        }))
    });
}
