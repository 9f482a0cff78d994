//! Update functions for the Elm-style architecture
//!
//! All page state transformations flow through these functions.

use crate::commands::Cmd;
use crate::messages::{FootnoteMsg, HoverMsg, Msg, ThemeMsg};
use crate::model::{PageModel, NOTE_ACTIVE_DURATION};
use crate::render::note_element_id;
use crate::theme::ThemeStore;

/// Main update function - dispatches to sub-handlers
pub fn update<S: ThemeStore>(model: &mut PageModel<S>, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Hover(m) => update_hover(model, m),
        Msg::Footnote(m) => update_footnote(model, m),
        Msg::Theme(m) => update_theme(model, m),
    }
}

/// Handle column hover messages
pub fn update_hover<S: ThemeStore>(model: &mut PageModel<S>, msg: HoverMsg) -> Option<Cmd> {
    match msg {
        HoverMsg::Enter(cell) => {
            let column = model.table.hover_column(cell)?;
            model.highlighted.extend(model.table.column_cells(column));
            Some(Cmd::Redraw)
        }

        // Leaving any cell clears every highlight, whichever column set it
        HoverMsg::Leave(_) => {
            if model.highlighted.is_empty() {
                return None;
            }
            model.highlighted.clear();
            Some(Cmd::Redraw)
        }
    }
}

/// Handle footnote marker clicks and the delayed active-mark clear
pub fn update_footnote<S: ThemeStore>(model: &mut PageModel<S>, msg: FootnoteMsg) -> Option<Cmd> {
    match msg {
        FootnoteMsg::Click(marker) => {
            let note_id = model.table.marker_note(marker)?;
            let element_id = note_element_id(note_id);
            if model.footnotes.find(&element_id).is_none() {
                tracing::debug!(
                    element_id = %element_id,
                    "footnote target missing, ignoring click"
                );
                return None;
            }

            // A newer click supersedes the pending clear of an older one
            let generation = model.next_generation();
            model.active_notes.insert(element_id.clone(), generation);

            Some(Cmd::batch(vec![
                Cmd::ScrollIntoView {
                    element_id: element_id.clone(),
                },
                Cmd::Redraw,
                Cmd::ScheduleMsg {
                    delay: NOTE_ACTIVE_DURATION,
                    msg: Msg::Footnote(FootnoteMsg::ClearActive {
                        element_id,
                        generation,
                    }),
                },
            ]))
        }

        FootnoteMsg::ClearActive {
            element_id,
            generation,
        } => {
            if model.active_notes.get(&element_id) != Some(&generation) {
                return None;
            }
            model.active_notes.remove(&element_id);
            Some(Cmd::Redraw)
        }
    }
}

/// Handle theme messages
pub fn update_theme<S: ThemeStore>(model: &mut PageModel<S>, msg: ThemeMsg) -> Option<Cmd> {
    match msg {
        ThemeMsg::Toggle => {
            let mode = model.theme.toggle();
            tracing::info!(theme = %mode, "theme toggled");
            Some(Cmd::Redraw)
        }
    }
}
