//! Runtime - drives the page model from presentation events
//!
//! The runtime owns the model, feeds messages through `update`, and performs
//! the returned commands:
//! - `ScheduleMsg` goes into a `TimerQueue` and is delivered by `advance`
//! - `ScrollIntoView` is queued as an `Effect` for the presentation layer
//! - `Redraw` sets a flag the presentation layer polls
//!
//! Time is passed in explicitly so any event loop (or a test) can drive it.

mod timers;

use std::time::Instant;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::PageModel;
use crate::theme::ThemeStore;
use crate::update::update;

pub use timers::TimerQueue;

/// Side effects the presentation layer must carry out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Scroll the element into view (centered, smooth)
    ScrollIntoView { element_id: String },
}

/// Single-threaded driver for a `PageModel`
#[derive(Debug)]
pub struct Runtime<S: ThemeStore> {
    model: PageModel<S>,
    timers: TimerQueue,
    effects: Vec<Effect>,
    needs_redraw: bool,
}

impl<S: ThemeStore> Runtime<S> {
    pub fn new(model: PageModel<S>) -> Self {
        Self {
            model,
            timers: TimerQueue::new(),
            effects: Vec::new(),
            needs_redraw: false,
        }
    }

    /// Process one message at `now`
    pub fn dispatch(&mut self, msg: Msg, now: Instant) {
        tracing::trace!(?msg, "dispatch");
        if let Some(cmd) = update(&mut self.model, msg) {
            if cmd.needs_redraw() {
                self.needs_redraw = true;
            }
            self.process_cmd(cmd, now);
        }
    }

    /// Deliver every timer due at `now`, returning how many fired
    pub fn advance(&mut self, now: Instant) -> usize {
        let mut fired = 0;
        loop {
            let due = self.timers.take_due(now);
            if due.is_empty() {
                break;
            }
            for msg in due {
                fired += 1;
                self.dispatch(msg, now);
            }
        }
        fired
    }

    fn process_cmd(&mut self, cmd: Cmd, now: Instant) {
        match cmd {
            // Already recorded by `dispatch`
            Cmd::Redraw => {}
            Cmd::ScrollIntoView { element_id } => {
                self.effects.push(Effect::ScrollIntoView { element_id });
            }
            Cmd::ScheduleMsg { delay, msg } => self.timers.schedule(now, delay, msg),
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd, now);
                }
            }
        }
    }

    /// Drain pending effects
    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    /// Whether a redraw was requested since the last call, clearing the flag
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// When the presentation layer should call `advance` next
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    pub fn model(&self) -> &PageModel<S> {
        &self.model
    }

    pub fn into_model(self) -> PageModel<S> {
        self.model
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::csv::{tokenize, CellPosition};
    use crate::messages::FootnoteMsg;
    use crate::notes::NotesMap;
    use crate::render::MarkerId;
    use crate::theme::{MemoryThemeStore, ThemeController};

    fn runtime() -> Runtime<MemoryThemeStore> {
        let theme = ThemeController::init(MemoryThemeStore::default(), false);
        let model = PageModel::new(
            &tokenize("Feature\nSpeed[1]\n"),
            &NotesMap::parse("id,note\n1,Measured\n"),
            theme,
        );
        Runtime::new(model)
    }

    fn click() -> Msg {
        Msg::Footnote(FootnoteMsg::Click(MarkerId {
            cell: CellPosition::new(1, 0),
            index: 0,
        }))
    }

    #[test]
    fn test_click_emits_scroll_effect_and_redraw() {
        let mut rt = runtime();
        rt.dispatch(click(), Instant::now());
        assert_eq!(
            rt.take_effects(),
            vec![Effect::ScrollIntoView {
                element_id: "note-1".into()
            }]
        );
        assert!(rt.take_redraw());
        assert!(!rt.take_redraw());
        assert!(rt.take_effects().is_empty());
    }

    #[test]
    fn test_active_mark_clears_after_two_seconds() {
        let start = Instant::now();
        let mut rt = runtime();
        rt.dispatch(click(), start);

        assert_eq!(rt.advance(start + Duration::from_millis(1999)), 0);
        assert!(rt.model().is_note_active("note-1"));

        assert_eq!(rt.advance(start + Duration::from_secs(2)), 1);
        assert!(!rt.model().is_note_active("note-1"));
        assert!(rt.next_deadline().is_none());
    }
}
