//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use std::time::Duration;

use crate::messages::Msg;

/// Commands returned by update functions
///
/// Handlers with nothing to do return `None` rather than an empty command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Presentation state changed (highlights, active notes, theme)
    Redraw,
    /// Bring an element into view, centered with a smooth animation
    ScrollIntoView { element_id: String },
    /// Deliver `msg` back to `update` after `delay`
    ScheduleMsg { delay: Duration, msg: Msg },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::Redraw => true,
            Cmd::ScrollIntoView { .. } => false,
            // Scheduled messages produce their own command when delivered
            Cmd::ScheduleMsg { .. } => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::ThemeMsg;

    #[test]
    fn test_batch_needs_redraw() {
        let cmd = Cmd::batch(vec![
            Cmd::ScrollIntoView {
                element_id: "note-1".into(),
            },
            Cmd::Redraw,
        ]);
        assert!(cmd.needs_redraw());
    }

    #[test]
    fn test_nested_batch_redraw() {
        let cmd = Cmd::batch(vec![Cmd::batch(vec![Cmd::Redraw])]);
        assert!(cmd.needs_redraw());
        assert!(!Cmd::batch(vec![]).needs_redraw());
    }

    #[test]
    fn test_schedule_does_not_redraw() {
        let cmd = Cmd::ScheduleMsg {
            delay: Duration::from_secs(1),
            msg: Msg::Theme(ThemeMsg::Toggle),
        };
        assert!(!cmd.needs_redraw());
    }
}
