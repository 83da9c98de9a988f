//! Arrow-key selector over the cached user list.

use console::{Key, Term};
use std::io;

use crate::presentation::ui::display::DisplayHelper;

/// How an interactive selection ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectorOutcome {
    /// Enter was pressed; the committed name. Empty when Enter was pressed
    /// before any candidate was shown, which callers treat like an empty
    /// typed name.
    Committed(String),
    /// Escape was pressed.
    Cancelled,
}

/// Cycles through a fixed list of user names, wrapping at both ends.
///
/// The selector starts unselected: the first forward step lands on index 0,
/// the first backward step on the last index.
pub struct UserSelector {
    entries: Vec<String>,
    index: Option<usize>,
}

impl UserSelector {
    /// Create a selector over `entries`. Callers ensure the list is
    /// non-empty before entering the interactive loop.
    pub fn new(entries: Vec<String>) -> Self {
        Self {
            entries,
            index: None,
        }
    }

    /// Number of selectable entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there is nothing to select.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The currently displayed candidate, if any.
    pub fn current(&self) -> Option<&str> {
        self.index.map(|i| self.entries[i].as_str())
    }

    /// Step forward, wrapping past the last index to 0.
    pub fn advance(&mut self) -> &str {
        let next = match self.index {
            Some(i) if i + 1 < self.entries.len() => i + 1,
            _ => 0,
        };
        self.index = Some(next);
        &self.entries[next]
    }

    /// Step backward, wrapping below 0 to the last index.
    pub fn retreat(&mut self) -> &str {
        let previous = match self.index {
            Some(i) if i > 0 => i - 1,
            _ => self.entries.len() - 1,
        };
        self.index = Some(previous);
        &self.entries[previous]
    }

    /// Run the interactive loop: Up/Right advances, Down/Left retreats,
    /// Enter commits the displayed candidate, Escape cancels. Every step
    /// redraws the candidate in place on the current terminal line.
    pub fn run(&mut self, term: &Term, display: &DisplayHelper) -> io::Result<SelectorOutcome> {
        loop {
            match term.read_key()? {
                Key::Escape => {
                    display.finish_inline();
                    return Ok(SelectorOutcome::Cancelled);
                }
                Key::Enter => {
                    display.finish_inline();
                    let committed = self.current().unwrap_or_default().to_string();
                    return Ok(SelectorOutcome::Committed(committed));
                }
                Key::ArrowUp | Key::ArrowRight => {
                    let candidate = self.advance().to_string();
                    display.write_inline(&candidate);
                }
                Key::ArrowDown | Key::ArrowLeft => {
                    let candidate = self.retreat().to_string();
                    display.write_inline(&candidate);
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn selector() -> UserSelector {
        UserSelector::new(vec![
            "alice".to_string(),
            "bob".to_string(),
            "carol".to_string(),
        ])
    }

    #[test]
    fn test_starts_unselected() {
        let selector = selector();
        assert_eq!(selector.current(), None);
        assert_eq!(selector.len(), 3);
    }

    #[test]
    fn test_first_forward_step_lands_on_first_entry() {
        let mut selector = selector();
        assert_eq!(selector.advance(), "alice");
    }

    #[test]
    fn test_first_backward_step_lands_on_last_entry() {
        let mut selector = selector();
        assert_eq!(selector.retreat(), "carol");
    }

    #[test]
    fn test_forward_wraps_past_end() {
        let mut selector = selector();
        selector.advance();
        selector.advance();
        assert_eq!(selector.advance(), "carol");
        assert_eq!(selector.advance(), "alice");
    }

    #[test]
    fn test_backward_wraps_below_zero() {
        let mut selector = selector();
        selector.advance();
        assert_eq!(selector.current(), Some("alice"));
        assert_eq!(selector.retreat(), "carol");
    }

    #[test]
    fn test_single_entry_wraps_onto_itself() {
        let mut selector = UserSelector::new(vec!["only".to_string()]);
        assert_eq!(selector.advance(), "only");
        assert_eq!(selector.advance(), "only");
        assert_eq!(selector.retreat(), "only");
    }
}
