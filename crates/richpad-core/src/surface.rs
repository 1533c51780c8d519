//! Platform seams of the editor shell.
//!
//! The host (a browser binding, a GUI toolkit, or the in-memory
//! implementations in [`crate::memory`]) supplies the editable surface that
//! renders rich text and the plain input the content is mirrored into.

use crate::command::FormatCommand;

/// A selection inside the editable surface, as character offsets into its
/// HTML. `start == end` is a caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionRange {
    pub start: usize,
    pub end: usize,
}

impl SelectionRange {
    /// Builds a range, ordering the endpoints.
    pub fn new(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    pub fn caret(at: usize) -> Self {
        Self { start: at, end: at }
    }

    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.is_collapsed()
    }
}

/// The rich-text editing region.
pub trait EditableSurface {
    /// Current rendered content as HTML.
    fn html(&self) -> String;

    /// Replaces the content. The caret moves to the end.
    fn set_html(&mut self, html: &str);

    fn focus(&mut self);

    /// Applies a formatting command to the current selection.
    ///
    /// Returns `false` when the surface had nothing to apply it to.
    fn exec(&mut self, command: &FormatCommand) -> bool;

    fn save_selection(&self) -> Option<SelectionRange>;

    fn restore_selection(&mut self, range: SelectionRange);

    fn set_visible(&mut self, visible: bool);
}

/// The plain input whose value mirrors the surface content.
pub trait MirrorTarget {
    fn value(&self) -> String;

    fn set_value(&mut self, value: &str);

    fn set_visible(&mut self, visible: bool);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_orders_endpoints() {
        let r = SelectionRange::new(9, 3);
        assert_eq!(r, SelectionRange { start: 3, end: 9 });
        assert_eq!(r.len(), 6);
        assert!(!r.is_collapsed());
    }

    #[test]
    fn test_caret_is_collapsed() {
        assert!(SelectionRange::caret(4).is_collapsed());
    }
}
