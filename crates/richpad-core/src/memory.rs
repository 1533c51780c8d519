//! In-memory surface and mirror.
//!
//! `MemorySurface` is a deterministic stand-in for a browser editing region:
//! it wraps the selected span of its HTML in the markup a command produces,
//! or inserts markup at the caret. It does not parse HTML; offsets are plain
//! character positions in the markup string.

use crate::command::FormatCommand;
use crate::surface::{EditableSurface, MirrorTarget, SelectionRange};

/// Editable surface backed by a `String`.
#[derive(Debug, Clone)]
pub struct MemorySurface {
    html: String,
    selection: SelectionRange,
    focused: bool,
    visible: bool,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self {
            html: String::new(),
            selection: SelectionRange::default(),
            focused: false,
            visible: true,
        }
    }

    /// Replaces the selection with typed text and moves the caret after it.
    ///
    /// Markup-significant characters are escaped, as a browser would when
    /// the user types them.
    pub fn type_text(&mut self, text: &str) {
        let escaped = escape_text(text);
        self.replace_selection(&escaped);
    }

    /// Selects characters `start..end` of the HTML, clamped to its length.
    pub fn select(&mut self, start: usize, end: usize) {
        self.selection = self.clamp(SelectionRange::new(start, end));
    }

    /// Selects the whole content.
    pub fn select_all(&mut self) {
        self.selection = SelectionRange::new(0, self.char_len());
    }

    pub fn selection(&self) -> SelectionRange {
        self.selection
    }

    pub fn selected_html(&self) -> &str {
        let (start, end) = self.byte_range(self.selection);
        &self.html[start..end]
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    fn char_len(&self) -> usize {
        self.html.chars().count()
    }

    fn clamp(&self, range: SelectionRange) -> SelectionRange {
        let len = self.char_len();
        SelectionRange::new(range.start.min(len), range.end.min(len))
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.html
            .char_indices()
            .nth(char_idx)
            .map_or(self.html.len(), |(b, _)| b)
    }

    fn byte_range(&self, range: SelectionRange) -> (usize, usize) {
        (self.byte_offset(range.start), self.byte_offset(range.end))
    }

    /// Replaces the selected span and leaves a caret after the new text.
    fn replace_selection(&mut self, replacement: &str) {
        let (start, end) = self.byte_range(self.selection);
        self.html.replace_range(start..end, replacement);
        let caret = self.selection.start + replacement.chars().count();
        self.selection = SelectionRange::caret(caret);
    }

    /// Wraps the selection in `open`/`close`.
    ///
    /// Returns `false` for a collapsed selection.
    fn wrap_selection(&mut self, open: &str, close: &str) -> bool {
        if self.selection.is_collapsed() {
            return false;
        }
        let inner = self.selected_html().to_string();
        self.replace_selection(&format!("{open}{inner}{close}"));
        true
    }

    /// Wraps the selection, or the whole content when nothing is selected.
    fn wrap_block(&mut self, open: &str, close: &str) -> bool {
        if self.selection.is_collapsed() {
            self.select_all();
        }
        if self.selection.is_collapsed() {
            // Empty document: insert an empty block for the caret.
            self.replace_selection(&format!("{open}<br>{close}"));
            return true;
        }
        self.wrap_selection(open, close)
    }
}

impl EditableSurface for MemorySurface {
    fn html(&self) -> String {
        self.html.clone()
    }

    fn set_html(&mut self, html: &str) {
        self.html = html.to_string();
        self.selection = SelectionRange::caret(self.char_len());
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn exec(&mut self, command: &FormatCommand) -> bool {
        match command {
            FormatCommand::Bold => self.wrap_selection("<b>", "</b>"),
            FormatCommand::Italic => self.wrap_selection("<i>", "</i>"),
            FormatCommand::Underline => self.wrap_selection("<u>", "</u>"),
            FormatCommand::StrikeThrough => self.wrap_selection("<strike>", "</strike>"),
            FormatCommand::FormatBlock(tag) => {
                let tag = tag.tag();
                self.wrap_block(&format!("<{tag}>"), &format!("</{tag}>"))
            }
            FormatCommand::InsertUnorderedList => self.wrap_block("<ul><li>", "</li></ul>"),
            FormatCommand::InsertOrderedList => self.wrap_block("<ol><li>", "</li></ol>"),
            FormatCommand::CreateLink(url) => {
                self.wrap_selection(&format!("<a href=\"{}\">", escape_attr(url)), "</a>")
            }
            FormatCommand::InsertImage(url) => {
                self.replace_selection(&format!("<img src=\"{}\">", escape_attr(url)));
                true
            }
            FormatCommand::ForeColor(color) => self.wrap_selection(
                &format!("<span style=\"color: {};\">", color.to_css()),
                "</span>",
            ),
            FormatCommand::BackColor(color) => self.wrap_selection(
                &format!("<span style=\"background-color: {};\">", color.to_css()),
                "</span>",
            ),
            FormatCommand::InsertTable { .. } => match command.value() {
                Some(markup) => {
                    self.replace_selection(&markup);
                    true
                }
                None => false,
            },
            FormatCommand::RemoveFormat => {
                if self.selection.is_collapsed() {
                    return false;
                }
                let stripped = strip_tags(self.selected_html());
                self.replace_selection(&stripped);
                true
            }
        }
    }

    fn save_selection(&self) -> Option<SelectionRange> {
        Some(self.selection)
    }

    fn restore_selection(&mut self, range: SelectionRange) {
        self.selection = self.clamp(range);
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

impl Default for MemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

/// Plain input backed by a `String`.
#[derive(Debug, Clone)]
pub struct MemoryMirror {
    value: String,
    visible: bool,
}

impl MemoryMirror {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            visible: true,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Default for MemoryMirror {
    fn default() -> Self {
        Self::new(String::new())
    }
}

impl MirrorTarget for MemoryMirror {
    fn value(&self) -> String {
        self.value.clone()
    }

    fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_attr(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}

/// Removes every `<...>` tag, keeping text content.
fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::BlockTag;
    use richpad_config::HexColor;

    fn surface(html: &str) -> MemorySurface {
        let mut s = MemorySurface::new();
        s.set_html(html);
        s
    }

    #[test]
    fn test_type_text_appends_at_caret() {
        let mut s = MemorySurface::new();
        s.type_text("Hello");
        s.type_text(" world");
        assert_eq!(s.html(), "Hello world");
        assert_eq!(s.selection(), SelectionRange::caret(11));
    }

    #[test]
    fn test_type_text_escapes_markup() {
        let mut s = MemorySurface::new();
        s.type_text("a < b & c");
        assert_eq!(s.html(), "a &lt; b &amp; c");
    }

    #[test]
    fn test_type_text_replaces_selection() {
        let mut s = surface("Hello world");
        s.select(6, 11);
        s.type_text("there");
        assert_eq!(s.html(), "Hello there");
    }

    #[test]
    fn test_bold_wraps_selection() {
        let mut s = surface("Hello world");
        s.select(0, 5);
        assert!(s.exec(&FormatCommand::Bold));
        assert_eq!(s.html(), "<b>Hello</b> world");
    }

    #[test]
    fn test_inline_command_needs_selection() {
        let mut s = surface("Hello");
        assert!(!s.exec(&FormatCommand::Italic));
        assert_eq!(s.html(), "Hello");
    }

    #[test]
    fn test_block_without_selection_wraps_everything() {
        let mut s = surface("Title");
        assert!(s.exec(&FormatCommand::FormatBlock(BlockTag::H1)));
        assert_eq!(s.html(), "<h1>Title</h1>");
    }

    #[test]
    fn test_list_on_empty_document() {
        let mut s = MemorySurface::new();
        assert!(s.exec(&FormatCommand::InsertOrderedList));
        assert_eq!(s.html(), "<ol><li><br></li></ol>");
    }

    #[test]
    fn test_link_escapes_url() {
        let mut s = surface("site");
        s.select_all();
        assert!(s.exec(&FormatCommand::CreateLink("https://a.b/?q=\"x\"".into())));
        assert_eq!(s.html(), "<a href=\"https://a.b/?q=&quot;x&quot;\">site</a>");
    }

    #[test]
    fn test_image_inserts_at_caret() {
        let mut s = surface("ab");
        s.select(1, 1);
        assert!(s.exec(&FormatCommand::InsertImage("cat.png".into())));
        assert_eq!(s.html(), "a<img src=\"cat.png\">b");
    }

    #[test]
    fn test_fore_color_span() {
        let mut s = surface("red");
        s.select_all();
        assert!(s.exec(&FormatCommand::ForeColor(HexColor::rgb(255, 0, 0))));
        assert_eq!(s.html(), "<span style=\"color: #ff0000;\">red</span>");
    }

    #[test]
    fn test_remove_format_strips_tags() {
        let mut s = surface("<b>bold</b> <i>it</i>");
        s.select_all();
        assert!(s.exec(&FormatCommand::RemoveFormat));
        assert_eq!(s.html(), "bold it");
    }

    #[test]
    fn test_selection_is_clamped() {
        let mut s = surface("abc");
        s.select(1, 99);
        assert_eq!(s.selection(), SelectionRange::new(1, 3));
        s.restore_selection(SelectionRange::new(50, 60));
        assert_eq!(s.selection(), SelectionRange::caret(3));
    }

    #[test]
    fn test_multibyte_offsets() {
        let mut s = surface("héllo");
        s.select(1, 2);
        assert_eq!(s.selected_html(), "é");
        assert!(s.exec(&FormatCommand::Underline));
        assert_eq!(s.html(), "h<u>é</u>llo");
    }

    #[test]
    fn test_mirror_visibility() {
        let mut m = MemoryMirror::new("<p>x</p>");
        assert!(m.is_visible());
        m.set_visible(false);
        assert!(!m.is_visible());
        assert_eq!(m.value(), "<p>x</p>");
    }
}
