/// Formatting commands dispatched to the editable surface.
use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Result};
use richpad_config::HexColor;

use crate::table::{MAX_TABLE_DIM, MIN_TABLE_DIM};

/// Block-level element applied by `FormatBlock`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockTag {
    H1,
    H2,
    H3,
    Paragraph,
}

impl BlockTag {
    pub const ALL: [BlockTag; 4] = [BlockTag::H1, BlockTag::H2, BlockTag::H3, BlockTag::Paragraph];

    pub fn tag(self) -> &'static str {
        match self {
            Self::H1 => "h1",
            Self::H2 => "h2",
            Self::H3 => "h3",
            Self::Paragraph => "p",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::H1 => "Heading 1",
            Self::H2 => "Heading 2",
            Self::H3 => "Heading 3",
            Self::Paragraph => "Paragraph",
        }
    }
}

impl FromStr for BlockTag {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "h1" => Ok(Self::H1),
            "h2" => Ok(Self::H2),
            "h3" => Ok(Self::H3),
            "p" => Ok(Self::Paragraph),
            other => bail!("unknown block tag: {other}"),
        }
    }
}

/// A rich-text editing command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatCommand {
    Bold,
    Italic,
    Underline,
    StrikeThrough,
    FormatBlock(BlockTag),
    InsertUnorderedList,
    InsertOrderedList,
    CreateLink(String),
    InsertImage(String),
    ForeColor(HexColor),
    BackColor(HexColor),
    InsertTable { rows: usize, cols: usize },
    RemoveFormat,
}

impl FormatCommand {
    /// Name of the equivalent browser editing command.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Italic => "italic",
            Self::Underline => "underline",
            Self::StrikeThrough => "strikeThrough",
            Self::FormatBlock(_) => "formatBlock",
            Self::InsertUnorderedList => "insertUnorderedList",
            Self::InsertOrderedList => "insertOrderedList",
            Self::CreateLink(_) => "createLink",
            Self::InsertImage(_) => "insertImage",
            Self::ForeColor(_) => "foreColor",
            Self::BackColor(_) => "hiliteColor",
            Self::InsertTable { .. } => "insertHTML",
            Self::RemoveFormat => "removeFormat",
        }
    }

    /// Argument passed alongside the command, if it takes one.
    pub fn value(&self) -> Option<String> {
        match self {
            Self::FormatBlock(tag) => Some(tag.tag().to_string()),
            Self::CreateLink(url) | Self::InsertImage(url) => Some(url.clone()),
            Self::ForeColor(color) | Self::BackColor(color) => Some(color.to_css()),
            Self::InsertTable { rows, cols } => Some(crate::table::table_html(*rows, *cols)),
            _ => None,
        }
    }

    /// Checks arguments before the command reaches the surface.
    ///
    /// # Errors
    ///
    /// Returns an error for out-of-range table dimensions.
    pub fn validate(&self) -> Result<()> {
        if let Self::InsertTable { rows, cols } = self {
            let range = MIN_TABLE_DIM..=MAX_TABLE_DIM;
            if !range.contains(rows) || !range.contains(cols) {
                bail!(
                    "table must be between {MIN_TABLE_DIM} and {MAX_TABLE_DIM} rows and columns, got {rows}x{cols}"
                );
            }
        }
        Ok(())
    }

    /// Whether the command carries a URL that was left blank.
    ///
    /// A blank URL means the user dismissed the prompt; the shell treats it
    /// as a no-op.
    pub fn has_blank_url(&self) -> bool {
        matches!(self, Self::CreateLink(url) | Self::InsertImage(url) if url.trim().is_empty())
    }
}

impl fmt::Display for FormatCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            Some(v) if !matches!(self, Self::InsertTable { .. }) => {
                write!(f, "{}({v})", self.name())
            }
            _ => f.write_str(self.name()),
        }
    }
}
