/// Toolbar model: which tools exist and what each one triggers.
///
/// Rendering is left to the host; this module only decides the tool list
/// from the configured names.
use richpad_config::HexColor;

use crate::command::{BlockTag, FormatCommand};

/// What activating a tool does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolAction {
    /// Runs a formatting command directly.
    Command(FormatCommand),
    /// Prompts for a URL, then builds the command from it.
    PromptUrl(fn(String) -> FormatCommand),
    /// Opens a menu of commands.
    Dropdown(Vec<MenuItem>),
    /// Opens a colour picker; the chosen colour builds the command.
    ColorPicker(fn(HexColor) -> FormatCommand),
    /// Opens the rows/columns dialog for a table.
    TableDialog,
    Undo,
    Redo,
    /// Switches between the rendered surface and raw HTML.
    ToggleCodeView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: &'static str,
    pub command: FormatCommand,
}

/// A single toolbar entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tool {
    pub name: &'static str,
    pub icon: &'static str,
    pub title: &'static str,
    pub action: ToolAction,
}

/// Names accepted in the `toolbar` config list.
pub const TOOL_NAMES: [&str; 15] = [
    "bold",
    "italic",
    "underline",
    "strike",
    "heading",
    "list",
    "link",
    "image",
    "forecolor",
    "backcolor",
    "table",
    "removeformat",
    "undo",
    "redo",
    "code",
];

impl Tool {
    /// Looks up a tool by its config name.
    pub fn by_name(name: &str) -> Option<Tool> {
        let (name, icon, title, action) = match name {
            "bold" => ("bold", "B", "Bold", ToolAction::Command(FormatCommand::Bold)),
            "italic" => ("italic", "I", "Italic", ToolAction::Command(FormatCommand::Italic)),
            "underline" => (
                "underline",
                "U",
                "Underline",
                ToolAction::Command(FormatCommand::Underline),
            ),
            "strike" => (
                "strike",
                "S",
                "Strikethrough",
                ToolAction::Command(FormatCommand::StrikeThrough),
            ),
            "heading" => (
                "heading",
                "H",
                "Heading",
                ToolAction::Dropdown(
                    BlockTag::ALL
                        .iter()
                        .map(|&tag| MenuItem {
                            label: tag.label(),
                            command: FormatCommand::FormatBlock(tag),
                        })
                        .collect(),
                ),
            ),
            "list" => (
                "list",
                "≡",
                "List",
                ToolAction::Dropdown(vec![
                    MenuItem {
                        label: "Bullet List",
                        command: FormatCommand::InsertUnorderedList,
                    },
                    MenuItem {
                        label: "Numbered List",
                        command: FormatCommand::InsertOrderedList,
                    },
                ]),
            ),
            "link" => ("link", "🔗", "Link", ToolAction::PromptUrl(FormatCommand::CreateLink)),
            "image" => (
                "image",
                "🖼",
                "Image",
                ToolAction::PromptUrl(FormatCommand::InsertImage),
            ),
            "forecolor" => (
                "forecolor",
                "A",
                "Text Color",
                ToolAction::ColorPicker(FormatCommand::ForeColor),
            ),
            "backcolor" => (
                "backcolor",
                "▇",
                "Highlight Color",
                ToolAction::ColorPicker(FormatCommand::BackColor),
            ),
            "table" => ("table", "▦", "Insert Table", ToolAction::TableDialog),
            "removeformat" => (
                "removeformat",
                "Tx",
                "Clear Formatting",
                ToolAction::Command(FormatCommand::RemoveFormat),
            ),
            "undo" => ("undo", "↶", "Undo", ToolAction::Undo),
            "redo" => ("redo", "↷", "Redo", ToolAction::Redo),
            "code" => ("code", "</>", "Code View", ToolAction::ToggleCodeView),
            _ => return None,
        };
        Some(Tool {
            name,
            icon,
            title,
            action,
        })
    }

    /// Whether the host must keep the selection while a dialog is open.
    pub fn needs_saved_selection(&self) -> bool {
        matches!(
            self.action,
            ToolAction::Dropdown(_)
                | ToolAction::PromptUrl(_)
                | ToolAction::ColorPicker(_)
                | ToolAction::TableDialog
        )
    }
}

/// Ordered list of tools built from config.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Toolbar {
    tools: Vec<Tool>,
}

impl Toolbar {
    /// Builds the toolbar in the given order.
    ///
    /// Unknown names are skipped. A name listed twice only appears once.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        let mut tools: Vec<Tool> = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            if tools.iter().any(|t| t.name == name) {
                continue;
            }
            match Tool::by_name(name) {
                Some(tool) => tools.push(tool),
                None => tracing::debug!("Ignoring unknown toolbar entry '{name}'"),
            }
        }
        Self { tools }
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn get(&self, name: &str) -> Option<&Tool> {
        self.tools.iter().find(|t| t.name == name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
