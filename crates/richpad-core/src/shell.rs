//! Editor shell tying the surface, the mirrored input, and history together.
//!
//! The shell reacts to host events (toolbar clicks, input, timer ticks) on a
//! single thread. Every content change is mirrored into the plain input;
//! commands commit a snapshot immediately, typing commits once the debounce
//! quiet period has passed.

use std::time::Instant;

use anyhow::{bail, Context, Result};
use richpad_config::{EditorConfig, ResolvedTheme};

use crate::command::FormatCommand;
use crate::history::{Debouncer, Snapshot, SnapshotHistory};
use crate::surface::{EditableSurface, MirrorTarget, SelectionRange};
use crate::toolbar::{ToolAction, Toolbar};

/// Which view of the content is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// The rendered, editable surface.
    #[default]
    Visual,
    /// Raw HTML in a plain text buffer.
    Code,
}

type ChangeCallback = Box<dyn FnMut(&str)>;

/// One editor instance.
pub struct EditorShell<S: EditableSurface, M: MirrorTarget> {
    surface: S,
    mirror: M,
    config: EditorConfig,
    theme: ResolvedTheme,
    toolbar: Toolbar,
    history: SnapshotHistory,
    /// Pending snapshot from free typing.
    typing: Debouncer<Snapshot>,
    /// Selection kept while a toolbar dialog has focus.
    saved_selection: Option<SelectionRange>,
    mode: ViewMode,
    /// Raw HTML buffer used in code view.
    code: String,
    on_change: Option<ChangeCallback>,
}

impl<S: EditableSurface, M: MirrorTarget> std::fmt::Debug for EditorShell<S, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorShell")
            .field("mode", &self.mode)
            .field("theme", &self.theme)
            .field("toolbar_len", &self.toolbar.len())
            .field("history", &self.history)
            .field("typing_pending", &self.typing.is_pending())
            .field("saved_selection", &self.saved_selection)
            .finish()
    }
}

impl<S: EditableSurface, M: MirrorTarget> EditorShell<S, M> {
    /// Attaches an editor to `mirror`.
    ///
    /// The mirror's current value becomes the initial content and the first
    /// history snapshot. The mirror is hidden while the editor is attached.
    pub fn new(mut surface: S, mut mirror: M, config: EditorConfig) -> Self {
        let initial = mirror.value();
        surface.set_html(&initial);
        surface.set_visible(true);
        mirror.set_visible(false);

        let history_config = config.history_config();
        let mut history = SnapshotHistory::new(&history_config);
        history.record(initial.as_str());

        let theme = config.theme.resolve();
        let toolbar = Toolbar::from_names(config.toolbar.as_slice());
        tracing::debug!(
            theme = theme.as_str(),
            tools = toolbar.len(),
            capacity = history.capacity(),
            "Editor attached"
        );

        Self {
            surface,
            mirror,
            config,
            theme,
            toolbar,
            history,
            typing: Debouncer::new(history_config.debounce()),
            saved_selection: None,
            mode: ViewMode::Visual,
            code: String::new(),
            on_change: None,
        }
    }

    /// Registers a callback invoked with the content after every change.
    pub fn on_change(&mut self, callback: impl FnMut(&str) + 'static) {
        self.on_change = Some(Box::new(callback));
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn theme(&self) -> ResolvedTheme {
        self.theme
    }

    pub fn toolbar(&self) -> &Toolbar {
        &self.toolbar
    }

    pub fn history(&self) -> &SnapshotHistory {
        &self.history
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access for the host to deliver raw input to the surface.
    ///
    /// Follow up with [`on_input`](Self::on_input) so the change is mirrored
    /// and scheduled for history.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn mirror(&self) -> &M {
        &self.mirror
    }

    /// Current content of the surface as HTML.
    pub fn content(&self) -> String {
        self.surface.html()
    }

    /// Whether the placeholder should be shown.
    pub fn is_empty(&self) -> bool {
        self.surface.html().trim().is_empty()
    }

    pub fn placeholder(&self) -> &str {
        &self.config.placeholder
    }

    /// Replaces the content and commits it.
    pub fn set_content(&mut self, html: &str) {
        self.commit_pending_typing();
        self.surface.set_html(html);
        if self.mode == ViewMode::Code {
            self.code = html.to_string();
        }
        self.sync_mirror();
        self.history.record(html);
        self.notify();
    }

    /// Empties the content and commits it.
    pub fn clear(&mut self) {
        self.set_content("");
    }

    /// Runs a formatting command against the current selection.
    ///
    /// Any pending typing snapshot is committed first so the command gets
    /// its own undo step. Returns whether the surface applied the command.
    ///
    /// # Errors
    ///
    /// Returns an error if the command's arguments are invalid or the editor
    /// is in code view.
    pub fn execute(&mut self, command: FormatCommand) -> Result<bool> {
        command
            .validate()
            .with_context(|| format!("Cannot run {}", command.name()))?;
        if self.mode == ViewMode::Code {
            bail!("Cannot run {} while code view is active", command.name());
        }
        if command.has_blank_url() {
            tracing::debug!("Skipping {} with no URL", command.name());
            self.saved_selection = None;
            return Ok(false);
        }

        self.commit_pending_typing();
        self.surface.focus();
        if let Some(range) = self.saved_selection.take() {
            self.surface.restore_selection(range);
        }

        let applied = self.surface.exec(&command);
        tracing::debug!(command = %command, applied, "Executed command");
        if applied {
            self.sync_mirror();
            self.history.record(self.surface.html());
            self.notify();
        }
        Ok(applied)
    }

    /// Activates a toolbar tool by name.
    ///
    /// Tools that need more input (menus, prompts, pickers, the table
    /// dialog) save the selection and return `Ok(false)`; the host then
    /// calls [`execute`](Self::execute) with the completed command.
    ///
    /// # Errors
    ///
    /// Returns an error if the tool is not on this editor's toolbar, or if
    /// the command it runs fails.
    pub fn trigger(&mut self, name: &str) -> Result<bool> {
        let Some(tool) = self.toolbar.get(name) else {
            bail!("Tool '{name}' is not on the toolbar");
        };
        match tool.action.clone() {
            ToolAction::Command(command) => self.execute(command),
            ToolAction::Undo => Ok(self.undo()),
            ToolAction::Redo => Ok(self.redo()),
            ToolAction::ToggleCodeView => {
                self.toggle_code_view();
                Ok(true)
            }
            ToolAction::Dropdown(_)
            | ToolAction::PromptUrl(_)
            | ToolAction::ColorPicker(_)
            | ToolAction::TableDialog => {
                self.save_selection();
                Ok(false)
            }
        }
    }

    /// Handles raw input on the surface.
    ///
    /// Mirrors the content right away and (re)starts the debounce timer for
    /// the history snapshot.
    pub fn on_input(&mut self, now: Instant) {
        let html = self.surface.html();
        self.mirror.set_value(&html);
        self.typing.schedule(Snapshot::from(html), now);
        self.notify();
    }

    /// Commits pending typing once its quiet period has elapsed.
    ///
    /// Returns whether a snapshot was committed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.typing.poll(now) {
            Some(snapshot) => {
                tracing::trace!(len = snapshot.len(), "Committing typed snapshot");
                self.history.record(snapshot);
                true
            }
            None => false,
        }
    }

    /// Deadline of the pending typing snapshot, for scheduling the next tick.
    pub fn next_tick(&self) -> Option<Instant> {
        self.typing.deadline()
    }

    /// Steps back one snapshot. Returns whether the content changed.
    ///
    /// In code view an edited code buffer is committed first, so the step
    /// back lands on the HTML as it was before the edit.
    pub fn undo(&mut self) -> bool {
        self.commit_pending_typing();
        self.commit_code_buffer();
        match self.history.undo() {
            Some(snapshot) => {
                self.apply(&snapshot);
                true
            }
            None => false,
        }
    }

    /// Steps forward one snapshot. Returns whether the content changed.
    pub fn redo(&mut self) -> bool {
        self.commit_pending_typing();
        self.commit_code_buffer();
        match self.history.redo() {
            Some(snapshot) => {
                self.apply(&snapshot);
                true
            }
            None => false,
        }
    }

    /// Remembers the surface selection before focus moves to a dialog.
    pub fn save_selection(&mut self) {
        self.saved_selection = self.surface.save_selection();
    }

    /// Puts the saved selection back. Returns whether one was saved.
    pub fn restore_selection(&mut self) -> bool {
        match self.saved_selection.take() {
            Some(range) => {
                self.surface.focus();
                self.surface.restore_selection(range);
                true
            }
            None => false,
        }
    }

    /// Switches between the rendered surface and raw HTML.
    ///
    /// Leaving code view loads the edited HTML back into the surface and
    /// commits it. Viewing the code without editing it commits nothing.
    /// Returns the new mode.
    pub fn toggle_code_view(&mut self) -> ViewMode {
        self.commit_pending_typing();
        match self.mode {
            ViewMode::Visual => {
                self.code = self.surface.html();
                self.surface.set_visible(false);
                self.mode = ViewMode::Code;
            }
            ViewMode::Code => {
                self.commit_code_buffer();
                self.code.clear();
                self.surface.set_visible(true);
                self.mode = ViewMode::Visual;
            }
        }
        tracing::debug!(mode = ?self.mode, "Toggled view");
        self.mode
    }

    /// Raw HTML shown in code view.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Edits the raw HTML buffer.
    ///
    /// # Errors
    ///
    /// Returns an error outside code view.
    pub fn set_code(&mut self, html: &str) -> Result<()> {
        if self.mode != ViewMode::Code {
            bail!("Code view is not active");
        }
        self.code = html.to_string();
        Ok(())
    }

    /// Detaches the editor and shows the plain input again.
    ///
    /// Pending typing is mirrored already; it is not committed since the
    /// history is dropped with the editor.
    pub fn destroy(mut self) -> (S, M) {
        if self.mode == ViewMode::Code {
            self.toggle_code_view();
        }
        self.mirror.set_visible(true);
        tracing::debug!("Editor detached");
        (self.surface, self.mirror)
    }

    fn commit_pending_typing(&mut self) {
        if let Some(snapshot) = self.typing.flush() {
            self.history.record(snapshot);
        }
    }

    /// Loads an edited code buffer into the surface and records it.
    fn commit_code_buffer(&mut self) {
        if self.mode != ViewMode::Code || self.code == self.surface.html() {
            return;
        }
        self.surface.set_html(&self.code);
        self.sync_mirror();
        self.history.record(self.code.as_str());
        self.notify();
    }

    fn apply(&mut self, snapshot: &Snapshot) {
        self.surface.set_html(snapshot.as_str());
        if self.mode == ViewMode::Code {
            self.code = snapshot.to_string();
        }
        self.mirror.set_value(snapshot.as_str());
        self.notify();
    }

    fn sync_mirror(&mut self) {
        let html = self.surface.html();
        self.mirror.set_value(&html);
    }

    fn notify(&mut self) {
        if let Some(callback) = self.on_change.as_mut() {
            let html = self.surface.html();
            callback(&html);
        }
    }
}
