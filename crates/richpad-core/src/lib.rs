//! Headless rich-text editor core.
//!
//! An [`EditorShell`] attaches to a plain input ([`MirrorTarget`]), renders
//! into an [`EditableSurface`], and keeps a bounded snapshot history for
//! undo/redo. The surface and mirror are host-provided; [`memory`] has
//! string-backed versions of both.

pub mod command;
pub mod history;
pub mod memory;
pub mod shell;
pub mod surface;
pub mod table;
pub mod toolbar;

pub use command::{BlockTag, FormatCommand};
pub use memory::{MemoryMirror, MemorySurface};
pub use shell::{EditorShell, ViewMode};
pub use surface::{EditableSurface, MirrorTarget, SelectionRange};
pub use toolbar::{Tool, ToolAction, Toolbar};
