//! Layer 1: Notes
//!
//! Multiple independently edited notes on top of the text model.
//!
//! ## Modules
//!
//! - `collection`: Ordered notes and the active index
//! - `editor`: The style-aware engine driving text input and formatting commands
//! - `events`: Change notification (observers + version counter)
//! - `snapshot`: Serializable read-side view

pub mod collection;
pub mod editor;
pub mod events;
pub mod snapshot;

pub use collection::{Note, NoteCollection};
pub use editor::{FormattingState, NotesEditor, UpdateOutcome};
pub use events::{EditorEvent, SubscriptionId};
pub use snapshot::{EditorSnapshot, NoteSummary};
