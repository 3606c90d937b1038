//! # Editing
//!
//! Turns text edits into line-granular [`EditDelta`]s and owns the
//! per-document session state they are applied to.
//!
//! - **`delta`**: `EditDelta`, `TextChange`, the `EditSequencer` and `EditError`
//! - **`session`**: `DocumentSession` (rope buffer + annotation tracker) and the
//!   `Workspace` controller that opens and closes sessions
//! - **`patch`**: result of one applied edit
//!
//! ## Usage Pattern
//!
//! ```rust
//! use markdown_wysiwym_engine::annotations::LineRange;
//! use markdown_wysiwym_engine::editing::Workspace;
//! use markdown_wysiwym_engine::persistence::DocumentMetadata;
//! use relative_path::RelativePathBuf;
//!
//! let mut workspace = Workspace::default();
//! let id = workspace.open(
//!     RelativePathBuf::from("note.md"),
//!     "# Notes\npasted\n",
//!     &DocumentMetadata::default(),
//! );
//!
//! let session = workspace.get_mut(id).unwrap();
//! session.tag_external(LineRange::single(1));
//! session.apply_edit(0..0, "new first line\n").unwrap();
//! assert!(session.is_external(2));
//!
//! let metadata = workspace.close(id).unwrap();
//! assert_eq!(metadata.external.len(), 1);
//! ```

pub mod delta;
pub mod patch;
pub mod session;

pub use delta::{EditDelta, EditError, EditSequencer, TextChange};
pub use patch::Patch;
pub use session::{DocumentId, DocumentSession, SessionError, Workspace};
