pub mod annotations;
pub mod editing;
pub mod io;
pub mod parsing;
pub mod persistence;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use annotations::{AnnotationSet, AnnotationTracker, LineRange};
pub use editing::{
    DocumentId, DocumentSession, EditDelta, EditError, EditSequencer, Patch, SessionError,
    TextChange, Workspace,
};
pub use io::*;
pub use parsing::{ParserOptions, ScanOutcome, SpanGroup, SpanKind, SpanParser, StyledSpan, parse};
pub use persistence::{DocumentMetadata, MetadataError, PersistedRange};
pub use render::{RenderSink, group_by_kind, render_into};
