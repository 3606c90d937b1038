//! # Annotation Ranges
//!
//! Persistent line ranges tagging externally authored content, kept correct
//! as the document is edited.
//!
//! - **`range`**: `LineRange`, an inclusive line interval
//! - **`set`**: `AnnotationSet`, the sorted and separated range set, plus `merge`
//! - **`adjust`**: moving ranges through an `EditDelta`
//! - **`tracker`**: `AnnotationTracker`, a set fed by sequenced notifications
//!
//! The set is never re-derived from document content; it is only ever
//! transformed by tag/untag commands and by edits.

pub mod adjust;
pub mod range;
pub mod set;
pub mod tracker;

pub use adjust::{EditPlacement, adjust_range};
pub use range::LineRange;
pub use set::{AnnotationSet, merge};
pub use tracker::AnnotationTracker;
