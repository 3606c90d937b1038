//! # Inline Kinds
//!
//! One matcher per inline construct, each owning its delimiter syntax.
//!
//! ## Types
//!
//! - **`Link`**: `[text](url)`
//! - **`Bold`**, **`Italic`**, **`Strike`**, **`Underline`**: emphasis-like delimiters
//! - **`CodeSpan`**: single-backtick code
//! - **`TaskMetadata`**: calendar/recurrence glyphs and their payloads
//!
//! ## Design Principle
//!
//! Matchers are pure and know nothing about each other. Priority and
//! exclusion between constructs live in the pipeline (`inline::parser`),
//! which hands each matcher the ranges it must avoid.

pub mod code_span;
pub mod emphasis;
pub mod link;
pub mod metadata;

pub use code_span::CodeSpan;
pub use emphasis::{Bold, Italic, Strike, Underline};
pub use link::Link;
pub use metadata::{METADATA_GLYPHS, TaskMetadata};
