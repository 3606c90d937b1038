//! # Inline Matching
//!
//! Pattern matching over the inline portion of one markup line.
//!
//! ## Architecture
//!
//! Inline matching is an explicit ordered pipeline of pure matchers
//! (`line -> matches`). Each stage may respect ranges claimed by earlier
//! stages and may claim its own surviving ranges:
//!
//! | stage | respects | claims |
//! |-------|----------|--------|
//! | link | | `Link` |
//! | bold | `Link` | `Strong` |
//! | italic | `Link`, `Strong` | |
//! | strikethrough, underline, code | | |
//! | task metadata | | |
//!
//! ## Modules
//!
//! - **`types`**: `InlineMatch` and the `Delimited` construct kinds
//! - **`matcher`**: the `InlineMatcher` trait
//! - **`exclusion`**: `ExclusionSet` of claimed column ranges
//! - **`kinds`**: one matcher per construct
//! - **`parser`**: `InlinePipeline` and its `Stage`s

pub mod exclusion;
pub mod kinds;
pub mod matcher;
pub mod parser;
pub mod types;

pub use exclusion::{Claim, ExclusionSet};
pub use matcher::InlineMatcher;
pub use parser::{InlinePipeline, Stage};
pub use types::{Delimited, InlineMatch};
