//! # Block Scanning
//!
//! Line-level half of the span parser.
//!
//! ## Phases
//!
//! 1. **Fence state** (`fence`): a two-state machine (`Normal`, `InFencedBlock`)
//!    decides whether a line is a fence delimiter, raw block content, or markup
//! 2. **Container classification** (`classify`): markup lines are matched against
//!    container patterns in priority order (heading, rule, blockquote, task, list)
//!
//! ## Modules
//!
//! - **`kinds`**: Block-specific types with owned delimiters (Heading, Rule, BlockQuote, ListItem, CodeFence)
//! - **`fence`**: `FenceState` transition function and `LineRole`
//! - **`classify`**: `MarkdownLineClassifier` produces a `ContainerMatch` per line
//!
//! ## Key Invariants
//!
//! - Fenced blocks are raw zones: no container or inline matching inside
//! - Exactly one container matches per markup line

pub mod classify;
pub mod fence;
pub mod kinds;

pub use classify::{ContainerMatch, MarkdownLineClassifier};
pub use fence::{FenceState, LineRole};
