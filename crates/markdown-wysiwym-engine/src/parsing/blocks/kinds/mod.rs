pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod list;
pub mod rule;

pub use block_quote::BlockQuote;
pub use code_fence::{CodeFence, FenceSig};
pub use heading::Heading;
pub use list::ListItem;
pub use rule::Rule;
