#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceSig {
    Backticks,
    Tildes,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    /// Detects a fence delimiter: three or more of the same fence character
    /// at the very start of the line.
    pub fn sig(line: &str) -> Option<FenceSig> {
        if line.starts_with(Self::BACKTICKS) {
            Some(FenceSig::Backticks)
        } else if line.starts_with(Self::TILDES) {
            Some(FenceSig::Tildes)
        } else {
            None
        }
    }
}
