use std::ops::Range;

/// Which higher-priority construct claimed a column range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Claim {
    /// A whole `[text](url)` construct.
    Link,
    /// A surviving bold match.
    Strong,
}

/// Column ranges of one line already claimed by higher-priority constructs.
#[derive(Debug, Default, Clone)]
pub struct ExclusionSet {
    claimed: Vec<(Claim, Range<usize>)>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn claim(&mut self, by: Claim, range: Range<usize>) {
        self.claimed.push((by, range));
    }

    /// True if `range` shares at least one column with a range claimed by
    /// any of `layers`.
    pub fn intersects(&self, range: &Range<usize>, layers: &[Claim]) -> bool {
        self.claimed.iter().any(|(by, claimed)| {
            layers.contains(by) && range.start < claimed.end && claimed.start < range.end
        })
    }
}
