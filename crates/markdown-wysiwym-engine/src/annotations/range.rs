use std::ops::RangeInclusive;

/// An inclusive, 0-indexed range of lines.
///
/// Always satisfies `start <= end`; constructors reject anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineRange {
    pub start: usize,
    pub end: usize,
}

impl LineRange {
    /// Returns `None` when `start > end`.
    pub fn new(start: usize, end: usize) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    pub fn single(line: usize) -> Self {
        Self {
            start: line,
            end: line,
        }
    }

    /// Builds a range from signed bounds, as produced by edit arithmetic or
    /// read from untrusted metadata. Negative or inverted bounds yield `None`.
    pub fn from_signed(start: i64, end: i64) -> Option<Self> {
        let start = usize::try_from(start).ok()?;
        let end = usize::try_from(end).ok()?;
        Self::new(start, end)
    }

    /// Builds a range spanning both lines, in either order.
    pub fn spanning(a: usize, b: usize) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    #[must_use]
    pub fn contains(&self, line: usize) -> bool {
        self.start <= line && line <= self.end
    }

    /// Number of lines covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// True when the two ranges overlap or leave no untagged line between them.
    #[must_use]
    pub fn touches(&self, other: &LineRange) -> bool {
        other.start <= self.end.saturating_add(1) && self.start <= other.end.saturating_add(1)
    }

    pub fn lines(&self) -> RangeInclusive<usize> {
        self.start..=self.end
    }
}
