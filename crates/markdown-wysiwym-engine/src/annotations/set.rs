use log::{debug, warn};

use super::range::LineRange;

/// Sorted, disjoint line ranges with at least one untagged line between
/// neighbours.
///
/// Every mutation re-establishes the invariant, so readers can rely on
/// `ranges()` being ordered by `start` and binary-searchable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnnotationSet {
    ranges: Vec<LineRange>,
}

/// Sorts `ranges` and coalesces every pair that overlaps or is adjacent
/// (`next.start <= end + 1`).
pub fn merge(mut ranges: Vec<LineRange>) -> Vec<LineRange> {
    ranges.sort();
    let mut merged: Vec<LineRange> = Vec::with_capacity(ranges.len());
    for range in ranges {
        match merged.last_mut() {
            Some(last) if range.start <= last.end.saturating_add(1) => {
                last.end = last.end.max(range.end);
            }
            _ => merged.push(range),
        }
    }
    merged
}

impl AnnotationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a normalized set from untrusted `(start, end)` pairs.
    ///
    /// Pairs with a negative start or `start > end` are dropped.
    pub fn from_ranges<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        let ranges = pairs
            .into_iter()
            .filter_map(|(start, end)| {
                let range = LineRange::from_signed(start, end);
                if range.is_none() {
                    warn!("Discarding invalid line range {start}..={end}");
                }
                range
            })
            .collect();
        Self {
            ranges: merge(ranges),
        }
    }

    /// Tags `range`, coalescing it with any range it overlaps or touches.
    pub fn add(&mut self, range: LineRange) {
        debug!("Adding line range {}..={}", range.start, range.end);
        self.ranges.push(range);
        self.ranges = merge(std::mem::take(&mut self.ranges));
    }

    /// Untags `range`, trimming or splitting the ranges it intersects.
    pub fn remove(&mut self, range: LineRange) {
        debug!("Removing line range {}..={}", range.start, range.end);
        let mut kept = Vec::with_capacity(self.ranges.len() + 1);
        for r in self.ranges.drain(..) {
            if r.end < range.start || r.start > range.end {
                kept.push(r);
                continue;
            }
            if r.start < range.start {
                kept.push(LineRange {
                    start: r.start,
                    end: range.start - 1,
                });
            }
            if r.end > range.end {
                kept.push(LineRange {
                    start: range.end + 1,
                    end: r.end,
                });
            }
        }
        self.ranges = kept;
    }

    /// True when `line` falls inside a tagged range.
    #[must_use]
    pub fn query(&self, line: usize) -> bool {
        let idx = self.ranges.partition_point(|r| r.start <= line);
        idx > 0 && self.ranges[idx - 1].end >= line
    }

    pub fn ranges(&self) -> &[LineRange] {
        &self.ranges
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LineRange> {
        self.ranges.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Total number of tagged lines.
    #[must_use]
    pub fn covered_lines(&self) -> usize {
        self.ranges.iter().map(LineRange::len).sum()
    }

    pub(crate) fn replace_all(&mut self, ranges: Vec<LineRange>) {
        self.ranges = merge(ranges);
    }
}

impl<'a> IntoIterator for &'a AnnotationSet {
    type Item = &'a LineRange;
    type IntoIter = std::slice::Iter<'a, LineRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn r(start: usize, end: usize) -> LineRange {
        LineRange { start, end }
    }

    fn set(ranges: &[(usize, usize)]) -> AnnotationSet {
        let mut set = AnnotationSet::new();
        for &(start, end) in ranges {
            set.add(r(start, end));
        }
        set
    }

    #[test]
    fn adjacent_ranges_merge() {
        let mut s = set(&[(0, 2)]);
        s.add(r(3, 5));
        assert_eq!(s.ranges(), &[r(0, 5)]);
    }

    #[test]
    fn ranges_separated_by_one_line_stay_apart() {
        let s = set(&[(0, 2), (4, 5)]);
        assert_eq!(s.ranges(), &[r(0, 2), r(4, 5)]);
    }

    #[test]
    fn adding_contained_range_is_a_no_op() {
        let mut s = set(&[(2, 8), (12, 14)]);
        let before = s.clone();
        s.add(r(3, 6));
        s.add(r(12, 12));
        assert_eq!(s, before);
    }

    #[test]
    fn add_bridges_several_ranges() {
        let mut s = set(&[(0, 1), (4, 5), (8, 9)]);
        s.add(r(2, 7));
        assert_eq!(s.ranges(), &[r(0, 9)]);
    }

    #[test]
    fn add_keeps_ranges_sorted() {
        let s = set(&[(20, 21), (0, 1), (10, 12)]);
        assert_eq!(s.ranges(), &[r(0, 1), r(10, 12), r(20, 21)]);
    }

    #[test]
    fn remove_splits_containing_range() {
        let mut s = set(&[(0, 10)]);
        s.remove(r(4, 4));
        assert_eq!(s.ranges(), &[r(0, 3), r(5, 10)]);

        let mut rebuilt = s.clone();
        rebuilt.add(r(4, 4));
        assert_eq!(rebuilt.ranges(), &[r(0, 10)]);
    }

    #[rstest]
    #[case::wholly_inside((3, 5), (0, 10), vec![])]
    #[case::leading_boundary((3, 8), (0, 5), vec![(6, 8)])]
    #[case::trailing_boundary((3, 8), (6, 12), vec![(3, 5)])]
    #[case::disjoint((3, 8), (10, 12), vec![(3, 8)])]
    #[case::exact((3, 8), (3, 8), vec![])]
    fn remove_trims(
        #[case] existing: (usize, usize),
        #[case] removed: (usize, usize),
        #[case] expected: Vec<(usize, usize)>,
    ) {
        let mut s = set(&[existing]);
        s.remove(r(removed.0, removed.1));
        let expected: Vec<LineRange> = expected.into_iter().map(|(a, b)| r(a, b)).collect();
        assert_eq!(s.ranges(), expected.as_slice());
    }

    #[test]
    fn remove_spanning_several_ranges() {
        let mut s = set(&[(0, 2), (5, 7), (10, 12)]);
        s.remove(r(1, 11));
        assert_eq!(s.ranges(), &[r(0, 0), r(12, 12)]);
    }

    #[test]
    fn merge_is_idempotent() {
        let raw = vec![r(9, 9), r(0, 2), r(3, 4), r(6, 7), r(1, 1), r(12, 20)];
        let once = merge(raw);
        assert_eq!(merge(once.clone()), once);
        assert_eq!(once, vec![r(0, 4), r(6, 7), r(9, 9), r(12, 20)]);
    }

    #[rstest]
    #[case(0, true)]
    #[case(2, true)]
    #[case(3, false)]
    #[case(5, true)]
    #[case(7, true)]
    #[case(8, false)]
    #[case(100, false)]
    fn query_uses_sorted_ranges(#[case] line: usize, #[case] expected: bool) {
        let s = set(&[(0, 2), (5, 7)]);
        assert_eq!(s.query(line), expected);
    }

    #[test]
    fn query_on_empty_set() {
        assert!(!AnnotationSet::new().query(0));
    }

    #[test]
    fn from_ranges_drops_invalid_pairs() {
        let s = AnnotationSet::from_ranges([(4, 2), (-1, 3), (0, 1), (2, 3), (8, 8)]);
        assert_eq!(s.ranges(), &[r(0, 3), r(8, 8)]);
        assert_eq!(s.covered_lines(), 5);
    }
}
