use log::debug;

use crate::editing::EditDelta;

use super::{range::LineRange, set::AnnotationSet};

/// Where an edit falls relative to one tagged range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditPlacement {
    After,
    Before,
    Covering,
    Interior,
    LeadingBoundary,
    TrailingBoundary,
}

impl EditPlacement {
    /// Classifies `delta` against `range`, first matching rule wins.
    pub fn of(range: LineRange, delta: &EditDelta) -> Self {
        let (es, ee) = (delta.start_line, delta.end_line_exclusive);
        if es > range.end {
            EditPlacement::After
        } else if ee <= range.start {
            EditPlacement::Before
        } else if es <= range.start && ee > range.end {
            EditPlacement::Covering
        } else if es >= range.start && ee <= range.end {
            EditPlacement::Interior
        } else if es < range.start {
            EditPlacement::LeadingBoundary
        } else {
            EditPlacement::TrailingBoundary
        }
    }
}

/// Moves one range through an edit. `None` means the range is gone.
///
/// An edit that keeps the line count (`d == 0`) maps lines one to one, so
/// every range keeps its bounds whatever its placement.
pub fn adjust_range(range: LineRange, delta: &EditDelta) -> Option<LineRange> {
    let d = delta.net_change();
    if d == 0 {
        return Some(range);
    }
    let (start, end) = (range.start as i64, range.end as i64);
    let (start, end) = match EditPlacement::of(range, delta) {
        EditPlacement::After => (start, end),
        EditPlacement::Before => (start + d, end + d),
        EditPlacement::Covering => return None,
        EditPlacement::Interior => (start, end + d),
        EditPlacement::LeadingBoundary => (
            delta.start_line as i64 + delta.inserted_line_count as i64,
            end + d,
        ),
        EditPlacement::TrailingBoundary => (start, delta.start_line as i64),
    };
    LineRange::from_signed(start, end)
}

impl AnnotationSet {
    /// Adjusts every range for one edit, then re-merges.
    ///
    /// Edits must be applied exactly once and in delivery order.
    pub fn adjust_for_edit(&mut self, delta: &EditDelta) {
        let before = self.len();
        let adjusted: Vec<LineRange> = self
            .iter()
            .filter_map(|&r| adjust_range(r, delta))
            .collect();
        self.replace_all(adjusted);
        debug!(
            "Adjusted {before} range(s) for edit {}..{} (+{} lines), {} remain",
            delta.start_line,
            delta.end_line_exclusive,
            delta.inserted_line_count,
            self.len()
        );
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

    #[rstest]
    #[case::after(r(2, 5), EditDelta::new(6, 8, 0), EditPlacement::After)]
    #[case::before(r(2, 5), EditDelta::new(0, 2, 0), EditPlacement::Before)]
    #[case::covering(r(2, 5), EditDelta::new(1, 6, 0), EditPlacement::Covering)]
    #[case::interior(r(2, 5), EditDelta::new(3, 4, 0), EditPlacement::Interior)]
    #[case::leading(r(2, 5), EditDelta::new(1, 3, 0), EditPlacement::LeadingBoundary)]
    #[case::trailing(r(2, 5), EditDelta::new(4, 7, 0), EditPlacement::TrailingBoundary)]
    fn placement(#[case] range: LineRange, #[case] delta: EditDelta, #[case] expected: EditPlacement) {
        assert_eq!(EditPlacement::of(range, &delta), expected);
    }

    #[rstest]
    #[case::edit_after_is_ignored(r(2, 5), EditDelta::new(7, 9, 4), Some(r(2, 5)))]
    #[case::insert_before_shifts_down(r(2, 5), EditDelta::new(0, 0, 3), Some(r(5, 8)))]
    #[case::delete_before_shifts_up(r(4, 6), EditDelta::new(0, 2, 0), Some(r(2, 4)))]
    #[case::covering_edit_drops(r(2, 5), EditDelta::new(1, 6, 1), None)]
    #[case::interior_shrink(r(0, 5), EditDelta::new(1, 4, 0), Some(r(0, 2)))]
    #[case::interior_grow(r(0, 5), EditDelta::new(2, 2, 2), Some(r(0, 7)))]
    #[case::leading_overlap(r(3, 8), EditDelta::new(1, 4, 1), Some(r(2, 6)))]
    #[case::trailing_overlap(r(3, 8), EditDelta::new(6, 10, 0), Some(r(3, 6)))]
    #[case::joining_last_two_lines(r(2, 3), EditDelta::new(2, 3, 0), Some(r(2, 2)))]
    #[case::newline_on_first_line_shifts(r(2, 5), EditDelta::new(2, 2, 1), Some(r(3, 6)))]
    fn adjusts_single_range(
        #[case] range: LineRange,
        #[case] delta: EditDelta,
        #[case] expected: Option<LineRange>,
    ) {
        assert_eq!(adjust_range(range, &delta), expected);
    }

    #[test]
    fn zero_delta_edits_leave_ranges_alone() {
        let mut set = AnnotationSet::new();
        set.add(r(2, 4));
        set.add(r(8, 12));
        let before = set.clone();

        for delta in [
            EditDelta::new(0, 1, 1),
            EditDelta::new(3, 3, 0),
            EditDelta::new(9, 11, 2),
            EditDelta::new(14, 20, 6),
        ] {
            set.adjust_for_edit(&delta);
            assert_eq!(set, before, "edit {delta:?}");
        }
    }

    #[rstest]
    #[case::leading_boundary(EditDelta::new(1, 3, 2))]
    #[case::trailing_boundary(EditDelta::new(3, 6, 3))]
    #[case::covering(EditDelta::new(1, 6, 5))]
    #[case::exact_lines(EditDelta::new(2, 4, 2))]
    fn zero_delta_edits_across_boundaries_keep_bounds(#[case] delta: EditDelta) {
        assert_ne!(EditPlacement::of(r(2, 4), &delta), EditPlacement::Before);
        assert_eq!(adjust_range(r(2, 4), &delta), Some(r(2, 4)));

        let mut set = AnnotationSet::new();
        set.add(r(2, 4));
        set.adjust_for_edit(&delta);
        assert_eq!(set.ranges(), &[r(2, 4)]);
    }

    #[test]
    fn ranges_pushed_together_merge() {
        let mut set = AnnotationSet::new();
        set.add(r(0, 2));
        set.add(r(6, 8));
        // Delete lines 3..5 between them.
        set.adjust_for_edit(&EditDelta::new(3, 6, 0));
        assert_eq!(set.ranges(), &[r(0, 5)]);
    }
}
