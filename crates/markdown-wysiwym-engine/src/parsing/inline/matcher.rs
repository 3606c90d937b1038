use std::ops::Range;

use super::types::InlineMatch;

/// A pure pattern matcher for one inline construct.
///
/// Implementations return every non-overlapping occurrence in `line`, in
/// source order, with ranges local to `line`.
pub trait InlineMatcher: Send + Sync {
    fn find_all(&self, line: &str) -> Vec<InlineMatch>;

    /// Like [`find_all`](Self::find_all), but no match may cover a range for
    /// which `blocked` returns true.
    ///
    /// The default filters `find_all`. Scanning matchers override it so a
    /// rejected candidate does not consume delimiters a later match needs.
    fn find_all_avoiding(
        &self,
        line: &str,
        blocked: &dyn Fn(&Range<usize>) -> bool,
    ) -> Vec<InlineMatch> {
        self.find_all(line)
            .into_iter()
            .filter(|m| !blocked(&m.full()))
            .collect()
    }
}
