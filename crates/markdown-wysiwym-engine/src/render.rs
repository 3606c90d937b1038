use std::collections::BTreeMap;

use crate::parsing::{SpanKind, StyledSpan};

/// Receives spans grouped by kind and applies a visual treatment to each
/// group. How the treatment is realized is up to the implementation.
pub trait RenderSink {
    fn apply(&mut self, kind: SpanKind, spans: &[StyledSpan]);
}

/// Groups spans by kind, keeping document order within each group.
pub fn group_by_kind(spans: &[StyledSpan]) -> BTreeMap<SpanKind, Vec<StyledSpan>> {
    let mut groups: BTreeMap<SpanKind, Vec<StyledSpan>> = BTreeMap::new();
    for span in spans {
        groups.entry(span.kind).or_default().push(span.clone());
    }
    groups
}

/// Feeds `spans` to `sink`, one call per kind in ascending kind order.
pub fn render_into<S: RenderSink + ?Sized>(sink: &mut S, spans: &[StyledSpan]) {
    for (kind, group) in group_by_kind(spans) {
        sink.apply(kind, &group);
    }
}
