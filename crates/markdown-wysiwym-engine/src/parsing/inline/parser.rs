use crate::parsing::{options::ParserOptions, span::StyledSpan};

use super::{
    exclusion::{Claim, ExclusionSet},
    kinds::{Bold, CodeSpan, Italic, Link, Strike, TaskMetadata, Underline},
    matcher::InlineMatcher,
    types::InlineMatch,
};

/// One step of the inline pipeline.
pub struct Stage {
    matcher: Box<dyn InlineMatcher>,
    /// Matches intersecting ranges claimed by these layers are discarded.
    respects: &'static [Claim],
    /// Surviving matches claim their full range under this layer.
    claims: Option<Claim>,
}

impl Stage {
    pub fn new(matcher: impl InlineMatcher + 'static) -> Self {
        Self {
            matcher: Box::new(matcher),
            respects: &[],
            claims: None,
        }
    }

    pub fn respecting(mut self, layers: &'static [Claim]) -> Self {
        self.respects = layers;
        self
    }

    pub fn claiming(mut self, layer: Claim) -> Self {
        self.claims = Some(layer);
        self
    }
}

/// Ordered list of inline matchers with explicit exclusion rules.
pub struct InlinePipeline {
    stages: Vec<Stage>,
}

impl InlinePipeline {
    /// The standard pipeline.
    ///
    /// Links run first and claim their range; bold and italic skip anything a
    /// link claimed, and italic also skips surviving bold. Strikethrough,
    /// underline and code ignore links. Task metadata runs last, unfiltered.
    pub fn new(options: &ParserOptions) -> Self {
        Self::from_stages(vec![
            Stage::new(Link).claiming(Claim::Link),
            Stage::new(Bold)
                .respecting(&[Claim::Link])
                .claiming(Claim::Strong),
            Stage::new(Italic).respecting(&[Claim::Link, Claim::Strong]),
            Stage::new(Strike),
            Stage::new(Underline),
            Stage::new(CodeSpan),
            Stage::new(TaskMetadata::new(options)),
        ])
    }

    pub fn from_stages(stages: Vec<Stage>) -> Self {
        Self { stages }
    }

    /// Runs every stage over `text` and returns the surviving matches in
    /// stage order.
    pub fn matches(&self, text: &str) -> Vec<InlineMatch> {
        let mut exclusion = ExclusionSet::new();
        let mut out = Vec::new();

        for stage in &self.stages {
            let found = stage
                .matcher
                .find_all_avoiding(text, &|r| exclusion.intersects(r, stage.respects));
            for m in found {
                if let Some(layer) = stage.claims {
                    exclusion.claim(layer, m.full());
                }
                out.push(m);
            }
        }
        out
    }

    /// Parses `text`, which starts at byte column `base` of `line`, into spans
    /// sorted by start column.
    pub fn parse(&self, line: usize, base: usize, text: &str) -> Vec<StyledSpan> {
        let mut spans: Vec<StyledSpan> = self
            .matches(text)
            .iter()
            .flat_map(|m| m.to_spans(line, base))
            .collect();
        spans.sort_by_key(|s| s.col_start);
        spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::span::SpanKind;
    use pretty_assertions::assert_eq;

    fn pipeline() -> InlinePipeline {
        InlinePipeline::new(&ParserOptions::default())
    }

    fn kinds(spans: &[StyledSpan]) -> Vec<SpanKind> {
        spans.iter().map(|s| s.kind).collect()
    }

    #[test]
    fn plain_text_has_no_spans() {
        assert!(pipeline().parse(0, 0, "hello world").is_empty());
    }

    #[test]
    fn bold_is_not_also_italic() {
        let spans = pipeline().parse(0, 0, "**bold**");
        assert_eq!(
            kinds(&spans),
            vec![SpanKind::BoldMarker, SpanKind::BoldContent, SpanKind::BoldMarker]
        );
    }

    #[test]
    fn link_text_is_not_emphasis() {
        let spans = pipeline().parse(0, 0, "[*a*](http://x/**y**)");
        assert_eq!(
            kinds(&spans),
            vec![
                SpanKind::LinkMarker,
                SpanKind::LinkText,
                SpanKind::LinkMarker,
                SpanKind::LinkUrl,
                SpanKind::LinkMarker,
            ]
        );
    }

    #[test]
    fn strike_inside_link_is_kept() {
        let spans = pipeline().parse(0, 0, "[~~old~~](x)");
        assert!(spans.iter().any(|s| s.kind == SpanKind::StrikeContent));
        assert!(spans.iter().any(|s| s.kind == SpanKind::LinkText));
    }

    #[test]
    fn code_inside_link_is_kept() {
        let spans = pipeline().parse(0, 0, "[`x`](y)");
        assert!(spans.iter().any(|s| s.kind == SpanKind::CodeContent));
    }

    #[test]
    fn bold_outside_link_survives() {
        let spans = pipeline().parse(0, 0, "**b** [a](x)");
        assert_eq!(spans[0], StyledSpan::on_line(SpanKind::BoldMarker, 0, 0..2));
        assert_eq!(spans[1], StyledSpan::on_line(SpanKind::BoldContent, 0, 2..3));
    }

    #[test]
    fn italic_next_to_bold_survives() {
        let spans = pipeline().parse(0, 0, "**a** *b*");
        assert!(spans.contains(&StyledSpan::on_line(SpanKind::ItalicContent, 0, 7..8)));
    }

    #[test]
    fn italic_reuses_delimiter_of_rejected_candidate() {
        // `*b*` overlaps the bold run; its closing `*` opens `*c*`.
        let spans = pipeline().parse(0, 0, "**a**b*c*");
        assert_eq!(
            spans,
            vec![
                StyledSpan::on_line(SpanKind::BoldMarker, 0, 0..2),
                StyledSpan::on_line(SpanKind::BoldContent, 0, 2..3),
                StyledSpan::on_line(SpanKind::BoldMarker, 0, 3..5),
                StyledSpan::on_line(SpanKind::ItalicMarker, 0, 6..7),
                StyledSpan::on_line(SpanKind::ItalicContent, 0, 7..8),
                StyledSpan::on_line(SpanKind::ItalicMarker, 0, 8..9),
            ]
        );
    }

    #[test]
    fn spans_are_offset_by_base() {
        let spans = pipeline().parse(4, 2, "`c`");
        assert_eq!(
            spans,
            vec![
                StyledSpan::on_line(SpanKind::CodeMarker, 4, 2..3),
                StyledSpan::on_line(SpanKind::CodeContent, 4, 3..4),
                StyledSpan::on_line(SpanKind::CodeMarker, 4, 4..5),
            ]
        );
    }

    #[test]
    fn metadata_inside_link_is_kept() {
        let spans = pipeline().parse(0, 0, "[due 📅 2024-01-01](x)");
        assert!(spans.iter().any(|s| s.kind == SpanKind::MetaText));
    }

    #[test]
    fn custom_pipeline_without_exclusion() {
        let pipeline = InlinePipeline::from_stages(vec![Stage::new(Link), Stage::new(Italic)]);
        let found = pipeline.matches("[*a*](x)");
        assert_eq!(found.len(), 2);
    }
}
