//! # Span Parser
//!
//! Best-effort, line-based highlighter that turns document text into
//! [`StyledSpan`]s separating markup markers from their content.
//!
//! ## Pipeline
//!
//! 1. Split the text into lines (`lines`)
//! 2. Run every line through the fence state machine (`blocks::fence`)
//! 3. Classify markup lines by container (`blocks::classify`) and emit the
//!    container's marker/content spans
//! 4. Run the inline pipeline (`inline`) over the remainder of the line
//!
//! The parser is a pure function of its input: no state survives a call, and
//! identical text always yields an identical span list. Malformed markup never
//! fails; it simply produces no span.

pub mod blocks;
pub mod inline;
pub mod lines;
pub mod options;
pub mod span;

#[cfg(test)]
mod tests;

use std::sync::OnceLock;

use blocks::{ContainerMatch, FenceState, LineRole, MarkdownLineClassifier};
use inline::InlinePipeline;
use lines::{LineRef, lines};
pub use options::ParserOptions;
pub use span::{SpanGroup, SpanKind, StyledSpan};

/// Result of a full document scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOutcome {
    pub spans: Vec<StyledSpan>,
    /// State the scanner was in after the last line.
    pub final_state: FenceState,
}

impl ScanOutcome {
    /// True when the document ends inside a fenced block.
    #[must_use]
    pub fn unterminated_fence(&self) -> bool {
        self.final_state.is_unterminated()
    }
}

/// Span parser configured with a set of [`ParserOptions`].
pub struct SpanParser {
    classifier: MarkdownLineClassifier,
    inline: InlinePipeline,
}

impl SpanParser {
    pub fn new(options: &ParserOptions) -> Self {
        Self {
            classifier: MarkdownLineClassifier,
            inline: InlinePipeline::new(options),
        }
    }

    /// Parses `text` into an ordered span list.
    pub fn parse(&self, text: &str) -> Vec<StyledSpan> {
        self.scan(text).spans
    }

    /// Parses `text` and also reports the scanner's terminal state.
    pub fn scan(&self, text: &str) -> ScanOutcome {
        let mut state = FenceState::Normal;
        let mut spans = Vec::new();

        for line in lines(text) {
            let (next, role) = state.step(line.text);
            match role {
                LineRole::Fence => spans.push(whole_line(SpanKind::FenceMarker, line)),
                LineRole::BlockContent => spans.push(whole_line(SpanKind::BlockContent, line)),
                LineRole::Markup => self.markup_line(line, &mut spans),
            }
            state = next;
        }

        ScanOutcome {
            spans,
            final_state: state,
        }
    }

    fn markup_line(&self, line: LineRef<'_>, out: &mut Vec<StyledSpan>) {
        let len = line.text.len();
        let at = |kind, cols| StyledSpan::on_line(kind, line.index, cols);

        let inline_from = match self.classifier.classify(line.text) {
            ContainerMatch::Heading { level, marker_end } => {
                out.push(at(SpanKind::HeadingMarker(level), 0..marker_end));
                out.push(at(SpanKind::HeadingContent(level), marker_end..len));
                Some(marker_end)
            }
            ContainerMatch::Rule => {
                out.push(at(SpanKind::Rule, 0..len));
                None
            }
            ContainerMatch::BlockQuote { marker_end, .. } => {
                out.push(at(SpanKind::BlockquoteMarker, 0..marker_end));
                if marker_end < len {
                    out.push(at(SpanKind::BlockquoteContent, marker_end..len));
                }
                Some(marker_end)
            }
            ContainerMatch::TaskItem { marker_end } | ContainerMatch::ListItem { marker_end } => {
                out.push(at(SpanKind::ListMarker, 0..marker_end));
                Some(marker_end)
            }
            ContainerMatch::Plain => Some(0),
        };

        if let Some(start) = inline_from {
            out.extend(
                self.inline
                    .parse(line.index, start, &line.text[start..]),
            );
        }
    }
}

impl Default for SpanParser {
    fn default() -> Self {
        Self::new(&ParserOptions::default())
    }
}

fn whole_line(kind: SpanKind, line: LineRef<'_>) -> StyledSpan {
    StyledSpan::on_line(kind, line.index, 0..line.text.len())
}

/// Parses `text` with default options.
pub fn parse(text: &str) -> Vec<StyledSpan> {
    static DEFAULT_PARSER: OnceLock<SpanParser> = OnceLock::new();
    DEFAULT_PARSER.get_or_init(SpanParser::default).parse(text)
}
