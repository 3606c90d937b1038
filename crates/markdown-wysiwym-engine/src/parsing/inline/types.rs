use std::ops::Range;

use crate::parsing::span::{SpanKind, StyledSpan};

/// Constructs made of an opening delimiter, content and a closing delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimited {
    Bold,
    Italic,
    Strike,
    Underline,
    Code,
}

impl Delimited {
    pub fn marker_kind(self) -> SpanKind {
        match self {
            Delimited::Bold => SpanKind::BoldMarker,
            Delimited::Italic => SpanKind::ItalicMarker,
            Delimited::Strike => SpanKind::StrikeMarker,
            Delimited::Underline => SpanKind::UnderlineMarker,
            Delimited::Code => SpanKind::CodeMarker,
        }
    }

    pub fn content_kind(self) -> SpanKind {
        match self {
            Delimited::Bold => SpanKind::BoldContent,
            Delimited::Italic => SpanKind::ItalicContent,
            Delimited::Strike => SpanKind::StrikeContent,
            Delimited::Underline => SpanKind::UnderlineContent,
            Delimited::Code => SpanKind::CodeContent,
        }
    }
}

/// One inline construct found in a line, with byte ranges local to the
/// matched text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineMatch {
    /// Emphasis-like construct.
    Delimited {
        construct: Delimited,
        /// Full range including both delimiters.
        full: Range<usize>,
        /// Content between the delimiters.
        inner: Range<usize>,
    },
    /// `[text](url)`.
    Link {
        full: Range<usize>,
        text: Range<usize>,
        url: Range<usize>,
    },
    /// A task metadata glyph and its payload.
    Metadata {
        glyph: Range<usize>,
        payload: Range<usize>,
    },
}

impl InlineMatch {
    /// The source range claimed by this match.
    pub fn full(&self) -> Range<usize> {
        match self {
            InlineMatch::Delimited { full, .. } | InlineMatch::Link { full, .. } => full.clone(),
            InlineMatch::Metadata { glyph, payload } => glyph.start..payload.end,
        }
    }

    /// Splits the match into marker and content spans on `line`, shifting
    /// local offsets by `base`.
    pub fn to_spans(&self, line: usize, base: usize) -> Vec<StyledSpan> {
        let at = |kind, r: Range<usize>| StyledSpan::on_line(kind, line, base + r.start..base + r.end);
        match self {
            InlineMatch::Delimited {
                construct,
                full,
                inner,
            } => vec![
                at(construct.marker_kind(), full.start..inner.start),
                at(construct.content_kind(), inner.clone()),
                at(construct.marker_kind(), inner.end..full.end),
            ],
            InlineMatch::Link { full, text, url } => vec![
                at(SpanKind::LinkMarker, full.start..text.start),
                at(SpanKind::LinkText, text.clone()),
                at(SpanKind::LinkMarker, text.end..url.start),
                at(SpanKind::LinkUrl, url.clone()),
                at(SpanKind::LinkMarker, url.end..full.end),
            ],
            InlineMatch::Metadata { glyph, payload } => vec![
                at(SpanKind::MetaEmoji, glyph.clone()),
                at(SpanKind::MetaText, payload.clone()),
            ],
        }
    }
}
