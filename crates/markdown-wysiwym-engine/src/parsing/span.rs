use std::ops::Range;

/// The visual role of a styled region.
///
/// Marker kinds cover delimiter characters (`**`, `# `, `[`...), content kinds
/// cover the payload between them. The declaration order is the grouping order
/// used by [`crate::render::group_by_kind`]: container kinds come first, then
/// links, then the inline kinds that may sit inside links, then task metadata.
/// A sink that layers groups in that order draws inline styles over the
/// container content beneath them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpanKind {
    /// `#`..`######` plus the following spaces. Carries the heading level.
    HeadingMarker(u8),
    /// Heading text after the marker. Carries the heading level.
    HeadingContent(u8),
    /// Bullet, number or task checkbox prefix of a list item.
    ListMarker,
    BlockquoteMarker,
    BlockquoteContent,
    /// A whole fence delimiter line (```` ``` ```` or `~~~`, info string included).
    FenceMarker,
    /// A whole line inside a fenced block.
    BlockContent,
    /// A thematic break line.
    Rule,
    /// `[`, `](` and `)` of an inline link.
    LinkMarker,
    LinkText,
    LinkUrl,
    BoldMarker,
    BoldContent,
    ItalicMarker,
    ItalicContent,
    StrikeMarker,
    StrikeContent,
    UnderlineMarker,
    UnderlineContent,
    CodeMarker,
    CodeContent,
    /// A task metadata glyph such as the due-date calendar.
    MetaEmoji,
    /// The payload following a task metadata glyph.
    MetaText,
}

/// Coarse grouping of kinds for visual treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpanGroup {
    /// Delimiters that should be de-emphasized.
    Marker,
    /// Payload text of headings, emphasis, quotes and link text.
    Content,
    /// Inline code payload.
    Code,
    /// Link destinations.
    Link,
    /// Task metadata glyphs and payloads.
    Meta,
    /// Fenced block bodies.
    Block,
}

impl SpanKind {
    /// Returns true for delimiter kinds.
    #[must_use]
    pub fn is_marker(self) -> bool {
        matches!(
            self,
            SpanKind::HeadingMarker(_)
                | SpanKind::BoldMarker
                | SpanKind::ItalicMarker
                | SpanKind::StrikeMarker
                | SpanKind::UnderlineMarker
                | SpanKind::CodeMarker
                | SpanKind::LinkMarker
                | SpanKind::ListMarker
                | SpanKind::BlockquoteMarker
                | SpanKind::FenceMarker
                | SpanKind::Rule
        )
    }

    #[must_use]
    pub fn group(self) -> SpanGroup {
        match self {
            k if k.is_marker() => SpanGroup::Marker,
            SpanKind::CodeContent => SpanGroup::Code,
            SpanKind::LinkUrl => SpanGroup::Link,
            SpanKind::MetaEmoji | SpanKind::MetaText => SpanGroup::Meta,
            SpanKind::BlockContent => SpanGroup::Block,
            _ => SpanGroup::Content,
        }
    }

    /// Stable kebab-case name, e.g. `heading-marker(2)` or `link-url`.
    #[must_use]
    pub fn name(self) -> String {
        let base = match self {
            SpanKind::HeadingMarker(level) => return format!("heading-marker({level})"),
            SpanKind::HeadingContent(level) => return format!("heading-content({level})"),
            SpanKind::BoldMarker => "bold-marker",
            SpanKind::BoldContent => "bold-content",
            SpanKind::ItalicMarker => "italic-marker",
            SpanKind::ItalicContent => "italic-content",
            SpanKind::StrikeMarker => "strike-marker",
            SpanKind::StrikeContent => "strike-content",
            SpanKind::UnderlineMarker => "underline-marker",
            SpanKind::UnderlineContent => "underline-content",
            SpanKind::CodeMarker => "code-marker",
            SpanKind::CodeContent => "code-content",
            SpanKind::LinkMarker => "link-marker",
            SpanKind::LinkText => "link-text",
            SpanKind::LinkUrl => "link-url",
            SpanKind::ListMarker => "list-marker",
            SpanKind::BlockquoteMarker => "blockquote-marker",
            SpanKind::BlockquoteContent => "blockquote-content",
            SpanKind::FenceMarker => "fence-marker",
            SpanKind::BlockContent => "block-content",
            SpanKind::Rule => "rule",
            SpanKind::MetaEmoji => "meta-emoji",
            SpanKind::MetaText => "meta-text",
        };
        base.to_string()
    }
}

/// One styled region of the document.
///
/// Columns are byte offsets into the line (terminator excluded), half-open.
/// A span never crosses a line boundary, so `line_start == line_end`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyledSpan {
    pub kind: SpanKind,
    pub line_start: usize,
    pub col_start: usize,
    pub line_end: usize,
    pub col_end: usize,
}

impl StyledSpan {
    /// Creates a span covering `cols` on a single line.
    pub fn on_line(kind: SpanKind, line: usize, cols: Range<usize>) -> Self {
        Self {
            kind,
            line_start: line,
            col_start: cols.start,
            line_end: line,
            col_end: cols.end,
        }
    }

    /// The line this span sits on.
    #[must_use]
    pub fn line(&self) -> usize {
        self.line_start
    }

    #[must_use]
    pub fn cols(&self) -> Range<usize> {
        self.col_start..self.col_end
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.col_end.saturating_sub(self.col_start)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
