/// Tunables for the span parser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    /// Glyph that introduces an ISO due date.
    pub calendar_glyph: String,
    /// Glyph that introduces a free-text recurrence rule.
    pub recurrence_glyph: String,
}

impl ParserOptions {
    pub const DEFAULT_CALENDAR_GLYPH: &'static str = "📅";
    pub const DEFAULT_RECURRENCE_GLYPH: &'static str = "🔁";
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            calendar_glyph: Self::DEFAULT_CALENDAR_GLYPH.to_string(),
            recurrence_glyph: Self::DEFAULT_RECURRENCE_GLYPH.to_string(),
        }
    }
}
