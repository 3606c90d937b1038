use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::{
    inline::{matcher::InlineMatcher, types::InlineMatch},
    options::ParserOptions,
};

/// Glyphs that end a recurrence rule's free text.
pub const METADATA_GLYPHS: [&str; 7] = ["📅", "⏳", "🛫", "✅", "➕", "❌", "🔁"];

/// Task metadata: a calendar glyph with an ISO date, and a recurrence glyph
/// with free text.
pub struct TaskMetadata {
    calendar: String,
    recurrence: String,
    terminators: Vec<String>,
}

impl TaskMetadata {
    pub fn new(options: &ParserOptions) -> Self {
        let mut terminators: Vec<String> = METADATA_GLYPHS.iter().map(|g| g.to_string()).collect();
        for glyph in [&options.calendar_glyph, &options.recurrence_glyph] {
            if !glyph.is_empty() && !terminators.contains(glyph) {
                terminators.push(glyph.clone());
            }
        }
        Self {
            calendar: options.calendar_glyph.clone(),
            recurrence: options.recurrence_glyph.clone(),
            terminators,
        }
    }

    fn dates(&self, line: &str, out: &mut Vec<InlineMatch>) {
        static DATE_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = DATE_REGEX.get_or_init(|| {
            Regex::new(r"^\s*([0-9]{4}-[0-9]{2}-[0-9]{2})\b").expect("Invalid date regex")
        });

        for glyph in glyph_positions(line, &self.calendar) {
            let rest = &line[glyph.end..];
            if let Some(date) = re.captures(rest).and_then(|caps| caps.get(1)) {
                let payload = glyph.end + date.start()..glyph.end + date.end();
                out.push(InlineMatch::Metadata { glyph, payload });
            }
        }
    }

    fn recurrences(&self, line: &str, out: &mut Vec<InlineMatch>) {
        for glyph in glyph_positions(line, &self.recurrence) {
            let rest = &line[glyph.end..];
            let stop = self
                .terminators
                .iter()
                .filter_map(|t| rest.find(t.as_str()))
                .min()
                .unwrap_or(rest.len());
            let raw = &rest[..stop];
            let leading = raw.len() - raw.trim_start().len();
            let text = raw.trim();
            if text.is_empty() {
                continue;
            }
            let start = glyph.end + leading;
            out.push(InlineMatch::Metadata {
                glyph,
                payload: start..start + text.len(),
            });
        }
    }
}

fn glyph_positions(line: &str, glyph: &str) -> Vec<Range<usize>> {
    if glyph.is_empty() {
        return Vec::new();
    }
    line.match_indices(glyph)
        .map(|(pos, found)| pos..pos + found.len())
        .collect()
}

impl InlineMatcher for TaskMetadata {
    fn find_all(&self, line: &str) -> Vec<InlineMatch> {
        let mut out = Vec::new();
        self.dates(line, &mut out);
        self.recurrences(line, &mut out);
        out.sort_by_key(|m| m.full().start);
        out
    }
}
