use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::inline::{
    matcher::InlineMatcher,
    types::{Delimited, InlineMatch},
};

/// `**strong**` and `__strong__`.
pub struct Bold;
/// `*emphasis*` and `_emphasis_`.
pub struct Italic;
/// `~~deleted~~`.
pub struct Strike;
/// `<u>underlined</u>`.
pub struct Underline;

impl Bold {
    fn regex() -> &'static Regex {
        static BOLD_REGEX: OnceLock<Regex> = OnceLock::new();
        BOLD_REGEX.get_or_init(|| {
            Regex::new(r"\*\*([^*\s](?:[^*]*[^*\s])?)\*\*|__([^_\s](?:[^_]*[^_\s])?)__")
                .expect("Invalid bold regex")
        })
    }
}

impl Italic {
    fn regex() -> &'static Regex {
        static ITALIC_REGEX: OnceLock<Regex> = OnceLock::new();
        ITALIC_REGEX.get_or_init(|| {
            Regex::new(r"\*([^*\s](?:[^*]*[^*\s])?)\*|_([^_\s](?:[^_]*[^_\s])?)_")
                .expect("Invalid italic regex")
        })
    }
}

impl Strike {
    fn regex() -> &'static Regex {
        static STRIKE_REGEX: OnceLock<Regex> = OnceLock::new();
        STRIKE_REGEX.get_or_init(|| {
            Regex::new(r"~~([^~\s](?:[^~]*[^~\s])?)~~").expect("Invalid strikethrough regex")
        })
    }
}

impl Underline {
    fn regex() -> &'static Regex {
        static UNDERLINE_REGEX: OnceLock<Regex> = OnceLock::new();
        UNDERLINE_REGEX
            .get_or_init(|| Regex::new(r"<u>(.+?)</u>").expect("Invalid underline regex"))
    }
}

impl InlineMatcher for Bold {
    fn find_all(&self, line: &str) -> Vec<InlineMatch> {
        scan(Self::regex(), line, Delimited::Bold, &|_| false)
    }

    fn find_all_avoiding(
        &self,
        line: &str,
        blocked: &dyn Fn(&Range<usize>) -> bool,
    ) -> Vec<InlineMatch> {
        scan(Self::regex(), line, Delimited::Bold, blocked)
    }
}

impl InlineMatcher for Italic {
    fn find_all(&self, line: &str) -> Vec<InlineMatch> {
        scan(Self::regex(), line, Delimited::Italic, &|_| false)
    }

    fn find_all_avoiding(
        &self,
        line: &str,
        blocked: &dyn Fn(&Range<usize>) -> bool,
    ) -> Vec<InlineMatch> {
        scan(Self::regex(), line, Delimited::Italic, blocked)
    }
}

impl InlineMatcher for Strike {
    fn find_all(&self, line: &str) -> Vec<InlineMatch> {
        scan(Self::regex(), line, Delimited::Strike, &|_| false)
    }

    fn find_all_avoiding(
        &self,
        line: &str,
        blocked: &dyn Fn(&Range<usize>) -> bool,
    ) -> Vec<InlineMatch> {
        scan(Self::regex(), line, Delimited::Strike, blocked)
    }
}

impl InlineMatcher for Underline {
    fn find_all(&self, line: &str) -> Vec<InlineMatch> {
        scan(Self::regex(), line, Delimited::Underline, &|_| false)
    }

    fn find_all_avoiding(
        &self,
        line: &str,
        blocked: &dyn Fn(&Range<usize>) -> bool,
    ) -> Vec<InlineMatch> {
        scan(Self::regex(), line, Delimited::Underline, blocked)
    }
}

/// Scans `line` for `construct`. The content is whichever capture group
/// participated.
///
/// A rejected candidate (blocked, or an underscore delimiter inside a word)
/// only skips its first character, so its closing delimiter can still open
/// a later match.
pub(crate) fn scan(
    re: &Regex,
    line: &str,
    construct: Delimited,
    blocked: &dyn Fn(&Range<usize>) -> bool,
) -> Vec<InlineMatch> {
    let mut out = Vec::new();
    let mut pos = 0;

    while pos < line.len() {
        let Some(caps) = re.captures_at(line, pos) else {
            break;
        };
        let Some(full) = caps.get(0) else {
            break;
        };
        let inner = caps.iter().skip(1).flatten().next();
        let rejected = blocked(&full.range())
            || (full.as_str().starts_with('_') && is_intraword(line, full.range()));

        match inner {
            Some(inner) if !rejected && !full.is_empty() => {
                out.push(InlineMatch::Delimited {
                    construct,
                    full: full.range(),
                    inner: inner.range(),
                });
                pos = full.end();
            }
            _ => pos = next_char(line, full.start()),
        }
    }
    out
}

fn next_char(line: &str, at: usize) -> usize {
    at + line[at..].chars().next().map_or(1, char::len_utf8)
}

fn is_intraword(line: &str, range: Range<usize>) -> bool {
    let before = line[..range.start].chars().next_back();
    let after = line[range.end..].chars().next();
    before.is_some_and(char::is_alphanumeric) || after.is_some_and(char::is_alphanumeric)
}
