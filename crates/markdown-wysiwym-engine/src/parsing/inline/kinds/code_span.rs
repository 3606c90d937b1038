use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::inline::{
    kinds::emphasis::scan,
    matcher::InlineMatcher,
    types::{Delimited, InlineMatch},
};

/// Single-backtick code span.
///
/// Not a raw zone: other constructs may still match inside the backticks.
pub struct CodeSpan;

impl CodeSpan {
    fn regex() -> &'static Regex {
        static CODE_REGEX: OnceLock<Regex> = OnceLock::new();
        CODE_REGEX.get_or_init(|| Regex::new(r"`([^`]+)`").expect("Invalid code span regex"))
    }
}

impl InlineMatcher for CodeSpan {
    fn find_all(&self, line: &str) -> Vec<InlineMatch> {
        scan(Self::regex(), line, Delimited::Code, &|_| false)
    }

    fn find_all_avoiding(
        &self,
        line: &str,
        blocked: &dyn Fn(&Range<usize>) -> bool,
    ) -> Vec<InlineMatch> {
        scan(Self::regex(), line, Delimited::Code, blocked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_code_span() {
        assert_eq!(
            CodeSpan.find_all("run `cargo` now"),
            vec![InlineMatch::Delimited {
                construct: Delimited::Code,
                full: 4..11,
                inner: 5..10,
            }]
        );
    }

    #[test]
    fn unclosed_code_span_is_plain() {
        assert!(CodeSpan.find_all("`unclosed code").is_empty());
    }

    #[test]
    fn empty_code_span_is_plain() {
        assert!(CodeSpan.find_all("``").is_empty());
    }
}
