use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::inline::{matcher::InlineMatcher, types::InlineMatch};

/// `[text](url)` inline links.
pub struct Link;

impl Link {
    fn regex() -> &'static Regex {
        static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
        LINK_REGEX.get_or_init(|| {
            Regex::new(r"\[([^\[\]]+)\]\(([^()\s]+)\)").expect("Invalid link regex")
        })
    }
}

impl InlineMatcher for Link {
    fn find_all(&self, line: &str) -> Vec<InlineMatch> {
        Self::regex()
            .captures_iter(line)
            .filter_map(|caps| {
                Some(InlineMatch::Link {
                    full: caps.get(0)?.range(),
                    text: caps.get(1)?.range(),
                    url: caps.get(2)?.range(),
                })
            })
            .collect()
    }
}
