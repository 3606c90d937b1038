use std::sync::OnceLock;

use regex::Regex;

/// List item prefixes: bullets, ordered numbers and task checkboxes.
pub struct ListItem;

impl ListItem {
    /// Matches a task item prefix such as `- [ ] ` or `  * [x] `.
    ///
    /// Returns the byte offset where the item text begins.
    pub fn detect_task(line: &str) -> Option<usize> {
        static TASK_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = TASK_REGEX.get_or_init(|| {
            Regex::new(r"^[ \t]*(?:[-*+]|\d+[.)]) +\[[ xX]\](?: +|$)").expect("Invalid task regex")
        });
        re.find(line).map(|m| m.end())
    }

    /// Matches a plain bullet or ordered list prefix such as `- ` or `12. `.
    pub fn detect_item(line: &str) -> Option<usize> {
        static ITEM_REGEX: OnceLock<Regex> = OnceLock::new();
        let re = ITEM_REGEX.get_or_init(|| {
            Regex::new(r"^[ \t]*(?:[-*+]|\d+[.)])(?: +|$)").expect("Invalid list item regex")
        });
        re.find(line).map(|m| m.end())
    }
}
