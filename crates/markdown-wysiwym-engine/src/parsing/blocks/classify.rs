use super::kinds::{BlockQuote, Heading, ListItem, Rule};

/// The container construct a markup line opens with.
///
/// `marker_end` is the byte offset where the container prefix ends and the
/// inline-matched remainder begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerMatch {
    Heading { level: u8, marker_end: usize },
    Rule,
    BlockQuote { depth: u8, marker_end: usize },
    TaskItem { marker_end: usize },
    ListItem { marker_end: usize },
    /// No container prefix; the whole line is inline content.
    Plain,
}

/// Classifies markup lines (lines outside fenced blocks).
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Tests container patterns in fixed priority order; first match wins.
    ///
    /// heading → rule → blockquote → task item → list item. Task items are
    /// tried before plain items because every task prefix is also an item prefix.
    pub fn classify(&self, line: &str) -> ContainerMatch {
        if let Some((level, marker_end)) = Heading::detect(line) {
            return ContainerMatch::Heading { level, marker_end };
        }
        if Rule::detect(line) {
            return ContainerMatch::Rule;
        }
        let (depth, marker_end) = BlockQuote::strip_prefixes(line);
        if depth > 0 {
            return ContainerMatch::BlockQuote { depth, marker_end };
        }
        if let Some(marker_end) = ListItem::detect_task(line) {
            return ContainerMatch::TaskItem { marker_end };
        }
        if let Some(marker_end) = ListItem::detect_item(line) {
            return ContainerMatch::ListItem { marker_end };
        }
        ContainerMatch::Plain
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", ContainerMatch::Heading { level: 1, marker_end: 2 })]
    #[case("---", ContainerMatch::Rule)]
    #[case("***", ContainerMatch::Rule)]
    #[case("> quoted", ContainerMatch::BlockQuote { depth: 1, marker_end: 2 })]
    #[case("- [ ] task", ContainerMatch::TaskItem { marker_end: 6 })]
    #[case("- item", ContainerMatch::ListItem { marker_end: 2 })]
    #[case("plain text", ContainerMatch::Plain)]
    #[case("#", ContainerMatch::Plain)]
    fn classifies_by_priority(#[case] line: &str, #[case] expected: ContainerMatch) {
        assert_eq!(MarkdownLineClassifier.classify(line), expected);
    }

    #[test]
    fn rule_beats_list_item() {
        assert_eq!(MarkdownLineClassifier.classify("---"), ContainerMatch::Rule);
        assert_eq!(
            MarkdownLineClassifier.classify("- - -"),
            ContainerMatch::ListItem { marker_end: 2 }
        );
    }

    #[test]
    fn quoted_list_is_a_quote() {
        assert_eq!(
            MarkdownLineClassifier.classify("> - item"),
            ContainerMatch::BlockQuote {
                depth: 1,
                marker_end: 2
            }
        );
    }
}
