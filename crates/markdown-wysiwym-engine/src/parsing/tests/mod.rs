//! Integration tests for the parsing module.
//!
//! Fixtures (.md) live in `fixtures/` next to their normalized span listings
//! (.snap). Every fixture is also checked against the output invariants.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{ParserOptions, SpanKind, SpanParser, StyledSpan, parse};
use normalize::normalize;

fn fixtures_dir() -> String {
    format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"))
}

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!("{}/{name}.md", fixtures_dir())).unwrap()
}

fn assert_fixture(name: &str) {
    let fixtures_dir = fixtures_dir();
    let text = fixture(name);

    let spans = parse(&text);
    invariants::check(&text, &spans);

    let snap = normalize(&text, &spans);
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_yaml_snapshot!(name, snap);
    });
}

// Fixture-based tests

#[test]
fn fixture_mixed() {
    assert_fixture("mixed");
}

#[test]
fn fixture_fences() {
    assert_fixture("fences");
}

#[test]
fn fixture_crlf_unterminated() {
    assert_fixture("crlf_unterminated");
}

#[rstest]
#[case("mixed")]
#[case("fences")]
#[case("crlf_unterminated")]
fn fixture_parse_is_deterministic(#[case] name: &str) {
    let text = fixture(name);
    assert_eq!(parse(&text), parse(&text));
}

#[test]
fn fixture_crlf_unterminated_fence() {
    let text = fixture("crlf_unterminated");
    let outcome = SpanParser::default().scan(&text);
    assert!(outcome.unterminated_fence());
    assert_eq!(outcome.spans, parse(&text));
}

// Scenario tests

#[test]
fn heading_scenario() {
    assert_eq!(
        parse("# Heading"),
        vec![
            StyledSpan::on_line(SpanKind::HeadingMarker(1), 0, 0..2),
            StyledSpan::on_line(SpanKind::HeadingContent(1), 0, 2..9),
        ]
    );
}

#[test]
fn bold_scenario() {
    assert_eq!(
        parse("**bold**"),
        vec![
            StyledSpan::on_line(SpanKind::BoldMarker, 0, 0..2),
            StyledSpan::on_line(SpanKind::BoldContent, 0, 2..6),
            StyledSpan::on_line(SpanKind::BoldMarker, 0, 6..8),
        ]
    );
}

#[rstest]
#[case("[a](http://x)")]
#[case("[*a*](http://x)")]
#[case("[**a**](http://x/*y*)")]
fn link_scenario_has_no_emphasis(#[case] line: &str) {
    let kinds: Vec<SpanKind> = parse(line).into_iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            SpanKind::LinkMarker,
            SpanKind::LinkText,
            SpanKind::LinkMarker,
            SpanKind::LinkUrl,
            SpanKind::LinkMarker,
        ]
    );
}

#[test]
fn link_scenario_columns() {
    assert_eq!(
        normalize("[a](http://x)", &parse("[a](http://x)")),
        vec![
            r#"0:0..1 link-marker "[""#,
            r#"0:1..2 link-text "a""#,
            r#"0:2..4 link-marker "](""#,
            r#"0:4..12 link-url "http://x""#,
            r#"0:12..13 link-marker ")""#,
        ]
    );
}

#[test]
fn quote_content_nests_inline_spans() {
    let text = "> quote **b**";
    assert_eq!(
        normalize(text, &parse(text)),
        vec![
            r#"0:0..2 blockquote-marker "> ""#,
            r#"0:2..13 blockquote-content "quote **b**""#,
            r#"0:8..10 bold-marker "**""#,
            r#"0:10..11 bold-content "b""#,
            r#"0:11..13 bold-marker "**""#,
        ]
    );
}

#[test]
fn heading_content_lies_under_inline_spans() {
    let text = "# **a**";
    assert_eq!(
        normalize(text, &parse(text)),
        vec![
            r##"0:0..2 heading-marker(1) "# ""##,
            r#"0:2..7 heading-content(1) "**a**""#,
            r#"0:2..4 bold-marker "**""#,
            r#"0:4..5 bold-content "a""#,
            r#"0:5..7 bold-marker "**""#,
        ]
    );
}

#[test]
fn italic_after_bold_run_reuses_its_delimiter() {
    let text = "**a**b*c*";
    assert_eq!(
        normalize(text, &parse(text)),
        vec![
            r#"0:0..2 bold-marker "**""#,
            r#"0:2..3 bold-content "a""#,
            r#"0:3..5 bold-marker "**""#,
            r#"0:6..7 italic-marker "*""#,
            r#"0:7..8 italic-content "c""#,
            r#"0:8..9 italic-marker "*""#,
        ]
    );
}

#[test]
fn bare_quote_marker_has_no_content_span() {
    assert_eq!(
        parse(">"),
        vec![StyledSpan::on_line(SpanKind::BlockquoteMarker, 0, 0..1)]
    );
}

#[rstest]
#[case("#")]
#[case("#NoSpace")]
#[case("#   ")]
#[case("####### seven")]
#[case("a * b")]
#[case("snake_case_name")]
#[case("**")]
#[case("")]
fn malformed_markup_produces_nothing(#[case] line: &str) {
    assert!(parse(line).is_empty(), "unexpected spans for {line:?}");
}

#[test]
fn deepest_heading_level_wins() {
    let spans = parse("### Three");
    assert_eq!(
        spans[0],
        StyledSpan::on_line(SpanKind::HeadingMarker(3), 0, 0..4)
    );
}

#[test]
fn rule_line_has_no_inline_spans() {
    assert_eq!(
        parse("***"),
        vec![StyledSpan::on_line(SpanKind::Rule, 0, 0..3)]
    );
}

#[test]
fn list_markers_precede_inline_spans() {
    let text = "1. call `mom`";
    assert_eq!(
        normalize(text, &parse(text)),
        vec![
            r#"0:0..3 list-marker "1. ""#,
            r#"0:8..9 code-marker "`""#,
            r#"0:9..12 code-content "mom""#,
            r#"0:12..13 code-marker "`""#,
        ]
    );
}

#[test]
fn fence_toggle_ignores_fence_character() {
    let text = "```\nx\n~~~\n*y*";
    let outcome = SpanParser::default().scan(text);
    assert!(!outcome.unterminated_fence());
    assert_eq!(
        normalize(text, &outcome.spans),
        vec![
            r#"0:0..3 fence-marker "```""#,
            r#"1:0..1 block-content "x""#,
            r#"2:0..3 fence-marker "~~~""#,
            r#"3:0..1 italic-marker "*""#,
            r#"3:1..2 italic-content "y""#,
            r#"3:2..3 italic-marker "*""#,
        ]
    );
}

#[test]
fn custom_glyphs_are_honoured() {
    let options = ParserOptions {
        calendar_glyph: "@due".to_string(),
        recurrence_glyph: "@every".to_string(),
    };
    let parser = SpanParser::new(&options);
    let text = "ship @due 2025-01-31 @every friday";
    assert_eq!(
        normalize(text, &parser.parse(text)),
        vec![
            r#"0:5..9 meta-emoji "@due""#,
            r#"0:10..20 meta-text "2025-01-31""#,
            r#"0:21..27 meta-emoji "@every""#,
            r#"0:28..34 meta-text "friday""#,
        ]
    );
    assert!(parse(text).is_empty());
}

#[test]
fn parsing_keeps_no_state_between_calls() {
    let parser = SpanParser::default();
    let _ = parser.parse("```\nunterminated");
    assert_eq!(
        parser.parse("*a*"),
        vec![
            StyledSpan::on_line(SpanKind::ItalicMarker, 0, 0..1),
            StyledSpan::on_line(SpanKind::ItalicContent, 0, 1..2),
            StyledSpan::on_line(SpanKind::ItalicMarker, 0, 2..3),
        ]
    );
}
