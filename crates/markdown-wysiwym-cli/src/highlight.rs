use markdown_wysiwym_config::{Config, Treatment};
use markdown_wysiwym_engine::{RenderSink, SpanKind, StyledSpan, parsing::lines::lines};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Per-line render state passed alongside the spans.
pub struct LineMarks<'a> {
    pub cursor: usize,
    pub selection: Option<(usize, usize)>,
    pub is_external: &'a dyn Fn(usize) -> bool,
}

/// Builds ratatui lines by layering span treatments over the raw text.
///
/// Kinds arrive in ascending order, so content kinds patch over the container
/// content they sit in.
pub struct TerminalSink<'a> {
    config: &'a Config,
    lines: Vec<String>,
    styles: Vec<Vec<Style>>,
}

impl<'a> TerminalSink<'a> {
    pub fn new(config: &'a Config, text: &str) -> Self {
        let lines: Vec<String> = lines(text).map(|l| l.text.to_string()).collect();
        let styles = lines.iter().map(|l| vec![Style::default(); l.len()]).collect();
        Self {
            config,
            lines,
            styles,
        }
    }

    pub fn into_lines(self, marks: &LineMarks<'_>) -> Vec<Line<'static>> {
        self.lines
            .iter()
            .zip(&self.styles)
            .enumerate()
            .map(|(index, (text, styles))| {
                let mut spans = vec![gutter(index, marks)];
                spans.extend(runs(text, styles));
                let mut line = Line::from(spans);
                if marks
                    .selection
                    .is_some_and(|(start, end)| start <= index && index <= end)
                {
                    line = line.style(Style::default().bg(Color::DarkGray));
                }
                line
            })
            .collect()
    }
}

impl RenderSink for TerminalSink<'_> {
    fn apply(&mut self, kind: SpanKind, spans: &[StyledSpan]) {
        let style = style_of(self.config.treatment_for(kind));
        for span in spans {
            if let Some(line) = self.styles.get_mut(span.line()) {
                let end = span.col_end.min(line.len());
                for cell in &mut line[span.col_start.min(end)..end] {
                    *cell = cell.patch(style);
                }
            }
        }
    }
}

pub fn style_of(treatment: Treatment) -> Style {
    let mut modifier = Modifier::empty();
    for (on, flag) in [
        (treatment.dim, Modifier::DIM),
        (treatment.bold, Modifier::BOLD),
        (treatment.italic, Modifier::ITALIC),
        (treatment.underline, Modifier::UNDERLINED),
        (treatment.crossed_out, Modifier::CROSSED_OUT),
    ] {
        if on {
            modifier |= flag;
        }
    }
    Style::default().add_modifier(modifier)
}

fn gutter(index: usize, marks: &LineMarks<'_>) -> Span<'static> {
    let cursor = if index == marks.cursor { '>' } else { ' ' };
    if (marks.is_external)(index) {
        Span::styled(
            format!("{cursor}┃ "),
            Style::default().fg(Color::Magenta),
        )
    } else {
        Span::raw(format!("{cursor}  "))
    }
}

/// Splits `text` into spans of equal style, on char boundaries.
fn runs(text: &str, styles: &[Style]) -> Vec<Span<'static>> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut current: Option<Style> = None;

    for (i, _) in text.char_indices() {
        let style = styles.get(i).copied().unwrap_or_default();
        match current {
            Some(prev) if prev == style => {}
            Some(prev) => {
                out.push(Span::styled(text[start..i].to_string(), prev));
                start = i;
                current = Some(style);
            }
            None => current = Some(style),
        }
    }
    if let Some(style) = current {
        out.push(Span::styled(text[start..].to_string(), style));
    }
    out
}
