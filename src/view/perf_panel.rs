//! Performance panel widget.

use super::styles::ListStyles;
use crate::perf::{PerformanceMetrics, ScoreGrade};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use std::time::Duration;

/// Side panel showing the latest metrics, the score, and any warnings.
pub struct PerformancePanel<'a> {
    metrics: &'a PerformanceMetrics,
    styles: &'a ListStyles,
}

impl<'a> PerformancePanel<'a> {
    /// Create a panel over a metrics snapshot.
    pub fn new(metrics: &'a PerformanceMetrics, styles: &'a ListStyles) -> Self {
        Self { metrics, styles }
    }

    /// Panel content, top to bottom.
    pub fn lines(&self) -> Vec<Line<'static>> {
        let m = self.metrics;
        let score = m.score();
        let grade = m.grade();

        let mut lines = vec![
            Line::from(vec![
                Span::styled("Score: ", self.styles.header),
                Span::styled(format!("{score} ({})", grade_label(grade)), self.styles.grade(grade)),
            ]),
            Line::from(""),
            metric_line("FPS", m.fps.to_string(), self.styles.metric(m.fps_status())),
            metric_line(
                "Memory",
                format!("{} MB", m.memory_usage_mb),
                self.styles.metric(m.memory_status()),
            ),
            metric_line(
                "Render",
                format_millis(m.render_time),
                self.styles.metric(m.render_status()),
            ),
            metric_line(
                "Load",
                format_millis(m.load_time),
                self.styles.metric(m.load_status()),
            ),
            Line::from(""),
        ];

        let warnings = m.warnings();
        if warnings.is_empty() {
            lines.push(Line::from(Span::styled("No issues", self.styles.good)));
        } else {
            lines.push(Line::from(Span::styled("Warnings:", self.styles.header)));
            for warning in warnings {
                lines.push(Line::from(Span::styled(format!("- {warning}"), self.styles.flagged)));
            }
        }
        lines
    }
}

impl Widget for PerformancePanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" Performance ")
            .borders(Borders::ALL)
            .border_style(self.styles.border);
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(self.lines())
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

fn metric_line(name: &str, value: String, style: ratatui::style::Style) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("{:<8}", format!("{name}:"))),
        Span::styled(value, style),
    ])
}

/// Lowercase label for a grade.
pub fn grade_label(grade: ScoreGrade) -> &'static str {
    match grade {
        ScoreGrade::Good => "good",
        ScoreGrade::Fair => "fair",
        ScoreGrade::Poor => "poor",
    }
}

/// Milliseconds with one decimal, e.g. `"2.5 ms"`.
pub fn format_millis(duration: Duration) -> String {
    format!("{:.1} ms", duration.as_secs_f64() * 1000.0)
}
