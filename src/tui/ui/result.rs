//! Outcome of the last submission.

use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::session::SubmissionOutcome;
use crate::tui::styles::MedicalTheme;

pub fn render_result(f: &mut Frame, area: Rect, outcome: Option<&SubmissionOutcome>) {
    let (lines, border_style) = match outcome {
        None => (
            vec![Line::from(Span::styled(
                "Fill in the form and submit to see a prediction",
                MedicalTheme::text_muted(),
            ))],
            MedicalTheme::border(),
        ),
        Some(SubmissionOutcome::Result(result)) => {
            let style = MedicalTheme::outcome(result.is_positive());
            (
                vec![Line::from(Span::styled(
                    result.message(),
                    style.add_modifier(Modifier::BOLD),
                ))],
                style,
            )
        }
        Some(SubmissionOutcome::Failed(message)) => (
            vec![
                Line::from(Span::styled("! Prediction failed", MedicalTheme::danger())),
                Line::from(Span::styled(message.as_str(), MedicalTheme::text())),
            ],
            MedicalTheme::danger(),
        ),
    };

    let content = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(" Result ", MedicalTheme::subtitle()))
                .borders(Borders::ALL)
                .border_style(border_style),
        );

    f.render_widget(content, area);
}
