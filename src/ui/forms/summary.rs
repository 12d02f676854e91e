//! Read-only summary of the submitted snapshot

use super::field_renderer::draw_help_text;
use crate::app::App;
use crate::platform::{COPY_SHORTCUT, RESTART_SHORTCUT};
use crate::state::{FieldName, Record, Submission, UserField};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn label_value(label: String, value: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().fg(Color::Gray)),
        Span::raw(value.to_string()),
    ])
}

/// Lines shown for a submission
fn summary_lines(submission: &Submission) -> Vec<Line<'static>> {
    let heading = Style::default().add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::styled("Thank you for your submission.", heading),
        Line::from(""),
    ];
    lines.extend(
        UserField::ALL
            .iter()
            .map(|field| label_value(field.label().to_string(), submission.user.get(*field))),
    );

    lines.push(Line::from(""));
    lines.push(Line::styled("Family Members", heading));
    if submission.members.is_empty() {
        lines.push(Line::styled("(none)", Style::default().fg(Color::DarkGray)));
    }
    for (position, member) in submission.members.iter().enumerate() {
        let number = position + 1;
        lines.push(label_value(format!("Member {number} Name"), &member.name));
        lines.push(label_value(
            format!("Member {number} Relation"),
            &member.relation,
        ));
    }
    lines
}

/// Draw the summary step
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Complete ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .horizontal_margin(1)
        .split(inner);

    let lines = match &app.state.wizard.submitted {
        Some(submission) => summary_lines(submission),
        None => vec![Line::styled(
            "Nothing submitted yet.",
            Style::default().fg(Color::DarkGray),
        )],
    };
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), rows[0]);

    draw_help_text(
        frame,
        rows[1],
        &[
            (COPY_SHORTCUT, "copy"),
            (RESTART_SHORTCUT, "start over"),
            ("Esc", "back"),
            ("q", "quit"),
        ],
    );
}
