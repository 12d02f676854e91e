//! User information step

use super::field_renderer::{draw_field, draw_help_text, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{FieldName, Focus, Record, UserField};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the user information form as a two-column grid
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" User Information ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),            // Intro
            Constraint::Length(FIELD_HEIGHT), // Row 1
            Constraint::Length(FIELD_HEIGHT), // Row 2
            Constraint::Length(FIELD_HEIGHT), // Row 3
            Constraint::Min(0),
            Constraint::Length(1), // Help text
        ])
        .horizontal_margin(1)
        .split(inner);

    let intro = Paragraph::new(vec![
        Line::styled(
            "Please provide your details here.",
            Style::default().add_modifier(Modifier::ITALIC),
        ),
        Line::from(""),
    ])
    .style(Style::default().fg(Color::Gray));
    frame.render_widget(intro, rows[0]);

    let wizard = &app.state.wizard;
    let focused = app.state.focused();

    for (i, pair) in UserField::ALL.chunks(2).enumerate() {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .spacing(1)
            .split(rows[i + 1]);

        for (column, field) in columns.iter().zip(pair) {
            draw_field(
                frame,
                *column,
                field.label(),
                wizard.user.get(*field),
                focused == Some(Focus::User(*field)),
                wizard.user_errors.get(field).map(|e| e.message.as_str()),
            );
        }
    }

    draw_help_text(
        frame,
        rows[5],
        &[
            ("Tab", "next field"),
            ("Enter", "next"),
            (crate::platform::NEXT_SHORTCUT, "continue"),
        ],
    );
}
