//! Layout components (step indicator, navigation, status bar)

use super::components::{render_button, BUTTON_HEIGHT};
use crate::app::App;
use crate::state::Step;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Areas of the main screen
pub struct ScreenLayout {
    pub steps: Rect,
    pub content: Rect,
    pub navigation: Rect,
    pub status: Rect,
}

/// Split the screen into step indicator, content, navigation and status bar
pub fn create_layout(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),             // Step indicator
            Constraint::Min(0),                // Step content
            Constraint::Length(BUTTON_HEIGHT), // Prev / Next
            Constraint::Length(1),             // Status bar
        ])
        .split(area);

    ScreenLayout {
        steps: chunks[0],
        content: chunks[1],
        navigation: chunks[2],
        status: chunks[3],
    }
}

/// Draw the progress indicator: done and current steps are highlighted
pub fn draw_step_indicator(frame: &mut Frame, area: Rect, current: Step) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(Step::ALL.map(|_| Constraint::Ratio(1, Step::ALL.len() as u32)))
        .spacing(2)
        .split(area);

    for (step, column) in Step::ALL.iter().zip(columns.iter()) {
        let (bar_color, id_style) = if *step < current {
            (Color::LightBlue, Style::default().fg(Color::LightBlue))
        } else if *step == current {
            (
                Color::LightBlue,
                Style::default()
                    .fg(Color::LightBlue)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            (Color::DarkGray, Style::default().fg(Color::DarkGray))
        };

        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(bar_color));
        let text = Paragraph::new(vec![
            Line::styled(step.id(), id_style),
            Line::from(step.name()),
        ])
        .block(block);
        frame.render_widget(text, *column);
    }
}

/// Draw the Prev / Next buttons, disabled at either end
pub fn draw_navigation(frame: &mut Frame, area: Rect, current: Step) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Min(0),
            Constraint::Length(12),
        ])
        .split(area);

    render_button(
        frame,
        chunks[0],
        "‹ Prev",
        Color::Cyan,
        current.prev().is_some(),
    );
    render_button(
        frame,
        chunks[2],
        "Next ›",
        Color::Cyan,
        current.next().is_some(),
    );
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let step = app.state.wizard.current_step;
    let mut spans = vec![
        Span::styled(
            format!(" {} of {} ", step.index() + 1, Step::ALL.len()),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ),
        Span::raw(" "),
        Span::styled(get_step_hints(step), Style::default().fg(Color::Gray)),
    ];

    // Copy message
    if let Some(msg) = &app.copy_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        width: (quit_hint.len() as u16).min(area.width),
        ..area
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current step
fn get_step_hints(step: Step) -> &'static str {
    match step {
        Step::UserInfo => "Tab:next field  Enter:next  ^N:continue",
        Step::FamilyMembers => "Tab:next field  ^A:add  ^D:remove  ^N:continue  Esc:back",
        Step::Summary => "^Y:copy  r:start over  Esc:back  q:quit",
    }
}
