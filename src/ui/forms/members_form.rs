//! Family members step

use super::field_renderer::{draw_field, draw_help_text, FIELD_HEIGHT};
use crate::app::App;
use crate::platform::{ADD_MEMBER_SHORTCUT, NEXT_SHORTCUT, REMOVE_MEMBER_SHORTCUT};
use crate::state::{FamilyMember, FieldName, Focus, MemberField, Record};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows needed to draw one member entry
fn member_height(member: &FamilyMember) -> u16 {
    if member.is_open {
        1 + FIELD_HEIGHT
    } else {
        1
    }
}

/// Draw the dynamic list of family member sub-forms
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Add Family Members ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let wizard = &app.state.wizard;

    let mut constraints = vec![Constraint::Length(2)]; // Intro
    constraints.extend(
        wizard
            .members
            .iter()
            .map(|m| Constraint::Length(member_height(m))),
    );
    constraints.push(Constraint::Min(0));
    constraints.push(Constraint::Length(1)); // Notice
    constraints.push(Constraint::Length(1)); // Help text

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    let intro = Paragraph::new("Please add family members below.")
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC));
    frame.render_widget(intro, rows[0]);

    let focused = app.state.focused();
    for (position, member) in wizard.members.iter().enumerate() {
        draw_member(frame, rows[position + 1], member, focused);
    }

    let notice_row = rows[rows.len() - 2];
    if let Some(notice) = &wizard.notice {
        let notice =
            Paragraph::new(notice.as_str()).style(Style::default().fg(Color::LightRed));
        frame.render_widget(notice, notice_row);
    } else if wizard.members.is_empty() {
        let empty = Paragraph::new(format!(
            "No family members. Press {ADD_MEMBER_SHORTCUT} to add one."
        ))
        .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, notice_row);
    }

    draw_help_text(
        frame,
        rows[rows.len() - 1],
        &[
            (ADD_MEMBER_SHORTCUT, "add member"),
            (REMOVE_MEMBER_SHORTCUT, "remove"),
            ("Space", "collapse"),
            (NEXT_SHORTCUT, "continue"),
            ("Esc", "back"),
        ],
    );
}

/// Draw a member header and, when open, its two fields side by side
fn draw_member(frame: &mut Frame, area: Rect, member: &FamilyMember, focused: Option<Focus>) {
    let header_focused = focused == Some(Focus::MemberHeader(member.id));
    let marker = if member.is_open { "▾" } else { "▸" };
    let header_style = if header_focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let mut spans = vec![Span::styled(
        format!("{marker} Family member {}", member.index),
        header_style,
    )];
    if !member.is_open {
        let summary = format!("  {} ({})", member.name, member.relation);
        spans.push(Span::styled(summary, Style::default().fg(Color::Gray)));
        if !member.errors.is_empty() {
            spans.push(Span::styled(" !", Style::default().fg(Color::LightRed)));
        }
    }

    let header_area = Rect { height: 1, ..area };
    frame.render_widget(Paragraph::new(Line::from(spans)), header_area);

    if !member.is_open || area.height <= 1 {
        return;
    }

    let fields_area = Rect {
        y: area.y + 1,
        height: area.height - 1,
        ..area
    };
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .spacing(1)
        .split(fields_area);

    for (column, field) in columns.iter().zip(MemberField::ALL) {
        draw_field(
            frame,
            *column,
            field.label(),
            member.get(field),
            focused == Some(Focus::Member(member.id, field)),
            member.errors.get(field),
        );
    }
}
