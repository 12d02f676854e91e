//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use crate::state::Step;
use ratatui::{layout::Rect, Frame};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let screen = layout::create_layout(frame.area());
    let step = app.state.wizard.current_step;

    layout::draw_step_indicator(frame, screen.steps, step);

    let offset = app
        .state
        .transition
        .as_ref()
        .map(|t| t.offset(screen.content.width))
        .unwrap_or(0);
    let content = slide_rect(screen.content, offset);

    match step {
        Step::UserInfo => forms::draw_user_info(frame, content, app),
        Step::FamilyMembers => forms::draw_members(frame, content, app),
        Step::Summary => forms::draw_summary(frame, content, app),
    }

    layout::draw_navigation(frame, screen.navigation, step);
    layout::draw_status_bar(frame, screen.status, app);

    // Error dialog is drawn last so it sits on top
    if let Some(error) = app.state.current_error() {
        let remaining = app.state.error_queue.len().saturating_sub(1);
        components::render_error_dialog(frame, error, remaining);
    }
}

/// Shift `area` horizontally by `offset`, clipping to the original bounds
fn slide_rect(area: Rect, offset: i32) -> Rect {
    let shift = offset.unsigned_abs().min(u32::from(area.width)) as u16;
    if offset >= 0 {
        Rect {
            x: area.x + shift,
            width: area.width - shift,
            ..area
        }
    } else {
        Rect {
            width: area.width - shift,
            ..area
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_rect_no_offset() {
        let area = Rect::new(0, 4, 80, 10);
        assert_eq!(slide_rect(area, 0), area);
    }

    #[test]
    fn test_slide_rect_from_right() {
        let area = Rect::new(0, 4, 80, 10);
        assert_eq!(slide_rect(area, 20), Rect::new(20, 4, 60, 10));
    }

    #[test]
    fn test_slide_rect_from_left() {
        let area = Rect::new(0, 4, 80, 10);
        assert_eq!(slide_rect(area, -20), Rect::new(0, 4, 60, 10));
    }

    #[test]
    fn test_slide_rect_clamps_to_width() {
        let area = Rect::new(5, 0, 10, 3);
        assert_eq!(slide_rect(area, 50), Rect::new(15, 0, 0, 3));
    }
}
