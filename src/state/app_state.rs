//! Application state definitions

use super::forms::{MemberField, MemberId, UserField};
use super::transition::StepTransition;
use super::wizard::{Step, WizardState};
use std::collections::VecDeque;

/// Something on screen that can hold keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    User(UserField),
    /// Collapsible header of a member entry
    MemberHeader(MemberId),
    Member(MemberId, MemberField),
}

impl Focus {
    /// Member this focus belongs to, if any
    pub fn member_id(self) -> Option<MemberId> {
        match self {
            Focus::User(_) => None,
            Focus::MemberHeader(id) | Focus::Member(id, _) => Some(id),
        }
    }
}

/// Focusable targets for the wizard's current step, in tab order
pub fn focus_targets(wizard: &WizardState) -> Vec<Focus> {
    match wizard.current_step {
        Step::UserInfo => UserField::ALL.iter().copied().map(Focus::User).collect(),
        Step::FamilyMembers => wizard
            .members
            .iter()
            .flat_map(|member| {
                let fields: &[MemberField] = if member.is_open {
                    &MemberField::ALL
                } else {
                    &[]
                };
                std::iter::once(Focus::MemberHeader(member.id))
                    .chain(fields.iter().map(move |f| Focus::Member(member.id, *f)))
            })
            .collect(),
        Step::Summary => Vec::new(),
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub wizard: WizardState,
    /// Index into `focus_targets(&wizard)`
    pub focus_index: usize,
    /// Slide animation for the last step change
    pub transition: Option<StepTransition>,
    /// Queue of error messages to display (FIFO)
    pub error_queue: VecDeque<String>,
}

impl AppState {
    pub fn focus_targets(&self) -> Vec<Focus> {
        focus_targets(&self.wizard)
    }

    pub fn focused(&self) -> Option<Focus> {
        self.focus_targets().get(self.focus_index).copied()
    }

    /// Move to next focus target (wraps)
    pub fn next_focus(&mut self) {
        let count = self.focus_targets().len();
        if count > 0 {
            self.focus_index = (self.focus_index + 1) % count;
        }
    }

    /// Move to previous focus target (wraps)
    pub fn prev_focus(&mut self) {
        let count = self.focus_targets().len();
        if count == 0 {
            return;
        }
        if self.focus_index == 0 {
            self.focus_index = count - 1;
        } else {
            self.focus_index -= 1;
        }
    }

    /// True when focus sits on the last target of the step
    pub fn is_last_focus(&self) -> bool {
        self.focus_index + 1 >= self.focus_targets().len()
    }

    /// Focus a specific target if it exists
    pub fn focus_on(&mut self, target: Focus) {
        if let Some(index) = self.focus_targets().iter().position(|f| *f == target) {
            self.focus_index = index;
        }
    }

    /// Keep focus inside the current target list
    pub fn clamp_focus(&mut self) {
        let count = self.focus_targets().len();
        self.focus_index = self.focus_index.min(count.saturating_sub(1));
    }

    /// Push an error message to the queue
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    /// Get the current error (front of queue)
    pub fn current_error(&self) -> Option<&String> {
        self.error_queue.front()
    }

    /// Dismiss the current error (pop from front)
    pub fn dismiss_current_error(&mut self) {
        self.error_queue.pop_front();
    }

    /// Check if there are any errors to display
    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }
}
