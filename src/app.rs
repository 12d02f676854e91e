//! Application state and key handling

use crate::config::WizardConfig;
use crate::state::{
    pop_char, push_char, AppState, Focus, MemberField, Outcome, Record, Step, StepTransition,
    Transition, UserField, WizardAction,
};
use crate::submit::{LogSink, SubmissionSink};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Receives the snapshot when the summary is reached
    sink: Box<dyn SubmissionSink>,
    config: WizardConfig,
    /// Whether the app should quit
    quit: bool,
    /// Short feedback shown in the status bar
    pub copy_message: Option<String>,
}

impl App {
    /// Create a new App that logs submissions
    pub fn new(config: WizardConfig) -> Self {
        Self::with_sink(config, Box::new(LogSink))
    }

    pub fn with_sink(config: WizardConfig, sink: Box<dyn SubmissionSink>) -> Self {
        Self {
            state: AppState::default(),
            sink,
            config,
            quit: false,
            copy_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Advance the step animation, dropping it once finished
    pub fn update_transition(&mut self) {
        if let Some(ref mut transition) = self.state.transition {
            transition.update();
            if transition.is_complete() {
                self.state.transition = None;
            }
        }
    }

    pub fn is_animating(&self) -> bool {
        self.state.transition.is_some()
    }

    /// Apply an action to the wizard and react to its outcome
    pub fn dispatch(&mut self, action: WizardAction) -> Outcome {
        let wizard = std::mem::take(&mut self.state.wizard);
        let Transition { state, outcome } = wizard.apply(action);
        self.state.wizard = state;

        match &outcome {
            Outcome::Advanced { .. } | Outcome::Retreated { .. } | Outcome::Restarted => {
                self.on_step_changed();
            }
            Outcome::Submitted { .. } => {
                self.on_step_changed();
                self.submit();
            }
            Outcome::MemberAdded(id) => {
                self.state.focus_on(Focus::Member(*id, MemberField::Name));
            }
            Outcome::MemberRemoved(_) | Outcome::Edited => self.state.clamp_focus(),
            Outcome::Rejected => self.focus_first_error(),
            Outcome::Ignored => {}
        }

        outcome
    }

    fn on_step_changed(&mut self) {
        self.state.focus_index = 0;
        if self.config.animations_enabled() {
            let wizard = &self.state.wizard;
            self.state.transition = Some(StepTransition::new(
                wizard.previous_step,
                wizard.current_step,
                self.config.transition_duration(),
            ));
        }
    }

    fn submit(&mut self) {
        let result = match &self.state.wizard.submitted {
            Some(submission) => self.sink.submit(submission),
            None => Ok(()),
        };
        if let Err(err) = result {
            tracing::warn!("submission failed: {err:#}");
            self.push_error(format!("Failed to submit form: {err}"));
        }
    }

    /// Move focus onto the first field that failed validation
    fn focus_first_error(&mut self) {
        let wizard = &self.state.wizard;
        let target = match wizard.current_step {
            Step::UserInfo => UserField::ALL
                .iter()
                .find(|f| wizard.user_errors.contains_key(*f))
                .map(|f| Focus::User(*f)),
            Step::FamilyMembers => wizard.latest_member().and_then(|member| {
                MemberField::ALL
                    .iter()
                    .find(|f| member.errors.get(**f).is_some())
                    .map(|f| Focus::Member(member.id, *f))
            }),
            Step::Summary => None,
        };
        if let Some(target) = target {
            self.state.focus_on(target);
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_current_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.copy_message = None;

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('n') if ctrl => {
                self.dispatch(WizardAction::Next);
                return Ok(());
            }
            KeyCode::Char('p') if ctrl => {
                self.dispatch(WizardAction::Previous);
                return Ok(());
            }
            KeyCode::Esc => {
                self.dispatch(WizardAction::Previous);
                return Ok(());
            }
            _ => {}
        }

        match self.state.wizard.current_step {
            Step::UserInfo | Step::FamilyMembers => self.handle_form_key(key),
            Step::Summary => self.handle_summary_key(key)?,
        }
        Ok(())
    }

    /// Handle keys on the data entry steps
    fn handle_form_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let focused = self.state.focused();

        match key.code {
            KeyCode::Char('a') if ctrl => {
                self.dispatch(WizardAction::AddFamilyMember);
            }
            KeyCode::Char('d') if ctrl => self.remove_focused_member(),
            KeyCode::Tab | KeyCode::Down => self.state.next_focus(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_focus(),
            KeyCode::Enter => match focused {
                Some(Focus::MemberHeader(id)) => {
                    self.dispatch(WizardAction::ToggleMember(id));
                }
                _ if self.state.is_last_focus() => {
                    self.dispatch(WizardAction::Next);
                }
                _ => self.state.next_focus(),
            },
            KeyCode::Char(' ') if matches!(focused, Some(Focus::MemberHeader(_))) => {
                if let Some(id) = focused.and_then(Focus::member_id) {
                    self.dispatch(WizardAction::ToggleMember(id));
                }
            }
            KeyCode::Char(c) if !ctrl => self.edit_focused(|value| push_char(value, c)),
            KeyCode::Backspace => self.edit_focused(pop_char),
            _ => {}
        }
    }

    /// Handle keys on the summary step
    fn handle_summary_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('y') if key.modifiers.contains(crate::platform::COPY_MODIFIER) => {
                self.copy_summary();
            }
            KeyCode::Char('r') => {
                self.dispatch(WizardAction::Restart);
            }
            KeyCode::Char('q') => self.quit(),
            _ => {}
        }
        Ok(())
    }

    /// Replace the focused field's value with `edit(current)`
    fn edit_focused(&mut self, edit: impl FnOnce(&str) -> String) {
        let wizard = &self.state.wizard;
        let action = match self.state.focused() {
            Some(Focus::User(field)) => {
                WizardAction::EditUser(field, edit(wizard.user.get(field)))
            }
            Some(Focus::Member(id, field)) => match wizard.member(id) {
                Some(member) => WizardAction::EditMember(id, field, edit(member.get(field))),
                None => return,
            },
            Some(Focus::MemberHeader(_)) | None => return,
        };
        self.dispatch(action);
    }

    fn remove_focused_member(&mut self) {
        let position = self
            .state
            .focused()
            .and_then(Focus::member_id)
            .and_then(|id| self.state.wizard.members.iter().position(|m| m.id == id));
        if let Some(position) = position {
            self.dispatch(WizardAction::RemoveFamilyMember(position));
        }
    }

    fn copy_summary(&mut self) {
        let Some(text) = self.state.wizard.submitted.as_ref().map(|s| s.to_text()) else {
            return;
        };
        match copy_to_clipboard(&text) {
            Ok(()) => self.copy_message = Some("Copied summary to clipboard".to_string()),
            Err(err) => self.push_error(format!("Failed to copy: {err}")),
        }
    }
}

/// Copy text to the system clipboard
fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
