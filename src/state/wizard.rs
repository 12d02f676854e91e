//! Wizard step state machine
//!
//! [`WizardState`] is a plain value. Every user action goes through
//! [`WizardState::apply`], which consumes the state and returns the next one
//! together with an [`Outcome`] describing what happened.

use super::forms::{
    FamilyMember, FieldErrors, MemberErrors, MemberField, MemberId, Schema, Submission,
    UserField, UserInfo,
};

/// Notice shown when leaving the family step with no entries
pub const NO_MEMBERS_NOTICE: &str = "Please add at least one family member.";

/// One page of the wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Step {
    #[default]
    UserInfo,
    FamilyMembers,
    Summary,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::UserInfo, Step::FamilyMembers, Step::Summary];

    pub fn index(self) -> usize {
        match self {
            Self::UserInfo => 0,
            Self::FamilyMembers => 1,
            Self::Summary => 2,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::UserInfo => "Step 1",
            Self::FamilyMembers => "Step 2",
            Self::Summary => "Step 3",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::UserInfo => "User Information",
            Self::FamilyMembers => "Add Family Members",
            Self::Summary => "Complete",
        }
    }

    pub fn next(self) -> Option<Self> {
        match self {
            Self::UserInfo => Some(Self::FamilyMembers),
            Self::FamilyMembers => Some(Self::Summary),
            Self::Summary => None,
        }
    }

    pub fn prev(self) -> Option<Self> {
        match self {
            Self::UserInfo => None,
            Self::FamilyMembers => Some(Self::UserInfo),
            Self::Summary => Some(Self::FamilyMembers),
        }
    }

    pub fn is_terminal(self) -> bool {
        self.next().is_none()
    }
}

/// Everything a user can do to the wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardAction {
    Next,
    Previous,
    AddFamilyMember,
    /// Remove the member at this list position
    RemoveFamilyMember(usize),
    EditUser(UserField, String),
    EditMember(MemberId, MemberField, String),
    ToggleMember(MemberId),
    Restart,
}

/// Result of applying an action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Advanced { from: Step, to: Step },
    /// Advanced onto the terminal step and captured a snapshot
    Submitted { from: Step, to: Step },
    Retreated { from: Step, to: Step },
    MemberAdded(MemberId),
    MemberRemoved(MemberId),
    Edited,
    /// Validation failed; errors are attached to the state
    Rejected,
    /// Action does not apply in the current state
    Ignored,
    Restarted,
}

/// Next state plus what changed
#[derive(Debug, Clone)]
pub struct Transition {
    pub state: WizardState,
    pub outcome: Outcome,
}

/// Complete wizard state, owned by a single controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardState {
    pub current_step: Step,
    /// Only used to pick the slide direction of step animations
    pub previous_step: Step,
    pub user: UserInfo,
    pub user_errors: FieldErrors<UserField>,
    pub members: Vec<FamilyMember>,
    /// Index given to the next member entry
    pub next_member_index: u32,
    /// Step-level message not tied to a field
    pub notice: Option<String>,
    pub submitted: Option<Submission>,
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardState {
    /// Fresh wizard with one open, blank member entry
    pub fn new() -> Self {
        Self {
            current_step: Step::UserInfo,
            previous_step: Step::UserInfo,
            user: UserInfo::default(),
            user_errors: FieldErrors::new(),
            members: vec![FamilyMember::new(1)],
            next_member_index: 2,
            notice: None,
            submitted: None,
        }
    }

    /// Last-inserted member, if any
    pub fn latest_member(&self) -> Option<&FamilyMember> {
        self.members.last()
    }

    pub fn member(&self, id: MemberId) -> Option<&FamilyMember> {
        self.members.iter().find(|m| m.id == id)
    }

    fn member_mut(&mut self, id: MemberId) -> Option<&mut FamilyMember> {
        self.members.iter_mut().find(|m| m.id == id)
    }

    /// Apply one action and return the resulting state
    pub fn apply(self, action: WizardAction) -> Transition {
        let transition = match action {
            WizardAction::Next => self.next(),
            WizardAction::Previous => self.previous(),
            WizardAction::AddFamilyMember => self.add_family_member(),
            WizardAction::RemoveFamilyMember(position) => self.remove_family_member(position),
            WizardAction::EditUser(field, value) => self.edit_user(field, value),
            WizardAction::EditMember(id, field, value) => self.edit_member(id, field, value),
            WizardAction::ToggleMember(id) => self.toggle_member(id),
            WizardAction::Restart => self.restart(),
        };
        tracing::debug!(
            outcome = ?transition.outcome,
            step = ?transition.state.current_step,
            "wizard transition"
        );
        transition
    }

    fn stay(self, outcome: Outcome) -> Transition {
        Transition {
            state: self,
            outcome,
        }
    }

    fn next(mut self) -> Transition {
        let Some(to) = self.current_step.next() else {
            return self.stay(Outcome::Ignored);
        };
        let from = self.current_step;

        let valid = match from {
            Step::UserInfo => self.validate_user(),
            Step::FamilyMembers => self.validate_latest_member(),
            Step::Summary => false,
        };
        if !valid {
            return self.stay(Outcome::Rejected);
        }

        let outcome = if to.is_terminal() {
            // The user record is blank after a submission, so coming back
            // from the summary keeps the earlier snapshot
            if Schema::user_info().validate(&self.user).is_ok() {
                self.submitted = Some(Submission::capture(&self.user, &self.members));
                // A restart begins blank; members stay for the summary
                self.user = UserInfo::default();
                Outcome::Submitted { from, to }
            } else {
                tracing::debug!("user information incomplete, keeping previous submission");
                Outcome::Advanced { from, to }
            }
        } else {
            Outcome::Advanced { from, to }
        };

        self.previous_step = from;
        self.current_step = to;
        self.stay(outcome)
    }

    fn previous(mut self) -> Transition {
        let Some(to) = self.current_step.prev() else {
            return self.stay(Outcome::Ignored);
        };
        let from = self.current_step;
        self.notice = None;
        self.previous_step = from;
        self.current_step = to;
        self.stay(Outcome::Retreated { from, to })
    }

    fn add_family_member(mut self) -> Transition {
        if self.current_step != Step::FamilyMembers {
            return self.stay(Outcome::Ignored);
        }
        if !self.members.is_empty() && !self.validate_latest_member() {
            return self.stay(Outcome::Rejected);
        }

        let member = FamilyMember::new(self.next_member_index);
        let id = member.id;
        self.next_member_index += 1;
        self.members.push(member);
        self.notice = None;
        self.stay(Outcome::MemberAdded(id))
    }

    fn remove_family_member(mut self, position: usize) -> Transition {
        if position >= self.members.len() {
            return self.stay(Outcome::Ignored);
        }
        let removed = self.members.remove(position);
        self.stay(Outcome::MemberRemoved(removed.id))
    }

    fn edit_user(mut self, field: UserField, value: String) -> Transition {
        if self.current_step != Step::UserInfo {
            return self.stay(Outcome::Ignored);
        }
        self.user.set(field, value);
        self.stay(Outcome::Edited)
    }

    fn edit_member(mut self, id: MemberId, field: MemberField, value: String) -> Transition {
        if self.current_step != Step::FamilyMembers {
            return self.stay(Outcome::Ignored);
        }
        match self.member_mut(id) {
            Some(member) => {
                member.set(field, value);
                self.stay(Outcome::Edited)
            }
            None => self.stay(Outcome::Ignored),
        }
    }

    fn toggle_member(mut self, id: MemberId) -> Transition {
        match self.member_mut(id) {
            Some(member) => {
                member.is_open = !member.is_open;
                self.stay(Outcome::Edited)
            }
            None => self.stay(Outcome::Ignored),
        }
    }

    fn restart(self) -> Transition {
        if self.current_step != Step::Summary {
            return self.stay(Outcome::Ignored);
        }
        let mut fresh = Self::new();
        fresh.previous_step = self.current_step;
        Transition {
            state: fresh,
            outcome: Outcome::Restarted,
        }
    }

    /// Validate all user fields, replacing the user errors
    fn validate_user(&mut self) -> bool {
        match Schema::user_info().validate_fields(&self.user, &UserField::ALL) {
            Ok(()) => {
                self.user_errors.clear();
                true
            }
            Err(errors) => {
                tracing::debug!(count = errors.len(), "user information rejected");
                self.user_errors = errors;
                false
            }
        }
    }

    /// Validate the latest member's pair, replacing that member's errors
    fn validate_latest_member(&mut self) -> bool {
        let Some(member) = self.members.last_mut() else {
            self.notice = Some(NO_MEMBERS_NOTICE.to_string());
            return false;
        };

        match Schema::family_member().validate(&*member) {
            Ok(()) => {
                member.errors = MemberErrors::default();
                self.notice = None;
                true
            }
            Err(errors) => {
                tracing::debug!(
                    member = member.index,
                    count = errors.len(),
                    "family member rejected"
                );
                member.errors = MemberErrors {
                    member_name: errors.get(&MemberField::Name).map(|e| e.message.clone()),
                    member_relation: errors
                        .get(&MemberField::Relation)
                        .map(|e| e.message.clone()),
                };
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fill_user(state: WizardState, email: &str) -> WizardState {
        let values = [
            (UserField::FirstName, "A"),
            (UserField::LastName, "B"),
            (UserField::Email, email),
            (UserField::PhoneNumber, "1"),
            (UserField::ParentNames, "P"),
            (UserField::Address, "X"),
        ];
        values.into_iter().fold(state, |state, (field, value)| {
            state
                .apply(WizardAction::EditUser(field, value.to_string()))
                .state
        })
    }

    fn fill_latest(state: WizardState, name: &str, relation: &str) -> WizardState {
        let id = state.latest_member().map(|m| m.id).unwrap();
        let state = state
            .apply(WizardAction::EditMember(id, MemberField::Name, name.to_string()))
            .state;
        state
            .apply(WizardAction::EditMember(
                id,
                MemberField::Relation,
                relation.to_string(),
            ))
            .state
    }

    fn on_family_step() -> WizardState {
        let state = fill_user(WizardState::new(), "a@b.co");
        state.apply(WizardAction::Next).state
    }

    mod step {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_ordering_and_indices() {
            for (i, step) in Step::ALL.iter().enumerate() {
                assert_eq!(step.index(), i);
            }
            assert!(Step::UserInfo < Step::Summary);
        }

        #[test]
        fn test_next_and_prev_bounds() {
            assert_eq!(Step::UserInfo.prev(), None);
            assert_eq!(Step::Summary.next(), None);
            assert!(Step::Summary.is_terminal());
            assert!(!Step::FamilyMembers.is_terminal());
        }

        #[test]
        fn test_labels() {
            assert_eq!(Step::UserInfo.id(), "Step 1");
            assert_eq!(Step::FamilyMembers.name(), "Add Family Members");
        }
    }

    mod user_step {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_state() {
            let state = WizardState::new();
            assert_eq!(state.current_step, Step::UserInfo);
            assert_eq!(state.members.len(), 1);
            assert_eq!(state.members[0].index, 1);
            assert!(state.submitted.is_none());
        }

        #[test]
        fn test_next_with_blank_fields_is_rejected() {
            let t = WizardState::new().apply(WizardAction::Next);
            assert_eq!(t.outcome, Outcome::Rejected);
            assert_eq!(t.state.current_step, Step::UserInfo);
            assert_eq!(t.state.user_errors.len(), 6);
        }

        #[test]
        fn test_bad_email_reports_only_email() {
            let t = fill_user(WizardState::new(), "bad").apply(WizardAction::Next);
            assert_eq!(t.outcome, Outcome::Rejected);
            assert_eq!(t.state.current_step, Step::UserInfo);
            let fields: Vec<UserField> = t.state.user_errors.keys().copied().collect();
            assert_eq!(fields, vec![UserField::Email]);
            assert_eq!(
                t.state.user_errors[&UserField::Email].message,
                "Invalid email address"
            );
        }

        #[test]
        fn test_each_missing_field_blocks_next() {
            for missing in UserField::ALL {
                let state = fill_user(WizardState::new(), "a@b.co")
                    .apply(WizardAction::EditUser(missing, String::new()))
                    .state;
                let t = state.apply(WizardAction::Next);
                assert_eq!(t.outcome, Outcome::Rejected, "{missing:?}");
                assert!(t.state.user_errors.contains_key(&missing));
            }
        }

        #[test]
        fn test_valid_next_advances_and_clears_errors() {
            let rejected = WizardState::new().apply(WizardAction::Next).state;
            let t = fill_user(rejected, "a@b.co").apply(WizardAction::Next);
            assert_eq!(
                t.outcome,
                Outcome::Advanced {
                    from: Step::UserInfo,
                    to: Step::FamilyMembers
                }
            );
            assert_eq!(t.state.current_step, Step::FamilyMembers);
            assert_eq!(t.state.previous_step, Step::UserInfo);
            assert!(t.state.user_errors.is_empty());
        }

        #[test]
        fn test_previous_on_first_step_is_ignored() {
            let state = WizardState::new();
            let t = state.clone().apply(WizardAction::Previous);
            assert_eq!(t.outcome, Outcome::Ignored);
            assert_eq!(t.state, state);
        }

        #[test]
        fn test_edit_user_does_not_validate() {
            let t = WizardState::new().apply(WizardAction::EditUser(
                UserField::Email,
                "bad".to_string(),
            ));
            assert_eq!(t.outcome, Outcome::Edited);
            assert!(t.state.user_errors.is_empty());
            assert_eq!(t.state.user.email, "bad");
        }
    }

    mod family_step {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_add_with_blank_relation_is_rejected() {
            let state = fill_latest(on_family_step(), "Grace", "");
            let t = state.apply(WizardAction::AddFamilyMember);
            assert_eq!(t.outcome, Outcome::Rejected);
            assert_eq!(t.state.members.len(), 1);
            assert_eq!(
                t.state.members[0].errors,
                MemberErrors {
                    member_name: None,
                    member_relation: Some("Please enter member relation.".to_string()),
                }
            );
        }

        #[test]
        fn test_add_with_filled_member_appends_one() {
            let state = fill_latest(on_family_step(), "Grace", "Sister");
            let t = state.apply(WizardAction::AddFamilyMember);
            assert!(matches!(t.outcome, Outcome::MemberAdded(_)));
            assert_eq!(t.state.members.len(), 2);
            assert_eq!(t.state.members[1].index, 2);
            assert!(t.state.members[1].is_open);
            assert!(t.state.members[1].errors.is_empty());
        }

        #[test]
        fn test_add_clears_previous_errors_on_success() {
            let state = fill_latest(on_family_step(), "", "");
            let state = state.apply(WizardAction::AddFamilyMember).state;
            assert!(!state.members[0].errors.is_empty());

            let state = fill_latest(state, "Grace", "Sister");
            let t = state.apply(WizardAction::AddFamilyMember);
            assert!(t.state.members[0].errors.is_empty());
        }

        #[test]
        fn test_add_outside_family_step_is_ignored() {
            let t = WizardState::new().apply(WizardAction::AddFamilyMember);
            assert_eq!(t.outcome, Outcome::Ignored);
            assert_eq!(t.state.members.len(), 1);
        }

        #[test]
        fn test_remove_preserves_order() {
            let mut state = on_family_step();
            for name in ["one", "two", "three"] {
                state = fill_latest(state, name, "rel");
                state = state.apply(WizardAction::AddFamilyMember).state;
            }
            assert_eq!(state.members.len(), 4);

            let removed_id = state.members[1].id;
            let t = state.apply(WizardAction::RemoveFamilyMember(1));
            assert_eq!(t.outcome, Outcome::MemberRemoved(removed_id));
            let names: Vec<&str> = t.state.members.iter().map(|m| m.name.as_str()).collect();
            assert_eq!(names, vec!["one", "three", ""]);
        }

        #[test]
        fn test_remove_out_of_range_is_ignored() {
            let state = on_family_step();
            let t = state.apply(WizardAction::RemoveFamilyMember(5));
            assert_eq!(t.outcome, Outcome::Ignored);
            assert_eq!(t.state.members.len(), 1);
        }

        #[test]
        fn test_indices_are_not_reused_after_removal() {
            let state = fill_latest(on_family_step(), "Grace", "Sister");
            let state = state.apply(WizardAction::AddFamilyMember).state;
            let state = state.apply(WizardAction::RemoveFamilyMember(1)).state;
            let state = state.apply(WizardAction::AddFamilyMember).state;
            let indices: Vec<u32> = state.members.iter().map(|m| m.index).collect();
            assert_eq!(indices, vec![1, 3]);
        }

        #[test]
        fn test_latest_is_last_inserted_after_middle_removal() {
            let mut state = on_family_step();
            for name in ["one", "two"] {
                state = fill_latest(state, name, "rel");
                state = state.apply(WizardAction::AddFamilyMember).state;
            }
            let state = fill_latest(state, "three", "");
            let state = state.apply(WizardAction::RemoveFamilyMember(0)).state;
            let t = state.apply(WizardAction::Next);
            assert_eq!(t.outcome, Outcome::Rejected);
            let latest = t.state.latest_member().unwrap();
            assert_eq!(latest.name, "three");
            assert!(latest.errors.member_relation.is_some());
            assert!(t.state.members[0].errors.is_empty());
        }

        #[test]
        fn test_empty_list_next_is_rejected_with_notice() {
            let state = on_family_step()
                .apply(WizardAction::RemoveFamilyMember(0))
                .state;
            assert!(state.members.is_empty());

            let t = state.apply(WizardAction::Next);
            assert_eq!(t.outcome, Outcome::Rejected);
            assert_eq!(t.state.notice.as_deref(), Some(NO_MEMBERS_NOTICE));
        }

        #[test]
        fn test_empty_list_add_creates_member() {
            let state = on_family_step()
                .apply(WizardAction::RemoveFamilyMember(0))
                .state;
            let t = state.apply(WizardAction::AddFamilyMember);
            assert!(matches!(t.outcome, Outcome::MemberAdded(_)));
            assert_eq!(t.state.members.len(), 1);
            assert_eq!(t.state.members[0].index, 2);
        }

        #[test]
        fn test_toggle_only_flips_is_open() {
            let state = fill_latest(on_family_step(), "Grace", "Sister");
            let id = state.members[0].id;
            let before = state.members[0].clone();
            let t = state.apply(WizardAction::ToggleMember(id));
            assert_eq!(t.outcome, Outcome::Edited);
            assert!(!t.state.members[0].is_open);
            assert_eq!(
                t.state.members[0],
                FamilyMember {
                    is_open: false,
                    ..before
                }
            );
        }

        #[test]
        fn test_edit_unknown_member_is_ignored() {
            let t = on_family_step().apply(WizardAction::EditMember(
                MemberId::new(),
                MemberField::Name,
                "x".to_string(),
            ));
            assert_eq!(t.outcome, Outcome::Ignored);
        }

        #[test]
        fn test_previous_returns_to_user_step_with_values() {
            let t = on_family_step().apply(WizardAction::Previous);
            assert_eq!(
                t.outcome,
                Outcome::Retreated {
                    from: Step::FamilyMembers,
                    to: Step::UserInfo
                }
            );
            assert_eq!(t.state.previous_step, Step::FamilyMembers);
            assert_eq!(t.state.user.first_name, "A");
        }
    }

    mod summary_step {
        use super::*;
        use pretty_assertions::assert_eq;

        fn on_summary() -> WizardState {
            let state = fill_latest(on_family_step(), "Grace", "Sister");
            state.apply(WizardAction::Next).state
        }

        #[test]
        fn test_entering_summary_captures_snapshot() {
            let state = fill_latest(on_family_step(), "Grace", "Sister");
            let t = state.apply(WizardAction::Next);
            assert_eq!(
                t.outcome,
                Outcome::Submitted {
                    from: Step::FamilyMembers,
                    to: Step::Summary
                }
            );

            let submitted = t.state.submitted.as_ref().unwrap();
            assert_eq!(
                submitted.user,
                UserInfo {
                    first_name: "A".to_string(),
                    last_name: "B".to_string(),
                    email: "a@b.co".to_string(),
                    phone_number: "1".to_string(),
                    parent_names: "P".to_string(),
                    address: "X".to_string(),
                }
            );
            assert_eq!(submitted.members.len(), 1);
            assert_eq!(submitted.members[0].relation, "Sister");
        }

        #[test]
        fn test_snapshot_uses_values_from_last_successful_next() {
            let state = on_family_step().apply(WizardAction::Previous).state;
            let state = state
                .apply(WizardAction::EditUser(UserField::FirstName, "Z".to_string()))
                .state;
            let state = state.apply(WizardAction::Next).state;
            let state = fill_latest(state, "Grace", "Sister");
            let state = state.apply(WizardAction::Next).state;
            assert_eq!(state.submitted.unwrap().user.first_name, "Z");
        }

        #[test]
        fn test_returning_to_summary_keeps_earlier_snapshot() {
            let state = on_summary();
            let first = state.submitted.clone();

            let state = state.apply(WizardAction::Previous).state;
            assert_eq!(state.current_step, Step::FamilyMembers);
            let t = state.apply(WizardAction::Next);

            assert_eq!(
                t.outcome,
                Outcome::Advanced {
                    from: Step::FamilyMembers,
                    to: Step::Summary
                }
            );
            assert_eq!(t.state.current_step, Step::Summary);
            assert_eq!(t.state.submitted, first);
            assert_eq!(t.state.submitted.unwrap().user.first_name, "A");
        }

        #[test]
        fn test_raw_input_reset_but_members_kept() {
            let state = on_summary();
            assert_eq!(state.user, UserInfo::default());
            assert_eq!(state.members.len(), 1);
            assert_eq!(state.members[0].name, "Grace");
        }

        #[test]
        fn test_next_on_summary_is_idempotent() {
            let state = on_summary();
            let mut current = state.clone();
            for _ in 0..3 {
                let t = current.apply(WizardAction::Next);
                assert_eq!(t.outcome, Outcome::Ignored);
                current = t.state;
            }
            assert_eq!(current, state);
        }

        #[test]
        fn test_restart_starts_blank() {
            let t = on_summary().apply(WizardAction::Restart);
            assert_eq!(t.outcome, Outcome::Restarted);
            assert_eq!(t.state.current_step, Step::UserInfo);
            assert_eq!(t.state.previous_step, Step::Summary);
            assert!(t.state.submitted.is_none());
            assert_eq!(t.state.members.len(), 1);
            assert_eq!(t.state.members[0].name, "");
        }

        #[test]
        fn test_restart_outside_summary_is_ignored() {
            let t = on_family_step().apply(WizardAction::Restart);
            assert_eq!(t.outcome, Outcome::Ignored);
            assert_eq!(t.state.current_step, Step::FamilyMembers);
        }

        #[test]
        fn test_edits_ignored_on_summary() {
            let state = on_summary();
            let t = state.apply(WizardAction::EditUser(
                UserField::FirstName,
                "late".to_string(),
            ));
            assert_eq!(t.outcome, Outcome::Ignored);
            assert_eq!(t.state.user.first_name, "");
        }
    }
}
