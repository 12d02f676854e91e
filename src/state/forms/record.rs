//! Form records: user details, family members and the submitted snapshot

use super::field::{FieldName, MemberField, UserField};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A record whose values can be read by field name
pub trait Record<F: FieldName> {
    fn get(&self, field: F) -> &str;
}

/// Top-level user details entered on the first step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub parent_names: String,
    pub address: String,
}

impl UserInfo {
    pub fn set(&mut self, field: UserField, value: String) {
        match field {
            UserField::FirstName => self.first_name = value,
            UserField::LastName => self.last_name = value,
            UserField::Email => self.email = value,
            UserField::PhoneNumber => self.phone_number = value,
            UserField::ParentNames => self.parent_names = value,
            UserField::Address => self.address = value,
        }
    }
}

impl Record<UserField> for UserInfo {
    fn get(&self, field: UserField) -> &str {
        match field {
            UserField::FirstName => &self.first_name,
            UserField::LastName => &self.last_name,
            UserField::Email => &self.email,
            UserField::PhoneNumber => &self.phone_number,
            UserField::ParentNames => &self.parent_names,
            UserField::Address => &self.address,
        }
    }
}

/// Stable identity of a family member entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberId(Uuid);

impl MemberId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for MemberId {
    fn default() -> Self {
        Self::new()
    }
}

/// Inline error messages for one member entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberErrors {
    pub member_name: Option<String>,
    pub member_relation: Option<String>,
}

impl MemberErrors {
    pub fn get(&self, field: MemberField) -> Option<&str> {
        match field {
            MemberField::Name => self.member_name.as_deref(),
            MemberField::Relation => self.member_relation.as_deref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.member_name.is_none() && self.member_relation.is_none()
    }
}

/// One repeatable family member sub-form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyMember {
    pub id: MemberId,
    /// Sequential display number, never reused
    pub index: u32,
    pub is_open: bool,
    pub name: String,
    pub relation: String,
    pub errors: MemberErrors,
}

impl FamilyMember {
    pub fn new(index: u32) -> Self {
        Self {
            id: MemberId::new(),
            index,
            is_open: true,
            name: String::new(),
            relation: String::new(),
            errors: MemberErrors::default(),
        }
    }

    pub fn set(&mut self, field: MemberField, value: String) {
        match field {
            MemberField::Name => self.name = value,
            MemberField::Relation => self.relation = value,
        }
    }

    /// Entry as it appears in a submission
    pub fn entry(&self) -> MemberEntry {
        MemberEntry {
            index: self.index,
            name: self.name.clone(),
            relation: self.relation.clone(),
        }
    }
}

impl Record<MemberField> for FamilyMember {
    fn get(&self, field: MemberField) -> &str {
        match field {
            MemberField::Name => &self.name,
            MemberField::Relation => &self.relation,
        }
    }
}

/// A family member as captured in the submitted snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberEntry {
    pub index: u32,
    pub name: String,
    pub relation: String,
}

/// Read-only snapshot taken when data entry completes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub user: UserInfo,
    pub members: Vec<MemberEntry>,
    pub submitted_at: DateTime<Utc>,
}

impl Submission {
    pub fn capture(user: &UserInfo, members: &[FamilyMember]) -> Self {
        Self {
            user: user.clone(),
            members: members.iter().map(FamilyMember::entry).collect(),
            submitted_at: Utc::now(),
        }
    }

    /// Plain-text rendering used for the clipboard
    pub fn to_text(&self) -> String {
        let mut lines: Vec<String> = UserField::ALL
            .iter()
            .map(|field| format!("{}: {}", field.label(), self.user.get(*field)))
            .collect();

        if !self.members.is_empty() {
            lines.push(String::new());
            lines.push("Family Members".to_string());
        }
        for (position, member) in self.members.iter().enumerate() {
            lines.push(format!("Member {} Name: {}", position + 1, member.name));
            lines.push(format!(
                "Member {} Relation: {}",
                position + 1,
                member.relation
            ));
        }

        lines.join("\n")
    }
}
