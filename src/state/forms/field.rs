//! Form field names and text editing helpers

use serde::{Deserialize, Serialize};

/// A typed set of field names that a schema can address
pub trait FieldName: Copy + Ord + std::fmt::Debug {
    /// Stable machine name of the field
    fn name(self) -> &'static str;
    /// Human-readable label shown next to the input
    fn label(self) -> &'static str;
}

/// Fields collected on the user information step
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UserField {
    FirstName,
    LastName,
    Email,
    PhoneNumber,
    ParentNames,
    Address,
}

impl UserField {
    /// All user fields in display order
    pub const ALL: [UserField; 6] = [
        UserField::FirstName,
        UserField::LastName,
        UserField::Email,
        UserField::PhoneNumber,
        UserField::ParentNames,
        UserField::Address,
    ];
}

impl FieldName for UserField {
    fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::PhoneNumber => "phonenumber",
            Self::ParentNames => "parentnames",
            Self::Address => "address",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Email => "Email address",
            Self::PhoneNumber => "Phone number",
            Self::ParentNames => "Parent names",
            Self::Address => "Address",
        }
    }
}

/// Fields repeated for every family member entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MemberField {
    Name,
    Relation,
}

impl MemberField {
    pub const ALL: [MemberField; 2] = [MemberField::Name, MemberField::Relation];
}

impl FieldName for MemberField {
    fn name(self) -> &'static str {
        match self {
            Self::Name => "memberName",
            Self::Relation => "memberRelation",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Name => "Member name",
            Self::Relation => "Member relation",
        }
    }
}

/// Append a typed character to a field value
pub fn push_char(value: &str, c: char) -> String {
    let mut next = String::with_capacity(value.len() + c.len_utf8());
    next.push_str(value);
    next.push(c);
    next
}

/// Remove the last character from a field value
pub fn pop_char(value: &str) -> String {
    let mut next = value.to_string();
    next.pop();
    next
}
