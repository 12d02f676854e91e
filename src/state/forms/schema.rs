//! Declarative field validation
//!
//! A [`Schema`] lists the rules for each field of a record. It can check the
//! whole record or only the subset of fields owned by one wizard step.

use super::field::{FieldName, MemberField, UserField};
use super::record::Record;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use thiserror::Error;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+\-]@([A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .unwrap_or_else(|e| panic!("invalid email pattern: {e}"))
});

/// A field failed one of its rules
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

/// Errors keyed by field, at most one per field
pub type FieldErrors<F> = BTreeMap<F, ValidationError>;

/// A single validation rule with the message reported on failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// Value must be a non-empty string
    Required(&'static str),
    /// Non-empty value must look like an email address
    Email(&'static str),
}

impl Rule {
    fn check(self, value: &str) -> Result<(), &'static str> {
        match self {
            Rule::Required(message) if value.is_empty() => Err(message),
            Rule::Email(message) if !value.is_empty() && !is_email(value) => Err(message),
            _ => Ok(()),
        }
    }
}

/// Returns true if `value` has the shape of an email address
pub fn is_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_RE.is_match(value)
}

/// Ordered rules for every field of a record type
#[derive(Debug, Clone)]
pub struct Schema<F: FieldName> {
    fields: Vec<(F, Vec<Rule>)>,
}

impl<F: FieldName> Schema<F> {
    pub fn new(fields: Vec<(F, Vec<Rule>)>) -> Self {
        Self { fields }
    }

    /// Fields this schema knows about, in declaration order
    pub fn fields(&self) -> impl Iterator<Item = F> + '_ {
        self.fields.iter().map(|(field, _)| *field)
    }

    /// Validate every field of the record
    pub fn validate<R: Record<F>>(&self, record: &R) -> Result<(), FieldErrors<F>> {
        let all: Vec<F> = self.fields().collect();
        self.validate_fields(record, &all)
    }

    /// Validate only the requested fields; others may be in any state
    pub fn validate_fields<R: Record<F>>(
        &self,
        record: &R,
        subset: &[F],
    ) -> Result<(), FieldErrors<F>> {
        let mut errors = FieldErrors::new();

        for (field, rules) in self.fields.iter().filter(|(f, _)| subset.contains(f)) {
            let value = record.get(*field);
            // First failing rule wins
            if let Some(message) = rules.iter().find_map(|rule| rule.check(value).err()) {
                errors.insert(
                    *field,
                    ValidationError {
                        field: field.name(),
                        message: message.to_string(),
                    },
                );
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Schema<UserField> {
    /// Rules for the user information step
    pub fn user_info() -> Self {
        Self::new(vec![
            (
                UserField::FirstName,
                vec![Rule::Required("First name is required")],
            ),
            (
                UserField::LastName,
                vec![Rule::Required("Last name is required")],
            ),
            (
                UserField::Email,
                vec![
                    Rule::Required("Email is required"),
                    Rule::Email("Invalid email address"),
                ],
            ),
            (
                UserField::ParentNames,
                vec![Rule::Required("Parent names are required")],
            ),
            (
                UserField::PhoneNumber,
                vec![Rule::Required("Phone number is required")],
            ),
            (UserField::Address, vec![Rule::Required("Address is required")]),
        ])
    }
}

impl Schema<MemberField> {
    /// Rules applied to each family member entry
    pub fn family_member() -> Self {
        Self::new(vec![
            (
                MemberField::Name,
                vec![Rule::Required("Please enter member name.")],
            ),
            (
                MemberField::Relation,
                vec![Rule::Required("Please enter member relation.")],
            ),
        ])
    }
}
