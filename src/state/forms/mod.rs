//! Form domain types
//!
//! Field names, records and the validation schema used by the wizard.

mod field;
mod record;
mod schema;

pub use field::{pop_char, push_char, FieldName, MemberField, UserField};
pub use record::{
    FamilyMember, MemberErrors, MemberId, Record, Submission, UserInfo,
};
pub use schema::{FieldErrors, Schema};
