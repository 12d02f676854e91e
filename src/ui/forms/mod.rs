//! Form rendering module
//!
//! This module contains UI components for rendering the wizard steps:
//! - `field_renderer`: Field rendering utilities
//! - `user_form`: User information step
//! - `members_form`: Family member list step
//! - `summary`: Read-only summary step

mod field_renderer;
mod members_form;
mod summary;
mod user_form;

pub use members_form::draw as draw_members;
pub use summary::draw as draw_summary;
pub use user_form::draw as draw_user_info;
