//! Application state module

mod app_state;
mod forms;
mod transition;
mod wizard;

pub use app_state::*;
pub use forms::*;
pub use transition::*;
pub use wizard::*;
