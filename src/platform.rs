//! Platform-specific configuration

use crossterm::event::KeyModifiers;

/// Platform-appropriate modifier for the copy shortcut
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Copy summary shortcut display
#[cfg(target_os = "macos")]
pub const COPY_SHORTCUT: &str = "Cmd+Y";

#[cfg(not(target_os = "macos"))]
pub const COPY_SHORTCUT: &str = "Ctrl+Y";

/// Shortcuts that are the same everywhere
pub const NEXT_SHORTCUT: &str = "Ctrl+N";
pub const ADD_MEMBER_SHORTCUT: &str = "Ctrl+A";
pub const REMOVE_MEMBER_SHORTCUT: &str = "Ctrl+D";
pub const RESTART_SHORTCUT: &str = "r";
