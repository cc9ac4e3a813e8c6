//! Page modules for the shell's screens.
//!
//! ARCHITECTURE
//! ============
//! `shell` picks a screen from auth state; each screen owns its store calls
//! and delegates presentation details to `components`.

pub mod auth;
pub mod home;
pub mod shell;
