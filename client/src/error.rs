//! Shared error-code contract.

/// Stable machine-readable code for a user-facing error.
pub trait ErrorCode {
    fn error_code(&self) -> &'static str;
}
