//! Error types for the vendor panel domain.

use crate::domain::ThreadId;

/// Domain-level errors (rules checked before a request is sent).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("Message body cannot be empty")]
    EmptyMessage,

    #[error("Password and confirmation do not match")]
    PasswordMismatch,

    #[error("No public URL returned by presign")]
    MissingPublicUrl,

    #[error("Support thread {0} is closed")]
    ThreadClosed(ThreadId),
}
