//! Error types for currency formatting.

/// Errors raised by the locale formatting facility.
///
/// These never reach callers of the amount formatter; every variant has a
/// fallback path in [`crate::amount`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("Unsupported currency code for locale formatting: {0}")]
    UnsupportedCurrency(String),
}
