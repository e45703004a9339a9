use thiserror::Error;

/// A color string that does not denormalize to exactly six hex digits.
///
/// Stored records always satisfy the 6-digit invariant, so hitting this
/// outside of user input means the remote store handed back a record it
/// should never have accepted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color format: {0:?} (expected 6 hex digits, optional leading '#')")]
pub struct InvalidColorFormat(pub String);
