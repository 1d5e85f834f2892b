//! Error types for validated tween construction.
//!
//! The engine itself never fails: decomposition is total and recomposition
//! degrades on malformed pairings. These errors exist for the opt-in
//! checked constructor ([`crate::Tween::checked`]) so callers and test
//! suites can surface mistakes that playback would otherwise absorb.

use crate::value::ValueKind;
use thiserror::Error;

/// Result type for validated tween construction.
pub type Result<T> = std::result::Result<T, TweenError>;

/// Malformed tween pairings caught by [`crate::Tween::checked`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenError {
    /// The endpoints are not the same kind of value.
    #[error("tween endpoints have mismatched kinds: from is {from:?}, to is {to:?}")]
    EndpointKindMismatch { from: ValueKind, to: ValueKind },

    /// Complex endpoints carry different numbers of numeric tokens.
    #[error("complex endpoints carry {from} and {to} numeric tokens")]
    TokenCountMismatch { from: usize, to: usize },
}
