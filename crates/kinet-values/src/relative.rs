//! Relative-delta resolution.
//!
//! A decomposed relative expression (`+=`, `-=`, `*=`) carries only the
//! delta magnitude; this module combines it with a base number. Operator
//! recognition and validation happen during decomposition, so no checking
//! is repeated here.

use crate::value::Operator;

impl Operator {
    /// Combine a base number with a delta under this operator.
    pub fn apply(self, base: f64, delta: f64) -> f64 {
        match self {
            Self::Add => base + delta,
            Self::Subtract => base - delta,
            Self::Multiply => base * delta,
        }
    }
}

/// Free-function form of [`Operator::apply`].
#[inline]
pub fn resolve_relative(base: f64, delta: f64, operator: Operator) -> f64 {
    operator.apply(base, delta)
}
