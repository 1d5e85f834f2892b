//! Core value types for the animation engine.
//!
//! This module defines the fundamental types shared by decomposition and
//! recomposition:
//! - `Value`: tagged representation of one parsed animatable input
//! - `ValueKind`: fieldless discriminant for dispatch and diagnostics
//! - `Operator`: relative-delta operator parsed from `+=` / `-=` / `*=`
//! - `RawValue`: unparsed input as handed to the decomposer
//! - `MotionPath`: seam trait for externally owned motion paths

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Externally owned motion path that positions can be sampled from.
///
/// The engine only ever reads from a path: it queries the total traversable
/// length once at decomposition time and samples a position per frame.
/// Implementations are typically backed by SVG path geometry, which stays
/// entirely outside this crate.
pub trait MotionPath: Send + Sync {
    /// Total traversable length of the path.
    fn total_length(&self) -> f64;

    /// Positional value at the given arc length along the path.
    fn position_at(&self, length: f64) -> f64;
}

/// Shared, read-only handle to a motion path.
pub type PathHandle = Arc<dyn MotionPath>;

/// Relative-delta operator, parsed from a `+=` / `-=` / `*=` prefix.
///
/// A decomposed relative value carries only the delta magnitude; combining
/// it with a base number is the caller's job via [`Operator::apply`] or
/// [`crate::resolve_relative`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
}

impl Operator {
    /// The single-character symbol form of this operator.
    pub fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
        }
    }
}

/// Fieldless discriminant of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Number,
    Unit,
    Color,
    Path,
    Complex,
}

/// Typed, parsed representation of one raw animatable input.
///
/// Every raw input decomposes into exactly one of these variants; the
/// variant is fixed for the lifetime of the value. A `from`/`to` pair of
/// same-kind values plus a progress fraction forms a [`crate::Tween`].
#[derive(Clone)]
pub enum Value {
    /// Plain numeric value.
    Number {
        number: f64,
        /// Present when the input was a relative delta (e.g. `+=20`).
        operator: Option<Operator>,
    },
    /// Number with a unit suffix (length, angle, percentage, ...).
    Unit {
        number: f64,
        unit: String,
        /// Present when the input was a relative delta (e.g. `-=10px`).
        operator: Option<Operator>,
    },
    /// RGBA channels; R/G/B in 0–255, alpha in 0–1.
    Color { channels: [f64; 4] },
    /// Motion-path handle plus its total traversable length.
    ///
    /// `unit` is empty by construction; it exists so path output formats
    /// through the same number-plus-unit code path as everything else.
    Path {
        path: PathHandle,
        length: f64,
        unit: String,
    },
    /// Alternating numeric tokens and literal text segments extracted from
    /// an arbitrary string.
    ///
    /// `strings` carries the text around and between the tokens in order;
    /// reconstruction tolerates a missing trailing segment.
    Complex {
        numbers: Vec<f64>,
        strings: Vec<String>,
    },
}

impl Value {
    /// The discriminant of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Number { .. } => ValueKind::Number,
            Self::Unit { .. } => ValueKind::Unit,
            Self::Color { .. } => ValueKind::Color,
            Self::Path { .. } => ValueKind::Path,
            Self::Complex { .. } => ValueKind::Complex,
        }
    }

    /// The relative-delta operator, if the input was a relative expression.
    pub fn operator(&self) -> Option<Operator> {
        match self {
            Self::Number { operator, .. } | Self::Unit { operator, .. } => *operator,
            _ => None,
        }
    }

    /// Try to extract a plain number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number { number, .. } => Some(*number),
            _ => None,
        }
    }

    /// Try to extract a number with its unit.
    pub fn as_unit(&self) -> Option<(f64, &str)> {
        match self {
            Self::Unit { number, unit, .. } => Some((*number, unit.as_str())),
            _ => None,
        }
    }

    /// Try to extract RGBA channels.
    pub fn as_color(&self) -> Option<[f64; 4]> {
        match self {
            Self::Color { channels } => Some(*channels),
            _ => None,
        }
    }

    /// Try to extract the complex token lists.
    pub fn as_complex(&self) -> Option<(&[f64], &[String])> {
        match self {
            Self::Complex { numbers, strings } => Some((numbers, strings)),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    /// Structural equality; `Path` values compare by handle identity.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::Number { number: a, operator: oa },
                Self::Number { number: b, operator: ob },
            ) => a == b && oa == ob,
            (
                Self::Unit { number: a, unit: ua, operator: oa },
                Self::Unit { number: b, unit: ub, operator: ob },
            ) => a == b && ua == ub && oa == ob,
            (Self::Color { channels: a }, Self::Color { channels: b }) => a == b,
            (
                Self::Path { path: a, length: la, unit: ua },
                Self::Path { path: b, length: lb, unit: ub },
            ) => Arc::ptr_eq(a, b) && la == lb && ua == ub,
            (
                Self::Complex { numbers: a, strings: sa },
                Self::Complex { numbers: b, strings: sb },
            ) => a == b && sa == sb,
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number { number, operator } => f
                .debug_struct("Number")
                .field("number", number)
                .field("operator", operator)
                .finish(),
            Self::Unit { number, unit, operator } => f
                .debug_struct("Unit")
                .field("number", number)
                .field("unit", unit)
                .field("operator", operator)
                .finish(),
            Self::Color { channels } => f
                .debug_struct("Color")
                .field("channels", channels)
                .finish(),
            Self::Path { length, unit, .. } => f
                .debug_struct("Path")
                .field("length", length)
                .field("unit", unit)
                .finish_non_exhaustive(),
            Self::Complex { numbers, strings } => f
                .debug_struct("Complex")
                .field("numbers", numbers)
                .field("strings", strings)
                .finish(),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number { number: n, operator: None }
    }
}

impl From<[f64; 4]> for Value {
    fn from(channels: [f64; 4]) -> Self {
        Self::Color { channels }
    }
}

/// Unparsed input as handed to [`crate::decompose`].
#[derive(Clone)]
pub enum RawValue {
    Number(f64),
    Text(String),
    Path(PathHandle),
}

impl fmt::Debug for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Self::Text(t) => f.debug_tuple("Text").field(t).finish(),
            Self::Path(p) => f
                .debug_tuple("Path")
                .field(&format_args!("<length {}>", p.total_length()))
                .finish(),
        }
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for RawValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for RawValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<PathHandle> for RawValue {
    fn from(path: PathHandle) -> Self {
        Self::Path(path)
    }
}

static_assertions::assert_impl_all!(Value: Send, Sync);
static_assertions::assert_impl_all!(RawValue: Send, Sync);
