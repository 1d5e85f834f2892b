//! Value decomposition and interpolation engine for property animation.
//!
//! This crate turns raw animatable inputs (plain numbers, unit-bearing
//! strings, color expressions, motion-path handles, and arbitrary
//! number-bearing text) into a uniform tagged [`Value`], and recomposes a
//! `from`/`to` pair of values into formatted output at any progress
//! fraction.
//!
//! # Architecture
//!
//! ```text
//! raw input
//!   ├── resolve_function_value (per-target computed values)
//!   └── decompose ──► Value
//!                       │
//!            Tween { from, to, progress, round }
//!                       │
//!                   recompose ──► Output (per animation frame)
//! ```
//!
//! Decomposition is total: unparsable input degrades to the
//! [`Value::Complex`] catch-all instead of failing, so playback never hard
//! fails on malformed input. Callers that want malformed input surfaced can
//! construct tweens through [`Tween::checked`].

pub mod decompose;
pub mod error;
pub mod relative;
pub mod resolver;
pub mod tween;
pub mod value;

pub use decompose::decompose;
pub use error::{Result, TweenError};
pub use relative::resolve_relative;
pub use resolver::{
    AnimatableContext, PropertyAccess, UnitConvert, resolve_function_value, target_value,
};
pub use tween::{Output, Tween};
pub use value::{MotionPath, Operator, PathHandle, RawValue, Value, ValueKind};
