//! Raw value resolution ahead of decomposition.
//!
//! Two sources feed the decomposer besides literal constants:
//! - per-target computed values, where the caller supplies a function that
//!   is invoked with the target's slot in the animated batch;
//! - the target's current property state, read through the
//!   [`PropertyAccess`] seam and optionally run through a unit converter.

use crate::decompose::decompose;
use crate::value::{RawValue, Value, ValueKind};

/// A target's slot within an animated batch.
#[derive(Debug, Clone, Copy)]
pub struct AnimatableContext<'a, T> {
    pub target: &'a T,
    /// Index of this target within the batch.
    pub index: usize,
    /// Number of targets in the batch.
    pub total: usize,
}

/// Resolve a per-target computed value into a concrete raw value.
///
/// The function receives the target, its index, and the batch size. An
/// absent result, a not-a-number result, or empty text substitutes `0`,
/// so a misbehaving function never stalls playback. Results are not
/// cached; callers re-invoke whenever a fresh value is needed.
pub fn resolve_function_value<T, F>(function: F, context: &AnimatableContext<'_, T>) -> RawValue
where
    F: Fn(&T, usize, usize) -> Option<RawValue>,
{
    match function(context.target, context.index, context.total) {
        Some(RawValue::Number(n)) if !n.is_nan() => RawValue::Number(n),
        Some(RawValue::Text(t)) if !t.is_empty() => RawValue::Text(t),
        Some(RawValue::Path(p)) => RawValue::Path(p),
        _ => RawValue::Number(0.0),
    }
}

/// How a live target exposes the current state of a property.
///
/// Implemented outside this crate by whatever owns the targets (object
/// fields, DOM attributes, computed styles, ...).
pub trait PropertyAccess {
    /// The current raw value of `property`, if the target has one.
    fn current_value(&self, property: &str) -> Option<RawValue>;
}

/// Unit-conversion arithmetic, external to this crate.
///
/// Only number and unit values are ever converted; the converter receives
/// the decomposed value and the desired unit and returns the converted
/// value.
pub trait UnitConvert {
    fn convert(&self, value: &Value, unit: &str) -> Value;
}

/// Read a target's current property value, optionally converted to a unit.
///
/// Without a desired unit the raw value is returned as read. With one, the
/// value is decomposed and — when it is a plain number or a unit value —
/// converted and re-formatted as `<number><unit>` text. Other kinds
/// (colors, complex strings) pass through untouched.
pub fn target_value<T, C>(
    target: &T,
    property: &str,
    desired_unit: Option<&str>,
    converter: &C,
) -> Option<RawValue>
where
    T: PropertyAccess,
    C: UnitConvert,
{
    let raw = target.current_value(property)?;
    let Some(unit) = desired_unit else {
        return Some(raw);
    };
    let value = decompose(raw.clone());
    if !matches!(value.kind(), ValueKind::Number | ValueKind::Unit) {
        return Some(raw);
    }
    let converted = match converter.convert(&value, unit) {
        Value::Number { number, .. } => number.to_string(),
        Value::Unit { number, unit, .. } => format!("{number}{unit}"),
        // A converter returning another kind is a collaborator bug; keep
        // the original reading.
        _ => return Some(raw),
    };
    Some(RawValue::Text(converted))
}
