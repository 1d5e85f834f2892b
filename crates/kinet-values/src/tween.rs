//! Tween recomposition.
//!
//! A [`Tween`] pairs a `from` and `to` [`Value`] with a progress fraction
//! and an optional rounding policy, and recomposes them into formatted
//! output once per frame evaluation. Dispatch is an exhaustive `match`
//! over the endpoint pair, one arm per value kind.
//!
//! # Rounding
//!
//! All arms share one rule: round-half-away-from-zero (`f64::round`
//! semantics) at the requested decimal count. Color R/G/B channels are
//! always rounded to whole numbers regardless of the tween's policy;
//! alpha follows the policy like any other number.

use crate::error::{Result, TweenError};
use crate::value::Value;
use std::fmt;

/// Linear interpolation between two numbers at `progress`.
#[inline]
pub(crate) fn lerp(from: f64, to: f64, progress: f64) -> f64 {
    from + progress * (to - from)
}

/// Round to `decimals` places, half away from zero.
#[inline]
pub(crate) fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Recomposition result: a bare number or formatted text.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    Number(f64),
    Text(String),
}

impl Output {
    /// The numeric output, if this is a bare number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    /// The textual output, if this is formatted text.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Number(_) => None,
            Self::Text(t) => Some(t),
        }
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(t) => f.write_str(t),
        }
    }
}

impl From<f64> for Output {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<String> for Output {
    fn from(t: String) -> Self {
        Self::Text(t)
    }
}

/// One interpolation step: a `from`/`to` pair, a progress fraction in
/// `[0, 1]`, and an optional decimal rounding policy.
///
/// Both endpoints must be the same kind of value; pairing mismatched kinds
/// is a caller-construction error. The unchecked constructor keeps the
/// absorb-and-degrade playback contract (see [`Tween::recompose`]), while
/// [`Tween::checked`] reports the mistake instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    pub from: Value,
    pub to: Value,
    pub progress: f64,
    /// Decimal places to round interpolated numbers to; `None` keeps full
    /// precision.
    pub round: Option<u32>,
}

impl Tween {
    /// Create a tween with no rounding.
    ///
    /// Endpoint kinds are not validated here; see [`Tween::checked`].
    pub fn new(from: Value, to: Value, progress: f64) -> Self {
        Self { from, to, progress, round: None }
    }

    /// Create a tween, validating that the endpoints pair correctly.
    pub fn checked(from: Value, to: Value, progress: f64) -> Result<Self> {
        if from.kind() != to.kind() {
            return Err(TweenError::EndpointKindMismatch {
                from: from.kind(),
                to: to.kind(),
            });
        }
        if let (Some((from_numbers, _)), Some((to_numbers, _))) =
            (from.as_complex(), to.as_complex())
        {
            if from_numbers.len() != to_numbers.len() {
                return Err(TweenError::TokenCountMismatch {
                    from: from_numbers.len(),
                    to: to_numbers.len(),
                });
            }
        }
        Ok(Self::new(from, to, progress))
    }

    /// Set the rounding policy; `0` disables rounding.
    pub fn with_round(mut self, decimals: u32) -> Self {
        self.round = (decimals > 0).then_some(decimals);
        self
    }

    /// Move the tween to a new progress fraction.
    pub fn set_progress(&mut self, progress: f64) {
        self.progress = progress;
    }

    /// Interpolate one number pair under this tween's progress and
    /// rounding policy.
    fn progress_number(&self, from: f64, to: f64) -> f64 {
        let value = lerp(from, to, self.progress);
        match self.round {
            Some(decimals) => round_to(value, decimals),
            None => value,
        }
    }

    /// Recompose the output value at the current progress.
    ///
    /// Dispatches on the endpoint pair. A kind mismatch between endpoints
    /// is undefined by contract; this implementation logs a warning and
    /// plays the `from` endpoint so rendering continues.
    pub fn recompose(&self) -> Output {
        match (&self.from, &self.to) {
            (Value::Number { number: from, .. }, Value::Number { number: to, .. }) => {
                Output::Number(self.progress_number(*from, *to))
            }
            (Value::Unit { number: from, .. }, Value::Unit { number: to, unit, .. }) => {
                Output::Text(format!("{}{unit}", self.progress_number(*from, *to)))
            }
            (Value::Color { channels: from }, Value::Color { channels: to }) => {
                Output::Text(self.recompose_color(from, to))
            }
            (Value::Path { .. }, Value::Path { path, length, unit }) => {
                let position = path.position_at(self.progress * length);
                let position = match self.round {
                    Some(decimals) => round_to(position, decimals),
                    None => position,
                };
                Output::Text(format!("{position}{unit}"))
            }
            (
                Value::Complex { numbers: from, .. },
                Value::Complex { numbers: to, strings },
            ) => Output::Text(self.recompose_complex(from, to, strings)),
            (from, to) => {
                tracing::warn!(
                    from = ?from.kind(),
                    to = ?to.kind(),
                    "tween endpoints have mismatched kinds; playing the from endpoint"
                );
                Self {
                    from: from.clone(),
                    to: from.clone(),
                    progress: self.progress,
                    round: self.round,
                }
                .recompose()
            }
        }
    }

    /// Build an `rgba(r,g,b,a)` expression. R/G/B are 0–255 integers,
    /// alpha keeps fractional precision.
    fn recompose_color(&self, from: &[f64; 4], to: &[f64; 4]) -> String {
        let r = round_to(lerp(from[0], to[0], self.progress), 0);
        let g = round_to(lerp(from[1], to[1], self.progress), 0);
        let b = round_to(lerp(from[2], to[2], self.progress), 0);
        let a = self.progress_number(from[3], to[3]);
        format!("rgba({r},{g},{b},{a})")
    }

    /// Reassemble a complex value from `to`'s literal segments and the
    /// interpolated token pairs. `from`'s text segments are never used.
    fn recompose_complex(&self, from: &[f64], to: &[f64], strings: &[String]) -> String {
        if from.len() != to.len() {
            tracing::warn!(
                from_tokens = from.len(),
                to_tokens = to.len(),
                "complex endpoints have mismatched token counts"
            );
        }
        let mut out = strings.first().cloned().unwrap_or_default();
        for (i, to_number) in to.iter().enumerate() {
            let from_number = from.get(i).copied().unwrap_or(0.0);
            let number = self.progress_number(from_number, *to_number);
            out.push_str(&number.to_string());
            if let Some(segment) = strings.get(i + 1) {
                out.push_str(segment);
            }
        }
        out
    }
}

static_assertions::assert_impl_all!(Tween: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decompose;
    use crate::value::{MotionPath, Operator, PathHandle, ValueKind};
    use std::sync::Arc;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    /// Straight horizontal segment: position is the x coordinate.
    struct LinePath {
        length: f64,
    }

    impl MotionPath for LinePath {
        fn total_length(&self) -> f64 {
            self.length
        }

        fn position_at(&self, length: f64) -> f64 {
            length.clamp(0.0, self.length)
        }
    }

    #[test]
    fn test_lerp() {
        assert!(approx_eq(lerp(0.0, 100.0, 0.0), 0.0));
        assert!(approx_eq(lerp(0.0, 100.0, 0.25), 25.0));
        assert!(approx_eq(lerp(0.0, 100.0, 1.0), 100.0));
        assert!(approx_eq(lerp(-50.0, 50.0, 0.5), 0.0));
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(127.5, 0), 128.0);
        assert_eq!(round_to(-127.5, 0), -128.0);
        assert_eq!(round_to(0.12345, 2), 0.12);
        assert_eq!(round_to(0.125, 2), 0.13);
    }

    #[test]
    fn test_number_recompose() {
        let tween = Tween::new(decompose(0.0), decompose(100.0), 0.5);
        assert_eq!(tween.recompose(), Output::Number(50.0));

        let rounded = Tween::new(decompose(0.0), decompose(1.0), 1.0 / 3.0).with_round(2);
        assert_eq!(rounded.recompose(), Output::Number(0.33));
    }

    #[test]
    fn test_unit_recompose() {
        let tween = Tween::new(decompose("0px"), decompose("100px"), 0.25);
        assert_eq!(tween.recompose(), Output::Text("25px".to_string()));
    }

    #[test]
    fn test_unit_recompose_uses_target_unit() {
        let from = Value::Unit {
            number: 0.0,
            unit: "em".to_string(),
            operator: None,
        };
        let to = Value::Unit {
            number: 10.0,
            unit: "px".to_string(),
            operator: None,
        };
        let tween = Tween::new(from, to, 0.5);
        assert_eq!(tween.recompose(), Output::Text("5px".to_string()));
    }

    #[test]
    fn test_color_recompose() {
        let from = Value::Color { channels: [0.0, 0.0, 0.0, 0.0] };
        let to = Value::Color { channels: [255.0, 255.0, 255.0, 1.0] };
        let tween = Tween::new(from, to, 0.5);
        // R/G/B are rounded to whole numbers, alpha stays fractional.
        assert_eq!(
            tween.recompose(),
            Output::Text("rgba(128,128,128,0.5)".to_string())
        );
    }

    #[test]
    fn test_color_alpha_respects_round() {
        let from = Value::Color { channels: [0.0, 0.0, 0.0, 0.0] };
        let to = Value::Color { channels: [0.0, 0.0, 0.0, 1.0] };
        let tween = Tween::new(from, to, 1.0 / 3.0).with_round(2);
        assert_eq!(
            tween.recompose(),
            Output::Text("rgba(0,0,0,0.33)".to_string())
        );
    }

    #[test]
    fn test_path_recompose() {
        let path: PathHandle = Arc::new(LinePath { length: 200.0 });
        let value = decompose(path);
        let tween = Tween::new(value.clone(), value, 0.5);
        assert_eq!(tween.recompose(), Output::Text("100".to_string()));
    }

    #[test]
    fn test_path_recompose_rounds_position() {
        let path: PathHandle = Arc::new(LinePath { length: 100.0 });
        let value = decompose(path);
        let tween = Tween::new(value.clone(), value, 1.0 / 3.0).with_round(2);
        assert_eq!(tween.recompose(), Output::Text("33.33".to_string()));
    }

    #[test]
    fn test_complex_recompose() {
        let from = decompose("translate(0px, 0px)");
        let to = decompose("translate(10px, 20px)");
        let tween = Tween::new(from, to, 0.5);
        assert_eq!(
            tween.recompose(),
            Output::Text("translate(5px, 10px)".to_string())
        );
    }

    #[test]
    fn test_complex_reassembles_source_at_rest() {
        let source = "translate(10px, 20px) rotate(45deg)";
        let value = decompose(source);
        let tween = Tween::new(value.clone(), value, 0.5);
        assert_eq!(tween.recompose(), Output::Text(source.to_string()));
    }

    #[test]
    fn test_endpoints_at_progress_bounds() {
        let cases = [
            (decompose(3.0), decompose(9.0)),
            (decompose("1.5rem"), decompose("4.5rem")),
            (decompose("#000"), decompose("#fff")),
            (decompose("skew(10deg)"), decompose("skew(50deg)")),
        ];
        for (from, to) in cases {
            let start = Tween::new(from.clone(), to.clone(), 0.0).recompose();
            let end = Tween::new(from.clone(), to.clone(), 1.0).recompose();
            assert_eq!(start, Tween::new(from.clone(), from.clone(), 0.0).recompose());
            assert_eq!(end, Tween::new(to.clone(), to.clone(), 1.0).recompose());
        }
    }

    #[test]
    fn test_with_round_zero_disables_rounding() {
        let tween = Tween::new(decompose(0.0), decompose(1.0), 0.5).with_round(0);
        assert_eq!(tween.round, None);
        assert_eq!(tween.recompose(), Output::Number(0.5));
    }

    #[test]
    fn test_mismatched_kinds_play_from_endpoint() {
        let tween = Tween::new(decompose(50.0), decompose("#fff"), 0.5);
        assert_eq!(tween.recompose(), Output::Number(50.0));
    }

    #[test]
    fn test_checked_rejects_kind_mismatch() {
        let err = Tween::checked(decompose(1.0), decompose("10px"), 0.0).unwrap_err();
        assert_eq!(
            err,
            TweenError::EndpointKindMismatch {
                from: ValueKind::Number,
                to: ValueKind::Unit,
            }
        );
    }

    #[test]
    fn test_checked_rejects_token_count_mismatch() {
        let from = decompose("translate(10px)");
        let to = decompose("translate(10px, 20px)");
        let err = Tween::checked(from, to, 0.0).unwrap_err();
        assert_eq!(err, TweenError::TokenCountMismatch { from: 1, to: 2 });
    }

    #[test]
    fn test_checked_accepts_matching_endpoints() {
        let tween = Tween::checked(decompose("0px"), decompose("10px"), 0.5).unwrap();
        assert_eq!(tween.recompose(), Output::Text("5px".to_string()));
    }

    #[test]
    fn test_set_progress() {
        let mut tween = Tween::new(decompose(0.0), decompose(10.0), 0.0);
        assert_eq!(tween.recompose(), Output::Number(0.0));
        tween.set_progress(0.7);
        assert!(approx_eq(tween.recompose().as_number().unwrap(), 7.0));
    }

    #[test]
    fn test_relative_delta_carried_through_decompose() {
        // The delta itself interpolates like any number once resolved.
        let delta = decompose("+=40");
        assert_eq!(delta.operator(), Some(Operator::Add));
        let resolved = delta.operator().unwrap().apply(10.0, delta.as_number().unwrap());
        let tween = Tween::new(decompose(10.0), decompose(resolved), 0.5);
        assert_eq!(tween.recompose(), Output::Number(30.0));
    }

    #[test]
    fn test_output_display() {
        assert_eq!(Output::Number(25.0).to_string(), "25");
        assert_eq!(Output::Text("25px".to_string()).to_string(), "25px");
    }
}
