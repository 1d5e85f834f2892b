//! Raw value decomposition.
//!
//! [`decompose`] parses one raw input into a tagged [`Value`]. It is a
//! total function: input that matches none of the recognized shapes
//! degrades to the [`Value::Complex`] catch-all rather than failing, so an
//! animation can always be constructed from whatever a target reports.
//!
//! The matching rules (numeric token with exponent, number-with-unit,
//! relative-operator prefix, color expression) live in small named
//! functions so each can be tested on its own.

use crate::value::{Operator, RawValue, Value};
use csscolorparser::Color as CssColor;
use std::str::FromStr;

/// Parse a raw input into a typed [`Value`]. Never fails.
///
/// Resolution order:
/// 1. a finite number stays a plain number;
/// 2. a motion-path handle becomes a path value carrying its total length;
/// 3. text is checked for a relative-operator prefix, then for a
///    number-with-unit shape, then for a color expression, and finally
///    falls back to complex tokenization.
pub fn decompose(raw: impl Into<RawValue>) -> Value {
    match raw.into() {
        RawValue::Number(n) if n.is_finite() => Value::Number { number: n, operator: None },
        // Non-finite numbers have no meaningful interpolation; let the
        // formatted text run through the catch-all.
        RawValue::Number(n) => decompose_text(&n.to_string()),
        RawValue::Path(path) => {
            let length = path.total_length();
            Value::Path { path, length, unit: String::new() }
        }
        RawValue::Text(text) => decompose_text(&text),
    }
}

fn decompose_text(text: &str) -> Value {
    if let Some(number) = parse_finite_number(text) {
        return Value::Number { number, operator: None };
    }
    let (operator, rest) = strip_operator(text);
    if let Some((number, unit)) = match_number_with_unit(rest) {
        if !unit.is_empty() {
            return Value::Unit { number, unit: unit.to_string(), operator };
        }
        // Bare numeric delta: `+=5` and friends.
        if operator.is_some() {
            return Value::Number { number, operator };
        }
    }
    if looks_like_color(rest) {
        if let Some(channels) = parse_color(rest) {
            return Value::Color { channels };
        }
    }
    let (numbers, strings) = split_numeric_tokens(rest);
    Value::Complex { numbers, strings }
}

/// Full-string numeric parse, finite results only.
fn parse_finite_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Split a leading `+=` / `-=` / `*=` prefix off a relative expression.
fn strip_operator(text: &str) -> (Option<Operator>, &str) {
    match text.as_bytes() {
        [b'+', b'=', ..] => (Some(Operator::Add), &text[2..]),
        [b'-', b'=', ..] => (Some(Operator::Subtract), &text[2..]),
        [b'*', b'=', ..] => (Some(Operator::Multiply), &text[2..]),
        _ => (None, text),
    }
}

/// Match the whole string as `<number><unit>`, unit possibly empty.
///
/// The unit is whatever trails the numeric token, restricted to unit-like
/// characters (letters and `%`); anything else rejects the match.
fn match_number_with_unit(text: &str) -> Option<(f64, &str)> {
    let len = numeric_token_len(text)?;
    let (token, unit) = text.split_at(len);
    if !unit.chars().all(is_unit_char) {
        return None;
    }
    let number = token.parse::<f64>().ok().filter(|n| n.is_finite())?;
    Some((number, unit))
}

fn is_unit_char(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '%'
}

/// Cheap shape check before delegating to the color parser.
fn looks_like_color(text: &str) -> bool {
    let text = text.trim_start();
    if text.starts_with('#') {
        return true;
    }
    matches!(text.get(..3), Some(prefix) if prefix.eq_ignore_ascii_case("rgb") || prefix.eq_ignore_ascii_case("hsl"))
}

/// Parse a color expression into `[r, g, b, a]` channels, R/G/B in 0–255.
fn parse_color(text: &str) -> Option<[f64; 4]> {
    let color = CssColor::from_str(text.trim()).ok()?;
    Some([color.r * 255.0, color.g * 255.0, color.b * 255.0, color.a])
}

/// Length in bytes of the numeric token at the start of `text`, if any.
///
/// A token is an optional sign, digits with an optional decimal point
/// (a digit must follow the point for it to count), and an optional
/// exponent part.
fn numeric_token_len(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i += 1;
    }
    let int_start = i;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let int_digits = i - int_start;
    let mut frac_digits = 0;
    if i < bytes.len() && bytes[i] == b'.' {
        let mut j = i + 1;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        frac_digits = j - (i + 1);
        if frac_digits > 0 {
            i = j;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }
    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if matches!(bytes.get(j), Some(b'+') | Some(b'-')) {
            j += 1;
        }
        let exp_start = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }
    Some(i)
}

/// Extract every maximal numeric token from `text`, left to right.
///
/// Returns the tokens and the literal segments around them; the segments
/// list is one longer than the token list. Text with no tokens yields a
/// single `0.0` so complex values always have something to interpolate.
pub(crate) fn split_numeric_tokens(text: &str) -> (Vec<f64>, Vec<String>) {
    let mut numbers = Vec::new();
    let mut strings = Vec::new();
    let mut segment = String::new();
    let mut rest = text;
    while !rest.is_empty() {
        if let Some(len) = numeric_token_len(rest) {
            if let Ok(number) = rest[..len].parse::<f64>() {
                strings.push(std::mem::take(&mut segment));
                numbers.push(number);
                rest = &rest[len..];
                continue;
            }
        }
        let mut chars = rest.chars();
        if let Some(ch) = chars.next() {
            segment.push(ch);
        }
        rest = chars.as_str();
    }
    strings.push(segment);
    if numbers.is_empty() {
        numbers.push(0.0);
    }
    (numbers, strings)
}
