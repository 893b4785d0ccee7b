//! Lenient numeric parsing for user-supplied readings
//!
//! Form fields and request bodies are never rejected for bad numbers; a
//! value that cannot be read is treated as absent and defaulted later.

use serde_json::value::RawValue;
use serde_json::Value;
use std::collections::HashMap;

/// Parse a text field as a finite number.
///
/// Reads the longest leading decimal number after trimming and ignores
/// whatever follows it, so `"42C"` and `"38 °C"` are read as 42 and 38.
pub fn parse_number(raw: &str) -> Option<f64> {
    let text = raw.trim();
    let prefix = &text[..numeric_prefix_len(text.as_bytes())];
    prefix.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Length of the leading `[+-]digits[.digits][(e|E)[+-]digits]` run.
/// Returns 0 when there is no mantissa digit.
fn numeric_prefix_len(bytes: &[u8]) -> usize {
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    let int_end = digits_from(end);
    let mut mantissa_digits = int_end - end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        mantissa_digits += frac_end - (end + 1);
        end = frac_end;
    }
    if mantissa_digits == 0 {
        return 0;
    }

    // An exponent only counts when at least one digit follows it
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    end
}

/// Read a JSON value as a finite number, accepting numeric strings
pub fn number_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => parse_number(s),
        _ => None,
    }
}

/// Read one unparsed JSON member as a number.
///
/// Number literals outside the `f64` range (e.g. `1e400`) are absent.
pub fn number_from_raw(raw: &RawValue) -> Option<f64> {
    serde_json::from_str::<Value>(raw.get())
        .ok()
        .as_ref()
        .and_then(number_from_value)
}

/// Split a JSON object into its members without parsing them.
///
/// Anything other than a well-formed object yields no members, so one bad
/// member value never discards its siblings.
pub fn raw_object(bytes: &[u8]) -> HashMap<String, Box<RawValue>> {
    serde_json::from_slice(bytes).unwrap_or_default()
}
