//! Serde adapter for monetary and fractional `f64` fields.
//!
//! Numbers are written in the syntax of Go's `encoding/json`: shortest
//! round-trip digits, fixed notation for `1e-6 <= |v| < 1e21` and exponent
//! form outside it (`1e+21`, `1.5e-7`). Non-finite values cannot be stored.

use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;

/// Smallest magnitude written in fixed notation
const FIXED_MIN: f64 = 1e-6;
/// Magnitudes from here on are written in exponent form
const FIXED_LIMIT: f64 = 1e21;

/// Render `value` as a JSON number.
pub fn format_number(value: f64) -> Result<String, String> {
    if !value.is_finite() {
        return Err(format!("non-finite value {value} cannot be stored"));
    }

    let abs = value.abs();
    if abs != 0.0 && (abs < FIXED_MIN || abs >= FIXED_LIMIT) {
        let text = format!("{value:e}");
        return Ok(match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => text,
        });
    }
    Ok(format!("{value}"))
}

pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let text = format_number(*value).map_err(ser::Error::custom)?;
    let raw = RawValue::from_string(text).map_err(ser::Error::custom)?;
    raw.serialize(serializer)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = f64::deserialize(deserializer)?;
    if !value.is_finite() {
        return Err(de::Error::custom("non-finite value in record"));
    }
    Ok(value)
}
