//! Lenient deserializers for API payloads
//!
//! The API is not consistent about scalar types: counters and sizes arrive as
//! JSON numbers on some endpoints and as numeric strings on others, booleans
//! as `true`/`"true"`/`1`. These helpers accept either form. All of them are
//! meant to be combined with `#[serde(default)]` so that a missing field
//! becomes `None`.

use serde::{Deserialize, Deserializer, de};

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Bool(bool),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    String(String),
}

/// Boolean from a JSON bool, an integer (positive is true) or one of the
/// strings `"true"`, `"false"`, `"1"`, `"0"` (case-insensitive).
///
/// Other strings are rejected rather than guessed.
pub fn deserialize_flexible_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Scalar>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Scalar::Bool(b)) => Ok(Some(b)),
        Some(Scalar::Unsigned(u)) => Ok(Some(u > 0)),
        Some(Scalar::Signed(i)) => Ok(Some(i > 0)),
        Some(Scalar::Float(f)) => Err(de::Error::custom(format!("invalid boolean: {f}"))),
        Some(Scalar::String(s)) => match s.trim().to_lowercase().as_str() {
            "true" | "1" => Ok(Some(true)),
            "false" | "0" => Ok(Some(false)),
            "" => Ok(None),
            _ => Err(de::Error::custom(format!("invalid boolean string: {s}"))),
        },
    }
}

/// Unsigned integer from a JSON number or a numeric string. An empty string
/// is treated as absent.
pub fn deserialize_flexible_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Scalar>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Scalar::Unsigned(u)) => Ok(Some(u)),
        Some(Scalar::Signed(i)) => u64::try_from(i)
            .map(Some)
            .map_err(|_| de::Error::custom(format!("negative value: {i}"))),
        Some(Scalar::Float(f)) if f >= 0.0 && f.fract() == 0.0 => Ok(Some(f as u64)),
        Some(Scalar::Float(f)) => Err(de::Error::custom(format!("not an integer: {f}"))),
        Some(Scalar::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            s.parse()
                .map(Some)
                .map_err(|_| de::Error::custom(format!("invalid integer string: {s}")))
        }
        Some(Scalar::Bool(b)) => Err(de::Error::custom(format!("invalid integer: {b}"))),
    }
}

/// Float from a JSON number or a numeric string (`"12.34"`)
pub fn deserialize_flexible_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Scalar>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Scalar::Unsigned(u)) => Ok(Some(u as f64)),
        Some(Scalar::Signed(i)) => Ok(Some(i as f64)),
        Some(Scalar::Float(f)) => Ok(Some(f)),
        Some(Scalar::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(None);
            }
            s.parse()
                .map(Some)
                .map_err(|_| de::Error::custom(format!("invalid number string: {s}")))
        }
        Some(Scalar::Bool(b)) => Err(de::Error::custom(format!("invalid number: {b}"))),
    }
}

/// String from any JSON scalar; numbers and booleans keep their JSON text
pub fn deserialize_flexible_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Scalar>::deserialize(deserializer)? {
        None => None,
        Some(Scalar::Bool(b)) => Some(b.to_string()),
        Some(Scalar::Unsigned(u)) => Some(u.to_string()),
        Some(Scalar::Signed(i)) => Some(i.to_string()),
        Some(Scalar::Float(f)) => Some(f.to_string()),
        Some(Scalar::String(s)) => Some(s),
    })
}
