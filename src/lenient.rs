//! Tolerant deserializers for loosely-typed fields in claim payloads.
//!
//! The claims endpoints send flags as `true`, `1` or `"Yes"` and amounts as
//! either numbers or numeric strings, depending on the record's age. Use with
//! `#[serde(default, deserialize_with = "...")]`.

use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

/// Decode an optional flag from a bool, a number, or a yes/no style string.
///
/// Text that is not a recognizable flag decodes to `None`.
pub(crate) fn opt_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Loose> = Option::deserialize(deserializer)?;
    Ok(value.and_then(|loose| match loose {
        Loose::Bool(b) => Some(b),
        Loose::Int(i) => Some(i != 0),
        Loose::Float(f) => Some(f != 0.0),
        Loose::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "yes" | "y" | "1" => Some(true),
            "false" | "no" | "n" | "0" => Some(false),
            _ => None,
        },
    }))
}

/// Decode an optional amount from a number or a numeric string such as `"1,250.00"`.
pub(crate) fn opt_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Loose> = Option::deserialize(deserializer)?;
    Ok(value.and_then(|loose| match loose {
        Loose::Bool(_) => None,
        Loose::Int(i) => Some(i as f64),
        Loose::Float(f) => Some(f),
        Loose::Text(s) => {
            let cleaned: String = s.trim().chars().filter(|c| !matches!(c, ',' | '$')).collect();
            cleaned.parse().ok()
        }
    }))
}

/// Decode a field, treating an explicit `null` like a missing key.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode a nested collection, treating `null` as empty.
pub(crate) fn vec_or_null<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
