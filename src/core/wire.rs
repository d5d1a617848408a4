use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum AnyNumber {
    F64(f64),
    Str(String),
}

/// Accept a JSON number, a numeric string, or `null` (as `0.0`).
///
/// The fundamentals endpoint is loose about how it encodes ratios, so this is
/// applied to every numeric field there.
pub(crate) fn num<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<AnyNumber>::deserialize(deserializer)? {
        Some(AnyNumber::F64(f)) => Ok(f),
        Some(AnyNumber::Str(s)) => {
            let s = s.trim();
            if s.is_empty() {
                return Ok(0.0);
            }
            s.parse::<f64>()
                .map_err(|_| serde::de::Error::custom(format!("cannot convert {s:?} to a number")))
        }
        None => Ok(0.0),
    }
}

/// Read `null` as the type's default value instead of failing.
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
