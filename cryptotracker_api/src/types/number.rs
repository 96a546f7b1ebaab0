//! CoinCap encodes most numbers as JSON strings; these accept both forms.

use serde::{de, Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
    Number(f64),
    String(String),
}

impl NumberOrString {
    fn into_f64<E: de::Error>(self) -> Result<f64, E> {
        match self {
            NumberOrString::Number(n) => Ok(n),
            NumberOrString::String(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| E::custom(format!("invalid number string: {:?}", s))),
        }
    }
}

pub(crate) fn f64_lenient<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    NumberOrString::deserialize(deserializer)?.into_f64()
}

pub(crate) fn u32_lenient<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let n = f64_lenient(deserializer)?;
    if n.fract() != 0.0 || n < 0.0 || n > u32::MAX as f64 {
        return Err(de::Error::custom(format!("invalid rank: {}", n)));
    }
    Ok(n as u32)
}

/// `null` and missing become `0.0`.
pub(crate) fn f64_or_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    match Option::<NumberOrString>::deserialize(deserializer)? {
        Some(v) => v.into_f64(),
        None => Ok(0.0),
    }
}
