use std::{fmt::Display, str::FromStr};

use serde::{de, Deserialize, Deserializer};

/// Deserializes an optional query value, reading a blank field as absent.
///
/// HTML forms submit `field=` for inputs left empty.
pub fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match Option::<String>::deserialize(deserializer)?.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}
