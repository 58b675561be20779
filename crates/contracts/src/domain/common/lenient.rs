//! Field deserializers that tolerate malformed values.
//!
//! One bad reference or tag in a record must not fail the whole list, so the
//! affected field falls back to empty instead.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Value(T),
    Skipped(IgnoredAny),
}

impl<T> Lenient<T> {
    fn into_value(self) -> Option<T> {
        match self {
            Lenient::Value(v) => Some(v),
            Lenient::Skipped(_) => None,
        }
    }
}

/// `None` for a missing, null or unreadable value
pub fn option<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let raw = Option::<Lenient<T>>::deserialize(deserializer)?;
    Ok(raw.and_then(Lenient::into_value))
}

/// Keeps the readable items of a list in order, without repeats. Null reads as empty.
pub fn known_items<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + PartialEq,
{
    let raw = Option::<Vec<Lenient<T>>>::deserialize(deserializer)?.unwrap_or_default();
    let mut items = Vec::with_capacity(raw.len());
    for item in raw.into_iter().filter_map(Lenient::into_value) {
        if !items.contains(&item) {
            items.push(item);
        }
    }
    Ok(items)
}
