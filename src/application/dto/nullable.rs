//! `deserialize_with` helper for fields that must be present but may be
//! `null`. Plain `Option<T>` fields silently accept a missing key.
use serde::{Deserialize, Deserializer};

pub fn required<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer)
}
