use serde::{Deserialize, Deserializer};

/// Treat an explicit JSON `null` the same as an absent field.
///
/// Scraped documents use both interchangeably for "nothing here".
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
