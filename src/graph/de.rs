//! Deserializers that read JSON `null` as an empty value.

use serde::{Deserialize, Deserializer};

/// A missing or `null` string decodes as `""`.
pub(crate) fn nullable_string<'de, De>(deserializer: De) -> Result<String, De::Error>
where
	De: Deserializer<'de>,
{
	Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A missing or `null` list decodes as empty.
pub(crate) fn nullable_list<'de, De, T>(deserializer: De) -> Result<Vec<T>, De::Error>
where
	De: Deserializer<'de>,
	T: Deserialize<'de>,
{
	Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
