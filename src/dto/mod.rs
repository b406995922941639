use serde::{Deserialize, Deserializer};

pub mod categories;
pub mod products;
pub mod users;
pub mod versions;

/// Tells an omitted field (`None`) apart from an explicit `null`
/// (`Some(None)`), so partial updates can clear nullable columns.
pub(crate) fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
