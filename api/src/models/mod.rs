mod post;
mod user;

pub use post::Post;
pub use user::{NewUser, User, UserUpdate};

use serde::{Deserialize, Deserializer};

/// Decode `null` as the type's zero value, the way missing fields decode.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
