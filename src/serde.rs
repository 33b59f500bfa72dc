//! Serde support.
//!
//! A present optional serializes as the held value, an empty one as the
//! format's null. Deserializing delegates to `Option<T>`: null becomes
//! empty, any well-formed `T` payload becomes present, and a malformed
//! payload surfaces the deserializer's own error.
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Optional;

impl<T: Serialize> Serialize for Optional<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.as_ref() {
            Some(value) => serializer.serialize_some(value),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Optional<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::deserialize(deserializer).map(Self::from)
    }
}
