//! Serialization as canonical strings, with full validation on the way in.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::{BuildMetadata, Prerelease, Version};

macro_rules! impl_serde_via_string {
    ($($type:ty),* $(,)?) => {
        $(
            impl Serialize for $type {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    self.to_string().serialize(serializer)
                }
            }
            impl<'de> Deserialize<'de> for $type {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    String::deserialize(deserializer)?
                        .parse()
                        .map_err(de::Error::custom)
                }
            }
        )*
    };
}

impl_serde_via_string!(Version, Prerelease, BuildMetadata);
