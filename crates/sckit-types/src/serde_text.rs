//! Serde support through the human-readable text form.

/// Implement `Serialize`/`Deserialize` for a [`crate::ScType`] using its
/// `to_text`/`from_text` conversions.
macro_rules! text_serde {
    ($ty:ty) => {
        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&$crate::traits::ScType::to_text(self))
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text = <String as serde::Deserialize>::deserialize(deserializer)?;
                <$ty as $crate::traits::ScType>::from_text(&text).map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use text_serde;
