use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use editable_profile_core::{AppError, AppResult};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Encoded image bytes chosen through the image picker.
///
/// Serialized as a base64 string.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Picture(Vec<u8>);

impl Picture {
    /// Creates a picture from encoded image bytes.
    pub fn new(bytes: impl Into<Vec<u8>>) -> AppResult<Self> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(AppError::Validation(
                "picture must contain image data".to_owned(),
            ));
        }

        Ok(Self(bytes))
    }

    /// Returns the encoded image bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Returns the size of the encoded image in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always `false`; pictures are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for Picture {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(formatter, "Picture({} bytes)", self.0.len())
    }
}

impl Serialize for Picture {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(STANDARD.encode(&self.0).as_str())
    }
}

impl<'de> Deserialize<'de> for Picture {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        let bytes = STANDARD.decode(encoded.as_bytes()).map_err(D::Error::custom)?;
        Self::new(bytes).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::Picture;

    #[test]
    fn empty_picture_is_rejected() {
        assert!(Picture::new(Vec::new()).is_err());
    }

    #[test]
    fn picture_serializes_as_base64() {
        let picture = Picture::new(b"png".to_vec()).unwrap_or_else(|_| unreachable!());
        let encoded = serde_json::to_string(&picture).unwrap_or_default();
        assert_eq!(encoded, "\"cG5n\"");
    }

    #[test]
    fn invalid_base64_is_rejected() {
        let decoded = serde_json::from_str::<Picture>("\"not base64!\"");
        assert!(decoded.is_err());
    }
}
