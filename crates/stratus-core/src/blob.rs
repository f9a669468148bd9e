//! Serde adapters for base64-encoded blobs.

use ::base64::Engine;
use ::base64::engine::general_purpose::STANDARD;

/// Encode bytes as standard base64.
#[must_use]
pub fn encode(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Decode standard base64.
pub fn decode(encoded: &str) -> Result<Vec<u8>, ::base64::DecodeError> {
    STANDARD.decode(encoded)
}

/// Required blob member.
pub mod base64 {
    use serde::{Deserialize, Deserializer, Serializer, de};

    /// Serialize bytes as a base64 string.
    pub fn serialize<S: Serializer>(value: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::encode(value))
    }

    /// Deserialize bytes from a base64 string.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        super::decode(&encoded).map_err(de::Error::custom)
    }
}

/// Optional blob member. Pair with
/// `#[serde(default, skip_serializing_if = "Option::is_none")]`.
pub mod base64_option {
    use serde::{Deserialize, Deserializer, Serializer, de};

    /// Serialize bytes as a base64 string, or `null`.
    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(value: &Option<Vec<u8>>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => super::base64::serialize(v, serializer),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize bytes from a base64 string or `null`.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Vec<u8>>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|encoded| super::decode(&encoded).map_err(de::Error::custom))
            .transpose()
    }
}
