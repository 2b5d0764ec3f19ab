use anyhow::Result;
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{de::DeserializeOwned, Serialize};

/// Helper trait to ser/de any serde-implementing value to/from compact JSON.
///
/// The output has no insignificant whitespace and follows struct field
/// declaration order, which is what the identity service signs.
pub trait CompactJson: Serialize + DeserializeOwned {
    fn to_compact_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn from_compact_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl<T> CompactJson for T where T: Serialize + DeserializeOwned {}

/// Helper trait to encode values as padded, standard-alphabet base64 JSON
pub trait Base64Encode: CompactJson {
    fn base64_encode(&self) -> Result<String> {
        Ok(STANDARD.encode(self.to_compact_json()?))
    }
}

impl<T> Base64Encode for T where T: CompactJson {}

/// Decode padded, standard-alphabet base64
pub fn base64_decode(encoded: &str) -> Result<Vec<u8>, base64::DecodeError> {
    STANDARD.decode(encoded)
}
