use crate::{
    error::{Error, Result},
    serde::CompactJson,
};
use serde::{Deserialize, Serialize};

/// The payload of a DID token.
///
/// Field order matters: the issuer signs the compact JSON encoding of the claim
/// with its fields in exactly this order, and [`Claim::to_canonical_json`]
/// reproduces it byte for byte.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Claim {
    /// Issued-at time, in seconds since the Unix epoch
    #[serde(rename = "iat")]
    pub issued_at: i64,
    /// Expiry time, in seconds since the Unix epoch
    #[serde(rename = "ext")]
    pub expires_at: i64,
    /// `did:<method>:<0x-address>` of the signing key
    #[serde(rename = "iss")]
    pub issuer: String,
    #[serde(rename = "sub")]
    pub subject: String,
    /// The client id this token was issued for
    #[serde(rename = "aud")]
    pub audience: String,
    /// Not-before time, in seconds since the Unix epoch
    #[serde(rename = "nbf")]
    pub not_before: i64,
    #[serde(rename = "tid")]
    pub token_id: String,
    /// Signature over a caller-supplied attachment, in issuance modes that use one
    #[serde(rename = "add", default, skip_serializing_if = "Option::is_none")]
    pub additional_data: Option<String>,
}

impl Claim {
    /// The exact JSON string the issuer signed for this claim
    pub fn to_canonical_json(&self) -> Result<String> {
        self.to_compact_json().map_err(|error| {
            Error::invalid_format(format!("Could not serialize claim: {error}"), None)
        })
    }
}
