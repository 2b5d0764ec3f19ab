use crate::{
    claim::Claim,
    error::{Error, Result},
    issuer,
    serde::{base64_decode, Base64Encode, CompactJson},
    validator::TokenValidator,
};
use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, str::FromStr};

/// A decoded DID token: the issuer's signature and the claim it covers
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Token {
    proof: String,
    claim: Claim,
}

impl Token {
    pub fn new(proof: String, claim: Claim) -> Self {
        Token { proof, claim }
    }

    /// Decode a base64 token string. Equivalent to [`decode`].
    pub fn decode(token: &str) -> Result<Self> {
        Token::from_str(token)
    }

    /// Produce the base64 wire form of the token suitable for transferring in
    /// a header field
    pub fn encode(&self) -> Result<String> {
        let pieces = [self.proof.clone(), self.claim.to_canonical_json()?];

        pieces
            .base64_encode()
            .map_err(|error| Error::invalid_format(format!("Could not encode token: {error}"), None))
    }

    /// Validate the token's lifetime, audience and signature against the
    /// current time
    pub fn validate(&self, client_id: &str) -> Result<()> {
        TokenValidator::new(client_id).validate(self)
    }

    /// Hex-encoded 65-byte signature over the claim
    pub fn proof(&self) -> &str {
        &self.proof
    }

    pub fn claim(&self) -> &Claim {
        &self.claim
    }

    pub fn issuer(&self) -> &str {
        &self.claim.issuer
    }

    /// The lower-cased Ethereum address embedded in the issuer
    pub fn public_address(&self) -> Result<String> {
        issuer::public_address(self)
    }

    pub fn audience(&self) -> &str {
        &self.claim.audience
    }

    pub fn expires_at(&self) -> i64 {
        self.claim.expires_at
    }

    pub fn not_before(&self) -> i64 {
        self.claim.not_before
    }

    pub fn into_parts(self) -> (String, Claim) {
        (self.proof, self.claim)
    }
}

/// Decode a base64 DID token string into its proof and claim
pub fn decode(token: &str) -> Result<Token> {
    Token::from_str(token)
}

/// Deserialize an encoded DID token string reference into a Token
impl<'a> TryFrom<&'a str> for Token {
    type Error = Error;

    fn try_from(token: &str) -> Result<Self, Self::Error> {
        Token::from_str(token)
    }
}

/// Deserialize an encoded DID token string into a Token
impl TryFrom<String> for Token {
    type Error = Error;

    fn try_from(token: String) -> Result<Self, Self::Error> {
        Token::from_str(token.as_str())
    }
}

impl FromStr for Token {
    type Err = Error;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let decoded = base64_decode(token)?;

        let pieces: Vec<String> = serde_json::from_slice(&decoded).map_err(|error| {
            Error::invalid_format("Expected a JSON array of [proof, claim]", Some(error))
        })?;

        let [proof, claim]: [String; 2] = pieces.try_into().map_err(|pieces: Vec<String>| {
            Error::invalid_format(
                format!("Expected 2 token parts, found {}", pieces.len()),
                None,
            )
        })?;

        let claim = Claim::from_compact_json(&claim)
            .map_err(|error| Error::invalid_format("Could not parse claim JSON", Some(error)))?;

        Ok(Token::new(proof, claim))
    }
}
