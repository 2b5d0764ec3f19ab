//! Error types for DID token decoding and validation

use thiserror::Error;

/// Convenience alias for results produced by this crate
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Every way a DID token can be rejected.
///
/// None of these are retryable: the caller decides whether to ask the user for
/// a fresh token.
#[derive(Error, Debug)]
pub enum Error {
    /// The wire string is not valid standard-alphabet base64
    #[error("Could not decode the DID token base64: {source}")]
    Base64Decoding {
        /// Underlying decode failure
        #[source]
        source: base64::DecodeError,
    },

    /// The decoded bytes are not a `[proof, claim]` array, or the claim does not
    /// match the expected schema
    #[error("The DID token is malformed: {msg}")]
    InvalidTokenFormat {
        /// Error message
        msg: String,
        /// Underlying parse failure, if any
        #[source]
        source: Option<serde_json::Error>,
    },

    /// The issuer does not carry a well-formed 20-byte hex address
    #[error("The DID token issuer `{issuer}` does not contain a valid public address")]
    InvalidPublicAddress {
        /// The offending issuer
        issuer: String,
    },

    /// The token expired before the current time
    #[error("The DID token expired at {expires_at} (now {now})")]
    TokenExpired {
        /// The `ext` claim
        expires_at: i64,
        /// The clock reading used for the check
        now: i64,
    },

    /// The token cannot be used yet, even allowing for clock skew
    #[error("The DID token is not valid before {not_before} (now {now})")]
    TokenNotYetValid {
        /// The `nbf` claim
        not_before: i64,
        /// The clock reading used for the check
        now: i64,
    },

    /// The token was issued for another client
    #[error("The DID token audience `{actual}` does not match client id `{expected}`")]
    AudienceMismatch {
        /// The client id the validator was configured with
        expected: String,
        /// The `aud` claim
        actual: String,
    },

    /// The proof was not produced by the issuer's address over this claim
    #[error("The DID token signature does not match its issuer: {msg}")]
    SignatureMismatch {
        /// Error message
        msg: String,
        /// Underlying recovery failure, if any
        #[source]
        source: Option<BoxError>,
    },

    /// The `add` claim is missing or was not signed over the given attachment
    #[error("The DID token attachment signature does not match its issuer: {msg}")]
    AttachmentMismatch {
        /// Error message
        msg: String,
        /// Underlying failure, if any
        #[source]
        source: Option<Box<Error>>,
    },

    /// An `Authorization` header value that is not `Bearer <token>`
    #[error("Expected an `Authorization: Bearer <token>` header")]
    MalformedAuthorizationHeader,
}

/// The kind of an [`Error`], without its payload.
///
/// Collaborators that translate rejections into status codes or user-facing
/// messages should match on this rather than on error strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum_macros::Display, strum_macros::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// See [`Error::Base64Decoding`]
    Base64Decoding,
    /// See [`Error::InvalidTokenFormat`]
    InvalidTokenFormat,
    /// See [`Error::InvalidPublicAddress`]
    InvalidPublicAddress,
    /// See [`Error::TokenExpired`]
    TokenExpired,
    /// See [`Error::TokenNotYetValid`]
    TokenNotYetValid,
    /// See [`Error::AudienceMismatch`]
    AudienceMismatch,
    /// See [`Error::SignatureMismatch`]
    SignatureMismatch,
    /// See [`Error::AttachmentMismatch`]
    AttachmentMismatch,
    /// See [`Error::MalformedAuthorizationHeader`]
    MalformedAuthorizationHeader,
}

impl Error {
    /// The payload-free kind of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Base64Decoding { .. } => ErrorKind::Base64Decoding,
            Error::InvalidTokenFormat { .. } => ErrorKind::InvalidTokenFormat,
            Error::InvalidPublicAddress { .. } => ErrorKind::InvalidPublicAddress,
            Error::TokenExpired { .. } => ErrorKind::TokenExpired,
            Error::TokenNotYetValid { .. } => ErrorKind::TokenNotYetValid,
            Error::AudienceMismatch { .. } => ErrorKind::AudienceMismatch,
            Error::SignatureMismatch { .. } => ErrorKind::SignatureMismatch,
            Error::AttachmentMismatch { .. } => ErrorKind::AttachmentMismatch,
            Error::MalformedAuthorizationHeader => ErrorKind::MalformedAuthorizationHeader,
        }
    }

    pub(crate) fn invalid_format(msg: impl Into<String>, source: Option<serde_json::Error>) -> Self {
        Error::InvalidTokenFormat {
            msg: msg.into(),
            source,
        }
    }

    pub(crate) fn signature_mismatch(msg: impl Into<String>) -> Self {
        Error::SignatureMismatch {
            msg: msg.into(),
            source: None,
        }
    }
}

impl From<base64::DecodeError> for Error {
    fn from(source: base64::DecodeError) -> Self {
        Error::Base64Decoding { source }
    }
}
