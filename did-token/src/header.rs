use crate::error::{Error, Result};

const BEARER_SCHEME: &str = "Bearer";

/// Extract the DID token from an `Authorization` header value of the form
/// `Bearer <token>`
pub fn parse_authorization_header(value: &str) -> Result<&str> {
    let mut parts = value.trim().splitn(2, ' ');

    match (parts.next(), parts.next().map(str::trim)) {
        (Some(BEARER_SCHEME), Some(token)) if !token.is_empty() => Ok(token),
        _ => Err(Error::MalformedAuthorizationHeader),
    }
}
