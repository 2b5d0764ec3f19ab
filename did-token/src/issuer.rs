//! Ethereum addresses embedded in `did:<method>:<address>` issuers

use crate::{
    error::{Error, Result},
    token::Token,
};

pub const ETHR_DID_PREFIX: &str = "did:ethr:";

const ADDRESS_HEX_LEN: usize = 40;

/// Extract the lower-cased signing address from the token's issuer.
///
/// The issuer must split on `:` into exactly three segments, the last of which
/// is `0x` followed by 40 hex digits.
pub fn public_address(token: &Token) -> Result<String> {
    parse_issuer_address(token.issuer())
}

pub fn parse_issuer_address(issuer: &str) -> Result<String> {
    let invalid = || Error::InvalidPublicAddress {
        issuer: issuer.to_string(),
    };

    let segments: Vec<&str> = issuer.split(':').collect();
    let address = match segments.as_slice() {
        [_, _, address] => *address,
        _ => return Err(invalid()),
    };

    if !is_hex_address(address) {
        return Err(invalid());
    }

    Ok(address.to_lowercase())
}

/// Build the `did:ethr` issuer for an address, as the identity service does
/// when it mints tokens for that address
pub fn construct_issuer_with_public_address(public_address: &str) -> String {
    format!("{ETHR_DID_PREFIX}{public_address}")
}

pub(crate) fn is_hex_address(address: &str) -> bool {
    match address.strip_prefix("0x") {
        Some(digits) => {
            digits.len() == ADDRESS_HEX_LEN && digits.chars().all(|c| c.is_ascii_hexdigit())
        }
        None => false,
    }
}
