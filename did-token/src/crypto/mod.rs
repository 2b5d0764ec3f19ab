pub mod es256k;

use crate::{
    claim::Claim,
    error::{Error, Result},
};
use anyhow::Result as AnyResult;
use log::debug;
use sha3::{Digest, Keccak256};

pub use es256k::Secp256k1Recovery;

/// Prefix of the Ethereum `personal_sign` message scheme; followed by the
/// decimal byte length of the message and then the message itself
pub const PERSONAL_MESSAGE_PREFIX: &str = "\x19Ethereum Signed Message:\n";

pub const SIGNATURE_LENGTH: usize = 65;

/// This trait must be implemented by anything able to recover the signer of an
/// Ethereum-style signature. It is the only seam between token validation and
/// the elliptic-curve implementation.
pub trait AddressRecovery {
    /// Recover the `0x`-prefixed, lower-cased address whose key produced
    /// `signature` over the 32-byte `prehash`
    fn recover_address(
        &self,
        prehash: &[u8; 32],
        signature: &RecoverableSignature,
    ) -> AnyResult<String>;
}

/// A 65-byte `r || s || v` signature with its recovery byte normalised to 27
/// or 28
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecoverableSignature {
    r: [u8; 32],
    s: [u8; 32],
    v: u8,
}

impl RecoverableSignature {
    /// Parse a hex proof, with or without a `0x` prefix.
    ///
    /// Recovery bytes 0 and 1 are accepted as aliases for 27 and 28.
    pub fn from_hex(proof: &str) -> Result<Self> {
        let digits = proof.strip_prefix("0x").unwrap_or(proof);
        let bytes = hex::decode(digits).map_err(|error| Error::SignatureMismatch {
            msg: "Proof is not valid hex".into(),
            source: Some(Box::new(error)),
        })?;

        RecoverableSignature::from_bytes(&bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SIGNATURE_LENGTH {
            return Err(Error::signature_mismatch(format!(
                "Expected a {SIGNATURE_LENGTH}-byte signature, found {} bytes",
                bytes.len()
            )));
        }

        let mut r = [0u8; 32];
        let mut s = [0u8; 32];
        r.copy_from_slice(&bytes[0..32]);
        s.copy_from_slice(&bytes[32..64]);

        let mut v = bytes[64];
        if v < 27 {
            v += 27;
        }
        if v != 27 && v != 28 {
            return Err(Error::signature_mismatch(format!(
                "Invalid recovery byte {}",
                bytes[64]
            )));
        }

        Ok(RecoverableSignature { r, s, v })
    }

    pub fn r(&self) -> &[u8; 32] {
        &self.r
    }

    pub fn s(&self) -> &[u8; 32] {
        &self.s
    }

    /// The normalised recovery byte, 27 or 28
    pub fn v(&self) -> u8 {
        self.v
    }

    /// The y-parity of the signature's nonce point, 0 or 1
    pub fn recovery_id(&self) -> u8 {
        self.v - 27
    }
}

pub fn keccak256(bytes: &[u8]) -> [u8; 32] {
    Keccak256::digest(bytes).into()
}

/// The `personal_sign` hash of a message:
/// `keccak256("\x19Ethereum Signed Message:\n" + len(message) + message)`
pub fn personal_message_hash(message: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(PERSONAL_MESSAGE_PREFIX.as_bytes());
    hasher.update(message.len().to_string().as_bytes());
    hasher.update(message);
    hasher.finalize().into()
}

/// Verify that `proof` is a `personal_sign` signature over `message` by
/// `claimed_address`. The comparison ignores case and a `0x` prefix.
pub fn verify_personal_signature<R>(
    recovery: &R,
    message: &[u8],
    proof: &str,
    claimed_address: &str,
) -> Result<()>
where
    R: AddressRecovery + ?Sized,
{
    let signature = RecoverableSignature::from_hex(proof)?;
    let prehash = personal_message_hash(message);

    let recovered = recovery
        .recover_address(&prehash, &signature)
        .map_err(|error| Error::SignatureMismatch {
            msg: "Could not recover a public key from the signature".into(),
            source: Some(error.into()),
        })?;

    if normalize_address(&recovered) != normalize_address(claimed_address) {
        debug!("Signature was produced by {recovered}, not {claimed_address}");
        return Err(Error::signature_mismatch(format!(
            "Recovered address {recovered} does not match {claimed_address}"
        )));
    }

    Ok(())
}

/// Verify that `proof` was produced by `claimed_address` over the canonical
/// JSON of `claim`
pub fn verify_claim_signature<R>(
    recovery: &R,
    claim: &Claim,
    proof: &str,
    claimed_address: &str,
) -> Result<()>
where
    R: AddressRecovery + ?Sized,
{
    let message = claim.to_canonical_json()?;
    verify_personal_signature(recovery, message.as_bytes(), proof, claimed_address)
}

fn normalize_address(address: &str) -> String {
    let address = address.strip_prefix("0x").unwrap_or(address);
    address.to_lowercase()
}
