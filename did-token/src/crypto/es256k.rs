//! secp256k1 public-key recovery

use anyhow::{anyhow, Result};
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};

use super::{keccak256, AddressRecovery, RecoverableSignature};

/// [`AddressRecovery`] backed by the pure-Rust `k256` curve implementation
#[derive(Clone, Copy, Debug, Default)]
pub struct Secp256k1Recovery;

impl AddressRecovery for Secp256k1Recovery {
    fn recover_address(
        &self,
        prehash: &[u8; 32],
        signature: &RecoverableSignature,
    ) -> Result<String> {
        let key = recover_verifying_key(prehash, signature)?;
        Ok(address_from_verifying_key(&key))
    }
}

/// Recover the public key that produced a signature over a 32-byte prehash.
///
/// Ethereum's `ecrecover` accepts signatures in the upper half of the curve
/// order, `k256` does not. Those are flipped to their low-S twin, which
/// recovers the same key under the opposite y-parity.
pub fn recover_verifying_key(
    prehash: &[u8; 32],
    signature: &RecoverableSignature,
) -> Result<VerifyingKey> {
    let scalars = [&signature.r()[..], &signature.s()[..]].concat();
    let mut ecdsa_signature = Signature::from_slice(&scalars)
        .map_err(|_| anyhow!("invalid secp256k1 signature scalars"))?;

    let mut recovery_id = RecoveryId::from_byte(signature.recovery_id())
        .ok_or_else(|| anyhow!("invalid recovery id {}", signature.recovery_id()))?;

    if let Some(normalized) = ecdsa_signature.normalize_s() {
        ecdsa_signature = normalized;
        recovery_id = RecoveryId::new(!recovery_id.is_y_odd(), recovery_id.is_x_reduced());
    }

    VerifyingKey::recover_from_prehash(prehash, &ecdsa_signature, recovery_id)
        .map_err(|e| anyhow!("public key recovery failed, {}", e))
}

/// The Ethereum address of a key: the last 20 bytes of the keccak-256 hash
/// of its uncompressed SEC1 encoding (sans the `0x04` tag), as lower-case hex
pub fn address_from_verifying_key(key: &VerifyingKey) -> String {
    let point = key.to_encoded_point(false);
    let hash = keccak256(&point.as_bytes()[1..]);

    format!("0x{}", hex::encode(&hash[12..]))
}
