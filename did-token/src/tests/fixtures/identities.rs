use k256::ecdsa::SigningKey;

use crate::crypto::{es256k::address_from_verifying_key, personal_message_hash};

/// A key that signs claims the way the identity service does
pub struct TestIssuer {
    key: SigningKey,
    pub address: String,
    pub did: String,
}

impl TestIssuer {
    pub fn from_secret_hex(secret: &str) -> Self {
        let key = SigningKey::from_slice(&hex::decode(secret).unwrap()).unwrap();
        let address = address_from_verifying_key(key.verifying_key());

        TestIssuer {
            did: format!("did:ethr:{address}"),
            address,
            key,
        }
    }

    /// `personal_sign` over `message`, as `r || s || v` with `v` in {27, 28}
    pub fn sign(&self, message: &[u8]) -> [u8; 65] {
        let prehash = personal_message_hash(message);
        let (signature, recovery_id) = self.key.sign_prehash_recoverable(&prehash).unwrap();

        let mut bytes = [0u8; 65];
        bytes[..64].copy_from_slice(&signature.to_bytes());
        bytes[64] = recovery_id.to_byte() + 27;
        bytes
    }

    pub fn sign_hex(&self, message: &[u8]) -> String {
        format!("0x{}", hex::encode(self.sign(message)))
    }
}

/// Well-known development keys, so that derived addresses can be checked
/// against published values
pub struct Identities {
    pub alice: TestIssuer,
    pub bob: TestIssuer,
    pub mallory: TestIssuer,
}

impl Identities {
    pub fn new() -> Self {
        Identities {
            alice: TestIssuer::from_secret_hex(
                "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
            ),
            bob: TestIssuer::from_secret_hex(
                "59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d",
            ),
            mallory: TestIssuer::from_secret_hex(
                "5de4111afa1a4b94908f83103eb1f1706367c2e68ca870fc3fb9a804cdab365a",
            ),
        }
    }
}
