//! Credentials that authenticate requests to the bridge.
//!
//! The [`Signer`] trait is the seam between key management and request
//! signing. [`Credential`] is the in-memory secp256k1 implementation the
//! bridge expects.
//!
//! # Algorithms
//!
//! - **Curve**: secp256k1
//! - **Signature**: ECDSA over SHA-256, RFC 6979 nonces, low-S, DER encoded
//! - **Public key**: 33-byte compressed SEC1 point, hex encoded

use k256::ecdsa::signature::Signer as EcdsaSigner;
use k256::ecdsa::{Signature, SigningKey};
use rand::rngs::OsRng;
use std::fmt;

use crate::error::{BridgeError, Result};

/// secp256k1 private key length (32 bytes)
pub const PRIVATE_KEY_LEN: usize = 32;

/// Compressed SEC1 public key length (33 bytes)
pub const COMPRESSED_PUBLIC_KEY_LEN: usize = 33;

/// Signing capability used to authenticate bridge requests.
///
/// Implementations must be deterministic in [`public_key_hex`](Signer::public_key_hex)
/// and must never expose private key material.
pub trait Signer: Send + Sync {
    /// Hex-encoded public key sent in the `x-pubkey` header.
    fn public_key_hex(&self) -> String;

    /// Sign the canonical request message. Returns raw signature bytes.
    fn sign(&self, message: &[u8]) -> Result<Vec<u8>>;
}

/// In-memory secp256k1 keypair.
///
/// The public key is always derived from the private key on demand.
/// The private key has no accessor; `SigningKey` zeroizes itself on drop.
#[derive(Clone)]
pub struct Credential {
    signing_key: SigningKey,
}

impl Credential {
    /// Generate a new credential from the OS random number generator.
    pub fn generate() -> Self {
        Self {
            signing_key: SigningKey::random(&mut OsRng),
        }
    }

    /// Build a credential from 32 raw private key bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != PRIVATE_KEY_LEN {
            return Err(BridgeError::InvalidKey(format!(
                "expected {} bytes, got {}",
                PRIVATE_KEY_LEN,
                bytes.len()
            )));
        }
        let signing_key = SigningKey::from_slice(bytes)
            .map_err(|e| BridgeError::InvalidKey(e.to_string()))?;
        Ok(Self { signing_key })
    }

    /// Build a credential from a hex-encoded private key.
    pub fn from_hex(private_key_hex: &str) -> Result<Self> {
        let bytes = hex::decode(private_key_hex.trim())
            .map_err(|e| BridgeError::InvalidKey(format!("bad hex: {e}")))?;
        Self::from_bytes(&bytes)
    }

    /// Compressed SEC1 encoding of the public key.
    pub fn public_key_bytes(&self) -> Vec<u8> {
        self.signing_key
            .verifying_key()
            .to_encoded_point(true)
            .as_bytes()
            .to_vec()
    }
}

impl Signer for Credential {
    fn public_key_hex(&self) -> String {
        hex::encode(self.public_key_bytes())
    }

    fn sign(&self, message: &[u8]) -> Result<Vec<u8>> {
        let signature: Signature = self
            .signing_key
            .try_sign(message)
            .map_err(|e| BridgeError::Signing(e.to_string()))?;
        Ok(signature.to_der().as_bytes().to_vec())
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("public_key", &self.public_key_hex())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use k256::ecdsa::signature::Verifier;
    use k256::ecdsa::VerifyingKey;

    const KEY_ONE: &str = "0000000000000000000000000000000000000000000000000000000000000001";

    #[test]
    fn test_public_key_of_scalar_one_is_generator() {
        let credential = Credential::from_hex(KEY_ONE).unwrap();
        assert_eq!(
            credential.public_key_hex(),
            "0279be667ef9dcbbac55a06295ce870b07029bfcdb2dce28d959f2815b16f81798"
        );
    }

    #[test]
    fn test_generated_key_is_compressed() {
        let credential = Credential::generate();
        let pubkey = credential.public_key_bytes();
        assert_eq!(pubkey.len(), COMPRESSED_PUBLIC_KEY_LEN);
        assert!(pubkey[0] == 0x02 || pubkey[0] == 0x03);
        assert_eq!(credential.public_key_hex(), credential.public_key_hex());
    }

    #[test]
    fn test_signature_verifies_and_is_deterministic() {
        let credential = Credential::generate();
        let message = b"GET\n/keys\n";

        let first = credential.sign(message).unwrap();
        let second = credential.sign(message).unwrap();
        assert_eq!(first, second);

        let verifying_key = VerifyingKey::from_sec1_bytes(&credential.public_key_bytes()).unwrap();
        let signature = Signature::from_der(&first).unwrap();
        assert!(verifying_key.verify(message, &signature).is_ok());
        assert!(verifying_key.verify(b"GET\n/keys\nx", &signature).is_err());
    }

    #[test]
    fn test_rejects_malformed_keys() {
        assert!(matches!(
            Credential::from_hex("zz"),
            Err(BridgeError::InvalidKey(_))
        ));
        assert!(matches!(
            Credential::from_bytes(&[1u8; 31]),
            Err(BridgeError::InvalidKey(_))
        ));
        // zero is not a valid scalar
        assert!(matches!(
            Credential::from_bytes(&[0u8; 32]),
            Err(BridgeError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_debug_hides_private_key() {
        let credential = Credential::from_hex(KEY_ONE).unwrap();
        let debug = format!("{:?}", credential);
        assert!(debug.contains("0279be66"));
        assert!(!debug.contains(KEY_ONE));
    }
}
