//! Cryptographic Utilities

use rand::RngCore;
use sha2::{Digest, Sha256};

/// Length of a raw proof token in bytes (256 bits of entropy).
pub const PROOF_TOKEN_BYTES: usize = 32;

/// Generate cryptographically secure random bytes
pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    rand::rng().fill_bytes(&mut bytes);
    bytes
}

/// Compute SHA-256 hash
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Encode bytes as lowercase hex
pub fn to_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Generate a fresh proof token: 256 random bits, hex-rendered.
///
/// The raw token is handed to the client exactly once; only its digest
/// is ever persisted.
pub fn generate_proof_token() -> String {
    to_hex(&random_bytes(PROOF_TOKEN_BYTES))
}

/// One-way digest of a raw proof token.
///
/// The digest is computed over the token's ASCII hex form, matching how
/// the client echoes the token back.
pub fn token_digest(token: &str) -> [u8; 32] {
    sha256(token.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_bytes_length() {
        assert_eq!(random_bytes(32).len(), 32);
        assert_eq!(random_bytes(0).len(), 0);
        assert_eq!(random_bytes(64).len(), 64);
    }

    #[test]
    fn test_random_bytes_not_all_zeros() {
        let bytes = random_bytes(32);
        assert!(
            bytes.iter().any(|&b| b != 0),
            "Random bytes should not be all zeros"
        );
    }

    #[test]
    fn test_sha256_known_values() {
        // SHA-256 of empty string
        let hash = sha256(b"");
        let expected =
            hex::decode("e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855")
                .unwrap();
        assert_eq!(hash.to_vec(), expected);

        // SHA-256 of "hello"
        let hash = sha256(b"hello");
        let expected =
            hex::decode("2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824")
                .unwrap();
        assert_eq!(hash.to_vec(), expected);
    }

    #[test]
    fn test_proof_token_shape() {
        let token = generate_proof_token();
        assert_eq!(token.len(), PROOF_TOKEN_BYTES * 2);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_proof_tokens_unique() {
        let a = generate_proof_token();
        let b = generate_proof_token();
        assert_ne!(a, b);
    }

    #[test]
    fn test_token_digest_deterministic() {
        let token = generate_proof_token();
        assert_eq!(token_digest(&token), token_digest(&token));
        assert_ne!(token_digest(&token), token_digest("not-the-token"));
    }
}
