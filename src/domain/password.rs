//! Password verifier: per-user random salt plus an HMAC-SHA256 digest.
//!
//! Plaintext passwords are never stored. Each user gets a fresh random salt
//! used as the HMAC key over the password; salt and digest are persisted
//! hex-encoded in separate columns. Verification is constant-time via the
//! underlying MAC comparison.

use std::fmt;
use std::sync::OnceLock;

use hmac::{Hmac, Mac};
use rand::RngCore;
use rand::rngs::OsRng;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Salt length in bytes. 128 bits of entropy per user.
pub const SALT_LEN: usize = 16;

/// SHA-256 digest length in bytes.
const DIGEST_LEN: usize = 32;

/// Errors decoding a stored verifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PasswordVerifierError {
    /// Stored salt is not valid hex of the expected length.
    #[error("stored salt is malformed")]
    MalformedSalt,
    /// Stored digest is not valid hex of the expected length.
    #[error("stored digest is malformed")]
    MalformedDigest,
}

/// Salted credential verifier for one user.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordVerifier {
    salt: Vec<u8>,
    digest: Vec<u8>,
}

impl PasswordVerifier {
    /// Derive a fresh verifier for a new password using a random salt.
    pub fn derive(password: &str) -> Self {
        let mut salt = vec![0u8; SALT_LEN];
        OsRng.fill_bytes(&mut salt);
        let digest = compute_digest(&salt, password);
        Self { salt, digest }
    }

    /// Reconstruct a verifier from its stored hex-encoded parts.
    pub fn from_hex(salt_hex: &str, digest_hex: &str) -> Result<Self, PasswordVerifierError> {
        let salt = hex::decode(salt_hex).map_err(|_| PasswordVerifierError::MalformedSalt)?;
        if salt.len() != SALT_LEN {
            return Err(PasswordVerifierError::MalformedSalt);
        }
        let digest = hex::decode(digest_hex).map_err(|_| PasswordVerifierError::MalformedDigest)?;
        if digest.len() != DIGEST_LEN {
            return Err(PasswordVerifierError::MalformedDigest);
        }
        Ok(Self { salt, digest })
    }

    /// Check a candidate password against the stored digest in constant time.
    pub fn verify(&self, password: &str) -> bool {
        let Ok(mut mac) = HmacSha256::new_from_slice(&self.salt) else {
            return false;
        };
        mac.update(password.as_bytes());
        mac.verify_slice(&self.digest).is_ok()
    }

    /// Hex-encoded salt for persistence.
    pub fn salt_hex(&self) -> String {
        hex::encode(&self.salt)
    }

    /// Hex-encoded digest for persistence.
    pub fn digest_hex(&self) -> String {
        hex::encode(&self.digest)
    }

    /// Shared throwaway verifier used to equalise timing when an email is
    /// unknown: authentication always performs one digest comparison whether
    /// or not the account exists.
    pub fn dummy() -> &'static Self {
        static DUMMY: OnceLock<PasswordVerifier> = OnceLock::new();
        DUMMY.get_or_init(|| Self::derive("docket-dummy-password"))
    }
}

impl fmt::Debug for PasswordVerifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print salt or digest material.
        f.debug_struct("PasswordVerifier").finish_non_exhaustive()
    }
}

fn compute_digest(salt: &[u8], password: &str) -> Vec<u8> {
    let Ok(mut mac) = HmacSha256::new_from_slice(salt) else {
        // HMAC accepts keys of any length; this branch is unreachable but
        // avoids a panic path in credential code.
        return Vec::new();
    };
    mac.update(password.as_bytes());
    mac.finalize().into_bytes().to_vec()
}
