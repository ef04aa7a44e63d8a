//! Prompt fingerprinting, so logs can tell which system prompt a run used.

use std::fmt::Write;

use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint (lowercase hex) for a prompt string.
pub fn hash_prompt(prompt: &str) -> String {
    let digest = Sha256::digest(prompt.as_bytes());
    digest.iter().fold(String::with_capacity(64), |mut hex, byte| {
        let _ = write!(hex, "{:02x}", byte);
        hex
    })
}
