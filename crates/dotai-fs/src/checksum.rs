//! Content fingerprints
//!
//! A fingerprint is the first 16 hex characters of the SHA-256 digest of the
//! exact bytes. It is a change detector used for equality checks only.

use sha2::{Digest, Sha256};

/// Number of hex characters kept from the digest
const FINGERPRINT_LEN: usize = 16;

/// Compute the fingerprint of in-memory content.
pub fn content_fingerprint(content: impl AsRef<[u8]>) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_ref());
    let mut hex = format!("{:x}", hasher.finalize());
    hex.truncate(FINGERPRINT_LEN);
    hex
}
