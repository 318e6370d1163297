//! Structural fingerprints

use sha2::{Digest, Sha256};

const FINGERPRINT_LEN: usize = 16;

/// Short hex digest over the given fields
///
/// Structurally equal inputs give equal fingerprints, so two distinct nodes
/// with the same kind and text share one. Fields are NUL-separated so that
/// `("ab", "c")` and `("a", "bc")` differ.
#[must_use]
pub fn fingerprint(parts: &[&str]) -> String {
    let mut hasher = Sha256::new();
    for (i, part) in parts.iter().enumerate() {
        if i > 0 {
            hasher.update([0u8]);
        }
        hasher.update(part.as_bytes());
    }
    let mut hex = format!("{:x}", hasher.finalize());
    hex.truncate(FINGERPRINT_LEN);
    hex
}
