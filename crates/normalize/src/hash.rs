use sha2::{Digest, Sha256};

/// Hash canonical bytes with the normalization version folded in.
///
/// Layout: `SHA-256(version_be || 0x00 || bytes)`. The separator keeps
/// version and content domains from colliding.
pub fn hash_canonical_bytes(version: u32, bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(version.to_be_bytes());
    hasher.update([0u8]);
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Version-free hash of arbitrary text. Useful for caller-side identity
/// checks that do not care about normalization versioning.
pub fn hash_text(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}
