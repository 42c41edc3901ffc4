//! Content hashing for cache keys.

/// Returns the 32-byte BLAKE3 digest of `text`.
///
/// Used as the embedding-cache key, so two strings share a cache slot only when their
/// bytes are identical.
#[inline]
pub fn hash_text(text: &str) -> [u8; 32] {
    *blake3::hash(text.as_bytes()).as_bytes()
}
