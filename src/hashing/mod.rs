use blake3::Hasher;

/// Cache key for a piece of scored content.
///
/// The scorer mode is part of the key so that answers from different scorers
/// never alias each other.
#[inline]
pub fn hash_content(mode: &str, text: &str) -> [u8; 32] {
    let mut hasher = Hasher::new();
    hasher.update(mode.as_bytes());
    hasher.update(b"|");
    hasher.update(text.as_bytes());
    *hasher.finalize().as_bytes()
}
