//! In-memory memoisation of content assessments.
//!
//! Model calls are slow and metered, and the same article is often checked many
//! times. [`CachedScorer`] wraps any [`ContentScorer`] with a bounded moka cache
//! keyed by a BLAKE3 hash of the scorer mode and the text.

pub mod scorer;


pub use scorer::{CachedScorer, DEFAULT_CACHE_CAPACITY};
