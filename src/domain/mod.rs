//! Domain layer containing the query types and cache key derivation.
//!
//! # Architecture
//!
//! - [`entities`] - Strongly typed, validated request queries
//! - [`cache_key`] - Deterministic cache keys for provider responses
//!
//! Nothing in this layer performs I/O. Handlers parse raw query strings into
//! these types before touching the cache or the provider.

pub mod cache_key;
pub mod entities;
