//! Identity hashing for resource names.

/// Computes the identity hash of a resource name.
///
/// The hash is deterministic across processes and platforms (`xxh3_64` over the UTF-8
/// bytes), so traces from separate runs can be compared directly.
pub fn hash_name(name: &str) -> u64 {
    xxhash_rust::xxh3::xxh3_64(name.as_bytes())
}
