use core::hash::Hasher;
use siphasher::sip::SipHasher13;

/// Hashes a generator name into 64 bits.
///
/// Uses SipHash-1-3 with fixed zero keys over the raw name bytes, so the
/// result is stable across processes and platforms (unlike
/// `std::collections::hash_map::DefaultHasher`, whose algorithm may change
/// between Rust releases). Names are treated as opaque bytes and need not be
/// valid UTF-8.
///
/// # Example
/// ```
/// use seedrng::hash_name;
///
/// assert_eq!(hash_name(b"foo"), hash_name("foo".as_bytes()));
/// assert_ne!(hash_name(b"foo"), hash_name(b"bar"));
/// ```
pub fn hash_name(name: &[u8]) -> u64 {
    let mut hasher = SipHasher13::new_with_keys(0, 0);
    hasher.write(name);
    hasher.finish()
}

/// Derives the 32-bit seed fed to the engine from a name and a numeric seed.
///
/// The name hash is XOR-combined with `seed` and truncated to the low 32
/// bits. The same `(name, seed)` pair always yields the same effective seed.
///
/// # Example
/// ```
/// use seedrng::effective_seed;
///
/// assert_eq!(effective_seed(b"foo", 42), 29_979_600);
/// ```
pub fn effective_seed(name: &[u8], seed: u32) -> u32 {
    (hash_name(name) ^ u64::from(seed)) as u32
}
