//! Deterministic seed derivation.
//!
//! Turns arbitrary seed text into the 64-bit world seed, and narrows that
//! seed to the 32-bit width the `noise` primitives are keyed by.

use std::hash::Hasher;

use siphasher::sip::SipHasher13;

// ---------------------------------------------------------------------------
// Seed derivation
// ---------------------------------------------------------------------------

/// Fixed SipHash keys. Changing them changes every world ever generated.
const SEED_KEY_0: u64 = 0x6d61_7067_656e_2d30;
const SEED_KEY_1: u64 = 0x7365_6564_2d74_6578;

/// Hash seed text into a u64 world seed.
///
/// Uses SipHash-1-3 with pinned keys over the raw UTF-8 bytes, so the result
/// is identical across runs, platforms, and toolchain versions. Any string,
/// including the empty one, is a valid seed.
pub fn hash_seed(text: &str) -> u64 {
    let mut hasher = SipHasher13::new_with_keys(SEED_KEY_0, SEED_KEY_1);
    hasher.write(text.as_bytes());
    hasher.finish()
}

/// Fold a u64 world seed into the u32 seed taken by `noise` generators.
///
/// Both halves contribute, so seeds differing only in the high word still
/// produce different noise.
#[inline]
pub fn fold_seed(seed: u64) -> u32 {
    ((seed >> 32) ^ seed) as u32
}
