//! Word shingling for similarity comparison.
//!
//! Tokens are hashed individually with seeded xxh3, then combined into
//! k-window polynomial rolling hashes in O(n). The *set* of window hashes is
//! what similarity compares: set semantics make the score symmetric and
//! insensitive to where in the document an overlap occurs.

use xxhash_rust::xxh3::xxh3_64_with_seed;

/// Compute the sorted, deduplicated set of k-shingle hashes for a token
/// stream.
///
/// Callers must provide canonical tokens in order; no normalization happens
/// here. When the stream is shorter than `k`, the window shrinks to the
/// stream length so every non-empty document produces a non-empty set and
/// compares equal to itself.
pub fn shingle_set<S: AsRef<str>>(tokens: &[S], k: usize, seed: u64) -> Vec<u64> {
    let n = tokens.len();
    if n == 0 || k == 0 {
        return Vec::new();
    }
    let k = k.min(n);

    // Hash each token once up front.
    let mut th: Vec<u64> = Vec::with_capacity(n);
    th.extend(
        tokens
            .iter()
            .map(|t| xxh3_64_with_seed(t.as_ref().as_bytes(), seed)),
    );

    // Polynomial rolling hash over the token hashes. The base is mixed with
    // the seed so window hashes from different seeds are unrelated.
    const BASE: u64 = 1_000_003;
    let base = BASE ^ splitmix64(seed);

    let mut base_km1 = 1u64;
    for _ in 1..k {
        base_km1 = base_km1.wrapping_mul(base);
    }

    let mut out = Vec::with_capacity(n - k + 1);
    let mut h = 0u64;
    for &val in th.iter().take(k) {
        h = h.wrapping_mul(base).wrapping_add(val);
    }
    out.push(h);

    for (&old, &new) in th.iter().zip(th.iter().skip(k)) {
        h = h.wrapping_sub(old.wrapping_mul(base_km1));
        h = h.wrapping_mul(base).wrapping_add(new);
        out.push(h);
    }

    out.sort_unstable();
    out.dedup();
    out
}

/// Seed expansion with good bit dispersion.
#[inline]
pub(crate) fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}
