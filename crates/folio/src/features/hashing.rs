//! Term hashing ("hashing trick").
//!
//! Each term is hashed with 32-bit MurmurHash3 (x86 variant, seed 42) over its UTF-8 bytes and
//! the signed hash is reduced to a bucket with a non-negative modulo. No vocabulary is kept, so
//! distinct terms may share a bucket.

use super::*;

/// Seed used for term hashing.
pub const HASH_SEED: u32 = 42;

/// First MurmurHash3 block multiplier.
const C1: u32 = 0xcc9e_2d51;
/// Second MurmurHash3 block multiplier.
const C2: u32 = 0x1b87_3593;

/// Maps token sequences to term-frequency vectors of fixed dimensionality.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashingTf {
  /// Number of buckets
  num_features: usize,
}

impl HashingTf {
  /// Creates a hasher with `num_features` buckets.
  ///
  /// # Panics
  ///
  /// Panics if `num_features` is zero.
  pub fn new(num_features: usize) -> Self {
    assert!(num_features > 0, "HashingTf needs at least one bucket");
    Self { num_features }
  }

  /// Number of buckets.
  pub fn num_features(&self) -> usize { self.num_features }

  /// Bucket for a single term.
  pub fn index_of(&self, term: &str) -> usize {
    let hash = murmur3_x86_32(term.as_bytes(), HASH_SEED) as i32;
    i64::from(hash).rem_euclid(self.num_features as i64) as usize
  }

  /// Counts terms per bucket.
  pub fn transform<S: AsRef<str>>(&self, terms: &[S]) -> SparseVector {
    let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
    for term in terms {
      *counts.entry(self.index_of(term.as_ref())).or_default() += 1.0;
    }
    SparseVector::from_entries(self.num_features, counts)
  }
}

/// 32-bit MurmurHash3, x86 variant.
pub fn murmur3_x86_32(data: &[u8], seed: u32) -> u32 {
  let mut h = seed;
  let chunks = data.chunks_exact(4);
  let tail = chunks.remainder();

  for chunk in chunks {
    let k = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    h ^= mix_k(k);
    h = h.rotate_left(13).wrapping_mul(5).wrapping_add(0xe654_6b64);
  }

  if !tail.is_empty() {
    let k = tail.iter().enumerate().fold(0u32, |k, (i, &byte)| k ^ (u32::from(byte) << (8 * i)));
    h ^= mix_k(k);
  }

  h ^= data.len() as u32;
  fmix32(h)
}

/// Scrambles one 4-byte block.
fn mix_k(k: u32) -> u32 {
  k.wrapping_mul(C1).rotate_left(15).wrapping_mul(C2)
}

/// Final avalanche.
fn fmix32(mut h: u32) -> u32 {
  h ^= h >> 16;
  h = h.wrapping_mul(0x85eb_ca6b);
  h ^= h >> 13;
  h = h.wrapping_mul(0xc2b2_ae35);
  h ^= h >> 16;
  h
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_murmur3_reference_values() {
    assert_eq!(murmur3_x86_32(b"", 0), 0);
    assert_eq!(murmur3_x86_32(b"", 1), 0x514e_28b7);
    assert_eq!(murmur3_x86_32(b"", 0xffff_ffff), 0x81f1_6f39);
    assert_eq!(murmur3_x86_32(b"\0\0\0\0", 0), 0x2362_f9de);
    assert_eq!(murmur3_x86_32(b"aaaa", 0x9747_b28c), 0x5a97_808a);
    assert_eq!(murmur3_x86_32(b"Hello, world!", 0x9747_b28c), 0x2488_4cba);
    assert_eq!(
      murmur3_x86_32(b"The quick brown fox jumps over the lazy dog", 0x9747_b28c),
      0x2fa8_26cd
    );
  }

  #[test]
  fn test_index_is_in_range() {
    let hashing = HashingTf::new(7);
    for term in ["whale", "ishmael", "queequeg", "ahab", "a", ""] {
      assert!(hashing.index_of(term) < 7);
    }
    assert_eq!(HashingTf::new(1).index_of("anything"), 0);
  }

  #[test]
  fn test_transform_counts_terms() {
    let hashing = HashingTf::new(10_000);
    let vector = hashing.transform(&["whale", "sea", "whale"]);

    assert_eq!(vector.size(), 10_000);
    assert_eq!(vector.get(hashing.index_of("whale")), 2.0);
    assert_eq!(vector.get(hashing.index_of("sea")), 1.0);
    assert_eq!(vector.iter().map(|(_, count)| count).sum::<f64>(), 3.0);
  }

  #[test]
  fn test_bucket_assignment() {
    let hashing = HashingTf::new(10);
    let indices: Vec<usize> = ["a", "b", "c"].iter().map(|term| hashing.index_of(term)).collect();
    assert_eq!(indices, vec![7, 5, 8]);

    let vector = hashing.transform(&["a", "b", "c"]);
    assert_eq!(vector.iter().collect::<Vec<_>>(), vec![(5, 1.0), (7, 1.0), (8, 1.0)]);
  }

  #[test]
  fn test_transform_empty() {
    let vector = HashingTf::new(100).transform::<&str>(&[]);
    assert_eq!(vector, SparseVector::zeros(100));
  }
}
