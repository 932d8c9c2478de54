//! Bloom filter for approximate set membership.
//!
//! False positives are possible at the configured rate; false negatives
//! are not. Bit indexes come from double hashing: `h1 + i * h2 mod m`.

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64_with_seed;

/// Target false-positive rate when sizing from a capacity.
const DEFAULT_FP_RATE: f64 = 0.01;

const H1_SEED: u64 = 0;
const H2_SEED: u64 = 0x9e3779b97f4a7c15;

const MAX_HASHES: usize = 32;

/// Word-packed Bloom filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BloomFilter {
    bits: Vec<u64>,
    num_bits: usize,
    num_hashes: usize,
}

impl BloomFilter {
    /// Size the filter for an expected item count at the default 1%
    /// false-positive rate: `m = -n ln(p) / ln(2)^2`, `k = (m/n) ln(2)`.
    pub fn for_capacity(max_unique_items: u64) -> Self {
        let n = max_unique_items.max(1) as f64;
        let ln2_squared = std::f64::consts::LN_2 * std::f64::consts::LN_2;
        let num_bits = (-n * DEFAULT_FP_RATE.ln() / ln2_squared).ceil() as usize;
        let num_hashes = ((num_bits as f64 / n) * std::f64::consts::LN_2).ceil() as usize;
        Self::with_params(num_bits, num_hashes)
    }

    pub fn with_params(num_bits: usize, num_hashes: usize) -> Self {
        // Round the bit count up to a whole word.
        let num_words = (num_bits.max(64) + 63) / 64;
        Self {
            bits: vec![0u64; num_words],
            num_bits: num_words * 64,
            num_hashes: num_hashes.clamp(1, MAX_HASHES),
        }
    }

    pub fn num_bits(&self) -> usize {
        self.num_bits
    }

    pub fn insert(&mut self, value: &str) {
        let (h1, h2) = self.hash_pair(value);
        for i in 0..self.num_hashes {
            let idx = self.bit_index(h1, h2, i);
            self.bits[idx / 64] |= 1u64 << (idx % 64);
        }
    }

    /// True if the value may have been inserted; false means definitely not.
    pub fn contains(&self, value: &str) -> bool {
        let (h1, h2) = self.hash_pair(value);
        for i in 0..self.num_hashes {
            let idx = self.bit_index(h1, h2, i);
            if self.bits[idx / 64] & (1u64 << (idx % 64)) == 0 {
                return false;
            }
        }
        true
    }

    fn hash_pair(&self, value: &str) -> (u64, u64) {
        let bytes = value.as_bytes();
        (
            xxh3_64_with_seed(bytes, H1_SEED),
            xxh3_64_with_seed(bytes, H2_SEED),
        )
    }

    fn bit_index(&self, h1: u64, h2: u64, i: usize) -> usize {
        let hash = h1.wrapping_add((i as u64).wrapping_mul(h2));
        (hash as usize) % self.num_bits
    }

    /// Parameter sanity after deserialization.
    pub fn check(&self) -> std::result::Result<(), String> {
        if self.num_hashes == 0 || self.num_hashes > MAX_HASHES {
            return Err(format!("hash count {} out of range", self.num_hashes));
        }
        if self.bits.len() * 64 != self.num_bits {
            return Err(format!(
                "bit array of {} words does not hold {} bits",
                self.bits.len(),
                self.num_bits
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_false_negatives() {
        let mut bloom = BloomFilter::for_capacity(1_000);
        let inserted: Vec<String> = (0..1_000).map(|i| format!("item_{}", i)).collect();
        for value in &inserted {
            bloom.insert(value);
        }
        for value in &inserted {
            assert!(bloom.contains(value), "false negative for {}", value);
        }
    }

    #[test]
    fn test_unknown_values_mostly_absent() {
        let mut bloom = BloomFilter::for_capacity(10_000);
        for i in 0..10_000 {
            bloom.insert(&format!("present_{}", i));
        }

        let mut false_positives = 0;
        for i in 0..10_000 {
            if bloom.contains(&format!("absent_{}", i)) {
                false_positives += 1;
            }
        }
        // Target is 1%; allow generous slack.
        assert!(
            false_positives < 300,
            "false positive count too high: {}",
            false_positives
        );
    }

    #[test]
    fn test_sparse_filter_rejects() {
        let mut bloom = BloomFilter::for_capacity(1_000);
        for value in ["hulk", "thor", "iron man", "hawk-eye"] {
            bloom.insert(value);
        }
        assert!(bloom.contains("hulk"));
        assert!(!bloom.contains("captain america"));
        assert!(!bloom.contains("black widow"));
    }

    #[test]
    fn test_minimum_sizing() {
        let bloom = BloomFilter::for_capacity(1);
        assert!(bloom.num_bits() >= 64);
        assert!(bloom.check().is_ok());
    }

    #[test]
    fn test_check_rejects_bad_bits() {
        let mut bloom = BloomFilter::for_capacity(100);
        assert!(bloom.check().is_ok());
        bloom.bits.pop();
        assert!(bloom.check().is_err());
    }
}
