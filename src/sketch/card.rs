//! HyperLogLog cardinality estimator.
//!
//! Harmonic-mean estimation with linear-counting correction for small
//! cardinalities. Memory usage is one byte per register.

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

const MIN_PRECISION: u8 = 4;
const MAX_PRECISION: u8 = 18;

/// HyperLogLog sketch.
///
/// The relative standard error is approximately `1.04 / sqrt(2^precision)`.
/// The estimate is monotonic nondecreasing under insertion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HyperLogLog {
    precision: u8,
    registers: Vec<u8>,
}

impl HyperLogLog {
    /// Create a sketch with the given precision in `[4, 18]`.
    pub fn new(precision: u8) -> Self {
        let precision = precision.clamp(MIN_PRECISION, MAX_PRECISION);
        Self {
            precision,
            registers: vec![0u8; 1usize << precision],
        }
    }

    /// Size the sketch for an expected number of distinct items, roughly
    /// one register per expected item within the working precision range.
    pub fn for_capacity(max_unique_items: u64) -> Self {
        let bits = (max_unique_items.max(2) as f64).log2().ceil() as u8;
        Self::new(bits.clamp(MIN_PRECISION, MAX_PRECISION))
    }

    pub fn precision(&self) -> u8 {
        self.precision
    }

    pub fn insert(&mut self, value: &str) {
        let hash = xxh3_64(value.as_bytes());
        let p = self.precision as u32;

        // Top p bits select the register, the rest feed the rank.
        let idx = (hash >> (64 - p)) as usize;
        let w = hash << p;

        // rho is clamped so an all-zero suffix stays in range.
        let max_rho = (64 - p + 1) as u8;
        let rho = ((w.leading_zeros() + 1) as u8).min(max_rho);

        if rho > self.registers[idx] {
            self.registers[idx] = rho;
        }
    }

    /// Estimated number of distinct values inserted so far.
    pub fn estimate(&self) -> u64 {
        let m = self.registers.len() as f64;
        let zeros = self.registers.iter().filter(|&&r| r == 0).count();
        if zeros == self.registers.len() {
            return 0;
        }

        let sum: f64 = self.registers.iter().map(|&r| 2f64.powi(-(r as i32))).sum();
        let raw = self.alpha() * m * m / sum;

        // Linear counting is more accurate while most registers are empty.
        let corrected = if raw <= 2.5 * m && zeros > 0 {
            let lc = m * (m / zeros as f64).ln();
            if lc <= 2.5 * m {
                lc
            } else {
                raw
            }
        } else {
            raw
        };

        corrected.round() as u64
    }

    fn alpha(&self) -> f64 {
        match self.registers.len() {
            16 => 0.673,
            32 => 0.697,
            64 => 0.709,
            m => 0.7213 / (1.0 + 1.079 / m as f64),
        }
    }

    /// Parameter sanity after deserialization.
    pub fn check(&self) -> std::result::Result<(), String> {
        if !(MIN_PRECISION..=MAX_PRECISION).contains(&self.precision) {
            return Err(format!("precision {} out of range", self.precision));
        }
        let expected = 1usize << self.precision;
        if self.registers.len() != expected {
            return Err(format!(
                "register count {} does not match precision {}",
                self.registers.len(),
                self.precision
            ));
        }
        Ok(())
    }
}
