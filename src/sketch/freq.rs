//! Count-Min sketch frequency estimator.
//!
//! A `depth x width` counter table; each row hashes the value with its own
//! seed. The estimate is the minimum counter across rows, so it can
//! overcount on collisions but never undercounts.

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64_with_seed;

/// Failure probability target; depth = ceil(ln(1/delta)).
const DEFAULT_DELTA: f64 = 0.01;

const SEED_STRIDE: u64 = 0x9e3779b97f4a7c15;

/// Count-Min sketch with saturating `u64` counters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountMin {
    width: usize,
    depth: usize,
    seeds: Vec<u64>,
    // Row-major depth x width counter table.
    rows: Vec<u64>,
}

impl CountMin {
    /// Size the table for an expected number of distinct items:
    /// `width = ceil(e / epsilon)` with `epsilon = 1 / capacity`, and a
    /// depth targeting a 1% failure probability.
    pub fn for_capacity(max_unique_items: u64) -> Self {
        let epsilon = 1.0 / max_unique_items.max(1) as f64;
        let width = (std::f64::consts::E / epsilon).ceil() as usize;
        let depth = (1.0 / DEFAULT_DELTA).ln().ceil() as usize;
        Self::with_dimensions(width, depth)
    }

    pub fn with_dimensions(width: usize, depth: usize) -> Self {
        let width = width.max(1);
        let depth = depth.max(1);
        let seeds = (0..depth as u64).map(|i| i.wrapping_mul(SEED_STRIDE)).collect();
        Self {
            width,
            depth,
            seeds,
            rows: vec![0u64; width * depth],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn insert(&mut self, value: &str) {
        for row in 0..self.depth {
            let col = self.column(row, value);
            let cell = &mut self.rows[row * self.width + col];
            *cell = cell.saturating_add(1);
        }
    }

    /// Estimated occurrence count, never below the true count.
    pub fn estimate(&self, value: &str) -> u64 {
        let mut min = u64::MAX;
        for row in 0..self.depth {
            let col = self.column(row, value);
            min = min.min(self.rows[row * self.width + col]);
        }
        min
    }

    fn column(&self, row: usize, value: &str) -> usize {
        let hash = xxh3_64_with_seed(value.as_bytes(), self.seeds[row]);
        (hash as usize) % self.width
    }

    /// Parameter sanity after deserialization.
    pub fn check(&self) -> std::result::Result<(), String> {
        if self.width == 0 || self.depth == 0 {
            return Err("zero table dimension".to_string());
        }
        if self.seeds.len() != self.depth {
            return Err(format!(
                "seed count {} does not match depth {}",
                self.seeds.len(),
                self.depth
            ));
        }
        if self.rows.len() != self.width * self.depth {
            return Err(format!(
                "table size {} does not match {}x{}",
                self.rows.len(),
                self.depth,
                self.width
            ));
        }
        Ok(())
    }
}
