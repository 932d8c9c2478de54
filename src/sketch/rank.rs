//! Space-Saving top-K stream summary.
//!
//! Keeps at most `capacity` counters. An unseen value either takes a free
//! slot or replaces the current minimum, inheriting its count as error
//! bound. Any value with true frequency above `n / capacity` is guaranteed
//! to be tracked.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Counter {
    key: String,
    count: u64,
    // Maximum possible overcount inherited from the evicted minimum.
    error: u64,
}

/// Approximate top-K tracker.
///
/// Capacity is small by construction, so lookups scan the counter array
/// instead of maintaining a side index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopK {
    capacity: usize,
    counters: Vec<Counter>,
}

impl TopK {
    pub fn new(capacity: u64) -> Self {
        let capacity = capacity.max(1) as usize;
        Self {
            capacity,
            counters: Vec::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn insert(&mut self, value: &str) {
        if let Some(counter) = self.counters.iter_mut().find(|c| c.key == value) {
            counter.count += 1;
            return;
        }

        if self.counters.len() < self.capacity {
            self.counters.push(Counter {
                key: value.to_string(),
                count: 1,
                error: 0,
            });
            return;
        }

        // Replace the minimum; its count becomes the new entry's error bound.
        let min_idx = self
            .counters
            .iter()
            .enumerate()
            .min_by_key(|(_, c)| c.count)
            .map(|(i, _)| i)
            .unwrap_or(0);
        let min_count = self.counters[min_idx].count;
        self.counters[min_idx] = Counter {
            key: value.to_string(),
            count: min_count + 1,
            error: min_count,
        };
    }

    /// Tracked elements sorted by count descending, key ascending on ties.
    pub fn ranked(&self) -> Vec<(String, u64)> {
        let mut items: Vec<(String, u64)> = self
            .counters
            .iter()
            .map(|c| (c.key.clone(), c.count))
            .collect();
        items.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        items
    }

    /// Parameter sanity after deserialization.
    pub fn check(&self) -> std::result::Result<(), String> {
        if self.capacity == 0 {
            return Err("zero capacity".to_string());
        }
        if self.counters.len() > self.capacity {
            return Err(format!(
                "{} counters exceed capacity {}",
                self.counters.len(),
                self.capacity
            ));
        }
        Ok(())
    }
}
