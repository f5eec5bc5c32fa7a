/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

/// An immutable, ascending-sorted view of a reservoir's samples at one
/// point in time. All statistics of one metrics query are computed from a
/// single Snapshot so they stay mutually consistent.
///
/// An empty snapshot reports zero for every statistic.
pub struct Snapshot {
    values: Vec<i64>,
}

impl Snapshot {
    pub(crate) fn new(mut values: Vec<i64>) -> Self {
        values.sort_unstable();
        Snapshot { values }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn min(&self) -> i64 {
        self.values.first().copied().unwrap_or(0)
    }

    pub fn max(&self) -> i64 {
        self.values.last().copied().unwrap_or(0)
    }

    pub fn mean(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.values.iter().map(|v| *v as f64).sum();
        sum / self.values.len() as f64
    }

    /// Population standard deviation of the sampled values.
    pub fn stddev(&self) -> f64 {
        let len = self.values.len();
        if len <= 1 {
            return 0.0;
        }
        let mean = self.mean();
        let variance = self
            .values
            .iter()
            .map(|v| {
                let diff = *v as f64 - mean;
                diff * diff
            })
            .sum::<f64>()
            / len as f64;
        variance.sqrt()
    }

    /// Value at quantile `q` in [0.0, 1.0], with linear interpolation
    /// between the two closest ranks. Out-of-range input saturates to the
    /// first or last element instead of failing.
    pub fn quantile(&self, q: f64) -> f64 {
        let len = self.values.len();
        if len == 0 {
            return 0.0;
        }

        let pos = q * (len + 1) as f64;
        let index = pos as usize;
        if index < 1 {
            return self.values[0] as f64;
        }
        if index >= len {
            return self.values[len - 1] as f64;
        }

        let lower = self.values[index - 1] as f64;
        let upper = self.values[index] as f64;
        lower + (pos - pos.floor()) * (upper - lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        let snapshot = Snapshot::new(Vec::new());
        assert_eq!(snapshot.size(), 0);
        assert_eq!(snapshot.min(), 0);
        assert_eq!(snapshot.max(), 0);
        assert_eq!(snapshot.mean(), 0.0);
        assert_eq!(snapshot.stddev(), 0.0);
        assert_eq!(snapshot.quantile(0.5), 0.0);
    }

    #[test]
    fn single_value() {
        let snapshot = Snapshot::new(vec![7]);
        assert_eq!(snapshot.min(), 7);
        assert_eq!(snapshot.max(), 7);
        assert_eq!(snapshot.mean(), 7.0);
        assert_eq!(snapshot.stddev(), 0.0);
        assert_eq!(snapshot.quantile(0.0), 7.0);
        assert_eq!(snapshot.quantile(0.5), 7.0);
        assert_eq!(snapshot.quantile(0.999), 7.0);
    }

    #[test]
    fn sorts_input() {
        let snapshot = Snapshot::new(vec![5, 1, 4, 2, 3]);
        assert_eq!(snapshot.values(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn quantiles_over_1_to_99() {
        let snapshot = Snapshot::new((1..=99).collect());
        assert_eq!(snapshot.size(), 99);
        assert_eq!(snapshot.min(), 1);
        assert_eq!(snapshot.max(), 99);
        assert_eq!(snapshot.mean(), 50.0);
        assert_eq!(snapshot.quantile(0.0001), 1.0);
        assert_eq!(snapshot.quantile(0.01), 1.0);
        assert_eq!(snapshot.quantile(0.5), 50.0);
        assert_eq!(snapshot.quantile(0.6), 60.0);
        assert_eq!(snapshot.quantile(0.75), 75.0);
        assert_eq!(snapshot.quantile(0.95), 95.0);
        assert_eq!(snapshot.quantile(0.98), 98.0);
        assert_eq!(snapshot.quantile(0.99), 99.0);
        assert_eq!(snapshot.quantile(0.999), 99.0);
    }

    #[test]
    fn quantile_interpolates() {
        let snapshot = Snapshot::new(vec![10, 20]);
        // pos = 0.5 * 3 = 1.5, halfway between the two elements
        assert_eq!(snapshot.quantile(0.5), 15.0);
    }

    #[test]
    fn population_stddev() {
        let snapshot = Snapshot::new(vec![2, 4, 4, 4, 5, 5, 7, 9]);
        assert_eq!(snapshot.mean(), 5.0);
        assert_eq!(snapshot.stddev(), 2.0);
    }
}
