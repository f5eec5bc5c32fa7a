/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Percentile(f64);

impl Percentile {
    /// Get a Percentile from a f64 value, which should be in range [0.0, 100.0]
    pub fn new(value: f64) -> Option<Self> {
        if value.is_finite() && (0.0..=100.0).contains(&value) {
            Some(Percentile(value))
        } else {
            None
        }
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.0
    }

    #[inline]
    pub(crate) fn as_quantile(&self) -> f64 {
        self.0 / 100.0
    }

    /// Render the metric name for this percentile. The decimal point is
    /// replaced by '_' so the name stays valid for metric backends, and
    /// integral values drop the fraction entirely: 10.1 => "P10_1",
    /// 11.0 => "P11", 0.0 => "P0".
    pub fn metric_name(&self) -> String {
        if self.0.fract() == 0.0 {
            format!("P{}", self.0 as u64)
        } else {
            format!("P{}", self.0).replace('.', "_")
        }
    }
}
