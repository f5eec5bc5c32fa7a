/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Signed(i64),
    Double(f64),
}

impl MetricValue {
    pub fn as_f64(&self) -> f64 {
        match self {
            MetricValue::Signed(i) => *i as f64,
            MetricValue::Double(f) => *f,
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Signed(i) => write!(f, "{i}"),
            MetricValue::Double(v) => write!(f, "{v}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_f64() {
        assert_eq!(MetricValue::Signed(-3).as_f64(), -3.0);
        assert_eq!(MetricValue::Double(0.5).as_f64(), 0.5);
    }

    #[test]
    fn display() {
        assert_eq!(MetricValue::Signed(42).to_string(), "42");
        assert_eq!(MetricValue::Double(99.9).to_string(), "99.9");
    }
}
