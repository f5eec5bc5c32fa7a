/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use log::debug;
use thiserror::Error;

use crate::{Histogram, Percentile, Reservoir, UniformReservoir};

#[derive(Debug, Error)]
pub enum HistogramConfigError {
    #[error("metric name is required")]
    MissingName,
    #[error("skip_default_metrics requires a non-empty list of valid percentiles")]
    InvalidPercentiles,
}

/// Accumulates the settings of a [`Histogram`] and validates them in
/// [`build`](HistogramConfig::build). Configuration errors are the only
/// errors this crate ever raises, a built histogram never fails.
#[derive(Default)]
pub struct HistogramConfig {
    name: Option<String>,
    reservoir: Option<Box<dyn Reservoir>>,
    percentiles: Vec<f64>,
    skip_default_metrics: bool,
}

impl HistogramConfig {
    pub fn new() -> Self {
        HistogramConfig::default()
    }

    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the reservoir to sample into. The default is a fresh
    /// [`UniformReservoir`] with capacity 1024.
    pub fn reservoir<R: Reservoir + 'static>(mut self, reservoir: R) -> Self {
        self.reservoir = Some(Box::new(reservoir));
        self
    }

    /// Set extra percentiles to report, in [0.0, 100.0]. Out-of-range
    /// entries are ignored, they never fail the build on their own.
    pub fn percentiles<I: IntoIterator<Item = f64>>(mut self, percentiles: I) -> Self {
        self.percentiles = percentiles.into_iter().collect();
        self
    }

    /// Report only the configured percentiles instead of the default
    /// metric set. Requires at least one valid percentile.
    pub fn skip_default_metrics(mut self, skip: bool) -> Self {
        self.skip_default_metrics = skip;
        self
    }

    pub fn build(self) -> Result<Histogram, HistogramConfigError> {
        let name = match self.name {
            Some(name) if !name.is_empty() => name,
            _ => return Err(HistogramConfigError::MissingName),
        };

        let percentiles: Vec<Percentile> = self
            .percentiles
            .into_iter()
            .filter_map(|v| {
                let p = Percentile::new(v);
                if p.is_none() {
                    debug!("metric {name}: ignoring out-of-range percentile {v}");
                }
                p
            })
            .collect();
        if self.skip_default_metrics && percentiles.is_empty() {
            return Err(HistogramConfigError::InvalidPercentiles);
        }

        let reservoir = self
            .reservoir
            .unwrap_or_else(|| Box::new(UniformReservoir::new()));
        Ok(Histogram::new(
            name,
            reservoir,
            percentiles,
            self.skip_default_metrics,
        ))
    }
}
