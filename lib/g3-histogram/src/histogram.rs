/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use std::collections::HashMap;

use foldhash::fast::FixedState;
use log::debug;

use crate::{Metric, MetricValue, MetricsVisitor, Percentile, Reservoir, Snapshot};

const DEFAULT_PERCENTILES: &[f64] = &[50.0, 75.0, 95.0, 98.0, 99.0, 99.9];

#[derive(Debug, Clone, Copy)]
enum MetricKind {
    Min,
    Max,
    Mean,
    StdDev,
    Percentile(Percentile),
}

impl MetricKind {
    fn extract(&self, snapshot: &Snapshot) -> MetricValue {
        match self {
            MetricKind::Min => MetricValue::Signed(snapshot.min()),
            MetricKind::Max => MetricValue::Signed(snapshot.max()),
            MetricKind::Mean => MetricValue::Double(snapshot.mean()),
            MetricKind::StdDev => MetricValue::Double(snapshot.stddev()),
            MetricKind::Percentile(p) => MetricValue::Double(snapshot.quantile(p.as_quantile())),
        }
    }
}

struct MetricExtractor {
    name: String,
    kind: MetricKind,
}

/// A histogram metric backed by a sampling [`Reservoir`].
///
/// The set of reported metrics is fixed at build time, see
/// [`HistogramConfig`](crate::HistogramConfig).
pub struct Histogram {
    name: String,
    reservoir: Box<dyn Reservoir>,
    extractors: Vec<MetricExtractor>,
}

impl Histogram {
    pub(crate) fn new(
        name: String,
        reservoir: Box<dyn Reservoir>,
        percentiles: Vec<Percentile>,
        skip_default_metrics: bool,
    ) -> Self {
        let mut extractors = if skip_default_metrics {
            Vec::with_capacity(percentiles.len())
        } else {
            default_extractors()
        };
        for p in percentiles {
            let name = p.metric_name();
            if extractors.iter().any(|e| e.name == name) {
                debug!("percentile {} dropped, metric {name} already present", p.value());
                continue;
            }
            extractors.push(MetricExtractor {
                name,
                kind: MetricKind::Percentile(p),
            });
        }
        Histogram {
            name,
            reservoir,
            extractors,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Record one observation. Never fails and is safe to call from many
    /// threads at once.
    pub fn update(&self, value: i64) {
        self.reservoir.update(value);
    }

    /// Compute all configured metrics from a single point-in-time snapshot
    /// of the reservoir.
    pub fn compute_metrics(&self) -> HashMap<String, MetricValue, FixedState> {
        let snapshot = self.reservoir.snapshot();
        let mut map =
            HashMap::with_capacity_and_hasher(self.extractors.len(), FixedState::with_seed(0));
        for extractor in &self.extractors {
            map.insert(extractor.name.clone(), extractor.kind.extract(&snapshot));
        }
        map
    }

    pub fn metric_names(&self) -> impl Iterator<Item = &str> {
        self.extractors.iter().map(|e| e.name.as_str())
    }

    pub fn default_metric_names() -> Vec<String> {
        default_extractors().into_iter().map(|e| e.name).collect()
    }
}

impl Metric for Histogram {
    fn name(&self) -> &str {
        &self.name
    }

    fn visit(&self, visitor: &mut dyn MetricsVisitor) {
        visitor.histogram(self);
    }
}

fn default_extractors() -> Vec<MetricExtractor> {
    let mut list = vec![
        MetricExtractor {
            name: "Min".to_string(),
            kind: MetricKind::Min,
        },
        MetricExtractor {
            name: "Max".to_string(),
            kind: MetricKind::Max,
        },
        MetricExtractor {
            name: "Mean".to_string(),
            kind: MetricKind::Mean,
        },
        MetricExtractor {
            name: "StdDev".to_string(),
            kind: MetricKind::StdDev,
        },
    ];
    for v in DEFAULT_PERCENTILES.iter().filter_map(|v| Percentile::new(*v)) {
        list.push(MetricExtractor {
            name: v.metric_name(),
            kind: MetricKind::Percentile(v),
        });
    }
    list
}
