/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

mod value;
pub use value::MetricValue;

mod percentile;
pub use percentile::Percentile;

mod snapshot;
pub use snapshot::Snapshot;

mod reservoir;
pub use reservoir::{Reservoir, UniformReservoir};

mod histogram;
pub use histogram::Histogram;

mod config;
pub use config::{HistogramConfig, HistogramConfigError};

mod metric;
pub use metric::{Metric, MetricsVisitor};
