/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2023-2025 ByteDance and/or its affiliates.
 */

use crate::Histogram;

/// The seam a metrics exporter plugs into. The exporter receives each
/// metric through the matching visit method and decides how to format
/// and ship its values; no exporter is implemented in this crate.
pub trait MetricsVisitor {
    fn histogram(&mut self, histogram: &Histogram);
}

pub trait Metric {
    fn name(&self) -> &str;

    fn visit(&self, visitor: &mut dyn MetricsVisitor);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HistogramConfig;

    #[derive(Default)]
    struct NameCollector {
        seen: Vec<String>,
    }

    impl MetricsVisitor for NameCollector {
        fn histogram(&mut self, histogram: &Histogram) {
            self.seen.push(histogram.name().to_string());
        }
    }

    #[test]
    fn histogram_visits_as_histogram() {
        let histogram = HistogramConfig::new().name("latency").build().unwrap();
        let mut collector = NameCollector::default();
        histogram.visit(&mut collector);
        assert_eq!(collector.seen, ["latency"]);
    }
}
