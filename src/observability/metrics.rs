use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};

#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    pub lookups_total: IntCounterVec,
    pub upstream_latency_seconds: HistogramVec,
}

impl Metrics {
    pub fn new() -> Self {
        let registry = Registry::new();

        let lookups_total = IntCounterVec::new(
            Opts::new("directions_lookups_total", "Total directions lookups by outcome"),
            &["outcome"],
        )
        .expect("valid directions_lookups_total metric");

        let upstream_latency_seconds = HistogramVec::new(
            HistogramOpts::new(
                "directions_upstream_latency_seconds",
                "Latency of directions provider calls in seconds",
            ),
            &["outcome"],
        )
        .expect("valid directions_upstream_latency_seconds metric");

        registry
            .register(Box::new(lookups_total.clone()))
            .expect("register directions_lookups_total");
        registry
            .register(Box::new(upstream_latency_seconds.clone()))
            .expect("register directions_upstream_latency_seconds");

        Self {
            registry,
            lookups_total,
            upstream_latency_seconds,
        }
    }

    pub fn record_lookup(&self, outcome: &str) {
        self.lookups_total.with_label_values(&[outcome]).inc();
    }

    pub fn observe_upstream(&self, outcome: &str, elapsed_secs: f64) {
        self.upstream_latency_seconds
            .with_label_values(&[outcome])
            .observe(elapsed_secs);
    }

    pub fn encode(&self) -> Result<String, String> {
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();

        TextEncoder::new()
            .encode(&metric_families, &mut buffer)
            .map_err(|err| format!("failed to encode metrics: {err}"))?;

        String::from_utf8(buffer).map_err(|err| format!("metrics are not valid utf8: {err}"))
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::Metrics;

    #[test]
    fn encodes_recorded_outcomes() {
        let metrics = Metrics::new();
        metrics.record_lookup("success");
        metrics.record_lookup("validation_error");
        metrics.observe_upstream("success", 0.12);

        let body = metrics.encode().unwrap();
        assert!(body.contains("directions_lookups_total{outcome=\"success\"} 1"));
        assert!(body.contains("directions_lookups_total{outcome=\"validation_error\"} 1"));
        assert!(body.contains("directions_upstream_latency_seconds_count{outcome=\"success\"} 1"));
    }
}
