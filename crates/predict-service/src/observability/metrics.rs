//! Metrics definitions for Predict Service.
//!
//! Two process-wide aggregates, both append-only for the life of the process:
//!
//! - `http_requests_total` (counter), labels `path`, `method`, `status`
//! - `http_request_duration_seconds` (histogram), label `path`
//!
//! # Cardinality
//!
//! - `path`: the matched route template; unmatched requests are folded into
//!   [`UNMATCHED_PATH`] by the middleware
//! - `method`: bounded by the HTTP methods clients send
//! - `status`: numeric status code as a string
//!
//! Counter and histogram updates go through the global `metrics` recorder,
//! which is internally atomic, so concurrent requests never lose increments.

use crate::errors::MetricsError;
use metrics::{counter, describe_counter, describe_histogram, histogram, Unit};
use metrics_exporter_prometheus::{Matcher, PrometheusBuilder, PrometheusHandle};
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

/// Request counter metric name.
pub const HTTP_REQUESTS_TOTAL: &str = "http_requests_total";

/// Latency histogram metric name.
pub const HTTP_REQUEST_DURATION_SECONDS: &str = "http_request_duration_seconds";

/// Path label recorded for requests that matched no route.
pub const UNMATCHED_PATH: &str = "/other";

/// Latency buckets in seconds (the standard Prometheus client defaults).
pub const HTTP_REQUEST_DURATION_BUCKETS: &[f64] = &[
    0.005, 0.010, 0.025, 0.050, 0.075, 0.100, 0.250, 0.500, 0.750, 1.000, 2.500, 5.000, 7.500,
    10.000,
];

static RECORDER_HANDLE: Mutex<Option<PrometheusHandle>> = Mutex::new(None);

/// Initialize the global Prometheus recorder and return the handle used to
/// render the exposition text.
///
/// The first call installs the recorder; later calls in the same process
/// return a clone of the same handle, so every router built in the process
/// renders the same registry.
///
/// # Errors
///
/// Returns error if the bucket layout is rejected or the global recorder
/// cannot be installed (e.g., another recorder was installed elsewhere).
pub fn init_metrics_recorder() -> Result<PrometheusHandle, MetricsError> {
    let mut slot = RECORDER_HANDLE
        .lock()
        .unwrap_or_else(PoisonError::into_inner);

    if let Some(handle) = slot.as_ref() {
        return Ok(handle.clone());
    }

    let handle = PrometheusBuilder::new()
        .set_buckets_for_metric(
            Matcher::Full(HTTP_REQUEST_DURATION_SECONDS.to_string()),
            HTTP_REQUEST_DURATION_BUCKETS,
        )
        .map_err(|e| MetricsError::Buckets {
            metric: HTTP_REQUEST_DURATION_SECONDS,
            reason: e.to_string(),
        })?
        .install_recorder()
        .map_err(|e| MetricsError::Install(e.to_string()))?;

    describe_http_metrics();

    tracing::debug!(
        target: "predict.metrics",
        buckets = HTTP_REQUEST_DURATION_BUCKETS.len(),
        "Prometheus recorder installed"
    );

    *slot = Some(handle.clone());
    Ok(handle)
}

/// Register HELP text for the HTTP metrics with the current recorder.
pub fn describe_http_metrics() {
    describe_counter!(HTTP_REQUESTS_TOTAL, "Total HTTP requests");
    describe_histogram!(
        HTTP_REQUEST_DURATION_SECONDS,
        Unit::Seconds,
        "Request latency by path in seconds"
    );
}

// ============================================================================
// HTTP Request Metrics
// ============================================================================

/// Record HTTP request completion
///
/// Metric: `http_request_duration_seconds`, labels `path`
/// Metric: `http_requests_total`, labels `path`, `method`, `status`
pub fn record_http_request(method: &str, path: &str, status_code: u16, duration: Duration) {
    histogram!(HTTP_REQUEST_DURATION_SECONDS, "path" => path.to_string())
        .record(duration.as_secs_f64());

    counter!(HTTP_REQUESTS_TOTAL,
        "path" => path.to_string(),
        "method" => method.to_string(),
        "status" => status_code.to_string()
    )
    .increment(1);
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::indexing_slicing
)]
mod tests {
    use super::*;
    use metrics_util::debugging::{DebugValue, DebuggingRecorder};
    use metrics_util::MetricKind;

    /// Find the value of a metric by name, kind and exact label set.
    fn find<'a>(
        entries: &'a [(
            metrics_util::CompositeKey,
            Option<Unit>,
            Option<metrics::SharedString>,
            DebugValue,
        )],
        kind: MetricKind,
        name: &str,
        labels: &[(&str, &str)],
    ) -> Option<&'a DebugValue> {
        entries.iter().find_map(|(key, _, _, value)| {
            if key.kind() != kind || key.key().name() != name {
                return None;
            }
            let actual: Vec<(&str, &str)> = key
                .key()
                .labels()
                .map(|l| (l.key(), l.value()))
                .collect();
            if actual.len() == labels.len() && labels.iter().all(|l| actual.contains(l)) {
                Some(value)
            } else {
                None
            }
        })
    }

    #[test]
    fn test_record_http_request_increments_counter() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        metrics::with_local_recorder(&recorder, || {
            for _ in 0..3 {
                record_http_request("GET", "/predict", 200, Duration::from_millis(2));
            }
        });

        let entries = snapshotter.snapshot().into_vec();
        let value = find(
            &entries,
            MetricKind::Counter,
            HTTP_REQUESTS_TOTAL,
            &[("path", "/predict"), ("method", "GET"), ("status", "200")],
        );

        assert_eq!(value, Some(&DebugValue::Counter(3)));
    }

    #[test]
    fn test_record_http_request_keys_counter_by_status_and_method() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        metrics::with_local_recorder(&recorder, || {
            record_http_request("GET", "/predict", 200, Duration::from_millis(1));
            record_http_request("POST", "/predict", 405, Duration::from_millis(1));
            record_http_request("GET", UNMATCHED_PATH, 404, Duration::from_millis(1));
        });

        let entries = snapshotter.snapshot().into_vec();

        assert_eq!(
            find(
                &entries,
                MetricKind::Counter,
                HTTP_REQUESTS_TOTAL,
                &[("path", "/predict"), ("method", "POST"), ("status", "405")],
            ),
            Some(&DebugValue::Counter(1))
        );
        assert_eq!(
            find(
                &entries,
                MetricKind::Counter,
                HTTP_REQUESTS_TOTAL,
                &[("path", "/other"), ("method", "GET"), ("status", "404")],
            ),
            Some(&DebugValue::Counter(1))
        );
    }

    #[test]
    fn test_record_http_request_observes_latency_by_path_only() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        metrics::with_local_recorder(&recorder, || {
            record_http_request("GET", "/healthz", 200, Duration::from_millis(250));
            record_http_request("HEAD", "/healthz", 200, Duration::ZERO);
        });

        let entries = snapshotter.snapshot().into_vec();
        let value = find(
            &entries,
            MetricKind::Histogram,
            HTTP_REQUEST_DURATION_SECONDS,
            &[("path", "/healthz")],
        );

        let Some(DebugValue::Histogram(samples)) = value else {
            panic!("expected histogram for /healthz, got {:?}", value);
        };
        assert_eq!(samples.len(), 2);
        assert!(samples.iter().all(|s| s.0 >= 0.0));
        assert!(samples.iter().any(|s| (s.0 - 0.25).abs() < 1e-9));
    }

    #[test]
    fn test_buckets_are_sorted_and_positive() {
        assert!(HTTP_REQUEST_DURATION_BUCKETS.windows(2).all(|w| w[0] < w[1]));
        assert!(HTTP_REQUEST_DURATION_BUCKETS.iter().all(|b| *b > 0.0));
    }

    #[test]
    fn test_init_metrics_recorder_is_idempotent() {
        let first = init_metrics_recorder().expect("first install should succeed");
        let second = init_metrics_recorder().expect("second call should reuse the handle");

        record_http_request("GET", "/idempotency-probe", 200, Duration::from_millis(1));

        assert!(first.render().contains("/idempotency-probe"));
        assert!(second.render().contains("/idempotency-probe"));
    }
}
