//! Metrics endpoint integration tests.
//!
//! Tests in this binary share one global recorder and run in parallel, so
//! they assert lower bounds. Exact counts live in `request_counter_tests.rs`
//! and `concurrency_tests.rs`, one test per binary.

use predict_service::handlers::metrics::PROMETHEUS_CONTENT_TYPE;
use predict_test_utils::TestPredictServer;

/// /metrics answers with the exposition media type.
#[tokio::test]
async fn test_metrics_endpoint_content_type() -> Result<(), anyhow::Error> {
    let server = TestPredictServer::spawn().await?;

    let response = reqwest::get(format!("{}/metrics", server.url())).await?;

    assert_eq!(response.status(), 200);
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some(PROMETHEUS_CONTENT_TYPE)
    );

    Ok(())
}

/// After a request, both metric families are described and typed.
#[tokio::test]
async fn test_metrics_endpoint_describes_families() -> Result<(), anyhow::Error> {
    let server = TestPredictServer::spawn().await?;

    reqwest::get(format!("{}/predict", server.url())).await?;
    let body = reqwest::get(format!("{}/metrics", server.url()))
        .await?
        .text()
        .await?;

    assert!(body.contains("# HELP http_requests_total Total HTTP requests"));
    assert!(body.contains("# TYPE http_requests_total counter"));
    assert!(body.contains("# HELP http_request_duration_seconds Request latency by path in seconds"));
    assert!(body.contains("# TYPE http_request_duration_seconds histogram"));

    let scrape = predict_test_utils::MetricsScrape::parse(&body);
    let buckets: Vec<_> = scrape
        .samples()
        .iter()
        .filter(|s| {
            s.name == "http_request_duration_seconds_bucket"
                && s.has_labels(&[("path", "/predict")])
        })
        .collect();
    assert!(buckets.iter().any(|s| s.has_labels(&[("le", "+Inf")])));
    assert!(buckets.len() > 1, "expected bucketed histogram, got {:?}", buckets);

    Ok(())
}

/// The counter line for /predict carries the path, method and status labels.
#[tokio::test]
async fn test_metrics_endpoint_reports_request_counter() -> Result<(), anyhow::Error> {
    let server = TestPredictServer::spawn().await?;

    reqwest::get(format!("{}/predict", server.url())).await?;
    let scrape = server.scrape().await?;

    let count = scrape.counter(
        "http_requests_total",
        &[("path", "/predict"), ("method", "GET"), ("status", "200")],
    );
    assert!(count.is_some_and(|v| v >= 1), "got {:?}", count);

    Ok(())
}

/// Every request leaves a non-negative latency observation for its path.
#[tokio::test]
async fn test_latency_histogram_observes_each_path() -> Result<(), anyhow::Error> {
    let server = TestPredictServer::spawn().await?;

    for path in ["/predict", "/healthz", "/readyz"] {
        reqwest::get(format!("{}{}", server.url(), path)).await?;
    }

    let scrape = server.render_metrics();
    for path in ["/predict", "/healthz", "/readyz"] {
        let count =
            scrape.histogram_count("http_request_duration_seconds", &[("path", path)]);
        let sum = scrape.histogram_sum("http_request_duration_seconds", &[("path", path)]);

        assert!(count.is_some_and(|c| c >= 1), "{}: count {:?}", path, count);
        assert!(sum.is_some_and(|s| s >= 0.0), "{}: sum {:?}", path, sum);
    }

    Ok(())
}

/// Scrapes are themselves recorded by the middleware.
#[tokio::test]
async fn test_metrics_endpoint_records_itself() -> Result<(), anyhow::Error> {
    let server = TestPredictServer::spawn().await?;

    server.scrape().await?;
    let scrape = server.render_metrics();

    let count = scrape.counter(
        "http_requests_total",
        &[("path", "/metrics"), ("method", "GET"), ("status", "200")],
    );
    assert!(count.is_some_and(|v| v >= 1), "got {:?}", count);
    assert!(scrape
        .histogram_count("http_request_duration_seconds", &[("path", "/metrics")])
        .is_some_and(|v| v >= 1));

    Ok(())
}

/// Framework 404/405 responses are recorded too.
#[tokio::test]
async fn test_framework_errors_are_recorded() -> Result<(), anyhow::Error> {
    let server = TestPredictServer::spawn().await?;
    let client = reqwest::Client::new();

    let not_found = client
        .get(format!("{}/does-not-exist?x=1", server.url()))
        .send()
        .await?;
    assert_eq!(not_found.status(), 404);

    let wrong_method = client
        .delete(format!("{}/healthz", server.url()))
        .send()
        .await?;
    assert_eq!(wrong_method.status(), 405);

    let scrape = server.render_metrics();
    assert!(scrape
        .counter(
            "http_requests_total",
            &[("path", "/other"), ("method", "GET"), ("status", "404")]
        )
        .is_some_and(|v| v >= 1));
    assert!(scrape
        .counter(
            "http_requests_total",
            &[("path", "/healthz"), ("method", "DELETE"), ("status", "405")]
        )
        .is_some_and(|v| v >= 1));
    assert!(scrape
        .samples()
        .iter()
        .all(|s| s.labels.get("path").map(String::as_str) != Some("/does-not-exist")));

    Ok(())
}
