//! Exact request counting for /predict.
//!
//! Kept as the only test in this binary so no other request touches the
//! `/predict` series while it runs.

use predict_test_utils::TestPredictServer;

const REQUESTS: u64 = 25;

#[tokio::test]
async fn test_counter_increases_by_exactly_n() -> Result<(), anyhow::Error> {
    let server = TestPredictServer::spawn().await?;
    let client = reqwest::Client::new();
    let labels = [("path", "/predict"), ("method", "GET"), ("status", "200")];

    let before = server.render_metrics();
    let counter_before = before.counter("http_requests_total", &labels).unwrap_or(0);
    let observations_before = before
        .histogram_count("http_request_duration_seconds", &[("path", "/predict")])
        .unwrap_or(0);

    for _ in 0..REQUESTS {
        let response = client
            .get(format!("{}/predict", server.url()))
            .send()
            .await?;
        assert_eq!(response.status(), 200);
    }

    // Scrape over HTTP so the exposition text itself is checked.
    let after = server.scrape().await?;

    assert_eq!(
        after.counter("http_requests_total", &labels),
        Some(counter_before + REQUESTS)
    );
    assert_eq!(
        after.histogram_count("http_request_duration_seconds", &[("path", "/predict")]),
        Some(observations_before + REQUESTS)
    );
    assert!(after
        .histogram_sum("http_request_duration_seconds", &[("path", "/predict")])
        .is_some_and(|s| s >= 0.0));

    Ok(())
}
