//! Test server harness for E2E testing
//!
//! Provides `TestPredictServer` for spawning real Predict Service instances in tests.

use crate::scrape::MetricsScrape;
use metrics_exporter_prometheus::PrometheusHandle;
use predict_service::observability::init_metrics_recorder;
use predict_service::routes;
use std::net::SocketAddr;
use tokio::task::JoinHandle;

/// Test harness for spawning Predict Service in E2E tests.
///
/// All servers spawned in one test binary share the process-wide metrics
/// recorder, exactly like a single production process.
///
/// # Example
/// ```rust,ignore
/// #[tokio::test]
/// async fn test_predict_e2e() -> Result<(), anyhow::Error> {
///     let server = TestPredictServer::spawn().await?;
///
///     let response = reqwest::get(format!("{}/predict", server.url())).await?;
///
///     assert_eq!(response.status(), 200);
///     Ok(())
/// }
/// ```
pub struct TestPredictServer {
    addr: SocketAddr,
    metrics_handle: PrometheusHandle,
    _handle: JoinHandle<()>,
}

impl TestPredictServer {
    /// Spawn a new test server instance.
    ///
    /// The server will:
    /// - Install (or reuse) the global Prometheus recorder
    /// - Bind to a random available port (127.0.0.1:0)
    /// - Start the HTTP server in the background
    pub async fn spawn() -> Result<Self, anyhow::Error> {
        let metrics_handle = init_metrics_recorder()
            .map_err(|e| anyhow::anyhow!("Failed to initialize metrics: {}", e))?;

        // Build routes using predict-service's real route builder
        let app = routes::build_routes(metrics_handle.clone());

        // Bind to random port
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .map_err(|e| anyhow::anyhow!("Failed to bind test server: {}", e))?;

        let addr = listener
            .local_addr()
            .map_err(|e| anyhow::anyhow!("Failed to get local address: {}", e))?;

        // Spawn server in background
        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                eprintln!("Test server error: {}", e);
            }
        });

        Ok(Self {
            addr,
            metrics_handle,
            _handle: handle,
        })
    }

    /// Get the base URL of the test server.
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Get the socket address.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Render the recorder directly, without going through `/metrics`.
    ///
    /// Use this when a scrape request must not itself be counted.
    pub fn render_metrics(&self) -> MetricsScrape {
        MetricsScrape::parse(&self.metrics_handle.render())
    }

    /// Scrape `/metrics` over HTTP and parse the body.
    pub async fn scrape(&self) -> Result<MetricsScrape, anyhow::Error> {
        let body = reqwest::get(format!("{}/metrics", self.url()))
            .await?
            .error_for_status()?
            .text()
            .await?;

        Ok(MetricsScrape::parse(&body))
    }
}

impl Drop for TestPredictServer {
    fn drop(&mut self) {
        // Abort the HTTP server task so each test cleans up its listener.
        self._handle.abort();
    }
}
