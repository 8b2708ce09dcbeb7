//! HTTP adapter.
//!
//! Exposes the four portal operations as JSON endpoints plus a bundled form:
//! - `GET /` - HTML form calling the endpoints below
//! - `GET /health` - liveness check
//! - `POST /api/search/cnr` - `{cnr, date_type?}`
//! - `POST /api/search/case` - `{case_type, case_number, year, date_type?}`
//! - `GET /api/causelist`
//! - `POST /api/download/pdf` - `{pdf_url, filename?}`
//!
//! Missing required fields give 400 with `{error}` before any outbound call.
//! Otherwise the operation's outcome is returned with 200, including
//! outcomes that carry an `error` field.

mod handlers;
mod types;

use std::future::Future;
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;

use crate::fetch::CourtScraper;
use handlers::{
    cause_list_handler, download_pdf_handler, health_handler, index_handler, search_case_handler,
    search_cnr_handler,
};
pub use types::{AppState, CaseSearchRequest, CnrSearchRequest, DownloadRequest};

/// Builds the router around a shared scraper.
pub fn router(scraper: Arc<CourtScraper>) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .route("/api/search/cnr", post(search_cnr_handler))
        .route("/api/search/case", post(search_case_handler))
        .route("/api/causelist", get(cause_list_handler))
        .route("/api/download/pdf", post(download_pdf_handler))
        .with_state(AppState { scraper })
}

/// Serves the router on an already bound listener until `shutdown` resolves.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    scraper: Arc<CourtScraper>,
    shutdown: F,
) -> Result<(), anyhow::Error>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router(scraper))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| anyhow::anyhow!("Web server error: {}", e))
}

/// Binds `host:port` and serves until Ctrl-C.
pub async fn start_web_server(
    host: &str,
    port: u16,
    scraper: Arc<CourtScraper>,
) -> Result<(), anyhow::Error> {
    let listener = TcpListener::bind((host, port))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind web server to {}:{}: {}", host, port, e))?;

    let local = listener.local_addr()?;
    log::info!("Web server listening on http://{}/", local);
    log::info!("  - Form: http://{}/", local);
    log::info!("  - API:  http://{}/api/...", local);

    serve_with_shutdown(listener, scraper, async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
        log::info!("Shutting down web server");
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScraperConfig;

    #[tokio::test]
    async fn test_bind_failure_is_an_error() {
        let taken = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = taken.local_addr().unwrap().port();
        let scraper = Arc::new(CourtScraper::new(&ScraperConfig::default()).unwrap());

        let err = start_web_server("127.0.0.1", port, scraper)
            .await
            .expect_err("port is already bound");
        assert!(err.to_string().contains("Failed to bind web server"));
        assert!(err.to_string().contains(&port.to_string()));
    }
}
