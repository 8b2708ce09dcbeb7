//! Web adapter handlers.

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;
use serde_json::json;

use super::types::{AppState, CaseSearchRequest, CnrSearchRequest, DownloadRequest};
use crate::dates::DateSelector;

const INDEX_HTML: &str = include_str!("index.html");

/// Bundled form page.
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Liveness check.
pub async fn health_handler() -> Response {
    Json(json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") })).into_response()
}

pub async fn search_cnr_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let req: CnrSearchRequest = parse_body(&body);
    let Some(cnr) = req.cnr else {
        return bad_request("CNR number is required");
    };
    let date = date_selector(req.date_type.as_deref());

    log::info!("POST /api/search/cnr cnr={} date={}", cnr, date.as_str());
    let outcome = state.scraper.search_by_cnr(&cnr, date).await;
    (StatusCode::OK, Json(outcome)).into_response()
}

pub async fn search_case_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let req: CaseSearchRequest = parse_body(&body);
    let (Some(case_type), Some(case_number), Some(year)) = (req.case_type, req.case_number, req.year)
    else {
        return bad_request("Case type, number, and year are required");
    };
    let date = date_selector(req.date_type.as_deref());

    log::info!(
        "POST /api/search/case case={}/{}/{} date={}",
        case_type,
        case_number,
        year,
        date.as_str()
    );
    let outcome = state
        .scraper
        .search_by_case_details(&case_type, &case_number, &year, date)
        .await;
    (StatusCode::OK, Json(outcome)).into_response()
}

pub async fn cause_list_handler(State(state): State<AppState>) -> Response {
    log::info!("GET /api/causelist");
    let outcome = state.scraper.get_cause_list().await;
    (StatusCode::OK, Json(outcome)).into_response()
}

pub async fn download_pdf_handler(State(state): State<AppState>, body: Bytes) -> Response {
    let req: DownloadRequest = parse_body(&body);
    let Some(pdf_url) = req.pdf_url else {
        return bad_request("PDF URL is required");
    };

    log::info!("POST /api/download/pdf url={}", pdf_url);
    let outcome = state
        .scraper
        .download_pdf(&pdf_url, req.filename.as_deref())
        .await;
    (StatusCode::OK, Json(outcome)).into_response()
}

/// Reads a JSON body leniently: empty or malformed input becomes the
/// all-absent default so validation reports the missing field.
fn parse_body<T: DeserializeOwned + Default>(body: &[u8]) -> T {
    if body.iter().all(u8::is_ascii_whitespace) {
        return T::default();
    }
    serde_json::from_slice(body).unwrap_or_else(|e| {
        log::warn!("Ignoring unparsable request body: {}", e);
        T::default()
    })
}

fn date_selector(label: Option<&str>) -> DateSelector {
    label.map(DateSelector::from_label).unwrap_or_default()
}

fn bad_request(message: &str) -> Response {
    log::warn!("Rejected request: {}", message);
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_body_empty_is_default() {
        let req: CnrSearchRequest = parse_body(b"");
        assert!(req.cnr.is_none());
        let req: CnrSearchRequest = parse_body(b"  \n");
        assert!(req.cnr.is_none());
    }

    #[test]
    fn test_parse_body_malformed_is_default() {
        let req: CnrSearchRequest = parse_body(b"{not json");
        assert!(req.cnr.is_none());
        let req: CnrSearchRequest = parse_body(br#""just a string""#);
        assert!(req.cnr.is_none());
    }

    #[test]
    fn test_parse_body_reads_fields() {
        let req: CnrSearchRequest = parse_body(br#"{"cnr":"DLHC010001232023"}"#);
        assert_eq!(req.cnr.as_deref(), Some("DLHC010001232023"));
    }

    #[test]
    fn test_date_selector_default() {
        assert_eq!(date_selector(None), DateSelector::Today);
        assert_eq!(date_selector(Some("tomorrow")), DateSelector::Tomorrow);
    }

    #[tokio::test]
    async fn test_index_page_has_forms() {
        let Html(page) = index_handler().await;
        assert!(page.contains("/api/search/cnr"));
        assert!(page.contains("/api/search/case"));
        assert!(page.contains("/api/causelist"));
    }
}
