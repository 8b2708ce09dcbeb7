//! Web adapter state and request bodies.

use std::sync::Arc;

use serde::{Deserialize, Deserializer};

use crate::fetch::CourtScraper;

/// Shared state: one scraper, and through it one connection pool, for all requests.
#[derive(Clone)]
pub struct AppState {
    pub scraper: Arc<CourtScraper>,
}

/// Body of `POST /api/search/cnr`.
#[derive(Debug, Default, Deserialize)]
pub struct CnrSearchRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub cnr: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date_type: Option<String>,
}

/// Body of `POST /api/search/case`.
#[derive(Debug, Default, Deserialize)]
pub struct CaseSearchRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub case_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub case_number: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub year: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub date_type: Option<String>,
}

/// Body of `POST /api/download/pdf`.
#[derive(Debug, Default, Deserialize)]
pub struct DownloadRequest {
    #[serde(default, deserialize_with = "lenient_string")]
    pub pdf_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub filename: Option<String>,
}

/// Accepts strings and numbers (`"year": 2023`); empty strings, `null` and
/// other JSON types read as absent.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) if !s.is_empty() => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}
