// src/fetch.rs
use crate::utils::resource_url;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request for {path} failed: {message}")]
    Network {
        path: String,
        message: String,
    },
    #[error("{path} answered with HTTP {status}")]
    Status {
        path: String,
        status: u16,
    },
    #[error("{path} is not valid JSON for this section: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Fetch one of the page's JSON documents.
///
/// Every section calls this on its own, so a missing or broken document only
/// leaves that section on its placeholder content.
pub async fn fetch_json<T: DeserializeOwned>(path: &str) -> Result<T, FetchError> {
    let url = resource_url(path);
    let resp = Request::get(&url)
        .send()
        .await
        .map_err(|e| FetchError::Network {
            path: path.to_string(),
            message: e.to_string(),
        })?;

    if !resp.ok() {
        return Err(FetchError::Status {
            path: path.to_string(),
            status: resp.status(),
        });
    }

    let body = resp.text().await.map_err(|e| FetchError::Network {
        path: path.to_string(),
        message: e.to_string(),
    })?;

    parse_document(path, &body)
}

pub fn parse_document<T: DeserializeOwned>(path: &str, body: &str) -> Result<T, FetchError> {
    serde_json::from_str(body).map_err(|source| FetchError::Parse {
        path: path.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paper_data::{MethodologyDocument, ResultsGallery};

    #[test]
    fn test_parse_document_ok() {
        let gallery: ResultsGallery = parse_document(
            "data/results-gallery.json",
            r#"{"results": [{"title": "A", "src": "a.jpg", "description": "d1"}]}"#,
        )
        .unwrap();
        assert_eq!(gallery.results.len(), 1);
    }

    #[test]
    fn test_parse_document_reports_path() {
        let result = parse_document::<MethodologyDocument>("data/methodology.json", "<html>");
        let err = result.unwrap_err();
        assert!(matches!(err, FetchError::Parse { .. }));
        assert!(err.to_string().starts_with("data/methodology.json"));
    }

    #[test]
    fn test_status_error_message() {
        let err = FetchError::Status {
            path: "data/methodology.json".to_string(),
            status: 404,
        };
        assert_eq!(
            err.to_string(),
            "data/methodology.json answered with HTTP 404"
        );
    }
}
