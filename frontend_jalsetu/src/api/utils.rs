// frontend_jalsetu/src/api/utils.rs
use gloo::console::error;
use gloo::net::http::Response;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ReportError;

const FALLBACK_DETAIL: &str = "Failed to generate report";

/// Pull a human readable message out of an error body.
/// The service answers `{"detail": "..."}`; validation failures carry a list instead.
pub fn error_detail(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| match v.get("detail") {
            Some(Value::String(detail)) if !detail.trim().is_empty() => Some(detail.clone()),
            Some(Value::Array(items)) => {
                let messages: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect();
                (!messages.is_empty()).then(|| messages.join("; "))
            }
            _ => None,
        })
        .unwrap_or_else(|| FALLBACK_DETAIL.to_owned())
}

/// Generic API response handler: maps non-2xx to the backend detail and parses JSON
pub async fn handle_api_response<T>(
    response_result: Result<Response, gloo::net::Error>,
    operation_name: &str,
) -> Result<T, ReportError>
where
    T: DeserializeOwned,
{
    let response = response_result.map_err(|e| {
        error!(format!("{} request failed: {:?}", operation_name, e));
        ReportError::from(e)
    })?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let detail = error_detail(&body);
        error!(format!("{} failed with status {}: {}", operation_name, status, detail));
        return Err(ReportError::backend(status, detail));
    }

    response.json::<T>().await.map_err(|e| {
        error!(format!("Failed to parse {} response: {:?}", operation_name, e));
        ReportError::Parse(e.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_detail_is_used_verbatim() {
        assert_eq!(
            error_detail(r#"{"detail":"Could not find coordinates for location: Atlantis"}"#),
            "Could not find coordinates for location: Atlantis"
        );
    }

    #[test]
    fn validation_list_is_joined() {
        let body = r#"{"detail":[
            {"loc":["query","roof_area"],"msg":"value is not a valid float","type":"type_error.float"},
            {"loc":["query","household_size"],"msg":"field required","type":"value_error.missing"}
        ]}"#;
        assert_eq!(error_detail(body), "value is not a valid float; field required");
    }

    #[test]
    fn missing_detail_falls_back() {
        assert_eq!(error_detail(""), FALLBACK_DETAIL);
        assert_eq!(error_detail("<html>502 Bad Gateway</html>"), FALLBACK_DETAIL);
        assert_eq!(error_detail(r#"{"message":"boom"}"#), FALLBACK_DETAIL);
        assert_eq!(error_detail(r#"{"detail":""}"#), FALLBACK_DETAIL);
        assert_eq!(error_detail(r#"{"detail":[]}"#), FALLBACK_DETAIL);
    }
}
