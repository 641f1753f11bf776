use axum::{body::Bytes, extract::State, Json};
use serde_json::{Map, Value};

use crate::errors::AppError;
use crate::models::Recommendation;
use crate::sample_data;
use crate::state::AppState;

/// Inbound filters go to the backend untouched. An empty body means "no
/// filters" and becomes `{}`; anything else must at least be JSON.
fn parse_body(body: &[u8]) -> Result<Value, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_slice(body)
        .map_err(|e| AppError::Validation(format!("Request body is not valid JSON: {e}")))
}

/// POST /api/diff
pub async fn handle_diff(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    let body = parse_body(&body)?;
    let reply = state.backend.fetch_diffs(&body).await?;
    Ok(Json(reply.raw))
}

/// POST /api/recommendations
pub async fn handle_recommendations(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Value>, AppError> {
    let body = parse_body(&body)?;
    let reply = state.backend.fetch_recommendations(&body).await?;
    Ok(Json(reply.raw))
}

/// GET /api/sample/recommendations
/// Fixture data for working on the UI without a backend.
pub async fn handle_sample_recommendations() -> Json<Vec<Recommendation>> {
    Json(sample_data::recommendations())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_empty_body_is_empty_object() {
        assert_eq!(parse_body(b"").unwrap(), json!({}));
        assert_eq!(parse_body(b"  \n").unwrap(), json!({}));
    }

    #[test]
    fn test_json_body_is_kept_as_sent() {
        assert_eq!(parse_body(b"null").unwrap(), Value::Null);
        assert_eq!(parse_body(b"[1, 2]").unwrap(), json!([1, 2]));
        assert_eq!(
            parse_body(br#"{"add_ma": 4, "unavailable_mas": 7}"#).unwrap(),
            json!({"add_ma": 4, "unavailable_mas": 7})
        );
    }

    #[test]
    fn test_malformed_body_is_validation_error() {
        assert!(matches!(
            parse_body(b"{not json"),
            Err(AppError::Validation(_))
        ));
    }
}
