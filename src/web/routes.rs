//! REST API routes for the web server.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::Json,
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};

use crate::cross::Targets;
use crate::error::CrossError;
use crate::pairing::{cross_all, PairResult};
use crate::Genotype;

/// Create the API router
pub fn router() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/generate_children", post(generate_children))
        .layer(cors)
}

/// Parents and targets arrive as raw string lists so that shape errors
/// can be reported with the offending field.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub parents: Vec<Vec<String>>,
    /// `null` and a missing key both mean no filtering.
    #[serde(default)]
    pub targets: Option<Vec<Vec<String>>>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub results: Vec<PairResult>,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn bad_request(message: String) -> ApiError {
    log::warn!("rejected request: {}", message);
    (StatusCode::BAD_REQUEST, Json(ErrorResponse { error: message }))
}

impl GenerateRequest {
    /// Validates the request and crosses every pair of parents.
    pub fn evaluate(&self) -> Result<GenerateResponse, CrossError> {
        if self.parents.len() < 2 {
            return Err(CrossError::InsufficientParents(self.parents.len()));
        }
        let parents = self
            .parents
            .iter()
            .map(|fields| Genotype::from_fields(fields.as_slice()))
            .collect::<Result<Vec<Genotype>, CrossError>>()?;
        let targets = self
            .targets
            .iter()
            .flatten()
            .map(|fields| Genotype::from_fields(fields.as_slice()))
            .collect::<Result<Targets, CrossError>>()?;

        Ok(GenerateResponse {
            results: cross_all(&parents, &targets)?,
        })
    }
}

async fn generate_children(
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<GenerateResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| bad_request(e.body_text()))?;
    request
        .evaluate()
        .map(Json)
        .map_err(|e| bad_request(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(parents: &[&[&str]], targets: &[&[&str]]) -> GenerateRequest {
        let owned = |rows: &[&[&str]]| -> Vec<Vec<String>> {
            rows.iter()
                .map(|row| row.iter().map(|s| s.to_string()).collect())
                .collect()
        };
        GenerateRequest {
            parents: owned(parents),
            targets: Some(owned(targets)),
        }
    }

    #[test]
    fn test_single_parent_is_rejected() {
        let err = request(&[&["m", "Aa", "Bb", "Cc"]], &[]).evaluate().unwrap_err();
        assert_eq!(err.to_string(), "At least two parents' genes must be provided");
    }

    #[test]
    fn test_malformed_target_is_rejected() {
        let err = request(
            &[&["m", "Aa", "Bb", "Cc"], &["f", "Aa", "Bb", "Cc"]],
            &[&["m", "Aa", "Bb"]],
        )
        .evaluate()
        .unwrap_err();
        match err {
            CrossError::MalformedGenotype { .. } => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_pairs_are_evaluated() {
        let response = request(
            &[&["m", "Aa", "Bb", "Cc"], &["m", "Aa", "Bb", "Cc"], &["f", "aa", "bb", "cc"]],
            &[],
        )
        .evaluate()
        .unwrap();
        assert_eq!(response.results.len(), 3);
        assert!(response.results[0].is_empty());
        assert!(!response.results[1].is_empty());
        assert!(!response.results[2].is_empty());
    }

    #[test]
    fn test_null_targets_do_not_filter() -> Result<(), Box<dyn std::error::Error>> {
        let request: GenerateRequest = serde_json::from_str(
            r#"{"parents": [["m","AA","BB","CC"], ["f","aa","bb","cc"]], "targets": null}"#,
        )?;
        assert!(request.targets.is_none());
        let response = request.evaluate()?;
        let result = response.results[0].result().unwrap();
        assert_eq!(result.childs.len(), 2);
        assert_eq!(result.sum.to_string(), "1/1");
        Ok(())
    }
}
