//! POST /recommend: skill-based job recommendations.
//!
//! Always answers HTTP 200. Success and failure are carried in the `status`
//! field of the body.

use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, warn};

use crate::errors::RecommendError;
use crate::matching::recommend;
use crate::models::job::JobSummary;
use crate::state::AppState;

#[derive(Debug, Default)]
pub struct RecommendRequest {
    pub skills: String,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RecommendResponse {
    Success { jobs: Vec<JobSummary> },
    Error { message: String },
}

impl From<Result<Vec<JobSummary>, RecommendError>> for RecommendResponse {
    fn from(result: Result<Vec<JobSummary>, RecommendError>) -> Self {
        match result {
            Ok(jobs) => RecommendResponse::Success { jobs },
            Err(e) => RecommendResponse::Error {
                message: e.to_string(),
            },
        }
    }
}

/// POST /recommend
///
/// A body that is not valid JSON, or lacks a string `skills` field, is
/// treated as an empty query.
pub async fn handle_recommend(
    State(state): State<AppState>,
    body: Bytes,
) -> Json<RecommendResponse> {
    let request = parse_request(&body);
    Json(recommend_jobs(&state, request.skills).await.into())
}

/// Only a JSON object with a string `skills` field yields a query.
fn parse_request(body: &[u8]) -> RecommendRequest {
    let value: Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(e) => {
            warn!("Unreadable recommend request, treating as empty: {e}");
            return RecommendRequest::default();
        }
    };

    match value.get("skills").and_then(Value::as_str) {
        Some(skills) => RecommendRequest {
            skills: skills.to_string(),
        },
        None => {
            warn!("Recommend request has no string 'skills' field, treating as empty");
            RecommendRequest::default()
        }
    }
}

async fn recommend_jobs(
    state: &AppState,
    skills: String,
) -> Result<Vec<JobSummary>, RecommendError> {
    let catalog = Arc::clone(&state.catalog);
    let matcher = Arc::clone(&state.matcher);

    // CPU-bound pass over the whole catalog; keep it off the async executor.
    let jobs = tokio::task::spawn_blocking(move || recommend(matcher.as_ref(), &catalog, &skills))
        .await
        .map_err(|e| {
            error!("Recommendation task failed: {e}");
            RecommendError::Internal(format!("Recommendation failed: {e}"))
        })?;

    if jobs.is_empty() {
        return Err(RecommendError::NoMatches);
    }
    Ok(jobs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_request_reads_skills() {
        let req = parse_request(br#"{"skills": "Python, SQL"}"#);
        assert_eq!(req.skills, "Python, SQL");
    }

    #[test]
    fn test_parse_request_missing_field_is_empty() {
        assert_eq!(parse_request(br#"{}"#).skills, "");
    }

    #[test]
    fn test_parse_request_garbage_is_empty() {
        assert_eq!(parse_request(b"not json").skills, "");
        assert_eq!(parse_request(b"").skills, "");
        assert_eq!(parse_request(br#"{"skills": 42}"#).skills, "");
        assert_eq!(parse_request(br#"["python"]"#).skills, "");
        assert_eq!(parse_request(br#""python""#).skills, "");
        assert_eq!(parse_request(br#"{"skills": null}"#).skills, "");
    }

    #[test]
    fn test_parse_request_ignores_extra_fields() {
        let req = parse_request(br#"{"skills": "rust", "limit": 3}"#);
        assert_eq!(req.skills, "rust");
    }

    #[test]
    fn test_success_response_shape() {
        let result: Result<Vec<JobSummary>, RecommendError> = Ok(vec![JobSummary {
            job_title: "Dev".to_string(),
            location: "Remote".to_string(),
            job_type: "Hourly".to_string(),
            min_budget: Some(10.0),
            max_budget: Some(20.0),
        }]);
        let response = RecommendResponse::from(result);

        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({
                "status": "success",
                "jobs": [{
                    "jobTitle": "Dev",
                    "location": "Remote",
                    "jobType": "Hourly",
                    "minBudget": 10.0,
                    "maxBudget": 20.0
                }]
            })
        );
    }

    #[test]
    fn test_no_matches_response_shape() {
        let result: Result<Vec<JobSummary>, RecommendError> = Err(RecommendError::NoMatches);
        let response = RecommendResponse::from(result);
        assert_eq!(
            serde_json::to_value(response).unwrap(),
            json!({"status": "error", "message": "No matching jobs found."})
        );
    }
}
