/**
 * Problem Report Handlers
 *
 * Handlers for POST /problems and GET /problems.
 *
 * # Validation
 *
 * Creation requires title, description, category and urgency, all
 * non-blank. Urgency is normalized to the canonical {Low, Medium, High}
 * set; values outside it are rejected with 400.
 */

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::error::types::require_field;
use crate::error::ApiError;
use crate::records::handlers::types::CreateProblemRequest;
use crate::records::problems::{NewProblem, ProblemReport, ProblemRepository, Urgency};

/// Create problem report handler
///
/// # Errors
///
/// * `400 Bad Request` - missing/blank fields, malformed body, or an
///   urgency outside the known set
/// * `500 Internal Server Error` - storage failure
pub async fn create_problem(
    State(problems): State<Arc<dyn ProblemRepository>>,
    body: Result<Json<CreateProblemRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ProblemReport>), ApiError> {
    let Json(request) =
        body.map_err(|e| ApiError::validation(format!("invalid request body: {}", e)))?;

    let title = require_field(&request.title, "title")?;
    let description = require_field(&request.description, "description")?;
    let category = require_field(&request.category, "category")?;
    let raw_urgency = require_field(&request.urgency, "urgency")?;

    let urgency = Urgency::from_str(raw_urgency).ok_or_else(|| {
        tracing::warn!("Unknown urgency: {}", raw_urgency);
        ApiError::validation(format!(
            "unknown urgency '{}', expected one of Low, Medium, High",
            raw_urgency
        ))
    })?;

    let problem = problems
        .insert(NewProblem {
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            urgency,
        })
        .await?;

    tracing::info!("Problem report created: {} ({})", problem.id, problem.title);

    Ok((StatusCode::CREATED, Json(problem)))
}

/// List problem reports handler
///
/// Returns all problem reports, newest first.
pub async fn list_problems(
    State(problems): State<Arc<dyn ProblemRepository>>,
) -> Result<Json<Vec<ProblemReport>>, ApiError> {
    let reports = problems.list_sorted().await?;
    Ok(Json(reports))
}
