use crate::domain::model::EntityId;
use crate::transport::http::error::ApiError;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::Path;
use axum::Json;

/// Ids that are not integers match no resource, so they answer 404 like any unknown path.
pub fn path_id(path: Result<Path<EntityId>, PathRejection>) -> Result<EntityId, ApiError> {
    path.map(|Path(id)| id).map_err(|_| ApiError::NotFound)
}

/// Unwraps a JSON body, turning extractor rejections into a 400 with the reason.
pub fn json_body<T>(body: Result<Json<T>, JsonRejection>, expected: &str) -> Result<T, ApiError> {
    body.map(|Json(v)| v).map_err(|e| {
        ApiError::BadRequest(format!(
            "Invalid JSON body: {} (expected: {})",
            e.body_text(),
            expected
        ))
    })
}
