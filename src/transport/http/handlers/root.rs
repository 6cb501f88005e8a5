use axum::Json;

pub const ROOT_MESSAGE: &str = "Product API is running";

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is up", body = String)
    )
)]
pub async fn root_handler() -> Json<&'static str> {
    Json(ROOT_MESSAGE)
}
