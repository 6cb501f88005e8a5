use crate::domain::model::{EntityId, Product};
use crate::transport::http::error::ApiError;
use crate::transport::http::handlers::common::{json_body, path_id};
use crate::transport::http::types::{AppState, ErrorBody, ProductPayload};
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Json;

const PAYLOAD_SHAPE: &str = r#"{"name": string, "price": number}"#;

#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "All products", body = Vec<Product>),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub async fn list_products_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.products.get_all().await?;
    Ok(Json(products))
}

#[utoipa::path(
    get,
    path = "/products/{id}",
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 404, description = "No product with this id"),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub async fn get_product_handler(
    State(state): State<AppState>,
    id: Result<Path<EntityId>, PathRejection>,
) -> Result<Json<Product>, ApiError> {
    let id = path_id(id)?;
    let product = state
        .products
        .get_by_id(id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(product))
}

#[utoipa::path(
    post,
    path = "/products",
    request_body = ProductPayload,
    responses(
        (status = 201, description = "Product created", body = Product,
            headers(("Location" = String, description = "URL of the new product"))),
        (status = 400, description = "Validation failed", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub async fn create_product_handler(
    State(state): State<AppState>,
    body: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let draft = json_body(body, PAYLOAD_SHAPE)?.into_draft();
    draft.validate().map_err(ApiError::BadRequest)?;

    let created = state.products.add(draft.into_product()).await?;
    tracing::info!(id = created.id, "product created");

    let location = format!("/products/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

#[utoipa::path(
    put,
    path = "/products/{id}",
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    request_body = ProductPayload,
    responses(
        (status = 204, description = "Product updated"),
        (status = 400, description = "Invalid JSON or validation failed", body = ErrorBody),
        (status = 404, description = "No product with this id"),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub async fn update_product_handler(
    State(state): State<AppState>,
    id: Result<Path<EntityId>, PathRejection>,
    body: Result<Json<ProductPayload>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let id = path_id(id)?;
    let draft = json_body(body, PAYLOAD_SHAPE)?.into_draft();
    let mut product = state
        .products
        .get_by_id(id)
        .await?
        .ok_or(ApiError::NotFound)?;

    draft.validate().map_err(ApiError::BadRequest)?;
    draft.apply_to(&mut product);
    state.products.update(&product).await?;
    tracing::info!(id, "product updated");

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(
        ("id" = i32, Path, description = "Product id")
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 404, description = "No product with this id"),
        (status = 500, description = "Internal server error", body = ErrorBody)
    )
)]
pub async fn delete_product_handler(
    State(state): State<AppState>,
    id: Result<Path<EntityId>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = path_id(id)?;
    if state.products.get_by_id(id).await?.is_none() {
        return Err(ApiError::NotFound);
    }

    state.products.delete(id).await?;
    tracing::info!(id, "product deleted");

    Ok(StatusCode::NO_CONTENT)
}
