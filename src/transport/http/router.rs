use crate::domain::model::Product;
use crate::transport::http::handlers::{products, root};
use crate::transport::http::types::{AppState, ErrorBody, ProductPayload};
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        root::root_handler,
        products::list_products_handler,
        products::get_product_handler,
        products::create_product_handler,
        products::update_product_handler,
        products::delete_product_handler
    ),
    components(schemas(Product, ProductPayload, ErrorBody))
)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/", get(root::root_handler))
        .route(
            "/products",
            get(products::list_products_handler).post(products::create_product_handler),
        )
        .route(
            "/products/:id",
            get(products::get_product_handler)
                .put(products::update_product_handler)
                .delete(products::delete_product_handler),
        )
        .with_state(app_state)
}
