use axum::{
    http::{header, Method, StatusCode},
    middleware,
    routing::get,
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::{
    handlers::{
        fault_barrier,
        health::livez,
        items::{create_item, delete_item, get_item, list_items, update_item},
        panic_to_fault,
        root::hello,
        stores::{create_store, delete_store, get_store, list_stores, update_store},
    },
    state::AppState,
};

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    let timeout = state.request_timeout;

    Router::new()
        .route("/", get(hello))
        .route("/livez", get(livez))
        // Item routes
        .route("/items", get(list_items).post(create_item))
        .route(
            "/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
        // Store routes
        .route("/stores", get(list_stores).post(create_store))
        .route(
            "/stores/{id}",
            get(get_store).put(update_store).delete(delete_store),
        )
        .layer(CatchPanicLayer::custom(panic_to_fault))
        .layer(middleware::from_fn(fault_barrier))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            timeout,
        ))
        .with_state(state)
}
