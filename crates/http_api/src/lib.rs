mod errors;
mod handlers;
mod middleware;
mod state;

use axum::{Router, middleware as axum_middleware, routing::post};

pub use errors::HttpError;
pub use state::HttpState;

pub fn router(state: HttpState) -> Router<()> {
    let api = Router::new()
        .route("/add_cost", post(handlers::add_cost))
        .route("/report", post(handlers::report))
        .route("/category_report", post(handlers::category_report))
        .route("/yearly_report", post(handlers::yearly_report))
        .route("/rates", post(handlers::rates))
        .route("/settings_get", post(handlers::settings_get))
        .route("/settings_put", post(handlers::settings_put))
        .route_layer(axum_middleware::from_fn(middleware::require_loopback_origin));

    Router::new()
        .nest("/api", api)
        .fallback(handlers::not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests;
