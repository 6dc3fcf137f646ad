pub mod poll_routes;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    poll_routes::poll_routes(state).layer(TraceLayer::new_for_http())
}
