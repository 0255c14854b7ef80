pub mod health;
pub mod home;
pub mod recommend;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home::home_handler))
        .route("/health", get(health::health_handler))
        .route("/recommend", post(recommend::handle_recommend))
        .with_state(state)
}
