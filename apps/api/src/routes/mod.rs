pub mod facts;
pub mod transcript;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/transcript/{id}", get(transcript::load))
        .route("/facts/generate", post(facts::generate))
        .route("/facts/{id}", get(facts::load).post(facts::save))
        .with_state(state)
}
