//! Plain-text HTTP API for the Pokédex service.
//!
//! Routes, highest priority first:
//! - `/types`, `/pokemons`, `/moves`, `/list`: full listings and list help
//! - `/types/{name}`, `/pokemons/{name}`, `/moves/{name}`: single lookups
//! - `/list/{type}` and `/list/{type}/sortBy{key}`: filtered listings
//! - `/`: usage text
//!
//! Any other GET path answers `301 Moved Permanently` to `/`. Lookup misses
//! and bad sort keys are `200` responses whose body explains the problem.

mod handlers;
pub mod render;
mod state;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

pub use state::AppState;

/// Build the HTTP API router over the given state.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::usage))
        .route("/types", get(handlers::list_types))
        .route("/types/{name}", get(handlers::get_type))
        .route("/pokemons", get(handlers::list_pokemons))
        .route("/pokemons/{name}", get(handlers::get_pokemon))
        .route("/moves", get(handlers::list_moves))
        .route("/moves/{name}", get(handlers::get_move))
        .route("/list", get(handlers::list_usage))
        .route("/list/{category}", get(handlers::list_category))
        .route("/list/{category}/{segment}", get(handlers::list_category_sorted))
        .route(
            "/reload",
            post(handlers::reload).get(handlers::redirect_home),
        )
        .fallback(handlers::redirect_home)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
