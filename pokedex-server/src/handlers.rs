use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use pokedex_query::{
    find_category, find_entity, find_move, list_by_category, QueryError, RecordKind, SortKey,
};
use tracing::{debug, warn};

use crate::render::{render_record, render_records};
use crate::AppState;

const CASE_HINT: &str = "Check your input, use correct case (e.g. Bulbasaur, not bulbasaur).";

/// Path segment prefix that selects a sorted listing.
const SORT_PREFIX: &str = "sortBy";

pub(crate) async fn usage() -> String {
    "Pokédex API\n\
     \n\
     GET  /types                       all types\n\
     GET  /types/{name}                one type\n\
     GET  /pokemons                    all pokemons\n\
     GET  /pokemons/{name}             one pokemon\n\
     GET  /moves                       all moves\n\
     GET  /moves/{name}                one move\n\
     GET  /list                        filtering and sorting help\n\
     GET  /list/{type}                 pokemons whose primary type is {type}\n\
     GET  /list/{type}/sortBy{key}     the same, sorted descending by {key}\n\
     POST /reload                      re-read the data file\n\
     \n\
     Names are case-sensitive.\n"
        .to_string()
}

pub(crate) async fn list_usage() -> String {
    let keys = SortKey::ALL
        .iter()
        .map(|k| {
            if k.is_lexicographic() {
                format!("  {k} (compared as text)\n")
            } else {
                format!("  {k}\n")
            }
        })
        .collect::<String>();
    format!(
        "GET /list/{{type}} lists pokemons whose primary type is {{type}}, e.g. /list/Fire\n\
         GET /list/{{type}}/sortBy{{key}} sorts that list in descending order, e.g. /list/Fire/sortByBaseAttack\n\
         \n\
         Sort keys:\n{keys}"
    )
}

pub(crate) async fn list_types(State(state): State<Arc<AppState>>) -> String {
    let dataset = state.snapshot().await;
    format!("All of the pokemon types\n{}", render_records(&dataset.categories))
}

pub(crate) async fn list_pokemons(State(state): State<Arc<AppState>>) -> String {
    let dataset = state.snapshot().await;
    format!("All pokemons\n{}", render_records(&dataset.entities))
}

pub(crate) async fn list_moves(State(state): State<Arc<AppState>>) -> String {
    let dataset = state.snapshot().await;
    format!("All moves\n{}", render_records(&dataset.moves))
}

pub(crate) async fn get_type(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> String {
    let dataset = state.snapshot().await;
    match find_category(&dataset, &name) {
        Some(category) => render_record(category),
        None => not_found(RecordKind::Category, &name),
    }
}

pub(crate) async fn get_pokemon(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> String {
    let dataset = state.snapshot().await;
    match find_entity(&dataset, &name) {
        Some(entity) => render_record(entity),
        None => not_found(RecordKind::Entity, &name),
    }
}

pub(crate) async fn get_move(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> String {
    let dataset = state.snapshot().await;
    match find_move(&dataset, &name) {
        Some(m) => render_record(m),
        None => not_found(RecordKind::Move, &name),
    }
}

pub(crate) async fn list_category(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
) -> String {
    category_listing(&state, &category, "").await
}

/// `/list/{type}/{segment}`: only `sortBy{key}` segments with a non-empty
/// key are served.
pub(crate) async fn list_category_sorted(
    State(state): State<Arc<AppState>>,
    Path((category, segment)): Path<(String, String)>,
) -> Response {
    match segment.strip_prefix(SORT_PREFIX) {
        Some(key) if !key.is_empty() => {
            category_listing(&state, &category, key).await.into_response()
        }
        _ => redirect_home().await.into_response(),
    }
}

pub(crate) async fn reload(State(state): State<Arc<AppState>>) -> Response {
    match state.reload().await {
        Ok(summary) => format!("Reloaded {summary}\n").into_response(),
        Err(e) => {
            warn!("Reload of {} failed: {}", state.data_path().display(), e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Reload failed, keeping current data: {e}\n"),
            )
                .into_response()
        }
    }
}

/// Everything unmatched goes back to the usage page.
pub(crate) async fn redirect_home() -> impl IntoResponse {
    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, "/")])
}

async fn category_listing(state: &AppState, category: &str, sort_key: &str) -> String {
    let dataset = state.snapshot().await;
    match list_by_category(&dataset, category, sort_key) {
        Ok(entities) if entities.is_empty() => {
            format!("No pokemons with primary type {category:?}. {CASE_HINT}\n")
        }
        Ok(entities) => render_records(entities),
        Err(e) => {
            debug!("Rejected sort for /list/{}: {}", category, e);
            invalid_sort_hint(&e)
        }
    }
}

/// An unknown sort key answers with this hint instead of a listing.
fn invalid_sort_hint(err: &QueryError) -> String {
    let valid = SortKey::ALL
        .iter()
        .map(|k| format!("{SORT_PREFIX}{k}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("{err}. Valid options: {valid}. Check your input, e.g. /list/Fire/sortByBaseAttack\n")
}

fn not_found(kind: RecordKind, name: &str) -> String {
    debug!("Lookup miss: {} {:?}", kind, name);
    format!("{}. {CASE_HINT}\n", QueryError::not_found(kind, name))
}
