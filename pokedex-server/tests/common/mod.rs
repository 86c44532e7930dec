//! Shared helpers for server tests.

#![allow(dead_code)]

use std::io::Write;
use std::sync::Arc;

use pokedex_server::{build_router, AppState};
use tempfile::NamedTempFile;

pub const TEST_DATA: &str = r#"{
    "types": [
        {"name": "Fire", "effectiveAgainst": ["Bug", "Grass"], "weakAgainst": ["Water", "Rock"]},
        {"name": "Water", "effectiveAgainst": ["Fire"], "weakAgainst": ["Grass"]},
        {"name": "Grass", "effectiveAgainst": ["Water"], "weakAgainst": ["Fire"]}
    ],
    "pokemons": [
        {
            "Number": "004", "Name": "A", "Classification": "Lizard Pokèmon",
            "Type I": ["Fire"], "Weaknesses": ["Water"],
            "Fast Attack(s)": ["Ember", "Scratch"], "Special Attack(s)": ["Flamethrower"],
            "Weight": "8.5 kg", "Height": "0.61 m",
            "Candy": {"Name": "Charmander Candy", "FamilyID": 4},
            "Next Evolution Requirements": {"Amount": 25, "Family": 4, "Name": "Charmander candies"},
            "Next evolution(s)": [{"Number": 5, "Name": "Charmeleon"}],
            "BaseAttack": 10, "BaseDefense": 5, "BaseStamina": 78,
            "CaptureRate": 0.16, "FleeRate": 0.1, "BuddyDistanceNeeded": 3
        },
        {
            "Number": "005", "Name": "B", "Type I": ["Fire"],
            "Weight": "19.0 kg", "Height": "1.09 m",
            "Previous evolution(s)": [{"Number": 4, "Name": "A"}],
            "BaseAttack": 30, "BaseDefense": 7, "CaptureRate": 0.08, "FleeRate": 0.05,
            "BuddyDistanceNeeded": 3
        },
        {
            "Number": "007", "Name": "C", "Type I": ["Water"], "Type II": ["Fire"],
            "BaseAttack": 20
        }
    ],
    "moves": [
        {"id": 13, "name": "Wrap", "type": "Normal", "damage": 25, "energy": -20, "dps": 6.25, "duration": 4000},
        {"id": 101, "name": "Flame Charge", "type": "Fire", "damage": 25, "energy": -20, "dps": 8.62, "duration": 2900}
    ]
}"#;

pub fn write_data(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

pub struct TestServer {
    pub base: String,
    pub state: Arc<AppState>,
    pub data: NamedTempFile,
}

/// Spin up the HTTP server on an OS-assigned port over `contents`.
pub async fn spawn_with(contents: &str) -> TestServer {
    let data = write_data(contents);
    let state = Arc::new(AppState::load(data.path()));
    let app = build_router(Arc::clone(&state));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    TestServer {
        base: format!("http://127.0.0.1:{}", port),
        state,
        data,
    }
}

pub async fn spawn_test_server() -> TestServer {
    spawn_with(TEST_DATA).await
}

/// Client that reports redirects instead of following them.
pub fn no_redirect_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}
