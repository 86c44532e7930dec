use serde::{Deserialize, Serialize};

/// An attack move.
///
/// Keys are lowercase in `data.json`; the capitalized spellings are accepted
/// too.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Move {
    #[serde(alias = "ID", alias = "Id")]
    pub id: i64,
    #[serde(alias = "Name")]
    pub name: String,
    /// Category name, e.g. `"Fire"`.
    #[serde(rename = "type", alias = "Type")]
    pub category: String,
    #[serde(alias = "Damage")]
    pub damage: i64,
    /// Energy delta; charge moves carry a negative cost.
    #[serde(alias = "Energy")]
    pub energy: i64,
    #[serde(alias = "Dps")]
    pub dps: f64,
    /// Milliseconds.
    #[serde(alias = "Duration")]
    pub duration: i64,
}
