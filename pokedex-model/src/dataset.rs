use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::de;
use crate::{Category, Entity, ModelResult, Move};

/// One loaded snapshot of `data.json`.
///
/// Each sequence keeps file order. Names are not deduplicated; lookups take
/// the first match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    #[serde(rename = "types", deserialize_with = "de::null_as_default")]
    pub categories: Vec<Category>,
    #[serde(rename = "pokemons", deserialize_with = "de::null_as_default")]
    pub entities: Vec<Entity>,
    #[serde(deserialize_with = "de::null_as_default")]
    pub moves: Vec<Move>,
}

impl Dataset {
    /// Read and decode the file at `path`.
    pub fn load(path: impl AsRef<Path>) -> ModelResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let dataset = Self::from_json_str(&raw)?;
        debug!("Loaded {} from {}", dataset.summary(), path.display());
        Ok(dataset)
    }

    /// Like [`Dataset::load`], but a failure is logged and yields an empty
    /// dataset so callers keep serving with no records.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(dataset) => dataset,
            Err(e) => {
                warn!("Failed to load {}: {} (serving empty dataset)", path.display(), e);
                Self::default()
            }
        }
    }

    /// Decode a dataset from an in-memory JSON document.
    pub fn from_json_str(raw: &str) -> ModelResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            categories: self.categories.len(),
            entities: self.entities.len(),
            moves: self.moves.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.entities.is_empty() && self.moves.is_empty()
    }
}

/// Record counts of a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DatasetSummary {
    pub categories: usize,
    pub entities: usize,
    pub moves: usize,
}

impl fmt::Display for DatasetSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} types, {} pokemons, {} moves",
            self.categories, self.entities, self.moves
        )
    }
}
