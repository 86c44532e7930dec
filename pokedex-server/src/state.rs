use std::path::{Path, PathBuf};
use std::sync::Arc;

use pokedex_model::{Dataset, DatasetSummary, ModelResult};
use tokio::sync::RwLock;
use tracing::info;

/// Shared handler state: the data file path and the current snapshot.
///
/// Handlers take an `Arc<Dataset>` and release the lock immediately; a
/// snapshot is never mutated. [`AppState::reload`] swaps in a new one.
#[derive(Debug)]
pub struct AppState {
    data_path: PathBuf,
    snapshot: RwLock<Arc<Dataset>>,
}

impl AppState {
    pub fn new(data_path: impl Into<PathBuf>, dataset: Dataset) -> Self {
        Self {
            data_path: data_path.into(),
            snapshot: RwLock::new(Arc::new(dataset)),
        }
    }

    /// Load `data_path`, starting with an empty dataset if it can't be read.
    pub fn load(data_path: impl Into<PathBuf>) -> Self {
        let data_path = data_path.into();
        let dataset = Dataset::load_or_empty(&data_path);
        info!("Serving {} from {}", dataset.summary(), data_path.display());
        Self::new(data_path, dataset)
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// The dataset as of now.
    pub async fn snapshot(&self) -> Arc<Dataset> {
        Arc::clone(&*self.snapshot.read().await)
    }

    /// Re-read the data file and replace the snapshot.
    ///
    /// On failure the current snapshot stays in place.
    pub async fn reload(&self) -> ModelResult<DatasetSummary> {
        let dataset = Dataset::load(&self.data_path)?;
        let summary = dataset.summary();
        *self.snapshot.write().await = Arc::new(dataset);
        info!("Reloaded {} from {}", summary, self.data_path.display());
        Ok(summary)
    }
}
