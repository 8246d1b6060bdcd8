use crate::core::{FoodCatalog, RecommendError};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while loading the food catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Food database not found at {path}: {source}")]
    NotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read food database: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid food database: {0}")]
    Invalid(String),
}

impl From<RecommendError> for CatalogError {
    fn from(err: RecommendError) -> Self {
        match err {
            RecommendError::CatalogUnavailable(message) => CatalogError::Invalid(message),
            other => CatalogError::Invalid(other.to_string()),
        }
    }
}

impl From<CatalogError> for RecommendError {
    fn from(err: CatalogError) -> Self {
        RecommendError::CatalogUnavailable(err.to_string())
    }
}

/// Read and parse a catalog file
///
/// The file is read fully into memory and closed before parsing.
pub async fn load_catalog(path: &Path) -> Result<FoodCatalog, CatalogError> {
    let json = tokio::fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CatalogError::NotFound {
                path: path.display().to_string(),
                source: e,
            }
        } else {
            CatalogError::Io(e)
        }
    })?;

    Ok(FoodCatalog::from_json_str(&json)?)
}

/// Cached access to the food catalog
///
/// Holds the parsed catalog in an in-memory TTL cache so edits to the data
/// file are picked up without a restart. Cached values are immutable and
/// shared across concurrent requests.
pub struct CatalogStore {
    path: PathBuf,
    cache: moka::future::Cache<PathBuf, Arc<FoodCatalog>>,
}

impl CatalogStore {
    /// Create a new catalog store for a data file
    pub fn new(path: impl Into<PathBuf>, ttl_secs: u64) -> Self {
        let cache = moka::future::CacheBuilder::new(1)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self {
            path: path.into(),
            cache,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the catalog, loading it on a cache miss
    ///
    /// Failed loads are not cached.
    pub async fn get(&self) -> Result<Arc<FoodCatalog>, CatalogError> {
        if let Some(catalog) = self.cache.get(&self.path).await {
            tracing::trace!("Catalog cache hit: {}", self.path.display());
            return Ok(catalog);
        }

        let catalog = Arc::new(load_catalog(&self.path).await?);
        self.cache.insert(self.path.clone(), catalog.clone()).await;

        tracing::info!(
            "Loaded food catalog from {} ({} items)",
            self.path.display(),
            catalog.len()
        );

        Ok(catalog)
    }

    /// Size of the cached catalog, without triggering a load
    pub async fn cached_len(&self) -> Option<usize> {
        self.cache.get(&self.path).await.map(|catalog| catalog.len())
    }

    /// Drop the cached catalog so the next request reloads it
    pub async fn invalidate(&self) {
        self.cache.invalidate(&self.path).await;
        tracing::debug!("Invalidated catalog cache: {}", self.path.display());
    }
}
