use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock};

use parking_lot::Mutex;
use tracing::{debug, info};

use super::artifact::MatchModelArtifact;
use super::error::ModelError;
use super::resolve_model_path;

static GLOBAL_REGISTRY: LazyLock<ModelRegistry> = LazyLock::new(ModelRegistry::new);

#[derive(Debug)]
struct CachedModel {
    path: PathBuf,
    artifact: Arc<MatchModelArtifact>,
}

/// Holds at most one loaded artifact, keyed by its resolved path.
///
/// The lock is held while reading from disk, so concurrent cold loads of the same path
/// serialize and all callers observe the same `Arc`.
#[derive(Debug, Default)]
pub struct ModelRegistry {
    cached: Mutex<Option<CachedModel>>,
}

impl ModelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process-wide registry.
    pub fn global() -> &'static ModelRegistry {
        &GLOBAL_REGISTRY
    }

    /// Resolves `explicit` (see [`resolve_model_path`]) and loads it.
    pub fn load(&self, explicit: Option<&Path>) -> Result<Arc<MatchModelArtifact>, ModelError> {
        let path = resolve_model_path(explicit);
        self.load_path(&path)
    }

    /// Returns the cached artifact for `path`, reading it from disk on a miss.
    ///
    /// A successful load for a different path replaces the cached entry.
    pub fn load_path(&self, path: &Path) -> Result<Arc<MatchModelArtifact>, ModelError> {
        let mut cached = self.cached.lock();

        if let Some(entry) = cached.as_ref()
            && entry.path == path
        {
            debug!(path = %path.display(), "Match model cache hit");
            return Ok(Arc::clone(&entry.artifact));
        }

        info!(path = %path.display(), "Loading match model");
        let artifact = Arc::new(MatchModelArtifact::load(path)?);
        info!(
            path = %path.display(),
            features = artifact.feature_names().len(),
            "Match model loaded"
        );

        *cached = Some(CachedModel {
            path: path.to_path_buf(),
            artifact: Arc::clone(&artifact),
        });
        Ok(artifact)
    }

    pub fn cached_path(&self) -> Option<PathBuf> {
        self.cached.lock().as_ref().map(|entry| entry.path.clone())
    }

    pub fn clear(&self) {
        *self.cached.lock() = None;
    }
}
