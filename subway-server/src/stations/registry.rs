//! In-memory station registry.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;

use crate::domain::StationId;

/// A registered station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    id: StationId,
    name: String,
}

impl Station {
    pub fn id(&self) -> StationId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Thread-safe station registry.
///
/// Stations are the endpoints that sections connect; lines reference them
/// by id only. The registry allocates ids and answers lookups. Whether a
/// station may be deleted is the catalog's decision, since only the
/// catalog knows which lines still run through it.
#[derive(Clone)]
pub struct StationRegistry {
    inner: Arc<RwLock<BTreeMap<StationId, Station>>>,
    next_id: Arc<AtomicU64>,
}

impl StationRegistry {
    /// Create an empty registry. Ids start at 1.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Register a station and allocate its id.
    pub async fn add(&self, name: String) -> Station {
        let id = StationId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let station = Station { id, name };

        let mut guard = self.inner.write().await;
        guard.insert(id, station.clone());
        station
    }

    /// Look up a station by id.
    pub async fn get(&self, id: StationId) -> Option<Station> {
        let guard = self.inner.read().await;
        guard.get(&id).cloned()
    }

    /// All stations, ordered by id.
    pub async fn all(&self) -> Vec<Station> {
        let guard = self.inner.read().await;
        guard.values().cloned().collect()
    }

    /// Remove a station, returning it if it was registered.
    pub async fn remove(&self, id: StationId) -> Option<Station> {
        let mut guard = self.inner.write().await;
        guard.remove(&id)
    }

    /// Number of registered stations.
    pub async fn len(&self) -> usize {
        let guard = self.inner.read().await;
        guard.len()
    }

    /// True if no stations are registered.
    pub async fn is_empty(&self) -> bool {
        let guard = self.inner.read().await;
        guard.is_empty()
    }
}

impl Default for StationRegistry {
    fn default() -> Self {
        Self::new()
    }
}
