//! In-memory line store.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;

use crate::domain::{Line, LineId};

/// Thread-safe, in-memory line store.
///
/// The write lock is the transaction boundary: [`LineStore::update`] runs
/// its edit against the stored line while holding it, so concurrent edits
/// of one line serialize and readers never observe a half-applied change.
/// Line methods themselves leave the line untouched on failure, so a
/// failed edit is invisible.
#[derive(Clone)]
pub struct LineStore {
    inner: Arc<RwLock<BTreeMap<LineId, Line>>>,
    next_id: Arc<AtomicU64>,
}

impl LineStore {
    /// Create an empty store. Ids start at 1.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Allocate the next line id.
    pub fn next_id(&self) -> LineId {
        LineId(self.next_id.fetch_add(1, Ordering::Relaxed))
    }

    /// Insert a line unless another stored line already carries its name.
    ///
    /// The name check and the insert run under one write guard, so two
    /// concurrent inserts cannot both claim a name. Returns whether the
    /// line was stored.
    pub async fn insert_if_name_free(&self, line: Line) -> bool {
        let mut guard = self.inner.write().await;
        if guard.values().any(|stored| stored.name() == line.name()) {
            return false;
        }
        guard.insert(line.id(), line);
        true
    }

    /// Look up a line by id.
    pub async fn get(&self, id: LineId) -> Option<Line> {
        let guard = self.inner.read().await;
        guard.get(&id).cloned()
    }

    /// All lines, ordered by id.
    pub async fn all(&self) -> Vec<Line> {
        let guard = self.inner.read().await;
        guard.values().cloned().collect()
    }

    /// Remove a line, returning it if it was stored.
    pub async fn remove(&self, id: LineId) -> Option<Line> {
        let mut guard = self.inner.write().await;
        guard.remove(&id)
    }

    /// True if any stored line carries this name.
    pub async fn name_exists(&self, name: &str) -> bool {
        let guard = self.inner.read().await;
        guard.values().any(|line| line.name() == name)
    }

    /// Run an edit against a stored line inside the write lock.
    ///
    /// Returns `None` if no line has this id; otherwise the closure's own
    /// result passes through unchanged.
    pub async fn update<R>(&self, id: LineId, edit: impl FnOnce(&mut Line) -> R) -> Option<R> {
        let mut guard = self.inner.write().await;
        guard.get_mut(&id).map(edit)
    }
}

impl Default for LineStore {
    fn default() -> Self {
        Self::new()
    }
}
