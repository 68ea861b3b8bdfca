// flexlease/src/session/query_cache.rs

//! A typed, scope-partitioned cache for query results.
//!
//! Entries are keyed by `"<scope>::<key>"`, where the scope is normally the
//! signed-in user. Switching scope never exposes another account's data.

use parking_lot::RwLock;
use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{event, Level};

pub const DEFAULT_SCOPE: &str = "anonymous";

struct CacheEntry {
  type_id: TypeId,
  value: Arc<dyn Any + Send + Sync>,
}

struct CacheState {
  scope: String,
  entries: HashMap<String, CacheEntry>,
}

/// Cloning shares the underlying storage; use [`QueryCache::new`] for an
/// isolated cache.
///
/// Lock guards are internal and never held across `.await` points.
#[derive(Clone)]
pub struct QueryCache {
  state: Arc<RwLock<CacheState>>,
}

impl QueryCache {
  pub fn new() -> Self {
    Self {
      state: Arc::new(RwLock::new(CacheState {
        scope: DEFAULT_SCOPE.to_string(),
        entries: HashMap::new(),
      })),
    }
  }

  pub fn scope(&self) -> String {
    self.state.read().scope.clone()
  }

  /// Blank or missing scopes fall back to [`DEFAULT_SCOPE`].
  pub fn set_scope(&self, scope: Option<&str>) {
    let normalized = scope.map(str::trim).filter(|s| !s.is_empty()).unwrap_or(DEFAULT_SCOPE);
    let mut state = self.state.write();
    if state.scope != normalized {
      event!(Level::DEBUG, from = %state.scope, to = %normalized, "Switching query cache scope.");
      state.scope = normalized.to_string();
    }
  }

  fn scoped_key(scope: &str, key: &str) -> String {
    format!("{}::{}", scope, key)
  }

  /// Returns `None` when the key is absent or was stored with another type.
  pub fn get<T>(&self, key: &str) -> Option<T>
  where
    T: Clone + Send + Sync + 'static,
  {
    let state = self.state.read();
    let entry = state.entries.get(&Self::scoped_key(&state.scope, key))?;
    if entry.type_id != TypeId::of::<T>() {
      event!(
        Level::DEBUG,
        key,
        expected_type = %std::any::type_name::<T>(),
        "Cached value has a different type; treating as a miss."
      );
      return None;
    }
    entry.value.downcast_ref::<T>().cloned()
  }

  pub fn insert<T>(&self, key: &str, value: T)
  where
    T: Send + Sync + 'static,
  {
    let mut state = self.state.write();
    let scoped = Self::scoped_key(&state.scope, key);
    state.entries.insert(
      scoped,
      CacheEntry {
        type_id: TypeId::of::<T>(),
        value: Arc::new(value),
      },
    );
  }

  pub fn contains(&self, key: &str) -> bool {
    let state = self.state.read();
    state.entries.contains_key(&Self::scoped_key(&state.scope, key))
  }

  /// `Some(scope)` drops only that scope's entries; `None` drops everything.
  pub fn clear(&self, scope: Option<&str>) {
    let mut state = self.state.write();
    match scope {
      None => state.entries.clear(),
      Some(scope) => {
        let prefix = format!("{}::", scope);
        state.entries.retain(|key, _| !key.starts_with(&prefix));
      }
    }
  }

  /// Number of entries across all scopes.
  pub fn len(&self) -> usize {
    self.state.read().entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

impl Default for QueryCache {
  fn default() -> Self {
    Self::new()
  }
}

impl std::fmt::Debug for QueryCache {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let state = self.state.read();
    f.debug_struct("QueryCache")
      .field("scope", &state.scope)
      .field("entries", &state.entries.len())
      .finish()
  }
}
