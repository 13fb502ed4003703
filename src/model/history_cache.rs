use std::collections::{hash_map::Entry, HashMap};

use tracing::debug;

use crate::model::{data_processing::performance_history, structures::user_result::UserResult};

/// Contest results memoized per user screen name.
///
/// Entries stay until explicitly invalidated; the cache never refetches on
/// its own. Failed fetches are not cached.
#[derive(Debug, Default)]
pub struct HistoryCache {
    entries: HashMap<String, Vec<UserResult>>
}

impl HistoryCache {
    pub fn new() -> HistoryCache {
        HistoryCache {
            entries: HashMap::new()
        }
    }

    pub fn get(&self, user: &str) -> Option<&[UserResult]> {
        self.entries.get(user).map(Vec::as_slice)
    }

    /// Stores `results` for `user`, returning the previous entry if any.
    pub fn insert(&mut self, user: &str, results: Vec<UserResult>) -> Option<Vec<UserResult>> {
        self.entries.insert(user.to_owned(), results)
    }

    /// Returns the cached results for `user`, calling `fetch` only on a miss.
    pub fn get_or_try_insert_with<F, E>(&mut self, user: &str, fetch: F) -> Result<&[UserResult], E>
    where
        F: FnOnce() -> Result<Vec<UserResult>, E>
    {
        let results = match self.entries.entry(user.to_owned()) {
            Entry::Occupied(entry) => {
                debug!(user, "History cache hit");
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                debug!(user, "History cache miss");
                entry.insert(fetch()?)
            }
        };

        Ok(results.as_slice())
    }

    /// Most-recent-first rated performances of a cached user.
    pub fn performance_history(&self, user: &str) -> Option<Vec<f64>> {
        self.get(user).map(performance_history)
    }

    /// Drops the entry for `user`. Returns whether one existed.
    pub fn invalidate(&mut self, user: &str) -> bool {
        let removed = self.entries.remove(user).is_some();
        if removed {
            debug!(user, "Invalidated cached history");
        }

        removed
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
