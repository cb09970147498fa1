//! Per-user playlists, held in memory for the life of the process.

use std::collections::HashMap;

use parking_lot::Mutex;

/// Free-text song lists keyed by user id
#[derive(Debug, Default)]
pub struct PlaylistStore {
    lists: Mutex<HashMap<String, Vec<String>>>,
}

impl PlaylistStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, user_id: &str, song: &str) {
        self.lists
            .lock()
            .entry(user_id.to_string())
            .or_default()
            .push(song.to_string());
    }

    /// Remove the first entry equal to `song`. Returns whether one was found.
    pub fn remove(&self, user_id: &str, song: &str) -> bool {
        let mut lists = self.lists.lock();
        let Some(list) = lists.get_mut(user_id) else {
            return false;
        };
        match list.iter().position(|s| s == song) {
            Some(index) => {
                list.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn clear(&self, user_id: &str) {
        self.lists.lock().remove(user_id);
    }

    /// Snapshot of a user's playlist, oldest entry first
    pub fn songs(&self, user_id: &str) -> Vec<String> {
        self.lists
            .lock()
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }
}
