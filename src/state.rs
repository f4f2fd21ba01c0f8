use crate::storage::FileStore;
use crate::streak::{LocalClock, StreakCounter};
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

pub type FileCounter = StreakCounter<FileStore, LocalClock>;

/// Shared server state. The counter does synchronous file I/O, so handlers
/// only touch it from `spawn_blocking` via `blocking_lock`.
#[derive(Clone)]
pub struct AppState {
    pub counter: Arc<Mutex<FileCounter>>,
}

impl AppState {
    pub fn new(data_path: PathBuf) -> Self {
        let counter = StreakCounter::with_local_clock(FileStore::new(data_path));
        Self {
            counter: Arc::new(Mutex::new(counter)),
        }
    }
}
