pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod state;
pub mod storage;
pub mod streak;
pub mod ui;
pub mod week;

pub use app::router;
pub use config::Config;
pub use models::{CheckIn, StreakState};
pub use state::AppState;
pub use storage::{FileStore, KeyValueStore, MemoryStore, STORAGE_KEY};
pub use streak::{Clock, FixedClock, LocalClock, StreakCounter};
