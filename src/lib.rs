pub mod app;
pub mod catalog;
pub mod errors;
pub mod handlers;
pub mod leaderboard;
pub mod models;
pub mod storage;
pub mod suggest;
pub mod ui;
pub mod state;

pub use app::router;
pub use state::AppState;
pub use storage::{resolve_data_dir, Store};
