pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod seed;
pub mod state;
pub mod stats;
pub mod tracker;
pub mod ui;

pub use app::router;
pub use config::resolve_addr;
pub use state::AppState;
pub use tracker::Tracker;
