pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod middleware;
pub mod repos;
pub mod state;

pub use app::build_router;
pub use state::AppState;
