pub mod api;
pub mod app;
pub mod config;
pub mod middleware;
pub mod services;
pub mod state;

pub use app::build_router;
pub use state::AppState;
