pub mod client;
pub mod fallback;
pub mod types;

pub use client::{FortuneClient, RemoteError};
pub use fallback::{CallFailure, with_fallback};
pub use types::Fortune;
