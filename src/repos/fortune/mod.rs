pub mod memory;
pub mod postgres;
pub mod store;

pub use memory::{InvalidFortunes, MemoryFortuneStore};
pub use postgres::PgFortuneStore;
pub use store::{FortuneRow, FortuneStore, StoreError, StoreResult};
