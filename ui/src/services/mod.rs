pub mod discovery;
pub mod fortunes;
