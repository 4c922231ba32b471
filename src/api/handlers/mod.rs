pub mod fortunes;
pub mod health;
