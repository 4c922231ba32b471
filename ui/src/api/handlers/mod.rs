pub mod fortunes;
pub mod greeting;
pub mod health;
