pub mod fortunes;
