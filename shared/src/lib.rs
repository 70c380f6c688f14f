// Data models and helpers shared between the engine and whatever renders its output.
pub mod models;
pub mod utils;
