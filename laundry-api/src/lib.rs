pub mod classify;
pub mod models;

pub use classify::{Classification, Skipped, classify};
