//! Finds the kanji that contain every one of a set of radicals.

pub mod engine;

pub use engine::{QueryEngine, QueryResult, RadicalId};
