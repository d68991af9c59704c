//! In-memory document store, search history and the engine context tying
//! them to the query and summarization pipelines

mod engine;
mod history;
mod store;

pub use engine::{Engine, SharedEngine};
pub use history::SearchHistory;
pub use store::DocumentStore;
