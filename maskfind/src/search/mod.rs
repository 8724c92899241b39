pub mod engine;
pub mod matcher;

pub use engine::search;
pub use matcher::{NeedleSearcher, SearchAlgorithm};
