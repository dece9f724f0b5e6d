// Service exports
pub mod cache;

pub use cache::{ScoreCache, PairKey, CacheStats};
