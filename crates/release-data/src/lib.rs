//! Data layer for the release statistics tool.
//!
//! Responsible for paging through the releases API, normalizing asset names,
//! assembling the canonical history, folding it into chart series, and
//! persisting both as JSON.

pub mod aggregator;
pub mod fetch;
pub mod history;
pub mod normalize;
pub mod storage;

pub use release_core as core;
