pub mod config;
pub mod indexer;
pub mod metrics;
pub mod node;
pub mod persistence;
