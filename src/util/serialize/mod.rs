mod chain;

pub use chain::ChainId;
