mod chain;

pub use {
    self::chain::{Chain, Currency, UnsupportedChain},
    ethereum_types::{Address, U256},
};

/// An Ether amount in wei.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Ether(pub U256);

impl From<U256> for Ether {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

/// A gas price in wei per unit of gas.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct GasPrice(pub U256);

impl From<U256> for GasPrice {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

/// Gas amount.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Gas(pub U256);

impl From<U256> for Gas {
    fn from(value: U256) -> Self {
        Self(value)
    }
}
