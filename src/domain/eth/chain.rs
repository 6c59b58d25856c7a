/// A supported EVM chain.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Chain {
    Mainnet = 1,
    Goerli = 5,
    Bnb = 56,
    BnbTestnet = 97,
}

impl Chain {
    pub fn new(value: u64) -> Result<Self, UnsupportedChain> {
        match value {
            1 => Ok(Self::Mainnet),
            5 => Ok(Self::Goerli),
            56 => Ok(Self::Bnb),
            97 => Ok(Self::BnbTestnet),
            _ => Err(UnsupportedChain),
        }
    }

    /// Returns the chain ID as a numeric value.
    pub fn id(self) -> u64 {
        self as u64
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Mainnet => "Ethereum Mainnet",
            Self::Goerli => "Goerli Testnet",
            Self::Bnb => "BNB Smart Chain",
            Self::BnbTestnet => "BSC Testnet",
        }
    }

    /// The chain's native currency.
    pub fn currency(self) -> Currency {
        match self {
            Self::Mainnet => Currency {
                name: "Ether",
                symbol: "ETH",
            },
            Self::Goerli => Currency {
                name: "Goerli Ether",
                symbol: "ETH",
            },
            Self::Bnb => Currency {
                name: "BNB",
                symbol: "BNB",
            },
            Self::BnbTestnet => Currency {
                name: "tBNB",
                symbol: "tBNB",
            },
        }
    }

    /// A public JSON-RPC endpoint for the chain, used when the configuration
    /// does not name one.
    pub fn default_node_url(self) -> reqwest::Url {
        let url = match self {
            Self::Mainnet => "https://eth.llamarpc.com",
            Self::Goerli => "https://rpc.ankr.com/eth_goerli",
            Self::Bnb => "https://bsc-dataseed.binance.org",
            Self::BnbTestnet => "https://data-seed-prebsc-1-s1.binance.org:8545",
        };
        url.parse().unwrap()
    }

    pub fn block_explorer_url(self) -> &'static str {
        match self {
            Self::Mainnet => "https://etherscan.io",
            Self::Goerli => "https://goerli.etherscan.io",
            Self::Bnb => "https://bscscan.com",
            Self::BnbTestnet => "https://testnet.bscscan.com",
        }
    }

    pub fn is_testnet(self) -> bool {
        matches!(self, Self::Goerli | Self::BnbTestnet)
    }
}

/// Metadata of a chain's native currency. All supported chains use
/// 18-decimal currencies.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Currency {
    pub name: &'static str,
    pub symbol: &'static str,
}

impl Currency {
    /// Number of base-unit decimals of the currency.
    pub fn decimals(self) -> u32 {
        18
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unsupported chain")]
pub struct UnsupportedChain;
