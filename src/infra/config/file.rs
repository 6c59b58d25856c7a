use {
    crate::{domain::eth, infra::indexer, util::serialize},
    serde::Deserialize,
    serde_with::serde_as,
    std::{
        path::{Path, PathBuf},
        time::Duration,
    },
};

#[serde_as]
#[derive(Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct Config {
    /// Chain ID of the EVM network withdrawals are estimated against.
    #[serde_as(as = "serialize::ChainId")]
    chain_id: eth::Chain,

    /// JSON-RPC endpoint of the chain's node. Defaults to a public endpoint
    /// for the configured chain.
    #[serde(default)]
    #[serde_as(as = "Option<serde_with::DisplayFromStr>")]
    node_url: Option<reqwest::Url>,

    /// Base URL of the Algorand indexer API. Must end with a `/`.
    #[serde(default = "default_indexer_endpoint")]
    #[serde_as(as = "serde_with::DisplayFromStr")]
    indexer_endpoint: reqwest::Url,

    /// Path of the JSON file holding connected wallets.
    #[serde(default = "default_wallet_store")]
    wallet_store: PathBuf,

    /// How often to refresh connected wallets from the indexer. Off by
    /// default.
    #[serde(default, with = "humantime_serde")]
    refresh_interval: Option<Duration>,
}

fn default_indexer_endpoint() -> reqwest::Url {
    indexer::DEFAULT_ENDPOINT.parse().unwrap()
}

fn default_wallet_store() -> PathBuf {
    "wallets.json".into()
}

/// Load the gateway configuration from a TOML file.
///
/// # Panics
///
/// This method panics if the config is invalid or on I/O errors.
pub async fn load(path: &Path) -> super::Config {
    let data = tokio::fs::read_to_string(path)
        .await
        .unwrap_or_else(|err| panic!("failed to read configuration file {path:?}: {err}"));
    let config: Config = toml::de::from_str(&data)
        .unwrap_or_else(|err| panic!("invalid configuration file {path:?}: {err}"));

    super::Config {
        node_url: config
            .node_url
            .unwrap_or_else(|| config.chain_id.default_node_url()),
        chain: config.chain_id,
        indexer: indexer::Config {
            endpoint: config.indexer_endpoint,
        },
        wallet_store: config.wallet_store,
        refresh_interval: config.refresh_interval,
    }
}
