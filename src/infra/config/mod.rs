mod file;

pub use file::load;

use {
    crate::{domain::eth, infra::indexer},
    std::{path::PathBuf, time::Duration},
};

pub struct Config {
    pub chain: eth::Chain,
    pub node_url: reqwest::Url,
    pub indexer: indexer::Config,
    pub wallet_store: PathBuf,
    pub refresh_interval: Option<Duration>,
}
