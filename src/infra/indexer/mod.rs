//! Client for the Algorand indexer API.

use crate::{domain::wallet, infra::metrics};

mod dto;

/// Default AlgoExplorer v2 indexer endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://algoexplorer.io/api/v2/";

pub struct Config {
    /// The base URL of the indexer API. Must end with a `/`.
    pub endpoint: reqwest::Url,
}

/// Bindings to the indexer's account endpoints.
pub struct Indexer {
    client: reqwest::Client,
    endpoint: reqwest::Url,
}

impl Indexer {
    pub fn new(config: Config) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: config.endpoint,
        }
    }

    /// Looks up the on-chain state of a single account.
    #[tracing::instrument(skip(self))]
    pub async fn account(&self, address: &str) -> Result<wallet::Account, Error> {
        let url = format!("{}accounts/{address}", self.endpoint);

        metrics::indexer_request();
        let response = self
            .client
            .get(url)
            .send()
            .await
            .inspect_err(|_| metrics::indexer_error("transport"))?;
        if !response.status().is_success() {
            metrics::indexer_error("status");
            tracing::debug!(status = %response.status(), "account lookup failed");
            return Err(Error::NotFound(address.to_string()));
        }

        let account = response
            .json::<dto::Account>()
            .await
            .inspect_err(|_| metrics::indexer_error("decode"))?;
        Ok(account.into_domain())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no account found for address {0}")]
    NotFound(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
