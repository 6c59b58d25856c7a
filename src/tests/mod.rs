use {
    reqwest::StatusCode,
    std::{collections::HashMap, net::SocketAddr},
    tokio::sync::oneshot,
};

mod service;
mod withdrawals;

/// A gateway instance listening on an OS-assigned port, configured against
/// mock node and indexer servers.
pub struct Gateway {
    addr: SocketAddr,
    client: reqwest::Client,
    /// Keeps the configuration and wallet store files alive for the duration
    /// of the test.
    _config: tempfile::TempDir,
}

impl Gateway {
    pub async fn start(node: SocketAddr, indexer: SocketAddr) -> Self {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("config.toml");
        let store = dir.path().join("wallets.json");
        std::fs::write(
            &config,
            format!(
                "chain-id = 1\n\
                 node-url = 'http://{node}/'\n\
                 indexer-endpoint = 'http://{indexer}/'\n\
                 wallet-store = '{}'\n",
                store.display(),
            ),
        )
        .unwrap();

        let args = crate::Args {
            addr: "127.0.0.1:0".parse().unwrap(),
            config,
            log: "warn".to_owned(),
        };
        let (bind, bound) = oneshot::channel();
        tokio::spawn(crate::start(args, bind));

        Self {
            addr: bound.await.unwrap(),
            client: reqwest::Client::new(),
            _config: dir,
        }
    }

    /// Starts a gateway with fresh mock node and indexer servers. For tests
    /// that never reach either backend.
    pub async fn start_standalone() -> Self {
        Self::start(mock::node(), mock::indexer(HashMap::new())).await
    }

    pub async fn get(&self, path: &str) -> (StatusCode, serde_json::Value) {
        let response = self.client.get(self.url(path)).send().await.unwrap();
        let status = response.status();
        (status, response.json().await.unwrap_or_default())
    }

    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
    ) -> (StatusCode, serde_json::Value) {
        let response = self
            .client
            .post(self.url(path))
            .json(&body)
            .send()
            .await
            .unwrap();
        let status = response.status();
        (status, response.json().await.unwrap_or_default())
    }

    pub async fn get_text(&self, path: &str) -> (StatusCode, String) {
        let response = self.client.get(self.url(path)).send().await.unwrap();
        let status = response.status();
        (status, response.text().await.unwrap())
    }

    pub async fn delete(&self, path: &str) -> StatusCode {
        self.client
            .delete(self.url(path))
            .send()
            .await
            .unwrap()
            .status()
    }

    fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }
}
