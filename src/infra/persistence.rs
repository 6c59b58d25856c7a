//! Durable storage for the connected wallet list.
//!
//! Wallets are persisted as a single JSON document, the server-side analog
//! of a client's user-preferences entry. Pending signature requests are not
//! persisted and start empty on every boot.

use {
    crate::domain::wallet,
    anyhow::{Context, Result},
    std::path::PathBuf,
};

pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads the persisted wallets. A missing file is an empty list.
    pub async fn load(&self) -> Result<Vec<wallet::Wallet>> {
        let raw = match tokio::fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err).context("reading wallet store"),
        };
        serde_json::from_slice(&raw).context("decoding wallet store")
    }

    /// Writes the full wallet list, replacing the previous contents.
    pub async fn save(&self, wallets: &[wallet::Wallet]) -> Result<()> {
        let raw = serde_json::to_vec_pretty(wallets).context("encoding wallet store")?;
        tokio::fs::write(&self.path, raw)
            .await
            .context("writing wallet store")
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::domain::wallet::{Wallet, WalletType},
    };

    #[tokio::test]
    async fn round_trips_wallets() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("wallets.json"));

        // A missing file loads as an empty list.
        assert!(store.load().await.unwrap().is_empty());

        let wallets = vec![Wallet::new(
            "Main".to_string(),
            WalletType::Standard,
            Vec::new(),
        )];
        store.save(&wallets).await.unwrap();
        assert_eq!(store.load().await.unwrap(), wallets);
    }

    #[tokio::test]
    async fn corrupt_stores_fail_to_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wallets.json");
        tokio::fs::write(&path, b"not json").await.unwrap();

        assert!(Store::new(path).load().await.is_err());
    }
}
