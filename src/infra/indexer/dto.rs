//! Data transfer objects for indexer responses.

use {crate::domain::wallet, serde::Deserialize};

/// An account, as returned by `GET accounts/{address}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Account {
    pub address: String,
    /// Total balance in microAlgos.
    pub amount: u64,
    pub auth_addr: Option<String>,
    #[serde(default)]
    pub assets: Vec<AssetHolding>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct AssetHolding {
    pub asset_id: u64,
    pub amount: u64,
}

impl Account {
    /// Converts the response into its domain counterpart. The account
    /// endpoint does not carry asset metadata, so those fields stay empty.
    pub fn into_domain(self) -> wallet::Account {
        wallet::Account {
            address: self.address,
            balance_micro_algos: self.amount,
            auth_address: self.auth_addr,
            assets: self
                .assets
                .into_iter()
                .map(|holding| wallet::AssetHolding {
                    id: holding.asset_id,
                    unit_name: String::new(),
                    name: String::new(),
                    decimals: 0,
                    creator_address: String::new(),
                    balance: holding.amount,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_an_account_response() {
        let account: Account = serde_json::from_str(
            r#"{
                "address": "VCMJKWOY5P5P7SKMZFFOCEROPJCZOTIJMNIYNUCKH7LRO45JMJP6UYBIJB",
                "amount": 1500000,
                "auth-addr": null,
                "assets": [
                    { "asset-id": 31566704, "amount": 5000000, "is-frozen": false }
                ],
                "round": 3906051
            }"#,
        )
        .unwrap();

        let account = account.into_domain();
        assert_eq!(account.balance_micro_algos, 1_500_000);
        assert_eq!(account.auth_address, None);
        assert_eq!(account.assets.len(), 1);
        assert_eq!(account.assets[0].id, 31566704);
        assert_eq!(account.assets[0].balance, 5_000_000);
    }

    #[test]
    fn missing_assets_default_to_empty() {
        let account: Account = serde_json::from_str(
            r#"{ "address": "X", "amount": 0, "auth-addr": "Y" }"#,
        )
        .unwrap();
        assert!(account.assets.is_empty());
        assert_eq!(account.auth_addr.as_deref(), Some("Y"));
    }
}
