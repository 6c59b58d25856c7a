use {
    crate::api,
    axum::{Json, extract::State},
    serde::Serialize,
    std::sync::Arc,
};

/// Metadata of the configured chain, as shown next to the withdrawal form.
#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Network {
    chain_id: u64,
    name: &'static str,
    currency: Currency,
    block_explorer_url: &'static str,
    testnet: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Currency {
    name: &'static str,
    symbol: &'static str,
    decimals: u32,
}

pub async fn network(State(state): State<Arc<api::State>>) -> Json<Network> {
    let chain = state.chain;
    let currency = chain.currency();
    Json(Network {
        chain_id: chain.id(),
        name: chain.name(),
        currency: Currency {
            name: currency.name,
            symbol: currency.symbol,
            decimals: currency.decimals(),
        },
        block_explorer_url: chain.block_explorer_url(),
        testnet: chain.is_testnet(),
    })
}
