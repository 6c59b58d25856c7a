use {
    crate::{api, domain::wallet, infra::indexer},
    axum::{
        Json,
        extract::{Path, State},
    },
    chrono::{DateTime, Utc},
    hyper::StatusCode,
    serde::{Deserialize, Serialize},
    std::sync::Arc,
    uuid::Uuid,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ConnectWallet {
    /// Algorand address of the wallet's primary account. May also be a
    /// scanned `algorand://` QR code URI.
    pub address: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: wallet::WalletType,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Wallet {
    pub id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: wallet::WalletType,
    pub connected_at: DateTime<Utc>,
    pub connected: bool,
    pub accounts: Vec<Account>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Account {
    pub address: String,
    pub balance_micro_algos: u64,
    pub balance_algos: bigdecimal::BigDecimal,
    pub rekeyed: bool,
    pub assets: Vec<Asset>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Asset {
    pub id: u64,
    pub balance: u64,
    pub display: String,
}

/// Creates a wallet DTO from its domain object.
fn from_domain(wallet: &wallet::Wallet) -> Wallet {
    Wallet {
        id: wallet.id,
        name: wallet.name.clone(),
        kind: wallet.kind,
        connected_at: wallet.connected_at,
        connected: wallet.connected,
        accounts: wallet
            .accounts
            .iter()
            .map(|account| Account {
                address: account.address.clone(),
                balance_micro_algos: account.balance_micro_algos,
                balance_algos: account.balance_algos(),
                rekeyed: account.is_rekeyed(),
                assets: account
                    .assets
                    .iter()
                    .map(|asset| Asset {
                        id: asset.id,
                        balance: asset.balance,
                        display: asset.formatted_balance(),
                    })
                    .collect(),
            })
            .collect(),
    }
}

pub async fn list(State(state): State<Arc<api::State>>) -> Json<Vec<Wallet>> {
    let registry = state.registry.lock().await;
    Json(registry.wallets().iter().map(from_domain).collect())
}

pub async fn connect(
    State(state): State<Arc<api::State>>,
    Json(request): Json<ConnectWallet>,
) -> Result<(StatusCode, Json<Wallet>), StatusCode> {
    let address = wallet::parse_qr_code(&request.address).ok_or(StatusCode::BAD_REQUEST)?;

    let account = state.indexer.account(address).await.map_err(|err| match err {
        indexer::Error::NotFound(_) => StatusCode::NOT_FOUND,
        indexer::Error::Http(_) => StatusCode::BAD_GATEWAY,
    })?;

    let connected = wallet::Wallet::new(request.name, request.kind, vec![account]);
    let mut registry = state.registry.lock().await;
    registry.add_wallet(connected.clone());
    persist(&state, &registry).await?;

    Ok((StatusCode::CREATED, Json(from_domain(&connected))))
}

pub async fn disconnect(
    State(state): State<Arc<api::State>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, StatusCode> {
    let mut registry = state.registry.lock().await;
    if !registry.remove_wallet(id) {
        return Err(StatusCode::NOT_FOUND);
    }
    persist(&state, &registry).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn refresh(
    State(state): State<Arc<api::State>>,
) -> Result<Json<Vec<Wallet>>, StatusCode> {
    state.refresh_wallets().await.map_err(|err| {
        tracing::error!(?err, "wallet refresh failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    let registry = state.registry.lock().await;
    Ok(Json(registry.wallets().iter().map(from_domain).collect()))
}

async fn persist(state: &api::State, registry: &wallet::Registry) -> Result<(), StatusCode> {
    state.store.save(registry.wallets()).await.map_err(|err| {
        tracing::error!(?err, "failed to persist wallets");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}
