use {
    crate::{
        api,
        domain::{eth, fees, withdraw},
        infra::metrics,
        util::conv,
    },
    axum::{Json, extract::State},
    bigdecimal::BigDecimal,
    hyper::StatusCode,
    serde::{Deserialize, Serialize},
    std::sync::Arc,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct WithdrawalForm {
    /// The `0x`-prefixed recipient address.
    pub recipient: String,
    /// The amount to withdraw, in the chain's display unit.
    pub amount: String,
    /// The sender address, if known. Improves the gas limit estimate.
    #[serde(default)]
    pub from: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Validation {
    pub recipient: bool,
    pub amount: bool,
}

/// Per-field validation of a withdrawal form. Translating `false` into
/// user-facing error text is the caller's concern.
pub async fn validate(Json(form): Json<WithdrawalForm>) -> Json<Validation> {
    Json(Validation {
        recipient: withdraw::is_valid_address(&form.recipient),
        amount: withdraw::is_valid_amount(&form.amount),
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct GasEstimate {
    pub gas_price: String,
    pub gas_limit: String,
    pub estimated_fee: String,
}

pub async fn estimate(
    State(state): State<Arc<api::State>>,
    Json(form): Json<WithdrawalForm>,
) -> Result<Json<GasEstimate>, StatusCode> {
    if !withdraw::is_valid_address(&form.recipient) || !withdraw::is_valid_amount(&form.amount) {
        return Err(StatusCode::BAD_REQUEST);
    }
    let to = parse_address(&form.recipient).ok_or(StatusCode::BAD_REQUEST)?;
    let from = match &form.from {
        Some(from) => Some(parse_address(from).ok_or(StatusCode::BAD_REQUEST)?),
        None => None,
    };
    let amount: BigDecimal = withdraw::numeric_prefix(&form.amount)
        .and_then(|prefix| prefix.parse().ok())
        .ok_or(StatusCode::BAD_REQUEST)?;
    let value = conv::decimal_to_ether(&amount).ok_or(StatusCode::BAD_REQUEST)?;

    let (gas_price, gas_limit) = state.node.fee_data(from, to, value).await.map_err(|err| {
        tracing::warn!(?err, "fee data lookup failed");
        StatusCode::BAD_GATEWAY
    })?;
    metrics::gas_estimate();

    let estimate = fees::GasEstimate::new(gas_price, gas_limit);
    Ok(Json(GasEstimate {
        gas_price: estimate.gas_price,
        gas_limit: estimate.gas_limit,
        estimated_fee: estimate.estimated_fee,
    }))
}

/// Parses an already-validated address into its binary form.
fn parse_address(address: &str) -> Option<eth::Address> {
    let bytes = hex::decode(address.strip_prefix("0x")?).ok()?;
    (bytes.len() == 20).then(|| eth::Address::from_slice(&bytes))
}
