use {
    crate::{api, domain::wallet, infra::metrics},
    axum::{
        Json,
        extract::{Path, State},
    },
    base64::prelude::*,
    hyper::StatusCode,
    serde::{Deserialize, Serialize},
    std::sync::Arc,
    uuid::Uuid,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct QueueRequest {
    /// Base64-encoded unsigned transaction bytes.
    pub unsigned_txn: String,
    pub description: String,
    pub signer_address: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SignatureRequest {
    pub id: Uuid,
    pub unsigned_txn: String,
    pub description: String,
    pub signer_address: String,
}

fn from_domain(request: &wallet::SignatureRequest) -> SignatureRequest {
    SignatureRequest {
        id: request.id,
        unsigned_txn: request.unsigned_txn.clone(),
        description: request.description.clone(),
        signer_address: request.signer_address.clone(),
    }
}

pub async fn list(State(state): State<Arc<api::State>>) -> Json<Vec<SignatureRequest>> {
    let registry = state.registry.lock().await;
    Json(registry.pending_requests().iter().map(from_domain).collect())
}

pub async fn queue(
    State(state): State<Arc<api::State>>,
    Json(request): Json<QueueRequest>,
) -> Result<(StatusCode, Json<SignatureRequest>), StatusCode> {
    if !wallet::is_valid_algorand_address(&request.signer_address) {
        return Err(StatusCode::BAD_REQUEST);
    }
    if BASE64_STANDARD.decode(&request.unsigned_txn).is_err() {
        return Err(StatusCode::BAD_REQUEST);
    }

    let queued = wallet::SignatureRequest::new(
        request.unsigned_txn,
        request.description,
        request.signer_address,
    );
    metrics::signature_request();

    let mut registry = state.registry.lock().await;
    registry.queue_request(queued.clone());
    Ok((StatusCode::CREATED, Json(from_domain(&queued))))
}

pub async fn resolve(
    State(state): State<Arc<api::State>>,
    Path(id): Path<Uuid>,
) -> StatusCode {
    let mut registry = state.registry.lock().await;
    if registry.resolve_request(id) {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}
