use std::sync::OnceLock;

/// Metrics for the wallet gateway.
#[derive(Debug, Clone, prometheus_metric_storage::MetricStorage)]
#[metric(subsystem = "wallet_gateway")]
struct Metrics {
    /// Total number of account lookups sent to the indexer.
    indexer_requests: prometheus::IntCounter,

    /// Indexer lookups that failed.
    #[metric(labels("reason"))]
    indexer_errors: prometheus::IntCounterVec,

    /// Gas estimates served.
    gas_estimates: prometheus::IntCounter,

    /// Signature requests queued.
    signature_requests: prometheus::IntCounter,
}

pub fn indexer_request() {
    get().indexer_requests.inc();
}

pub fn indexer_error(reason: &str) {
    get().indexer_errors.with_label_values(&[reason]).inc();
}

pub fn gas_estimate() {
    get().gas_estimates.inc();
}

pub fn signature_request() {
    get().signature_requests.inc();
}

/// The registry backing the `/metrics` endpoint.
pub fn registry() -> &'static prometheus::Registry {
    storage().registry()
}

fn storage() -> &'static prometheus_metric_storage::StorageRegistry {
    static STORAGE: OnceLock<prometheus_metric_storage::StorageRegistry> = OnceLock::new();
    STORAGE
        .get_or_init(|| prometheus_metric_storage::StorageRegistry::new(prometheus::Registry::new()))
}

/// Get the metrics instance.
fn get() -> &'static Metrics {
    Metrics::instance(storage()).expect("unexpected error getting metrics instance")
}
