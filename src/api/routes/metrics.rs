/// Prometheus text exposition of the gateway's metrics.
pub async fn metrics() -> String {
    prometheus::TextEncoder::new()
        .encode_to_string(&crate::infra::metrics::registry().gather())
        .unwrap_or_default()
}
