use {crate::tests::Gateway, reqwest::StatusCode};

#[tokio::test]
async fn healthz_responds() {
    let gateway = Gateway::start_standalone().await;

    let (status, _) = gateway.get("/healthz").await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn reports_network_metadata() {
    let gateway = Gateway::start_standalone().await;

    let (status, network) = gateway.get("/network").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        network,
        serde_json::json!({
            "chain-id": 1,
            "name": "Ethereum Mainnet",
            "currency": {
                "name": "Ether",
                "symbol": "ETH",
                "decimals": 18,
            },
            "block-explorer-url": "https://etherscan.io",
            "testnet": false,
        }),
    );
}

#[tokio::test]
async fn exposes_prometheus_metrics() {
    let gateway = Gateway::start_standalone().await;
    // Counters only show up in the registry once something has been counted.
    let (status, _) = gateway
        .post(
            "/signature-requests",
            serde_json::json!({
                "unsigned-txn": "dGVzdA==",
                "description": "metrics probe",
                "signer-address": "A".repeat(58),
            }),
        )
        .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, metrics) = gateway.get_text("/metrics").await;

    assert_eq!(status, StatusCode::OK);
    assert!(metrics.contains("wallet_gateway_signature_requests"));
}
