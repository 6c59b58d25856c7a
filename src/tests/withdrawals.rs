use {crate::tests::Gateway, reqwest::StatusCode};

const RECIPIENT: &str = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045";

#[tokio::test]
async fn validates_form_fields() {
    let gateway = Gateway::start_standalone().await;

    let (status, validation) = gateway
        .post(
            "/withdrawals/validate",
            serde_json::json!({
                "recipient": RECIPIENT,
                "amount": "1.5",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        validation,
        serde_json::json!({ "recipient": true, "amount": true }),
    );

    let (status, validation) = gateway
        .post(
            "/withdrawals/validate",
            serde_json::json!({
                "recipient": "0x1234",
                "amount": "-1",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        validation,
        serde_json::json!({ "recipient": false, "amount": false }),
    );
}

#[tokio::test]
async fn estimates_gas_for_a_withdrawal() {
    let gateway = Gateway::start_standalone().await;

    let (status, estimate) = gateway
        .post(
            "/withdrawals/estimate",
            serde_json::json!({
                "recipient": RECIPIENT,
                "amount": "0.25",
            }),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    // The mock node quotes 1 Gwei and a plain transfer's 21000 gas.
    assert_eq!(
        estimate,
        serde_json::json!({
            "gas-price": "1 Gwei",
            "gas-limit": "21000",
            "estimated-fee": "0.000021",
        }),
    );

    // Whitespace-padded amounts are read the way a form field would be.
    let (status, _) = gateway
        .post(
            "/withdrawals/estimate",
            serde_json::json!({
                "recipient": RECIPIENT,
                "amount": " 0.25",
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn rejects_invalid_estimate_input() {
    let gateway = Gateway::start_standalone().await;

    let forms = [
        serde_json::json!({ "recipient": "not-an-address", "amount": "1" }),
        serde_json::json!({ "recipient": RECIPIENT, "amount": "0" }),
        serde_json::json!({ "recipient": RECIPIENT, "amount": "1.2345678901234567890" }),
        serde_json::json!({ "recipient": RECIPIENT, "amount": "1", "from": "0xbad" }),
    ];
    for form in forms {
        let (status, _) = gateway.post("/withdrawals/estimate", form).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
