use hyper::StatusCode;

pub async fn healthz() -> StatusCode {
    StatusCode::OK
}
