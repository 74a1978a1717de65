use axum::http::StatusCode;
use serde::Serialize;

use super::ApiSuccess;

pub async fn healthcheck() -> ApiSuccess<HealthcheckData> {
    ApiSuccess::new(StatusCode::OK, HealthcheckData { status: "OK" })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthcheckData {
    pub status: &'static str,
}
