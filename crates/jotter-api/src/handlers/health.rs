//! Liveness probe.

use axum::Json;
use serde::Serialize;

use crate::envelope::Envelope;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn health_check() -> Json<Envelope<HealthStatus>> {
    Json(Envelope::success(HealthStatus {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    }))
}
