use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::{debug, info};

use crate::config::BackendArgs;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

pub async fn health() -> Json<HealthStatus> {
    debug!("health check");
    Json(HealthStatus::ok())
}

pub fn router() -> Router {
    Router::new().route("/api/health", get(health))
}

pub async fn serve(args: &BackendArgs) -> anyhow::Result<()> {
    let listener = TcpListener::bind((args.host.as_str(), args.port)).await?;

    info!("Backend running on port {}", listener.local_addr()?.port());

    axum::serve(listener, router()).await?;
    Ok(())
}
