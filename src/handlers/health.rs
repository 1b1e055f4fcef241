use axum::Json;
use serde::{Deserialize, Serialize};

/// 健康检查响应体
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
}

/// 存活探针，不检查任何外部依赖。
pub async fn handle_health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok".to_string(),
    })
}
