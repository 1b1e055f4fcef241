//! 预签名上传 URL 服务库
//!
//! 这是一个基于Axum的轻量服务，主要功能包括：
//! - 为客户端生成限时的 S3 PUT 预签名 URL，文件直接上传到存储桶
//! - 提供健康检查接口
//! - 支持CORS跨域请求

pub mod config;
pub mod error;
pub mod handlers;
pub mod s3;
pub mod utils;

use axum::{Extension, Router, routing::get};
use config::Config;
use http::{Method, StatusCode};
use s3::{S3Signer, UrlSigner};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{AllowHeaders, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// 使用给定的配置和签名器组装路由
///
/// # 参数
///
/// * `config` - 服务配置。
/// * `signer` - 预签名 URL 签名器。
///
/// # Returns
///
/// 返回配置好的Axum Router实例
pub fn router(config: Arc<Config>, signer: Arc<dyn UrlSigner>) -> Router {
    // 配置 CORS
    let cors = CorsLayer::permissive()
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(AllowHeaders::any());

    Router::new()
        .route(
            "/generate-presigned-url",
            get(handlers::handle_generate_presigned_url),
        )
        .route("/health", get(handlers::handle_health))
        .layer(timeout_layer(config.request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(signer))
        .layer(Extension(config))
}

/// 请求超时中间件，超时返回 408
fn timeout_layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}

/// 创建并配置Axum应用程序
///
/// 根据配置初始化 S3 客户端，并挂载追踪、CORS 和超时中间件。
pub async fn app(config: Config) -> Router {
    let s3_client = s3::build_client(&config).await;
    let signer: Arc<dyn UrlSigner> = Arc::new(S3Signer::new(s3_client));

    router(Arc::new(config), signer)
}
