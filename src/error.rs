//! HTTP 错误处理模块
//!
//! 所有处理器错误统一转换为 `{"detail": "..."}` 形式的 JSON 响应。

use crate::s3::SignError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

/// 处理器返回的错误
#[derive(Debug, Error)]
pub enum AppError {
    /// 未配置 `S3_BUCKET_NAME`
    #[error("Internal server error: S3 bucket not configured.")]
    BucketNotConfigured,

    #[error("Invalid file_name: {0}")]
    InvalidObjectKey(String),

    /// 签名客户端返回的错误，原样带回错误文本
    #[error("Could not generate the presigned URL: {0}")]
    Signing(String),

    /// 其它未预期的错误，只记录日志，不向客户端暴露细节
    #[error("Unexpected internal error.")]
    Unexpected(anyhow::Error),
}

/// 错误响应体
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

impl AppError {
    /// 错误对应的 HTTP 状态码
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidObjectKey(_) => StatusCode::BAD_REQUEST,
            AppError::BucketNotConfigured | AppError::Signing(_) | AppError::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<SignError> for AppError {
    fn from(err: SignError) -> Self {
        match err {
            SignError::Sdk(message) => AppError::Signing(message),
            other => AppError::Unexpected(anyhow::Error::new(other)),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let AppError::Unexpected(cause) = &self {
            error!("Unexpected error: {cause:#}");
        }

        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
