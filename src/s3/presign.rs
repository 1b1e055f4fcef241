//! S3预签名URL模块
//!
//! 该模块负责为 PUT 上传生成预签名 URL。签名在本地完成，不发起网络请求。

use async_trait::async_trait;
use aws_sdk_s3::Client;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::presigning::{PresigningConfig, PresigningConfigError};
use std::time::Duration;
use thiserror::Error;

/// 签名失败的原因
#[derive(Debug, Error)]
pub enum SignError {
    /// 有效期超出 SigV4 允许的范围
    #[error("invalid presigning config: {0}")]
    Presigning(#[from] PresigningConfigError),

    #[error("{0}")]
    Sdk(String),
}

/// 上传 URL 签名器
///
/// 处理器只依赖这个 trait，测试时可替换为 mock 实现。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlSigner: Send + Sync {
    /// 为 `bucket` 中的 `key` 生成有效期为 `expires_in` 的 PUT 预签名 URL。
    async fn presign_put(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> Result<String, SignError>;
}

/// 基于 AWS SDK 的签名器
#[derive(Debug, Clone)]
pub struct S3Signer {
    client: Client,
}

impl S3Signer {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UrlSigner for S3Signer {
    async fn presign_put(
        &self,
        bucket: &str,
        key: &str,
        expires_in: Duration,
    ) -> Result<String, SignError> {
        let presigning_config = PresigningConfig::expires_in(expires_in)?;

        let presigned_request = self
            .client
            .put_object()
            .bucket(bucket)
            .key(key)
            .presigned(presigning_config)
            .await
            .map_err(|e| SignError::Sdk(DisplayErrorContext(&e).to_string()))?;

        Ok(presigned_request.uri().to_string())
    }
}
