use crate::config::Config;
use crate::error::AppError;
use crate::s3::UrlSigner;
use crate::utils::path::build_object_key;
use axum::{
    Json,
    extract::{Extension, Query},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};

/// `/generate-presigned-url` 的查询参数
#[derive(Debug, Deserialize)]
pub struct PresignQuery {
    /// 上传到存储桶后的文件名（含扩展名）
    pub file_name: String,
}

/// 预签名上传结果
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PresignedUpload {
    pub presigned_url: String,
    pub object_key: String,
}

/// 生成用于直接上传文件到存储桶的预签名 PUT URL。
///
/// 客户端拿到 URL 后直接向对象存储发起 PUT 请求，数据不经过本服务。
///
/// # 参数
///
/// * `Extension(config)` - 服务配置。
/// * `Extension(signer)` - URL 签名器。
/// * `Query(query)` - 查询参数，`file_name` 必填。
///
/// # 返回值
///
/// 成功时返回预签名 URL 和对象键；未配置存储桶或签名失败时返回 500。
pub async fn handle_generate_presigned_url(
    Extension(config): Extension<Arc<Config>>,
    Extension(signer): Extension<Arc<dyn UrlSigner>>,
    Query(query): Query<PresignQuery>,
) -> Result<Json<PresignedUpload>, AppError> {
    let Some(bucket) = config.bucket.as_deref() else {
        error!("S3_BUCKET_NAME is not set in the environment");
        return Err(AppError::BucketNotConfigured);
    };

    let object_key = build_object_key(config.key_prefix.as_deref(), &query.file_name)
        .map_err(AppError::InvalidObjectKey)?;

    let presigned_url = signer
        .presign_put(bucket, &object_key, config.expiration)
        .await
        .map_err(|e| {
            error!(object_key = %object_key, "Failed to generate presigned URL: {e}");
            AppError::from(e)
        })?;

    info!(object_key = %object_key, bucket = %bucket, "Presigned URL generated");

    Ok(Json(PresignedUpload {
        presigned_url,
        object_key,
    }))
}
