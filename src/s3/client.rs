//! S3客户端模块
//!
//! 凭证由 AWS SDK 的默认提供链读取（`AWS_ACCESS_KEY_ID`、`AWS_SECRET_ACCESS_KEY`、
//! `AWS_SESSION_TOKEN`、共享配置文件或实例角色），这里只处理区域和端点。

use crate::config::Config;
use aws_config::BehaviorVersion;
use aws_config::Region;
use aws_config::meta::region::RegionProviderChain;
use aws_sdk_s3::Client;
use tracing::info;

/// 根据服务配置创建 S3 客户端。
///
/// # 参数
///
/// * `config` - 服务配置，提供区域、自定义端点和路径风格开关。
///
/// # 返回值
///
/// 配置好的 `aws_sdk_s3::Client`。
pub async fn build_client(config: &Config) -> Client {
    let region_provider =
        RegionProviderChain::first_try(config.region.clone().map(Region::new)).or_default_provider();

    let mut loader = aws_config::defaults(BehaviorVersion::latest()).region(region_provider);
    if let Some(endpoint) = &config.endpoint_url {
        loader = loader.endpoint_url(endpoint);
    }
    let sdk_config = loader.load().await;

    let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
        .force_path_style(config.force_path_style)
        .build();

    info!(
        region = ?s3_config.region(),
        endpoint = config.endpoint_url.as_deref().unwrap_or("default"),
        force_path_style = config.force_path_style,
        "S3 client initialized"
    );

    Client::from_conf(s3_config)
}
