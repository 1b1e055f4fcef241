//! 服务配置模块
//!
//! 启动时从环境变量读取一次配置，之后以只读方式在各处理器间共享。

use std::env;
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

/// 默认预签名 URL 有效期（秒）
pub const DEFAULT_EXPIRATION_SECS: u64 = 3600;

/// SigV4 允许的最长有效期：7 天
pub const MAX_EXPIRATION_SECS: u64 = 7 * 24 * 60 * 60;

/// 默认监听地址
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";

/// 默认请求超时（秒）
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// 配置加载错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("PRESIGNED_URL_EXPIRATION must be between 1 and 604800 seconds, got `{0}`")]
    InvalidExpiration(String),
    #[error("BIND_ADDR is not a valid socket address: `{0}`")]
    InvalidBindAddr(String),
    #[error("REQUEST_TIMEOUT_SECS must be a positive integer, got `{0}`")]
    InvalidTimeout(String),
    #[error("S3_FORCE_PATH_STYLE must be a boolean, got `{0}`")]
    InvalidFlag(String),
}

/// 服务配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// 目标存储桶，缺失时签名接口返回 500
    pub bucket: Option<String>,
    pub region: Option<String>,
    pub endpoint_url: Option<String>,
    pub force_path_style: bool,
    /// 预签名 URL 有效期
    pub expiration: Duration,
    /// 对象键前缀，如 `uploads`
    pub key_prefix: Option<String>,
    pub bind_addr: SocketAddr,
    pub request_timeout: Duration,
}

impl Config {
    /// 从进程环境变量加载配置。
    ///
    /// # Errors
    ///
    /// 当任一变量格式非法时返回 [`ConfigError`]。
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 通过任意查找函数加载配置。
    ///
    /// # 参数
    ///
    /// * `lookup` - 根据变量名返回变量值的函数。
    ///
    /// # 返回值
    ///
    /// 解析后的配置；空白值视为未设置。
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let expiration = match get("PRESIGNED_URL_EXPIRATION") {
            Some(raw) => parse_expiration(&raw)?,
            None => Duration::from_secs(DEFAULT_EXPIRATION_SECS),
        };

        let bind_addr = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr(bind_addr.clone()))?;

        let request_timeout = match get("REQUEST_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidTimeout(raw)),
            },
            None => Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        };

        let force_path_style = match get("S3_FORCE_PATH_STYLE") {
            Some(raw) => parse_flag(&raw)?,
            None => false,
        };

        Ok(Self {
            bucket: get("S3_BUCKET_NAME"),
            region: get("AWS_REGION"),
            endpoint_url: get("S3_ENDPOINT"),
            force_path_style,
            expiration,
            key_prefix: get("UPLOAD_KEY_PREFIX"),
            bind_addr,
            request_timeout,
        })
    }
}

fn parse_expiration(raw: &str) -> Result<Duration, ConfigError> {
    match raw.parse::<u64>() {
        Ok(secs) if (1..=MAX_EXPIRATION_SECS).contains(&secs) => Ok(Duration::from_secs(secs)),
        _ => Err(ConfigError::InvalidExpiration(raw.to_string())),
    }
}

fn parse_flag(raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag(raw.to_string())),
    }
}
