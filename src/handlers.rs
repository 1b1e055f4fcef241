//! HTTP请求处理模块
//!
//! 此模块包含服务的全部路由处理器：
//! - 上传预签名 URL 生成
//! - 健康检查

pub mod health;
pub mod presign;

// 重新导出主要的公共接口
pub use health::handle_health;
pub use presign::handle_generate_presigned_url;
