//! S3模块
//!
//! 该模块负责创建 S3 客户端以及生成上传用的预签名 URL。

// 声明子模块
pub mod client;
pub mod presign;

// 重新导出常用的类型和函数
pub use client::build_client;
pub use presign::{S3Signer, SignError, UrlSigner};
