/// S3 对象键的最大字节长度
pub const MAX_KEY_BYTES: usize = 1024;

/// 将键前缀和文件名用单个正斜杠连接
///
/// 只去掉前缀末尾和文件名开头的斜杠，文件名其余部分（包括末尾斜杠）保持不变。
///
/// # 参数
///
/// * `prefix` - 键前缀
/// * `file_name` - 文件名
///
/// # 示例
///
/// ```
/// use presign_server::utils::path::join_prefix;
///
/// assert_eq!(join_prefix("uploads", "photo.jpg"), "uploads/photo.jpg");
/// assert_eq!(join_prefix("uploads/", "/photo.jpg"), "uploads/photo.jpg");
/// assert_eq!(join_prefix("uploads", "dir/"), "uploads/dir/");
/// ```
pub fn join_prefix(prefix: &str, file_name: &str) -> String {
    format!(
        "{}/{}",
        prefix.trim_end_matches('/'),
        file_name.trim_start_matches('/')
    )
}

/// 根据上传文件名生成对象键
///
/// 没有前缀时文件名原样作为对象键。
///
/// # 参数
///
/// * `prefix` - 可选的键前缀
/// * `file_name` - 客户端提交的文件名
///
/// # 返回值
///
/// 对象键；文件名为空或键超过 1024 字节时返回错误说明。
pub fn build_object_key(prefix: Option<&str>, file_name: &str) -> Result<String, String> {
    if file_name.trim().is_empty() {
        return Err("file_name must not be empty".to_string());
    }

    let key = match prefix {
        Some(_) if file_name.trim_matches('/').is_empty() => {
            return Err("file_name must name an object, not a directory".to_string());
        }
        Some(prefix) => join_prefix(prefix, file_name),
        None => file_name.to_string(),
    };

    if key.len() > MAX_KEY_BYTES {
        return Err(format!(
            "object key is {} bytes, the limit is {MAX_KEY_BYTES}",
            key.len()
        ));
    }

    Ok(key)
}
