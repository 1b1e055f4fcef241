use axum::body::{Body, to_bytes};
use axum_test::TestServer;
use http::{Request, StatusCode, header};
use presign_server::config::Config;
use presign_server::error::ErrorBody;
use presign_server::handlers::health::HealthStatus;
use presign_server::handlers::presign::PresignedUpload;
use presign_server::router;
use presign_server::s3::{S3Signer, UrlSigner};
use presign_server::utils::path::MAX_KEY_BYTES;
use std::sync::Arc;
use std::time::Duration;
use tokio_test::assert_ok;
use tower::util::ServiceExt;

use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};

fn test_config(bucket: Option<&str>) -> Config {
    Config {
        bucket: bucket.map(str::to_string),
        region: Some("us-east-1".to_string()),
        endpoint_url: None,
        force_path_style: false,
        expiration: Duration::from_secs(900),
        key_prefix: None,
        bind_addr: "127.0.0.1:0".parse().unwrap(),
        request_timeout: Duration::from_secs(5),
    }
}

/// 使用静态凭证的真实签名器，签名过程不访问网络
fn test_signer(endpoint: Option<&str>) -> Arc<dyn UrlSigner> {
    let mut builder = aws_sdk_s3::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new("us-east-1"))
        .credentials_provider(Credentials::new(
            "AKIDEXAMPLE",
            "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY",
            None,
            None,
            "integration-test",
        ));
    if let Some(endpoint) = endpoint {
        builder = builder.endpoint_url(endpoint).force_path_style(true);
    }
    Arc::new(S3Signer::new(aws_sdk_s3::Client::from_conf(builder.build())))
}

fn test_app(config: Config) -> axum::Router {
    router(Arc::new(config), test_signer(None))
}

/// 集成测试：健康检查始终返回 ok
///
/// 即使没有配置存储桶也应返回 200
#[tokio::test]
async fn test_health_returns_ok() {
    let app = test_app(test_config(None));

    let response = app
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let health: HealthStatus = serde_json::from_slice(&body).unwrap();
    assert_eq!(health.status, "ok");
}

/// 集成测试：生成的 URL 包含对象键并在配置的有效期内过期
#[tokio::test]
async fn test_presigned_url_contains_key_and_expiration() {
    let server = assert_ok!(TestServer::new(test_app(test_config(Some("uploads-bucket")))));

    let response = server
        .get("/generate-presigned-url")
        .add_query_param("file_name", "photo.jpg")
        .await;

    response.assert_status_ok();
    let upload: PresignedUpload = response.json();
    assert_eq!(upload.object_key, "photo.jpg");
    assert!(upload.presigned_url.starts_with("https://uploads-bucket.s3."));
    assert!(upload.presigned_url.contains("/photo.jpg?"));
    assert!(upload.presigned_url.contains("x-id=PutObject"));
    assert!(upload.presigned_url.contains("X-Amz-Expires=900"));
    assert!(upload.presigned_url.contains("X-Amz-Signature="));
}

/// 集成测试：自定义端点使用路径风格地址
#[tokio::test]
async fn test_presigned_url_with_custom_endpoint() {
    let app = router(
        Arc::new(test_config(Some("uploads-bucket"))),
        test_signer(Some("http://localhost:9000")),
    );
    let server = assert_ok!(TestServer::new(app));

    let response = server
        .get("/generate-presigned-url")
        .add_query_param("file_name", "docs/report.pdf")
        .await;

    response.assert_status_ok();
    let upload: PresignedUpload = response.json();
    assert!(
        upload
            .presigned_url
            .starts_with("http://localhost:9000/uploads-bucket/docs/report.pdf?")
    );
}

/// 集成测试：键前缀会出现在对象键和 URL 中
#[tokio::test]
async fn test_presigned_url_with_key_prefix() {
    let mut config = test_config(Some("uploads-bucket"));
    config.key_prefix = Some("incoming".to_string());
    let server = assert_ok!(TestServer::new(test_app(config)));

    let response = server
        .get("/generate-presigned-url")
        .add_query_param("file_name", "photo.jpg")
        .await;

    response.assert_status_ok();
    let upload: PresignedUpload = response.json();
    assert_eq!(upload.object_key, "incoming/photo.jpg");
    assert!(upload.presigned_url.contains("/incoming/photo.jpg?"));
}

/// 集成测试：未配置存储桶时返回 500
#[tokio::test]
async fn test_missing_bucket_returns_server_error() {
    let server = assert_ok!(TestServer::new(test_app(test_config(None))));

    let response = server
        .get("/generate-presigned-url")
        .add_query_param("file_name", "photo.jpg")
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let error: ErrorBody = response.json();
    assert!(error.detail.contains("S3 bucket not configured"));
}

/// 集成测试：缺少 file_name 参数时由查询提取器拒绝
#[tokio::test]
async fn test_missing_file_name_is_bad_request() {
    let app = test_app(test_config(Some("uploads-bucket")));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/generate-presigned-url")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

/// 集成测试：空文件名返回 400
#[tokio::test]
async fn test_empty_file_name_is_bad_request() {
    let server = assert_ok!(TestServer::new(test_app(test_config(Some("uploads-bucket")))));

    let response = server
        .get("/generate-presigned-url")
        .add_query_param("file_name", "")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

/// 集成测试：对象键超过 1024 字节时返回 400
#[tokio::test]
async fn test_oversized_file_name_is_bad_request() {
    let server = assert_ok!(TestServer::new(test_app(test_config(Some("uploads-bucket")))));
    let file_name = "a".repeat(MAX_KEY_BYTES + 1);

    let response = server
        .get("/generate-presigned-url")
        .add_query_param("file_name", &file_name)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let error: ErrorBody = response.json();
    assert!(error.detail.contains("1025 bytes"));
}

/// 集成测试：测试CORS支持
#[tokio::test]
async fn test_cors_support() {
    let app = test_app(test_config(None));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .header(header::ORIGIN, "http://localhost:8080")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}

/// 集成测试：未知路由返回 404
#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = test_app(test_config(Some("uploads-bucket")));

    let response = app
        .oneshot(Request::builder().uri("/upload").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
