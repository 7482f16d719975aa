//! # Authentication Endpoints
//!
//! Verification code, code login, and password login.

use reqwest::Response;
use serde::de::DeserializeOwned;
use shared::{
    mask_identity, AuthResponse, CodeLoginRequest, CodeRequest, CodeSentResponse, ErrorResponse,
    PasswordLoginRequest,
};

use super::client::ApiClient;
use crate::core::error::{AppError, Result};

pub(crate) const REQUEST_CODE_PATH: &str = "/auth/code";
pub(crate) const CODE_LOGIN_PATH: &str = "/auth/login/code";
pub(crate) const PASSWORD_LOGIN_PATH: &str = "/auth/login/password";

/// Ask the service to send a one-time code.
#[tracing::instrument(skip(client, request), fields(identity = %mask_identity(&request.identity)))]
pub async fn request_code(client: &ApiClient, request: CodeRequest) -> Result<CodeSentResponse> {
    tracing::info!("Requesting verification code");
    let start = std::time::Instant::now();

    let response = client
        .client
        .post(client.endpoint(REQUEST_CODE_PATH))
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Code request network error");
            AppError::from(e)
        })?;

    let result = decode::<CodeSentResponse>(response).await;
    tracing::info!(
        duration_ms = start.elapsed().as_millis(),
        success = result.is_ok(),
        "Code request finished"
    );
    result
}

/// Sign in (or register) with a one-time code.
#[tracing::instrument(skip(client, request), fields(identity = %mask_identity(&request.identity)))]
pub async fn login_by_code(client: &ApiClient, request: CodeLoginRequest) -> Result<AuthResponse> {
    tracing::info!("Attempting code login");
    let start = std::time::Instant::now();

    let response = client
        .client
        .post(client.endpoint(CODE_LOGIN_PATH))
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Code login network error");
            AppError::from(e)
        })?;

    let result = decode::<AuthResponse>(response).await;
    if result.is_ok() {
        tracing::info!(duration_ms = start.elapsed().as_millis(), "Code login successful");
    }
    result
}

/// Sign in with email and password.
#[tracing::instrument(skip(client, request), fields(identity = %mask_identity(&request.identity)))]
pub async fn login_by_password(client: &ApiClient, request: PasswordLoginRequest) -> Result<AuthResponse> {
    tracing::info!("Attempting password login");
    let start = std::time::Instant::now();

    let response = client
        .client
        .post(client.endpoint(PASSWORD_LOGIN_PATH))
        .json(&request)
        .send()
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Password login network error");
            AppError::from(e)
        })?;

    let result = decode::<AuthResponse>(response).await;
    if result.is_ok() {
        tracing::info!(duration_ms = start.elapsed().as_millis(), "Password login successful");
    }
    result
}

/// Decode a success body as `T`, anything else as [`ErrorResponse`].
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();

    if status.is_success() {
        return response.json::<T>().await.map_err(|e| {
            tracing::error!(error = %e, "Response parse error");
            AppError::Api(format!("Failed to parse response: {}", e))
        });
    }

    let error = response
        .json::<ErrorResponse>()
        .await
        .map(|body| body.error)
        .unwrap_or_else(|_| format!("Request failed with status {}", status));

    tracing::warn!(status = status.as_u16(), error = %error, "Identity service rejected request");
    Err(AppError::Api(error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one canned HTTP response and hand back the raw request.
    async fn serve_once(status_line: &'static str, body: &'static str) -> (ApiClient, tokio::task::JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind in test");
        let addr = listener.local_addr().expect("local addr in test");

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.expect("accept in test");
            let mut raw = Vec::new();
            let mut buf = [0u8; 1024];
            loop {
                let n = socket.read(&mut buf).await.expect("read in test");
                if n == 0 {
                    break;
                }
                raw.extend_from_slice(&buf[..n]);
                if request_complete(&raw) {
                    break;
                }
            }

            let response = format!(
                "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.expect("write in test");
            socket.shutdown().await.ok();
            String::from_utf8_lossy(&raw).into_owned()
        });

        let config = Config {
            api_base_url: format!("http://{}", addr),
            ..Config::default()
        };
        (ApiClient::new(&config), handle)
    }

    fn request_complete(raw: &[u8]) -> bool {
        let text = String::from_utf8_lossy(raw);
        let Some(header_end) = text.find("\r\n\r\n") else {
            return false;
        };
        let content_length = text[..header_end]
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                name.eq_ignore_ascii_case("content-length")
                    .then(|| value.trim().parse::<usize>().ok())
                    .flatten()
            })
            .unwrap_or(0);
        raw.len() >= header_end + 4 + content_length
    }

    #[tokio::test]
    async fn test_code_login_posts_json_and_decodes_session() {
        let body = r#"{"user":{"id":"7","username":"bob"},"token":"t-7","message":"ok"}"#;
        let (client, server) = serve_once("HTTP/1.1 200 OK", body).await;

        let response = login_by_code(
            &client,
            CodeLoginRequest {
                identity: "bob@example.com".to_string(),
                code: "123456".to_string(),
            },
        )
        .await
        .expect("login should succeed in test");

        assert_eq!(response.token, "t-7");
        assert_eq!(response.user.username, "bob");

        let raw = server.await.expect("server task in test");
        assert!(raw.starts_with("POST /auth/login/code "));
        assert!(raw.contains(r#""code":"123456""#));
    }

    #[tokio::test]
    async fn test_rejection_surfaces_service_error_text() {
        let (client, _server) = serve_once("HTTP/1.1 401 Unauthorized", r#"{"error":"Invalid code"}"#).await;

        let result = login_by_code(
            &client,
            CodeLoginRequest {
                identity: "13800138000".to_string(),
                code: "000000".to_string(),
            },
        )
        .await;

        assert_eq!(result, Err(AppError::Api("Invalid code".to_string())));
    }

    #[tokio::test]
    async fn test_unparseable_error_body_falls_back_to_status() {
        let (client, _server) = serve_once("HTTP/1.1 502 Bad Gateway", "upstream down").await;

        let result = request_code(
            &client,
            CodeRequest {
                identity: "13800138000".to_string(),
            },
        )
        .await;

        match result {
            Err(AppError::Api(msg)) => assert!(msg.starts_with("Request failed with status 502")),
            other => panic!("Expected status fallback error in test, got {:?}", other),
        }
    }
}
