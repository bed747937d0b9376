//! # HTTP client for the crypto service
//!
//! [`CryptoApi`] is the seam between the UI and the network: the UI only ever
//! calls [`CryptoApi::send`], so tests can substitute a scripted
//! implementation. [`HttpCryptoApi`] is the real one, built on `reqwest`
//! (which compiles to `fetch` on `wasm32`).
//!
//! Decoding is split out into [`decode_response`] so that the status/body
//! rules can be tested without a server:
//!
//! 1. Non-2xx → [`ApiError::Status`] carrying the body's `message`, if any.
//! 2. 2xx without `success: true` → [`ApiError::Rejected`].
//! 3. 2xx with `success: true` but a body that does not match the mode's
//!    `data` shape → [`ApiError::Decode`].

use serde::de::DeserializeOwned;
use serde::Deserialize;
use store::config::ApiConfig;

use crate::error::ApiError;
use crate::models::{CryptoOutput, CryptoRequest, Mode, Statistic};

/// Async interface to the remote encrypt/decrypt service.
pub trait CryptoApi {
    fn send(
        &self,
        mode: Mode,
        request: &CryptoRequest,
    ) -> impl std::future::Future<Output = Result<CryptoOutput, ApiError>>;
}

/// Success envelope; `data` is decoded per mode once `success` is checked.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    success: bool,
    data: Option<serde_json::Value>,
    timestamp: Option<i64>,
}

/// Error body of non-2xx responses.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct EncryptData {
    encrypted: String,
    word_count: u64,
}

#[derive(Debug, Deserialize)]
struct DecryptData {
    decrypted: String,
    length: u64,
}

fn decode_data<T: DeserializeOwned>(data: Option<serde_json::Value>) -> Result<T, ApiError> {
    let data = data.ok_or_else(|| ApiError::Decode("missing data".to_string()))?;
    serde_json::from_value(data).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Turn a raw HTTP status and body into the outcome of a `mode` request.
pub fn decode_response(mode: Mode, status: u16, body: &str) -> Result<CryptoOutput, ApiError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorBody>(body)
            .unwrap_or_default()
            .message
            .filter(|m| !m.is_empty());
        return Err(ApiError::Status { status, message });
    }

    let envelope: Envelope =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if !envelope.success {
        return Err(ApiError::Rejected);
    }

    let (text, statistic) = match mode {
        Mode::Encrypt => {
            let data: EncryptData = decode_data(envelope.data)?;
            (data.encrypted, Statistic::WordCount(data.word_count))
        }
        Mode::Decrypt => {
            let data: DecryptData = decode_data(envelope.data)?;
            (data.decrypted, Statistic::Length(data.length))
        }
    };

    Ok(CryptoOutput {
        mode,
        text,
        statistic,
        timestamp: envelope.timestamp,
    })
}

/// `reqwest`-backed [`CryptoApi`].
#[derive(Clone, Debug)]
pub struct HttpCryptoApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCryptoApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &ApiConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    /// Full URL of the endpoint for `mode`.
    pub fn endpoint_url(&self, mode: Mode) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), mode.endpoint())
    }
}

impl CryptoApi for HttpCryptoApi {
    async fn send(&self, mode: Mode, request: &CryptoRequest) -> Result<CryptoOutput, ApiError> {
        let url = self.endpoint_url(mode);
        tracing::debug!(%url, ?request, "sending {mode} request");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let result = decode_response(mode, status, &body);
        if let Err(ref e) = result {
            tracing::error!("API Error: {e}");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_encrypt_success() {
        let body = r#"{"success":true,"data":{"encrypted":"xxxx yyyy","word_count":2},"timestamp":1700000000}"#;
        let output = decode_response(Mode::Encrypt, 200, body).unwrap();
        assert_eq!(
            output,
            CryptoOutput {
                mode: Mode::Encrypt,
                text: "xxxx yyyy".to_string(),
                statistic: Statistic::WordCount(2),
                timestamp: Some(1_700_000_000),
            }
        );
    }

    #[test]
    fn test_decode_decrypt_success() {
        let body = r#"{"success":true,"data":{"decrypted":"hello world","length":11},"timestamp":1700000000}"#;
        let output = decode_response(Mode::Decrypt, 200, body).unwrap();
        assert_eq!(output.text, "hello world");
        assert_eq!(output.statistic, Statistic::Length(11));
    }

    #[test]
    fn test_missing_timestamp_is_allowed() {
        let body = r#"{"success":true,"data":{"decrypted":"x","length":1}}"#;
        let output = decode_response(Mode::Decrypt, 200, body).unwrap();
        assert!(output.timestamp.is_none());
    }

    #[test]
    fn test_success_flag_false_or_missing_is_rejected() {
        let body = r#"{"success":false,"data":{"encrypted":"a","word_count":1}}"#;
        assert_eq!(decode_response(Mode::Encrypt, 200, body), Err(ApiError::Rejected));

        let body = r#"{"data":{"encrypted":"a","word_count":1}}"#;
        assert_eq!(decode_response(Mode::Encrypt, 200, body), Err(ApiError::Rejected));
    }

    #[test]
    fn test_data_for_wrong_mode_is_decode_error() {
        let body = r#"{"success":true,"data":{"encrypted":"a","word_count":1}}"#;
        assert!(matches!(
            decode_response(Mode::Decrypt, 200, body),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn test_unparseable_success_body() {
        assert!(matches!(
            decode_response(Mode::Encrypt, 200, "<html>"),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn test_error_status_carries_message() {
        let err = decode_response(Mode::Encrypt, 403, r#"{"message":"Origin not allowed"}"#)
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 403,
                message: Some("Origin not allowed".to_string()),
            }
        );
    }

    #[test]
    fn test_error_status_without_usable_message() {
        for body in ["", "not json", "{}", r#"{"message":""}"#] {
            assert_eq!(
                decode_response(Mode::Decrypt, 500, body),
                Err(ApiError::Status {
                    status: 500,
                    message: None,
                })
            );
        }
    }

    #[test]
    fn test_endpoint_url() {
        let api = HttpCryptoApi::new("https://smht.eu/sifra");
        assert_eq!(api.endpoint_url(Mode::Encrypt), "https://smht.eu/sifra/encrypt");
        assert_eq!(api.endpoint_url(Mode::Decrypt), "https://smht.eu/sifra/decrypt");

        let api = HttpCryptoApi::new("http://localhost:8080/");
        assert_eq!(api.endpoint_url(Mode::Encrypt), "http://localhost:8080/encrypt");
    }

    #[test]
    fn test_from_config_uses_base_url() {
        let config = ApiConfig {
            base_url: "http://api.test".to_string(),
        };
        assert_eq!(
            HttpCryptoApi::from_config(&config).endpoint_url(Mode::Decrypt),
            "http://api.test/decrypt"
        );
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod http_tests {
    use std::sync::{Arc, Mutex};

    use axum::http::StatusCode;
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};

    use super::*;

    type Captured = Arc<Mutex<Vec<Value>>>;

    /// Serve `router` on an ephemeral local port and return its base URL.
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}/sifra/")
    }

    fn crypto_router(captured: Captured) -> Router {
        let on_encrypt = captured.clone();
        let on_decrypt = captured;
        Router::new()
            .route(
                "/sifra/encrypt",
                post(move |Json(body): Json<Value>| {
                    let captured = on_encrypt.clone();
                    async move {
                        captured.lock().unwrap().push(body);
                        Json(json!({
                            "success": true,
                            "data": {"encrypted": "xxxx yyyy", "word_count": 2},
                            "timestamp": 1_700_000_000,
                        }))
                    }
                }),
            )
            .route(
                "/sifra/decrypt",
                post(move |Json(body): Json<Value>| {
                    let captured = on_decrypt.clone();
                    async move {
                        captured.lock().unwrap().push(body);
                        (
                            StatusCode::FORBIDDEN,
                            Json(json!({"message": "Origin not allowed"})),
                        )
                    }
                }),
            )
    }

    fn request() -> CryptoRequest {
        CryptoRequest {
            text: "hello world".to_string(),
            password: "secret".to_string(),
        }
    }

    #[tokio::test]
    async fn test_posts_json_body_to_mode_endpoint() {
        let captured = Captured::default();
        let base = serve(crypto_router(captured.clone())).await;
        let api = HttpCryptoApi::new(base);

        let output = api.send(Mode::Encrypt, &request()).await.unwrap();
        assert_eq!(
            output,
            CryptoOutput {
                mode: Mode::Encrypt,
                text: "xxxx yyyy".to_string(),
                statistic: Statistic::WordCount(2),
                timestamp: Some(1_700_000_000),
            }
        );
        assert_eq!(
            captured.lock().unwrap().as_slice(),
            &[json!({"text": "hello world", "password": "secret"})]
        );
    }

    #[tokio::test]
    async fn test_error_status_from_server() {
        let captured = Captured::default();
        let base = serve(crypto_router(captured.clone())).await;
        let api = HttpCryptoApi::new(base);

        let err = api.send(Mode::Decrypt, &request()).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Status {
                status: 403,
                message: Some("Origin not allowed".to_string()),
            }
        );
        assert_eq!(captured.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_unreachable_server_is_network_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let api = HttpCryptoApi::new(format!("http://{addr}"));
        let err = api.send(Mode::Encrypt, &request()).await.unwrap_err();
        assert!(matches!(err, ApiError::Network(_)), "{err:?}");
    }
}
