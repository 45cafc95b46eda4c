use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{CONTENT_TYPE, HeaderMap};
use tokio::time::timeout;
use url::Url;

use crate::error::{AppError, AppResult, RemoteError, ValidationError};

/// An established channel to a gRPC endpoint.
///
/// The resolver binds stubs over a channel but never opens, closes, or
/// retries it. Deadlines belong to the implementation.
#[async_trait]
pub trait GrpcChannel: Send + Sync {
    /// Sends one unary request to `path` (`/package.Service/Method`) and
    /// returns the response message without its gRPC frame header.
    ///
    /// # Errors
    ///
    /// Returns a `RemoteError` when the call fails for any reason.
    async fn unary(&self, path: &'static str, message: Vec<u8>) -> Result<Bytes, RemoteError>;
}

/// gRPC over a pooled reqwest HTTP/2 client.
#[derive(Debug, Clone)]
pub struct HttpGrpcChannel {
    client: reqwest::Client,
    base_url: Url,
    request_timeout: Duration,
}

impl HttpGrpcChannel {
    /// Builds a channel for `raw_url`. `grpc://` and `http://` use HTTP/2
    /// prior knowledge, `grpcs://` and `https://` negotiate over TLS.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unusable URL and a remote error when
    /// the client cannot be built.
    pub fn new(
        raw_url: &str,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> AppResult<Self> {
        let (base_url, prior_knowledge) = resolve_grpc_url(raw_url)?;
        let client = build_grpc_client(connect_timeout, prior_knowledge)?;
        Ok(Self {
            client,
            base_url,
            request_timeout,
        })
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }
}

#[async_trait]
impl GrpcChannel for HttpGrpcChannel {
    async fn unary(&self, path: &'static str, message: Vec<u8>) -> Result<Bytes, RemoteError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|source| RemoteError::InvalidMethodPath { path, source })?;

        let call = async {
            let response = self
                .client
                .post(url)
                .header(CONTENT_TYPE, "application/grpc")
                .header("te", "trailers")
                .body(grpc_frame(&message))
                .send()
                .await
                .map_err(|source| RemoteError::Transport { path, source })?;

            let status = response.status();
            if !status.is_success() {
                return Err(RemoteError::HttpStatus {
                    path,
                    status: status.as_u16(),
                });
            }
            let status_in_headers = match grpc_status(response.headers()) {
                Some(GrpcStatus::Ok) => true,
                Some(GrpcStatus::Failed {
                    code,
                    message: grpc_message,
                }) => {
                    return Err(RemoteError::GrpcStatus {
                        path,
                        code,
                        message: grpc_message,
                    });
                }
                None => false,
            };

            let body = response
                .bytes()
                .await
                .map_err(|source| RemoteError::Transport { path, source })?;

            // Without a status in the headers the outcome sits in the
            // trailers, which are not read; only a complete message counts
            // as success then.
            match grpc_unframe(&body) {
                Some(reply) => Ok(reply),
                None if status_in_headers => Ok(Bytes::new()),
                None => Err(RemoteError::MissingResponseMessage { path }),
            }
        };

        timeout(self.request_timeout, call)
            .await
            .unwrap_or_else(|_elapsed| {
                Err(RemoteError::Timeout {
                    path,
                    timeout: self.request_timeout,
                })
            })
    }
}

fn build_grpc_client(
    connect_timeout: Duration,
    prior_knowledge: bool,
) -> AppResult<reqwest::Client> {
    let mut builder = reqwest::Client::builder()
        .connect_timeout(connect_timeout)
        .http2_adaptive_window(true)
        .tcp_nodelay(true);
    if prior_knowledge {
        builder = builder.http2_prior_knowledge();
    }
    builder
        .build()
        .map_err(|source| AppError::remote(RemoteError::BuildClientFailed { source }))
}

pub(crate) fn resolve_grpc_url(raw_url: &str) -> AppResult<(Url, bool)> {
    let parsed = parse_url(raw_url)?;

    let (scheme, prior_knowledge) = match parsed.scheme() {
        "http" | "grpc" => ("http", true),
        "https" | "grpcs" => ("https", false),
        other => {
            return Err(AppError::validation(
                ValidationError::UnsupportedUrlScheme {
                    scheme: other.to_owned(),
                },
            ));
        }
    };

    // `grpc` is not a special scheme, so `Url::set_scheme` refuses to turn it
    // into `http`; reparse instead.
    let url = match parsed.as_str().split_once(':') {
        Some((current, rest)) if current != scheme => parse_url(&format!("{}:{}", scheme, rest))?,
        Some(_) | None => parsed,
    };

    if url.host_str().is_none_or(str::is_empty) {
        return Err(AppError::validation(ValidationError::UrlMissingHost));
    }

    Ok((url, prior_knowledge))
}

fn parse_url(raw_url: &str) -> AppResult<Url> {
    Url::parse(raw_url).map_err(|source| {
        AppError::validation(ValidationError::InvalidUrl {
            url: raw_url.to_owned(),
            source,
        })
    })
}

/// Prefixes `payload` with the 5-byte gRPC message header (uncompressed).
#[must_use]
pub fn grpc_frame(payload: &[u8]) -> Vec<u8> {
    let payload_len = u32::try_from(payload.len()).map_or(u32::MAX, |value| value);
    let mut framed = Vec::with_capacity(payload.len().saturating_add(5));
    framed.push(0);
    framed.extend_from_slice(&payload_len.to_be_bytes());
    framed.extend_from_slice(payload);
    framed
}

/// Strips the 5-byte header off the first message in `body`. `None` when
/// the body holds no complete frame.
pub(crate) fn grpc_unframe(body: &Bytes) -> Option<Bytes> {
    let [_compressed, b0, b1, b2, b3] = *body.first_chunk::<5>()?;
    let len = usize::try_from(u32::from_be_bytes([b0, b1, b2, b3])).ok()?;
    let end = len.checked_add(5)?;
    (body.len() >= end).then(|| body.slice(5..end))
}

enum GrpcStatus {
    Ok,
    Failed { code: String, message: String },
}

/// Reads `grpc-status` from the response headers. Servers answer failed
/// calls trailers-only, so the status shows up here for those.
fn grpc_status(headers: &HeaderMap) -> Option<GrpcStatus> {
    let raw = headers.get("grpc-status")?;
    let message = headers
        .get("grpc-message")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_owned();
    Some(match raw.to_str().map(str::trim) {
        Ok("0") => GrpcStatus::Ok,
        Ok(code) => GrpcStatus::Failed {
            code: code.to_owned(),
            message,
        },
        Err(_) => GrpcStatus::Failed {
            code: "<invalid>".to_owned(),
            message,
        },
    })
}
