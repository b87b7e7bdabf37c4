//! The HTTP fetch primitive the CRUD accessors are built on.
//!
//! This module provides the [`HttpClient`] type: one request, one response,
//! JSON in and JSON out. It performs no retries and no caching.

use std::collections::HashMap;

use crate::clients::errors::{DecodeError, HttpError, HttpResponseError};
use crate::clients::http_request::HttpRequest;
use crate::clients::http_response::HttpResponse;
use crate::config::{BaseUrl, ClientConfig};

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// MIME type for every request and response body.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Async HTTP client for JSON REST endpoints.
///
/// The client handles:
/// - Resolving relative request paths against an optional [`BaseUrl`]
/// - Default headers including `User-Agent` and `Accept`
/// - Setting `Content-Type: application/json` whenever a body is sent
/// - Decoding response bodies as JSON
/// - Mapping non-2xx responses to [`HttpResponseError`]
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` and cheap to clone; clones share one
/// connection pool.
///
/// # Example
///
/// ```rust,ignore
/// use rest_crud::{BaseUrl, ClientConfig, HttpClient, HttpMethod, HttpRequest};
///
/// let config = ClientConfig::builder()
///     .base_url(BaseUrl::new("https://api.example.com").unwrap())
///     .build()?;
/// let client = HttpClient::new(&config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/cats").build()?;
/// let response = client.request(request).await?;
/// println!("{}", response.body);
/// ```
#[derive(Clone, Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL relative paths are resolved against.
    base_url: Option<BaseUrl>,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &ClientConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}rest-crud v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), JSON_CONTENT_TYPE.to_string());
        for (key, value) in config.default_headers() {
            insert_header(&mut default_headers, key, value);
        }

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            base_url: config.base_url().cloned(),
            default_headers,
        })
    }

    /// Returns the base URL for this client, if any.
    #[must_use]
    pub const fn base_url(&self) -> Option<&BaseUrl> {
        self.base_url.as_ref()
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Resolves a request path to the URL that will be fetched.
    ///
    /// Absolute URLs (a scheme followed by `://` at the start of the path)
    /// are used unchanged. Relative paths are joined onto the base URL when
    /// one is configured, and passed through otherwise.
    #[must_use]
    pub fn resolve_url(&self, path: &str) -> String {
        if is_absolute_url(path) {
            return path.to_string();
        }
        self.base_url
            .as_ref()
            .map_or_else(|| path.to_string(), |base| base.join(path))
    }

    /// Sends one HTTP request and decodes the JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error occurs, including an unresolvable URL (`Network`)
    /// - A non-2xx response is received (`Response`)
    /// - A 2xx response body is not valid JSON (`Decode`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.resolve_url(&request.path);
        let headers = self.merge_headers(&request);

        tracing::debug!(method = %request.http_method, url = %url, "sending request");

        let mut req_builder = self.client.request(request.http_method.into(), &url);
        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(body) = &request.body {
            req_builder = req_builder.body(body.to_string());
        }

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let reason = res.status().canonical_reason().unwrap_or("Unknown status");
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;

        let parsed = if body_text.trim().is_empty() {
            Ok(serde_json::Value::Null)
        } else {
            serde_json::from_str(&body_text)
        };
        let (body, decode_error) = match parsed {
            Ok(body) => (body, None),
            Err(source) => (serde_json::Value::Null, Some(source)),
        };
        let response = HttpResponse::new(code, res_headers, body);

        if !response.is_ok() {
            let message = response.error_message().unwrap_or_else(|| {
                if body_text.trim().is_empty() {
                    reason.to_string()
                } else {
                    body_text.clone()
                }
            });

            tracing::warn!(code, url = %url, "request failed with non-success status");

            return Err(HttpError::Response(HttpResponseError {
                code,
                message,
                error_reference: response.request_id().map(String::from),
            }));
        }

        if let Some(source) = decode_error {
            return Err(DecodeError { url, source }.into());
        }

        if let Some(notice) = response.deprecation_notice() {
            tracing::warn!(
                "Deprecated endpoint {} requested, server notice: {}",
                url,
                notice
            );
        }

        Ok(response)
    }

    /// Builds the header set for one request.
    ///
    /// Precedence, lowest first: client defaults, request extras, then
    /// `Content-Type` for requests with a body. Names compare
    /// case-insensitively, so a later `accept` replaces an earlier `Accept`.
    /// A request extra named `content-type` never replaces the JSON content type.
    fn merge_headers(&self, request: &HttpRequest) -> HashMap<String, String> {
        let mut headers = self.default_headers.clone();
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                insert_header(&mut headers, key, value);
            }
        }
        if request.body.is_some() {
            insert_header(&mut headers, "Content-Type", JSON_CONTENT_TYPE);
        }
        headers
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

/// Inserts a header, dropping any existing entry whose name differs only in case.
fn insert_header(headers: &mut HashMap<String, String>, name: &str, value: &str) {
    headers.retain(|key, _| !key.eq_ignore_ascii_case(name));
    headers.insert(name.to_string(), value.to_string());
}

/// Returns `true` if `path` starts with `scheme://`.
///
/// Only the text before the first `/`, `?` or `#` can hold the scheme, so a
/// URL inside a query value does not make a relative path absolute.
fn is_absolute_url(path: &str) -> bool {
    let prefix_end = path.find(['/', '?', '#']).unwrap_or(path.len());
    let Some(scheme) = path[..prefix_end].strip_suffix(':') else {
        return false;
    };
    path[prefix_end..].starts_with("//")
        && scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
