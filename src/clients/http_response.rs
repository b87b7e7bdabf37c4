//! HTTP response types.

use std::collections::HashMap;

/// An HTTP response with its body decoded as JSON.
///
/// An empty body decodes to [`serde_json::Value::Null`].
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lower-cased (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The decoded response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns the first value of a header, looked up case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    ///
    /// This ID is useful for debugging and should be included in error reports.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Returns the `Deprecation` or `Sunset` header value, if the server sent one.
    #[must_use]
    pub fn deprecation_notice(&self) -> Option<&str> {
        self.header("deprecation").or_else(|| self.header("sunset"))
    }

    /// Extracts a human-readable error message from the body.
    ///
    /// Looks at the `errors`, `error` and `message` keys in that order. String
    /// values are used as-is; other values are serialized as JSON. Returns
    /// `None` when none of those keys is present.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        ["errors", "error", "message"]
            .into_iter()
            .find_map(|key| self.body.get(key))
            .map(|value| match value {
                serde_json::Value::String(text) => text.clone(),
                other => other.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn headers(pairs: &[(&str, &str)]) -> HashMap<String, Vec<String>> {
        let mut map: HashMap<String, Vec<String>> = HashMap::new();
        for (key, value) in pairs {
            map.entry((*key).to_string())
                .or_default()
                .push((*value).to_string());
        }
        map
    }

    #[test]
    fn test_is_ok_for_2xx_only() {
        assert!(HttpResponse::new(200, HashMap::new(), json!({})).is_ok());
        assert!(HttpResponse::new(204, HashMap::new(), json!(null)).is_ok());
        assert!(!HttpResponse::new(301, HashMap::new(), json!({})).is_ok());
        assert!(!HttpResponse::new(404, HashMap::new(), json!({})).is_ok());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let response = HttpResponse::new(
            200,
            headers(&[("x-request-id", "req-1"), ("x-request-id", "req-2")]),
            json!({}),
        );
        assert_eq!(response.header("X-Request-Id"), Some("req-1"));
        assert_eq!(response.request_id(), Some("req-1"));
    }

    #[test]
    fn test_deprecation_notice_falls_back_to_sunset() {
        let response = HttpResponse::new(
            200,
            headers(&[("sunset", "Sat, 31 Dec 2039 23:59:59 GMT")]),
            json!({}),
        );
        assert_eq!(
            response.deprecation_notice(),
            Some("Sat, 31 Dec 2039 23:59:59 GMT")
        );
    }

    #[test]
    fn test_error_message_prefers_errors_key() {
        let response = HttpResponse::new(
            422,
            HashMap::new(),
            json!({"errors": {"name": ["can't be blank"]}, "message": "ignored"}),
        );
        assert_eq!(
            response.error_message().as_deref(),
            Some(r#"{"name":["can't be blank"]}"#)
        );
    }

    #[test]
    fn test_error_message_uses_plain_strings() {
        let response = HttpResponse::new(404, HashMap::new(), json!({"message": "Not Found"}));
        assert_eq!(response.error_message().as_deref(), Some("Not Found"));

        let empty = HttpResponse::new(500, HashMap::new(), json!(null));
        assert!(empty.error_message().is_none());
    }
}
