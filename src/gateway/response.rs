//! Structured gateway response record.
//!
//! The fixed-shape record handed to the gateway for final delivery. It
//! serializes as:
//!
//! ```json
//! {
//!   "statusCode": 200,
//!   "headers": { "Content-Type": ["text/plain; charset=utf-8"] },
//!   "body": "hello",
//!   "isBase64Encoded": false
//! }
//! ```

use std::collections::BTreeMap;

use axum::http::HeaderMap;
use serde::{Deserialize, Serialize};

use crate::gateway::encoding::{decode_body, EncodedBody};

/// Terminal snapshot of a captured response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProxyResponse {
    pub status_code: u16,

    /// Every value of every header, keyed by canonical header name.
    #[serde(default)]
    pub headers: BTreeMap<String, Vec<String>>,

    /// UTF-8 text, or base64 when `is_base64_encoded` is set.
    #[serde(default)]
    pub body: String,

    #[serde(default)]
    pub is_base64_encoded: bool,
}

impl ProxyResponse {
    /// Assemble a record from captured parts.
    pub fn from_parts(status_code: u16, headers: &HeaderMap, body: EncodedBody) -> Self {
        Self {
            status_code,
            headers: render_headers(headers),
            body: body.body,
            is_base64_encoded: body.is_base64_encoded,
        }
    }

    /// A record with a status and nothing else.
    pub fn empty(status_code: u16) -> Self {
        Self {
            status_code,
            headers: BTreeMap::new(),
            body: String::new(),
            is_base64_encoded: false,
        }
    }

    /// First value of a header, matched case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.header_values(name).first().map(String::as_str)
    }

    /// All values of a header, matched case-insensitively.
    pub fn header_values(&self, name: &str) -> &[String] {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, values)| values.as_slice())
            .unwrap_or(&[])
    }

    /// Original body bytes, reversing base64 when the record says so.
    pub fn decoded_body(&self) -> Result<Vec<u8>, base64::DecodeError> {
        decode_body(&self.body, self.is_base64_encoded)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Flatten a header map into canonical names with every value preserved.
///
/// Values that are not valid UTF-8 are rendered lossily rather than dropped.
pub fn render_headers(headers: &HeaderMap) -> BTreeMap<String, Vec<String>> {
    let mut rendered: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (name, value) in headers {
        rendered
            .entry(canonical_header_key(name.as_str()))
            .or_default()
            .push(String::from_utf8_lossy(value.as_bytes()).into_owned());
    }
    rendered
}

/// Canonical MIME header form: `x-request-id` becomes `X-Request-Id`.
pub fn canonical_header_key(name: &str) -> String {
    let mut upper = true;
    name.chars()
        .map(|c| {
            let out = if upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            };
            upper = c == '-';
            out
        })
        .collect()
}
