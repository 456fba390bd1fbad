//! Text/binary body encoding.
//!
//! Gateways carry bodies as strings. Valid UTF-8 travels as-is; anything
//! else is base64 (standard alphabet, padded) and flagged so the receiving
//! side can restore the original bytes.

use base64::prelude::{Engine as _, BASE64_STANDARD as BASE64};

/// A body ready to be placed in a gateway record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedBody {
    pub body: String,
    pub is_base64_encoded: bool,
}

/// Encode raw body bytes for transport as a string.
pub fn encode_body(bytes: Vec<u8>) -> EncodedBody {
    match String::from_utf8(bytes) {
        Ok(text) => EncodedBody {
            body: text,
            is_base64_encoded: false,
        },
        Err(err) => EncodedBody {
            body: BASE64.encode(err.as_bytes()),
            is_base64_encoded: true,
        },
    }
}

/// Reverse [`encode_body`].
pub fn decode_body(body: &str, is_base64_encoded: bool) -> Result<Vec<u8>, base64::DecodeError> {
    if is_base64_encoded {
        BASE64.decode(body)
    } else {
        Ok(body.as_bytes().to_vec())
    }
}
