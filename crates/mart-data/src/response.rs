//! Response envelope and HTTP status handling.

use crate::FetchError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Success code the backend puts in every accepted envelope.
pub const SUCCESS_CODE: &str = "1";

/// The `{code, msg, result}` wrapper around every backend reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T = Value> {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub result: T,
}

impl Envelope<Value> {
    /// Wrap a payload in a success envelope.
    pub fn success(result: Value) -> Self {
        Self {
            code: SUCCESS_CODE.to_string(),
            msg: "操作成功".to_string(),
            result,
        }
    }

    /// Decode the `result` payload into a concrete type.
    pub fn decode<T: DeserializeOwned>(self) -> Result<Envelope<T>, FetchError> {
        let result = serde_json::from_value(self.result)?;
        Ok(Envelope {
            code: self.code,
            msg: self.msg,
            result,
        })
    }
}

/// Error body the backend sends with non-2xx statuses.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: Option<Value>,
    #[serde(default)]
    msg: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// A raw HTTP response.
#[derive(Debug, Clone)]
pub struct Response {
    /// The HTTP status code.
    pub status: u16,
    /// The response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Create a new response.
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        Self { status, body }
    }

    /// Check if the response was successful (2xx status).
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Get the response body as text.
    pub fn text(&self) -> Result<String, FetchError> {
        String::from_utf8(self.body.clone())
            .map_err(|e| FetchError::Decode(format!("Invalid UTF-8: {}", e)))
    }

    /// Parse the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        serde_json::from_slice(&self.body).map_err(|e| FetchError::Decode(e.to_string()))
    }

    /// Turn the response into an envelope, mapping error statuses to
    /// [`FetchError::Unauthorized`] or [`FetchError::Api`].
    pub fn into_envelope(self) -> Result<Envelope, FetchError> {
        if self.is_success() {
            if self.body.is_empty() {
                return Ok(Envelope::success(Value::Null));
            }
            return self.json();
        }

        let body: ErrorBody = self.json().unwrap_or_default();
        let message = body
            .msg
            .or(body.message)
            .or_else(|| self.text().ok().filter(|t| !t.is_empty()))
            .unwrap_or_else(|| "Unknown error".to_string());

        if self.status == 401 {
            return Err(FetchError::Unauthorized(message));
        }

        let code = match body.code {
            Some(Value::String(code)) => code,
            Some(other) if !other.is_null() => other.to_string(),
            _ => self.status.to_string(),
        };

        Err(FetchError::Api {
            status: self.status,
            code,
            message,
        })
    }
}
