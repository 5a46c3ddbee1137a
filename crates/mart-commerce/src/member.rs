//! Member login payloads.

use crate::ids::MemberId;
use serde::{Deserialize, Serialize};

/// Result of a successful login.
#[derive(Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoginResult {
    pub id: MemberId,
    #[serde(default)]
    pub mobile: String,
    /// Bearer token for subsequent requests.
    pub token: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub account: String,
}

impl LoginResult {
    /// Name to greet the member with.
    pub fn display_name(&self) -> &str {
        if !self.nickname.is_empty() {
            &self.nickname
        } else if !self.account.is_empty() {
            &self.account
        } else {
            &self.mobile
        }
    }
}

impl std::fmt::Debug for LoginResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginResult")
            .field("id", &self.id)
            .field("mobile", &self.mobile)
            .field("token", &"[REDACTED]")
            .field("nickname", &self.nickname)
            .field("account", &self.account)
            .finish()
    }
}

/// Mini-program login using the platform login code.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LoginParams {
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub encrypted_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iv: Option<String>,
}

impl LoginParams {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            encrypted_data: None,
            iv: None,
        }
    }

    /// Attach the encrypted phone payload.
    pub fn with_phone_payload(
        mut self,
        encrypted_data: impl Into<String>,
        iv: impl Into<String>,
    ) -> Self {
        self.encrypted_data = Some(encrypted_data.into());
        self.iv = Some(iv.into());
        self
    }
}

/// Development login with a bare phone number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SimpleLoginParams {
    pub phone_number: String,
}

impl SimpleLoginParams {
    pub fn new(phone_number: impl Into<String>) -> Self {
        Self {
            phone_number: phone_number.into(),
        }
    }
}
