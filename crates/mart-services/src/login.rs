//! Member login.

use crate::error::ServiceResult;
use mart_commerce::member::{LoginParams, LoginResult, SimpleLoginParams};
use mart_data::{RequestSpec, Transport, TransportExt};
use std::sync::Arc;
use tracing::{info, instrument};

pub const LOGIN_PATH: &str = "/login/wxMin";
pub const SIMPLE_LOGIN_PATH: &str = "/login/wxMin/simple";

/// Typed wrapper over the login endpoints. Storing the returned token is the
/// caller's job.
#[derive(Clone)]
pub struct LoginService {
    transport: Arc<dyn Transport>,
}

impl LoginService {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Log in with a platform login code.
    #[instrument(skip_all)]
    pub async fn login(&self, params: &LoginParams) -> ServiceResult<LoginResult> {
        let spec = RequestSpec::post(LOGIN_PATH).data(params)?;
        let result: LoginResult = self.transport.request(spec).await?;
        info!(member_id = %result.id, "logged in");
        Ok(result)
    }

    /// Log in with a phone number (development backends only).
    #[instrument(skip(self))]
    pub async fn simple_login(&self, phone_number: &str) -> ServiceResult<LoginResult> {
        let spec =
            RequestSpec::post(SIMPLE_LOGIN_PATH).data(&SimpleLoginParams::new(phone_number))?;
        let result: LoginResult = self.transport.request(spec).await?;
        info!(member_id = %result.id, "logged in");
        Ok(result)
    }
}
