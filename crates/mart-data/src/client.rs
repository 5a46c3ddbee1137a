//! reqwest-backed [`Transport`].

use crate::{ClientConfig, Envelope, FetchError, Method, RequestSpec, Response, Transport};
use async_trait::async_trait;
use http::header::AUTHORIZATION;
use tracing::{debug, instrument, warn};

/// Header carrying the client channel.
pub const SOURCE_CLIENT_HEADER: &str = "source-client";

/// HTTP transport against the real backend.
pub struct HttpTransport {
    client: reqwest::Client,
    config: ClientConfig,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("base_url", &self.config.base_url)
            .field("timeout_ms", &self.config.timeout_ms)
            .field("token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl HttpTransport {
    /// Build a transport from configuration.
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self { client, config })
    }

    /// The configuration this transport was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn token(&self) -> Option<&str> {
        self.config.token.as_deref().filter(|t| !t.is_empty())
    }
}

#[async_trait]
impl Transport for HttpTransport {
    #[instrument(skip(self, spec), fields(method = %spec.method, url = %spec.url))]
    async fn send(&self, spec: RequestSpec) -> Result<Envelope, FetchError> {
        let url = self.config.resolve_url(&spec.url);
        let mut builder = self
            .client
            .request(spec.method.into(), &url)
            .header(SOURCE_CLIENT_HEADER, &self.config.source_client);

        if let Some(token) = self.token() {
            builder = builder.header(AUTHORIZATION, token);
        }

        builder = match (spec.method, &spec.data) {
            (Method::Get, Some(data)) => builder.query(data),
            (_, Some(data)) => builder.json(data),
            (_, None) => builder,
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        debug!(status, bytes = body.len(), "Backend responded");

        Response::new(status, body.to_vec())
            .into_envelope()
            .inspect_err(|e| warn!(error = %e, "Backend call failed"))
    }
}
