use std::sync::Arc;
use async_trait::async_trait;
use log::{debug, error, info};
use crate::client::config::ClientConfig;
use crate::client::error::TransportError;
use crate::client::models::form_state::{RequestPayload, BACKEND_ERROR_TEXT};
use crate::client::services::reply_parser;

/// Sends one payload and hands back the raw reply body.
#[async_trait]
pub trait GreetingTransport: Send + Sync {
    async fn post_greeting(&self, endpoint: &str, payload: &RequestPayload) -> Result<String, TransportError>;
}

/// reqwest-backed transport. No timeout is set; the client defaults apply.
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self { client: reqwest::Client::new() }
    }
}

#[async_trait]
impl GreetingTransport for HttpTransport {
    async fn post_greeting(&self, endpoint: &str, payload: &RequestPayload) -> Result<String, TransportError> {
        let response = self.client.post(endpoint).json(payload).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status { status: status.as_u16() });
        }
        Ok(response.text().await?)
    }
}

/// What a finished request leaves behind: the text to show, plus the
/// failure description when the backend could not be reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    pub response: String,
    pub failure: Option<String>,
}

#[derive(Clone)]
pub struct GreetingService {
    config: ClientConfig,
    transport: Arc<dyn GreetingTransport>,
}

impl GreetingService {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, Arc::new(HttpTransport::new()))
    }

    pub fn with_transport(config: ClientConfig, transport: Arc<dyn GreetingTransport>) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Never fails: transport errors become the fixed backend error text
    /// and are written to the log.
    pub async fn submit(&self, payload: RequestPayload) -> Settlement {
        let endpoint = self.config.endpoint();
        info!("[GREETING] POST {} ({})", endpoint, self.config.environment);
        match self.transport.post_greeting(endpoint, &payload).await {
            Ok(body) => {
                debug!("[GREETING] reply body: {}", body);
                Settlement { response: reply_parser::response_text(&body), failure: None }
            }
            Err(e) => {
                error!("[GREETING] Error: {}", e);
                Settlement { response: BACKEND_ERROR_TEXT.to_string(), failure: Some(e.to_string()) }
            }
        }
    }
}

impl std::fmt::Debug for GreetingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GreetingService").field("config", &self.config).finish()
    }
}
