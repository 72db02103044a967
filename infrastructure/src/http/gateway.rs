//! HTTP debate gateway implementation

use super::api_base::ApiBase;
use super::error::Result;
use async_trait::async_trait;
use reqwest::{Client, Response, Url};
use serde::Deserialize;
use simulacra_application::ports::debate_gateway::{DebateGateway, GatewayError, RunRequest};
use simulacra_domain::DebatePayload;
use simulacra_domain::core::string::truncate;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Path of the run endpoint, relative to the API base
pub const RUN_PATH: &str = "debate/run";

/// Path of the liveness endpoint, relative to the API base
pub const HEALTH_PATH: &str = "health";

/// Log previews of response bodies are capped at this many bytes
const BODY_PREVIEW: usize = 200;

#[derive(Debug, Deserialize)]
struct HealthBody {
    #[serde(default)]
    status: String,
}

/// Debate gateway talking to the debate service over HTTP
pub struct HttpDebateGateway {
    client: Client,
    run_url: Url,
    health_url: Url,
}

impl HttpDebateGateway {
    /// Create a gateway for the given base.
    ///
    /// `timeout` bounds a whole request; a debate run can take minutes.
    pub fn new(base: &ApiBase, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().user_agent("SimulacraDebate/0.1");
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        info!("HttpDebateGateway initialized for {}", base);

        Ok(Self {
            client,
            run_url: base.endpoint(RUN_PATH)?,
            health_url: base.endpoint(HEALTH_PATH)?,
        })
    }

    /// Split a response into its body, or a status error for non-2xx
    async fn read_body(response: Response) -> std::result::Result<String, GatewayError> {
        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    warn!(
                        "Debate service returned {} with an unreadable body: {}",
                        status.as_u16(),
                        e
                    );
                    return Err(GatewayError::Transport(e.to_string()));
                }
            };
            warn!(
                "Debate service returned {}: {}",
                status.as_u16(),
                truncate(&body, BODY_PREVIEW)
            );
            return Err(GatewayError::status(status.as_u16(), body));
        }

        response
            .text()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))
    }
}

#[async_trait]
impl DebateGateway for HttpDebateGateway {
    async fn run_debate(
        &self,
        request: &RunRequest,
    ) -> std::result::Result<DebatePayload, GatewayError> {
        let mut builder = self
            .client
            .post(self.run_url.clone())
            .json(&serde_json::json!({}));
        if let Some(rounds) = request.max_exchange_rounds {
            builder = builder.query(&[("max_exchange_rounds", rounds)]);
        }

        debug!("POST {}", self.run_url);
        let response = builder
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let body = Self::read_body(response).await?;
        debug!("Run response: {}", truncate(&body, BODY_PREVIEW));

        serde_json::from_str::<DebatePayload>(&body)
            .map_err(|e| GatewayError::Decode(format!("Invalid debate payload: {}", e)))
    }

    async fn health(&self) -> std::result::Result<String, GatewayError> {
        debug!("GET {}", self.health_url);
        let response = self
            .client
            .get(self.health_url.clone())
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        let body = Self::read_body(response).await?;
        let health: HealthBody = serde_json::from_str(&body)
            .map_err(|e| GatewayError::Decode(format!("Invalid health payload: {}", e)))?;
        Ok(health.status)
    }
}
