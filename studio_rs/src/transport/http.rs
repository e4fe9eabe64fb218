//! Native HTTP transport built on reqwest.

use std::time::Duration;

use tracing::debug;

use super::{ContactTransport, Delivery, classify_status, contact_endpoint};
use crate::config::SiteConfig;
use crate::contact::ContactForm;
use crate::error::{ConfigError, DeliveryError};

/// Posts the form as JSON with the configured request timeout.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpTransport {
    pub fn new(config: &SiteConfig) -> Result<Self, ConfigError> {
        if config.backend_url.is_empty() {
            // Same-origin only makes sense inside a browser.
            return Err(ConfigError::MissingBackendUrl);
        }
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("studio/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;
        Ok(Self {
            client,
            endpoint: contact_endpoint(&config.backend_url),
            timeout: config.request_timeout,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn map_error(&self, err: reqwest::Error) -> DeliveryError {
        if err.is_timeout() {
            DeliveryError::Timeout(self.timeout)
        } else if err.is_builder() {
            DeliveryError::Encode(err.to_string())
        } else {
            DeliveryError::Transport(err.to_string())
        }
    }
}

impl ContactTransport for HttpTransport {
    async fn deliver(&self, form: &ContactForm) -> Result<Delivery, DeliveryError> {
        debug!(endpoint = %self.endpoint, "posting contact form");
        let response = self
            .client
            .post(&self.endpoint)
            .json(form)
            .send()
            .await
            .map_err(|e| self.map_error(e))?;
        classify_status(response.status().as_u16())
    }
}
