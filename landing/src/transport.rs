//! Browser transport: `fetch` through gloo-net, raced against a timer.
//!
//! A request that loses the race is aborted through its `AbortSignal`.

use std::time::Duration;

use futures::future::{Either, select};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use studio::contact::ContactForm;
use studio::transport::{ContactTransport, Delivery, classify_status};
use studio::{DeliveryError, SiteConfig};
use web_sys::AbortController;

#[derive(Debug, Clone)]
pub struct GlooTransport {
    endpoint: String,
    timeout: Duration,
}

impl GlooTransport {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            endpoint: config.contact_endpoint(),
            timeout: config.request_timeout,
        }
    }
}

impl ContactTransport for GlooTransport {
    async fn deliver(&self, form: &ContactForm) -> Result<Delivery, DeliveryError> {
        let controller = AbortController::new().ok();
        let signal = controller.as_ref().map(AbortController::signal);
        // `json` serializes the body and sets Content-Type: application/json.
        let request = Request::post(&self.endpoint)
            .abort_signal(signal.as_ref())
            .json(form)
            .map_err(|e| DeliveryError::Encode(e.to_string()))?;

        let millis = u32::try_from(self.timeout.as_millis()).unwrap_or(u32::MAX);
        let send = Box::pin(request.send());
        let timer = Box::pin(TimeoutFuture::new(millis));

        match select(send, timer).await {
            Either::Left((Ok(response), _)) => classify_status(response.status()),
            Either::Left((Err(e), _)) => Err(DeliveryError::Transport(e.to_string())),
            Either::Right(((), _)) => {
                log::warn!("contact request still pending after {:?}", self.timeout);
                // Dropping `send` does not stop the fetch; a late 2xx must not
                // land after the visitor was told it failed.
                if let Some(controller) = &controller {
                    controller.abort();
                }
                Err(DeliveryError::Timeout(self.timeout))
            }
        }
    }
}
