//! HTTP fetch gateway for the live content service.
//!
//! Each fetch runs on tokio's blocking pool; completed responses are sent
//! back over an unbounded channel for the event loop to hand to the
//! controller. Failed fetches are logged and never answered, which the
//! controller treats as a fetch that is still outstanding.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;

use crate::config::TooltipConfig;
use crate::tooltip::{FetchGateway, FetchResponse, RequestToken, TooltipRequest, decode_payload};
use crate::{Error, Result};

pub struct HttpGateway {
    service_base: String,
    format_suffix: String,
    agent: ureq::Agent,
    runtime: Handle,
    completions: mpsc::UnboundedSender<FetchResponse>,
}

impl HttpGateway {
    /// Create a gateway bound to the current tokio runtime, plus the
    /// receiving end of its completion channel.
    pub fn new(config: &TooltipConfig) -> (Self, mpsc::UnboundedReceiver<FetchResponse>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(Duration::from_millis(config.fetch_timeout_ms)))
            .build()
            .into();
        let gateway = Self {
            service_base: config.service_base.clone(),
            format_suffix: config.format_suffix.clone(),
            agent,
            runtime: Handle::current(),
            completions: tx,
        };
        (gateway, rx)
    }

    pub fn url_for(&self, request: &TooltipRequest) -> Option<String> {
        request.fetch_url(&self.service_base, &self.format_suffix)
    }
}

fn fetch_blocking(agent: &ureq::Agent, url: &str, token: RequestToken) -> Result<FetchResponse> {
    let body = agent
        .get(url)
        .call()
        .map_err(|e| Error::Http(e.to_string()))?
        .body_mut()
        .read_to_string()
        .map_err(|e| Error::Http(e.to_string()))?;
    Ok(decode_payload(&body)?.into_response(Some(token)))
}

impl FetchGateway for HttpGateway {
    fn fetch(&mut self, token: RequestToken, request: &TooltipRequest) {
        let Some(url) = self.url_for(request) else {
            tracing::warn!("No fetch URL for {} request", request.kind);
            return;
        };
        let agent = self.agent.clone();
        let tx = self.completions.clone();
        self.runtime.spawn_blocking(move || match fetch_blocking(&agent, &url, token) {
            Ok(response) => {
                // Receiver gone means the event loop has finished.
                let _ = tx.send(response);
            }
            Err(e) => tracing::warn!("Fetch {} failed: {}", url, e),
        });
    }
}
