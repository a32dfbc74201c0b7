//! Fetch side of the engine: the gateway seam, request tokens, and the
//! `registerData` wire payload.

use serde::{Deserialize, Serialize};

use super::request::TooltipRequest;
use crate::{Error, Result};

/// Opaque identity of one issued fetch, echoed back with its response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestToken(pub u64);

/// Issues asynchronous content fetches.
///
/// Implementations must eventually hand a [`FetchResponse`] carrying the same
/// token back to the controller, or never respond at all. Fetches cannot be
/// cancelled once issued.
pub trait FetchGateway {
    fn fetch(&mut self, token: RequestToken, request: &TooltipRequest);
}

/// A completed fetch, delivered to `TooltipController::on_fetch_response`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchResponse {
    /// `None` when the content arrived through the bare `registerData` entry
    /// point with no token attached.
    pub token: Option<RequestToken>,
    /// Request parameters as echoed by the content service.
    pub request: TooltipRequest,
    pub html: String,
}

/// Body of a content-service response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipPayload {
    pub params: TooltipRequest,
    pub tooltip_html: String,
}

impl TooltipPayload {
    pub fn into_response(self, token: Option<RequestToken>) -> FetchResponse {
        FetchResponse {
            token,
            request: self.params,
            html: self.tooltip_html,
        }
    }
}

/// Decode a response body, either plain JSON or a JSONP call such as
/// `Bnet.D3.Tooltips.registerData({...});`.
pub fn decode_payload(body: &str) -> Result<TooltipPayload> {
    let body = body.trim();
    let json = if body.starts_with('{') {
        body
    } else {
        let open = body
            .find('(')
            .ok_or_else(|| Error::Payload("expected JSON object or JSONP call".into()))?;
        let close = body
            .rfind(')')
            .filter(|&close| close > open)
            .ok_or_else(|| Error::Payload("unterminated JSONP call".into()))?;
        body[open + 1..close].trim()
    };
    serde_json::from_str(json).map_err(|e| Error::Payload(e.to_string()))
}
