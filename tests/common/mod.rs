//! Shared test helpers: recording fakes for the gateway and surface seams.

use d3_tooltips::tooltip::{
    FetchGateway, FetchResponse, HoverTarget, PresentationSurface, RequestToken, TooltipController,
    TooltipKind, TooltipRequest, UrlRouter,
};

pub const DOMAIN: &str = "example.org";

/// Link URL on the test site.
#[allow(dead_code)]
pub fn link(path: &str) -> String {
    format!("https://us.{DOMAIN}/d3/en/{path}")
}

#[allow(dead_code)]
pub fn router() -> UrlRouter {
    UrlRouter::new(DOMAIN, "d3").expect("router")
}

/// Records every fetch the controller issues.
#[derive(Debug, Default)]
pub struct RecordingGateway {
    pub issued: Vec<(RequestToken, TooltipRequest)>,
}

impl FetchGateway for RecordingGateway {
    fn fetch(&mut self, token: RequestToken, request: &TooltipRequest) {
        self.issued.push((token, request.clone()));
    }
}

#[allow(dead_code)]
impl RecordingGateway {
    /// Token of the most recent fetch of `kind`.
    pub fn token_for(&self, kind: TooltipKind) -> RequestToken {
        self.issued
            .iter()
            .rev()
            .find(|(_, request)| request.kind == kind)
            .map(|(token, _)| *token)
            .expect("no fetch of that kind")
    }

    /// A response to the most recent fetch of `kind`, echoing its request.
    pub fn respond(&self, kind: TooltipKind, html: &str) -> FetchResponse {
        let (token, request) = self
            .issued
            .iter()
            .rev()
            .find(|(_, request)| request.kind == kind)
            .cloned()
            .expect("no fetch of that kind");
        FetchResponse {
            token: Some(token),
            request,
            html: html.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    Show { element: u64, html: String },
    Hide,
}

/// Records every panel update.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub events: Vec<SurfaceEvent>,
}

impl PresentationSurface for RecordingSurface {
    fn show(&mut self, anchor: &HoverTarget, html: &str) {
        self.events.push(SurfaceEvent::Show {
            element: anchor.id,
            html: html.to_string(),
        });
    }

    fn hide(&mut self) {
        self.events.push(SurfaceEvent::Hide);
    }
}

#[allow(dead_code)]
impl RecordingSurface {
    /// Markup of every show, in order.
    pub fn shown(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SurfaceEvent::Show { html, .. } => Some(html.as_str()),
                SurfaceEvent::Hide => None,
            })
            .collect()
    }
}

pub type TestController = TooltipController<RecordingGateway, RecordingSurface>;

#[allow(dead_code)]
pub fn controller() -> TestController {
    TooltipController::new(router(), RecordingGateway::default(), RecordingSurface::default())
}

pub const SKILL_HTML: &str = concat!(
    r#"<div class="d3-tooltip d3-tooltip-skill">"#,
    r#"<div class="tooltip-head"><h3>Bash</h3></div>"#,
    r#"<div class="tooltip-body"><p>Smash for 320% weapon damage.</p></div>"#,
    "</div>",
);

pub const RUNE_HTML: &str = concat!(
    r#"<div class="d3-tooltip d3-tooltip-rune">"#,
    r#"<div class="tooltip-head"><h3 class="">Frostbite</h3></div>"#,
    r#"<div class="tooltip-body"><span class="d3-icon d3-icon-rune"><span class="rune-a"></span></span>"#,
    r#"<div class="description"><p>Freeze the enemy.</p></div>"#,
    r#"<p class="subtle">Unlocked at level <em>12</em></p></div></div>"#,
);
