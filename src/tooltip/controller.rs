//! Hover orchestration: classify the hovered link, answer from cache or
//! fetch, and correlate late responses against whatever is hovered now.
//!
//! All entry points run on one logical thread, but hover events, timer
//! firings and fetch completions may interleave in any order. The only
//! defence against showing stale content is the correlation check performed
//! when a response arrives.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use super::cache::{CachedEntry, ResponseCache};
use super::fetch::{FetchGateway, FetchResponse, RequestToken, decode_payload};
use super::merge::merge_skill_and_rune;
use super::request::{TooltipKind, TooltipRequest};
use super::router::UrlRouter;
use super::surface::{HoverTarget, LOADING_HTML, PresentationSurface};
use crate::Result;
use crate::config::TooltipConfig;

/// Delay before the loading indicator replaces an unresolved tooltip.
pub const DEFAULT_LOADING_DELAY: Duration = Duration::from_millis(500);

/// Where the current hover interaction stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverPhase {
    Idle,
    Resolving,
    Showing,
    WaitingForFetch,
    /// Skill-and-rune link with at least one half still outstanding.
    WaitingForBothFetches,
}

/// Halves of a skill-and-rune tooltip collected so far.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompositeProgress {
    pub skill_html: Option<String>,
    pub rune_html: Option<String>,
}

impl CompositeProgress {
    /// Take both halves once both have arrived.
    fn take_complete(&mut self) -> Option<(String, String)> {
        if self.skill_html.is_some() && self.rune_html.is_some() {
            let skill = self.skill_html.take()?;
            let rune = self.rune_html.take()?;
            return Some((skill, rune));
        }
        None
    }
}

/// The element currently under the pointer and what it resolved to.
#[derive(Debug, Clone)]
pub struct CurrentHover {
    pub element: HoverTarget,
    pub request: TooltipRequest,
    pub phase: HoverPhase,
    pub composite: CompositeProgress,
}

/// Single-slot hover state: at most one element is current.
#[derive(Debug, Default)]
pub struct HoverState {
    current: Option<CurrentHover>,
}

impl HoverState {
    pub fn current(&self) -> Option<&CurrentHover> {
        self.current.as_ref()
    }

    pub fn is_current(&self, element: &HoverTarget) -> bool {
        self.current.as_ref().is_some_and(|c| c.element.id == element.id)
    }

    pub fn phase(&self) -> HoverPhase {
        self.current.as_ref().map_or(HoverPhase::Idle, |c| c.phase)
    }

    fn set_phase(&mut self, phase: HoverPhase) {
        if let Some(current) = self.current.as_mut() {
            current.phase = phase;
        }
    }
}

pub struct TooltipController<G, S> {
    router: UrlRouter,
    cache: ResponseCache,
    gateway: G,
    surface: S,
    hover: HoverState,
    loading_delay: Duration,
    loading_deadline: Option<Instant>,
    /// Fetches issued but not yet answered, by token. Like the cache this is
    /// unbounded: a fetch the gateway never answers keeps its entry for the
    /// life of the controller.
    outstanding: HashMap<RequestToken, TooltipRequest>,
    next_token: u64,
}

impl<G: FetchGateway, S: PresentationSurface> TooltipController<G, S> {
    pub fn new(router: UrlRouter, gateway: G, surface: S) -> Self {
        Self {
            router,
            cache: ResponseCache::new(),
            gateway,
            surface,
            hover: HoverState::default(),
            loading_delay: DEFAULT_LOADING_DELAY,
            loading_deadline: None,
            outstanding: HashMap::new(),
            next_token: 1,
        }
    }

    pub fn from_config(config: &TooltipConfig, gateway: G, surface: S) -> Result<Self> {
        let router = UrlRouter::new(&config.site_domain, &config.product)?;
        Ok(Self::new(router, gateway, surface)
            .with_loading_delay(Duration::from_millis(config.loading_delay_ms)))
    }

    pub fn with_loading_delay(mut self, delay: Duration) -> Self {
        self.loading_delay = delay;
        self
    }

    pub fn router(&self) -> &UrlRouter {
        &self.router
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    pub fn hover(&self) -> &HoverState {
        &self.hover
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn gateway_mut(&mut self) -> &mut G {
        &mut self.gateway
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// When the pending loading indicator is due, if one is scheduled.
    pub fn loading_deadline(&self) -> Option<Instant> {
        self.loading_deadline
    }

    pub fn outstanding_fetches(&self) -> usize {
        self.outstanding.len()
    }

    // --- Hover events ---

    pub fn on_hover_enter(&mut self, element: HoverTarget) {
        // Nested nodes re-fire mouseover for the same link.
        if self.hover.is_current(&element) {
            return;
        }
        let Some(request) = self.router.classify(&element.href) else {
            return;
        };
        if request.key.is_empty() {
            return;
        }

        // A deadline left by the previous hover must not paint over this one.
        self.loading_deadline = None;
        self.hover.current = Some(CurrentHover {
            element,
            request: request.clone(),
            phase: HoverPhase::Resolving,
            composite: CompositeProgress::default(),
        });

        if request.kind == TooltipKind::SkillAndRune {
            self.resolve_composite(&request);
        } else {
            self.resolve_single(&request);
        }
    }

    pub fn on_hover_leave(&mut self, element: &HoverTarget) {
        if !self.hover.is_current(element) {
            return;
        }
        // In-flight fetches keep running; their responses will fail correlation.
        self.loading_deadline = None;
        self.surface.hide();
        self.hover.current = None;
    }

    // --- Timers ---

    /// Fire the loading indicator if its deadline has passed. Returns whether it fired.
    pub fn poll_timers(&mut self, now: Instant) -> bool {
        match self.loading_deadline {
            Some(deadline) if deadline <= now => {
                self.loading_deadline = None;
                self.show_current(LOADING_HTML);
                true
            }
            _ => false,
        }
    }

    // --- Responses ---

    /// Decode a `registerData` body and feed it in as an untokened response.
    pub fn register_data(&mut self, body: &str) -> Result<()> {
        let payload = decode_payload(body)?;
        self.on_fetch_response(payload.into_response(None));
        Ok(())
    }

    pub fn on_fetch_response(&mut self, response: FetchResponse) {
        // Any response supersedes the loading indicator.
        self.loading_deadline = None;

        let FetchResponse {
            token,
            mut request,
            html,
        } = response;

        match token {
            Some(token) => match self.outstanding.remove(&token) {
                // The service may normalise keys; the cache is addressed by what was asked for.
                Some(issued) => request = issued,
                None => {
                    tracing::debug!("Discarding response for unknown or answered {:?}", token);
                    return;
                }
            },
            None => {
                if request.kind == TooltipKind::Item
                    && let Some(current) = self.hover.current()
                {
                    request.key = current.request.key.clone();
                }
            }
        }

        let key = ResponseCache::key_for(&request);
        self.cache.store(key.clone(), CachedEntry::new(html.clone()));

        let Some(current) = self.hover.current() else {
            tracing::debug!("Cached {} with nothing hovered", key);
            return;
        };

        if current.request.kind == TooltipKind::SkillAndRune {
            self.on_composite_half(&request, html);
        } else if current.request.cache_key() == key {
            self.hover.set_phase(HoverPhase::Showing);
            self.show_current(&html);
        } else {
            tracing::debug!("Discarding stale response {}", key);
        }
    }

    // --- Internals ---

    fn resolve_single(&mut self, request: &TooltipRequest) {
        let hit = self
            .cache
            .lookup(&ResponseCache::key_for(request))
            .map(|entry| entry.html.clone());
        match hit {
            Some(html) => {
                self.hover.set_phase(HoverPhase::Showing);
                self.show_current(&html);
            }
            None => {
                self.hover.set_phase(HoverPhase::WaitingForFetch);
                self.issue_fetch(request);
            }
        }
    }

    fn resolve_composite(&mut self, request: &TooltipRequest) {
        let (Some(skill), Some(rune)) = (request.skill_part(), request.rune_part()) else {
            return;
        };

        let skill_html = self.lookup_or_fetch(&skill);
        let rune_html = self.lookup_or_fetch(&rune);

        if let (Some(skill_html), Some(rune_html)) = (&skill_html, &rune_html) {
            self.hover.set_phase(HoverPhase::Showing);
            self.merge_and_show(rune_html, skill_html);
            return;
        }

        self.hover.set_phase(HoverPhase::WaitingForBothFetches);
        if let Some(current) = self.hover.current.as_mut() {
            current.composite = CompositeProgress {
                skill_html,
                rune_html,
            };
        }
    }

    fn lookup_or_fetch(&mut self, request: &TooltipRequest) -> Option<String> {
        let hit = self
            .cache
            .lookup(&ResponseCache::key_for(request))
            .map(|entry| entry.html.clone());
        if hit.is_none() {
            self.issue_fetch(request);
        }
        hit
    }

    fn on_composite_half(&mut self, request: &TooltipRequest, html: String) {
        let Some(current) = self.hover.current.as_mut() else {
            return;
        };
        let expected = match request.kind {
            TooltipKind::Skill => current.request.skill_part(),
            TooltipKind::Rune => current.request.rune_part(),
            _ => None,
        };
        if expected.map(|e| e.cache_key()) != Some(request.cache_key()) {
            tracing::debug!("Discarding {} response not part of current hover", request.cache_key());
            return;
        }

        tracing::debug!("Stashed {} half of {}", request.kind, current.request.key);
        if request.kind == TooltipKind::Skill {
            current.composite.skill_html = Some(html);
        } else {
            current.composite.rune_html = Some(html);
        }

        if let Some((skill_html, rune_html)) = current.composite.take_complete() {
            current.phase = HoverPhase::Showing;
            self.merge_and_show(&rune_html, &skill_html);
        }
    }

    fn merge_and_show(&mut self, rune_html: &str, skill_html: &str) {
        match merge_skill_and_rune(rune_html, skill_html) {
            Ok(merged) => self.show_current(&merged),
            Err(e) => {
                tracing::warn!("Showing skill without rune: {}", e);
                self.show_current(skill_html);
            }
        }
    }

    fn issue_fetch(&mut self, request: &TooltipRequest) {
        self.loading_deadline = Some(Instant::now() + self.loading_delay);

        let token = RequestToken(self.next_token);
        self.next_token += 1;
        self.outstanding.insert(token, request.clone());

        tracing::debug!("Fetching {} as {:?}", request.cache_key(), token);
        self.gateway.fetch(token, request);
    }

    fn show_current(&mut self, html: &str) {
        if let Some(current) = &self.hover.current {
            self.surface.show(&current.element, html);
        }
    }
}
