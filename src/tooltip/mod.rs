//! Hover tooltip engine.
//!
//! Classifies hovered links, serves rendered tooltips from a page-lifetime
//! cache, fetches what is missing and correlates the asynchronous responses
//! with whatever is hovered when they arrive.

pub mod cache;
pub mod controller;
pub mod fetch;
pub mod merge;
pub mod placement;
pub mod request;
pub mod router;
pub mod surface;

pub use cache::{CachedEntry, ResponseCache};
pub use controller::{HoverPhase, HoverState, TooltipController};
pub use fetch::{FetchGateway, FetchResponse, RequestToken, TooltipPayload, decode_payload};
pub use request::{CacheKey, TooltipKind, TooltipRequest};
pub use router::UrlRouter;
pub use surface::{HoverTarget, PresentationSurface};
