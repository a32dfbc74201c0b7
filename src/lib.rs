//! Diablo III tooltips
//!
//! Rich hover tooltips for game-content links (items, skills, runes) and a
//! random build generator whose output links are tooltip-ready.

pub mod build;
pub mod config;
pub mod error;
pub mod gateway;
pub mod tooltip;

pub use config::TooltipConfig;
pub use error::{Error, Result};
