//! Link URL classification.
//!
//! A link is tooltip-eligible when it matches
//! `https?://{region}.{domain}/{product}/{locale}/{path}` and `{path}` matches
//! one of [`ROUTES`]. Routes are tried in table order and the first acceptable
//! match wins, so the order of [`ROUTES`] is part of the contract.

use std::sync::OnceLock;

use regex::Regex;

use super::request::{TooltipKind, TooltipRequest};
use crate::Result;

/// A path shape and the kind of request it produces.
///
/// Each pattern captures `(folder, key)` and optionally a third `extra`
/// group (the rune letter).
pub struct Route {
    pub name: &'static str,
    pub pattern: &'static str,
    pub kind: TooltipKind,
}

/// Route table in priority order.
///
/// `[^#?]+` keeps query strings and fragments out of keys.
pub const ROUTES: [Route; 8] = [
    Route {
        name: "item",
        pattern: r"^item/()([^#?]+)$",
        kind: TooltipKind::Item,
    },
    Route {
        name: "artisan-recipe",
        pattern: r"^artisan/([^/]+)/recipe/([^#?]+)$",
        kind: TooltipKind::Recipe,
    },
    Route {
        name: "active-skill",
        pattern: r"^class/([^/]+)/active/([^#?]+)$",
        kind: TooltipKind::Skill,
    },
    Route {
        name: "passive-skill",
        pattern: r"^class/([^/]+)/passive/([^#?]+)$",
        kind: TooltipKind::Skill,
    },
    Route {
        name: "follower-skill",
        pattern: r"^follower/([^/]+)/skill/([^#]+)",
        kind: TooltipKind::Skill,
    },
    Route {
        name: "calculator",
        pattern: r"^calculator/([^#]+)[#/](.+)",
        kind: TooltipKind::Calculator,
    },
    Route {
        name: "skill-rune",
        pattern: r"^class/([^/]+)/active/([^#?]+)#([a-zA-Z])$",
        kind: TooltipKind::Rune,
    },
    Route {
        name: "skill-and-rune",
        pattern: r"^class/([^/]+)/active/([^#?]+)#([a-zA-Z])\+$",
        kind: TooltipKind::SkillAndRune,
    },
];

fn compiled_routes() -> &'static [(Regex, &'static Route)] {
    static CACHE: OnceLock<Vec<(Regex, &'static Route)>> = OnceLock::new();
    CACHE.get_or_init(|| {
        ROUTES
            .iter()
            .map(|route| (Regex::new(route.pattern).expect("invalid route regex"), route))
            .collect()
    })
}

/// Classifies hovered link URLs into [`TooltipRequest`]s.
#[derive(Debug, Clone)]
pub struct UrlRouter {
    base: Regex,
}

impl UrlRouter {
    /// Router for links on `{region}.{domain}/{product}/...`.
    pub fn new(domain: &str, product: &str) -> Result<Self> {
        let base = Regex::new(&format!(
            r"^https?://([a-z]{{2}})\.{}/{}/([a-z]{{2}})/(.+)",
            regex::escape(domain),
            regex::escape(product),
        ))?;
        Ok(Self { base })
    }

    /// Classify a link URL. Returns `None` for links that should not get a tooltip.
    pub fn classify(&self, url: &str) -> Option<TooltipRequest> {
        let Some(caps) = self.base.captures(url) else {
            tracing::trace!("Not a tooltip link: {}", url);
            return None;
        };
        let region = &caps[1];
        let locale = &caps[2];
        let rest = &caps[3];

        for (regex, route) in compiled_routes() {
            let Some(m) = regex.captures(rest) else {
                continue;
            };
            let folder = m.get(1).map_or("", |g| g.as_str());
            let key = m.get(2).map_or("", |g| g.as_str());

            // Folder and key are single path segments.
            if folder.contains('/') || key.contains('/') {
                tracing::trace!("Route {} rejected {}: nested path", route.name, rest);
                continue;
            }

            let mut request = TooltipRequest::new(route.kind, region, locale, folder, key);
            if let Some(extra) = m.get(3).map(|g| g.as_str()).filter(|e| !e.is_empty()) {
                request.folder = key.to_string();
                request.key = format!("{key}-{extra}");
                request.owner_class = Some(folder.to_string());
            }
            return Some(request);
        }

        tracing::trace!("No route for {}", url);
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> UrlRouter {
        UrlRouter::new("example.org", "d3").unwrap()
    }

    #[test]
    fn test_route_order_is_stable() {
        let names: Vec<&str> = ROUTES.iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec![
                "item",
                "artisan-recipe",
                "active-skill",
                "passive-skill",
                "follower-skill",
                "calculator",
                "skill-rune",
                "skill-and-rune",
            ]
        );
    }

    #[test]
    fn test_all_routes_compile() {
        assert_eq!(compiled_routes().len(), ROUTES.len());
    }

    #[test]
    fn test_foreign_host_is_unroutable() {
        let r = router();
        assert!(r.classify("https://us.other.org/d3/en/item/the-gavel").is_none());
        assert!(r.classify("https://us.example.org/wow/en/item/the-gavel").is_none());
        assert!(r.classify("ftp://us.example.org/d3/en/item/the-gavel").is_none());
    }

    #[test]
    fn test_unknown_path_is_unroutable() {
        assert!(router().classify("https://us.example.org/d3/en/forum/topic/1").is_none());
    }

    #[test]
    fn test_domain_is_escaped() {
        let r = router();
        assert!(r.classify("https://us.exampleXorg/d3/en/item/the-gavel").is_none());
    }

    #[test]
    fn test_item_has_empty_folder() {
        let req = router()
            .classify("http://eu.example.org/d3/fr/item/the-gavel")
            .unwrap();
        assert_eq!(req.kind, TooltipKind::Item);
        assert_eq!(req.region, "eu");
        assert_eq!(req.locale, "fr");
        assert_eq!(req.folder, "");
        assert_eq!(req.key, "the-gavel");
        assert_eq!(req.owner_class, None);
    }

    #[test]
    fn test_rune_letter_rewrites_folder_and_key() {
        let req = router()
            .classify("https://us.example.org/d3/en/class/wizard/active/blizzard#c")
            .unwrap();
        assert_eq!(req.kind, TooltipKind::Rune);
        assert_eq!(req.folder, "blizzard");
        assert_eq!(req.key, "blizzard-c");
        assert_eq!(req.owner_class.as_deref(), Some("wizard"));
    }
}
