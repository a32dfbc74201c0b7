//! Hover targets and the presentation surface seam.

use super::placement::Rect;

/// Markup shown while a fetch is still outstanding.
pub const LOADING_HTML: &str = r#"<div class="d3-tooltip"><div class="loading"></div></div>"#;

/// How many ancestors to walk when looking for the link under the pointer.
pub const LINK_SEARCH_DEPTH: usize = 5;

/// A link element the pointer can hover.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverTarget {
    /// Element identity; two targets are the same element iff ids match.
    pub id: u64,
    pub href: String,
    /// Page-space bounds, used by surfaces to place the panel.
    pub bounds: Rect,
}

impl HoverTarget {
    pub fn new(id: u64, href: impl Into<String>) -> Self {
        Self {
            id,
            href: href.into(),
            bounds: Rect::default(),
        }
    }

    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }
}

/// A node on the path from the pointer's event target up to the document.
#[derive(Debug, Clone, PartialEq)]
pub struct DomNode {
    pub id: u64,
    pub tag: String,
    pub href: Option<String>,
    pub bounds: Rect,
}

/// Find the link an event landed on: the event target itself or one of its
/// nearest ancestors. `path` starts at the event target.
pub fn find_link(path: &[DomNode]) -> Option<HoverTarget> {
    path.iter()
        .take(LINK_SEARCH_DEPTH)
        .find(|node| node.tag.eq_ignore_ascii_case("a"))
        .map(|node| HoverTarget {
            id: node.id,
            href: node.href.clone().unwrap_or_default(),
            bounds: node.bounds,
        })
}

/// Floating panel that displays tooltip markup next to an anchor.
pub trait PresentationSurface {
    fn show(&mut self, anchor: &HoverTarget, html: &str);
    fn hide(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: u64, tag: &str) -> DomNode {
        DomNode {
            id,
            tag: tag.to_string(),
            href: (tag == "A").then(|| format!("https://us.example.org/d3/en/item/{id}")),
            bounds: Rect::default(),
        }
    }

    #[test]
    fn test_find_link_walks_up() {
        let path = vec![node(1, "span"), node(2, "em"), node(3, "A"), node(4, "p")];
        let link = find_link(&path).unwrap();
        assert_eq!(link.id, 3);
        assert!(link.href.ends_with("/item/3"));
    }

    #[test]
    fn test_find_link_gives_up_after_depth() {
        let mut path: Vec<DomNode> = (0..LINK_SEARCH_DEPTH as u64).map(|i| node(i, "span")).collect();
        path.push(node(99, "A"));
        assert!(find_link(&path).is_none());
    }
}
