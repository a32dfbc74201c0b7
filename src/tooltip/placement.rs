//! Tooltip panel placement relative to its anchor link.

/// Gap between the anchor and the panel, in pixels.
pub const PANEL_PADDING: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

/// Axis-aligned rectangle in page coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Top-left corner for a panel of `panel` size shown next to `anchor`.
///
/// The panel sits above and to the right of the anchor. It is pushed down to
/// the viewport top if it would start above it, and flipped to the anchor's
/// left side if it would overflow the viewport's right edge.
pub fn place_panel(anchor: Rect, panel: Size, viewport: Rect) -> Point {
    let mut x = anchor.right() + PANEL_PADDING;
    let mut y = anchor.y - panel.height - PANEL_PADDING;

    if y < viewport.y {
        y = viewport.y;
    }
    if x + panel.width > viewport.right() {
        x = anchor.x - panel.width - PANEL_PADDING;
    }
    Point { x, y }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 1000.0,
        height: 800.0,
    };

    #[test]
    fn test_above_right_when_room() {
        let anchor = Rect::new(100.0, 400.0, 80.0, 16.0);
        let p = place_panel(anchor, Size { width: 300.0, height: 200.0 }, VIEWPORT);
        assert_eq!(p, Point { x: 185.0, y: 195.0 });
    }

    #[test]
    fn test_clamped_to_viewport_top() {
        let anchor = Rect::new(100.0, 50.0, 80.0, 16.0);
        let p = place_panel(anchor, Size { width: 300.0, height: 200.0 }, VIEWPORT);
        assert_eq!(p.y, 0.0);
    }

    #[test]
    fn test_flips_left_on_right_overflow() {
        let anchor = Rect::new(800.0, 400.0, 80.0, 16.0);
        let p = place_panel(anchor, Size { width: 300.0, height: 200.0 }, VIEWPORT);
        assert_eq!(p.x, 495.0);
    }

    #[test]
    fn test_scrolled_viewport() {
        let viewport = Rect::new(0.0, 1200.0, 1000.0, 800.0);
        let anchor = Rect::new(100.0, 1250.0, 80.0, 16.0);
        let p = place_panel(anchor, Size { width: 300.0, height: 200.0 }, viewport);
        assert_eq!(p.y, 1200.0);
    }
}
