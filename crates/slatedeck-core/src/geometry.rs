//! Pure geometry for pointer-driven editing.
//!
//! Everything in this module is stateless: screen-to-slide delta conversion
//! under zoom, position clamping, handle-anchored resizing, and the rotation
//! helpers that read and write the CSS-like `transform` style string.

use kurbo::{Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};

/// Minimum element width/height in slide units.
pub const MIN_ELEMENT_SIZE: f64 = 20.0;

/// Default slide canvas size in slide units (16:9).
pub const CANVAS_SIZE: Size = Size::new(800.0, 450.0);

/// Discrete rotation step for the small rotate buttons, in degrees.
pub const ROTATE_STEP_SMALL: f64 = 15.0;

/// Discrete rotation step for the quarter-turn rotate buttons, in degrees.
pub const ROTATE_STEP_QUARTER: f64 = 90.0;

/// Canvas zoom percentage, clamped to the range the zoom control offers.
///
/// Zoom scales the on-screen canvas only; stored element coordinates are
/// always in un-zoomed slide units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Zoom(f64);

impl Zoom {
    /// Minimum zoom percentage.
    pub const MIN_PERCENT: f64 = 25.0;
    /// Maximum zoom percentage.
    pub const MAX_PERCENT: f64 = 200.0;
    /// Step applied by the zoom in/out controls.
    pub const STEP_PERCENT: f64 = 25.0;

    /// Create a zoom level, clamping the percentage into [25, 200].
    pub fn new(percent: f64) -> Self {
        Self(percent.clamp(Self::MIN_PERCENT, Self::MAX_PERCENT))
    }

    /// The zoom percentage (25–200).
    pub fn percent(&self) -> f64 {
        self.0
    }

    /// The scale factor applied to the canvas (1.0 at 100%).
    ///
    /// Never zero or negative: the percentage is clamped at construction.
    pub fn factor(&self) -> f64 {
        self.0 / 100.0
    }

    /// One step in.
    pub fn zoomed_in(self) -> Self {
        Self::new(self.0 + Self::STEP_PERCENT)
    }

    /// One step out.
    pub fn zoomed_out(self) -> Self {
        Self::new(self.0 - Self::STEP_PERCENT)
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self(100.0)
    }
}

/// Convert a screen-space pointer delta to a slide-space delta.
pub fn screen_delta_to_slide(delta: Vec2, zoom: Zoom) -> Vec2 {
    delta / zoom.factor()
}

/// Convert a screen-space point to a slide-space point.
///
/// The canvas origin is assumed to coincide with the screen origin; panning
/// is not part of the editing surface.
pub fn screen_to_slide(point: Point, zoom: Zoom) -> Point {
    let f = zoom.factor();
    Point::new(point.x / f, point.y / f)
}

/// Clamp a position so the element rectangle stays fully inside the canvas.
pub fn clamp_position(position: Point, size: Size, canvas: Size) -> Point {
    Point::new(
        position.x.clamp(0.0, (canvas.width - size.width).max(0.0)),
        position.y.clamp(0.0, (canvas.height - size.height).max(0.0)),
    )
}

/// One of the four corner grab points used to resize a selected element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResizeHandle {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ResizeHandle {
    /// All four handles, in layout order.
    pub fn all() -> [ResizeHandle; 4] {
        [
            ResizeHandle::TopLeft,
            ResizeHandle::TopRight,
            ResizeHandle::BottomLeft,
            ResizeHandle::BottomRight,
        ]
    }

    /// Whether dragging this handle moves the left edge (and so the origin x).
    pub fn moves_left_edge(&self) -> bool {
        matches!(self, ResizeHandle::TopLeft | ResizeHandle::BottomLeft)
    }

    /// Whether dragging this handle moves the top edge (and so the origin y).
    pub fn moves_top_edge(&self) -> bool {
        matches!(self, ResizeHandle::TopLeft | ResizeHandle::TopRight)
    }

    /// Position of this handle on a bounding rectangle.
    pub fn position(&self, bounds: Rect) -> Point {
        match self {
            ResizeHandle::TopLeft => Point::new(bounds.x0, bounds.y0),
            ResizeHandle::TopRight => Point::new(bounds.x1, bounds.y0),
            ResizeHandle::BottomLeft => Point::new(bounds.x0, bounds.y1),
            ResizeHandle::BottomRight => Point::new(bounds.x1, bounds.y1),
        }
    }
}

/// Resize a bounding rectangle by dragging one of its corner handles.
///
/// The corner opposite the handle stays anchored. Width and height floor at
/// [`MIN_ELEMENT_SIZE`]; when the floor is hit on an axis, the origin is
/// derived from the anchored edge instead of the raw delta so the anchored
/// corner does not drift.
pub fn resize_from_handle(handle: ResizeHandle, bounds: Rect, delta: Vec2) -> Rect {
    let (x, y) = (bounds.x0, bounds.y0);
    let (w, h) = (bounds.width(), bounds.height());

    let (new_x, new_w) = if handle.moves_left_edge() {
        let shrunk = w - delta.x;
        if shrunk < MIN_ELEMENT_SIZE {
            (x + (w - MIN_ELEMENT_SIZE), MIN_ELEMENT_SIZE)
        } else {
            (x + delta.x, shrunk)
        }
    } else {
        (x, (w + delta.x).max(MIN_ELEMENT_SIZE))
    };

    let (new_y, new_h) = if handle.moves_top_edge() {
        let shrunk = h - delta.y;
        if shrunk < MIN_ELEMENT_SIZE {
            (y + (h - MIN_ELEMENT_SIZE), MIN_ELEMENT_SIZE)
        } else {
            (y + delta.y, shrunk)
        }
    } else {
        (y, (h + delta.y).max(MIN_ELEMENT_SIZE))
    };

    Rect::new(new_x, new_y, new_x + new_w, new_y + new_h)
}

/// Angle in degrees from a center point to a pointer position.
pub fn angle_to_pointer(center: Point, point: Point) -> f64 {
    (point.y - center.y).atan2(point.x - center.x).to_degrees()
}

/// Extract the rotation in degrees from a transform string.
///
/// Returns 0 when the string carries no `rotate(..deg)` token.
pub fn rotation_deg(transform: &str) -> f64 {
    transform
        .split_whitespace()
        .find_map(|token| {
            token
                .strip_prefix("rotate(")?
                .strip_suffix("deg)")?
                .trim()
                .parse::<f64>()
                .ok()
        })
        .unwrap_or(0.0)
}

/// Rewrite the `rotate(..deg)` token of a transform string, normalized into
/// [0, 360). Other tokens (flips, scales) are preserved in place.
pub fn with_rotation(transform: &str, degrees: f64) -> String {
    let normalized = degrees.rem_euclid(360.0);
    let rotate = format!("rotate({normalized}deg)");
    let mut replaced = false;
    let mut tokens: Vec<String> = Vec::new();
    for token in transform.split_whitespace() {
        if token.starts_with("rotate(") {
            tokens.push(rotate.clone());
            replaced = true;
        } else {
            tokens.push(token.to_string());
        }
    }
    if !replaced {
        tokens.push(rotate);
    }
    tokens.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_clamps_to_range() {
        assert!((Zoom::new(10.0).percent() - 25.0).abs() < f64::EPSILON);
        assert!((Zoom::new(500.0).percent() - 200.0).abs() < f64::EPSILON);
        assert!((Zoom::default().factor() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zoom_steps() {
        let z = Zoom::default().zoomed_in();
        assert!((z.percent() - 125.0).abs() < f64::EPSILON);
        let z = Zoom::new(25.0).zoomed_out();
        assert!((z.percent() - 25.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_screen_delta_at_half_zoom() {
        let delta = screen_delta_to_slide(Vec2::new(50.0, -30.0), Zoom::new(50.0));
        assert!((delta.x - 100.0).abs() < f64::EPSILON);
        assert!((delta.y + 60.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_screen_delta_at_full_zoom_is_identity() {
        let delta = screen_delta_to_slide(Vec2::new(750.0, 0.0), Zoom::default());
        assert!((delta.x - 750.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clamp_position_inside_canvas() {
        let pos = clamp_position(Point::new(850.0, 100.0), Size::new(200.0, 50.0), CANVAS_SIZE);
        assert!((pos.x - 600.0).abs() < f64::EPSILON);
        assert!((pos.y - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clamp_position_negative() {
        let pos = clamp_position(Point::new(-40.0, -5.0), Size::new(100.0, 100.0), CANVAS_SIZE);
        assert!((pos.x).abs() < f64::EPSILON);
        assert!((pos.y).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resize_bottom_right_only_changes_size() {
        let bounds = Rect::new(100.0, 100.0, 300.0, 150.0);
        let out = resize_from_handle(ResizeHandle::BottomRight, bounds, Vec2::new(50.0, 30.0));
        assert!((out.x0 - 100.0).abs() < f64::EPSILON);
        assert!((out.y0 - 100.0).abs() < f64::EPSILON);
        assert!((out.width() - 250.0).abs() < f64::EPSILON);
        assert!((out.height() - 80.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resize_top_left_moves_origin() {
        let bounds = Rect::new(100.0, 100.0, 300.0, 150.0);
        let out = resize_from_handle(ResizeHandle::TopLeft, bounds, Vec2::new(10.0, 20.0));
        assert!((out.x0 - 110.0).abs() < f64::EPSILON);
        assert!((out.y0 - 120.0).abs() < f64::EPSILON);
        assert!((out.width() - 190.0).abs() < f64::EPSILON);
        assert!((out.height() - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resize_floors_without_anchor_drift() {
        // Dragging the top-left handle far past the floor: width floors at 20
        // and the right edge (the anchor) must not move.
        let bounds = Rect::new(100.0, 100.0, 300.0, 150.0);
        let out = resize_from_handle(ResizeHandle::TopLeft, bounds, Vec2::new(190.0, 0.0));
        assert!((out.x0 - 280.0).abs() < f64::EPSILON);
        assert!((out.width() - 20.0).abs() < f64::EPSILON);
        assert!((out.x1 - 300.0).abs() < f64::EPSILON);
        assert!((out.height() - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_resize_floor_from_bottom_right() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
        let out = resize_from_handle(ResizeHandle::BottomRight, bounds, Vec2::new(-500.0, -500.0));
        assert!((out.width() - MIN_ELEMENT_SIZE).abs() < f64::EPSILON);
        assert!((out.height() - MIN_ELEMENT_SIZE).abs() < f64::EPSILON);
        assert!((out.x0).abs() < f64::EPSILON);
        assert!((out.y0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_angle_to_pointer() {
        let center = Point::new(0.0, 0.0);
        assert!((angle_to_pointer(center, Point::new(10.0, 0.0))).abs() < 1e-10);
        assert!((angle_to_pointer(center, Point::new(0.0, 10.0)) - 90.0).abs() < 1e-10);
        assert!((angle_to_pointer(center, Point::new(-10.0, 0.0)) - 180.0).abs() < 1e-10);
    }

    #[test]
    fn test_rotation_parse_absent() {
        assert!(rotation_deg("").abs() < f64::EPSILON);
        assert!(rotation_deg("scaleX(-1)").abs() < f64::EPSILON);
    }

    #[test]
    fn test_rotation_roundtrip() {
        let t = with_rotation("", 90.0);
        assert_eq!(t, "rotate(90deg)");
        let t = with_rotation(&t, rotation_deg(&t) + 90.0);
        assert_eq!(t, "rotate(180deg)");
    }

    #[test]
    fn test_rotation_normalizes_modulo_360() {
        assert_eq!(with_rotation("", 450.0), "rotate(90deg)");
        assert_eq!(with_rotation("", -90.0), "rotate(270deg)");
    }

    #[test]
    fn test_rotation_preserves_other_tokens() {
        let t = with_rotation("scaleX(-1) rotate(45deg)", 60.0);
        assert_eq!(t, "scaleX(-1) rotate(60deg)");
    }
}
