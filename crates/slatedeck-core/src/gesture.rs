//! Gesture states and manipulation-handle hit testing.

use crate::geometry::ResizeHandle;
use kurbo::{Point, Rect};

/// Distance from the top edge to the rotation handle, in slide units.
pub const ROTATE_HANDLE_OFFSET: f64 = 25.0;

/// Handle hit tolerance in screen pixels; divide by the zoom factor before
/// testing in slide coordinates.
pub const HANDLE_HIT_TOLERANCE: f64 = 10.0;

/// Which grab point of a selected element a pointer-down landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleHit {
    Resize(ResizeHandle),
    Rotate,
}

/// The active pointer gesture. Exactly one is in effect at any time.
///
/// `last` is the last recorded pointer position in screen space; deltas are
/// computed incrementally against it and it is updated after every applied
/// move, so multi-step drags do not compound zoom-division error.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Dragging { last: Point },
    Resizing { handle: ResizeHandle, last: Point },
    Rotating { last: Point },
}

impl Gesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }

    pub fn is_active(&self) -> bool {
        !self.is_idle()
    }

    /// Update the recorded pointer position of an active gesture.
    pub(crate) fn set_last(&mut self, point: Point) {
        match self {
            Gesture::Idle => {}
            Gesture::Dragging { last }
            | Gesture::Resizing { last, .. }
            | Gesture::Rotating { last } => *last = point,
        }
    }
}

/// Position of the rotation handle for an element's bounds: above the
/// top-center of the box.
pub fn rotation_handle_position(bounds: Rect) -> Point {
    Point::new(bounds.center().x, bounds.y0 - ROTATE_HANDLE_OFFSET)
}

/// Test a slide-space point against an element's handles: the rotation grab
/// first, then the four corners. `tolerance` is in slide units.
pub fn hit_test_handles(bounds: Rect, point: Point, tolerance: f64) -> Option<HandleHit> {
    if within(rotation_handle_position(bounds), point, tolerance) {
        return Some(HandleHit::Rotate);
    }
    ResizeHandle::all()
        .into_iter()
        .find(|h| within(h.position(bounds), point, tolerance))
        .map(HandleHit::Resize)
}

fn within(handle: Point, point: Point, tolerance: f64) -> bool {
    let dx = point.x - handle.x;
    let dy = point.y - handle.y;
    dx * dx + dy * dy <= tolerance * tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Rect = Rect::new(100.0, 100.0, 300.0, 150.0);

    #[test]
    fn test_corner_handle_hits() {
        let hit = hit_test_handles(BOUNDS, Point::new(101.0, 99.0), 5.0);
        assert_eq!(hit, Some(HandleHit::Resize(ResizeHandle::TopLeft)));

        let hit = hit_test_handles(BOUNDS, Point::new(299.0, 151.0), 5.0);
        assert_eq!(hit, Some(HandleHit::Resize(ResizeHandle::BottomRight)));
    }

    #[test]
    fn test_rotation_handle_above_top_center() {
        let pos = rotation_handle_position(BOUNDS);
        assert!((pos.x - 200.0).abs() < f64::EPSILON);
        assert!((pos.y - 75.0).abs() < f64::EPSILON);

        let hit = hit_test_handles(BOUNDS, pos, 5.0);
        assert_eq!(hit, Some(HandleHit::Rotate));
    }

    #[test]
    fn test_body_point_hits_no_handle() {
        assert!(hit_test_handles(BOUNDS, Point::new(200.0, 125.0), 5.0).is_none());
    }

    #[test]
    fn test_gesture_last_point_updates() {
        let mut g = Gesture::Dragging {
            last: Point::new(10.0, 10.0),
        };
        g.set_last(Point::new(20.0, 30.0));
        assert_eq!(
            g,
            Gesture::Dragging {
                last: Point::new(20.0, 30.0)
            }
        );
        assert!(g.is_active());
        assert!(Gesture::Idle.is_idle());
    }
}
