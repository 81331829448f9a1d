//! Slide elements: positioned, styled text/shape/image objects.

use crate::geometry::{self, MIN_ELEMENT_SIZE};
use crate::style::ElementStyle;
use kurbo::{Point, Rect, Size, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for elements. Never reused within a session.
pub type ElementId = Uuid;

/// Offset applied to duplicated elements so the copy is visible.
pub const DUPLICATE_OFFSET: Vec2 = Vec2::new(20.0, 20.0);

/// Default size for text elements created by the empty-canvas shortcut.
pub const DEFAULT_TEXT_SIZE: Size = Size::new(160.0, 40.0);

/// Shape variants the elements panel can insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Rectangle,
    RoundedRectangle,
    Ellipse,
    Triangle,
    Diamond,
    Arrow,
    Star,
    Line,
}

/// What an element holds, which also determines its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ElementContent {
    /// Text content.
    Text(String),
    /// A shape tag; geometry comes from position/size.
    Shape(ShapeKind),
    /// Reference to an uploaded or linked image (URL or asset key).
    Image(String),
}

/// Element kind, derived from the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementKind {
    Text,
    Shape,
    Image,
}

/// A positioned, styled object on a slide.
///
/// Position and size are in slide-local, un-zoomed units. Width and height
/// never drop below [`MIN_ELEMENT_SIZE`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub(crate) id: ElementId,
    pub content: ElementContent,
    /// Top-left corner position.
    pub position: Point,
    pub size: Size,
    pub style: ElementStyle,
}

impl Element {
    /// Create a new element with a fresh identifier. Size is floored at the
    /// minimum on both axes.
    pub fn new(content: ElementContent, position: Point, size: Size) -> Self {
        Self {
            id: Uuid::new_v4(),
            content,
            position,
            size: floor_size(size),
            style: ElementStyle::default(),
        }
    }

    /// Create a new element with an initial style.
    pub fn with_style(mut self, style: ElementStyle) -> Self {
        self.style = style;
        self
    }

    /// The element's identifier.
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// The element kind implied by its content.
    pub fn kind(&self) -> ElementKind {
        match self.content {
            ElementContent::Text(_) => ElementKind::Text,
            ElementContent::Shape(_) => ElementKind::Shape,
            ElementContent::Image(_) => ElementKind::Image,
        }
    }

    /// Bounding rectangle in slide coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.position.x + self.size.width,
            self.position.y + self.size.height,
        )
    }

    /// Check whether a slide-space point hits this element's body.
    pub fn hit_test(&self, point: Point, tolerance: f64) -> bool {
        self.bounds().inflate(tolerance, tolerance).contains(point)
    }

    /// Rotation in degrees, read from the style transform.
    pub fn rotation_deg(&self) -> f64 {
        self.style
            .transform
            .as_deref()
            .map(geometry::rotation_deg)
            .unwrap_or(0.0)
    }

    /// Set the rotation, rewriting the style transform in place.
    pub fn set_rotation_deg(&mut self, degrees: f64) {
        let current = self.style.transform.as_deref().unwrap_or("");
        self.style.transform = Some(geometry::with_rotation(current, degrees));
    }

    /// Clone this element with a fresh identifier, offset so the copy does
    /// not sit exactly on top of the original.
    pub(crate) fn duplicated(&self) -> Element {
        let mut copy = self.clone();
        copy.id = Uuid::new_v4();
        copy.position += DUPLICATE_OFFSET;
        copy
    }

    /// Apply a partial update. Style patches merge shallowly; a new size is
    /// floored at the minimum.
    pub(crate) fn apply(&mut self, update: &ElementUpdate) {
        if let Some(content) = &update.content {
            self.content = content.clone();
        }
        if let Some(position) = update.position {
            self.position = position;
        }
        if let Some(size) = update.size {
            self.size = floor_size(size);
        }
        if let Some(style) = &update.style {
            self.style.merge(style);
        }
    }
}

/// Partial element update, the payload shape the option panels produce.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementUpdate {
    pub content: Option<ElementContent>,
    pub position: Option<Point>,
    pub size: Option<Size>,
    /// Merged key-by-key into the existing style, not replaced wholesale.
    pub style: Option<ElementStyle>,
}

impl ElementUpdate {
    /// An update that only moves the element.
    pub fn position(position: Point) -> Self {
        Self {
            position: Some(position),
            ..Default::default()
        }
    }

    /// An update that only patches the style.
    pub fn style(style: ElementStyle) -> Self {
        Self {
            style: Some(style),
            ..Default::default()
        }
    }
}

/// Identifier-free element blueprint, used by templates and the elements
/// panel. Instantiating mints a fresh id every time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementSeed {
    pub content: ElementContent,
    pub position: Point,
    pub size: Size,
    #[serde(default)]
    pub style: ElementStyle,
}

impl ElementSeed {
    pub fn new(content: ElementContent, position: Point, size: Size) -> Self {
        Self {
            content,
            position,
            size,
            style: ElementStyle::default(),
        }
    }

    pub fn with_style(mut self, style: ElementStyle) -> Self {
        self.style = style;
        self
    }

    /// Instantiate a live element with a fresh identifier.
    pub fn instantiate(&self) -> Element {
        Element::new(self.content.clone(), self.position, self.size).with_style(self.style.clone())
    }
}

fn floor_size(size: Size) -> Size {
    Size::new(
        size.width.max(MIN_ELEMENT_SIZE),
        size.height.max(MIN_ELEMENT_SIZE),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_element_floors_size() {
        let el = Element::new(
            ElementContent::Shape(ShapeKind::Rectangle),
            Point::new(0.0, 0.0),
            Size::new(5.0, 12.0),
        );
        assert!((el.size.width - MIN_ELEMENT_SIZE).abs() < f64::EPSILON);
        assert!((el.size.height - MIN_ELEMENT_SIZE).abs() < f64::EPSILON);
    }

    #[test]
    fn test_kind_follows_content() {
        let text = Element::new(
            ElementContent::Text("hi".into()),
            Point::ZERO,
            DEFAULT_TEXT_SIZE,
        );
        assert_eq!(text.kind(), ElementKind::Text);
        let image = Element::new(
            ElementContent::Image("assets/logo.png".into()),
            Point::ZERO,
            Size::new(100.0, 100.0),
        );
        assert_eq!(image.kind(), ElementKind::Image);
    }

    #[test]
    fn test_hit_test_bounds() {
        let el = Element::new(
            ElementContent::Shape(ShapeKind::Ellipse),
            Point::new(100.0, 100.0),
            Size::new(200.0, 50.0),
        );
        assert!(el.hit_test(Point::new(150.0, 120.0), 0.0));
        assert!(!el.hit_test(Point::new(350.0, 120.0), 0.0));
        assert!(el.hit_test(Point::new(305.0, 120.0), 10.0));
    }

    #[test]
    fn test_duplicated_gets_fresh_id_and_offset() {
        let el = Element::new(
            ElementContent::Text("title".into()),
            Point::new(50.0, 50.0),
            Size::new(120.0, 40.0),
        );
        let copy = el.duplicated();
        assert_ne!(copy.id(), el.id());
        assert!((copy.position.x - 70.0).abs() < f64::EPSILON);
        assert!((copy.position.y - 70.0).abs() < f64::EPSILON);
        assert_eq!(copy.content, el.content);
        assert_eq!(copy.style, el.style);
    }

    #[test]
    fn test_apply_merges_style_shallowly() {
        let mut el = Element::new(
            ElementContent::Text("body".into()),
            Point::ZERO,
            DEFAULT_TEXT_SIZE,
        );
        el.style.font_size = Some(18.0);
        el.apply(&ElementUpdate::style(ElementStyle {
            color: Some("#334155".to_string()),
            ..Default::default()
        }));
        assert_eq!(el.style.font_size, Some(18.0));
        assert_eq!(el.style.color.as_deref(), Some("#334155"));
    }

    #[test]
    fn test_apply_floors_size() {
        let mut el = Element::new(
            ElementContent::Shape(ShapeKind::Star),
            Point::ZERO,
            Size::new(100.0, 100.0),
        );
        el.apply(&ElementUpdate {
            size: Some(Size::new(1.0, 300.0)),
            ..Default::default()
        });
        assert!((el.size.width - MIN_ELEMENT_SIZE).abs() < f64::EPSILON);
        assert!((el.size.height - 300.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_rotation_accessors() {
        let mut el = Element::new(
            ElementContent::Shape(ShapeKind::Diamond),
            Point::ZERO,
            Size::new(80.0, 80.0),
        );
        assert!(el.rotation_deg().abs() < f64::EPSILON);
        el.set_rotation_deg(90.0);
        el.set_rotation_deg(el.rotation_deg() + 90.0);
        assert_eq!(el.style.transform.as_deref(), Some("rotate(180deg)"));
    }

    #[test]
    fn test_seed_instantiate_mints_distinct_ids() {
        let seed = ElementSeed::new(
            ElementContent::Text("Heading".into()),
            Point::new(40.0, 40.0),
            Size::new(300.0, 60.0),
        );
        let a = seed.instantiate();
        let b = seed.instantiate();
        assert_ne!(a.id(), b.id());
        assert_eq!(a.content, b.content);
    }
}
