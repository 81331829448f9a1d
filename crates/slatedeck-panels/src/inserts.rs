//! Elements tab: insertable shape presets.

use slatedeck_core::element::DEFAULT_TEXT_SIZE;
use slatedeck_core::{ElementContent, ElementSeed, ElementStyle, ShapeKind};
use slatedeck_core::geometry::CANVAS_SIZE;

/// An insertable shape preset with its default footprint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeInsert {
    pub name: &'static str,
    pub kind: ShapeKind,
    pub width: f64,
    pub height: f64,
}

/// The shape catalog of the elements tab.
pub const SHAPE_INSERTS: &[ShapeInsert] = &[
    ShapeInsert { name: "Rectangle", kind: ShapeKind::Rectangle, width: 160.0, height: 100.0 },
    ShapeInsert { name: "Rounded rectangle", kind: ShapeKind::RoundedRectangle, width: 160.0, height: 100.0 },
    ShapeInsert { name: "Ellipse", kind: ShapeKind::Ellipse, width: 120.0, height: 120.0 },
    ShapeInsert { name: "Triangle", kind: ShapeKind::Triangle, width: 120.0, height: 110.0 },
    ShapeInsert { name: "Diamond", kind: ShapeKind::Diamond, width: 120.0, height: 120.0 },
    ShapeInsert { name: "Arrow", kind: ShapeKind::Arrow, width: 160.0, height: 60.0 },
    ShapeInsert { name: "Star", kind: ShapeKind::Star, width: 120.0, height: 120.0 },
    ShapeInsert { name: "Line", kind: ShapeKind::Line, width: 200.0, height: 20.0 },
];

impl ShapeInsert {
    /// Build a seed placing this shape centered on the canvas with the
    /// default fill.
    pub fn seed(&self) -> ElementSeed {
        let position = kurbo::Point::new(
            (CANVAS_SIZE.width - self.width) / 2.0,
            (CANVAS_SIZE.height - self.height) / 2.0,
        );
        ElementSeed::new(
            ElementContent::Shape(self.kind),
            position,
            kurbo::Size::new(self.width, self.height),
        )
        .with_style(ElementStyle {
            background: Some("#3b82f6".to_string()),
            ..Default::default()
        })
    }
}

/// Seed for a default text box at the canvas center (the toolbar's "add
/// text" button, as opposed to the click-to-create shortcut).
pub fn text_insert_seed() -> ElementSeed {
    let position = kurbo::Point::new(
        (CANVAS_SIZE.width - DEFAULT_TEXT_SIZE.width) / 2.0,
        (CANVAS_SIZE.height - DEFAULT_TEXT_SIZE.height) / 2.0,
    );
    ElementSeed::new(
        ElementContent::Text("Text".to_string()),
        position,
        DEFAULT_TEXT_SIZE,
    )
}
