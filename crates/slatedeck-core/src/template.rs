//! Slide templates: id-free slide blueprints supplied by the catalog.
//!
//! Applying a template always instantiates fresh element identifiers, either
//! as a new slide or by replacing an existing slide's elements.

use crate::element::{ElementContent, ElementSeed};
use crate::geometry::CANVAS_SIZE;
use crate::style::{Background, ElementStyle};
use kurbo::{Point, Size};
use serde::{Deserialize, Serialize};

/// A reusable slide layout from the template catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideTemplate {
    pub name: String,
    pub background: Background,
    pub elements: Vec<ElementSeed>,
}

impl SlideTemplate {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            background: Background::default(),
            elements: Vec::new(),
        }
    }

    pub fn with_background(mut self, background: Background) -> Self {
        self.background = background;
        self
    }

    pub fn with_element(mut self, seed: ElementSeed) -> Self {
        self.elements.push(seed);
        self
    }
}

fn heading_style(font_size: f64) -> ElementStyle {
    ElementStyle {
        font_size: Some(font_size),
        font_weight: Some("700".to_string()),
        color: Some("#0f172a".to_string()),
        ..Default::default()
    }
}

fn body_style() -> ElementStyle {
    ElementStyle {
        font_size: Some(18.0),
        color: Some("#334155".to_string()),
        line_height: Some(1.5),
        ..Default::default()
    }
}

/// The built-in template catalog.
pub fn builtin_templates() -> Vec<SlideTemplate> {
    let w = CANVAS_SIZE.width;
    vec![
        SlideTemplate::new("Blank"),
        SlideTemplate::new("Title")
            .with_element(
                ElementSeed::new(
                    ElementContent::Text("Presentation title".to_string()),
                    Point::new(80.0, 150.0),
                    Size::new(w - 160.0, 80.0),
                )
                .with_style(heading_style(48.0)),
            )
            .with_element(
                ElementSeed::new(
                    ElementContent::Text("Subtitle".to_string()),
                    Point::new(80.0, 250.0),
                    Size::new(w - 160.0, 40.0),
                )
                .with_style(body_style()),
            ),
        SlideTemplate::new("Title and body")
            .with_element(
                ElementSeed::new(
                    ElementContent::Text("Section heading".to_string()),
                    Point::new(60.0, 40.0),
                    Size::new(w - 120.0, 60.0),
                )
                .with_style(heading_style(32.0)),
            )
            .with_element(
                ElementSeed::new(
                    ElementContent::Text("Body text".to_string()),
                    Point::new(60.0, 130.0),
                    Size::new(w - 120.0, 260.0),
                )
                .with_style(body_style()),
            ),
        SlideTemplate::new("Two columns")
            .with_element(
                ElementSeed::new(
                    ElementContent::Text("Heading".to_string()),
                    Point::new(60.0, 40.0),
                    Size::new(w - 120.0, 60.0),
                )
                .with_style(heading_style(32.0)),
            )
            .with_element(
                ElementSeed::new(
                    ElementContent::Text("Left column".to_string()),
                    Point::new(60.0, 130.0),
                    Size::new(w / 2.0 - 90.0, 260.0),
                )
                .with_style(body_style()),
            )
            .with_element(
                ElementSeed::new(
                    ElementContent::Text("Right column".to_string()),
                    Point::new(w / 2.0 + 30.0, 130.0),
                    Size::new(w / 2.0 - 90.0, 260.0),
                )
                .with_style(body_style()),
            ),
        SlideTemplate::new("Section header")
            .with_background(Background::Gradient(
                "linear-gradient(135deg, #1e293b, #334155)".to_string(),
            ))
            .with_element(
                ElementSeed::new(
                    ElementContent::Text("Section".to_string()),
                    Point::new(80.0, 190.0),
                    Size::new(w - 160.0, 70.0),
                )
                .with_style(ElementStyle {
                    font_size: Some(40.0),
                    font_weight: Some("700".to_string()),
                    color: Some("#f8fafc".to_string()),
                    ..Default::default()
                }),
            ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::DeckEditor;

    #[test]
    fn test_builtin_catalog_is_nonempty() {
        let templates = builtin_templates();
        assert!(templates.len() >= 5);
        assert!(templates.iter().any(|t| t.name == "Blank"));
    }

    #[test]
    fn test_insert_template_slide_instantiates_fresh_ids() {
        let templates = builtin_templates();
        let title = templates.iter().find(|t| t.name == "Title").unwrap();

        let mut editor = DeckEditor::with_title("Deck");
        let first = editor.insert_template_slide(title);
        let second = editor.insert_template_slide(title);

        let a = &editor.presentation().slide(first).unwrap().elements;
        let b = &editor.presentation().slide(second).unwrap().elements;
        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 2);
        assert_ne!(a[0].id(), b[0].id());
    }

    #[test]
    fn test_template_background_applied() {
        let templates = builtin_templates();
        let section = templates.iter().find(|t| t.name == "Section header").unwrap();

        let mut editor = DeckEditor::with_title("Deck");
        let at = editor.insert_template_slide(section);
        let slide = editor.presentation().slide(at).unwrap();
        assert!(matches!(slide.background, Background::Gradient(_)));
    }
}
