//! Presentation and slide data model.
//!
//! These types are pure serde data; all mutation goes through
//! [`crate::editor::DeckEditor`] so that history snapshots and structural
//! invariants are enforced in one place.

use crate::element::{Element, ElementId, ElementSeed};
use crate::style::{Background, SlideStyle};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;
use uuid::Uuid;

/// A single slide: an ordered set of elements plus presentation attributes.
///
/// Insertion order is z-order; later elements render on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slide {
    pub(crate) id: Uuid,
    pub elements: Vec<Element>,
    pub background: Background,
    /// Border shorthand for the slide frame.
    pub border: Option<String>,
    /// Corner radius of the slide frame in slide units.
    pub corner_radius: Option<f64>,
    pub style: SlideStyle,
    /// Speaker notes.
    pub notes: Option<String>,
}

impl Slide {
    /// Create an empty slide with the default background.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            elements: Vec::new(),
            background: Background::default(),
            border: None,
            corner_radius: None,
            style: SlideStyle::default(),
            notes: None,
        }
    }

    /// Create a slide populated from element seeds (template application).
    pub fn from_seeds(seeds: &[ElementSeed]) -> Self {
        let mut slide = Self::new();
        slide.elements = seeds.iter().map(ElementSeed::instantiate).collect();
        slide
    }

    /// The slide's identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Look up an element by id.
    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id() == id)
    }

    /// Look up an element mutably by id.
    pub(crate) fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id() == id)
    }

    /// Position of an element in the z-order.
    pub fn index_of(&self, id: ElementId) -> Option<usize> {
        self.elements.iter().position(|e| e.id() == id)
    }

    /// Topmost element whose body contains the given slide-space point.
    pub fn element_at_point(&self, point: Point, tolerance: f64) -> Option<&Element> {
        self.elements
            .iter()
            .rev()
            .find(|e| e.hit_test(point, tolerance))
    }

    /// Remove an element by id, returning it if present.
    pub(crate) fn remove_element(&mut self, id: ElementId) -> Option<Element> {
        let index = self.index_of(id)?;
        Some(self.elements.remove(index))
    }

    /// Clone this slide with fresh slide and element identifiers.
    pub(crate) fn duplicated(&self) -> Slide {
        let mut copy = self.clone();
        copy.id = Uuid::new_v4();
        for element in &mut copy.elements {
            element.id = Uuid::new_v4();
        }
        copy
    }
}

impl Default for Slide {
    fn default() -> Self {
        Self::new()
    }
}

/// The root aggregate: a titled, ordered sequence of slides.
///
/// A presentation always contains at least one slide; the editor refuses to
/// delete the last one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Presentation {
    pub id: Uuid,
    pub title: String,
    pub slides: Vec<Slide>,
    pub created_at: SystemTime,
    pub modified_at: SystemTime,
}

impl Presentation {
    /// Create a presentation with a single blank slide.
    pub fn new(title: impl Into<String>) -> Self {
        let now = SystemTime::now();
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            slides: vec![Slide::new()],
            created_at: now,
            modified_at: now,
        }
    }

    /// Number of slides (always ≥ 1).
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Slide at an index.
    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Bump the modification timestamp.
    pub(crate) fn touch(&mut self) {
        self.modified_at = SystemTime::now();
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{ElementContent, ShapeKind};
    use kurbo::Size;

    fn sample_element() -> Element {
        Element::new(
            ElementContent::Shape(ShapeKind::Rectangle),
            Point::new(10.0, 10.0),
            Size::new(100.0, 50.0),
        )
    }

    #[test]
    fn test_new_presentation_has_one_slide() {
        let p = Presentation::new("Untitled");
        assert_eq!(p.slide_count(), 1);
        assert!(p.slide(0).unwrap().elements.is_empty());
    }

    #[test]
    fn test_element_lookup() {
        let mut slide = Slide::new();
        let el = sample_element();
        let id = el.id();
        slide.elements.push(el);

        assert!(slide.element(id).is_some());
        assert_eq!(slide.index_of(id), Some(0));
        assert!(slide.element(Uuid::new_v4()).is_none());
    }

    #[test]
    fn test_element_at_point_prefers_topmost() {
        let mut slide = Slide::new();
        let bottom = sample_element();
        let mut top = sample_element();
        top.position = Point::new(10.0, 10.0);
        let top_id = top.id();
        slide.elements.push(bottom);
        slide.elements.push(top);

        let hit = slide.element_at_point(Point::new(20.0, 20.0), 0.0).unwrap();
        assert_eq!(hit.id(), top_id);
    }

    #[test]
    fn test_duplicated_slide_mints_fresh_ids() {
        let mut slide = Slide::new();
        slide.elements.push(sample_element());
        let copy = slide.duplicated();

        assert_ne!(copy.id(), slide.id());
        assert_ne!(copy.elements[0].id(), slide.elements[0].id());
        assert_eq!(copy.elements[0].content, slide.elements[0].content);
    }

    #[test]
    fn test_presentation_json_roundtrip() {
        let mut p = Presentation::new("Quarterly review");
        p.slides[0].elements.push(sample_element());
        p.slides[0].notes = Some("open with the numbers".to_string());

        let json = p.to_json().unwrap();
        let back = Presentation::from_json(&json).unwrap();
        assert_eq!(p, back);
    }
}
