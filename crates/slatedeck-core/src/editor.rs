//! The sanctioned mutation path for presentations.
//!
//! [`DeckEditor`] pairs a [`Presentation`] with its per-slide history and an
//! active-slide index. Every mutating operation follows the same shape:
//! record the pre-mutation snapshot, apply, commit the post-mutation state.
//! Operations addressing a missing element id are silent no-ops (callers
//! must tolerate stale ids after slide switches) and take no snapshot.

use crate::document::{Presentation, Slide};
use crate::element::{Element, ElementContent, ElementId, ElementSeed, ElementUpdate};
use crate::history::HistoryManager;
use crate::style::{Background, SlideStyle};
use crate::template::SlideTemplate;
use kurbo::{Point, Size};
use thiserror::Error;

/// Logical errors for operations with a precondition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    /// A presentation always contains at least one slide.
    #[error("cannot delete the last remaining slide")]
    LastSlide,
    #[error("slide index {0} is out of range")]
    SlideOutOfRange(usize),
}

/// Editing facade over a presentation: active slide, mutations, undo/redo.
#[derive(Debug, Clone)]
pub struct DeckEditor {
    presentation: Presentation,
    history: HistoryManager,
    active_slide: usize,
}

impl DeckEditor {
    /// Wrap an existing presentation, seeding history for the first slide.
    /// An empty slide list (possible only in hand-edited files) is repaired
    /// to keep the at-least-one-slide invariant.
    pub fn new(mut presentation: Presentation) -> Self {
        if presentation.slides.is_empty() {
            presentation.slides.push(Slide::new());
        }
        let mut editor = Self {
            presentation,
            history: HistoryManager::new(),
            active_slide: 0,
        };
        editor.history.seed(0, &editor.presentation.slides[0]);
        editor
    }

    /// Create an editor over a fresh single-slide presentation.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self::new(Presentation::new(title))
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    /// Consume the editor, returning the document for persistence/export.
    pub fn into_presentation(self) -> Presentation {
        self.presentation
    }

    pub fn slide_count(&self) -> usize {
        self.presentation.slide_count()
    }

    pub fn active_slide_index(&self) -> usize {
        self.active_slide
    }

    pub fn active_slide(&self) -> &Slide {
        &self.presentation.slides[self.active_slide]
    }

    /// Switch the active slide, clamping into range and seeding history so
    /// undo state is well-defined the moment a slide is first observed.
    pub fn set_active_slide(&mut self, index: usize) -> usize {
        self.active_slide = index.min(self.presentation.slide_count() - 1);
        self.history
            .seed(self.active_slide, &self.presentation.slides[self.active_slide]);
        self.active_slide
    }

    /// Run one mutation of the slide at `index` inside a record/commit pair.
    fn mutate_slide<R>(&mut self, index: usize, f: impl FnOnce(&mut Slide) -> R) -> R {
        self.history.record(index, &self.presentation.slides[index]);
        let out = f(&mut self.presentation.slides[index]);
        self.history.commit(index, &self.presentation.slides[index]);
        self.presentation.touch();
        out
    }

    fn mutate_active<R>(&mut self, f: impl FnOnce(&mut Slide) -> R) -> R {
        self.mutate_slide(self.active_slide, f)
    }

    // ---- Element operations (active slide) ----

    /// Add an element on top of the active slide, returning its fresh id.
    pub fn add_element(
        &mut self,
        content: ElementContent,
        position: Point,
        size: Size,
    ) -> ElementId {
        self.mutate_active(|slide| {
            let element = Element::new(content, position, size);
            let id = element.id();
            slide.elements.push(element);
            id
        })
    }

    /// Add an element from an id-free seed (template/panel insertion).
    pub fn add_element_from_seed(&mut self, seed: &ElementSeed) -> ElementId {
        self.mutate_active(|slide| {
            let element = seed.instantiate();
            let id = element.id();
            slide.elements.push(element);
            id
        })
    }

    /// Merge a partial update into the element with the given id. Silent
    /// no-op when the id does not exist on the active slide.
    pub fn update_element(&mut self, id: ElementId, update: &ElementUpdate) {
        if self.active_slide().element(id).is_none() {
            return;
        }
        self.mutate_active(|slide| {
            if let Some(element) = slide.element_mut(id) {
                element.apply(update);
            }
        });
    }

    /// Remove an element. Returns false (and takes no snapshot) if absent.
    pub fn delete_element(&mut self, id: ElementId) -> bool {
        if self.active_slide().element(id).is_none() {
            return false;
        }
        self.mutate_active(|slide| slide.remove_element(id).is_some())
    }

    /// Clone an element with a fresh id, offset by (+20, +20), on top.
    pub fn duplicate_element(&mut self, id: ElementId) -> Option<ElementId> {
        if self.active_slide().element(id).is_none() {
            return None;
        }
        self.mutate_active(|slide| {
            let copy = slide.element(id)?.duplicated();
            let copy_id = copy.id();
            slide.elements.push(copy);
            Some(copy_id)
        })
    }

    // ---- Z-order operations ----

    pub fn bring_to_front(&mut self, id: ElementId) {
        if self.active_slide().element(id).is_none() {
            return;
        }
        self.mutate_active(|slide| {
            if let Some(element) = slide.remove_element(id) {
                slide.elements.push(element);
            }
        });
    }

    pub fn send_to_back(&mut self, id: ElementId) {
        if self.active_slide().element(id).is_none() {
            return;
        }
        self.mutate_active(|slide| {
            if let Some(element) = slide.remove_element(id) {
                slide.elements.insert(0, element);
            }
        });
    }

    /// Swap one layer towards the front. Returns false at the top.
    pub fn bring_forward(&mut self, id: ElementId) -> bool {
        let Some(index) = self.active_slide().index_of(id) else {
            return false;
        };
        if index + 1 >= self.active_slide().elements.len() {
            return false;
        }
        self.mutate_active(|slide| slide.elements.swap(index, index + 1));
        true
    }

    /// Swap one layer towards the back. Returns false at the bottom.
    pub fn send_backward(&mut self, id: ElementId) -> bool {
        let Some(index) = self.active_slide().index_of(id) else {
            return false;
        };
        if index == 0 {
            return false;
        }
        self.mutate_active(|slide| slide.elements.swap(index, index - 1));
        true
    }

    // ---- Slide attribute operations ----

    pub fn set_slide_background(&mut self, background: Background) {
        self.mutate_active(|slide| slide.background = background);
    }

    pub fn set_slide_border(&mut self, border: Option<String>) {
        self.mutate_active(|slide| slide.border = border);
    }

    pub fn set_slide_corner_radius(&mut self, radius: Option<f64>) {
        self.mutate_active(|slide| slide.corner_radius = radius);
    }

    pub fn set_slide_notes(&mut self, notes: Option<String>) {
        self.mutate_active(|slide| slide.notes = notes);
    }

    /// Shallow-merge a patch into the slide-level style bag.
    pub fn merge_slide_style(&mut self, patch: &SlideStyle) {
        self.mutate_active(|slide| slide.style.merge(patch));
    }

    // ---- Structural slide operations ----

    /// Insert a slide built from seeds at `at` (clamped to the end) and make
    /// it active. Structural operations are not undoable; per-slide stacks
    /// are re-keyed so neighbours keep their own history.
    pub fn add_slide(&mut self, at: usize, seeds: &[ElementSeed]) -> usize {
        let at = at.min(self.presentation.slide_count());
        let slide = Slide::from_seeds(seeds);
        self.history.slide_inserted(at);
        self.presentation.slides.insert(at, slide);
        self.history.seed(at, &self.presentation.slides[at]);
        self.presentation.touch();
        self.active_slide = at;
        at
    }

    /// Insert a template's slide after the active one and make it active.
    pub fn insert_template_slide(&mut self, template: &SlideTemplate) -> usize {
        let at = self.add_slide(self.active_slide + 1, &template.elements);
        self.mutate_slide(at, |slide| slide.background = template.background.clone());
        at
    }

    /// Replace every element of a slide with fresh instances of the seeds
    /// (template application to an existing slide). Undoable.
    pub fn replace_elements(&mut self, index: usize, seeds: &[ElementSeed]) -> Result<(), EditorError> {
        if index >= self.presentation.slide_count() {
            return Err(EditorError::SlideOutOfRange(index));
        }
        self.mutate_slide(index, |slide| {
            slide.elements = seeds.iter().map(ElementSeed::instantiate).collect();
        });
        Ok(())
    }

    /// Duplicate a slide (fresh slide and element ids), insert it right
    /// after the original, and make the copy active.
    pub fn duplicate_slide(&mut self, index: usize) -> Result<usize, EditorError> {
        let Some(slide) = self.presentation.slide(index) else {
            return Err(EditorError::SlideOutOfRange(index));
        };
        let copy = slide.duplicated();
        let at = index + 1;
        self.history.slide_inserted(at);
        self.presentation.slides.insert(at, copy);
        self.history.seed(at, &self.presentation.slides[at]);
        self.presentation.touch();
        self.active_slide = at;
        Ok(at)
    }

    /// Delete a slide. Refuses to delete the last remaining slide, leaving
    /// the presentation unchanged.
    pub fn delete_slide(&mut self, index: usize) -> Result<(), EditorError> {
        if index >= self.presentation.slide_count() {
            return Err(EditorError::SlideOutOfRange(index));
        }
        if self.presentation.slide_count() == 1 {
            return Err(EditorError::LastSlide);
        }
        self.presentation.slides.remove(index);
        self.history.slide_removed(index);
        if self.active_slide >= self.presentation.slide_count() {
            self.active_slide = self.presentation.slide_count() - 1;
        } else if self.active_slide > index {
            self.active_slide -= 1;
        }
        self.history
            .seed(self.active_slide, &self.presentation.slides[self.active_slide]);
        self.presentation.touch();
        Ok(())
    }

    // ---- Undo/redo ----

    /// Undo the last mutation of the active slide. Returns false at the
    /// bottom of the stack.
    pub fn undo(&mut self) -> bool {
        self.undo_slide(self.active_slide)
    }

    /// Redo the last undone mutation of the active slide.
    pub fn redo(&mut self) -> bool {
        self.redo_slide(self.active_slide)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo(self.active_slide)
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo(self.active_slide)
    }

    /// Undo scoped to an explicit slide index; never affects other slides.
    pub fn undo_slide(&mut self, index: usize) -> bool {
        match self.history.undo(index) {
            Some(snapshot) => {
                self.presentation.slides[index] = snapshot;
                self.presentation.touch();
                true
            }
            None => false,
        }
    }

    /// Redo scoped to an explicit slide index.
    pub fn redo_slide(&mut self, index: usize) -> bool {
        match self.history.redo(index) {
            Some(snapshot) => {
                self.presentation.slides[index] = snapshot;
                self.presentation.touch();
                true
            }
            None => false,
        }
    }
}
