//! The editor session: selection, zoom, and the pointer gesture machine.
//!
//! All session-wide mutable state lives in [`EditorSession`] and is threaded
//! explicitly through the handlers, which makes the state machine testable
//! without any UI. Handlers always read the current selection and slide
//! through the live editor, never a captured snapshot, so a gesture can
//! never apply to a stale element after a slide switch.

use crate::editor::DeckEditor;
use crate::element::{
    DEFAULT_TEXT_SIZE, Element, ElementContent, ElementId, ElementSeed, ElementUpdate,
};
use crate::geometry::{self, CANVAS_SIZE, Zoom};
use crate::gesture::{self, Gesture, HANDLE_HIT_TOLERANCE, HandleHit};
use crate::style::ElementStyle;
use crate::template::SlideTemplate;
use kurbo::{Point, Size};

/// One user's live editing session over a presentation.
///
/// The session layers the ephemeral state (selection, gesture, zoom,
/// text-edit and playback flags) on top of the [`DeckEditor`]; none of it is
/// persisted with the document.
#[derive(Debug)]
pub struct EditorSession {
    editor: DeckEditor,
    selection: Option<ElementId>,
    gesture: Gesture,
    zoom: Zoom,
    canvas: Size,
    text_editing: bool,
    playback: bool,
}

impl EditorSession {
    pub fn new(editor: DeckEditor) -> Self {
        Self {
            editor,
            selection: None,
            gesture: Gesture::Idle,
            zoom: Zoom::default(),
            canvas: CANVAS_SIZE,
            text_editing: false,
            playback: false,
        }
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        Self::new(DeckEditor::with_title(title))
    }

    pub fn editor(&self) -> &DeckEditor {
        &self.editor
    }

    pub fn zoom(&self) -> Zoom {
        self.zoom
    }

    pub fn set_zoom(&mut self, zoom: Zoom) {
        self.zoom = zoom;
    }

    pub fn zoom_in(&mut self) {
        self.zoom = self.zoom.zoomed_in();
    }

    pub fn zoom_out(&mut self) {
        self.zoom = self.zoom.zoomed_out();
    }

    pub fn canvas(&self) -> Size {
        self.canvas
    }

    pub fn set_canvas_size(&mut self, canvas: Size) {
        self.canvas = canvas;
    }

    pub fn selection(&self) -> Option<ElementId> {
        self.selection
    }

    pub fn selected_element(&self) -> Option<&Element> {
        self.editor.active_slide().element(self.selection?)
    }

    pub fn select(&mut self, id: ElementId) {
        if self.editor.active_slide().element(id).is_some() {
            self.selection = Some(id);
        }
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
        self.text_editing = false;
    }

    /// Whether a gesture is in progress. The shell keeps document-level
    /// pointer-move/up listeners bound exactly while this is true.
    pub fn gesture_active(&self) -> bool {
        self.gesture.is_active()
    }

    pub fn is_text_editing(&self) -> bool {
        self.text_editing
    }

    /// Enter text-edit mode on a text element.
    pub fn begin_text_edit(&mut self, id: ElementId) {
        let is_text = self
            .editor
            .active_slide()
            .element(id)
            .is_some_and(|e| matches!(e.content, ElementContent::Text(_)));
        if is_text {
            self.selection = Some(id);
            self.text_editing = true;
        }
    }

    pub fn end_text_edit(&mut self) {
        self.text_editing = false;
    }

    pub fn is_playback(&self) -> bool {
        self.playback
    }

    /// Enter presentation playback: editing state is cleared and pointer
    /// gestures are ignored until playback ends.
    pub fn start_playback(&mut self) {
        self.playback = true;
        self.selection = None;
        self.gesture = Gesture::Idle;
        self.text_editing = false;
    }

    pub fn end_playback(&mut self) {
        self.playback = false;
    }

    // ---- Pointer gesture machine ----

    /// Handle pointer-down at a screen-space position.
    ///
    /// Handle hits on the current selection start resize/rotate gestures;
    /// an element body starts a drag (and becomes the selection); empty
    /// canvas runs the text-creation shortcut.
    pub fn pointer_down(&mut self, screen: Point) {
        if self.playback {
            return;
        }
        if self.gesture.is_active() {
            // Structurally prevented (gesture-start handlers only bind when
            // idle); if it happens anyway, keep the current gesture.
            log::warn!("pointer-down ignored: a gesture is already active");
            return;
        }

        let slide_point = geometry::screen_to_slide(screen, self.zoom);
        let tolerance = HANDLE_HIT_TOLERANCE / self.zoom.factor();

        if let Some(element) = self.selected_element() {
            if let Some(hit) = gesture::hit_test_handles(element.bounds(), slide_point, tolerance)
            {
                self.gesture = match hit {
                    HandleHit::Rotate => Gesture::Rotating { last: screen },
                    HandleHit::Resize(handle) => Gesture::Resizing {
                        handle,
                        last: screen,
                    },
                };
                return;
            }
        }

        if let Some(element) = self
            .editor
            .active_slide()
            .element_at_point(slide_point, 0.0)
        {
            self.selection = Some(element.id());
            self.text_editing = false;
            self.gesture = Gesture::Dragging { last: screen };
            return;
        }

        // Creation shortcut: a click on empty canvas adds a text element
        // centered under the cursor and selects it. Not a gesture.
        let position = Point::new(
            slide_point.x - DEFAULT_TEXT_SIZE.width / 2.0,
            slide_point.y - DEFAULT_TEXT_SIZE.height / 2.0,
        );
        let id = self
            .editor
            .add_element(ElementContent::Text(String::new()), position, DEFAULT_TEXT_SIZE);
        self.selection = Some(id);
        self.text_editing = true;
    }

    /// Handle pointer-move at a screen-space position.
    ///
    /// Deltas are incremental against the last recorded position, which is
    /// updated after every applied move.
    pub fn pointer_move(&mut self, screen: Point) {
        if self.gesture.is_idle() {
            return;
        }
        // The selected element can disappear mid-gesture (deleted, undone);
        // drop back to idle rather than panic.
        let Some(id) = self.selection else {
            self.gesture = Gesture::Idle;
            return;
        };
        let Some(element) = self.editor.active_slide().element(id) else {
            self.gesture = Gesture::Idle;
            return;
        };
        let position = element.position;
        let size = element.size;
        let bounds = element.bounds();
        let transform = element.style.transform.clone().unwrap_or_default();

        match self.gesture {
            Gesture::Idle => {}
            Gesture::Dragging { last } => {
                let delta = geometry::screen_delta_to_slide(screen - last, self.zoom);
                let next = geometry::clamp_position(position + delta, size, self.canvas);
                self.editor.update_element(id, &ElementUpdate::position(next));
            }
            Gesture::Resizing { handle, last } => {
                let delta = geometry::screen_delta_to_slide(screen - last, self.zoom);
                let resized = geometry::resize_from_handle(handle, bounds, delta);
                self.editor.update_element(
                    id,
                    &ElementUpdate {
                        position: Some(resized.origin()),
                        size: Some(resized.size()),
                        ..Default::default()
                    },
                );
            }
            Gesture::Rotating { .. } => {
                let slide_point = geometry::screen_to_slide(screen, self.zoom);
                let angle = geometry::angle_to_pointer(bounds.center(), slide_point) + 90.0;
                self.editor.update_element(
                    id,
                    &ElementUpdate::style(ElementStyle {
                        transform: Some(geometry::with_rotation(&transform, angle)),
                        ..Default::default()
                    }),
                );
            }
        }
        self.gesture.set_last(screen);
    }

    /// Handle pointer-up, wherever it lands. Always ends the gesture.
    pub fn pointer_up(&mut self) {
        self.gesture = Gesture::Idle;
    }

    /// Escape: leave text-edit mode if active, otherwise clear the
    /// selection. An in-progress drag is not rolled back; the incremental
    /// moves already applied stay committed.
    pub fn escape(&mut self) {
        if self.text_editing {
            self.text_editing = false;
            return;
        }
        self.gesture = Gesture::Idle;
        self.selection = None;
    }

    // ---- Document operations with selection side effects ----

    /// Add an element; it becomes the new selection.
    pub fn add_element(
        &mut self,
        content: ElementContent,
        position: Point,
        size: Size,
    ) -> ElementId {
        let id = self.editor.add_element(content, position, size);
        self.selection = Some(id);
        id
    }

    /// Add an element from a panel/template seed; it becomes the selection.
    pub fn add_element_from_seed(&mut self, seed: &ElementSeed) -> ElementId {
        let id = self.editor.add_element_from_seed(seed);
        self.selection = Some(id);
        id
    }

    /// Merge a partial update into an element (panel payloads land here).
    pub fn update_element(&mut self, id: ElementId, update: &ElementUpdate) {
        self.editor.update_element(id, update);
    }

    /// Delete an element, clearing selection and gesture if it was selected.
    pub fn delete_element(&mut self, id: ElementId) -> bool {
        let deleted = self.editor.delete_element(id);
        if deleted && self.selection == Some(id) {
            self.selection = None;
            self.gesture = Gesture::Idle;
            self.text_editing = false;
        }
        deleted
    }

    /// Duplicate an element; the copy becomes the selection.
    pub fn duplicate_element(&mut self, id: ElementId) -> Option<ElementId> {
        let copy = self.editor.duplicate_element(id)?;
        self.selection = Some(copy);
        Some(copy)
    }

    pub fn duplicate_selected(&mut self) -> Option<ElementId> {
        self.duplicate_element(self.selection?)
    }

    /// Delete the selected element; with nothing selected, delete the
    /// current slide instead (when more than one remains).
    pub fn delete_selection_or_slide(&mut self) {
        if let Some(id) = self.selection {
            self.delete_element(id);
        } else if self.editor.slide_count() > 1 {
            let index = self.editor.active_slide_index();
            if let Err(err) = self.editor.delete_slide(index) {
                log::warn!("delete slide {index} refused: {err}");
            }
        }
    }

    /// Quarter-turn rotate buttons.
    pub fn rotate_selected_right(&mut self) {
        self.rotate_selected_by(geometry::ROTATE_STEP_QUARTER);
    }

    pub fn rotate_selected_left(&mut self) {
        self.rotate_selected_by(-geometry::ROTATE_STEP_QUARTER);
    }

    /// Fine rotate buttons (15° per click).
    pub fn nudge_selected_rotation(&mut self, clockwise: bool) {
        let step = if clockwise {
            geometry::ROTATE_STEP_SMALL
        } else {
            -geometry::ROTATE_STEP_SMALL
        };
        self.rotate_selected_by(step);
    }

    /// Rotate the selected element by a discrete step in degrees.
    pub fn rotate_selected_by(&mut self, degrees: f64) {
        let Some(element) = self.selected_element() else {
            return;
        };
        let id = element.id();
        let transform = element.style.transform.clone().unwrap_or_default();
        let next = geometry::with_rotation(&transform, geometry::rotation_deg(&transform) + degrees);
        self.editor.update_element(
            id,
            &ElementUpdate::style(ElementStyle {
                transform: Some(next),
                ..Default::default()
            }),
        );
    }

    /// Undo on the active slide; selection is reconciled afterwards since
    /// the restored snapshot may not contain the selected element.
    pub fn undo(&mut self) -> bool {
        let did = self.editor.undo();
        if did {
            self.reconcile_selection();
        }
        did
    }

    pub fn redo(&mut self) -> bool {
        let did = self.editor.redo();
        if did {
            self.reconcile_selection();
        }
        did
    }

    pub fn can_undo(&self) -> bool {
        self.editor.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.editor.can_redo()
    }

    // ---- Slide navigation and structure ----

    /// Switch slides. Selection, gesture, and text-edit state are scoped to
    /// a slide and reset on switch.
    pub fn set_active_slide(&mut self, index: usize) -> usize {
        let index = self.editor.set_active_slide(index);
        self.selection = None;
        self.gesture = Gesture::Idle;
        self.text_editing = false;
        index
    }

    pub fn next_slide(&mut self) -> usize {
        self.set_active_slide(self.editor.active_slide_index() + 1)
    }

    pub fn prev_slide(&mut self) -> usize {
        let index = self.editor.active_slide_index();
        self.set_active_slide(index.saturating_sub(1))
    }

    pub fn add_slide(&mut self, at: usize) -> usize {
        let at = self.editor.add_slide(at, &[]);
        self.selection = None;
        self.gesture = Gesture::Idle;
        self.text_editing = false;
        at
    }

    /// Insert a template slide after the active one and switch to it.
    pub fn insert_template_slide(&mut self, template: &SlideTemplate) -> usize {
        let at = self.editor.insert_template_slide(template);
        self.selection = None;
        self.gesture = Gesture::Idle;
        self.text_editing = false;
        at
    }

    /// Mutable access to the underlying editor for operations without
    /// selection side effects (slide attributes, z-order, structure).
    pub fn editor_mut(&mut self) -> &mut DeckEditor {
        &mut self.editor
    }

    fn reconcile_selection(&mut self) {
        if let Some(id) = self.selection {
            if self.editor.active_slide().element(id).is_none() {
                self.selection = None;
                self.gesture = Gesture::Idle;
                self.text_editing = false;
            }
        }
    }
}
