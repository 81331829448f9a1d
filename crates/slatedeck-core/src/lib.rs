//! Slatedeck Core Library
//!
//! Headless engine for the Slatedeck slide editor: the presentation document
//! model, the pointer gesture state machine, and per-slide undo/redo.
//! Rendering and real export encoders live outside this crate and connect
//! through the collaborator traits in [`storage`] and [`export`].

pub mod document;
pub mod editor;
pub mod element;
pub mod export;
pub mod geometry;
pub mod gesture;
pub mod history;
pub mod session;
pub mod storage;
pub mod style;
pub mod template;

pub use document::{Presentation, Slide};
pub use editor::{DeckEditor, EditorError};
pub use element::{Element, ElementContent, ElementId, ElementSeed, ElementUpdate, ShapeKind};
pub use geometry::{MIN_ELEMENT_SIZE, ResizeHandle, Zoom};
pub use gesture::Gesture;
pub use history::MAX_HISTORY_DEPTH;
pub use session::EditorSession;
pub use style::{Background, ElementStyle, SlideStyle};
pub use template::{SlideTemplate, builtin_templates};
