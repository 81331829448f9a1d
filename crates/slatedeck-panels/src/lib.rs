//! Option-panel preset catalogs for the Slatedeck editor.
//!
//! Each tab of the editor shell is a fixed catalog of named presets that
//! produces document-model payloads (`ElementUpdate`, slide attribute
//! values). Panels never read or mutate history; they only build payloads
//! for the model operations, which handle history internally.
//!
//! - **text**: font sizes, families, weights, alignment
//! - **colors**: color swatches and gradient presets
//! - **borders**: border shorthand and corner-radius steps
//! - **effects**: shadows, filters, opacity, animation tags
//! - **inserts**: insertable shape presets

pub mod borders;
pub mod colors;
pub mod effects;
pub mod inserts;
pub mod text;

pub use borders::{
    BORDER_PRESETS, BorderPreset, CORNER_RADIUS_STEPS, border_update, corner_radius_update,
    slide_border,
};
pub use colors::{
    COLOR_SWATCHES, ColorSwatch, GRADIENT_PRESETS, GradientPreset, fill_update,
    slide_background, text_color_update,
};
pub use effects::{
    ANIMATION_TAGS, FILTER_PRESETS, OPACITY_STEPS, SHADOW_PRESETS, animation_update,
    filter_update, opacity_update, shadow_update,
};
pub use inserts::{SHAPE_INSERTS, ShapeInsert, text_insert_seed};
pub use text::{
    FONT_FAMILIES, FONT_SIZE_PRESETS, FONT_WEIGHTS, FontSizePreset, TEXT_ALIGNMENTS,
    font_family_update, font_size_update, font_weight_update, text_align_update,
};
