//! Text tab presets: font sizes, families, weights, and alignment.

use slatedeck_core::{ElementStyle, ElementUpdate};

/// A named font size preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSizePreset {
    pub name: &'static str,
    pub points: f64,
}

/// Font sizes offered by the text tab.
pub const FONT_SIZE_PRESETS: &[FontSizePreset] = &[
    FontSizePreset { name: "Caption", points: 12.0 },
    FontSizePreset { name: "Small", points: 14.0 },
    FontSizePreset { name: "Body", points: 18.0 },
    FontSizePreset { name: "Subtitle", points: 24.0 },
    FontSizePreset { name: "Title", points: 32.0 },
    FontSizePreset { name: "Display", points: 48.0 },
];

/// Font families offered by the text tab.
pub const FONT_FAMILIES: &[&str] = &[
    "Inter",
    "Georgia",
    "Courier Prime",
    "Playfair Display",
    "Montserrat",
];

/// Font weight tokens offered by the text tab.
pub const FONT_WEIGHTS: &[&str] = &["300", "400", "500", "700", "900"];

/// Horizontal alignment tokens.
pub const TEXT_ALIGNMENTS: &[&str] = &["left", "center", "right"];

fn style_update(style: ElementStyle) -> ElementUpdate {
    ElementUpdate::style(style)
}

/// Payload applying a font size preset.
pub fn font_size_update(preset: &FontSizePreset) -> ElementUpdate {
    style_update(ElementStyle {
        font_size: Some(preset.points),
        ..Default::default()
    })
}

/// Payload applying a font family.
pub fn font_family_update(family: &str) -> ElementUpdate {
    style_update(ElementStyle {
        font_family: Some(family.to_string()),
        ..Default::default()
    })
}

/// Payload applying a font weight token.
pub fn font_weight_update(weight: &str) -> ElementUpdate {
    style_update(ElementStyle {
        font_weight: Some(weight.to_string()),
        ..Default::default()
    })
}

/// Payload applying a text alignment token.
pub fn text_align_update(align: &str) -> ElementUpdate {
    style_update(ElementStyle {
        text_align: Some(align.to_string()),
        ..Default::default()
    })
}
