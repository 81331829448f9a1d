//! Color swatches and gradient presets for the style and design tabs.
//!
//! Swatch values are the 500-level shades of the Tailwind CSS palette plus
//! a neutral ramp, stored as hex tokens the document model consumes.

use slatedeck_core::{Background, ElementStyle, ElementUpdate};

/// A named color swatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSwatch {
    pub name: &'static str,
    pub hex: &'static str,
}

/// The swatch grid offered by the color picker.
pub const COLOR_SWATCHES: &[ColorSwatch] = &[
    ColorSwatch { name: "Red", hex: "#ef4444" },
    ColorSwatch { name: "Orange", hex: "#f97316" },
    ColorSwatch { name: "Amber", hex: "#f59e0b" },
    ColorSwatch { name: "Yellow", hex: "#eab308" },
    ColorSwatch { name: "Lime", hex: "#84cc16" },
    ColorSwatch { name: "Green", hex: "#22c55e" },
    ColorSwatch { name: "Emerald", hex: "#10b981" },
    ColorSwatch { name: "Teal", hex: "#14b8a6" },
    ColorSwatch { name: "Cyan", hex: "#06b6d4" },
    ColorSwatch { name: "Sky", hex: "#0ea5e9" },
    ColorSwatch { name: "Blue", hex: "#3b82f6" },
    ColorSwatch { name: "Indigo", hex: "#6366f1" },
    ColorSwatch { name: "Violet", hex: "#8b5cf6" },
    ColorSwatch { name: "Purple", hex: "#a855f7" },
    ColorSwatch { name: "Fuchsia", hex: "#d946ef" },
    ColorSwatch { name: "Pink", hex: "#ec4899" },
    ColorSwatch { name: "Rose", hex: "#f43f5e" },
    ColorSwatch { name: "Slate", hex: "#64748b" },
    ColorSwatch { name: "White", hex: "#ffffff" },
    ColorSwatch { name: "Black", hex: "#0f172a" },
];

impl ColorSwatch {
    /// Look up a swatch by name.
    pub fn by_name(name: &str) -> Option<&'static ColorSwatch> {
        COLOR_SWATCHES.iter().find(|c| c.name == name)
    }
}

/// A named gradient preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientPreset {
    pub name: &'static str,
    pub css: &'static str,
}

/// Gradient backgrounds offered by the design tab.
pub const GRADIENT_PRESETS: &[GradientPreset] = &[
    GradientPreset {
        name: "Dusk",
        css: "linear-gradient(135deg, #667eea, #764ba2)",
    },
    GradientPreset {
        name: "Sunset",
        css: "linear-gradient(135deg, #f97316, #ec4899)",
    },
    GradientPreset {
        name: "Ocean",
        css: "linear-gradient(135deg, #0ea5e9, #6366f1)",
    },
    GradientPreset {
        name: "Forest",
        css: "linear-gradient(135deg, #22c55e, #14b8a6)",
    },
    GradientPreset {
        name: "Graphite",
        css: "linear-gradient(135deg, #1e293b, #475569)",
    },
];

/// Payload setting an element's text color.
pub fn text_color_update(hex: &str) -> ElementUpdate {
    ElementUpdate::style(ElementStyle {
        color: Some(hex.to_string()),
        ..Default::default()
    })
}

/// Payload setting an element's fill.
pub fn fill_update(hex: &str) -> ElementUpdate {
    ElementUpdate::style(ElementStyle {
        background: Some(hex.to_string()),
        ..Default::default()
    })
}

/// Background descriptor for a slide from a swatch or gradient preset.
pub fn slide_background(swatch: Option<&ColorSwatch>, gradient: Option<&GradientPreset>) -> Background {
    match (swatch, gradient) {
        (_, Some(g)) => Background::Gradient(g.css.to_string()),
        (Some(c), None) => Background::Color(c.hex.to_string()),
        (None, None) => Background::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swatch_lookup() {
        let blue = ColorSwatch::by_name("Blue").unwrap();
        assert_eq!(blue.hex, "#3b82f6");
        assert!(ColorSwatch::by_name("Chartreuse").is_none());
    }

    #[test]
    fn test_swatches_are_hex_tokens() {
        for swatch in COLOR_SWATCHES {
            assert!(swatch.hex.starts_with('#'));
            assert_eq!(swatch.hex.len(), 7);
        }
    }

    #[test]
    fn test_fill_update_targets_background() {
        let update = fill_update("#3b82f6");
        let style = update.style.unwrap();
        assert_eq!(style.background.as_deref(), Some("#3b82f6"));
        assert!(style.color.is_none());
    }

    #[test]
    fn test_slide_background_prefers_gradient() {
        let swatch = ColorSwatch::by_name("Blue");
        let gradient = &GRADIENT_PRESETS[0];
        assert!(matches!(
            slide_background(swatch, Some(gradient)),
            Background::Gradient(_)
        ));
        assert!(matches!(
            slide_background(swatch, None),
            Background::Color(hex) if hex == "#3b82f6"
        ));
    }
}
