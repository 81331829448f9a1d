//! Border tab presets: border shorthand strings and corner-radius steps.
//!
//! The same payloads serve elements (via `ElementUpdate`) and slides (via
//! the `set_slide_border`/`set_slide_corner_radius` model operations).

use slatedeck_core::{ElementStyle, ElementUpdate};

/// A named border preset, stored as a CSS-like shorthand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderPreset {
    pub name: &'static str,
    pub css: &'static str,
}

/// Border styles offered by the border tab.
pub const BORDER_PRESETS: &[BorderPreset] = &[
    BorderPreset { name: "None", css: "none" },
    BorderPreset { name: "Hairline", css: "1px solid #cbd5e1" },
    BorderPreset { name: "Thin", css: "1px solid #0f172a" },
    BorderPreset { name: "Medium", css: "2px solid #0f172a" },
    BorderPreset { name: "Thick", css: "4px solid #0f172a" },
    BorderPreset { name: "Dashed", css: "2px dashed #475569" },
    BorderPreset { name: "Dotted", css: "2px dotted #475569" },
];

/// Corner radius steps in slide units.
pub const CORNER_RADIUS_STEPS: &[f64] = &[0.0, 4.0, 8.0, 16.0, 24.0];

/// Payload applying a border preset to an element.
pub fn border_update(preset: &BorderPreset) -> ElementUpdate {
    ElementUpdate::style(ElementStyle {
        border: Some(preset.css.to_string()),
        ..Default::default()
    })
}

/// Payload applying a corner radius to an element.
pub fn corner_radius_update(radius: f64) -> ElementUpdate {
    ElementUpdate::style(ElementStyle {
        border_radius: Some(radius),
        ..Default::default()
    })
}

/// Slide border value for a preset ("None" clears the border).
pub fn slide_border(preset: &BorderPreset) -> Option<String> {
    (preset.css != "none").then(|| preset.css.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_update_payload() {
        let update = border_update(&BORDER_PRESETS[3]);
        assert_eq!(
            update.style.unwrap().border.as_deref(),
            Some("2px solid #0f172a")
        );
    }

    #[test]
    fn test_none_preset_clears_slide_border() {
        assert_eq!(slide_border(&BORDER_PRESETS[0]), None);
        assert!(slide_border(&BORDER_PRESETS[1]).is_some());
    }

    #[test]
    fn test_radius_steps_ascending() {
        for pair in CORNER_RADIUS_STEPS.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
}
