//! Effects tab presets: shadows, filters, opacity, and animation tags.

use slatedeck_core::{ElementStyle, ElementUpdate};

/// Drop-shadow presets.
pub const SHADOW_PRESETS: &[(&str, &str)] = &[
    ("None", "none"),
    ("Soft", "0 2px 8px rgba(15, 23, 42, 0.12)"),
    ("Medium", "0 6px 16px rgba(15, 23, 42, 0.18)"),
    ("Heavy", "0 12px 32px rgba(15, 23, 42, 0.28)"),
];

/// Filter presets.
pub const FILTER_PRESETS: &[(&str, &str)] = &[
    ("None", "none"),
    ("Blur", "blur(4px)"),
    ("Grayscale", "grayscale(1)"),
    ("Sepia", "sepia(0.8)"),
    ("Brighten", "brightness(1.25)"),
];

/// Opacity steps offered by the slider detents.
pub const OPACITY_STEPS: &[f64] = &[0.25, 0.5, 0.75, 1.0];

/// Entrance animation tags.
pub const ANIMATION_TAGS: &[&str] = &["none", "fade-in", "slide-up", "slide-left", "zoom-in"];

/// Payload applying a shadow preset.
pub fn shadow_update(css: &str) -> ElementUpdate {
    ElementUpdate::style(ElementStyle {
        shadow: Some(css.to_string()),
        ..Default::default()
    })
}

/// Payload applying a filter preset.
pub fn filter_update(css: &str) -> ElementUpdate {
    ElementUpdate::style(ElementStyle {
        filter: Some(css.to_string()),
        ..Default::default()
    })
}

/// Payload applying an opacity step (clamped into [0, 1]).
pub fn opacity_update(opacity: f64) -> ElementUpdate {
    ElementUpdate::style(ElementStyle {
        opacity: Some(opacity.clamp(0.0, 1.0)),
        ..Default::default()
    })
}

/// Payload applying an animation tag.
pub fn animation_update(tag: &str) -> ElementUpdate {
    ElementUpdate::style(ElementStyle {
        animation: Some(tag.to_string()),
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opacity_is_clamped() {
        assert_eq!(opacity_update(2.0).style.unwrap().opacity, Some(1.0));
        assert_eq!(opacity_update(-1.0).style.unwrap().opacity, Some(0.0));
    }

    #[test]
    fn test_animation_tags_include_none() {
        assert_eq!(ANIMATION_TAGS[0], "none");
        let update = animation_update("fade-in");
        assert_eq!(update.style.unwrap().animation.as_deref(), Some("fade-in"));
    }

    #[test]
    fn test_shadow_payload_only_sets_shadow() {
        let (_, css) = SHADOW_PRESETS[1];
        let style = shadow_update(css).style.unwrap();
        assert!(style.shadow.is_some());
        assert!(style.filter.is_none());
        assert!(style.opacity.is_none());
    }
}
