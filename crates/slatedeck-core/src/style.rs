//! Sparse style records with shallow-merge update semantics.
//!
//! Styles are deliberately enumerated: the option panels only ever write a
//! fixed set of keys, so every recognized key is an explicit optional field
//! rather than a free-form map.

use serde::{Deserialize, Serialize};

/// Style record for a single element. Every field is optional; an unset
/// field means "inherit the renderer default".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementStyle {
    /// Font size in points (text elements).
    pub font_size: Option<f64>,
    /// Font family name.
    pub font_family: Option<String>,
    /// Font weight token ("400", "700", "bold", ...).
    pub font_weight: Option<String>,
    /// Horizontal text alignment ("left" | "center" | "right").
    pub text_align: Option<String>,
    /// Foreground/text color token.
    pub color: Option<String>,
    /// Fill/background color or gradient token.
    pub background: Option<String>,
    /// Border shorthand ("1px solid #0f172a").
    pub border: Option<String>,
    /// Corner radius in slide units.
    pub border_radius: Option<f64>,
    /// Opacity in [0, 1].
    pub opacity: Option<f64>,
    /// 2-D transform string encoding rotation and flips ("rotate(90deg) scaleX(-1)").
    pub transform: Option<String>,
    /// CSS-like filter token ("blur(4px)", "grayscale(1)").
    pub filter: Option<String>,
    /// Drop-shadow token.
    pub shadow: Option<String>,
    /// Entrance animation tag ("fade-in", "slide-up").
    pub animation: Option<String>,
    /// Line height multiplier (text elements).
    pub line_height: Option<f64>,
    /// Letter spacing in points (text elements).
    pub letter_spacing: Option<f64>,
}

impl ElementStyle {
    /// Shallow-merge a patch into this style: set fields of the patch
    /// override, unset fields leave the existing value untouched.
    pub fn merge(&mut self, patch: &ElementStyle) {
        macro_rules! take {
            ($field:ident) => {
                if patch.$field.is_some() {
                    self.$field = patch.$field.clone();
                }
            };
        }
        take!(font_size);
        take!(font_family);
        take!(font_weight);
        take!(text_align);
        take!(color);
        take!(background);
        take!(border);
        take!(border_radius);
        take!(opacity);
        take!(transform);
        take!(filter);
        take!(shadow);
        take!(animation);
        take!(line_height);
        take!(letter_spacing);
    }
}

/// Slide-level style bag.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideStyle {
    /// Drop-shadow token applied to the slide frame.
    pub shadow: Option<String>,
    /// CSS-like filter applied to the whole slide.
    pub filter: Option<String>,
}

impl SlideStyle {
    /// Shallow-merge a patch into this style.
    pub fn merge(&mut self, patch: &SlideStyle) {
        if patch.shadow.is_some() {
            self.shadow = patch.shadow.clone();
        }
        if patch.filter.is_some() {
            self.filter = patch.filter.clone();
        }
    }
}

/// Slide background descriptor: a solid color token or a CSS-like gradient
/// string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Background {
    /// Solid color token ("#ffffff", "slate-100").
    Color(String),
    /// Gradient string ("linear-gradient(135deg, #667eea, #764ba2)").
    Gradient(String),
}

impl Background {
    /// The raw descriptor string a renderer would consume.
    pub fn descriptor(&self) -> &str {
        match self {
            Background::Color(s) | Background::Gradient(s) => s,
        }
    }
}

impl Default for Background {
    fn default() -> Self {
        Background::Color("#ffffff".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_overrides_set_fields_only() {
        let mut style = ElementStyle {
            font_size: Some(18.0),
            color: Some("#111111".to_string()),
            ..Default::default()
        };
        let patch = ElementStyle {
            color: Some("#ff0000".to_string()),
            opacity: Some(0.5),
            ..Default::default()
        };
        style.merge(&patch);

        assert_eq!(style.font_size, Some(18.0));
        assert_eq!(style.color.as_deref(), Some("#ff0000"));
        assert_eq!(style.opacity, Some(0.5));
    }

    #[test]
    fn test_merge_empty_patch_is_noop() {
        let mut style = ElementStyle {
            transform: Some("rotate(45deg)".to_string()),
            ..Default::default()
        };
        let before = style.clone();
        style.merge(&ElementStyle::default());
        assert_eq!(style, before);
    }

    #[test]
    fn test_background_default_is_white() {
        assert_eq!(Background::default().descriptor(), "#ffffff");
    }

    #[test]
    fn test_style_json_roundtrip() {
        let style = ElementStyle {
            font_size: Some(32.0),
            transform: Some("rotate(90deg)".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&style).unwrap();
        let back: ElementStyle = serde_json::from_str(&json).unwrap();
        assert_eq!(style, back);
    }
}
