//! Unified component styling
//!
//! `Style` is the single presentation record shared by configuration
//! overrides (`stl`), the computed static/dynamic styles of a component and
//! the rendered `Element` tree.
//!
//! All properties are optional. When merging, only properties that are set
//! on the overriding style replace the base, which lets state-specific
//! styles touch just the properties that change.
//!
//! # Example
//!
//! ```rust
//! use ember_core::{Color, Display, Style};
//!
//! let base = Style::new().background_color(Color::BLUE).border_radius(8.0);
//! let hidden = Style::new().display(Display::None);
//!
//! let merged = base.merge(&hidden);
//! assert_eq!(merged.display, Some(Display::None));
//! assert_eq!(merged.border_radius, Some(8.0));
//! ```

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Layout display mode
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Display {
    /// Participates in layout (flexbox)
    #[default]
    Flex,
    /// Removed from layout entirely
    None,
}

impl Display {
    /// Whether this display mode hides the element
    pub fn is_hidden(&self) -> bool {
        matches!(self, Display::None)
    }
}

/// Font weight
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Medium,
    Bold,
}

/// Visual style properties for a component
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Style {
    /// Opacity (0.0 = transparent, 1.0 = opaque)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
    /// Display mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<Display>,
    /// Foreground (text) color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Background fill
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_radius: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<FontWeight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f32>,
}

impl Style {
    /// Create a new empty style
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // State-dependent properties
    // =========================================================================

    /// Set opacity (0.0 = transparent, 1.0 = opaque)
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity.clamp(0.0, 1.0));
        self
    }

    /// Set display mode
    pub fn display(mut self, display: Display) -> Self {
        self.display = Some(display);
        self
    }

    /// Hide the element (`display: none`)
    pub fn hidden(self) -> Self {
        self.display(Display::None)
    }

    // =========================================================================
    // Colors
    // =========================================================================

    /// Set foreground color
    pub fn color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// Set background color
    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    /// Set a border
    pub fn border(mut self, width: f32, color: Color) -> Self {
        self.border_width = Some(width);
        self.border_color = Some(color);
        self
    }

    // =========================================================================
    // Box model
    // =========================================================================

    pub fn border_radius(mut self, radius: f32) -> Self {
        self.border_radius = Some(radius);
        self
    }

    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = Some(padding);
        self
    }

    pub fn margin(mut self, margin: f32) -> Self {
        self.margin = Some(margin);
        self
    }

    pub fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = Some(height);
        self
    }

    // =========================================================================
    // Typography
    // =========================================================================

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn font_weight(mut self, weight: FontWeight) -> Self {
        self.font_weight = Some(weight);
        self
    }

    // =========================================================================
    // Merging
    // =========================================================================

    /// Merge another style on top of this one
    ///
    /// Properties from `other` will override properties in `self` if they are set.
    /// Unset properties in `other` will not override.
    pub fn merge(&self, other: &Style) -> Style {
        Style {
            opacity: other.opacity.or(self.opacity),
            display: other.display.or(self.display),
            color: other.color.or(self.color),
            background_color: other.background_color.or(self.background_color),
            border_color: other.border_color.or(self.border_color),
            border_width: other.border_width.or(self.border_width),
            border_radius: other.border_radius.or(self.border_radius),
            padding: other.padding.or(self.padding),
            margin: other.margin.or(self.margin),
            font_size: other.font_size.or(self.font_size),
            font_weight: other.font_weight.or(self.font_weight),
            width: other.width.or(self.width),
            height: other.height.or(self.height),
        }
    }

    /// Copy of this style with the state-dependent properties
    /// (`opacity`, `display`) cleared
    pub fn without_dynamic(&self) -> Style {
        Style {
            opacity: None,
            display: None,
            ..self.clone()
        }
    }

    /// Check if any property is set
    pub fn is_empty(&self) -> bool {
        *self == Style::default()
    }
}

/// Create a new style
pub fn style() -> Style {
    Style::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_builder() {
        let s = style()
            .background_color(Color::BLUE)
            .border_radius(8.0)
            .opacity(1.5);

        assert_eq!(s.background_color, Some(Color::BLUE));
        assert_eq!(s.border_radius, Some(8.0));
        // Clamped
        assert_eq!(s.opacity, Some(1.0));
    }

    #[test]
    fn test_style_merge() {
        let base = style().background_color(Color::BLUE).padding(4.0).opacity(0.5);
        let overlay = style().background_color(Color::GREEN).display(Display::None);

        let merged = base.merge(&overlay);

        assert_eq!(merged.background_color, Some(Color::GREEN));
        assert_eq!(merged.padding, Some(4.0));
        assert_eq!(merged.opacity, Some(0.5));
        assert_eq!(merged.display, Some(Display::None));
    }

    #[test]
    fn test_without_dynamic() {
        let s = style()
            .opacity(0.3)
            .display(Display::Flex)
            .color(Color::RED)
            .margin(2.0);

        let stripped = s.without_dynamic();
        assert_eq!(stripped.opacity, None);
        assert_eq!(stripped.display, None);
        assert_eq!(stripped.color, Some(Color::RED));
        assert_eq!(stripped.margin, Some(2.0));
    }

    #[test]
    fn test_style_empty() {
        assert!(Style::new().is_empty());
        assert!(!style().hidden().is_empty());
    }

    #[test]
    fn test_deserialize_camel_case() {
        let s: Style = serde_json::from_str(
            r##"{ "opacity": 0.9, "display": "flex", "backgroundColor": "#ff0000", "fontWeight": "bold" }"##,
        )
        .unwrap();

        assert_eq!(s.opacity, Some(0.9));
        assert_eq!(s.display, Some(Display::Flex));
        assert_eq!(s.background_color, Some(Color::RED));
        assert_eq!(s.font_weight, Some(FontWeight::Bold));
    }
}
