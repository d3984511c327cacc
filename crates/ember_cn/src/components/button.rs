//! Button component with themed visual modes
//!
//! A pressable button built on the base [`Wrapper`]. Presses (and long
//! presses, when enabled) emit a standardized interaction event carrying the
//! component id, the button label and pointer metadata.
//!
//! # Example
//!
//! ```rust
//! use ember_cn::prelude::*;
//!
//! let log = EventLog::new();
//! let config = cn::button("submit", ButtonPatch::new().label("Submit").button_type("Outlined"));
//! let button = ButtonWrapper::new(config, log.handlers()).unwrap();
//!
//! assert_eq!(ButtonMode::from_type(&button.config().button_type), ButtonMode::Outlined);
//! assert!(button.press(Interaction::touch(10.0, 4.0)).unwrap());
//! assert_eq!(log.of_type(EventType::Press).len(), 1);
//! ```

use ember_core::{
    element_types, Color, Element, EventKind, FontWeight, Point, PointerKind, PressDetails, Style,
};
use serde::{Deserialize, Serialize};

use crate::config::{create_config, BaseConfig, BasePatch, ConfigFactory, WidgetConfig};
use crate::error::WrapperError;
use crate::wrapper::{Widget, Wrapper};

/// Button visual mode, derived from the configured `type`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ButtonMode {
    /// Filled with the button color
    Contained,
    /// Border only, transparent background
    Outlined,
    /// No background or border
    #[default]
    Text,
}

impl ButtonMode {
    /// Map a configured `type` onto a mode
    ///
    /// Matching is case-insensitive; unrecognized values fall back to
    /// [`ButtonMode::Text`].
    pub fn from_type(button_type: &str) -> Self {
        match button_type.trim().to_ascii_lowercase().as_str() {
            "contained" => ButtonMode::Contained,
            "outlined" => ButtonMode::Outlined,
            _ => ButtonMode::Text,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonMode::Contained => "contained",
            ButtonMode::Outlined => "outlined",
            ButtonMode::Text => "text",
        }
    }
}

/// Button size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    fn height(&self) -> f32 {
        match self {
            ButtonSize::Small => 32.0,
            ButtonSize::Medium => 40.0,
            ButtonSize::Large => 48.0,
        }
    }

    fn padding(&self) -> f32 {
        match self {
            ButtonSize::Small => 8.0,
            ButtonSize::Medium => 12.0,
            ButtonSize::Large => 16.0,
        }
    }

    fn font_size(&self) -> f32 {
        match self {
            ButtonSize::Small => 13.0,
            ButtonSize::Medium => 14.0,
            ButtonSize::Large => 16.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonSize::Small => "small",
            ButtonSize::Medium => "medium",
            ButtonSize::Large => "large",
        }
    }
}

/// Complete button configuration
#[derive(Clone, Debug)]
pub struct ButtonConfig {
    pub base: BaseConfig,
    /// Text shown on the button and carried by press events
    pub label: String,
    /// Palette token (e.g. "primary")
    pub color: String,
    /// Raw visual type; see [`ButtonMode::from_type`]
    pub button_type: String,
    pub size: ButtonSize,
    /// Shows an activity indicator and blocks interaction
    pub loading: bool,
    /// Icon name rendered before the label
    pub icon: Option<String>,
    /// Whether long presses emit events
    pub long_press: bool,
}

impl WidgetConfig for ButtonConfig {
    fn base(&self) -> &BaseConfig {
        &self.base
    }
}

impl ConfigFactory for ButtonConfig {
    type Patch = ButtonPatch;

    fn defaults(id: String) -> Self {
        let mut base = BaseConfig::new(id);
        base.attr.insert("role".into(), "button".into());

        Self {
            base,
            label: "Press me".to_string(),
            color: "primary".to_string(),
            button_type: "contained".to_string(),
            size: ButtonSize::default(),
            loading: false,
            icon: None,
            long_press: false,
        }
    }

    fn apply(mut self, patch: ButtonPatch) -> Self {
        self.base = self.base.apply(patch.base);
        if let Some(label) = patch.label {
            self.label = label;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(button_type) = patch.button_type {
            self.button_type = button_type;
        }
        if let Some(size) = patch.size {
            self.size = size;
        }
        if let Some(loading) = patch.loading {
            self.loading = loading;
        }
        if patch.icon.is_some() {
            self.icon = patch.icon;
        }
        if let Some(long_press) = patch.long_press {
            self.long_press = long_press;
        }
        self
    }
}

/// Partial [`ButtonConfig`]
#[derive(Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ButtonPatch {
    #[serde(flatten)]
    pub base: BasePatch,
    pub label: Option<String>,
    pub color: Option<String>,
    #[serde(rename = "type")]
    pub button_type: Option<String>,
    pub size: Option<ButtonSize>,
    pub loading: Option<bool>,
    pub icon: Option<String>,
    pub long_press: Option<bool>,
}

impl ButtonPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base(mut self, base: BasePatch) -> Self {
        self.base = base;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn button_type(mut self, button_type: impl Into<String>) -> Self {
        self.button_type = Some(button_type.into());
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = Some(loading);
        self
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn long_press(mut self, enabled: bool) -> Self {
        self.long_press = Some(enabled);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.base.disabled = Some(disabled);
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.base.visible = Some(visible);
        self
    }
}

/// Pointer metadata for a press
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Interaction {
    pub pointer: PointerKind,
    pub position: Option<Point>,
}

impl Interaction {
    pub fn mouse(x: f32, y: f32) -> Self {
        Self {
            pointer: PointerKind::Mouse,
            position: Some(Point::new(x, y)),
        }
    }

    pub fn touch(x: f32, y: f32) -> Self {
        Self {
            pointer: PointerKind::Touch,
            position: Some(Point::new(x, y)),
        }
    }

    pub fn keyboard() -> Self {
        Self {
            pointer: PointerKind::Keyboard,
            position: None,
        }
    }
}

/// Button strategy for [`Wrapper`]
#[derive(Clone, Copy, Debug, Default)]
pub struct Button;

/// A mounted button
pub type ButtonWrapper = Wrapper<Button>;

impl Widget for Button {
    type Config = ButtonConfig;
    const NAME: &'static str = "Button";

    fn variant_style(&self, config: &ButtonConfig) -> Style {
        let size = config.size;
        let style = Style::new()
            .height(size.height())
            .padding(size.padding())
            .font_size(size.font_size())
            .border_radius(size.height() / 2.0);

        match ButtonMode::from_type(&config.button_type) {
            ButtonMode::Outlined => style.border(1.0, Color::GRAY.with_alpha(0.5)),
            ButtonMode::Contained | ButtonMode::Text => style,
        }
    }

    fn render(&self, config: &ButtonConfig, style: &Style) -> Element {
        let mode = ButtonMode::from_type(&config.button_type);
        let interactive = !config.base.disabled && !config.loading;

        let mut root = Element::new(element_types::BUTTON)
            .key(&config.base.id)
            .style(style.clone())
            .prop("mode", mode.as_str())
            .prop("color", config.color.as_str())
            .prop("size", config.size.as_str())
            .prop("disabled", config.base.disabled)
            .prop("loading", config.loading)
            .props(config.base.attr.clone())
            .interactive(interactive);

        if config.loading {
            root = root.child(
                Element::new(element_types::ACTIVITY_INDICATOR).prop("color", config.color.as_str()),
            );
        } else if let Some(icon) = &config.icon {
            root = root.child(Element::new(element_types::ICON).prop("name", icon.as_str()));
        }

        let label_style = Style {
            color: style.color,
            font_size: style.font_size,
            font_weight: Some(FontWeight::Medium),
            ..Style::default()
        };
        root.child(Element::text(&config.label).style(label_style))
    }
}

impl Wrapper<Button> {
    /// Handle a press; returns whether an event was emitted
    ///
    /// Disabled, loading or hidden buttons swallow the interaction.
    pub fn press(&self, interaction: Interaction) -> Result<bool, WrapperError> {
        self.ensure_alive()?;
        if !self.accepts_interaction() {
            tracing::debug!("Button {:?}: press ignored", self.id());
            return Ok(false);
        }
        self.emit(EventKind::Press(self.press_details(interaction)));
        Ok(true)
    }

    /// Handle a long press; emits only when `long_press` is enabled
    pub fn long_press(&self, interaction: Interaction) -> Result<bool, WrapperError> {
        self.ensure_alive()?;
        if !self.config().long_press || !self.accepts_interaction() {
            tracing::debug!("Button {:?}: long press ignored", self.id());
            return Ok(false);
        }
        self.emit(EventKind::LongPress(self.press_details(interaction)));
        Ok(true)
    }

    fn accepts_interaction(&self) -> bool {
        let config = self.config();
        !config.base.disabled && !config.loading && !self.should_hide()
    }

    fn press_details(&self, interaction: Interaction) -> PressDetails {
        PressDetails {
            label: self.config().label.clone(),
            position: interaction.position,
            pointer: interaction.pointer,
        }
    }
}

/// Create a button configuration from defaults and overrides
pub fn button(id: impl Into<String>, patch: ButtonPatch) -> ButtonConfig {
    create_config(id, patch)
}
