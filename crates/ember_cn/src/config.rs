//! Component configuration and the configuration factory
//!
//! Every component instance is described by a configuration record: the
//! shared [`BaseConfig`] plus widget-specific fields. Records are complete
//! (no missing fields); defaults are applied here, by the factory, never by
//! the wrapper.
//!
//! Partial overrides are expressed as patch records whose fields are all
//! optional. Patches deserialize from the JSON component payload, so the
//! same factory serves both Rust callers and manifest loading.
//!
//! # Example
//!
//! ```rust
//! use ember_cn::config::{create_config, BasePatch};
//! use ember_cn::components::button::{ButtonConfig, ButtonPatch};
//!
//! let config: ButtonConfig = create_config(
//!     "save",
//!     ButtonPatch::new()
//!         .label("Save")
//!         .with_base(BasePatch::new().attr("testID", "save-button")),
//! );
//!
//! assert_eq!(config.label, "Save");
//! // Default attributes survive attribute overrides
//! assert_eq!(config.base.attr["role"], "button");
//! assert_eq!(config.base.attr["testID"], "save-button");
//! ```

use std::fmt;
use std::rc::Rc;

use ember_core::{Color, Style};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::HookResult;

/// Pass-through attributes (accessibility, test ids, ...)
pub type Attributes = IndexMap<String, Value>;

/// Zero-argument lifecycle hook supplied by the configuration owner
pub type LifecycleHook = Rc<dyn Fn() -> HookResult>;

/// Opacity applied to disabled components without `disabledOpacity`
pub const DEFAULT_DISABLED_OPACITY: f32 = 0.6;

/// Conditional render gate (`ngIf` in payloads)
#[derive(Clone)]
pub enum RenderCondition {
    /// Fixed decision
    Flag(bool),
    /// Evaluated on every visibility check
    Predicate(Rc<dyn Fn() -> bool>),
}

impl RenderCondition {
    /// Create a predicate gate
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn() -> bool + 'static,
    {
        RenderCondition::Predicate(Rc::new(f))
    }

    /// Evaluate the gate (true = render)
    pub fn evaluate(&self) -> bool {
        match self {
            RenderCondition::Flag(flag) => *flag,
            RenderCondition::Predicate(predicate) => predicate(),
        }
    }
}

impl Default for RenderCondition {
    fn default() -> Self {
        RenderCondition::Flag(true)
    }
}

impl From<bool> for RenderCondition {
    fn from(flag: bool) -> Self {
        RenderCondition::Flag(flag)
    }
}

impl fmt::Debug for RenderCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderCondition::Flag(flag) => f.debug_tuple("Flag").field(flag).finish(),
            RenderCondition::Predicate(_) => f.write_str("Predicate(..)"),
        }
    }
}

impl<'de> Deserialize<'de> for RenderCondition {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        bool::deserialize(deserializer).map(RenderCondition::Flag)
    }
}

/// Configuration shared by every component
#[derive(Clone)]
pub struct BaseConfig {
    /// Stable identity; fixed for the lifetime of a mounted component
    pub id: String,
    /// Dimmed, non-interactive presentation
    pub disabled: bool,
    /// When false the component produces no output
    pub visible: bool,
    /// Conditional render gate, independent from `visible`
    pub render_if: RenderCondition,
    /// Invoked once when the component mounts
    pub init: Option<LifecycleHook>,
    /// Invoked once when the component is cleaned up
    pub destroy: Option<LifecycleHook>,
    /// Author style overrides (`stl`)
    pub stl: Style,
    /// Opacity while disabled (defaults to [`DEFAULT_DISABLED_OPACITY`])
    pub disabled_opacity: Option<f32>,
    /// Text color while disabled
    pub disabled_text_color: Option<Color>,
    /// Pass-through attributes
    pub attr: Attributes,
}

impl BaseConfig {
    /// A visible, enabled configuration with no hooks or overrides
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            disabled: false,
            visible: true,
            render_if: RenderCondition::default(),
            init: None,
            destroy: None,
            stl: Style::default(),
            disabled_opacity: None,
            disabled_text_color: None,
            attr: Attributes::new(),
        }
    }

    /// Apply a patch: top-level fields are replaced, `attr` is merged
    pub fn apply(mut self, patch: BasePatch) -> Self {
        if let Some(disabled) = patch.disabled {
            self.disabled = disabled;
        }
        if let Some(visible) = patch.visible {
            self.visible = visible;
        }
        if let Some(render_if) = patch.render_if {
            self.render_if = render_if;
        }
        if patch.init.is_some() {
            self.init = patch.init;
        }
        if patch.destroy.is_some() {
            self.destroy = patch.destroy;
        }
        if let Some(stl) = patch.stl {
            self.stl = stl;
        }
        if patch.disabled_opacity.is_some() {
            self.disabled_opacity = patch.disabled_opacity;
        }
        if patch.disabled_text_color.is_some() {
            self.disabled_text_color = patch.disabled_text_color;
        }
        self.attr = merge_attributes(&self.attr, patch.attr);
        self
    }
}

impl fmt::Debug for BaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseConfig")
            .field("id", &self.id)
            .field("disabled", &self.disabled)
            .field("visible", &self.visible)
            .field("render_if", &self.render_if)
            .field("init", &self.init.is_some())
            .field("destroy", &self.destroy.is_some())
            .field("stl", &self.stl)
            .field("disabled_opacity", &self.disabled_opacity)
            .field("disabled_text_color", &self.disabled_text_color)
            .field("attr", &self.attr)
            .finish()
    }
}

/// Partial [`BaseConfig`]; unset fields keep their defaults
#[derive(Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BasePatch {
    pub disabled: Option<bool>,
    pub visible: Option<bool>,
    #[serde(rename = "ngIf", alias = "renderIf")]
    pub render_if: Option<RenderCondition>,
    #[serde(skip)]
    pub init: Option<LifecycleHook>,
    #[serde(skip)]
    pub destroy: Option<LifecycleHook>,
    pub stl: Option<Style>,
    pub disabled_opacity: Option<f32>,
    pub disabled_text_color: Option<Color>,
    pub attr: Attributes,
}

impl BasePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = Some(disabled);
        self
    }

    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = Some(visible);
        self
    }

    pub fn render_if(mut self, condition: impl Into<RenderCondition>) -> Self {
        self.render_if = Some(condition.into());
        self
    }

    /// Gate rendering on a predicate evaluated at every visibility check
    pub fn render_if_fn<F>(self, predicate: F) -> Self
    where
        F: Fn() -> bool + 'static,
    {
        self.render_if(RenderCondition::predicate(predicate))
    }

    pub fn on_init<F>(mut self, hook: F) -> Self
    where
        F: Fn() -> HookResult + 'static,
    {
        self.init = Some(Rc::new(hook));
        self
    }

    pub fn on_destroy<F>(mut self, hook: F) -> Self
    where
        F: Fn() -> HookResult + 'static,
    {
        self.destroy = Some(Rc::new(hook));
        self
    }

    pub fn stl(mut self, stl: Style) -> Self {
        self.stl = Some(stl);
        self
    }

    pub fn disabled_opacity(mut self, opacity: f32) -> Self {
        self.disabled_opacity = Some(opacity);
        self
    }

    pub fn disabled_text_color(mut self, color: Color) -> Self {
        self.disabled_text_color = Some(color);
        self
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attr.insert(name.into(), value.into());
        self
    }
}

/// Shallow-merge attribute maps; `overrides` win per key
pub fn merge_attributes(defaults: &Attributes, overrides: Attributes) -> Attributes {
    let mut merged = defaults.clone();
    merged.extend(overrides);
    merged
}

/// A complete component configuration
pub trait WidgetConfig: Clone {
    /// The shared configuration fields
    fn base(&self) -> &BaseConfig;

    /// Component id
    fn id(&self) -> &str {
        &self.base().id
    }
}

/// Builds complete configurations from an id and a partial patch
pub trait ConfigFactory: WidgetConfig + Sized {
    /// Partial form of this configuration
    type Patch: Default;

    /// The documented defaults for this component type
    fn defaults(id: String) -> Self;

    /// Apply a patch on top of this configuration
    fn apply(self, patch: Self::Patch) -> Self;
}

/// Build a configuration from defaults and overrides
///
/// Precedence, low to high: the component's defaults, then `patch`
/// (shallow), except `attr` which is merged key by key.
pub fn create_config<C: ConfigFactory>(id: impl Into<String>, patch: C::Patch) -> C {
    C::defaults(id.into()).apply(patch)
}
