//! Label component - styled text label
//!
//! A themed text label. Label is the component that uses change detection:
//! when an update changes `text`, it hands the new configuration to the
//! optional external state-sync callback and, once that succeeds, emits a
//! `TextChanged` event carrying the old and new text.
//!
//! # Example
//!
//! ```rust
//! use ember_cn::prelude::*;
//!
//! let log = EventLog::new();
//! let mut label = LabelWrapper::new(cn::label("lbl1", LabelPatch::new().text("A")), log.handlers()).unwrap();
//!
//! label.update_config(cn::label("lbl1", LabelPatch::new().text("B"))).unwrap();
//! assert_eq!(log.of_type(EventType::TextChanged).len(), 1);
//! ```

use std::fmt;
use std::rc::Rc;

use ember_core::{element_types, Color, Element, EventKind, FontWeight, Style};
use serde::{Deserialize, Serialize};

use crate::config::{create_config, BaseConfig, BasePatch, ConfigFactory, WidgetConfig};
use crate::error::{HookKind, HookResult, WrapperError};
use crate::wrapper::{Emitter, Widget, Wrapper};

/// External state-sync callback, invoked with the new configuration after a
/// text change
pub type StateSync = Rc<dyn Fn(&LabelConfig) -> HookResult>;

/// Label size variants
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelSize {
    /// Small label (12px)
    Small,
    /// Medium/default label (14px)
    #[default]
    Medium,
    /// Large label (16px)
    Large,
}

impl LabelSize {
    fn font_size(&self) -> f32 {
        match self {
            LabelSize::Small => 12.0,
            LabelSize::Medium => 14.0,
            LabelSize::Large => 16.0,
        }
    }
}

/// Complete label configuration
#[derive(Clone)]
pub struct LabelConfig {
    pub base: BaseConfig,
    pub text: String,
    pub size: LabelSize,
    /// Appends a required-field marker
    pub required: bool,
    pub on_state_sync: Option<StateSync>,
}

impl WidgetConfig for LabelConfig {
    fn base(&self) -> &BaseConfig {
        &self.base
    }
}

impl ConfigFactory for LabelConfig {
    type Patch = LabelPatch;

    fn defaults(id: String) -> Self {
        let mut base = BaseConfig::new(id);
        base.attr.insert("role".into(), "text".into());

        Self {
            base,
            text: "Label".to_string(),
            size: LabelSize::default(),
            required: false,
            on_state_sync: None,
        }
    }

    fn apply(mut self, patch: LabelPatch) -> Self {
        self.base = self.base.apply(patch.base);
        if let Some(text) = patch.text {
            self.text = text;
        }
        if let Some(size) = patch.size {
            self.size = size;
        }
        if let Some(required) = patch.required {
            self.required = required;
        }
        if patch.on_state_sync.is_some() {
            self.on_state_sync = patch.on_state_sync;
        }
        self
    }
}

impl fmt::Debug for LabelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LabelConfig")
            .field("base", &self.base)
            .field("text", &self.text)
            .field("size", &self.size)
            .field("required", &self.required)
            .field("on_state_sync", &self.on_state_sync.is_some())
            .finish()
    }
}

/// Partial [`LabelConfig`]
#[derive(Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LabelPatch {
    #[serde(flatten)]
    pub base: BasePatch,
    pub text: Option<String>,
    pub size: Option<LabelSize>,
    pub required: Option<bool>,
    #[serde(skip)]
    pub on_state_sync: Option<StateSync>,
}

impl LabelPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base(mut self, base: BasePatch) -> Self {
        self.base = base;
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn size(mut self, size: LabelSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    pub fn on_state_sync<F>(mut self, sync: F) -> Self
    where
        F: Fn(&LabelConfig) -> HookResult + 'static,
    {
        self.on_state_sync = Some(Rc::new(sync));
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

/// Label strategy for [`Wrapper`]
#[derive(Clone, Copy, Debug, Default)]
pub struct Label;

/// A mounted label
pub type LabelWrapper = Wrapper<Label>;

impl Widget for Label {
    type Config = LabelConfig;
    const NAME: &'static str = "Label";

    fn variant_style(&self, config: &LabelConfig) -> Style {
        Style::new()
            .font_size(config.size.font_size())
            .font_weight(FontWeight::Medium)
    }

    fn on_config_change(
        &mut self,
        previous: &LabelConfig,
        current: &LabelConfig,
        emitter: &Emitter<'_>,
    ) -> Result<(), WrapperError> {
        if previous.text == current.text {
            return Ok(());
        }

        // A failed sync rejects the whole update, so nothing is emitted
        if let Some(sync) = &current.on_state_sync {
            sync(current).map_err(|source| {
                WrapperError::hook(emitter.component_id(), HookKind::StateSync, source)
            })?;
        }

        tracing::debug!(
            "Label {:?}: text {:?} -> {:?}",
            emitter.component_id(),
            previous.text,
            current.text
        );
        emitter.emit(EventKind::TextChanged {
            text: current.text.clone(),
            previous_text: previous.text.clone(),
        });
        Ok(())
    }

    fn render(&self, config: &LabelConfig, style: &Style) -> Element {
        let mut root = Element::text(&config.text)
            .key(&config.base.id)
            .style(style.clone())
            .props(config.base.attr.clone());

        if config.required {
            let marker = Style {
                color: Some(Color::from_hex(0xDC2626)),
                font_size: style.font_size,
                ..Style::default()
            };
            root = root.child(Element::text("*").style(marker));
        }
        root
    }
}

/// Create a label configuration from defaults and overrides
pub fn label(id: impl Into<String>, patch: LabelPatch) -> LabelConfig {
    create_config(id, patch)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ember_core::{EventHandlers, EventLog, EventType};
    use serde_json::json;
    use std::cell::RefCell;

    #[test]
    fn test_label_size_values() {
        assert_eq!(LabelSize::Small.font_size(), 12.0);
        assert_eq!(LabelSize::Medium.font_size(), 14.0);
        assert_eq!(LabelSize::Large.font_size(), 16.0);
    }

    #[test]
    fn test_defaults() {
        let config = label("l", LabelPatch::new());
        assert_eq!(config.text, "Label");
        assert!(config.base.visible);
        assert!(!config.base.disabled);
        assert_eq!(config.base.attr["role"], json!("text"));
    }

    #[test]
    fn test_text_change_emits_once() {
        let log = EventLog::new();
        let mut wrapper =
            LabelWrapper::new(label("lbl1", LabelPatch::new().text("A")), log.handlers()).unwrap();

        wrapper
            .update_config(label("lbl1", LabelPatch::new().text("B")))
            .unwrap();

        let changes = log.of_type(EventType::TextChanged);
        assert_eq!(changes.len(), 1);
        assert_eq!(changes[0].component_id, "lbl1");
        assert_eq!(
            changes[0].kind,
            EventKind::TextChanged {
                text: "B".into(),
                previous_text: "A".into(),
            }
        );
    }

    #[test]
    fn test_unchanged_text_is_silent() {
        let log = EventLog::new();
        let mut wrapper =
            LabelWrapper::new(label("l", LabelPatch::new().text("A")), log.handlers()).unwrap();

        wrapper
            .update_config(label("l", LabelPatch::new().text("A").disabled(true)))
            .unwrap();
        wrapper
            .update_config(label("l", LabelPatch::new().text("A").size(LabelSize::Large)))
            .unwrap();

        assert!(log.of_type(EventType::TextChanged).is_empty());
    }

    #[test]
    fn test_state_sync_receives_new_config() {
        let synced = Rc::new(RefCell::new(Vec::new()));
        let s = synced.clone();
        let patch = |text: &str| {
            let s = s.clone();
            LabelPatch::new().text(text).on_state_sync(move |config| {
                s.borrow_mut().push(config.text.clone());
                Ok(())
            })
        };

        let mut wrapper =
            LabelWrapper::new(label("l", patch("A")), EventHandlers::new()).unwrap();
        wrapper.update_config(label("l", patch("A"))).unwrap();
        wrapper.update_config(label("l", patch("B"))).unwrap();
        wrapper.update_config(label("l", patch("C"))).unwrap();

        assert_eq!(*synced.borrow(), vec!["B", "C"]);
    }

    #[test]
    fn test_failing_sync_keeps_previous_snapshot() {
        let log = EventLog::new();
        let mut wrapper =
            LabelWrapper::new(label("l", LabelPatch::new().text("A")), log.handlers()).unwrap();

        let failing = LabelPatch::new()
            .text("B")
            .on_state_sync(|_| Err("sync unavailable".into()));
        let err = wrapper.update_config(label("l", failing)).unwrap_err();
        assert!(matches!(
            err,
            WrapperError::Hook {
                hook: HookKind::StateSync,
                ..
            }
        ));
        assert_eq!(wrapper.config().text, "A");
        assert!(log.of_type(EventType::TextChanged).is_empty());

        // Retrying the same change reports it exactly once
        wrapper
            .update_config(label("l", LabelPatch::new().text("B")))
            .unwrap();
        let changes = log.of_type(EventType::TextChanged);
        assert_eq!(changes.len(), 1);
        assert_eq!(
            changes[0].kind,
            EventKind::TextChanged {
                text: "B".into(),
                previous_text: "A".into(),
            }
        );
    }

    #[test]
    fn test_size_follows_updates() {
        let mut wrapper =
            LabelWrapper::new(label("l", LabelPatch::new().size(LabelSize::Small)), EventHandlers::new())
                .unwrap();
        assert_eq!(wrapper.render().unwrap().unwrap().style.font_size, Some(12.0));

        wrapper
            .update_config(label("l", LabelPatch::new().size(LabelSize::Large)))
            .unwrap();
        assert_eq!(wrapper.render().unwrap().unwrap().style.font_size, Some(16.0));
    }

    #[test]
    fn test_render_required() {
        let wrapper = LabelWrapper::new(
            label("email", LabelPatch::new().text("Email").required(true)),
            EventHandlers::new(),
        )
        .unwrap();

        let element = wrapper.render().unwrap().unwrap();
        assert_eq!(element.element_type, element_types::TEXT);
        assert_eq!(element.key.as_deref(), Some("email"));
        assert_eq!(element.texts(), vec!["Email", "*"]);
        assert_eq!(element.style.font_size, Some(14.0));
        assert!(!element.interactive);
    }

    #[test]
    fn test_patch_from_json() {
        let patch: LabelPatch = serde_json::from_value(json!({
            "text": "Name",
            "size": "small",
            "required": true,
            "visible": false
        }))
        .unwrap();

        let config = label("name", patch);
        assert_eq!(config.text, "Name");
        assert_eq!(config.size, LabelSize::Small);
        assert!(config.required);
        assert!(!config.base.visible);
    }
}
