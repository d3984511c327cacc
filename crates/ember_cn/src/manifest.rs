//! Component manifests
//!
//! A manifest is the JSON payload describing a screen's components: named
//! slots mapping to a component type and its (partial) configuration.
//!
//! ```json
//! {
//!   "submit": { "type": "Button", "config": { "id": "btn1", "label": "Go" } },
//!   "title":  { "type": "Label",  "config": { "text": "Welcome" } }
//! }
//! ```
//!
//! Slot order is preserved. A config without `id` uses the slot name; a
//! non-string `id` is rejected.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::components::{ButtonConfig, ButtonPatch, LabelConfig, LabelPatch};
use crate::config::{create_config, WidgetConfig};
use crate::error::{EmberError, Result};

/// Component types a manifest can name
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ComponentKind {
    Button,
    Label,
}

impl ComponentKind {
    /// Parse a manifest `type` (case-insensitive)
    pub fn parse(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("button") {
            Some(ComponentKind::Button)
        } else if name.eq_ignore_ascii_case("label") {
            Some(ComponentKind::Label)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ComponentKind::Button => "Button",
            ComponentKind::Label => "Label",
        }
    }
}

/// A complete configuration for any component type
#[derive(Clone, Debug)]
pub enum AnyConfig {
    Button(ButtonConfig),
    Label(LabelConfig),
}

impl AnyConfig {
    pub fn id(&self) -> &str {
        match self {
            AnyConfig::Button(config) => config.id(),
            AnyConfig::Label(config) => config.id(),
        }
    }

    pub fn kind(&self) -> ComponentKind {
        match self {
            AnyConfig::Button(_) => ComponentKind::Button,
            AnyConfig::Label(_) => ComponentKind::Label,
        }
    }
}

impl From<ButtonConfig> for AnyConfig {
    fn from(config: ButtonConfig) -> Self {
        AnyConfig::Button(config)
    }
}

impl From<LabelConfig> for AnyConfig {
    fn from(config: LabelConfig) -> Self {
        AnyConfig::Label(config)
    }
}

/// One manifest slot
#[derive(Clone, Debug, Deserialize)]
pub struct ManifestEntry {
    /// Component type name ("Button" | "Label")
    #[serde(rename = "type")]
    pub kind: String,
    /// Partial configuration
    #[serde(default)]
    pub config: Value,
}

impl ManifestEntry {
    /// Run the configuration factory for this slot
    pub fn build(&self, slot: &str) -> Result<AnyConfig> {
        let kind = ComponentKind::parse(&self.kind).ok_or_else(|| EmberError::UnknownComponent {
            slot: slot.to_string(),
            kind: self.kind.clone(),
        })?;

        let id = match self.config.get("id") {
            None | Some(Value::Null) => slot.to_string(),
            Some(Value::String(id)) => id.clone(),
            Some(other) => {
                return Err(EmberError::Parse(serde::de::Error::custom(format!(
                    "slot {:?}: id must be a string, found {}",
                    slot, other
                ))))
            }
        };
        let config = match &self.config {
            Value::Null => Value::Object(Default::default()),
            other => other.clone(),
        };

        let built = match kind {
            ComponentKind::Button => {
                let patch: ButtonPatch = serde_json::from_value(config)?;
                AnyConfig::Button(create_config(id, patch))
            }
            ComponentKind::Label => {
                let patch: LabelPatch = serde_json::from_value(config)?;
                AnyConfig::Label(create_config(id, patch))
            }
        };
        tracing::trace!("slot {:?} -> {} {:?}", slot, kind.as_str(), built.id());
        Ok(built)
    }
}

/// Named component slots, in declaration order
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(transparent)]
pub struct ComponentManifest {
    slots: IndexMap<String, ManifestEntry>,
}

impl ComponentManifest {
    /// Parse a manifest from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a manifest from an already-parsed JSON value
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn get(&self, slot: &str) -> Option<&ManifestEntry> {
        self.slots.get(slot)
    }

    pub fn slots(&self) -> impl Iterator<Item = (&str, &ManifestEntry)> {
        self.slots.iter().map(|(slot, entry)| (slot.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Build every slot, stopping at the first error
    pub fn build_all(&self) -> Result<Vec<(String, AnyConfig)>> {
        self.slots
            .iter()
            .map(|(slot, entry)| Ok((slot.clone(), entry.build(slot)?)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEMO: &str = r#"{
        "submit": { "type": "Button", "config": { "id": "btn1", "label": "Go", "type": "contained" } },
        "title": { "type": "Label", "config": { "text": "Welcome", "attr": { "testID": "title" } } },
        "hint": { "type": "label" }
    }"#;

    #[test]
    fn test_parse_and_build() {
        let manifest = ComponentManifest::from_json(DEMO).unwrap();
        assert_eq!(manifest.len(), 3);

        let built = manifest.build_all().unwrap();
        let slots: Vec<_> = built.iter().map(|(slot, _)| slot.as_str()).collect();
        assert_eq!(slots, vec!["submit", "title", "hint"]);

        match &built[0].1 {
            AnyConfig::Button(config) => {
                assert_eq!(config.base.id, "btn1");
                assert_eq!(config.label, "Go");
            }
            other => panic!("expected button, got {other:?}"),
        }

        match &built[1].1 {
            AnyConfig::Label(config) => {
                // Slot name stands in for the missing id
                assert_eq!(config.base.id, "title");
                assert_eq!(config.text, "Welcome");
                assert_eq!(config.base.attr["role"], "text");
                assert_eq!(config.base.attr["testID"], "title");
            }
            other => panic!("expected label, got {other:?}"),
        }

        assert_eq!(built[2].1.kind(), ComponentKind::Label);
        assert_eq!(built[2].1.id(), "hint");
    }

    #[test]
    fn test_unknown_component() {
        let manifest =
            ComponentManifest::from_json(r#"{ "x": { "type": "Slider", "config": {} } }"#).unwrap();
        let err = manifest.build_all().unwrap_err();
        assert!(matches!(err, EmberError::UnknownComponent { ref slot, ref kind } if slot == "x" && kind == "Slider"));
    }

    #[test]
    fn test_malformed_config() {
        assert!(matches!(
            ComponentManifest::from_json("[1, 2]"),
            Err(EmberError::Parse(_))
        ));

        let manifest = ComponentManifest::from_json(
            r#"{ "b": { "type": "Button", "config": { "disabled": "yes" } } }"#,
        )
        .unwrap();
        assert!(matches!(manifest.build_all(), Err(EmberError::Parse(_))));
    }

    #[test]
    fn test_non_string_id_is_rejected() {
        let manifest = ComponentManifest::from_json(
            r#"{ "b": { "type": "Button", "config": { "id": 5 } } }"#,
        )
        .unwrap();
        let err = manifest.build_all().unwrap_err();
        assert!(matches!(err, EmberError::Parse(_)));
        assert!(err.to_string().contains("id must be a string"));

        let manifest = ComponentManifest::from_json(
            r#"{ "b": { "type": "Button", "config": { "id": null } } }"#,
        )
        .unwrap();
        assert_eq!(manifest.build_all().unwrap()[0].1.id(), "b");
    }
}
