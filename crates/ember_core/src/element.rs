//! Renderable element tree
//!
//! `render()` on a component produces an [`Element`]: a small, host-agnostic
//! description of what should appear on the rendering surface. Hosts map
//! element types onto native controls; the test suite serializes the tree to
//! JSON and compares it against reference snapshots.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::style::Style;

/// Element type identifiers produced by the component library
pub mod element_types {
    pub const BUTTON: &str = "Button";
    pub const TEXT: &str = "Text";
    pub const ICON: &str = "Icon";
    pub const ACTIVITY_INDICATOR: &str = "ActivityIndicator";
}

/// A node in the rendered element tree
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    /// Element type identifier (e.g. "Button", "Text")
    pub element_type: String,
    /// Surface lookup key (component id for root elements)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Resolved presentation
    #[serde(default, skip_serializing_if = "Style::is_empty")]
    pub style: Style,
    /// Text content (for text elements)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Host-facing properties and pass-through attributes
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub props: IndexMap<String, Value>,
    /// Whether the element accepts pointer interaction
    #[serde(default)]
    pub interactive: bool,
    /// Child elements in paint order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Element>,
}

impl Element {
    /// Create an empty element of the given type
    pub fn new(element_type: impl Into<String>) -> Self {
        Self {
            element_type: element_type.into(),
            ..Default::default()
        }
    }

    /// Create a text element
    pub fn text(content: impl Into<String>) -> Self {
        let mut element = Self::new(element_types::TEXT);
        element.text = Some(content.into());
        element
    }

    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn prop(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    /// Extend props, later entries replacing earlier ones
    pub fn props<I>(mut self, props: I) -> Self
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        self.props.extend(props);
        self
    }

    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Depth-first search for the first element of a type (self included)
    pub fn find(&self, element_type: &str) -> Option<&Element> {
        if self.element_type == element_type {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find(element_type))
    }

    /// All text content in the subtree, depth-first
    pub fn texts(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_texts(&mut out);
        out
    }

    fn collect_texts<'a>(&'a self, out: &mut Vec<&'a str>) {
        if let Some(text) = self.text.as_deref() {
            out.push(text);
        }
        for child in &self.children {
            child.collect_texts(out);
        }
    }

    /// Total number of elements in the subtree (self included)
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Element::node_count).sum::<usize>()
    }
}
