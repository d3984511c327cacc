//! Rendering surface
//!
//! A [`Surface`] plays the host role: it mounts one wrapper per component
//! id, forwards configuration updates and interactions, renders the visible
//! components in mount order and tears everything down.

use std::collections::HashSet;

use ember_core::{Element, EventHandlers};
use indexmap::IndexMap;

use crate::components::{Button, ButtonWrapper, Interaction, Label, LabelWrapper};
use crate::error::{EmberError, Result, WrapperError};
use crate::manifest::{AnyConfig, ComponentKind, ComponentManifest};
use crate::wrapper::Lifecycle;

/// A mounted component of any type
pub enum AnyWidget {
    Button(ButtonWrapper),
    Label(LabelWrapper),
}

impl AnyWidget {
    /// Mount a wrapper for the configuration's component type
    pub fn mount(config: AnyConfig, handlers: EventHandlers) -> std::result::Result<Self, WrapperError> {
        Ok(match config {
            AnyConfig::Button(config) => AnyWidget::Button(ButtonWrapper::mount(Button, config, handlers)?),
            AnyConfig::Label(config) => AnyWidget::Label(LabelWrapper::mount(Label, config, handlers)?),
        })
    }

    pub fn id(&self) -> &str {
        match self {
            AnyWidget::Button(w) => w.id(),
            AnyWidget::Label(w) => w.id(),
        }
    }

    pub fn kind(&self) -> ComponentKind {
        match self {
            AnyWidget::Button(_) => ComponentKind::Button,
            AnyWidget::Label(_) => ComponentKind::Label,
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        match self {
            AnyWidget::Button(w) => w.lifecycle(),
            AnyWidget::Label(w) => w.lifecycle(),
        }
    }

    pub fn should_hide(&self) -> bool {
        match self {
            AnyWidget::Button(w) => w.should_hide(),
            AnyWidget::Label(w) => w.should_hide(),
        }
    }

    /// Apply a configuration of the same component type
    pub fn update(&mut self, config: AnyConfig) -> Result<()> {
        match (self, config) {
            (AnyWidget::Button(w), AnyConfig::Button(config)) => w.update_config(config)?,
            (AnyWidget::Label(w), AnyConfig::Label(config)) => w.update_config(config)?,
            (widget, config) => {
                return Err(EmberError::KindMismatch {
                    id: widget.id().to_string(),
                    expected: config.kind().as_str(),
                    actual: widget.kind().as_str(),
                })
            }
        }
        Ok(())
    }

    pub fn render(&self) -> std::result::Result<Option<Element>, WrapperError> {
        match self {
            AnyWidget::Button(w) => w.render(),
            AnyWidget::Label(w) => w.render(),
        }
    }

    pub fn cleanup(&mut self) -> std::result::Result<(), WrapperError> {
        match self {
            AnyWidget::Button(w) => w.cleanup(),
            AnyWidget::Label(w) => w.cleanup(),
        }
    }

    pub fn as_button(&self) -> Option<&ButtonWrapper> {
        match self {
            AnyWidget::Button(w) => Some(w),
            AnyWidget::Label(_) => None,
        }
    }

    pub fn as_label(&self) -> Option<&LabelWrapper> {
        match self {
            AnyWidget::Label(w) => Some(w),
            AnyWidget::Button(_) => None,
        }
    }
}

/// Host surface keyed by component id
#[derive(Default)]
pub struct Surface {
    widgets: IndexMap<String, AnyWidget>,
    /// Handlers shared by every mounted component
    handlers: EventHandlers,
}

impl Surface {
    pub fn new(handlers: EventHandlers) -> Self {
        Self {
            widgets: IndexMap::new(),
            handlers,
        }
    }

    /// Mount one component
    pub fn mount(&mut self, config: impl Into<AnyConfig>) -> Result<()> {
        let config = config.into();
        if self.widgets.contains_key(config.id()) {
            return Err(EmberError::DuplicateId(config.id().to_string()));
        }

        let widget = AnyWidget::mount(config, self.handlers.clone())?;
        self.widgets.insert(widget.id().to_string(), widget);
        Ok(())
    }

    /// Mount every slot of a manifest; returns the number mounted
    ///
    /// Every slot is built and every id checked, against the surface and
    /// against the other slots, before anything is mounted, so a malformed
    /// slot or a duplicate id leaves the surface untouched. Manifest
    /// configurations carry no hooks, so nothing fails past that point.
    pub fn mount_manifest(&mut self, manifest: &ComponentManifest) -> Result<usize> {
        let configs = manifest.build_all()?;

        let mut seen = HashSet::with_capacity(configs.len());
        for (slot, config) in &configs {
            let id = config.id();
            if self.widgets.contains_key(id) || !seen.insert(id) {
                tracing::warn!("manifest slot {:?} reuses id {:?}", slot, id);
                return Err(EmberError::DuplicateId(id.to_string()));
            }
        }

        let count = configs.len();
        for (_, config) in configs {
            self.mount(config)?;
        }
        tracing::debug!("mounted {} component(s) from manifest", count);
        Ok(count)
    }

    /// Forward a configuration update to the component with the same id
    pub fn update(&mut self, config: impl Into<AnyConfig>) -> Result<()> {
        let config = config.into();
        let widget = self
            .widgets
            .get_mut(config.id())
            .ok_or_else(|| EmberError::UnknownId(config.id().to_string()))?;
        widget.update(config)
    }

    /// Dispatch a press to a button
    pub fn press(&self, id: &str, interaction: Interaction) -> Result<bool> {
        Ok(self.button(id)?.press(interaction)?)
    }

    /// Dispatch a long press to a button
    pub fn long_press(&self, id: &str, interaction: Interaction) -> Result<bool> {
        Ok(self.button(id)?.long_press(interaction)?)
    }

    fn button(&self, id: &str) -> Result<&ButtonWrapper> {
        let widget = self.get(id).ok_or_else(|| EmberError::UnknownId(id.to_string()))?;
        widget.as_button().ok_or_else(|| EmberError::KindMismatch {
            id: id.to_string(),
            expected: ComponentKind::Button.as_str(),
            actual: widget.kind().as_str(),
        })
    }

    /// Render every visible component, in mount order
    pub fn render(&self) -> Result<Vec<Element>> {
        let mut elements = Vec::with_capacity(self.widgets.len());
        for widget in self.widgets.values() {
            if let Some(element) = widget.render()? {
                elements.push(element);
            }
        }
        Ok(elements)
    }

    /// Clean up and remove one component
    pub fn unmount(&mut self, id: &str) -> Result<()> {
        let widget = self
            .widgets
            .get_mut(id)
            .ok_or_else(|| EmberError::UnknownId(id.to_string()))?;
        widget.cleanup()?;
        self.widgets.shift_remove(id);
        Ok(())
    }

    /// Clean up every component, most recently mounted first
    pub fn unmount_all(&mut self) -> Result<()> {
        while let Some((_, mut widget)) = self.widgets.pop() {
            if let Err(err) = widget.cleanup() {
                let id = widget.id().to_string();
                self.widgets.insert(id, widget);
                return Err(err.into());
            }
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&AnyWidget> {
        self.widgets.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.widgets.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.widgets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }
}
