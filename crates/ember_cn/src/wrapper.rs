//! Base component wrapper
//!
//! [`Wrapper`] owns the lifecycle of one component instance. Widget-specific
//! behavior lives in a [`Widget`] strategy (rendering, static styling, change
//! hooks) while the wrapper keeps the shared state: the current and previous
//! configuration, the one-shot static style cache, the lifecycle phase and
//! the event handlers.
//!
//! ```text
//! mount --> Active --update_config--> Active
//!             |
//!             +--cleanup--> Destroyed (terminal)
//! ```
//!
//! `mount` returns either an active wrapper or the `init` hook's error, so
//! the pre-init phase is never observable.
//!
//! Calls on a destroyed wrapper return [`WrapperError::Destroyed`], change no
//! state and emit no events.
//!
//! # Example
//!
//! ```rust
//! use ember_cn::prelude::*;
//!
//! let log = EventLog::new();
//! let config = cn::label("greeting", LabelPatch::new().text("Hello"));
//! let mut label = LabelWrapper::new(config, log.handlers()).unwrap();
//!
//! let element = label.render().unwrap().expect("visible");
//! assert_eq!(element.texts(), vec!["Hello"]);
//!
//! label.cleanup().unwrap();
//! assert_eq!(log.len(), 2); // initialized + destroyed
//! ```

use std::cell::OnceCell;

use ember_core::{ComponentEvent, Display, Element, EventHandlers, EventKind, Style};

use crate::config::{BaseConfig, WidgetConfig, DEFAULT_DISABLED_OPACITY};
use crate::error::{HookKind, WrapperError};

/// Lifecycle phase of a wrapper
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    /// Mounted and accepting updates
    Active,
    /// Cleaned up (terminal)
    Destroyed,
}

/// Emits events on behalf of one component
pub struct Emitter<'a> {
    component_id: &'a str,
    handlers: &'a EventHandlers,
}

impl<'a> Emitter<'a> {
    pub fn new(component_id: &'a str, handlers: &'a EventHandlers) -> Self {
        Self {
            component_id,
            handlers,
        }
    }

    /// Id of the emitting component
    pub fn component_id(&self) -> &str {
        self.component_id
    }

    /// Stamp and dispatch an event
    pub fn emit(&self, kind: EventKind) {
        let event = ComponentEvent::new(self.component_id, kind);
        self.handlers.dispatch(&event);
    }
}

/// Widget-specific behavior plugged into a [`Wrapper`]
pub trait Widget {
    /// Complete configuration record for this widget
    type Config: WidgetConfig;

    /// Component type name (logs, manifests, errors)
    const NAME: &'static str;

    /// Presentation derived from the widget's own fields (size, variant).
    /// Recomputed on every render; author overrides (`stl`) win over it.
    fn variant_style(&self, _config: &Self::Config) -> Style {
        Style::default()
    }

    /// Called on every update with the previous and the incoming
    /// configuration, before the wrapper stores the incoming one.
    fn on_config_change(
        &mut self,
        _previous: &Self::Config,
        _current: &Self::Config,
        _emitter: &Emitter<'_>,
    ) -> Result<(), WrapperError> {
        Ok(())
    }

    /// Produce the element tree. Only called for visible components.
    fn render(&self, config: &Self::Config, style: &Style) -> Element;
}

/// Lifecycle and state engine shared by every component
pub struct Wrapper<W: Widget> {
    widget: W,
    id: String,
    config: W::Config,
    /// Configuration as of the last applied update, for change detection
    previous: W::Config,
    lifecycle: Lifecycle,
    /// Set once the init phase completed; guards init and destroy hooks
    initialized: bool,
    /// Author `stl` minus state-driven fields; computed on first read,
    /// never invalidated
    static_style: OnceCell<Style>,
    handlers: EventHandlers,
}

impl<W: Widget> Wrapper<W> {
    /// Mount a component: apply the configuration, run the `init` hook and
    /// emit `Initialized`.
    ///
    /// If the `init` hook fails the error is returned and nothing is emitted.
    pub fn mount(
        widget: W,
        config: W::Config,
        handlers: EventHandlers,
    ) -> Result<Self, WrapperError> {
        let mut wrapper = Self {
            widget,
            id: config.id().to_string(),
            previous: config.clone(),
            config,
            lifecycle: Lifecycle::Active,
            initialized: false,
            static_style: OnceCell::new(),
            handlers,
        };
        wrapper.initialize()?;
        Ok(wrapper)
    }

    fn initialize(&mut self) -> Result<(), WrapperError> {
        if self.initialized {
            return Ok(());
        }

        if let Some(init) = self.base().init.clone() {
            init().map_err(|source| WrapperError::hook(&self.id, HookKind::Init, source))?;
        }

        self.initialized = true;
        tracing::debug!("{} {:?} mounted", W::NAME, self.id);
        self.emit(EventKind::Initialized);
        Ok(())
    }

    /// Replace the configuration wholesale
    ///
    /// The widget's change hook sees the previous and the incoming
    /// configuration; both snapshots are only replaced once the hook
    /// succeeds.
    pub fn update_config(&mut self, config: W::Config) -> Result<(), WrapperError> {
        self.ensure_alive()?;

        if config.id() != self.id {
            tracing::warn!(
                "{} {:?}: rejected update carrying id {:?}",
                W::NAME,
                self.id,
                config.id()
            );
            return Err(WrapperError::IdMismatch {
                expected: self.id.clone(),
                found: config.id().to_string(),
            });
        }

        let emitter = Emitter::new(&self.id, &self.handlers);
        self.widget
            .on_config_change(&self.previous, &config, &emitter)?;

        self.previous = config.clone();
        self.config = config;
        tracing::debug!("{} {:?} updated", W::NAME, self.id);
        Ok(())
    }

    /// Whether the component is excluded from its rendering surface
    ///
    /// True when `visible` is false or the render gate evaluates false.
    pub fn should_hide(&self) -> bool {
        let base = self.base();
        !base.visible || !base.render_if.evaluate()
    }

    /// Author `stl` without `opacity`/`display`; cached after the first read
    ///
    /// The cache is filled from the configuration current at that read and
    /// later `stl` changes do not reach it.
    pub fn static_style(&self) -> &Style {
        self.static_style.get_or_init(|| {
            tracing::trace!("{} {:?}: computing static style", W::NAME, self.id);
            self.base().stl.without_dynamic()
        })
    }

    /// Size and variant presentation for the current configuration
    pub fn variant_style(&self) -> Style {
        self.widget.variant_style(&self.config)
    }

    /// State-driven style, recomputed on every call
    pub fn dynamic_style(&self) -> Style {
        dynamic_style(self.base())
    }

    /// Variant style, then the static style, then the dynamic style on top
    pub fn computed_style(&self) -> Style {
        self.variant_style()
            .merge(self.static_style())
            .merge(&self.dynamic_style())
    }

    /// Render the component, or `None` when it is hidden
    pub fn render(&self) -> Result<Option<Element>, WrapperError> {
        self.ensure_alive()?;

        if self.should_hide() {
            tracing::trace!("{} {:?} hidden", W::NAME, self.id);
            return Ok(None);
        }

        Ok(Some(self.widget.render(&self.config, &self.computed_style())))
    }

    /// Tear the component down: run the `destroy` hook (only if init
    /// completed) and emit `Destroyed`.
    ///
    /// If the `destroy` hook fails the wrapper stays active.
    pub fn cleanup(&mut self) -> Result<(), WrapperError> {
        self.ensure_alive()?;

        if self.initialized {
            if let Some(destroy) = self.base().destroy.clone() {
                destroy()
                    .map_err(|source| WrapperError::hook(&self.id, HookKind::Destroy, source))?;
            }
        }

        self.initialized = false;
        self.lifecycle = Lifecycle::Destroyed;
        tracing::debug!("{} {:?} destroyed", W::NAME, self.id);
        self.emit(EventKind::Destroyed);
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Component id (fixed at mount)
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Current configuration
    pub fn config(&self) -> &W::Config {
        &self.config
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    /// Register more handlers after mount
    pub fn handlers_mut(&mut self) -> &mut EventHandlers {
        &mut self.handlers
    }

    // =========================================================================
    // Internals shared with widget-specific impls
    // =========================================================================

    pub(crate) fn base(&self) -> &BaseConfig {
        self.config.base()
    }

    pub(crate) fn emit(&self, kind: EventKind) {
        Emitter::new(&self.id, &self.handlers).emit(kind);
    }

    pub(crate) fn ensure_alive(&self) -> Result<(), WrapperError> {
        if self.lifecycle == Lifecycle::Destroyed {
            tracing::warn!("{} {:?} used after cleanup", W::NAME, self.id);
            return Err(WrapperError::Destroyed {
                id: self.id.clone(),
            });
        }
        Ok(())
    }
}

impl<W: Widget + Default> Wrapper<W> {
    /// Mount with the widget's default strategy
    pub fn new(config: W::Config, handlers: EventHandlers) -> Result<Self, WrapperError> {
        Self::mount(W::default(), config, handlers)
    }
}

/// Compute the state-driven style for a configuration
///
/// State wins over author overrides for the same property: a disabled
/// component ignores `stl.opacity` and an invisible one ignores
/// `stl.display`.
pub fn dynamic_style(base: &BaseConfig) -> Style {
    let mut style = Style::default();

    if base.disabled {
        style.opacity = Some(base.disabled_opacity.unwrap_or(DEFAULT_DISABLED_OPACITY));
        if let Some(color) = base.disabled_text_color {
            style.color = Some(color);
        }
    }

    if !base.visible {
        style.display = Some(Display::None);
    }

    if let Some(opacity) = base.stl.opacity {
        if !base.disabled {
            style.opacity = Some(opacity);
        }
    }

    if let Some(display) = base.stl.display {
        if base.visible {
            style.display = Some(display);
        }
    }

    style
}
