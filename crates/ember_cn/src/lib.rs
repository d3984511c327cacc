//! # Ember Component Library (ember_cn)
//!
//! Configuration-driven themed components built on `ember_core` primitives.
//!
//! ## Layers
//!
//! - **Primitives**: `ember_core` provides colors, styles, element trees and
//!   component events
//! - **Wrapper**: [`Wrapper`] owns the lifecycle shared by every component:
//!   merged configuration, init/destroy hooks, the render gate, static and
//!   dynamic styling and event emission
//! - **Components**: [`Button`] and [`Label`] plug into the wrapper as
//!   [`Widget`] strategies
//! - **Host**: [`Surface`] mounts components by id, from code or from a JSON
//!   [`ComponentManifest`]
//!
//! ## Example
//!
//! ```rust
//! use ember_cn::prelude::*;
//!
//! let log = EventLog::new();
//! let mut surface = Surface::new(log.handlers());
//!
//! surface.mount(cn::button("btn1", ButtonPatch::new().label("Go"))).unwrap();
//! surface.mount(cn::label("lbl1", LabelPatch::new().text("A"))).unwrap();
//!
//! surface.press("btn1", Interaction::mouse(4.0, 4.0)).unwrap();
//! surface.update(cn::label("lbl1", LabelPatch::new().text("B"))).unwrap();
//!
//! assert_eq!(surface.render().unwrap().len(), 2);
//! assert_eq!(log.of_type(EventType::Press).len(), 1);
//! assert_eq!(log.of_type(EventType::TextChanged).len(), 1);
//!
//! surface.unmount_all().unwrap();
//! assert_eq!(log.of_type(EventType::Destroyed).len(), 2);
//! ```
//!
//! ## Components
//!
//! - **Button** - Pressable button with contained, outlined and text modes
//! - **Label** - Text label with change notification and external state sync

pub mod components;
pub mod config;
pub mod error;
pub mod manifest;
pub mod surface;
pub mod wrapper;

pub use components::*;
pub use config::{
    create_config, Attributes, BaseConfig, BasePatch, ConfigFactory, LifecycleHook,
    RenderCondition, WidgetConfig, DEFAULT_DISABLED_OPACITY,
};
pub use error::{EmberError, HookError, HookKind, HookResult, Result, WrapperError};
pub use manifest::{AnyConfig, ComponentKind, ComponentManifest, ManifestEntry};
pub use surface::{AnyWidget, Surface};
pub use wrapper::{dynamic_style, Emitter, Lifecycle, Widget, Wrapper};

/// Convenience module for accessing components with `cn::` prefix
pub mod cn {
    pub use crate::components::button::button;
    pub use crate::components::label::label;
}

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::cn;
    pub use crate::components::button::{
        Button, ButtonConfig, ButtonMode, ButtonPatch, ButtonSize, ButtonWrapper, Interaction,
    };
    pub use crate::components::label::{Label, LabelConfig, LabelPatch, LabelSize, LabelWrapper};
    pub use crate::config::{create_config, BasePatch, RenderCondition, WidgetConfig};
    pub use crate::error::{EmberError, HookResult, WrapperError};
    pub use crate::manifest::{AnyConfig, ComponentManifest};
    pub use crate::surface::Surface;
    pub use crate::wrapper::{Lifecycle, Widget, Wrapper};

    // Re-export commonly needed primitive types
    pub use ember_core::{
        Color, ComponentEvent, Display, Element, EventHandlers, EventKind, EventLog, EventType,
        PointerKind, Style,
    };
}
