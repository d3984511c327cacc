//! Ember Core
//!
//! This crate provides the foundational types shared by the Ember component
//! library and its test suites:
//!
//! - **Colors**: RGBA colors that round-trip through `#RRGGBB` strings
//! - **Styles**: an all-optional presentation record with merge semantics
//! - **Elements**: the host-agnostic render tree produced by components
//! - **Events**: timestamped component events and ordered handler storage
//!
//! # Example
//!
//! ```rust
//! use ember_core::{Color, Element, Style};
//!
//! let label = Element::text("Hello").style(Style::new().color(Color::BLACK));
//! assert_eq!(label.texts(), vec!["Hello"]);
//! ```

pub mod color;
pub mod element;
pub mod events;
pub mod style;
pub mod time;

pub use color::{Color, Point};
pub use element::{element_types, Element};
pub use events::{
    ComponentEvent, EventCallback, EventHandlers, EventKind, EventLog, EventType, PointerKind,
    PressDetails,
};
pub use style::{style, Display, FontWeight, Style};
pub use time::Timestamp;
