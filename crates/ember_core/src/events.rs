//! Component events and handler storage
//!
//! Every component emits [`ComponentEvent`]s at well-defined points of its
//! lifecycle (mount, cleanup) and for widget-specific interactions (press,
//! text change). Consumers subscribe through [`EventHandlers`], either with a
//! single dispatcher that receives every event or with per-type callbacks.
//!
//! Both styles share one registration list, so a dispatcher and a split
//! callback registered side by side observe events in exactly the same order
//! and with the same payload.
//!
//! # Example
//!
//! ```rust
//! use ember_core::events::{EventHandlers, EventType};
//!
//! let mut handlers = EventHandlers::new();
//! handlers.on_event(|event| println!("{} -> {:?}", event.component_id, event.kind));
//! handlers.on_press(|event| println!("pressed {}", event.component_id));
//! assert!(handlers.has_handler(EventType::Press));
//! ```

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::color::Point;
use crate::time::Timestamp;

/// Kind of pointer that produced an interaction
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerKind {
    Mouse,
    Touch,
    Pen,
    Keyboard,
    #[default]
    Unknown,
}

/// Interaction metadata carried by press events
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PressDetails {
    /// Label of the pressed button
    pub label: String,
    /// Pointer position, when the host knows it
    pub position: Option<Point>,
    /// Pointer kind
    pub pointer: PointerKind,
}

/// Payload of a component event
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EventKind {
    /// Component finished mounting (exactly once per instance)
    Initialized,
    /// Component was cleaned up (exactly once per instance)
    Destroyed,
    /// Button press
    Press(PressDetails),
    /// Button long press
    LongPress(PressDetails),
    /// Label text changed between two configurations
    #[serde(rename_all = "camelCase")]
    TextChanged { text: String, previous_text: String },
}

impl EventKind {
    /// The handler routing key for this payload
    pub fn event_type(&self) -> EventType {
        match self {
            EventKind::Initialized => EventType::Initialized,
            EventKind::Destroyed => EventType::Destroyed,
            EventKind::Press(_) => EventType::Press,
            EventKind::LongPress(_) => EventType::LongPress,
            EventKind::TextChanged { .. } => EventType::TextChanged,
        }
    }
}

/// Routing key for split callbacks
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventType {
    Initialized,
    Destroyed,
    Press,
    LongPress,
    TextChanged,
}

/// An event emitted by a component
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentEvent {
    /// Id of the emitting component
    pub component_id: String,
    /// When the event was emitted
    pub timestamp: Timestamp,
    /// Event payload
    #[serde(flatten)]
    pub kind: EventKind,
}

impl ComponentEvent {
    /// Create an event stamped with the current time
    pub fn new(component_id: impl Into<String>, kind: EventKind) -> Self {
        Self {
            component_id: component_id.into(),
            timestamp: Timestamp::now(),
            kind,
        }
    }

    pub fn event_type(&self) -> EventType {
        self.kind.event_type()
    }
}

/// Callback for handling component events
///
/// Uses Rc since components are single-threaded.
pub type EventCallback = Rc<dyn Fn(&ComponentEvent)>;

/// A registered callback and the event type it listens to (`None` = all)
#[derive(Clone)]
struct Registration {
    filter: Option<EventType>,
    callback: EventCallback,
}

/// Storage for event handlers on a component
#[derive(Default, Clone)]
pub struct EventHandlers {
    /// Registrations in the order they were added
    registrations: Vec<Registration>,
}

impl EventHandlers {
    /// Create a new empty event handlers storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if there are any handlers registered
    pub fn is_empty(&self) -> bool {
        self.registrations.is_empty()
    }

    /// Number of registered callbacks
    pub fn len(&self) -> usize {
        self.registrations.len()
    }

    /// Check if any handler would receive events of this type
    pub fn has_handler(&self, event_type: EventType) -> bool {
        self.registrations
            .iter()
            .any(|r| r.filter.map_or(true, |f| f == event_type))
    }

    /// Register a unified dispatcher that receives every event
    pub fn on_event<F>(&mut self, handler: F)
    where
        F: Fn(&ComponentEvent) + 'static,
    {
        self.registrations.push(Registration {
            filter: None,
            callback: Rc::new(handler),
        });
    }

    /// Register a handler for one event type
    pub fn on<F>(&mut self, event_type: EventType, handler: F)
    where
        F: Fn(&ComponentEvent) + 'static,
    {
        self.registrations.push(Registration {
            filter: Some(event_type),
            callback: Rc::new(handler),
        });
    }

    /// Dispatch an event to every matching handler, in registration order
    pub fn dispatch(&self, event: &ComponentEvent) {
        let event_type = event.event_type();
        tracing::trace!(
            "dispatching {:?} from {} to {} handler(s)",
            event_type,
            event.component_id,
            self.registrations.len()
        );
        for registration in &self.registrations {
            if registration.filter.map_or(true, |f| f == event_type) {
                (registration.callback)(event);
            }
        }
    }

    /// Merge another set of handlers after this one
    pub fn merge(&mut self, other: EventHandlers) {
        self.registrations.extend(other.registrations);
    }

    // =========================================================================
    // Convenience registration methods
    // =========================================================================

    /// Register a mount handler
    pub fn on_init<F>(&mut self, handler: F)
    where
        F: Fn(&ComponentEvent) + 'static,
    {
        self.on(EventType::Initialized, handler);
    }

    /// Register a cleanup handler
    pub fn on_destroy<F>(&mut self, handler: F)
    where
        F: Fn(&ComponentEvent) + 'static,
    {
        self.on(EventType::Destroyed, handler);
    }

    /// Register a press handler
    pub fn on_press<F>(&mut self, handler: F)
    where
        F: Fn(&ComponentEvent) + 'static,
    {
        self.on(EventType::Press, handler);
    }

    /// Register a long press handler
    pub fn on_long_press<F>(&mut self, handler: F)
    where
        F: Fn(&ComponentEvent) + 'static,
    {
        self.on(EventType::LongPress, handler);
    }

    /// Register a text change handler
    pub fn on_text_change<F>(&mut self, handler: F)
    where
        F: Fn(&ComponentEvent) + 'static,
    {
        self.on(EventType::TextChanged, handler);
    }
}

impl fmt::Debug for EventHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventHandlers")
            .field("registrations", &self.registrations.len())
            .finish()
    }
}

/// Shared event log for tests and recorders
///
/// Cloning shares the underlying log, so one clone can be handed to
/// [`EventLog::handlers`] while another is inspected.
#[derive(Clone, Default)]
pub struct EventLog {
    events: Rc<std::cell::RefCell<Vec<ComponentEvent>>>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handlers that append every event to this log
    pub fn handlers(&self) -> EventHandlers {
        let mut handlers = EventHandlers::new();
        let events = Rc::clone(&self.events);
        handlers.on_event(move |event| events.borrow_mut().push(event.clone()));
        handlers
    }

    /// Snapshot of the recorded events
    pub fn events(&self) -> Vec<ComponentEvent> {
        self.events.borrow().clone()
    }

    /// Recorded events of one type
    pub fn of_type(&self, event_type: EventType) -> Vec<ComponentEvent> {
        self.events
            .borrow()
            .iter()
            .filter(|e| e.event_type() == event_type)
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}
