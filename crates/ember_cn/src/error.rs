//! Error types for ember_cn

use std::fmt;

use thiserror::Error;

/// Error returned by a caller-supplied hook
pub type HookError = Box<dyn std::error::Error + Send + Sync>;

/// Result of a caller-supplied hook
pub type HookResult = std::result::Result<(), HookError>;

/// Which caller-supplied hook failed
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HookKind {
    Init,
    Destroy,
    StateSync,
}

impl fmt::Display for HookKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            HookKind::Init => "init",
            HookKind::Destroy => "destroy",
            HookKind::StateSync => "state sync",
        })
    }
}

/// Errors raised by a component wrapper
#[derive(Error, Debug)]
pub enum WrapperError {
    /// The wrapper was cleaned up; it accepts no further calls
    #[error("component {id:?} has been destroyed")]
    Destroyed { id: String },

    /// An update tried to change the component id
    #[error("component id is fixed at mount: expected {expected:?}, found {found:?}")]
    IdMismatch { expected: String, found: String },

    /// A caller-supplied hook failed; wrapper state was left untouched
    #[error("{hook} hook of component {id:?} failed: {source}")]
    Hook {
        id: String,
        hook: HookKind,
        #[source]
        source: HookError,
    },
}

impl WrapperError {
    pub(crate) fn hook(id: &str, hook: HookKind, source: HookError) -> Self {
        WrapperError::Hook {
            id: id.to_string(),
            hook,
            source,
        }
    }
}

/// Errors raised while loading configuration or driving a surface
#[derive(Error, Debug)]
pub enum EmberError {
    /// Malformed configuration payload
    #[error("invalid component configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// A manifest slot names a component type this library does not provide
    #[error("unknown component type {kind:?} in slot {slot:?}")]
    UnknownComponent { slot: String, kind: String },

    /// A component with this id is already mounted
    #[error("component id {0:?} is already mounted")]
    DuplicateId(String),

    /// No component with this id is mounted
    #[error("no component with id {0:?} is mounted")]
    UnknownId(String),

    /// The operation does not apply to this component type
    #[error("component {id:?} is a {actual}, expected a {expected}")]
    KindMismatch {
        id: String,
        expected: &'static str,
        actual: &'static str,
    },

    /// Error from a component wrapper
    #[error(transparent)]
    Wrapper(#[from] WrapperError),
}

/// Result type for ember_cn operations
pub type Result<T> = std::result::Result<T, EmberError>;
