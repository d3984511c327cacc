//! Themed components built on the base wrapper

pub mod button;
pub mod label;

pub use button::{
    button, Button, ButtonConfig, ButtonMode, ButtonPatch, ButtonSize, ButtonWrapper, Interaction,
};
pub use label::{label, Label, LabelConfig, LabelPatch, LabelSize, LabelWrapper, StateSync};
