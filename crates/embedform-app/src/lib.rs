//! # embedform-app - Visibility Controller
//!
//! This crate implements the TEA (The Elm Architecture) pattern for the
//! widget's visibility state machine: which of the three mutually
//! exclusive surfaces (popup shell, callout teaser, form) is shown, and
//! which side effects each transition triggers.
//!
//! State is mutated only through [`handler::update`]; side effects leave
//! the reducer as [`UpdateAction`]s, run on spawned tasks, and re-enter
//! the loop as completion [`Message`]s. The [`Engine`] owns the loop and
//! broadcasts [`WidgetEvent`]s to render collaborators after each
//! processing cycle.

pub mod actions;
pub mod engine;
pub mod engine_event;
pub mod handler;
pub mod host;
pub mod message;
pub mod process;
pub mod state;

// Re-export primary types
pub use engine::Engine;
pub use engine_event::WidgetEvent;
pub use handler::{UpdateAction, UpdateResult};
pub use host::{ContainerHandle, HostBridge, HostMessage};
pub use message::Message;
pub use state::{Surface, WidgetState};
