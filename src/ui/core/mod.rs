//! Core UI functionality for the Moncal application.
//!
//! This module contains the building blocks shared by every component:
//!
//! - [`actions`] - Action definitions produced by components
//! - [`component`] - Base component trait and rendering abstractions
//! - [`event_handler`] - Terminal input polling and clock ticks
//!
//! Components turn terminal events into [`Action`]s, pass actions through
//! [`Component::update`], and draw themselves into a `Frame` area.

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::Action;
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
