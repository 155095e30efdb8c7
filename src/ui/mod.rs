//! UI module for Moncal
//!
//! This module holds the month body component, its helpers, and the viewer
//! that hosts it in a terminal.

pub mod app_component;
pub mod components;
pub mod core;
pub mod renderer;

pub use app_component::AppComponent;
pub use renderer::run_app;
