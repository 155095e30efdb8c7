//! Utility modules for the Moncal application.
//!
//! - [`color`] - Colour name resolution for themes
//! - [`datetime`] - Calendar arithmetic, formatting and the clock abstraction

pub mod color;
pub mod datetime;
