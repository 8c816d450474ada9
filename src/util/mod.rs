//! Utility types and functions.
//!
//! - [`Error`] / [`Result`] - Error handling
//! - [`Rgba`] - Color type and channel helpers

mod color;
mod error;

pub use color::*;
pub use error::*;
