#![forbid(unsafe_code)]

//! Core: layout geometry and the shared error type.

pub mod error;
pub mod geometry;

pub use error::{Error, Result};
pub use geometry::{Sides, WidthRange};
