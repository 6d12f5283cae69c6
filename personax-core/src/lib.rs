//! # PersonaX Core Library
//!
//! Shared code for the PersonaX quiz service including:
//! - Trait axis and letter definitions
//! - Likert response scale
//! - Question catalog loading and validation
//! - The scorer (answers -> four-letter type)
//! - Result export (key/value text format)
//! - Static type and letter descriptions

pub mod axis;
pub mod catalog;
pub mod describe;
pub mod error;
pub mod report;
pub mod scale;
pub mod scorer;

pub use axis::Axis;
pub use catalog::{Catalog, Question};
pub use error::{Error, Result};
pub use report::TypeResult;
pub use scale::Response;
pub use scorer::score;
