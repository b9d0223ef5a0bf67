//! Public API for the qualpal crate.
//!
//! This module provides the high-level surface: the [`Qualpal`] builder and
//! the unified [`Error`] type.

mod builder;
mod error;

pub use builder::Qualpal;
pub use error::{Error, Result};
