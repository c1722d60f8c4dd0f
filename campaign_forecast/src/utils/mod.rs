//! Utility and helper functions needed for:
//! - Error handling
//! - Argument validation
//! - Numeric rounding and clamping

pub(crate) mod common;
pub(crate) mod error;
