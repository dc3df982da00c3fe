//! Core error type and descriptive statistics for histogram binning
//!
//! This crate holds the pieces shared by every binstat crate:
//!
//! - [`Error`] / [`Result`]: the unified error type
//! - [`stats`]: data bounds, sample standard deviation, interquartile range
//!   and finiteness checks used by the bin-width rules
//!
//! # Example
//!
//! ```rust
//! use binstat_core::stats;
//!
//! let data = vec![1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 4.0, 4.0, 4.0];
//! let (min, max) = stats::bounds(&data).unwrap();
//! let sd = stats::std_dev(&data).unwrap();
//!
//! println!("range [{min}, {max}], sd = {sd:.4}");
//! ```

pub mod error;
pub mod stats;

// Re-export core types
pub use error::{Error, Result};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::Error;
    pub use crate::stats::{bounds, ensure_finite, interquartile_range, std_dev};
    pub use crate::Result;
}
