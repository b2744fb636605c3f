//! tmpl-helpers - formatting helpers for text templates
//!
//! This library provides small, pure helper functions meant to be registered
//! as custom functions in a text-templating engine: rendering elapsed time,
//! truncating and case-mapping text, regex replacement, and whitespace
//! trimming. Each helper turns primitive inputs into a string ready for
//! interpolation into rendered output.
//!
//! # Modules
//!
//! * [`utils`] - The helper functions themselves
//! * [`registry`] - Name-to-function table for template engine registration
//! * [`clock`] - Injectable wall clock used by `since`
//! * [`config`] - Configuration of the function table and logging
//! * [`logger`] - `fern` based logging setup
//! * [`error`] - Error types surfaced to callers
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use tmpl_helpers::registry::default_funcs;
//!
//! let out = default_funcs().call("truncate", &[json!("foobarz"), json!(5)]).unwrap();
//! assert_eq!(out, "fooba");
//! ```

/// Injectable clock abstraction
pub mod clock;

/// Configuration module for the function table and logging
pub mod config;

/// Helper names and other constant values
pub mod constants;

/// Error types
pub mod error;

/// Logging setup
pub mod logger;

/// Function table for template engines
pub mod registry;

/// Formatting helper functions
pub mod utils;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::HelperError;
pub use registry::{FuncMap, HelperFn};
