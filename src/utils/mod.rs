//! Formatting helpers exposed to templates.
//!
//! Each function is a pure transform of its arguments into a string that can
//! be interpolated directly into rendered output.
//!
//! # Available Utilities
//!
//! - [`duration`] - Elapsed-time rendering (`toDuration`, `since`)
//! - [`text`] - Code-point aware truncation, case mapping and trimming
//! - [`pattern`] - Regex replace-all with capture group expansion

pub mod duration;
pub mod pattern;
pub mod text;

pub use duration::{format_duration, format_seconds, since, since_now, to_duration};
pub use pattern::regex_replace;
pub use text::{lowercase, trim_left, trim_right, truncate, uppercase, uppercase_first};
