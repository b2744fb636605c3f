//! Constants used throughout the crate
//!
//! This module centralizes helper names, cutsets, and file names so the
//! registry, configuration, and tests agree on them.

// Helper names as seen by the template engine
pub const FN_TO_DURATION: &str = "toDuration";
pub const FN_SINCE: &str = "since";
pub const FN_TRUNCATE: &str = "truncate";
pub const FN_UPPERCASE_FIRST: &str = "uppercaseFirst";
pub const FN_UPPERCASE: &str = "uppercase";
pub const FN_LOWERCASE: &str = "lowercase";
pub const FN_REGEX_REPLACE: &str = "regexReplace";
pub const FN_TRIM_LEFT: &str = "trimLeft";
pub const FN_TRIM_RIGHT: &str = "trimRight";

// Legacy lowercase names kept for older templates
pub const ALIAS_DURATION: &str = "duration";
pub const ALIAS_UPPERCASE_FIRST: &str = "uppercasefirst";

/// Every built-in helper name, aliases excluded
pub const HELPER_NAMES: [&str; 9] = [
    FN_TO_DURATION,
    FN_SINCE,
    FN_TRUNCATE,
    FN_UPPERCASE_FIRST,
    FN_UPPERCASE,
    FN_LOWERCASE,
    FN_REGEX_REPLACE,
    FN_TRIM_LEFT,
    FN_TRIM_RIGHT,
];

/// Characters stripped by `trimLeft` and `trimRight`
pub const TRIM_CUTSET: [char; 4] = [' ', '\t', '\r', '\n'];

// Configuration
pub const CONFIG_FILE_NAME: &str = "tmpl-helpers.toml";
pub const CONFIG_DIR_NAME: &str = "tmpl-helpers";
pub const CONFIG_GENERATED: &str = "Generated default configuration file";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const LOG_FILE_NAME: &str = "tmpl-helpers.log";
