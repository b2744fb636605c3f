//! Regular expression helpers

use crate::error::HelperError;
use regex::Regex;

/// Replace every non-overlapping match of `pattern` in `subject`
///
/// `replacement` may reference capture groups as `$1`, `${1}` or `$name`.
///
/// # Arguments
/// * `pattern` - Regular expression to compile
/// * `subject` - Text to search
/// * `replacement` - Template expanded for each match
///
/// # Returns
/// * `Result<String, HelperError>` - The rewritten text, or `InvalidPattern`
///   if `pattern` does not compile
pub fn regex_replace(pattern: &str, subject: &str, replacement: &str) -> Result<String, HelperError> {
    let regex = Regex::new(pattern).map_err(|source| HelperError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;

    Ok(regex.replace_all(subject, replacement).into_owned())
}
