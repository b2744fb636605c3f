//! String helpers
//!
//! Every function here works on Unicode code points, never bytes, so a
//! multi-byte character is never split.

use crate::constants::TRIM_CUTSET;

/// Return the first `n` code points of `text`
///
/// No ellipsis or padding is added; shorter input is returned unchanged.
pub fn truncate(text: &str, n: usize) -> String {
    match text.char_indices().nth(n) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}

/// Uppercase only the first code point of `text`
///
/// Uses the Unicode simple mapping, so `ᾳ` becomes `ᾼ` and characters with
/// no single-code-point uppercase form (such as `ß`) are left as they are.
pub fn uppercase_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => {
            let mut out = String::with_capacity(text.len());
            out.push(simple_upper(first));
            out.push_str(chars.as_str());
            out
        }
    }
}

/// Uppercase every code point of `text` using single-code-point mappings
pub fn uppercase(text: &str) -> String {
    text.chars().map(simple_upper).collect()
}

/// Lowercase every code point of `text` using single-code-point mappings
pub fn lowercase(text: &str) -> String {
    text.chars().map(simple_lower).collect()
}

/// Strip leading spaces, tabs, carriage returns and newlines
pub fn trim_left(text: &str) -> String {
    text.trim_start_matches(TRIM_CUTSET).to_string()
}

/// Strip trailing spaces, tabs, carriage returns and newlines
pub fn trim_right(text: &str) -> String {
    text.trim_end_matches(TRIM_CUTSET).to_string()
}

// Unicode simple case mappings: a character whose full mapping expands to
// several code points keeps its simple mapping if it has one, and otherwise
// stays as it is, so case helpers never change the code point count.
fn simple_upper(c: char) -> char {
    match c {
        // Greek with ypogegrammeni, whose full mapping spells the iota out
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
            char::from_u32(c as u32 + 8).unwrap_or(c)
        }
        '\u{1FB3}' => '\u{1FBC}',
        '\u{1FC3}' => '\u{1FCC}',
        '\u{1FF3}' => '\u{1FFC}',
        _ => single(c.to_uppercase()).unwrap_or(c),
    }
}

fn simple_lower(c: char) -> char {
    match c {
        '\u{130}' => 'i',
        _ => single(c.to_lowercase()).unwrap_or(c),
    }
}

fn single(mut mapped: impl Iterator<Item = char>) -> Option<char> {
    let first = mapped.next()?;
    match mapped.next() {
        None => Some(first),
        Some(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_upper_keeps_expanding_characters() {
        assert_eq!(simple_upper('ß'), 'ß');
        assert_eq!(simple_upper('ü'), 'Ü');
        assert_eq!(simple_upper('1'), '1');
    }

    #[test]
    fn simple_upper_maps_iota_subscript() {
        assert_eq!(simple_upper('ᾳ'), 'ᾼ');
        assert_eq!(simple_upper('ᾀ'), 'ᾈ');
        assert_eq!(simple_upper('ᾧ'), 'ᾯ');
        assert_eq!(simple_upper('ῃ'), 'ῌ');
        assert_eq!(simple_upper('ῳ'), 'ῼ');
        // Titlecase forms and characters with no simple mapping stay put
        assert_eq!(simple_upper('ᾈ'), 'ᾈ');
        assert_eq!(simple_upper('ᾼ'), 'ᾼ');
        assert_eq!(simple_upper('ᾲ'), 'ᾲ');
    }

    #[test]
    fn simple_lower_uses_simple_mapping() {
        // U+0130 lowercases to "i\u{307}" in full, "i" in the simple mapping
        assert_eq!(simple_lower('\u{130}'), 'i');
        assert_eq!(simple_lower('Ä'), 'ä');
    }
}
