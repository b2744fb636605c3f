//! Function table for template engines
//!
//! A [`FuncMap`] maps helper names to a uniform callable signature: a slice
//! of `serde_json::Value` arguments in, a string or [`HelperError`] out. This
//! keeps the helpers independent of how any particular templating library
//! expects functions to be wired in; an adapter only needs to forward the
//! name and arguments.

use crate::clock::{Clock, SystemClock};
use crate::config::Config;
use crate::constants::*;
use crate::error::HelperError;
use crate::utils;
use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Uniform callable stored in a [`FuncMap`]
pub type HelperFn = Arc<dyn Fn(&[Value]) -> Result<String, HelperError> + Send + Sync>;

static DEFAULT_FUNCS: Lazy<FuncMap> = Lazy::new(FuncMap::default);

/// Shared function map with every built-in helper, backed by the system clock
pub fn default_funcs() -> &'static FuncMap {
    &DEFAULT_FUNCS
}

/// Registry of named helper functions
#[derive(Clone)]
pub struct FuncMap {
    funcs: HashMap<String, HelperFn>,
}

impl FuncMap {
    /// Create an empty function map
    pub fn new() -> Self {
        Self { funcs: HashMap::new() }
    }

    /// Create a map with every built-in helper and the legacy aliases
    ///
    /// `since` reads the current time from `clock`.
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self::from_config(&Config::default(), clock)
    }

    /// Create a map with the built-in helpers enabled by `config.helpers`
    pub fn from_config(config: &Config, clock: Arc<dyn Clock>) -> Self {
        let helpers = &config.helpers;
        let mut map = Self::new();

        for (name, func) in builtins(clock) {
            if !helpers.is_enabled(name) {
                log::debug!("Skipping disabled helper {}", name);
                continue;
            }
            map.funcs.insert(name.to_string(), func.clone());

            if helpers.aliases {
                if let Some(alias) = alias_for(name) {
                    map.funcs.insert(alias.to_string(), func);
                }
            }
        }

        map
    }

    /// Register a custom helper, replacing any existing one with the same name
    pub fn register<F>(&mut self, name: impl Into<String>, func: F)
    where
        F: Fn(&[Value]) -> Result<String, HelperError> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.funcs.insert(name.clone(), Arc::new(func)).is_some() {
            log::debug!("Replaced helper {}", name);
        }
    }

    /// Look up a helper by name
    pub fn get(&self, name: &str) -> Option<HelperFn> {
        self.funcs.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.funcs.contains_key(name)
    }

    /// Registered names in sorted order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.funcs.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.funcs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.funcs.is_empty()
    }

    /// Invoke the helper registered under `name`
    pub fn call(&self, name: &str, args: &[Value]) -> Result<String, HelperError> {
        let func = self
            .funcs
            .get(name)
            .ok_or_else(|| HelperError::UnknownFunction(name.to_string()))?;

        log::debug!("Calling helper {} with {} args", name, args.len());
        func(args).inspect_err(|e| log::warn!("Helper {} failed: {}", name, e))
    }
}

impl Default for FuncMap {
    fn default() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }
}

impl fmt::Debug for FuncMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FuncMap").field("names", &self.names()).finish()
    }
}

fn alias_for(name: &str) -> Option<&'static str> {
    match name {
        FN_TO_DURATION => Some(ALIAS_DURATION),
        FN_UPPERCASE_FIRST => Some(ALIAS_UPPERCASE_FIRST),
        _ => None,
    }
}

fn builtins(clock: Arc<dyn Clock>) -> Vec<(&'static str, HelperFn)> {
    vec![
        (
            FN_TO_DURATION,
            helper(|args| {
                arity(FN_TO_DURATION, args, 2)?;
                let from = f64_arg(FN_TO_DURATION, args, 0)?;
                let to = f64_arg(FN_TO_DURATION, args, 1)?;
                Ok(utils::to_duration(from, to))
            }),
        ),
        (
            FN_SINCE,
            helper(move |args| {
                arity(FN_SINCE, args, 1)?;
                let timestamp = i64_arg(FN_SINCE, args, 0)?;
                Ok(utils::since(timestamp, clock.as_ref()))
            }),
        ),
        (
            FN_TRUNCATE,
            helper(|args| {
                arity(FN_TRUNCATE, args, 2)?;
                let text = str_arg(FN_TRUNCATE, args, 0)?;
                let n = usize_arg(FN_TRUNCATE, args, 1)?;
                Ok(utils::truncate(text, n))
            }),
        ),
        (FN_UPPERCASE_FIRST, unary(FN_UPPERCASE_FIRST, utils::uppercase_first)),
        (FN_UPPERCASE, unary(FN_UPPERCASE, utils::uppercase)),
        (FN_LOWERCASE, unary(FN_LOWERCASE, utils::lowercase)),
        (
            FN_REGEX_REPLACE,
            helper(|args| {
                arity(FN_REGEX_REPLACE, args, 3)?;
                let pattern = str_arg(FN_REGEX_REPLACE, args, 0)?;
                let subject = str_arg(FN_REGEX_REPLACE, args, 1)?;
                let replacement = str_arg(FN_REGEX_REPLACE, args, 2)?;
                utils::regex_replace(pattern, subject, replacement)
            }),
        ),
        (FN_TRIM_LEFT, unary(FN_TRIM_LEFT, utils::trim_left)),
        (FN_TRIM_RIGHT, unary(FN_TRIM_RIGHT, utils::trim_right)),
    ]
}

fn helper<F>(func: F) -> HelperFn
where
    F: Fn(&[Value]) -> Result<String, HelperError> + Send + Sync + 'static,
{
    Arc::new(func)
}

/// Wrap a single-string helper
fn unary(name: &'static str, func: fn(&str) -> String) -> HelperFn {
    helper(move |args| {
        arity(name, args, 1)?;
        Ok(func(str_arg(name, args, 0)?))
    })
}

fn arity(name: &str, args: &[Value], expected: usize) -> Result<(), HelperError> {
    if args.len() != expected {
        return Err(HelperError::Arity {
            name: name.to_string(),
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

fn invalid(name: &str, index: usize, expected: &'static str) -> HelperError {
    HelperError::InvalidArgument {
        name: name.to_string(),
        position: index + 1,
        expected,
    }
}

fn str_arg<'a>(name: &str, args: &'a [Value], index: usize) -> Result<&'a str, HelperError> {
    args[index].as_str().ok_or_else(|| invalid(name, index, "a string"))
}

fn f64_arg(name: &str, args: &[Value], index: usize) -> Result<f64, HelperError> {
    args[index].as_f64().ok_or_else(|| invalid(name, index, "a number"))
}

// Floats are truncated toward zero; out-of-range values saturate.
fn i64_arg(name: &str, args: &[Value], index: usize) -> Result<i64, HelperError> {
    let value = &args[index];
    value
        .as_i64()
        .or_else(|| value.as_f64().map(|f| f.trunc() as i64))
        .ok_or_else(|| invalid(name, index, "a number"))
}

fn usize_arg(name: &str, args: &[Value], index: usize) -> Result<usize, HelperError> {
    args[index]
        .as_u64()
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| invalid(name, index, "a non-negative integer"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integer_arguments_accept_floats() {
        assert_eq!(i64_arg("since", &[json!(12.9)], 0).unwrap(), 12);
        assert_eq!(i64_arg("since", &[json!(-3)], 0).unwrap(), -3);
        assert!(i64_arg("since", &[json!("12")], 0).is_err());
    }

    #[test]
    fn length_arguments_reject_negatives() {
        assert_eq!(usize_arg("truncate", &[json!(5)], 0).unwrap(), 5);
        assert!(usize_arg("truncate", &[json!(-1)], 0).is_err());
        assert!(usize_arg("truncate", &[json!(2.5)], 0).is_err());
    }

    #[test]
    fn positions_are_one_based() {
        match str_arg("trimLeft", &[json!(1)], 0) {
            Err(HelperError::InvalidArgument { position, .. }) => assert_eq!(position, 1),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
