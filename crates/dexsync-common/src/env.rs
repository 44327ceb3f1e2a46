//! Typed lookups of process environment variables
//!
//! Blank values are treated the same as unset ones so that an empty
//! `KEY=` line in a `.env` file falls back to the default.

use crate::error::{CommonError, Result};
use std::fmt::Display;
use std::str::FromStr;

/// Read a variable, returning `None` when it is unset, blank or not unicode.
pub fn var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Parse a variable into `T`, or `None` when it is not set.
pub fn parse_opt<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    match var(name) {
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|e: T::Err| CommonError::InvalidEnv {
                name: name.to_string(),
                value: raw,
                reason: e.to_string(),
            }),
        None => Ok(None),
    }
}

/// Parse a variable into `T`, falling back to `default` when it is not set.
pub fn parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    Ok(parse_opt(name)?.unwrap_or(default))
}
