//! Flat key/value argument store
//!
//! Tokens are either `key` or `key=value`. The store keeps the distinction
//! between a key given without a value (`Some("")`) and a key that was never
//! given (`None`).

use std::collections::HashMap;
use thiserror::Error;

use crate::core::error::ErrorCode;

/// Errors raised while parsing argument tokens
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("Argument `{key}` was given more than once")]
    DuplicateKey { key: String },
}

impl ArgumentError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ArgumentError::DuplicateKey { .. } => ErrorCode::ArgumentDuplicate,
        }
    }
}

/// Parsed command arguments
///
/// Built once by [`ArgumentStore::parse`] and read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentStore {
    values: HashMap<String, Option<String>>,
}

impl ArgumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse raw tokens into a store
    ///
    /// Each token is split on its first `=`. A token starting with `=` has no
    /// key part, so the whole token is taken as a bare key.
    /// A key repeated across tokens is rejected.
    pub fn parse<I, S>(tokens: I) -> Result<Self, ArgumentError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut values = HashMap::new();

        for token in tokens {
            let (key, value) = split_token(token.as_ref());

            if values.contains_key(key) {
                return Err(ArgumentError::DuplicateKey {
                    key: key.to_string(),
                });
            }
            values.insert(key.to_string(), value.map(str::to_string));
        }

        Ok(Self { values })
    }

    /// Get the value bound to `key`, or `fallback` if the key is absent
    ///
    /// A key given without a value yields `Some("")`.
    pub fn get<'a>(&'a self, key: &str, fallback: Option<&'a str>) -> Option<&'a str> {
        match self.values.get(key) {
            Some(value) => Some(value.as_deref().unwrap_or("")),
            None => fallback,
        }
    }

    pub fn has(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// All keys present in the store, in no particular order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(|k| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn split_token(token: &str) -> (&str, Option<&str>) {
    match token.find('=') {
        Some(index) if index > 0 => (&token[..index], Some(&token[index + 1..])),
        _ => (token, None),
    }
}
