//! Reader for the legacy whitespace-token config format
//!
//! A legacy file is a flat stream of tokens. A section name (`Window`, `Player`, ...)
//! is followed by a fixed number of positional values.

use super::ConfigError;
use std::str::{FromStr, SplitWhitespace};

/// Cursor over the tokens of a legacy config file
pub struct LegacyTokens<'a> {
    tokens: SplitWhitespace<'a>,
    section: &'a str,
}

impl<'a> LegacyTokens<'a> {
    /// Tokenize a whole file
    pub fn new(contents: &'a str) -> Self {
        Self {
            tokens: contents.split_whitespace(),
            section: "",
        }
    }

    /// Advance to the next section name, if any
    pub fn next_section(&mut self) -> Option<&'a str> {
        let section = self.tokens.next()?;
        self.section = section;
        Some(section)
    }

    /// Parse the next positional value of the current section
    pub fn value<T: FromStr>(&mut self, field: &str) -> Result<T, ConfigError> {
        let token = self.tokens.next().ok_or_else(|| {
            ConfigError::Parse(format!("{}: missing value for {}", self.section, field))
        })?;
        token.parse().map_err(|_| {
            ConfigError::Parse(format!(
                "{}: invalid value {:?} for {}",
                self.section, token, field
            ))
        })
    }

    /// Parse three positional values as an RGB triple
    pub fn rgb(&mut self, field: &str) -> Result<[u8; 3], ConfigError> {
        Ok([
            self.value(field)?,
            self.value(field)?,
            self.value(field)?,
        ])
    }
}
