use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, EnumString};

/// Symbol exactly as the user typed it.
///
/// No trimming, case folding or emptiness check is applied: whatever the
/// input held is what the backend receives.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Display, From, Serialize, Deserialize)]
#[display(fmt = "{}", _0)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

/// Sequence number handed to every chart update, strictly increasing
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Display, Serialize, Deserialize,
)]
#[display(fmt = "#{}", _0)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

/// How the symbol is placed into the query string
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, AsRefStr, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum QueryEncoding {
    /// Concatenated byte for byte, `A&B` stays `A&B`
    #[default]
    Raw,
    /// `application/x-www-form-urlencoded` escaping
    Percent,
}
