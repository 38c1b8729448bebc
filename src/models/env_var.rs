use crate::error::FormatError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One `KEY=VALUE` environment variable
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVarEntry {
    /// Text before the first `=`
    pub key: String,

    /// Everything after the first `=`, verbatim
    pub value: String,
}

impl EnvVarEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl fmt::Display for EnvVarEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::codec::EnvVarCodec::render(self))
    }
}

impl FromStr for EnvVarEntry {
    type Err = FormatError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        crate::codec::EnvVarCodec::parse(line)
    }
}
