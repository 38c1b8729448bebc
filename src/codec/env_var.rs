use crate::error::FormatError;
use crate::models::EnvVarEntry;

/// Parser and renderer for `KEY=VALUE` lines
pub struct EnvVarCodec;

impl EnvVarCodec {
    /// Splits on the first `=` only; the value is kept verbatim and may
    /// itself contain `=`.
    pub fn parse(line: &str) -> Result<EnvVarEntry, FormatError> {
        let (key, value) = line
            .split_once('=')
            .ok_or_else(|| FormatError::MissingSeparator {
                line: line.to_string(),
            })?;

        if key.is_empty() {
            return Err(FormatError::EmptyKey {
                line: line.to_string(),
            });
        }

        Ok(EnvVarEntry::new(key, value))
    }

    /// Joins key and value with `=`. Empty keys and values are rendered as is.
    pub fn render(entry: &EnvVarEntry) -> String {
        format!("{}={}", entry.key, entry.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_keeps_later_separators() {
        let entry = EnvVarCodec::parse("OPTS=--a=1 --b=2").unwrap();
        assert_eq!(entry.key, "OPTS");
        assert_eq!(entry.value, "--a=1 --b=2");
    }

    #[test]
    fn test_empty_value_is_allowed() {
        let entry = EnvVarCodec::parse("DEBUG=").unwrap();
        assert_eq!(entry.value, "");
        assert_eq!(EnvVarCodec::render(&entry), "DEBUG=");
    }

    #[test]
    fn test_render_is_total() {
        assert_eq!(EnvVarCodec::render(&EnvVarEntry::new("", "value")), "=value");
        assert_eq!(EnvVarCodec::render(&EnvVarEntry::new("", "")), "=");
    }
}
