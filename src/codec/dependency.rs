use crate::error::FormatError;
use crate::models::{Category, DependencyEntry, RowShape};
use regex::Regex;
use std::sync::LazyLock;

/// `[CATEGORY] NAME [VERSION]` followed by up to two `{...}` groups,
/// anchored on both ends. Whitespace runs between tokens are tolerated.
static ROW_BODY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*\[([^\]]*)\]\s*([^\s\[\]{}]+)\s*\[([^\]]*)\]\s*(?:\{([^}]*)\}\s*)?(?:\{([^}]*)\}\s*)?$",
    )
    .expect("dependency row pattern is valid")
});

/// Parser and renderer for single dependency lines.
///
/// ```text
/// Basic:    - [CATEGORY] NAME [VERSION]
/// Extended: | [CATEGORY] NAME [VERSION] {EXTRA1} {EXTRA2}
/// ```
pub struct DependencyCodec;

impl DependencyCodec {
    /// Parses one dependency line.
    ///
    /// The first non-whitespace character selects the row shape. On an
    /// extended row a missing brace group decodes as an empty string.
    pub fn parse(line: &str) -> Result<DependencyEntry, FormatError> {
        let trimmed = line.trim_start();
        let mut chars = trimmed.chars();

        match chars.next() {
            Some('-') => Self::parse_body(line, chars.as_str(), false),
            Some('|') => Self::parse_body(line, chars.as_str(), true),
            _ => Err(Self::classify_unprefixed(line, trimmed)),
        }
    }

    /// Renders an entry in canonical form. Extended rows always carry both
    /// brace groups, even when empty.
    pub fn render(entry: &DependencyEntry) -> String {
        let mut line = format!(
            "{} [{}] {} [{}]",
            entry.shape.prefix(),
            entry.category,
            entry.name,
            entry.version_or_path
        );

        if let RowShape::Extended { extra1, extra2 } = &entry.shape {
            line.push_str(&format!(" {{{}}} {{{}}}", extra1, extra2));
        }

        line
    }

    fn parse_body(line: &str, body: &str, extended: bool) -> Result<DependencyEntry, FormatError> {
        let captures = ROW_BODY
            .captures(body)
            .ok_or_else(|| FormatError::MalformedDependency {
                line: line.to_string(),
            })?;

        let category: Category = captures[1].trim().parse()?;
        let name = captures[2].to_string();
        let version_or_path = captures[3].trim().to_string();
        let extra1 = captures.get(4).map(|m| m.as_str().trim().to_string());
        let extra2 = captures.get(5).map(|m| m.as_str().trim().to_string());

        let shape = if extended {
            RowShape::Extended {
                extra1: extra1.unwrap_or_default(),
                extra2: extra2.unwrap_or_default(),
            }
        } else if extra1.is_some() || extra2.is_some() {
            // Condition groups belong to extended rows only
            return Err(FormatError::MalformedDependency {
                line: line.to_string(),
            });
        } else {
            RowShape::Basic
        };

        Ok(DependencyEntry {
            category,
            name,
            version_or_path,
            shape,
        })
    }

    /// A line without a valid marker is blamed on the marker when the rest of
    /// it is a well-formed row, and on its structure otherwise.
    fn classify_unprefixed(line: &str, trimmed: &str) -> FormatError {
        let mut chars = trimmed.chars();
        chars.next();

        if ROW_BODY.is_match(trimmed) || (!trimmed.is_empty() && ROW_BODY.is_match(chars.as_str())) {
            FormatError::UnknownPrefix {
                line: line.to_string(),
            }
        } else {
            FormatError::MalformedDependency {
                line: line.to_string(),
            }
        }
    }
}
