use crate::error::FormatError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Source kind of a dependency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Python runtime
    #[serde(rename = "PYTHON")]
    Python,

    /// Path on the local file system
    #[serde(rename = "LOCAL")]
    Local,

    /// Python package index
    #[serde(rename = "PyPI")]
    PyPI,

    /// System package
    #[serde(rename = "Apt")]
    Apt,

    /// Container image
    #[serde(rename = "DockerHub")]
    DockerHub,
}

impl Category {
    /// The one option set shared by parsing and rendering, in display order
    pub const ALL: [Category; 5] = [
        Category::Python,
        Category::Local,
        Category::PyPI,
        Category::Apt,
        Category::DockerHub,
    ];

    /// Canonical spelling, as written into dependency lines
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Python => "PYTHON",
            Category::Local => "LOCAL",
            Category::PyPI => "PyPI",
            Category::Apt => "Apt",
            Category::DockerHub => "DockerHub",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = FormatError;

    /// Matches case-insensitively so that stored `PyPi` rows still load;
    /// rendering always uses the canonical spelling.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| FormatError::UnknownCategory {
                value: value.to_string(),
            })
    }
}

/// Row shape of a dependency line, decided once from its prefix.
///
/// The condition fields only exist on `Extended` rows, where they are
/// always present even if empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowShape {
    /// `- [CATEGORY] NAME [VERSION]`
    Basic,

    /// `| [CATEGORY] NAME [VERSION] {EXTRA1} {EXTRA2}`
    Extended { extra1: String, extra2: String },
}

impl RowShape {
    pub fn prefix(&self) -> char {
        match self {
            RowShape::Basic => '-',
            RowShape::Extended { .. } => '|',
        }
    }

    pub fn is_extended(&self) -> bool {
        matches!(self, RowShape::Extended { .. })
    }
}

/// One parsed dependency line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyEntry {
    pub category: Category,

    /// Package, image or path name; never contains whitespace
    pub name: String,

    /// Version constraint or file-system path depending on `category`; may be empty
    pub version_or_path: String,

    pub shape: RowShape,
}

impl DependencyEntry {
    /// Creates a basic (three field) entry
    pub fn basic(category: Category, name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            category,
            name: name.into(),
            version_or_path: version.into(),
            shape: RowShape::Basic,
        }
    }

    /// Creates an extended (five field) entry
    pub fn extended(
        category: Category,
        name: impl Into<String>,
        version: impl Into<String>,
        extra1: impl Into<String>,
        extra2: impl Into<String>,
    ) -> Self {
        Self {
            category,
            name: name.into(),
            version_or_path: version.into(),
            shape: RowShape::Extended {
                extra1: extra1.into(),
                extra2: extra2.into(),
            },
        }
    }

    /// First condition field, `None` on basic rows
    pub fn extra1(&self) -> Option<&str> {
        match &self.shape {
            RowShape::Basic => None,
            RowShape::Extended { extra1, .. } => Some(extra1),
        }
    }

    /// Second condition field, `None` on basic rows
    pub fn extra2(&self) -> Option<&str> {
        match &self.shape {
            RowShape::Basic => None,
            RowShape::Extended { extra2, .. } => Some(extra2),
        }
    }
}

impl fmt::Display for DependencyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::codec::DependencyCodec::render(self))
    }
}

impl FromStr for DependencyEntry {
    type Err = FormatError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        crate::codec::DependencyCodec::parse(line)
    }
}
