use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Represents the entire blueprint.json document
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "UPPERCASE")]
pub struct BlueprintDocument {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub blueprint: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,

    #[serde(default, rename = "TYPE", deserialize_with = "null_as_empty")]
    pub kind: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub version: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub environment: String,

    #[serde(default, deserialize_with = "null_as_empty")]
    pub workdir: String,

    /// Run commands, one per entry
    #[serde(default)]
    pub cmd: Vec<String>,

    /// Raw dependency lines, in row order
    #[serde(default)]
    pub depend: Vec<String>,

    /// Raw `KEY=VALUE` lines, in row order
    #[serde(default)]
    pub envvar: Vec<String>,

    /// CONTEXT, DEPLOYABILITY and any other keys, carried through untouched
    #[serde(flatten)]
    pub passthrough: Map<String, Value>,
}

/// Scalar fields saved as `null` load as empty strings
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
