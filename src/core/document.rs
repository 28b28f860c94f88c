//! The full secret document: generic parse, merge, and rendering.

use serde::Serialize;
use serde_json as json;
use serde_yaml as yaml;

use crate::core::format::Format;
use crate::core::secret::DecodedData;
use crate::error::Result;

/// Name of the key holding a secret's base64-encoded data.
const DATA_KEY: &str = "data";
/// Name of the key Kubernetes uses for plain-text secret data.
const STRING_DATA_KEY: &str = "stringData";

/// The whole secret parsed into the value tree native to its wire format.
///
/// Kept as a closed enum so the format decision is made once and every
/// operation dispatches on it, with field order preserved by the underlying
/// map types.
#[derive(Debug)]
pub enum Document {
    Json(json::Map<String, json::Value>),
    Yaml(yaml::Mapping),
}

impl Document {
    /// Parse a serialized secret as a generic top-level mapping.
    ///
    /// This is a second, independent parse of the same bytes the encoded
    /// view was extracted from. A document whose top level is not a mapping
    /// is a parse error.
    pub fn parse(raw: &[u8], format: Format) -> Result<Self> {
        match format {
            Format::Json => Ok(Self::Json(json::from_slice(raw)?)),
            Format::Yaml => Ok(Self::Yaml(yaml::from_slice(raw)?)),
        }
    }

    /// Swap the encoded `data` map for the decoded `stringData` map.
    ///
    /// `stringData` is written even when the source had no `data` field, so
    /// a secret with nothing to decode still comes out with an empty map.
    pub fn replace_data(&mut self, decoded: DecodedData) {
        match self {
            Self::Json(map) => {
                map.remove(DATA_KEY);
                let values = decoded
                    .0
                    .into_iter()
                    .map(|(k, v)| (k, json::Value::String(v)))
                    .collect();
                map.insert(STRING_DATA_KEY.to_string(), json::Value::Object(values));
            }
            Self::Yaml(map) => {
                map.remove(&yaml::Value::String(DATA_KEY.to_string()));
                let values = decoded
                    .0
                    .into_iter()
                    .map(|(k, v)| (yaml::Value::String(k), yaml::Value::String(v)))
                    .collect();
                map.insert(
                    yaml::Value::String(STRING_DATA_KEY.to_string()),
                    yaml::Value::Mapping(values),
                );
            }
        }
    }

    /// Render the document back to text.
    ///
    /// JSON is pretty-printed with a four-space indent unit; YAML uses the
    /// library's default block style. Neither output is guaranteed to end in
    /// a newline here; the pipeline adds one.
    pub fn render(&self) -> Result<String> {
        match self {
            Self::Json(map) => {
                let mut buf = Vec::new();
                let formatter = json::ser::PrettyFormatter::with_indent(b"    ");
                let mut ser = json::Serializer::with_formatter(&mut buf, formatter);
                map.serialize(&mut ser)?;
                // serde_json only emits valid UTF-8
                Ok(String::from_utf8_lossy(&buf).into_owned())
            }
            Self::Yaml(map) => Ok(yaml::to_string(map)?),
        }
    }
}
