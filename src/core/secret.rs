//! The secret's data map: extraction and base64 decoding.

use std::collections::BTreeMap;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::Deserialize;

use crate::core::format::Format;
use crate::error::{KsdError, Result};

/// The `data` portion of a secret, values still base64-encoded.
///
/// A secret without a `data` field deserializes to an empty map.
#[derive(Debug, Default, Deserialize)]
pub struct EncodedData {
    #[serde(default)]
    pub data: BTreeMap<String, String>,
}

/// The decoded plain-text map that becomes `stringData`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DecodedData(pub BTreeMap<String, String>);

impl EncodedData {
    /// Parse just the `data` field out of a serialized secret, ignoring
    /// everything else.
    pub fn parse(raw: &[u8], format: Format) -> Result<Self> {
        match format {
            Format::Json => Ok(serde_json::from_slice(raw)?),
            Format::Yaml => Ok(serde_yaml::from_slice(raw)?),
        }
    }

    /// Decode every value with the standard base64 alphabet.
    ///
    /// The first value that fails to decode aborts the whole operation;
    /// there is no partial result. Decoded bytes are treated as opaque text,
    /// so values that are not valid UTF-8 are carried through lossily.
    pub fn decode(self) -> Result<DecodedData> {
        let mut decoded = BTreeMap::new();

        for (key, value) in self.data {
            let bytes = STANDARD
                .decode(value.as_bytes())
                .map_err(|source| KsdError::Decode {
                    key: key.clone(),
                    source,
                })?;
            decoded.insert(key, String::from_utf8_lossy(&bytes).into_owned());
        }

        Ok(DecodedData(decoded))
    }
}
