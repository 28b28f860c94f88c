//! Pipeline orchestration: serialized secret in, decoded document out.

use tracing::debug;

use crate::core::document::Document;
use crate::core::format::Format;
use crate::core::secret::EncodedData;
use crate::error::Result;

/// Transform a serialized secret so its `data` map becomes a decoded
/// `stringData` map, preserving every other field.
///
/// The returned string is the complete output document, ending in exactly
/// one trailing newline.
pub fn decode_secret(raw: &[u8], format: Format) -> Result<String> {
    let encoded = EncodedData::parse(raw, format)?;
    debug!(%format, keys = encoded.data.len(), "decoding secret data");

    let decoded = encoded.decode()?;

    let mut document = Document::parse(raw, format)?;
    document.replace_data(decoded);

    let mut rendered = document.render()?;
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    Ok(rendered)
}
