/// JSON rendering: one compact object, shortcode keys, glyph values.
use super::errors::ExportError;
use crate::emoji::Mappings;

/// Render `mappings` as a compact JSON object with no trailing newline.
///
/// # Errors
///
/// Returns `ExportError::Serialization` if `serde_json` rejects the map.
pub fn render(mappings: &Mappings) -> Result<String, ExportError> {
    Ok(serde_json::to_string(mappings)?)
}
