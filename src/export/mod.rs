/// Export layer: output format selection and rendering.
pub mod errors;
pub mod json;
pub mod lua;

pub use errors::ExportError;

use crate::emoji::Mappings;

/// A resolved output format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    /// Compact JSON object.
    Json,
    /// Lua module returning `{ Mappings = Mappings }`.
    Lua,
    /// Anything else, including the `text` default. Rejected by [`render`].
    Invalid(String),
}

impl From<&str> for OutputFormat {
    fn from(s: &str) -> Self {
        match s {
            "json" => Self::Json,
            "lua" => Self::Lua,
            other => Self::Invalid(other.to_owned()),
        }
    }
}

/// Render `mappings` in `format`.
///
/// Nothing is written here, so a rejected format never produces partial output.
///
/// # Errors
///
/// Returns `ExportError::UnsupportedFormat` for `OutputFormat::Invalid`, or
/// `ExportError::Serialization` if encoding fails.
pub fn render(mappings: &Mappings, format: &OutputFormat) -> Result<String, ExportError> {
    match format {
        OutputFormat::Json => json::render(mappings),
        OutputFormat::Lua => lua::render(mappings),
        OutputFormat::Invalid(s) => Err(ExportError::UnsupportedFormat { format: s.clone() }),
    }
}
