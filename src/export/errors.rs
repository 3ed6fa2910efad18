/// Errors from the export layer.
use thiserror::Error;

/// Errors that can occur while rendering or writing the shortcode table.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The resolved `--output` / `-o` value is not `json` or `lua`.
    #[error("invalid output format specified: {format}")]
    UnsupportedFormat {
        /// The rejected (lowercased) format text.
        format: String,
    },

    /// A key or value could not be encoded as a JSON string.
    #[error("failed to serialize mappings: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Writing the rendered text to stdout failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Exit code mapping for `ExportError` variants.
///
/// Code 2 is left to clap for argument errors.
impl ExportError {
    /// Return the CLI exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UnsupportedFormat { .. } => 1,
            Self::Serialization(_) => 3,
            Self::Io(_) => 4,
        }
    }
}
