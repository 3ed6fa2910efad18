/// Emoji data layer: the shortcode to glyph table exported by this tool.
pub mod source;

pub use source::{Mappings, mappings};
