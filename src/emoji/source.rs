/// Shortcode table built from the `emojis` crate (gemoji shortcodes).
use std::collections::BTreeMap;

/// Shortcode (e.g. `"grinning"`) to glyph (e.g. `"😀"`).
///
/// Consumers treat this as an unordered mapping. The `BTreeMap` only makes
/// repeated exports byte-identical.
pub type Mappings = BTreeMap<String, String>;

/// Build the full shortcode table.
///
/// Every shortcode of every emoji becomes one entry, so aliases such as
/// `+1` and `thumbsup` both map to the same glyph.
#[must_use]
pub fn mappings() -> Mappings {
    emojis::iter()
        .flat_map(|emoji| {
            emoji
                .shortcodes()
                .map(move |code| (code.to_owned(), emoji.as_str().to_owned()))
        })
        .collect()
}
