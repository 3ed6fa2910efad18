/// Lua module rendering: a `Mappings` table literal plus a `return` export.
///
/// Keys and values are quoted with JSON string encoding. Lua reads the
/// resulting literals (`\"`, `\\`, `\n`, raw UTF-8) unchanged. Other control
/// characters would come out as `\uXXXX`, which Lua 5.1 rejects; the emoji
/// table contains none.
use serde::Serialize;

use super::errors::ExportError;
use crate::emoji::Mappings;

const HEADER: &str = "local Mappings = {\n";
const FOOTER: &str = "}\n\nreturn {\n\tMappings = Mappings,\n}\n";

/// Render `mappings` as a Lua module exposing `Mappings`.
///
/// # Errors
///
/// Returns `ExportError::Serialization` if a key or value cannot be quoted.
pub fn render(mappings: &Mappings) -> Result<String, ExportError> {
    let mut out = String::from(HEADER);
    for (key, value) in mappings {
        let key = quote(key.as_str())?;
        let value = quote(value.as_str())?;
        out.push_str("\t[");
        out.push_str(&key);
        out.push_str("] = ");
        out.push_str(&value);
        out.push_str(",\n");
    }
    out.push_str(FOOTER);
    Ok(out)
}

fn quote<T: Serialize + ?Sized>(value: &T) -> Result<String, ExportError> {
    Ok(serde_json::to_string(value)?)
}
