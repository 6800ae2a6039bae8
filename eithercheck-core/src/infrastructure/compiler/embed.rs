// eithercheck-core/src/infrastructure/compiler/embed.rs

// JSON meant to be pasted inside a <script> block.
// Slashes and non-ASCII text stay as-is; only the characters that can end the script
// element or a JS string literal early are written as \u escapes, which parse back unchanged.

use serde::Serialize;

pub fn to_embeddable_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(value)?;
    let mut out = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => out.push_str("\\u003c"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            other => out.push(other),
        }
    }
    Ok(out)
}
