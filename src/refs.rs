#![deny(missing_docs)]

//! # Reference Utilities
//!
//! Helpers for building and inverting `#/components/schemas/<name>`
//! references.
//!
//! These utilities are intentionally lightweight: references are always
//! local to the emitted document, but component names may contain
//! characters that need JSON Pointer (`~0`/`~1`) and percent escaping to
//! survive inside a `$ref` string.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters that must be percent-encoded inside a URI fragment segment.
const FRAGMENT_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Builds a `$ref` target for a named component schema.
pub fn schema_ref(name: &str) -> String {
    format!("#/components/schemas/{}", encode_pointer_segment(name))
}

/// Extracts the component name from a `$ref` if it points to
/// `#/components/schemas/{name}` in the current document.
pub fn component_name_from_ref(ref_str: &str) -> Option<String> {
    let pointer = ref_str.strip_prefix('#')?.trim_start_matches('/');
    let segments: Vec<&str> = pointer.split('/').collect();

    if segments.len() < 3 {
        return None;
    }
    if segments[0] != "components" || segments[1] != "schemas" {
        return None;
    }

    let name = decode_pointer_segment(segments[2]);
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Encodes a JSON Pointer segment (handles `~`/`/` and URI-unsafe bytes).
pub fn encode_pointer_segment(segment: &str) -> String {
    utf8_percent_encode(segment, FRAGMENT_SEGMENT)
        .to_string()
        .replace('~', "~0")
        .replace('/', "~1")
}

/// Decodes a JSON Pointer segment (handles `~1` and `~0`).
pub fn decode_pointer_segment(segment: &str) -> String {
    let decoded = segment.replace("~1", "/").replace("~0", "~");
    percent_decode_str(&decoded)
        .decode_utf8_lossy()
        .into_owned()
}
