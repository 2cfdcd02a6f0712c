//! Query string tokenizer and value parsers.
//!
//! Minimal percent-decoding and key-value extraction without external dependencies.

use alloc::string::String;
use alloc::vec::Vec;

use super::ParseWarning;
use super::color::parse_color;
use super::instructions::Instructions;
use crate::ResizeMode;

/// Known non-layout keys that should be preserved in `extras` without warnings.
/// Sorted for binary search.
const KNOWN_EXTRAS: &[&str] = &[
    "cache",
    "format",
    "gamma",
    "jpeg.progressive",
    "jpeg.quality",
    "png.quality",
    "quality",
    "sharpen",
    "watermark",
    "webp.quality",
];

/// Parse a thumbnail query string into Instructions + warnings.
pub(crate) fn parse_query(query: &str) -> (Instructions, Vec<ParseWarning>) {
    let mut inst = Instructions::new();
    let mut warnings = Vec::new();

    for pair in split_query(query) {
        let (raw_key, raw_value) = split_pair(pair);
        let mut key = percent_decode(raw_key);
        key.make_ascii_lowercase();
        let value = percent_decode(raw_value);

        dispatch_key(&key, &value, &mut inst, &mut warnings);
    }

    (inst, warnings)
}

fn dispatch_key(key: &str, value: &str, inst: &mut Instructions, warnings: &mut Vec<ParseWarning>) {
    match key {
        // Dimensions: non-positive or unparseable values are dropped silently,
        // matching the lenient behavior resize endpoints ship
        "w" | "width" => set_or_warn(&mut inst.w, parse_dimension(value), key, value, warnings),
        "h" | "height" => set_or_warn(&mut inst.h, parse_dimension(value), key, value, warnings),

        // Mode: an unrecognized word warns and leaves the field unset; it
        // never falls back to a policy on its own
        "mode" => {
            if let Some(m) = parse_resize_mode(value) {
                set_or_warn(&mut inst.mode, Some(m), key, value, warnings);
            } else {
                warnings.push(ParseWarning::ValueInvalid {
                    key: "mode",
                    value: String::from(value),
                    reason: "expected crop|letterbox|pad|loose|max",
                });
            }
        }

        // Background color
        "bgcolor" => {
            if let Some(c) = parse_color(value) {
                set_or_warn(&mut inst.bgcolor, Some(c), key, value, warnings);
            } else if !value.is_empty() {
                warnings.push(ParseWarning::ValueInvalid {
                    key: "bgcolor",
                    value: String::from(value),
                    reason: "expected hex color or CSS basic color name",
                });
            }
        }

        // Known non-layout keys pass into extras without a warning
        _ => {
            if KNOWN_EXTRAS.binary_search(&key).is_ok() {
                inst.extras.insert(String::from(key), String::from(value));
            } else {
                warnings.push(ParseWarning::KeyNotRecognized {
                    key: String::from(key),
                    value: String::from(value),
                });
            }
        }
    }
}

/// Set a field, warning when an earlier value gets overwritten.
fn set_or_warn<T>(
    field: &mut Option<T>,
    parsed: Option<T>,
    key: &str,
    value: &str,
    warnings: &mut Vec<ParseWarning>,
) {
    let Some(v) = parsed else { return };
    if field.replace(v).is_some() {
        warnings.push(ParseWarning::DuplicateKey {
            key: String::from(key),
            value: String::from(value),
        });
    }
}

// ---- Value parsers ----

fn parse_dimension(s: &str) -> Option<u32> {
    s.trim().parse::<u32>().ok().filter(|&v| v > 0)
}

fn parse_resize_mode(s: &str) -> Option<ResizeMode> {
    match s.trim().to_ascii_lowercase().as_str() {
        "crop" => Some(ResizeMode::Crop),
        "letterbox" | "pad" => Some(ResizeMode::Letterbox),
        "loose" | "max" => Some(ResizeMode::Loose),
        _ => None,
    }
}

// ---- Query string tokenizer ----

/// Split query string on '&', skipping empty pairs.
fn split_query(query: &str) -> impl Iterator<Item = &str> {
    // Callers may pass the query with or without its leading '?'
    let query = query.strip_prefix('?').unwrap_or(query);
    query.split('&').filter(|s| !s.is_empty())
}

/// Split a single "key=value" pair on the first '='.
fn split_pair(pair: &str) -> (&str, &str) {
    match pair.split_once('=') {
        Some((key, value)) => (key, value),
        None => (pair, ""),
    }
}

/// Percent-decode a URL component. Also handles '+' as space.
fn percent_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out = String::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(' ');
                i += 1;
            }
            b'%' => {
                let hi = bytes.get(i + 1).copied().and_then(hex_digit);
                let lo = bytes.get(i + 2).copied().and_then(hex_digit);
                if let (Some(hi), Some(lo)) = (hi, lo) {
                    out.push((hi << 4 | lo) as char);
                    i += 3;
                } else {
                    out.push('%');
                    i += 1;
                }
            }
            b => {
                out.push(b as char);
                i += 1;
            }
        }
    }
    out
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
