//! Color parsing: hex (#RGB, #RRGGBB, #RRGGBBAA) and CSS basic named colors.

use crate::CanvasColor;

/// Parse a color string (hex or named) into a `CanvasColor`.
///
/// Accepts:
/// - `#RGB` / `RGB`: 3-digit hex, alpha = 0xFF
/// - `#RGBA` / `RGBA`: 4-digit hex
/// - `#RRGGBB` / `RRGGBB`: 6-digit hex, alpha = 0xFF
/// - `#RRGGBBAA` / `RRGGBBAA`: 8-digit hex
/// - CSS basic color names (case-insensitive): `red`, `white`, etc.
/// - `transparent`
pub(crate) fn parse_color(s: &str) -> Option<CanvasColor> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if s.eq_ignore_ascii_case("transparent") {
        return Some(CanvasColor::Transparent);
    }

    // Optional leading '#' (the tokenizer already decoded any %23)
    let hex = s.strip_prefix('#').unwrap_or(s);
    if let Some(c) = parse_hex(hex) {
        return Some(c);
    }

    lookup_named(s)
}

fn parse_hex(hex: &str) -> Option<CanvasColor> {
    let bytes = hex.as_bytes();
    if !matches!(bytes.len(), 3 | 4 | 6 | 8) {
        return None;
    }

    let mut nibbles = [0u8; 8];
    for (slot, &b) in nibbles.iter_mut().zip(bytes) {
        *slot = hex_val(b)?;
    }

    let (r, g, b, a) = match bytes.len() {
        // Shorthand forms: each nibble doubles, 'f' → 0xFF
        3 => (dup(nibbles[0]), dup(nibbles[1]), dup(nibbles[2]), 255),
        4 => (
            dup(nibbles[0]),
            dup(nibbles[1]),
            dup(nibbles[2]),
            dup(nibbles[3]),
        ),
        6 => (
            pair(nibbles[0], nibbles[1]),
            pair(nibbles[2], nibbles[3]),
            pair(nibbles[4], nibbles[5]),
            255,
        ),
        _ => (
            pair(nibbles[0], nibbles[1]),
            pair(nibbles[2], nibbles[3]),
            pair(nibbles[4], nibbles[5]),
            pair(nibbles[6], nibbles[7]),
        ),
    };
    Some(CanvasColor::Srgb { r, g, b, a })
}

/// Expand a shorthand nibble: 0xF → 0xFF.
fn dup(n: u8) -> u8 {
    n << 4 | n
}

fn pair(hi: u8, lo: u8) -> u8 {
    hi << 4 | lo
}

fn hex_val(ch: u8) -> Option<u8> {
    match ch {
        b'0'..=b'9' => Some(ch - b'0'),
        b'a'..=b'f' => Some(ch - b'a' + 10),
        b'A'..=b'F' => Some(ch - b'A' + 10),
        _ => None,
    }
}

fn lookup_named(name: &str) -> Option<CanvasColor> {
    // Basic color names are ASCII and at most 7 chars; lowercase into a
    // fixed scratch buffer so the lookup stays allocation-free.
    let bytes = name.as_bytes();
    let mut buf = [0u8; 8];
    if bytes.len() > buf.len() {
        return None;
    }
    for (i, &b) in bytes.iter().enumerate() {
        buf[i] = b.to_ascii_lowercase();
    }
    let lower = core::str::from_utf8(&buf[..bytes.len()]).ok()?;

    BASIC_COLORS
        .binary_search_by_key(&lower, |&(n, _)| n)
        .ok()
        .map(|idx| {
            let [r, g, b] = BASIC_COLORS[idx].1;
            CanvasColor::Srgb { r, g, b, a: 255 }
        })
}

/// CSS basic color keywords plus `orange` and the `grey` spelling, sorted
/// alphabetically for binary search. Format: (name, [r, g, b]); all opaque.
const BASIC_COLORS: &[(&str, [u8; 3])] = &[
    ("aqua", [0, 255, 255]),
    ("black", [0, 0, 0]),
    ("blue", [0, 0, 255]),
    ("fuchsia", [255, 0, 255]),
    ("gray", [128, 128, 128]),
    ("green", [0, 128, 0]),
    ("grey", [128, 128, 128]),
    ("lime", [0, 255, 0]),
    ("maroon", [128, 0, 0]),
    ("navy", [0, 0, 128]),
    ("olive", [128, 128, 0]),
    ("orange", [255, 165, 0]),
    ("purple", [128, 0, 128]),
    ("red", [255, 0, 0]),
    ("silver", [192, 192, 192]),
    ("teal", [0, 128, 128]),
    ("white", [255, 255, 255]),
    ("yellow", [255, 255, 0]),
];
