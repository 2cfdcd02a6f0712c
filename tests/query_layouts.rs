//! End-to-end tests for query string → thumbnail → layout.
//!
//! Each case drives the whole path: parse the query, build the [`Thumbnail`],
//! compute the [`Layout`] against a source, then check the geometry that a
//! drawing collaborator would receive.

#![cfg(feature = "riapi")]

use zenthumb::{CanvasColor, Layout, Rect, ResizeMode, Size, Thumbnail, riapi};

/// Parse a query and compute its layout, failing on any rejected value.
fn query_layout(query: &str, sw: u32, sh: u32) -> Layout {
    let result = riapi::parse(query);
    assert!(
        result
            .warnings
            .iter()
            .all(|w| !matches!(w, riapi::ParseWarning::ValueInvalid { .. })),
        "unexpected parse warnings for {query:?}: {:?}",
        result.warnings
    );
    result
        .instructions
        .to_thumbnail()
        .compute(sw, sh)
        .unwrap_or_else(|e| panic!("layout failed for {query:?}: {e}"))
}

fn canvas(query: &str, sw: u32, sh: u32) -> Size {
    query_layout(query, sw, sh).canvas
}

// ============================================================
// Loose mode
// ============================================================

mod mode_loose {
    use super::*;

    #[test]
    fn shrink_landscape() {
        // 1000x500 into 800x600: width-limited → 800x400
        let layout = query_layout("w=800&h=600&mode=loose", 1000, 500);
        assert_eq!(layout.canvas, Size::new(800, 400));
        assert!(!layout.needs_crop());
    }

    #[test]
    fn upscale_small_source() {
        // Loose always scales to the target box, up or down
        assert_eq!(canvas("w=800&h=600&mode=loose", 200, 100), Size::new(800, 400));
    }

    #[test]
    fn width_only() {
        assert_eq!(canvas("w=500&mode=loose", 1000, 500), Size::new(500, 250));
    }

    #[test]
    fn height_only() {
        assert_eq!(canvas("h=250&mode=loose", 1000, 500), Size::new(500, 250));
    }

    #[test]
    fn max_alias() {
        assert_eq!(canvas("w=800&h=600&mode=max", 1000, 500), Size::new(800, 400));
    }

    #[test]
    fn large_reference_dimensions() {
        // 5104x3380 into 2560x1696: 2560 × 3380/5104 = 1695.29 → 1695.
        // The rounded-down canvas is a hair wider than the source ratio,
        // so the sample gives up one row to match it.
        let layout = query_layout("w=2560&h=1696&mode=loose", 5104, 3380);
        assert_eq!(layout.canvas, Size::new(2560, 1695));
        assert_eq!(layout.sample, Rect::new(0, 1, 5104, 3379));
        assert!(layout.needs_crop());
    }
}

// ============================================================
// Crop mode
// ============================================================

mod mode_crop {
    use super::*;

    #[test]
    fn wider_source_crops_width() {
        // 1000x500 into 800x600: canvas is exact, the sample drops
        // 334 columns and keeps the full height
        let layout = query_layout("w=800&h=600&mode=crop", 1000, 500);
        assert_eq!(layout.canvas, Size::new(800, 600));
        assert_eq!(layout.sample, Rect::new(167, 0, 666, 500));
    }

    #[test]
    fn taller_source_crops_height() {
        // 500x1000 into 800x600: sample keeps the full width,
        // 600 × 500/800 = 375 rows survive, offset rounds 312.5 → 313
        let layout = query_layout("w=800&h=600&mode=crop", 500, 1000);
        assert_eq!(layout.canvas, Size::new(800, 600));
        assert_eq!(layout.sample, Rect::new(0, 313, 500, 375));
    }

    #[test]
    fn small_source_upscales() {
        let layout = query_layout("w=800&h=600&mode=crop", 200, 100);
        assert_eq!(layout.canvas, Size::new(800, 600));
        assert!(layout.needs_scaling());
    }

    #[test]
    fn tall_reference_dimensions() {
        // 768x433 into 100x200: 100 × 433/200 = 216.5 → 216 columns,
        // centered at round(552/2) = 276
        let layout = query_layout("w=100&h=200&mode=crop", 768, 433);
        assert_eq!(layout.canvas, Size::new(100, 200));
        assert_eq!(layout.sample, Rect::new(276, 0, 216, 433));
    }
}

// ============================================================
// Letterbox mode
// ============================================================

mod mode_letterbox {
    use super::*;

    #[test]
    fn canvas_is_exact() {
        assert_eq!(canvas("w=800&h=600&mode=letterbox", 1000, 500), Size::new(800, 600));
    }

    #[test]
    fn pad_alias() {
        assert_eq!(canvas("w=800&h=600&mode=pad", 1000, 500), Size::new(800, 600));
    }

    #[test]
    fn sample_matches_crop() {
        // Same sample geometry in both exact-canvas modes
        let a = query_layout("w=800&h=600&mode=letterbox", 1000, 500);
        let b = query_layout("w=800&h=600&mode=crop", 1000, 500);
        assert_eq!(a.sample, b.sample);
    }
}

// ============================================================
// Defaults
// ============================================================

mod defaults {
    use super::*;

    #[test]
    fn no_dimensions_uses_800_box() {
        // Loose default scales a 500x500 source up into the 800x800 box
        let layout = query_layout("", 500, 500);
        assert_eq!(layout.canvas, Size::new(800, 800));
        assert!(!layout.needs_crop());
        assert!(layout.needs_scaling());
    }

    #[test]
    fn width_only_keeps_default_height() {
        // w=400 leaves h at 800, so a square source fits the width
        assert_eq!(canvas("w=400", 1000, 1000), Size::new(400, 400));
    }

    #[test]
    fn default_mode_is_loose() {
        let result = riapi::parse("w=800&h=600");
        assert_eq!(result.instructions.mode, None);
        assert_eq!(result.instructions.to_thumbnail().mode, ResizeMode::Loose);
    }

    #[test]
    fn default_background_is_white() {
        let layout = query_layout("w=8&h=6&mode=letterbox", 20, 10);
        assert_eq!(
            layout.background,
            CanvasColor::Srgb {
                r: 255,
                g: 255,
                b: 255,
                a: 255
            }
        );
    }
}

// ============================================================
// Background color
// ============================================================

mod bgcolor {
    use super::*;

    #[test]
    fn hex_color_applied() {
        let layout = query_layout("w=800&h=600&mode=letterbox&bgcolor=ff0000", 1000, 500);
        assert_eq!(
            layout.background,
            CanvasColor::Srgb {
                r: 255,
                g: 0,
                b: 0,
                a: 255
            }
        );
    }

    #[test]
    fn named_color_applied() {
        let layout = query_layout("w=800&h=600&mode=letterbox&bgcolor=navy", 1000, 500);
        assert_eq!(
            layout.background,
            CanvasColor::Srgb {
                r: 0,
                g: 0,
                b: 128,
                a: 255
            }
        );
    }

    #[test]
    fn hex_with_alpha() {
        let layout = query_layout("w=800&h=600&bgcolor=77889953", 1000, 500);
        assert_eq!(
            layout.background,
            CanvasColor::Srgb {
                r: 0x77,
                g: 0x88,
                b: 0x99,
                a: 0x53
            }
        );
    }

    #[test]
    fn transparent_keyword() {
        let layout = query_layout("w=800&h=600&bgcolor=transparent", 1000, 500);
        assert_eq!(layout.background, CanvasColor::Transparent);
    }
}

// ============================================================
// Query string parsing
// ============================================================

mod parsing {
    use super::*;

    #[test]
    fn case_insensitive_keys() {
        let result = riapi::parse("Width=20&Height=300&Mode=Crop");
        assert_eq!(result.instructions.w, Some(20));
        assert_eq!(result.instructions.h, Some(300));
        assert_eq!(result.instructions.mode, Some(ResizeMode::Crop));
    }

    #[test]
    fn mode_word_aliases() {
        let result = riapi::parse("mode=pad");
        assert_eq!(result.instructions.mode, Some(ResizeMode::Letterbox));

        let result = riapi::parse("mode=max");
        assert_eq!(result.instructions.mode, Some(ResizeMode::Loose));
    }

    #[test]
    fn extras_preserved() {
        let result = riapi::parse("w=800&format=webp&quality=80&sharpen=10");
        assert!(result.warnings.is_empty());
        assert_eq!(
            result
                .instructions
                .extras()
                .get("format")
                .map(String::as_str),
            Some("webp")
        );
        assert_eq!(
            result
                .instructions
                .extras()
                .get("quality")
                .map(String::as_str),
            Some("80")
        );
        assert_eq!(
            result
                .instructions
                .extras()
                .get("sharpen")
                .map(String::as_str),
            Some("10")
        );
    }

    #[test]
    fn duplicate_key_keeps_last() {
        let result = riapi::parse("w=800&w=400");
        assert_eq!(result.instructions.w, Some(400));
        assert!(
            result
                .warnings
                .iter()
                .any(|w| matches!(w, riapi::ParseWarning::DuplicateKey { .. }))
        );
    }

    #[test]
    fn invalid_mode_warns_and_falls_back() {
        let result = riapi::parse("w=100&h=100&mode=stretch");
        assert!(
            result
                .warnings
                .iter()
                .any(|w| matches!(w, riapi::ParseWarning::ValueInvalid { key: "mode", .. }))
        );
        assert_eq!(result.instructions.mode, None);
        assert_eq!(result.instructions.to_thumbnail().mode, ResizeMode::Loose);
    }
}

// ============================================================
// Edge cases
// ============================================================

mod edge_cases {
    use super::*;

    #[test]
    fn square_source_square_target() {
        for mode in ["loose", "crop", "letterbox"] {
            let layout = query_layout(&format!("w=100&h=100&mode={mode}"), 100, 100);
            assert_eq!(layout.canvas, Size::new(100, 100), "mode {mode}");
            assert!(layout.is_identity(), "mode {mode}");
        }
    }

    #[test]
    fn extreme_aspect_ratio_crop() {
        // Very wide source: one centered column survives
        let layout = query_layout("w=100&h=100&mode=crop", 10000, 1);
        assert_eq!(layout.canvas, Size::new(100, 100));
        assert_eq!(layout.sample, Rect::new(5000, 0, 1, 1));

        // Very tall source
        let layout = query_layout("w=100&h=100&mode=crop", 1, 10000);
        assert_eq!(layout.canvas, Size::new(100, 100));
        assert_eq!(layout.sample, Rect::new(0, 5000, 1, 1));
    }

    #[test]
    fn empty_query_string() {
        let result = riapi::parse("");
        assert!(result.warnings.is_empty());
        assert_eq!(canvas("", 500, 500), Size::new(800, 800));
    }

    #[test]
    fn garbage_dimensions_fall_back_to_defaults() {
        // Unparseable and non-positive dimensions are dropped silently
        let result = riapi::parse("w=0&h=-5");
        assert!(result.warnings.is_empty());
        let thumb = result.instructions.to_thumbnail();
        assert_eq!((thumb.width, thumb.height), (800, 800));
    }

    #[test]
    fn only_unknown_keys() {
        let result = riapi::parse("foo=bar&baz=qux");
        assert_eq!(result.warnings.len(), 2);
        assert!(
            result
                .warnings
                .iter()
                .all(|w| matches!(w, riapi::ParseWarning::KeyNotRecognized { .. }))
        );
    }

    #[test]
    fn zero_source_rejected() {
        let thumb = riapi::parse("w=100&h=100").instructions.to_thumbnail();
        assert!(thumb.compute(0, 100).is_err());
        assert!(thumb.compute(100, 0).is_err());
    }
}

// ============================================================
// Instruction round-trip sanity
// ============================================================

#[test]
fn thumbnail_matches_manual_construction() {
    let parsed = riapi::parse("w=640&h=480&mode=crop&bgcolor=000000")
        .instructions
        .to_thumbnail();
    let manual = Thumbnail::new(640, 480)
        .mode(ResizeMode::Crop)
        .background(CanvasColor::Srgb {
            r: 0,
            g: 0,
            b: 0,
            a: 255,
        });
    assert_eq!(parsed, manual);
}
