//! Thumbnail resize geometry: canvas sizing and centered sample rectangles.
//!
//! Pure geometry. Nothing here touches pixel buffers or files, and the core
//! module is allocation-free and `no_std` compatible.
//!
//! # Modules
//!
//! - [`thumbnail`]: resize modes (crop, letterbox, loose), canvas and sample
//!   computation
//! - `riapi`: query-string instruction parsing (feature `riapi`)
//! - `svg`: layout diagrams for debugging (feature `svg`)

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod thumbnail;

#[cfg(feature = "riapi")]
pub mod riapi;

#[cfg(feature = "svg")]
pub mod svg;

// Re-exports: core types from thumbnail module
pub use thumbnail::{
    CanvasColor, Layout, LayoutError, Rect, ResizeMode, Size, Thumbnail, canvas_size, sample_rect,
};
