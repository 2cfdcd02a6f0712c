//! Instruction types: parsed representation of a thumbnail query string.

use alloc::collections::BTreeMap;
use alloc::string::String;

use crate::{CanvasColor, ResizeMode};

/// Parsed thumbnail instructions.
///
/// Produced by [`crate::riapi::parse()`], consumed by
/// [`to_thumbnail()`](Self::to_thumbnail). Every field is optional; absent
/// fields take the service defaults during conversion.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct Instructions {
    /// Target frame width in pixels (`w`, `width`).
    pub w: Option<u32>,
    /// Target frame height in pixels (`h`, `height`).
    pub h: Option<u32>,
    /// Resize policy (`mode`).
    pub mode: Option<ResizeMode>,
    /// Canvas background (`bgcolor`).
    pub bgcolor: Option<CanvasColor>,
    /// Non-layout parameters preserved for downstream consumers.
    pub extras: BTreeMap<String, String>,
}

impl Default for Instructions {
    fn default() -> Self {
        Self::new()
    }
}

impl Instructions {
    /// Create empty instructions.
    pub fn new() -> Self {
        Self {
            w: None,
            h: None,
            mode: None,
            bgcolor: None,
            extras: BTreeMap::new(),
        }
    }

    /// Access non-layout parameters preserved during parsing.
    pub fn extras(&self) -> &BTreeMap<String, String> {
        &self.extras
    }
}
