//! Convert parsed [`Instructions`] into a [`Thumbnail`] request.

use crate::Thumbnail;

use super::instructions::Instructions;

/// Target edge applied when a dimension is absent from the query.
const DEFAULT_EDGE: u32 = 800;

impl Instructions {
    /// Build a [`Thumbnail`] request from these instructions.
    ///
    /// Absent fields take the service defaults: an 800x800 target frame,
    /// loose mode, opaque white background. Each dimension defaults
    /// independently, so `w=400` alone yields a 400x800 frame.
    pub fn to_thumbnail(&self) -> Thumbnail {
        let mut thumb = Thumbnail::new(
            self.w.unwrap_or(DEFAULT_EDGE),
            self.h.unwrap_or(DEFAULT_EDGE),
        );
        if let Some(mode) = self.mode {
            thumb = thumb.mode(mode);
        }
        if let Some(color) = self.bgcolor {
            thumb = thumb.background(color);
        }
        thumb
    }
}
