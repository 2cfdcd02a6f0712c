//! Thumbnail geometry for resize operations.
//!
//! Computes output canvas dimensions and the centered source sample
//! rectangle from a resize mode, source dimensions, and target frame
//! dimensions. Pure geometry. No pixel operations, no allocations,
//! `no_std` compatible.
//!
//! The caller owns the pixel work: allocate the canvas, fill it with the
//! background color, then draw the sample region of the source scaled onto
//! the whole canvas.
//!
//! # Example
//!
//! ```
//! use zenthumb::{Thumbnail, Size};
//!
//! // Loose fit: the canvas shrinks to the source aspect ratio.
//! let layout = Thumbnail::new(800, 800).compute(1600, 1200).unwrap();
//!
//! assert_eq!(layout.canvas, Size::new(800, 600));
//! assert!(!layout.needs_crop()); // whole source maps onto the canvas
//! ```

#[cfg(not(feature = "std"))]
use num_traits::Float;

/// How to fit a source image into the thumbnail frame.
#[non_exhaustive]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ResizeMode {
    /// Fill the frame by cropping away the portions of the source that
    /// don't fit. Canvas is exactly the target size.
    Crop,

    /// Draw the entire image and pad the leftover frame with the
    /// background color. Canvas is exactly the target size.
    Letterbox,

    /// Shrink the frame itself to the source aspect ratio.
    /// Canvas fits within the target and touches it on at least one axis.
    Loose,
}

/// Canvas background color for letterbox padding.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum CanvasColor {
    /// Transparent black `[0, 0, 0, 0]`.
    #[default]
    Transparent,
    /// sRGB color with alpha (8-bit per channel).
    Srgb { r: u8, g: u8, b: u8, a: u8 },
}

impl CanvasColor {
    /// White, fully opaque.
    pub const fn white() -> Self {
        Self::Srgb {
            r: 255,
            g: 255,
            b: 255,
            a: 255,
        }
    }

    /// Black, fully opaque.
    pub const fn black() -> Self {
        Self::Srgb {
            r: 0,
            g: 0,
            b: 0,
            a: 255,
        }
    }
}

/// Width × height dimensions in pixels.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Size {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Axis-aligned rectangle in source pixel coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether this rect covers the full source (no actual crop).
    pub fn is_full(&self, source: Size) -> bool {
        self.x == 0 && self.y == 0 && self.width == source.width && self.height == source.height
    }
}

/// Layout computation error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// Source image has zero width or height.
    ZeroSourceDimension,
    /// Target (or computed canvas) width or height is zero.
    ZeroTargetDimension,
}

impl core::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ZeroSourceDimension => f.write_str("source dimensions must be nonzero"),
            Self::ZeroTargetDimension => f.write_str("target dimensions must be nonzero"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LayoutError {}

/// Compute the output canvas dimensions for a source image fitted into a
/// target frame under the given mode.
///
/// [`Crop`](ResizeMode::Crop) and [`Letterbox`](ResizeMode::Letterbox)
/// always return the target. They diverge only in how the caller fills and
/// samples, so the canvas geometry is shared. [`Loose`](ResizeMode::Loose)
/// shrinks the frame to the source aspect ratio; the free axis rounds
/// down, which for extreme ratios can reach zero (a 10000×1 source loosely
/// fit into 100×100 yields 100×0). The degenerate canvas is returned as
/// computed and rejected by [`sample_rect`].
///
/// Fails fast on any zero input dimension.
pub fn canvas_size(source: Size, target: Size, mode: ResizeMode) -> Result<Size, LayoutError> {
    if source.width == 0 || source.height == 0 {
        return Err(LayoutError::ZeroSourceDimension);
    }
    if target.width == 0 || target.height == 0 {
        return Err(LayoutError::ZeroTargetDimension);
    }
    Ok(match mode {
        ResizeMode::Crop | ResizeMode::Letterbox => target,
        ResizeMode::Loose => loose_fit(source, target),
    })
}

/// Compute the centered region of the source to sample so that scaling it
/// onto the canvas preserves the subject.
///
/// The sample rectangle has the canvas aspect ratio (within rounding) and
/// covers the source fully on at least one axis. Independent of mode: for a
/// canvas that already matches the source ratio the rectangle is the full
/// source, for a crop/zoom canvas it trims the overflowing axis
/// symmetrically. A loose canvas whose free axis rounded down is a hair
/// wider or taller than the source, costing the sample a single row or
/// column.
///
/// Guaranteed for positive inputs: `x + width <= source.width` and
/// `y + height <= source.height`.
///
/// Fails fast on any zero input dimension.
pub fn sample_rect(source: Size, canvas: Size) -> Result<Rect, LayoutError> {
    if source.width == 0 || source.height == 0 {
        return Err(LayoutError::ZeroSourceDimension);
    }
    if canvas.width == 0 || canvas.height == 0 {
        return Err(LayoutError::ZeroTargetDimension);
    }
    Ok(center_sample(source, canvas))
}

/// Thumbnail frame specification.
///
/// Describes the target frame, the fit policy, and the background color to
/// pad with. [`compute`](Self::compute) turns it into a [`Layout`] for a
/// concrete source image.
///
/// # Example
///
/// ```
/// use zenthumb::{Thumbnail, ResizeMode, Size, Rect};
///
/// let layout = Thumbnail::new(800, 800)
///     .mode(ResizeMode::Crop)
///     .compute(1600, 1200)
///     .unwrap();
///
/// assert_eq!(layout.canvas, Size::new(800, 800));
/// assert_eq!(layout.sample, Rect::new(200, 0, 1200, 1200));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Thumbnail {
    pub width: u32,
    pub height: u32,
    pub mode: ResizeMode,
    pub background: CanvasColor,
}

impl Thumbnail {
    /// Create a thumbnail frame with the given target dimensions.
    ///
    /// Mode defaults to [`ResizeMode::Loose`], background to opaque white.
    pub const fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            mode: ResizeMode::Loose,
            background: CanvasColor::white(),
        }
    }

    /// Set the resize mode.
    pub const fn mode(mut self, mode: ResizeMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the background color for letterbox padding.
    pub const fn background(mut self, color: CanvasColor) -> Self {
        self.background = color;
        self
    }

    /// Compute the layout for a source image of the given dimensions.
    ///
    /// Runs [`canvas_size`] then [`sample_rect`]. A loose canvas truncated
    /// to zero on one axis (extreme aspect ratios) surfaces as
    /// [`LayoutError::ZeroTargetDimension`] instead of a degenerate layout.
    pub fn compute(&self, source_w: u32, source_h: u32) -> Result<Layout, LayoutError> {
        let source = Size::new(source_w, source_h);
        let target = Size::new(self.width, self.height);
        let canvas = canvas_size(source, target, self.mode)?;
        let sample = sample_rect(source, canvas)?;
        Ok(Layout {
            source,
            canvas,
            sample,
            background: self.background,
        })
    }
}

/// Computed geometry for one thumbnail operation.
///
/// Contains everything the pixel stage needs: allocate `canvas`, fill it
/// with `background`, then draw the `sample` region of the source scaled
/// onto the entire canvas.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Layout {
    /// Original source dimensions.
    pub source: Size,
    /// Output canvas dimensions.
    pub canvas: Size,
    /// Region of the source to draw, centered on the cropped axis.
    pub sample: Rect,
    /// Canvas background color.
    pub background: CanvasColor,
}

impl Layout {
    /// Whether part of the source is cropped away (sample is a proper
    /// sub-region).
    pub fn needs_crop(&self) -> bool {
        !self.sample.is_full(self.source)
    }

    /// Whether resampling is needed (sample dimensions differ from canvas
    /// dimensions).
    pub fn needs_scaling(&self) -> bool {
        self.sample.width != self.canvas.width || self.sample.height != self.canvas.height
    }

    /// Whether the operation is a pixel-for-pixel copy of the source.
    pub fn is_identity(&self) -> bool {
        self.canvas == self.source && !self.needs_crop()
    }
}

// ============================================================================
// Internal geometry
// ============================================================================

/// Whether `a` has a strictly larger width:height ratio than `b`.
/// Cross-multiplication keeps the comparison exact; ties report false.
fn wider_than(a: Size, b: Size) -> bool {
    a.width as u64 * b.height as u64 > b.width as u64 * a.height as u64
}

/// Shrink the target frame to the source aspect ratio.
/// The constrained axis keeps the target dimension; the free axis is the
/// exact scaled value rounded down. Equal ratios scale by height.
///
/// Widening to u64 keeps the division exact: a chained float computation
/// double-rounds and can land one pixel off. The quotient is bounded by
/// the target's free axis on the branch taken, so the cast back is
/// lossless.
fn loose_fit(source: Size, target: Size) -> Size {
    if wider_than(source, target) {
        let h = source.height as u64 * target.width as u64 / source.width as u64;
        Size::new(target.width, h as u32)
    } else {
        let w = source.width as u64 * target.height as u64 / source.height as u64;
        Size::new(w as u32, target.height)
    }
}

/// Centered source region with the canvas aspect ratio.
/// Sizes round down on the exact ratio, as in [`loose_fit`]; offsets round
/// to nearest. The asymmetry is part of the geometry contract and must
/// stay.
fn center_sample(source: Size, canvas: Size) -> Rect {
    let (width, height) = if wider_than(source, canvas) {
        let w = canvas.width as u64 * source.height as u64 / canvas.height as u64;
        (w as u32, source.height)
    } else {
        let h = canvas.height as u64 * source.width as u64 / canvas.width as u64;
        (source.width, h as u32)
    };
    // width <= source.width and height <= source.height hold for all
    // positive inputs; the subtractions cannot underflow.
    let x = ((source.width - width) as f64 / 2.0).round() as u32;
    let y = ((source.height - height) as f64 / 2.0).round() as u32;
    Rect {
        x,
        y,
        width,
        height,
    }
}
