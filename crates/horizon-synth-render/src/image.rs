//! Image handles and the nine-slice drawing contract.
//!
//! Image decoding and pixel stretching happen behind the [`Surface`](crate::Surface)
//! implementation. This module only describes *what* should be drawn: an opaque
//! [`Image`] handle and a [`NineSlice`] request.

use std::fmt;
use std::sync::Arc;

use crate::error::{PaintError, PaintResult};
use crate::types::{Insets, Rect, Size};

struct ImageInner {
    key: String,
    width: u32,
    height: u32,
}

/// A shared handle to a loaded image.
///
/// The handle carries the resource key it was loaded from and its pixel
/// dimensions. Cloning is cheap.
#[derive(Clone)]
pub struct Image {
    inner: Arc<ImageInner>,
}

impl Image {
    /// Create an image handle.
    pub fn new(key: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            inner: Arc::new(ImageInner {
                key: key.into(),
                width,
                height,
            }),
        }
    }

    /// The resource key (path or URL) the image was loaded from.
    #[inline]
    pub fn key(&self) -> &str {
        &self.inner.key
    }

    /// Get the width of the image in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the height of the image in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the size of the image.
    #[inline]
    pub fn size(&self) -> Size {
        Size::new(self.inner.width as f32, self.inner.height as f32)
    }
}

impl PartialEq for Image {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
            || (self.inner.key == other.inner.key
                && self.inner.width == other.inner.width
                && self.inner.height == other.inner.height)
    }
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("key", &self.inner.key)
            .field("width", &self.inner.width)
            .field("height", &self.inner.height)
            .finish()
    }
}

/// How the edge and center patches fill their destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SliceMode {
    /// Stretch each patch to its destination.
    #[default]
    Stretch,
    /// Repeat each patch at its original size.
    Tile,
    /// Draw the whole image once, centered, without slicing.
    Center,
}

bitflags::bitflags! {
    /// Which of the nine patches to draw.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct SliceMask: u16 {
        const TOP_LEFT     = 1 << 0;
        const TOP          = 1 << 1;
        const TOP_RIGHT    = 1 << 2;
        const LEFT         = 1 << 3;
        const CENTER       = 1 << 4;
        const RIGHT        = 1 << 5;
        const BOTTOM_LEFT  = 1 << 6;
        const BOTTOM       = 1 << 7;
        const BOTTOM_RIGHT = 1 << 8;

        /// Every patch except the center.
        const BORDER = Self::TOP_LEFT.bits()
            | Self::TOP.bits()
            | Self::TOP_RIGHT.bits()
            | Self::LEFT.bits()
            | Self::RIGHT.bits()
            | Self::BOTTOM_LEFT.bits()
            | Self::BOTTOM.bits()
            | Self::BOTTOM_RIGHT.bits();

        /// All nine patches.
        const ALL = Self::BORDER.bits() | Self::CENTER.bits();
    }
}

impl Default for SliceMask {
    fn default() -> Self {
        Self::ALL
    }
}

/// Patch masks in row-major order, matching [`NineSlice::patches`].
const PATCH_ORDER: [SliceMask; 9] = [
    SliceMask::TOP_LEFT,
    SliceMask::TOP,
    SliceMask::TOP_RIGHT,
    SliceMask::LEFT,
    SliceMask::CENTER,
    SliceMask::RIGHT,
    SliceMask::BOTTOM_LEFT,
    SliceMask::BOTTOM,
    SliceMask::BOTTOM_RIGHT,
];

/// A nine-slice draw request.
///
/// The source image is divided by `source_insets` into 9 regions, which are
/// mapped onto `dest` divided by `dest_insets`:
///
/// ```text
/// +-------+---------------+-------+
/// |   1   |       2       |   3   |
/// | (TL)  |     (Top)     |  (TR) |
/// +-------+---------------+-------+
/// |   4   |       5       |   6   |
/// | (L)   |   (Center)    |  (R)  |
/// +-------+---------------+-------+
/// |   7   |       8       |   9   |
/// | (BL)  |   (Bottom)    |  (BR) |
/// +-------+---------------+-------+
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct NineSlice {
    /// The source image.
    pub image: Image,
    /// Slice borders within the source image.
    pub source_insets: Insets,
    /// Border sizes in the destination.
    pub dest_insets: Insets,
    /// Destination rectangle.
    pub dest: Rect,
    /// Stretch, tile or center.
    pub mode: SliceMode,
    /// Patches to draw.
    pub mask: SliceMask,
}

impl NineSlice {
    /// Create a request that stretches all nine patches, with the destination
    /// borders equal to the source borders.
    pub fn new(image: Image, source_insets: Insets, dest: Rect) -> Self {
        Self {
            image,
            source_insets,
            dest_insets: source_insets,
            dest,
            mode: SliceMode::Stretch,
            mask: SliceMask::ALL,
        }
    }

    /// Check that the source insets fit inside the image.
    pub fn validate(&self) -> PaintResult {
        let size = self.image.size();
        let insets = self.source_insets;
        let negative = insets.top < 0.0 || insets.left < 0.0 || insets.bottom < 0.0 || insets.right < 0.0;
        if negative || insets.horizontal() > size.width || insets.vertical() > size.height {
            return Err(PaintError::InvalidSlice {
                insets: insets.to_string(),
                width: self.image.width(),
                height: self.image.height(),
            });
        }
        Ok(())
    }

    /// Minimum destination size that shows every border patch unclipped.
    pub fn min_size(&self) -> Size {
        Size::new(self.dest_insets.horizontal(), self.dest_insets.vertical())
    }

    /// Calculate the source and destination rectangles of the masked patches.
    ///
    /// Returns `(patch, source_rect, dest_rect)` in row-major order. In
    /// [`SliceMode::Center`] a single `CENTER` patch covering the whole image,
    /// centered in `dest`, is returned.
    pub fn patches(&self) -> Vec<(SliceMask, Rect, Rect)> {
        let img = self.image.size();

        if self.mode == SliceMode::Center {
            let src = Rect::new(0.0, 0.0, img.width, img.height);
            let dst = Rect::from_center(self.dest.center(), img);
            return vec![(SliceMask::CENTER, src, dst)];
        }

        let s = self.source_insets;
        let d = self.dest_insets;
        let dest = self.dest;

        let src_center_w = (img.width - s.horizontal()).max(0.0);
        let src_center_h = (img.height - s.vertical()).max(0.0);
        let dst_center_w = (dest.width() - d.horizontal()).max(0.0);
        let dst_center_h = (dest.height() - d.vertical()).max(0.0);

        let src_cols = [(0.0, s.left), (s.left, src_center_w), (s.left + src_center_w, s.right)];
        let src_rows = [(0.0, s.top), (s.top, src_center_h), (s.top + src_center_h, s.bottom)];
        let dst_cols = [
            (dest.left(), d.left),
            (dest.left() + d.left, dst_center_w),
            (dest.left() + d.left + dst_center_w, d.right),
        ];
        let dst_rows = [
            (dest.top(), d.top),
            (dest.top() + d.top, dst_center_h),
            (dest.top() + d.top + dst_center_h, d.bottom),
        ];

        let mut result = Vec::with_capacity(9);
        for (i, patch) in PATCH_ORDER.iter().enumerate() {
            if !self.mask.contains(*patch) {
                continue;
            }
            let (row, col) = (i / 3, i % 3);
            let src = Rect::new(src_cols[col].0, src_rows[row].0, src_cols[col].1, src_rows[row].1);
            let dst = Rect::new(dst_cols[col].0, dst_rows[row].0, dst_cols[col].1, dst_rows[row].1);
            result.push((*patch, src, dst));
        }
        result
    }
}
