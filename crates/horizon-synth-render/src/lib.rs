//! Drawing-surface contract for Horizon Synth.
//!
//! Painters in the look-and-feel layer never touch a rasterizer directly. They
//! draw through the [`Surface`] trait, which exposes a handful of primitives and
//! the nine-slice contract:
//!
//! ```text
//! draw_nine_slice(image, source_insets, dest_insets, dest_rect, mode, mask)
//! ```
//!
//! How the pixels are actually stretched or tiled is up to the surface
//! implementation. [`RecordingSurface`] records every call and is what the test
//! suites paint into.
//!
//! # Example
//!
//! ```
//! use horizon_synth_render::{Color, DrawCommand, Rect, RecordingSurface, Surface};
//!
//! let mut surface = RecordingSurface::new();
//! surface.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::GRAY);
//!
//! assert_eq!(surface.len(), 1);
//! assert!(matches!(surface.commands()[0], DrawCommand::FillRect { .. }));
//! ```

mod error;
mod font;
mod image;
mod surface;
mod types;

pub use error::{PaintError, PaintResult};
pub use font::{Font, FontStyle};
pub use image::{Image, NineSlice, SliceMask, SliceMode};
pub use surface::{DrawCommand, RecordingSurface, Surface};
pub use types::{Color, Insets, Point, Rect, Size};
