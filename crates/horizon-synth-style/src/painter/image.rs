//! Nine-slice image painter.

use horizon_synth_render::{Image, Insets, NineSlice, PaintResult, SliceMask, SliceMode, Surface};

use super::{PaintCall, SynthPainter};
use crate::context::SynthContext;

/// Paints an image divided into nine patches.
///
/// The corners are drawn at their destination size, the edges and center are
/// stretched (or tiled) to fill the rest of the call bounds. With `center` set
/// the image is drawn once, unscaled and centered, and no slicing happens.
#[derive(Debug, Clone, PartialEq)]
pub struct ImagePainter {
    image: Image,
    source_insets: Insets,
    dest_insets: Option<Insets>,
    paint_center: bool,
    tiles: bool,
    center: bool,
}

impl ImagePainter {
    /// Create a stretching painter whose destination borders equal `source_insets`.
    pub fn new(image: Image, source_insets: Insets) -> Self {
        Self {
            image,
            source_insets,
            dest_insets: None,
            paint_center: true,
            tiles: false,
            center: false,
        }
    }

    /// Use different border sizes in the destination.
    pub fn dest_insets(mut self, insets: Insets) -> Self {
        self.dest_insets = Some(insets);
        self
    }

    /// Whether the center patch is drawn (default `true`).
    pub fn paint_center(mut self, paint_center: bool) -> Self {
        self.paint_center = paint_center;
        self
    }

    /// Tile the edges and center instead of stretching them.
    pub fn tiles(mut self, tiles: bool) -> Self {
        self.tiles = tiles;
        self
    }

    /// Draw the whole image centered instead of slicing it.
    pub fn center(mut self, center: bool) -> Self {
        self.center = center;
        self
    }

    /// The image being painted.
    pub fn image(&self) -> &Image {
        &self.image
    }

    /// Build the draw request for `call`.
    pub fn request(&self, call: &PaintCall) -> NineSlice {
        let mode = if self.center {
            SliceMode::Center
        } else if self.tiles {
            SliceMode::Tile
        } else {
            SliceMode::Stretch
        };
        let mask = if self.paint_center || self.center {
            SliceMask::ALL
        } else {
            SliceMask::BORDER
        };
        NineSlice {
            image: self.image.clone(),
            source_insets: self.source_insets,
            dest_insets: self.dest_insets.unwrap_or(self.source_insets),
            dest: call.bounds,
            mode,
            mask,
        }
    }
}

impl SynthPainter for ImagePainter {
    fn paint(&self, _context: &SynthContext, surface: &mut dyn Surface, call: &PaintCall) -> PaintResult {
        surface.draw_nine_slice(&self.request(call))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::painter::PaintMethod;
    use crate::region::Region;
    use horizon_synth_render::{DrawCommand, PaintError, Rect, RecordingSurface};

    fn call() -> PaintCall {
        PaintCall::new(PaintMethod::ButtonBackground, Rect::new(0.0, 0.0, 80.0, 24.0))
    }

    #[test]
    fn forwards_nine_slice_request() {
        let painter = ImagePainter::new(Image::new("button.png", 16, 16), Insets::uniform(4.0))
            .dest_insets(Insets::uniform(2.0))
            .paint_center(false)
            .tiles(true);
        let mut surface = RecordingSurface::new();

        painter
            .paint(&SynthContext::detached(Region::Button), &mut surface, &call())
            .unwrap();

        let DrawCommand::NineSlice(request) = &surface.commands()[0] else {
            panic!("expected a nine-slice command");
        };
        assert_eq!(request.dest, call().bounds);
        assert_eq!(request.dest_insets, Insets::uniform(2.0));
        assert_eq!(request.mode, SliceMode::Tile);
        assert_eq!(request.mask, SliceMask::BORDER);
    }

    #[test]
    fn center_mode_ignores_paint_center() {
        let painter = ImagePainter::new(Image::new("grip.png", 8, 8), Insets::ZERO)
            .center(true)
            .paint_center(false);
        let request = painter.request(&call());
        assert_eq!(request.mode, SliceMode::Center);
        assert_eq!(request.mask, SliceMask::ALL);
    }

    #[test]
    fn surface_errors_propagate() {
        let painter = ImagePainter::new(Image::new("tiny.png", 2, 2), Insets::uniform(4.0));
        let result = painter.paint(
            &SynthContext::detached(Region::Button),
            &mut RecordingSurface::new(),
            &call(),
        );
        assert!(matches!(result, Err(PaintError::InvalidSlice { .. })));
    }
}
