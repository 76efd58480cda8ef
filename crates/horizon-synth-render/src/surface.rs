//! The drawing surface painters render into.

use crate::error::PaintResult;
use crate::image::{Image, NineSlice};
use crate::types::{Color, Point, Rect};

/// A 2D drawing surface.
///
/// This is the narrow contract between the look-and-feel painters and whatever
/// rasterizer backs them. Implementations may return [`PaintError`](crate::PaintError)
/// from any drawing call; painters propagate such errors unchanged.
pub trait Surface {
    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Stroke the outline of a rectangle.
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32);

    /// Draw a line segment.
    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32);

    /// Draw an image scaled into `dest`.
    fn draw_image(&mut self, image: &Image, dest: Rect) -> PaintResult;

    /// Draw a nine-slice image.
    fn draw_nine_slice(&mut self, request: &NineSlice) -> PaintResult;
}

/// A recorded drawing command.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// [`Surface::fill_rect`].
    FillRect { rect: Rect, color: Color },
    /// [`Surface::stroke_rect`].
    StrokeRect { rect: Rect, color: Color, width: f32 },
    /// [`Surface::draw_line`].
    Line {
        from: Point,
        to: Point,
        color: Color,
        width: f32,
    },
    /// [`Surface::draw_image`].
    Image { image: Image, dest: Rect },
    /// [`Surface::draw_nine_slice`].
    NineSlice(NineSlice),
}

/// A surface that records every call instead of rasterizing.
///
/// Nine-slice requests are validated before being recorded, so an invalid slice
/// fails here the same way it would on a real surface.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    /// Create an empty recording surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// The commands recorded so far, in call order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the surface empty.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Check if nothing has been drawn.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Discard all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        self.commands.push(DrawCommand::StrokeRect { rect, color, width });
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn draw_image(&mut self, image: &Image, dest: Rect) -> PaintResult {
        self.commands.push(DrawCommand::Image {
            image: image.clone(),
            dest,
        });
        Ok(())
    }

    fn draw_nine_slice(&mut self, request: &NineSlice) -> PaintResult {
        request.validate()?;
        self.commands.push(DrawCommand::NineSlice(request.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PaintError;
    use crate::types::Insets;

    #[test]
    fn records_in_call_order() {
        let mut surface = RecordingSurface::new();
        assert!(surface.is_empty());

        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        surface.fill_rect(rect, Color::WHITE);
        surface.stroke_rect(rect, Color::BLACK, 1.0);
        surface.draw_line(Point::ZERO, Point::new(10.0, 0.0), Color::RED, 2.0);

        assert_eq!(surface.len(), 3);
        assert!(matches!(surface.commands()[0], DrawCommand::FillRect { .. }));
        assert!(matches!(surface.commands()[1], DrawCommand::StrokeRect { .. }));
        assert!(matches!(surface.commands()[2], DrawCommand::Line { .. }));

        let taken = surface.take();
        assert_eq!(taken.len(), 3);
        assert!(surface.is_empty());
    }

    #[test]
    fn invalid_nine_slice_is_not_recorded() {
        let mut surface = RecordingSurface::new();
        let request = NineSlice::new(
            Image::new("tiny.png", 4, 4),
            Insets::uniform(3.0),
            Rect::new(0.0, 0.0, 20.0, 20.0),
        );

        let result = surface.draw_nine_slice(&request);
        assert!(matches!(result, Err(PaintError::InvalidSlice { .. })));
        assert!(surface.is_empty());
    }
}
