use horizon_synth_render::{PaintResult, Surface};

use super::{PaintCall, SynthPainter};
use crate::context::SynthContext;

/// A painter that draws nothing.
///
/// Dispatch falls back to [`NullPainter::shared`] when no registered painter
/// matches a call, so callers never have to handle a missing painter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NullPainter;

static NULL_PAINTER: NullPainter = NullPainter;

impl NullPainter {
    /// The process-wide instance.
    pub fn shared() -> &'static NullPainter {
        &NULL_PAINTER
    }
}

impl SynthPainter for NullPainter {
    #[inline]
    fn paint(&self, _context: &SynthContext, _surface: &mut dyn Surface, _call: &PaintCall) -> PaintResult {
        Ok(())
    }
}
