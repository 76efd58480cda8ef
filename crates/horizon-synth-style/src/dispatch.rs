//! Runtime painter dispatch.
//!
//! Widget delegates never hold concrete painters. They paint through the
//! [`DelegatingPainter`], which looks up the best registered painter in the
//! context's style for every call:
//!
//! 1. the matching state block: exact method and direction, then the method
//!    with any direction, then any method;
//! 2. the same three tiers in the style-level registry;
//! 3. the null painter, which draws nothing.

use horizon_synth_core::logging::targets;
use horizon_synth_render::{PaintResult, Surface};

use crate::context::SynthContext;
use crate::painter::{NullPainter, PaintCall, SynthPainter};

/// The painter every style hands out.
#[derive(Debug, Clone, Copy, Default)]
pub struct DelegatingPainter;

static DELEGATING_PAINTER: DelegatingPainter = DelegatingPainter;

impl DelegatingPainter {
    /// The process-wide instance.
    pub fn shared() -> &'static DelegatingPainter {
        &DELEGATING_PAINTER
    }

    /// The painter that would handle `call` in `context`.
    pub fn resolve<'a>(&self, context: &'a SynthContext, call: &PaintCall) -> &'a dyn SynthPainter {
        match context
            .style()
            .best_painter(context.component_state(), call.method, call.direction)
        {
            Some(handle) => handle.as_painter(),
            None => {
                tracing::trace!(
                    target: targets::DISPATCH,
                    region = %context.region(),
                    method = %call.method,
                    state = %context.component_state(),
                    "no painter registered, using null painter"
                );
                NullPainter::shared()
            }
        }
    }
}

impl SynthPainter for DelegatingPainter {
    fn paint(&self, context: &SynthContext, surface: &mut dyn Surface, call: &PaintCall) -> PaintResult {
        self.resolve(context, call).paint(context, surface, call)
    }
}
