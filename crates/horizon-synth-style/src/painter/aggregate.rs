//! Fan-out of one paint call to several painters.

use std::sync::Arc;

use horizon_synth_render::{PaintResult, Surface};

use super::{PaintCall, SynthPainter};
use crate::context::SynthContext;

/// Invokes each contained painter, in insertion order, for every paint call.
///
/// There is no de-duplication: a painter registered twice paints twice. The
/// first painter error stops the fan-out and is returned to the caller.
#[derive(Debug, Clone, Default)]
pub struct AggregatePainter {
    painters: Vec<Arc<dyn SynthPainter>>,
}

impl AggregatePainter {
    /// Create an aggregate over `painters`.
    pub fn new(painters: Vec<Arc<dyn SynthPainter>>) -> Self {
        Self { painters }
    }

    /// The contained painters, in invocation order.
    pub fn painters(&self) -> &[Arc<dyn SynthPainter>] {
        &self.painters
    }

    /// Number of contained painters.
    pub fn len(&self) -> usize {
        self.painters.len()
    }

    /// Check if the aggregate contains no painters.
    pub fn is_empty(&self) -> bool {
        self.painters.is_empty()
    }
}

impl SynthPainter for AggregatePainter {
    fn paint(&self, context: &SynthContext, surface: &mut dyn Surface, call: &PaintCall) -> PaintResult {
        for painter in &self.painters {
            painter.paint(context, surface, call)?;
        }
        Ok(())
    }
}
