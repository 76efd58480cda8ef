//! Painters and painter registries.
//!
//! A painter performs the drawing for one or more [`PaintMethod`]s. Painters are
//! attached to styles (and to the per-state blocks inside them) through a
//! [`PainterRegistry`], which keeps at most one entry per (method, direction)
//! slot and fans duplicate registrations out through an [`AggregatePainter`].

mod aggregate;
mod image;
mod info;
mod method;
mod null;

use std::fmt;
use std::sync::Arc;

use horizon_synth_render::{PaintResult, Surface};

use crate::context::SynthContext;

pub use aggregate::AggregatePainter;
pub use image::ImagePainter;
pub use info::{PainterHandle, PainterInfo, PainterRegistry};
pub use method::{Direction, DirectionArg, PaintCall, PaintMethod, SynthPainterExt};
pub use null::NullPainter;

/// Something that can paint part of a component.
///
/// There is a single entry point; the operation being painted, the bounds and
/// any direction argument arrive in the [`PaintCall`]. Use [`SynthPainterExt`]
/// for one typed method per operation.
///
/// Painters are shared between every component bound to the same style, so they
/// must be `Send + Sync` and must not rely on interior state for correctness.
pub trait SynthPainter: Send + Sync + fmt::Debug {
    /// Paint `call` onto `surface`.
    fn paint(&self, context: &SynthContext, surface: &mut dyn Surface, call: &PaintCall) -> PaintResult;
}

type PaintFn = dyn Fn(&SynthContext, &mut dyn Surface, &PaintCall) -> PaintResult + Send + Sync;

/// A painter backed by a closure.
///
/// # Example
///
/// ```
/// use horizon_synth_render::Color;
/// use horizon_synth_style::painter::FnPainter;
///
/// let fill = FnPainter::new("fill", |_ctx, surface, call| {
///     surface.fill_rect(call.bounds, Color::GRAY);
///     Ok(())
/// });
/// assert_eq!(fill.label(), "fill");
/// ```
#[derive(Clone)]
pub struct FnPainter {
    label: Arc<str>,
    func: Arc<PaintFn>,
}

impl FnPainter {
    /// Wrap a closure. The label only shows up in debug output.
    pub fn new<F>(label: impl Into<Arc<str>>, func: F) -> Self
    where
        F: Fn(&SynthContext, &mut dyn Surface, &PaintCall) -> PaintResult + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            func: Arc::new(func),
        }
    }

    /// The debug label.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Debug for FnPainter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FnPainter").field(&self.label).finish()
    }
}

impl SynthPainter for FnPainter {
    fn paint(&self, context: &SynthContext, surface: &mut dyn Surface, call: &PaintCall) -> PaintResult {
        (self.func)(context, surface, call)
    }
}

/// Wrap a closure as a shareable painter handle.
pub fn painter_fn<F>(label: impl Into<Arc<str>>, func: F) -> PainterHandle
where
    F: Fn(&SynthContext, &mut dyn Surface, &PaintCall) -> PaintResult + Send + Sync + 'static,
{
    PainterHandle::new(FnPainter::new(label, func))
}

static_assertions::assert_impl_all!(FnPainter: Send, Sync);
static_assertions::assert_obj_safe!(SynthPainter);
