//! Painter slots and the per-scope painter registry.
//!
//! A slot is a (method, direction) pair where either half may be a wildcard.
//! Registering a second painter for an occupied slot never replaces the first;
//! both end up in an [`AggregatePainter`] that paints them in registration
//! order.

use std::sync::Arc;

use horizon_synth_render::{PaintResult, Surface};

use super::{AggregatePainter, Direction, PaintCall, PaintMethod, SynthPainter};
use crate::context::SynthContext;

/// A shared reference to either one painter or an aggregate of several.
///
/// Extending a handle always produces a new, flattened aggregate. Painters that
/// are already shared with other styles are never mutated.
#[derive(Debug, Clone)]
pub enum PainterHandle {
    Single(Arc<dyn SynthPainter>),
    Aggregate(Arc<AggregatePainter>),
}

impl PainterHandle {
    /// Wrap a painter.
    pub fn new(painter: impl SynthPainter + 'static) -> Self {
        Self::Single(Arc::new(painter))
    }

    /// The painter to invoke.
    pub fn as_painter(&self) -> &dyn SynthPainter {
        match self {
            Self::Single(painter) => painter.as_ref(),
            Self::Aggregate(aggregate) => aggregate.as_ref(),
        }
    }

    /// The individual painters, in invocation order.
    pub fn painters(&self) -> &[Arc<dyn SynthPainter>] {
        match self {
            Self::Single(painter) => std::slice::from_ref(painter),
            Self::Aggregate(aggregate) => aggregate.painters(),
        }
    }

    /// Number of individual painters behind this handle.
    pub fn len(&self) -> usize {
        self.painters().len()
    }

    /// Check if the handle paints nothing (an empty aggregate).
    pub fn is_empty(&self) -> bool {
        self.painters().is_empty()
    }

    /// A handle that paints `self` and then `other`.
    pub fn extend(&self, other: &PainterHandle) -> PainterHandle {
        let mut painters = Vec::with_capacity(self.len() + other.len());
        painters.extend_from_slice(self.painters());
        painters.extend_from_slice(other.painters());
        PainterHandle::Aggregate(Arc::new(AggregatePainter::new(painters)))
    }

    /// Paint through this handle.
    pub fn paint(&self, context: &SynthContext, surface: &mut dyn Surface, call: &PaintCall) -> PaintResult {
        self.as_painter().paint(context, surface, call)
    }
}

impl<P: SynthPainter + 'static> From<Arc<P>> for PainterHandle {
    fn from(painter: Arc<P>) -> Self {
        Self::Single(painter)
    }
}

impl From<AggregatePainter> for PainterHandle {
    fn from(aggregate: AggregatePainter) -> Self {
        Self::Aggregate(Arc::new(aggregate))
    }
}

/// One registry entry: a painter bound to a (method, direction) slot.
///
/// `None` in either position is a wildcard. Two entries occupy the same slot
/// when both halves are equal; the painter plays no part in that comparison.
#[derive(Debug, Clone)]
pub struct PainterInfo {
    method: Option<PaintMethod>,
    direction: Option<Direction>,
    painter: PainterHandle,
}

impl PainterInfo {
    /// Create an entry.
    pub fn new(method: Option<PaintMethod>, direction: Option<Direction>, painter: PainterHandle) -> Self {
        Self {
            method,
            direction,
            painter,
        }
    }

    /// The method, or `None` for every method.
    pub fn method(&self) -> Option<PaintMethod> {
        self.method
    }

    /// The direction, or `None` for any direction.
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// The painter bound to this slot.
    pub fn painter(&self) -> &PainterHandle {
        &self.painter
    }

    /// Whether `other` occupies the same slot.
    pub fn same_slot(&self, other: &PainterInfo) -> bool {
        self.method == other.method && self.direction == other.direction
    }

    fn absorb(&mut self, painter: &PainterHandle) {
        self.painter = self.painter.extend(painter);
    }
}

/// The ordered painter entries of one scope (a style or one of its state blocks).
#[derive(Debug, Clone, Default)]
pub struct PainterRegistry {
    entries: Vec<PainterInfo>,
}

impl PainterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries in registration order.
    pub fn entries(&self) -> &[PainterInfo] {
        &self.entries
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no painter is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Register `painter` for a slot, aggregating with any painter already there.
    pub fn add_or_merge(&mut self, method: Option<PaintMethod>, direction: Option<Direction>, painter: PainterHandle) {
        let info = PainterInfo::new(method, direction, painter);
        match self.entries.iter_mut().find(|existing| existing.same_slot(&info)) {
            Some(existing) => existing.absorb(&info.painter),
            None => self.entries.push(info),
        }
    }

    /// Merge `new` on top of `old`.
    ///
    /// Entries of `old` keep their positions. Each entry of `new` either extends
    /// the first not-yet-extended `old` entry for the same slot or is appended,
    /// preserving the relative order of appended entries. Neither input is
    /// modified.
    pub fn merge(old: &PainterRegistry, new: &PainterRegistry) -> PainterRegistry {
        if old.is_empty() {
            return new.clone();
        }
        if new.is_empty() {
            return old.clone();
        }

        let mut entries = old.entries.clone();
        let mut consumed = vec![false; entries.len()];
        for info in &new.entries {
            let slot = (0..consumed.len()).find(|&i| !consumed[i] && entries[i].same_slot(info));
            match slot {
                Some(i) => {
                    consumed[i] = true;
                    entries[i].absorb(&info.painter);
                }
                None => entries.push(info.clone()),
            }
        }
        PainterRegistry { entries }
    }

    /// Find the best painter for a call.
    ///
    /// Later entries are preferred. An entry for the exact method and direction
    /// wins outright; otherwise an entry for the method with a wildcard
    /// direction; otherwise a wildcard-method entry.
    pub fn best(&self, method: PaintMethod, direction: Option<Direction>) -> Option<&PainterHandle> {
        let mut any_direction = None;
        let mut any_method = None;
        for info in self.entries.iter().rev() {
            match info.method {
                Some(m) if m == method => {
                    if info.direction == direction {
                        return Some(&info.painter);
                    }
                    if info.direction.is_none() && any_direction.is_none() {
                        any_direction = Some(&info.painter);
                    }
                }
                None if any_method.is_none() => any_method = Some(&info.painter),
                _ => {}
            }
        }
        any_direction.or(any_method)
    }
}

static_assertions::assert_impl_all!(PainterHandle: Send, Sync);
static_assertions::assert_impl_all!(PainterRegistry: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::painter::NullPainter;

    fn handle() -> PainterHandle {
        PainterHandle::new(NullPainter)
    }

    fn same(a: &PainterHandle, b: &PainterHandle) -> bool {
        a.painters().len() == b.painters().len()
            && a.painters().iter().zip(b.painters()).all(|(x, y)| Arc::ptr_eq(x, y))
    }

    #[test]
    fn add_or_merge_aggregates_duplicate_slots() {
        let (p1, p2) = (handle(), handle());
        let mut registry = PainterRegistry::new();
        registry.add_or_merge(Some(PaintMethod::ButtonBackground), None, p1.clone());
        registry.add_or_merge(Some(PaintMethod::ButtonBorder), None, handle());
        registry.add_or_merge(Some(PaintMethod::ButtonBackground), None, p2.clone());

        assert_eq!(registry.len(), 2);
        let merged = registry.entries()[0].painter();
        assert!(matches!(merged, PainterHandle::Aggregate(_)));
        assert!(same(merged, &p1.extend(&p2)));
    }

    #[test]
    fn extend_flattens_and_leaves_inputs_alone() {
        let a = handle().extend(&handle());
        let b = a.extend(&handle());
        assert_eq!(a.len(), 2);
        assert_eq!(b.len(), 3);
        assert!(Arc::ptr_eq(&a.painters()[0], &b.painters()[0]));
    }

    #[test]
    fn merge_with_empty_is_identity() {
        let mut a = PainterRegistry::new();
        a.add_or_merge(Some(PaintMethod::LabelBackground), None, handle());

        let left = PainterRegistry::merge(&a, &PainterRegistry::new());
        let right = PainterRegistry::merge(&PainterRegistry::new(), &a);
        assert_eq!(left.len(), 1);
        assert_eq!(right.len(), 1);
        assert!(same(left.entries()[0].painter(), a.entries()[0].painter()));
        assert!(same(right.entries()[0].painter(), a.entries()[0].painter()));
    }

    #[test]
    fn merge_keeps_old_positions_and_appends_new_slots() {
        let mut old = PainterRegistry::new();
        old.add_or_merge(Some(PaintMethod::ButtonBackground), None, handle());
        old.add_or_merge(Some(PaintMethod::ButtonBorder), None, handle());

        let mut new = PainterRegistry::new();
        new.add_or_merge(Some(PaintMethod::LabelBackground), None, handle());
        new.add_or_merge(Some(PaintMethod::ButtonBorder), None, handle());
        new.add_or_merge(None, None, handle());

        let merged = PainterRegistry::merge(&old, &new);
        let slots: Vec<_> = merged.entries().iter().map(|e| e.method()).collect();
        assert_eq!(
            slots,
            vec![
                Some(PaintMethod::ButtonBackground),
                Some(PaintMethod::ButtonBorder),
                Some(PaintMethod::LabelBackground),
                None,
            ]
        );
        assert_eq!(merged.entries()[1].painter().len(), 2);
        assert_eq!(old.entries()[1].painter().len(), 1);
    }

    #[test]
    fn best_prefers_exact_then_wildcard_direction_then_wildcard_method() {
        let (any_method, any_dir, north) = (handle(), handle(), handle());
        let mut registry = PainterRegistry::new();
        registry.add_or_merge(None, None, any_method.clone());
        registry.add_or_merge(Some(PaintMethod::ArrowButtonForeground), None, any_dir.clone());
        registry.add_or_merge(
            Some(PaintMethod::ArrowButtonForeground),
            Some(Direction::North),
            north.clone(),
        );

        let best = |method, direction| registry.best(method, direction).map(|h| h.painters()[0].clone());
        assert!(Arc::ptr_eq(
            &best(PaintMethod::ArrowButtonForeground, Some(Direction::North)).unwrap(),
            &north.painters()[0]
        ));
        assert!(Arc::ptr_eq(
            &best(PaintMethod::ArrowButtonForeground, Some(Direction::South)).unwrap(),
            &any_dir.painters()[0]
        ));
        assert!(Arc::ptr_eq(
            &best(PaintMethod::ButtonBackground, None).unwrap(),
            &any_method.painters()[0]
        ));
    }

    #[test]
    fn best_scans_later_entries_first() {
        let (first, second) = (handle(), handle());
        let registry = PainterRegistry {
            entries: vec![
                PainterInfo::new(None, None, first),
                PainterInfo::new(None, Some(Direction::East), second.clone()),
            ],
        };
        let found = registry.best(PaintMethod::PanelBackground, None).unwrap();
        assert!(same(found, &second));
    }

    #[test]
    fn best_on_empty_registry_is_none() {
        assert!(PainterRegistry::new().best(PaintMethod::TreeBackground, None).is_none());
    }
}
