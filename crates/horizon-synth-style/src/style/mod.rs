//! Styles: immutable attribute bags with state overrides and painters.
//!
//! A [`Style`] is built once through a [`StyleBuilder`] and then shared by
//! reference between every component bound to it. Lookups take the
//! component's current [`ComponentState`]; the single best-matching
//! [`StateInfo`] is consulted first, then the style's own values.

mod attributes;
mod builder;
mod state_info;

use std::sync::{Arc, LazyLock};

use horizon_synth_render::{Color, Font, Insets};

use crate::color_type::ColorType;
use crate::context::SynthContext;
use crate::dispatch::DelegatingPainter;
use crate::painter::{Direction, PaintMethod, PainterHandle, PainterRegistry};
use crate::property::PropertyValue;
use crate::state::ComponentState;

pub use attributes::StyleAttributes;
pub use builder::StyleBuilder;
pub use state_info::{StateBuilder, StateInfo};

static EMPTY_STYLE: LazyLock<Arc<Style>> = LazyLock::new(|| Arc::new(Style::default()));

/// A resolved bag of visual attributes and painter bindings.
#[derive(Debug, Clone, Default)]
pub struct Style {
    pub(crate) attributes: StyleAttributes,
    pub(crate) states: Vec<StateInfo>,
    pub(crate) painters: PainterRegistry,
}

impl Style {
    /// The shared style used when nothing else applies.
    pub fn empty() -> Arc<Style> {
        EMPTY_STYLE.clone()
    }

    /// Style-level attributes.
    pub fn attributes(&self) -> &StyleAttributes {
        &self.attributes
    }

    /// State blocks, in registration order.
    pub fn states(&self) -> &[StateInfo] {
        &self.states
    }

    /// Style-level painters.
    pub fn painters(&self) -> &PainterRegistry {
        &self.painters
    }

    /// The state block that applies to `state`.
    ///
    /// A block applies when its mask is empty or contained in `state`. The
    /// block with the most flags wins; among equally specific blocks the one
    /// registered last wins.
    pub fn state_info(&self, state: ComponentState) -> Option<&StateInfo> {
        self.states
            .iter()
            .enumerate()
            .filter(|(_, info)| info.matches(state))
            .max_by_key(|(index, info)| (info.state().specificity(), *index))
            .map(|(_, info)| info)
    }

    fn lookup<'a, T>(&'a self, state: ComponentState, get: impl Fn(&'a StyleAttributes) -> Option<T>) -> Option<T> {
        self.state_info(state)
            .and_then(|info| get(info.attributes()))
            .or_else(|| get(&self.attributes))
    }

    /// Color for a slot in `state`.
    pub fn color(&self, state: ComponentState, color_type: ColorType) -> Option<Color> {
        self.lookup(state, |attrs| attrs.color(color_type))
    }

    /// Font in `state`. `None` means the context default applies.
    pub fn font(&self, state: ComponentState) -> Option<&Font> {
        self.lookup(state, |attrs| attrs.font())
    }

    /// Insets in `state`, zero when unset.
    pub fn insets(&self, state: ComponentState) -> Insets {
        self.lookup(state, |attrs| attrs.insets()).unwrap_or(Insets::ZERO)
    }

    /// Whether the region paints every pixel of its bounds. Defaults to `true`.
    pub fn is_opaque(&self, state: ComponentState) -> bool {
        self.lookup(state, |attrs| attrs.opaque()).unwrap_or(true)
    }

    /// A named property in `state`.
    pub fn property(&self, state: ComponentState, key: &str) -> Option<&PropertyValue> {
        self.lookup(state, |attrs| attrs.property(key))
    }

    /// The painter delegates paint through. Never absent.
    pub fn painter(&self, _context: &SynthContext) -> &'static DelegatingPainter {
        DelegatingPainter::shared()
    }

    /// The painter registered for a call in `state`, if any.
    ///
    /// The matching state block is searched before the style-level registry.
    pub fn best_painter(
        &self,
        state: ComponentState,
        method: PaintMethod,
        direction: Option<Direction>,
    ) -> Option<&PainterHandle> {
        self.state_info(state)
            .and_then(|info| info.painters().best(method, direction))
            .or_else(|| self.painters.best(method, direction))
    }

    /// Merge `self` on top of `target`, producing a new style.
    ///
    /// Scalars set here replace the target's, maps are unioned, state blocks
    /// with the same mask are merged and painters for the same slot are
    /// aggregated. Neither input changes.
    pub fn merge_into(&self, target: &Style) -> Style {
        let mut states = target.states.clone();
        for info in &self.states {
            match states.iter().position(|existing| existing.state() == info.state()) {
                Some(index) => states[index] = info.merged_onto(&states[index]),
                None => states.push(info.clone()),
            }
        }
        Style {
            attributes: self.attributes.merged_onto(&target.attributes),
            states,
            painters: PainterRegistry::merge(&target.painters, &self.painters),
        }
    }
}

static_assertions::assert_impl_all!(Style: Send, Sync);
