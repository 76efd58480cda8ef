//! State-scoped override blocks.

use horizon_synth_render::{Color, Font, Insets};

use super::StyleAttributes;
use crate::color_type::ColorType;
use crate::painter::{Direction, PaintMethod, PainterHandle, PainterRegistry};
use crate::property::PropertyValue;
use crate::state::ComponentState;

/// Attributes and painters that apply while a component is in a given state.
///
/// Immutable once built; see [`StateBuilder`].
#[derive(Debug, Clone)]
pub struct StateInfo {
    state: ComponentState,
    attributes: StyleAttributes,
    painters: PainterRegistry,
}

impl StateInfo {
    /// The state mask this block applies to. The empty mask matches every state.
    pub fn state(&self) -> ComponentState {
        self.state
    }

    /// The attributes set in this block.
    pub fn attributes(&self) -> &StyleAttributes {
        &self.attributes
    }

    /// The painters registered in this block.
    pub fn painters(&self) -> &PainterRegistry {
        &self.painters
    }

    /// Whether this block applies to `state`.
    pub fn matches(&self, state: ComponentState) -> bool {
        self.state.matches(state)
    }

    /// Merge `self` on top of `target`, which must have the same mask.
    pub(crate) fn merged_onto(&self, target: &StateInfo) -> StateInfo {
        debug_assert_eq!(self.state, target.state);
        StateInfo {
            state: self.state,
            attributes: self.attributes.merged_onto(&target.attributes),
            painters: PainterRegistry::merge(&target.painters, &self.painters),
        }
    }
}

/// Fluent builder for a [`StateInfo`].
///
/// Obtained through [`StyleBuilder::state`](super::StyleBuilder::state).
#[derive(Debug, Clone)]
pub struct StateBuilder {
    info: StateInfo,
}

impl StateBuilder {
    /// Start an empty block for `state`.
    pub fn new(state: ComponentState) -> Self {
        Self {
            info: StateInfo {
                state,
                attributes: StyleAttributes::default(),
                painters: PainterRegistry::new(),
            },
        }
    }

    /// Continue building an existing block.
    pub(crate) fn resume(info: StateInfo) -> Self {
        Self { info }
    }

    /// Set the font.
    pub fn font(mut self, font: Font) -> Self {
        self.info.attributes.font = Some(font);
        self
    }

    /// Set a color slot.
    pub fn color(mut self, color_type: ColorType, color: Color) -> Self {
        self.info.attributes.colors.insert(color_type, color);
        self
    }

    /// Set the insets.
    pub fn insets(mut self, insets: Insets) -> Self {
        self.info.attributes.insets = Some(insets);
        self
    }

    /// Set the opaque flag.
    pub fn opaque(mut self, opaque: bool) -> Self {
        self.info.attributes.opaque = Some(opaque);
        self
    }

    /// Set a named property.
    pub fn property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.info.attributes.properties.insert(key.into(), value.into());
        self
    }

    /// Register a painter. `None` for the method or direction is a wildcard.
    pub fn painter(
        mut self,
        method: impl Into<Option<PaintMethod>>,
        direction: impl Into<Option<Direction>>,
        painter: impl Into<PainterHandle>,
    ) -> Self {
        self.info
            .painters
            .add_or_merge(method.into(), direction.into(), painter.into());
        self
    }

    /// Finish the block.
    pub fn build(self) -> StateInfo {
        self.info
    }
}
