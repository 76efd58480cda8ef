//! Fluent construction of immutable styles.

use horizon_synth_render::{Color, Font, Insets};

use super::{StateBuilder, StateInfo, Style, StyleAttributes};
use crate::color_type::ColorType;
use crate::painter::{Direction, PaintMethod, PainterHandle, PainterRegistry};
use crate::property::PropertyValue;
use crate::state::ComponentState;

/// Builder for creating a [`Style`] with a fluent API.
///
/// # Example
///
/// ```
/// use horizon_synth_render::{Color, Insets};
/// use horizon_synth_style::{ColorType, ComponentState, StyleBuilder};
///
/// let style = StyleBuilder::new()
///     .color(ColorType::Background, Color::GRAY)
///     .insets(Insets::uniform(4.0))
///     .state(ComponentState::DISABLED, |s| {
///         s.color(ColorType::Background, Color::LIGHT_GRAY)
///     })
///     .build();
///
/// assert_eq!(
///     style.color(ComponentState::DISABLED, ColorType::Background),
///     Some(Color::LIGHT_GRAY)
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct StyleBuilder {
    attributes: StyleAttributes,
    states: Vec<StateInfo>,
    painters: PainterRegistry,
}

impl StyleBuilder {
    /// Create a new style builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the final, immutable style.
    pub fn build(self) -> Style {
        Style {
            attributes: self.attributes,
            states: self.states,
            painters: self.painters,
        }
    }

    /// Set the font.
    pub fn font(mut self, font: Font) -> Self {
        self.attributes.font = Some(font);
        self
    }

    /// Set a color slot.
    pub fn color(mut self, color_type: ColorType, color: Color) -> Self {
        self.attributes.colors.insert(color_type, color);
        self
    }

    /// Set a color slot inside the state block for `state`.
    pub fn color_for_state(self, state: ComponentState, color_type: ColorType, color: Color) -> Self {
        self.state(state, |s| s.color(color_type, color))
    }

    /// Set the insets.
    pub fn insets(mut self, insets: Insets) -> Self {
        self.attributes.insets = Some(insets);
        self
    }

    /// Set the opaque flag.
    pub fn opaque(mut self, opaque: bool) -> Self {
        self.attributes.opaque = Some(opaque);
        self
    }

    /// Set a named property.
    pub fn property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.attributes.properties.insert(key.into(), value.into());
        self
    }

    /// Add to the state block for `state`.
    ///
    /// Calling this twice with the same mask keeps building the same block;
    /// later values win and painters for an occupied slot are aggregated.
    pub fn state(mut self, state: ComponentState, build: impl FnOnce(StateBuilder) -> StateBuilder) -> Self {
        match self.states.iter().position(|info| info.state() == state) {
            Some(index) => {
                let existing = self.states[index].clone();
                self.states[index] = build(StateBuilder::resume(existing)).build();
            }
            None => self.states.push(build(StateBuilder::new(state)).build()),
        }
        self
    }

    /// Register a painter at style level. `None` for the method or direction is
    /// a wildcard.
    pub fn painter(
        mut self,
        method: impl Into<Option<PaintMethod>>,
        direction: impl Into<Option<Direction>>,
        painter: impl Into<PainterHandle>,
    ) -> Self {
        self.painters
            .add_or_merge(method.into(), direction.into(), painter.into());
        self
    }
}
