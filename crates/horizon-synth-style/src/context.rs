//! The per-paint view of a component.

use std::sync::Arc;

use horizon_synth_render::{Color, Font, Insets};

use crate::color_type::ColorType;
use crate::dispatch::DelegatingPainter;
use crate::property::PropertyValue;
use crate::region::Region;
use crate::state::ComponentState;
use crate::style::Style;

/// Everything a painter needs to know about the component it paints.
///
/// A context pairs the component's region, name and current state with the
/// style resolved for it. Attribute accessors apply the current state.
#[derive(Debug, Clone)]
pub struct SynthContext {
    region: Region,
    name: Option<Arc<str>>,
    state: ComponentState,
    style: Arc<Style>,
    default_font: Font,
}

impl SynthContext {
    /// Create an enabled context for `region` painted with `style`.
    pub fn new(region: Region, style: Arc<Style>) -> Self {
        Self {
            region,
            name: None,
            state: ComponentState::ENABLED,
            style,
            default_font: Font::default(),
        }
    }

    /// A context with the shared empty style.
    pub fn detached(region: Region) -> Self {
        Self::new(region, Style::empty())
    }

    /// Set the component name.
    pub fn with_name(mut self, name: impl Into<Arc<str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the component state.
    pub fn with_state(mut self, state: ComponentState) -> Self {
        self.state = state;
        self
    }

    /// Set the font used when the style does not define one.
    pub fn with_default_font(mut self, font: Font) -> Self {
        self.default_font = font;
        self
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn component_state(&self) -> ComponentState {
        self.state
    }

    pub fn style(&self) -> &Arc<Style> {
        &self.style
    }

    /// The painter to paint this component with.
    pub fn painter(&self) -> &'static DelegatingPainter {
        self.style.painter(self)
    }

    /// The font for the current state, or the default font.
    pub fn font(&self) -> &Font {
        self.style.font(self.state).unwrap_or(&self.default_font)
    }

    /// The color for a slot in the current state.
    pub fn color(&self, color_type: ColorType) -> Option<Color> {
        self.style.color(self.state, color_type)
    }

    /// The insets for the current state.
    pub fn insets(&self) -> Insets {
        self.style.insets(self.state)
    }

    /// The opaque flag for the current state.
    pub fn is_opaque(&self) -> bool {
        self.style.is_opaque(self.state)
    }

    /// A named property for the current state.
    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.style.property(self.state, key)
    }
}

static_assertions::assert_impl_all!(SynthContext: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::StyleBuilder;
    use horizon_synth_render::FontStyle;

    #[test]
    fn accessors_apply_current_state() {
        let style = Arc::new(
            StyleBuilder::new()
                .color(ColorType::Foreground, Color::BLACK)
                .state(ComponentState::DISABLED, |s| {
                    s.color(ColorType::Foreground, Color::GRAY).opaque(false)
                })
                .build(),
        );
        let context = SynthContext::new(Region::Label, style).with_name("Label.title");

        assert_eq!(context.name(), Some("Label.title"));
        assert_eq!(context.color(ColorType::Foreground), Some(Color::BLACK));
        assert!(context.is_opaque());

        let disabled = context.with_state(ComponentState::DISABLED);
        assert_eq!(disabled.color(ColorType::Foreground), Some(Color::GRAY));
        assert!(!disabled.is_opaque());
    }

    #[test]
    fn font_falls_back_to_default() {
        let bold = Font::new("Serif", 14.0).with_style(FontStyle::Bold);
        let context = SynthContext::detached(Region::Button).with_default_font(bold.clone());
        assert_eq!(context.font(), &bold);

        let styled = Arc::new(StyleBuilder::new().font(Font::new("Mono", 10.0)).build());
        let context = SynthContext::new(Region::Button, styled).with_default_font(bold);
        assert_eq!(context.font().family, "Mono");
    }
}
