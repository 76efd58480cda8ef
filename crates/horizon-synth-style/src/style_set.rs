//! Assembling a complete style set.
//!
//! Styles and shareable painters are registered under ids while a set is being
//! built. Ids exist only during the build: they let a style clone another one
//! and let several styles share one painter instance. Once
//! [`StyleSetBuilder::build`] runs, the result is an immutable
//! [`StyleRepository`].

use std::collections::HashMap;
use std::sync::Arc;

use horizon_synth_core::logging::{span_names, targets};

use crate::painter::PainterHandle;
use crate::resolve::{Binding, BindingKind, StyleRepository};
use crate::style::{Style, StyleBuilder};
use crate::{Error, Result};

#[derive(Debug, Clone)]
enum Entry {
    Style(Arc<Style>),
    Painter(PainterHandle),
}

impl Entry {
    fn kind(&self) -> &'static str {
        match self {
            Self::Style(_) => "style",
            Self::Painter(_) => "painter",
        }
    }
}

/// Builder for a [`StyleRepository`].
///
/// Every method that can fail leaves the builder usable, but callers loading a
/// description are expected to abandon the whole set on the first error.
///
/// # Example
///
/// ```
/// use horizon_synth_render::Color;
/// use horizon_synth_style::{BindingKind, ColorType, StyleBuilder, StyleSetBuilder};
///
/// let mut set = StyleSetBuilder::new();
/// set.define("base", StyleBuilder::new().color(ColorType::Background, Color::GRAY))?;
/// set.define_clone("dark", "base", StyleBuilder::new().color(ColorType::Foreground, Color::WHITE))?;
/// set.bind("dark", BindingKind::Region, ".*")?;
///
/// let repository = set.build();
/// assert_eq!(repository.style_count(), 2);
/// # Ok::<(), horizon_synth_style::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct StyleSetBuilder {
    entries: HashMap<String, Entry>,
    bindings: Vec<Binding>,
}

impl StyleSetBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    fn register(&mut self, id: &str, entry: Entry) -> Result<()> {
        if self.entries.contains_key(id) {
            return Err(Error::DuplicateId(id.to_string()));
        }
        self.entries.insert(id.to_string(), entry);
        Ok(())
    }

    /// Build `style` and register it under `id`.
    pub fn define(&mut self, id: &str, style: StyleBuilder) -> Result<Arc<Style>> {
        let style = Arc::new(style.build());
        self.register(id, Entry::Style(style.clone()))?;
        Ok(style)
    }

    /// Build `style` on top of the style registered as `base_id` and register
    /// the result under `id`. The base style is not modified.
    pub fn define_clone(&mut self, id: &str, base_id: &str, style: StyleBuilder) -> Result<Arc<Style>> {
        let base = self.style(base_id)?;
        if self.entries.contains_key(id) {
            return Err(Error::DuplicateId(id.to_string()));
        }
        let style = Arc::new(style.build().merge_into(&base));
        self.register(id, Entry::Style(style.clone()))?;
        Ok(style)
    }

    /// Register a painter so several styles can share it.
    pub fn painter_object(&mut self, id: &str, painter: impl Into<PainterHandle>) -> Result<PainterHandle> {
        let painter = painter.into();
        self.register(id, Entry::Painter(painter.clone()))?;
        Ok(painter)
    }

    /// Look up a painter registered with [`painter_object`](Self::painter_object).
    pub fn painter_ref(&self, id: &str) -> Result<PainterHandle> {
        match self.entries.get(id) {
            Some(Entry::Painter(painter)) => Ok(painter.clone()),
            Some(other) => Err(Error::WrongKind {
                id: id.to_string(),
                expected: "painter",
                found: other.kind(),
            }),
            None => Err(Error::UnknownId(id.to_string())),
        }
    }

    /// Look up a style registered so far.
    pub fn style(&self, id: &str) -> Result<Arc<Style>> {
        match self.entries.get(id) {
            Some(Entry::Style(style)) => Ok(style.clone()),
            Some(other) => Err(Error::WrongKind {
                id: id.to_string(),
                expected: "style",
                found: other.kind(),
            }),
            None => Err(Error::UnknownId(id.to_string())),
        }
    }

    /// Bind the style `style_id` to every component whose name or region
    /// fully matches `pattern`.
    ///
    /// Later bindings take precedence over earlier ones of the same kind.
    pub fn bind(&mut self, style_id: &str, kind: BindingKind, pattern: &str) -> Result<()> {
        let style = self.style(style_id)?;
        self.bindings.push(Binding::new(kind, pattern, style_id, style)?);
        Ok(())
    }

    /// Number of ids registered so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Freeze the set.
    pub fn build(self) -> StyleRepository {
        let _span = tracing::debug_span!(span_names::BUILD).entered();

        let styles: HashMap<String, Arc<Style>> = self
            .entries
            .into_iter()
            .filter_map(|(id, entry)| match entry {
                Entry::Style(style) => Some((id, style)),
                Entry::Painter(_) => None,
            })
            .collect();

        tracing::debug!(
            target: targets::BUILD,
            styles = styles.len(),
            bindings = self.bindings.len(),
            "built style set"
        );
        StyleRepository::new(styles, self.bindings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color_type::ColorType;
    use crate::painter::{NullPainter, PaintMethod};
    use crate::state::ComponentState;
    use horizon_synth_render::{Color, Insets};

    #[test]
    fn emptiness_follows_registered_ids() {
        let mut set = StyleSetBuilder::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);

        set.define("a", StyleBuilder::new()).unwrap();
        set.bind("a", BindingKind::Region, ".*").unwrap();
        assert!(!set.is_empty());
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut set = StyleSetBuilder::new();
        set.define("a", StyleBuilder::new()).unwrap();
        assert!(matches!(set.define("a", StyleBuilder::new()), Err(Error::DuplicateId(id)) if id == "a"));
        assert!(matches!(
            set.painter_object("a", PainterHandle::new(NullPainter)),
            Err(Error::DuplicateId(_))
        ));
        assert!(matches!(
            set.define_clone("a", "a", StyleBuilder::new()),
            Err(Error::DuplicateId(_))
        ));
    }

    #[test]
    fn unknown_and_mistyped_references() {
        let mut set = StyleSetBuilder::new();
        set.define("style", StyleBuilder::new()).unwrap();
        set.painter_object("paint", PainterHandle::new(NullPainter)).unwrap();

        assert!(matches!(set.painter_ref("nope"), Err(Error::UnknownId(_))));
        assert!(matches!(
            set.painter_ref("style"),
            Err(Error::WrongKind { expected: "painter", found: "style", .. })
        ));
        assert!(matches!(
            set.define_clone("x", "paint", StyleBuilder::new()),
            Err(Error::WrongKind { expected: "style", found: "painter", .. })
        ));
        assert!(matches!(set.bind("nope", BindingKind::Region, ".*"), Err(Error::UnknownId(_))));
        assert!(matches!(
            set.bind("style", BindingKind::Region, "[z-a]"),
            Err(Error::InvalidPattern { .. })
        ));
    }

    #[test]
    fn clone_layers_on_top_of_base() {
        let mut set = StyleSetBuilder::new();
        let base = set
            .define(
                "base",
                StyleBuilder::new()
                    .color(ColorType::Background, Color::GRAY)
                    .insets(Insets::uniform(2.0))
                    .state(ComponentState::DISABLED, |s| s.color(ColorType::Background, Color::LIGHT_GRAY)),
            )
            .unwrap();
        let derived = set
            .define_clone("derived", "base", StyleBuilder::new().insets(Insets::uniform(5.0)))
            .unwrap();

        let state = ComponentState::DISABLED;
        assert_eq!(derived.insets(state), Insets::uniform(5.0));
        assert_eq!(derived.color(state, ColorType::Background), Some(Color::LIGHT_GRAY));
        assert_eq!(base.insets(state), Insets::uniform(2.0));
    }

    #[test]
    fn shared_painters_are_the_same_instance() {
        let mut set = StyleSetBuilder::new();
        set.painter_object("shared", PainterHandle::new(NullPainter)).unwrap();
        let painter = set.painter_ref("shared").unwrap();
        let a = set
            .define("a", StyleBuilder::new().painter(PaintMethod::LabelBackground, None, painter.clone()))
            .unwrap();
        let b = set
            .define("b", StyleBuilder::new().painter(PaintMethod::PanelBackground, None, painter))
            .unwrap();

        let pa = &a.painters().entries()[0].painter().painters()[0];
        let pb = &b.painters().entries()[0].painter().painters()[0];
        assert!(Arc::ptr_eq(pa, pb));

        let repository = set.build();
        assert_eq!(repository.style_count(), 2);
        assert!(repository.style("shared").is_none());
    }
}
