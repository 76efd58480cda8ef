//! The attribute bag shared by styles and state blocks.

use std::collections::HashMap;

use horizon_synth_render::{Color, Font, Insets};

use crate::color_type::ColorType;
use crate::property::PropertyValue;

/// Font, colors, insets, opacity and named properties.
///
/// Every scalar is optional so that an unset value can fall through to the
/// enclosing scope.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleAttributes {
    pub(crate) font: Option<Font>,
    pub(crate) colors: HashMap<ColorType, Color>,
    pub(crate) insets: Option<Insets>,
    pub(crate) opaque: Option<bool>,
    pub(crate) properties: HashMap<String, PropertyValue>,
}

impl StyleAttributes {
    /// The font, if set.
    pub fn font(&self) -> Option<&Font> {
        self.font.as_ref()
    }

    /// The color for a slot, if set.
    pub fn color(&self, color_type: ColorType) -> Option<Color> {
        self.colors.get(&color_type).copied()
    }

    /// All colors set in this scope.
    pub fn colors(&self) -> &HashMap<ColorType, Color> {
        &self.colors
    }

    /// The insets, if set.
    pub fn insets(&self) -> Option<Insets> {
        self.insets
    }

    /// The opaque flag, if set.
    pub fn opaque(&self) -> Option<bool> {
        self.opaque
    }

    /// A named property, if set.
    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }

    /// All named properties set in this scope.
    pub fn properties(&self) -> &HashMap<String, PropertyValue> {
        &self.properties
    }

    /// Check if nothing is set.
    pub fn is_empty(&self) -> bool {
        self.font.is_none()
            && self.colors.is_empty()
            && self.insets.is_none()
            && self.opaque.is_none()
            && self.properties.is_empty()
    }

    /// Cascade `source` onto `self`.
    ///
    /// Scalars set in `source` replace ours. Color and property maps are
    /// unioned, with `source` winning on shared keys.
    pub fn cascade(&mut self, source: &StyleAttributes) {
        macro_rules! cascade_if_set {
            ($($field:ident),+ $(,)?) => {
                $(
                    if source.$field.is_some() {
                        self.$field = source.$field.clone();
                    }
                )+
            };
        }

        cascade_if_set!(font, insets, opaque);
        self.colors.extend(source.colors.iter().map(|(k, v)| (*k, *v)));
        self.properties
            .extend(source.properties.iter().map(|(k, v)| (k.clone(), v.clone())));
    }

    /// `self` cascaded onto a copy of `target`.
    pub fn merged_onto(&self, target: &StyleAttributes) -> StyleAttributes {
        let mut merged = target.clone();
        merged.cascade(self);
        merged
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cascade_overwrites_set_values() {
        let mut target = StyleAttributes::default();
        target.colors.insert(ColorType::Foreground, Color::BLACK);
        target.colors.insert(ColorType::Background, Color::WHITE);
        target.opaque = Some(false);
        target.insets = Some(Insets::uniform(2.0));

        let mut source = StyleAttributes::default();
        source.colors.insert(ColorType::Foreground, Color::RED);
        source.insets = Some(Insets::uniform(4.0));
        // opaque is not set in source

        target.cascade(&source);

        assert_eq!(target.color(ColorType::Foreground), Some(Color::RED));
        assert_eq!(target.color(ColorType::Background), Some(Color::WHITE));
        assert_eq!(target.insets(), Some(Insets::uniform(4.0)));
        assert_eq!(target.opaque(), Some(false));
    }

    #[test]
    fn properties_union_with_source_winning() {
        let mut target = StyleAttributes::default();
        target.properties.insert("a".into(), 1.into());
        target.properties.insert("b".into(), 2.into());

        let mut source = StyleAttributes::default();
        source.properties.insert("b".into(), 20.into());
        source.properties.insert("c".into(), 30.into());

        let merged = source.merged_onto(&target);
        assert_eq!(merged.property("a"), Some(&PropertyValue::Int(1)));
        assert_eq!(merged.property("b"), Some(&PropertyValue::Int(20)));
        assert_eq!(merged.property("c"), Some(&PropertyValue::Int(30)));
        assert_eq!(target.property("b"), Some(&PropertyValue::Int(2)));
    }

    #[test]
    fn empty_bag() {
        assert!(StyleAttributes::default().is_empty());
        let mut attrs = StyleAttributes::default();
        attrs.opaque = Some(true);
        assert!(!attrs.is_empty());
    }
}
