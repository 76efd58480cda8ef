//! Built style sets.

use std::collections::HashMap;
use std::sync::Arc;

use super::Binding;
use crate::region::Region;
use crate::style::Style;

/// An immutable set of styles and the bindings that apply them.
///
/// Produced by [`StyleSetBuilder::build`](crate::StyleSetBuilder::build) and
/// published to a [`StyleFactory`](crate::StyleFactory) as a whole.
#[derive(Debug, Clone, Default)]
pub struct StyleRepository {
    styles: HashMap<String, Arc<Style>>,
    bindings: Vec<Binding>,
}

impl StyleRepository {
    pub(crate) fn new(styles: HashMap<String, Arc<Style>>, bindings: Vec<Binding>) -> Self {
        Self { styles, bindings }
    }

    /// Create an empty repository. Every component resolves to the empty style.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Look up a defined style by id.
    pub fn style(&self, id: &str) -> Option<&Arc<Style>> {
        self.styles.get(id)
    }

    /// Ids of every defined style, in no particular order.
    pub fn style_ids(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    /// Bindings in registration order.
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    pub fn style_count(&self) -> usize {
        self.styles.len()
    }

    /// Bindings that apply to a component, in registration order.
    pub fn candidates<'a>(&'a self, region: Region, name: Option<&'a str>) -> impl Iterator<Item = &'a Binding> + 'a {
        self.bindings.iter().filter(move |b| b.matches(region, name))
    }
}
