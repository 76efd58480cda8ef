//! Picking the style for a component.

use std::collections::HashMap;
use std::sync::Arc;

use horizon_synth_core::logging::targets;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use super::{Binding, BindingKind, ResolveKey, StyleCache, StyleRepository};
use crate::config::SynthConfig;
use crate::region::Region;
use crate::style::Style;

/// Which kind of binding wins when a component matches both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingPrecedence {
    /// Name bindings win; region bindings are the fallback.
    #[default]
    NameFirst,
    /// Region bindings win; name bindings are the fallback.
    RegionFirst,
}

/// How matching bindings combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CascadeMode {
    /// Use the single highest-precedence style.
    #[default]
    Pick,
    /// Merge every matching style, lowest precedence first.
    Merge,
}

/// Resolves components to styles against one published repository.
///
/// In [`CascadeMode::Pick`] the bound style itself is returned. In
/// [`CascadeMode::Merge`] each distinct combination of matching bindings is
/// merged once and kept for the lifetime of the resolver, so repeated lookups
/// return the same `Arc`. The bounded (region, name) cache only saves the
/// binding scan.
pub struct StyleResolver {
    repository: Arc<StyleRepository>,
    precedence: BindingPrecedence,
    cascade: CascadeMode,
    cache: Mutex<StyleCache>,
    /// Merged styles keyed by binding indices in ascending precedence.
    merged: Mutex<HashMap<Vec<usize>, Arc<Style>>>,
}

impl StyleResolver {
    /// Create a resolver with default settings.
    pub fn new(repository: Arc<StyleRepository>) -> Self {
        Self::with_config(repository, &SynthConfig::default())
    }

    /// Create a resolver using the binding and cache settings of `config`.
    pub fn with_config(repository: Arc<StyleRepository>, config: &SynthConfig) -> Self {
        Self {
            repository,
            precedence: config.binding_precedence,
            cascade: config.cascade,
            cache: Mutex::new(StyleCache::with_capacity(config.cache_capacity)),
            merged: Mutex::new(HashMap::new()),
        }
    }

    pub fn repository(&self) -> &Arc<StyleRepository> {
        &self.repository
    }

    pub fn precedence(&self) -> BindingPrecedence {
        self.precedence
    }

    pub fn cascade(&self) -> CascadeMode {
        self.cascade
    }

    /// The style for a component. Falls back to [`Style::empty`].
    pub fn resolve(&self, region: Region, name: Option<&str>) -> Arc<Style> {
        let key = ResolveKey::new(region, name);
        if let Some(style) = self.cache.lock().get(&key) {
            return style.clone();
        }

        let style = self.compute(region, name);
        // Another thread may have raced us here; keep whichever got in first.
        let mut cache = self.cache.lock();
        if let Some(existing) = cache.get(&key) {
            return existing.clone();
        }
        cache.insert(key, style.clone());
        style
    }

    /// Drop every cached result.
    pub fn invalidate_all(&self) {
        self.cache.lock().invalidate_all();
    }

    /// Number of cached results.
    pub fn cached_len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Number of distinct merged styles built so far.
    pub fn merged_len(&self) -> usize {
        self.merged.lock().len()
    }

    fn compute(&self, region: Region, name: Option<&str>) -> Arc<Style> {
        let ordered = self.by_precedence(region, name);

        let style = match self.cascade {
            CascadeMode::Pick => ordered.last().map(|(_, b)| b.style().clone()),
            CascadeMode::Merge => match ordered.as_slice() {
                [] => None,
                [(_, only)] => Some(only.style().clone()),
                _ => Some(self.merged_style(&ordered)),
            },
        };

        tracing::trace!(
            target: targets::RESOLVE,
            region = %region,
            name = name.unwrap_or(""),
            candidates = ordered.len(),
            chosen = ordered.last().map(|(_, b)| b.style_id()).unwrap_or("<empty>"),
            "resolved style"
        );

        style.unwrap_or_else(Style::empty)
    }

    /// The merge of `ordered`, built on first use.
    fn merged_style(&self, ordered: &[(usize, &Binding)]) -> Arc<Style> {
        let key: Vec<usize> = ordered.iter().map(|(index, _)| *index).collect();
        self.merged
            .lock()
            .entry(key)
            .or_insert_with(|| {
                let mut bindings = ordered.iter().map(|(_, b)| b.style());
                let first = bindings.next().map(|s| Style::clone(s)).unwrap_or_default();
                Arc::new(bindings.fold(first, |acc, style| style.merge_into(&acc)))
            })
            .clone()
    }

    /// Matching bindings, with their repository index, from lowest to highest
    /// precedence.
    fn by_precedence<'a>(&'a self, region: Region, name: Option<&'a str>) -> Vec<(usize, &'a Binding)> {
        let (low, high) = match self.precedence {
            BindingPrecedence::NameFirst => (BindingKind::Region, BindingKind::Name),
            BindingPrecedence::RegionFirst => (BindingKind::Name, BindingKind::Region),
        };
        let candidates: Vec<(usize, &Binding)> = self
            .repository
            .bindings()
            .iter()
            .enumerate()
            .filter(|(_, b)| b.matches(region, name))
            .collect();
        candidates
            .iter()
            .filter(|(_, b)| b.kind() == low)
            .chain(candidates.iter().filter(|(_, b)| b.kind() == high))
            .copied()
            .collect()
    }
}

impl std::fmt::Debug for StyleResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleResolver")
            .field("precedence", &self.precedence)
            .field("cascade", &self.cascade)
            .field("styles", &self.repository.style_count())
            .field("bindings", &self.repository.bindings().len())
            .field("cached", &self.cached_len())
            .field("merged", &self.merged_len())
            .finish()
    }
}

static_assertions::assert_impl_all!(StyleResolver: Send, Sync);
