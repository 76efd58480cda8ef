//! Style factories and look-and-feel sessions.
//!
//! A [`StyleFactory`] serves styles from the most recently published
//! [`StyleRepository`]. Publishing swaps the whole repository at once; a
//! resolver and its cache live and die with the repository they were built
//! for, so a lookup never mixes two sets.
//!
//! A [`LookAndFeel`] owns a factory. Installing one for a [`SessionId`] makes
//! it discoverable through [`SynthSessions`] without any process-wide state.

use std::sync::Arc;

use horizon_synth_core::logging::targets;
use horizon_synth_core::{SessionCache, SessionError, SessionId};
use parking_lot::RwLock;

use crate::config::SynthConfig;
use crate::context::SynthContext;
use crate::region::Region;
use crate::resolve::{StyleRepository, StyleResolver};
use crate::state::ComponentState;
use crate::style::Style;

/// Serves resolved styles from a published style set.
pub struct StyleFactory {
    config: SynthConfig,
    current: RwLock<Arc<StyleResolver>>,
}

impl StyleFactory {
    /// Create a factory with default settings.
    pub fn new(repository: StyleRepository) -> Self {
        Self::with_config(repository, SynthConfig::default())
    }

    /// Create a factory with the given settings.
    pub fn with_config(repository: StyleRepository, config: SynthConfig) -> Self {
        let resolver = StyleResolver::with_config(Arc::new(repository), &config);
        Self {
            config,
            current: RwLock::new(Arc::new(resolver)),
        }
    }

    pub fn config(&self) -> &SynthConfig {
        &self.config
    }

    /// The currently published style set.
    pub fn repository(&self) -> Arc<StyleRepository> {
        self.current.read().repository().clone()
    }

    fn resolver(&self) -> Arc<StyleResolver> {
        self.current.read().clone()
    }

    /// Replace the published style set.
    ///
    /// Lookups already in progress finish against the old set. Styles handed
    /// out before the swap stay valid for as long as callers hold them.
    pub fn publish(&self, repository: StyleRepository) {
        let resolver = Arc::new(StyleResolver::with_config(Arc::new(repository), &self.config));
        let styles = resolver.repository().style_count();
        *self.current.write() = resolver;
        tracing::debug!(target: targets::FACTORY, styles, "published style set");
    }

    /// The style for a component.
    pub fn style(&self, region: Region, name: Option<&str>) -> Arc<Style> {
        self.resolver().resolve(region, name)
    }

    /// A paint context for a component in `state`.
    pub fn context(&self, region: Region, name: Option<&str>, state: ComponentState) -> SynthContext {
        let context = SynthContext::new(region, self.style(region, name))
            .with_state(state)
            .with_default_font(self.config.default_font.clone());
        match name {
            Some(name) => context.with_name(name),
            None => context,
        }
    }
}

impl std::fmt::Debug for StyleFactory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StyleFactory")
            .field("config", &self.config)
            .field("resolver", &*self.current.read())
            .finish()
    }
}

/// Anything that can hand out the style factory for a look-and-feel.
pub trait StyleFactoryProvider: Send + Sync {
    /// The factory components should resolve their styles with.
    fn style_factory(&self) -> Arc<StyleFactory>;
}

/// A named, installable look-and-feel.
#[derive(Debug)]
pub struct LookAndFeel {
    name: String,
    factory: Arc<StyleFactory>,
}

impl LookAndFeel {
    /// Create a look-and-feel around a factory.
    pub fn new(name: impl Into<String>, factory: StyleFactory) -> Self {
        Self {
            name: name.into(),
            factory: Arc::new(factory),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl StyleFactoryProvider for LookAndFeel {
    fn style_factory(&self) -> Arc<StyleFactory> {
        self.factory.clone()
    }
}

/// Session-scoped registry of installed look-and-feels.
///
/// Entries are weak; dropping the look-and-feel uninstalls it.
pub struct SynthSessions<P: StyleFactoryProvider = LookAndFeel> {
    installed: SessionCache<P>,
}

impl<P: StyleFactoryProvider> SynthSessions<P> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            installed: SessionCache::new(),
        }
    }

    /// Install `provider` for `session`, returning the previous one if it was
    /// still alive.
    pub fn install(&self, session: SessionId, provider: &Arc<P>) -> Option<Arc<P>> {
        tracing::debug!(target: targets::FACTORY, session = session.as_raw(), "installing look-and-feel");
        self.installed.install(session, provider)
    }

    /// Remove whatever is installed for `session`.
    pub fn uninstall(&self, session: SessionId) -> bool {
        self.installed.invalidate(session)
    }

    /// The provider installed for `session`.
    pub fn provider(&self, session: SessionId) -> Option<Arc<P>> {
        self.installed.get(session)
    }

    /// The style factory installed for `session`.
    pub fn style_factory(&self, session: SessionId) -> Result<Arc<StyleFactory>, SessionError> {
        Ok(self.installed.require(session)?.style_factory())
    }

    /// Drop entries whose look-and-feel has been dropped.
    pub fn prune(&self) -> usize {
        self.installed.prune()
    }
}

impl<P: StyleFactoryProvider> Default for SynthSessions<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: StyleFactoryProvider> std::fmt::Debug for SynthSessions<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SynthSessions")
            .field("installed", &self.installed)
            .finish()
    }
}

static_assertions::assert_impl_all!(StyleFactory: Send, Sync);
static_assertions::assert_impl_all!(LookAndFeel: Send, Sync);
static_assertions::assert_impl_all!(SynthSessions: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color_type::ColorType;
    use crate::resolve::BindingKind;
    use crate::style::StyleBuilder;
    use crate::style_set::StyleSetBuilder;
    use horizon_synth_render::{Color, Font};

    fn repository(color: Color) -> StyleRepository {
        let mut set = StyleSetBuilder::new();
        set.define("all", StyleBuilder::new().color(ColorType::Background, color))
            .unwrap();
        set.bind("all", BindingKind::Region, ".*").unwrap();
        set.build()
    }

    #[test]
    fn publish_swaps_the_whole_set() {
        let factory = StyleFactory::new(repository(Color::GRAY));
        let before = factory.style(Region::Button, None);
        assert_eq!(before.color(ComponentState::ENABLED, ColorType::Background), Some(Color::GRAY));

        factory.publish(repository(Color::RED));
        let after = factory.style(Region::Button, None);
        assert_eq!(after.color(ComponentState::ENABLED, ColorType::Background), Some(Color::RED));

        // Styles handed out earlier are unaffected.
        assert_eq!(before.color(ComponentState::ENABLED, ColorType::Background), Some(Color::GRAY));
    }

    #[test]
    fn context_carries_defaults() {
        let config = SynthConfig {
            default_font: Font::new("Inter", 13.0),
            ..SynthConfig::default()
        };
        let factory = StyleFactory::with_config(repository(Color::GRAY), config);
        let context = factory.context(Region::Label, Some("title"), ComponentState::DISABLED);

        assert_eq!(context.name(), Some("title"));
        assert_eq!(context.component_state(), ComponentState::DISABLED);
        assert_eq!(context.font().family, "Inter");
        assert_eq!(context.color(ColorType::Background), Some(Color::GRAY));
    }

    #[test]
    fn sessions_hold_look_and_feels_weakly() {
        let sessions: SynthSessions = SynthSessions::new();
        let session = SessionId::new();
        assert_eq!(
            sessions.style_factory(session).unwrap_err(),
            SessionError::NotInstalled(session)
        );

        let laf = Arc::new(LookAndFeel::new("test", StyleFactory::new(repository(Color::GRAY))));
        assert!(sessions.install(session, &laf).is_none());
        let factory = sessions.style_factory(session).unwrap();
        assert!(Arc::ptr_eq(&factory, &laf.style_factory()));

        drop(factory);
        drop(laf);
        assert!(sessions.provider(session).is_none());
        assert!(sessions.style_factory(session).is_err());
    }

    #[test]
    fn uninstall_and_replace() {
        let sessions: SynthSessions = SynthSessions::new();
        let session = SessionId::new();
        let first = Arc::new(LookAndFeel::new("first", StyleFactory::new(StyleRepository::empty())));
        let second = Arc::new(LookAndFeel::new("second", StyleFactory::new(StyleRepository::empty())));

        sessions.install(session, &first);
        let previous = sessions.install(session, &second).unwrap();
        assert_eq!(previous.name(), "first");
        assert_eq!(sessions.provider(session).unwrap().name(), "second");

        assert!(sessions.uninstall(session));
        assert!(sessions.provider(session).is_none());
    }
}
