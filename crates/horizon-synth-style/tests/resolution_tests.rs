//! Style resolution tests.

use std::sync::Arc;

use horizon_synth_render::{Color, Insets};
use horizon_synth_style::prelude::*;
use rand::Rng;
use rand::seq::SliceRandom;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn tagged(tag: &str) -> StyleBuilder {
    StyleBuilder::new().property("tag", tag)
}

fn tag_of(style: &Style, state: ComponentState) -> Option<String> {
    style
        .property(state, "tag")
        .and_then(|v| v.as_str())
        .map(str::to_owned)
}

fn layered_repository() -> StyleRepository {
    let mut set = StyleSetBuilder::new();
    set.define("all", tagged("all")).unwrap();
    set.define("buttons", tagged("buttons")).unwrap();
    set.define("named", tagged("named")).unwrap();
    set.bind("all", BindingKind::Region, ".*").unwrap();
    set.bind("buttons", BindingKind::Region, ".*Button").unwrap();
    set.bind("named", BindingKind::Name, "dialog\\..*").unwrap();
    set.build()
}

#[test]
fn test_repeated_resolution_returns_same_arc() {
    init_tracing();
    let names = [None, Some("dialog.ok"), Some("other")];
    let mut rng = rand::thread_rng();

    for cascade in [CascadeMode::Pick, CascadeMode::Merge] {
        let config = SynthConfig {
            cascade,
            ..SynthConfig::default()
        };
        let factory = StyleFactory::with_config(layered_repository(), config);

        let first: Vec<_> = Region::ALL
            .iter()
            .flat_map(|region| names.iter().map(move |name| (*region, *name)))
            .map(|(region, name)| (region, name, factory.style(region, name)))
            .collect();

        for _ in 0..200 {
            let (region, name, expected) = &first[rng.gen_range(0..first.len())];
            let again = factory.style(*region, *name);
            assert!(Arc::ptr_eq(expected, &again), "{region} {name:?} resolved differently");
        }
    }
}

#[test]
fn test_merge_mode_layers_region_then_name_styles() {
    let config = SynthConfig {
        cascade: CascadeMode::Merge,
        ..SynthConfig::default()
    };
    let factory = StyleFactory::with_config(layered_repository(), config);
    let state = ComponentState::ENABLED;

    assert_eq!(tag_of(&factory.style(Region::Button, Some("dialog.ok")), state).as_deref(), Some("named"));
    assert_eq!(tag_of(&factory.style(Region::Button, None), state).as_deref(), Some("buttons"));
    assert_eq!(tag_of(&factory.style(Region::Label, None), state).as_deref(), Some("all"));
}

#[test]
fn test_most_specific_state_block_wins() {
    let enabled = ComponentState::ENABLED;
    let focused = ComponentState::ENABLED | ComponentState::FOCUSED;
    let selected = ComponentState::ENABLED | ComponentState::SELECTED;

    let style = StyleBuilder::new()
        .state(enabled, |s| s.property("tag", "enabled"))
        .state(focused, |s| s.property("tag", "focused"))
        .state(selected, |s| s.property("tag", "selected"))
        .build();

    let all = ComponentState::ENABLED | ComponentState::FOCUSED | ComponentState::SELECTED;
    assert_eq!(tag_of(&style, all).as_deref(), Some("selected"));
    assert_eq!(tag_of(&style, focused).as_deref(), Some("focused"));
    assert_eq!(tag_of(&style, enabled).as_deref(), Some("enabled"));
    assert_eq!(tag_of(&style, ComponentState::DISABLED), None);
}

#[test]
fn test_state_selection_is_order_independent_for_strict_supersets() {
    let masks = [
        ComponentState::empty(),
        ComponentState::ENABLED,
        ComponentState::ENABLED | ComponentState::MOUSE_OVER,
        ComponentState::ENABLED | ComponentState::MOUSE_OVER | ComponentState::PRESSED,
    ];
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let mut order = masks.to_vec();
        order.shuffle(&mut rng);

        let style = order
            .iter()
            .fold(StyleBuilder::new(), |b, mask| {
                b.state(*mask, |s| s.property("tag", mask.to_string()))
            })
            .build();

        let pressed = ComponentState::ENABLED | ComponentState::MOUSE_OVER | ComponentState::PRESSED;
        assert_eq!(tag_of(&style, pressed).as_deref(), Some("ENABLED|MOUSE_OVER|PRESSED"));
        assert_eq!(
            tag_of(&style, ComponentState::ENABLED | ComponentState::FOCUSED).as_deref(),
            Some("ENABLED")
        );
        assert_eq!(tag_of(&style, ComponentState::DISABLED).as_deref(), Some("*"));
    }
}

#[test]
fn test_disabled_background_scenario() {
    let mut set = StyleSetBuilder::new();
    set.define(
        "panel",
        StyleBuilder::new()
            .color(ColorType::Background, Color::GRAY)
            .state(ComponentState::DISABLED, |s| {
                s.color(ColorType::Background, Color::LIGHT_GRAY)
            }),
    )
    .unwrap();
    set.bind("panel", BindingKind::Region, "Panel").unwrap();
    let factory = StyleFactory::new(set.build());

    let background = |state| {
        factory
            .context(Region::Panel, None, state)
            .color(ColorType::Background)
    };
    assert_eq!(background(ComponentState::ENABLED), Some(Color::GRAY));
    assert_eq!(background(ComponentState::DISABLED), Some(Color::LIGHT_GRAY));
    assert_eq!(
        background(ComponentState::DISABLED | ComponentState::FOCUSED),
        Some(Color::LIGHT_GRAY)
    );
}

#[test]
fn test_name_binding_overrides_region_binding() {
    let mut set = StyleSetBuilder::new();
    set.define("region", StyleBuilder::new().insets(Insets::uniform(1.0)))
        .unwrap();
    set.define("name", StyleBuilder::new().insets(Insets::uniform(9.0)))
        .unwrap();
    set.bind("name", BindingKind::Name, "special").unwrap();
    set.bind("region", BindingKind::Region, "Label").unwrap();
    let repository = set.build();

    let name_first = StyleFactory::new(repository.clone());
    let state = ComponentState::ENABLED;
    assert_eq!(
        name_first.style(Region::Label, Some("special")).insets(state),
        Insets::uniform(9.0)
    );
    assert_eq!(
        name_first.style(Region::Label, Some("plain")).insets(state),
        Insets::uniform(1.0)
    );
    // Name bindings apply to any region.
    assert_eq!(
        name_first.style(Region::Tree, Some("special")).insets(state),
        Insets::uniform(9.0)
    );

    let region_first = StyleFactory::with_config(
        repository,
        SynthConfig {
            binding_precedence: BindingPrecedence::RegionFirst,
            ..SynthConfig::default()
        },
    );
    assert_eq!(
        region_first.style(Region::Label, Some("special")).insets(state),
        Insets::uniform(1.0)
    );
}

#[test]
fn test_unbound_component_gets_empty_style() {
    let factory = StyleFactory::new(StyleRepository::empty());
    let style = factory.style(Region::Viewport, None);
    assert!(Arc::ptr_eq(&style, &Style::empty()));
    assert!(style.is_opaque(ComponentState::ENABLED));
    assert_eq!(style.insets(ComponentState::ENABLED), Insets::ZERO);
}
