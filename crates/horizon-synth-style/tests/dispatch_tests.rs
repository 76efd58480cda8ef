//! Painter dispatch tests.

use std::sync::Arc;

use horizon_synth_render::{PaintError, Rect, RecordingSurface};
use horizon_synth_style::painter::PainterRegistry;
use horizon_synth_style::prelude::*;
use parking_lot::Mutex;
use rand::Rng;

type Log = Arc<Mutex<Vec<&'static str>>>;

fn recorder(log: &Log, label: &'static str) -> PainterHandle {
    let log = log.clone();
    painter_fn(label, move |_, _, _| {
        log.lock().push(label);
        Ok(())
    })
}

fn bounds() -> Rect {
    Rect::new(0.0, 0.0, 24.0, 24.0)
}

fn context_for(region: Region, style: StyleBuilder) -> SynthContext {
    SynthContext::new(region, Arc::new(style.build()))
}

#[test]
fn test_directional_painter_wins_for_its_direction_only() {
    let log = Log::default();
    let context = context_for(
        Region::ScrollBarThumb,
        StyleBuilder::new()
            .painter(PaintMethod::ScrollBarThumbBackground, None, recorder(&log, "p1"))
            .painter(
                PaintMethod::ScrollBarThumbBackground,
                Direction::Vertical,
                recorder(&log, "p2"),
            ),
    );
    let mut surface = RecordingSurface::new();
    let painter = context.painter();

    painter
        .paint_scroll_bar_thumb_background(&context, &mut surface, bounds(), Direction::Vertical)
        .unwrap();
    assert_eq!(*log.lock(), vec!["p2"]);

    log.lock().clear();
    painter
        .paint_scroll_bar_thumb_background(&context, &mut surface, bounds(), Direction::Horizontal)
        .unwrap();
    assert_eq!(*log.lock(), vec!["p1"]);
}

#[test]
fn test_aggregate_order_is_stable_across_random_calls() {
    let log = Log::default();
    let context = context_for(
        Region::Slider,
        StyleBuilder::new()
            .painter(PaintMethod::SliderTrackBackground, None, recorder(&log, "p1"))
            .painter(PaintMethod::SliderTrackBackground, None, recorder(&log, "p2"))
            .painter(PaintMethod::SliderTrackBackground, None, recorder(&log, "p3")),
    );
    let mut surface = RecordingSurface::new();
    let mut rng = rand::thread_rng();

    for _ in 0..100 {
        let bounds = Rect::new(
            rng.gen_range(0.0..100.0),
            rng.gen_range(0.0..100.0),
            rng.gen_range(1.0..50.0),
            rng.gen_range(1.0..50.0),
        );
        let direction = match rng.gen_range(0..3) {
            0 => None,
            1 => Some(Direction::Horizontal),
            _ => Some(Direction::Vertical),
        };

        log.lock().clear();
        context
            .painter()
            .paint_slider_track_background(&context, &mut surface, bounds, direction)
            .unwrap();
        assert_eq!(*log.lock(), vec!["p1", "p2", "p3"]);
    }
}

#[test]
fn test_merging_a_registry_with_itself_aggregates_each_slot() {
    let log = Log::default();
    let mut registry = PainterRegistry::new();
    registry.add_or_merge(Some(PaintMethod::ButtonBackground), None, recorder(&log, "bg"));
    registry.add_or_merge(Some(PaintMethod::ButtonBorder), None, recorder(&log, "border"));

    let empty = PainterRegistry::new();
    assert_eq!(PainterRegistry::merge(&registry, &empty).len(), 2);
    assert_eq!(PainterRegistry::merge(&empty, &registry).len(), 2);

    let doubled = PainterRegistry::merge(&registry, &registry);
    assert_eq!(doubled.len(), 2);

    let context = SynthContext::detached(Region::Button);
    let call = PaintCall::new(PaintMethod::ButtonBackground, bounds());
    doubled
        .best(PaintMethod::ButtonBackground, None)
        .unwrap()
        .paint(&context, &mut RecordingSurface::new(), &call)
        .unwrap();
    assert_eq!(*log.lock(), vec!["bg", "bg"]);
}

#[test]
fn test_cloned_style_aggregates_inherited_painters() {
    let log = Log::default();
    let mut set = StyleSetBuilder::new();
    set.define(
        "base",
        StyleBuilder::new().painter(PaintMethod::ButtonBackground, None, recorder(&log, "base")),
    )
    .unwrap();
    set.define_clone(
        "derived",
        "base",
        StyleBuilder::new().painter(PaintMethod::ButtonBackground, None, recorder(&log, "derived")),
    )
    .unwrap();
    set.bind("derived", BindingKind::Region, "Button").unwrap();
    let factory = StyleFactory::new(set.build());

    let context = factory.context(Region::Button, None, ComponentState::ENABLED);
    context
        .painter()
        .paint_button_background(&context, &mut RecordingSurface::new(), bounds())
        .unwrap();
    assert_eq!(*log.lock(), vec!["base", "derived"]);
}

#[test]
fn test_nothing_registered_paints_nothing() {
    let factory = StyleFactory::new(StyleRepository::empty());
    let mut surface = RecordingSurface::new();

    for region in Region::ALL {
        let context = factory.context(*region, None, ComponentState::ENABLED);
        for method in PaintMethod::ALL {
            let call = PaintCall::new(*method, bounds());
            assert_eq!(context.painter().paint(&context, &mut surface, &call), Ok(()));
        }
    }
    assert!(surface.is_empty());
}

#[test]
fn test_painter_error_stops_aggregate() {
    let log = Log::default();
    let failing = painter_fn("fails", |_, _, _| Err(PaintError::MissingImage("thumb.png".into())));
    let context = context_for(
        Region::SliderThumb,
        StyleBuilder::new()
            .painter(PaintMethod::SliderThumbBackground, None, recorder(&log, "first"))
            .painter(PaintMethod::SliderThumbBackground, None, failing)
            .painter(PaintMethod::SliderThumbBackground, None, recorder(&log, "never")),
    );

    let result = context.painter().paint_slider_thumb_background(
        &context,
        &mut RecordingSurface::new(),
        bounds(),
        Direction::Horizontal,
    );
    assert_eq!(result, Err(PaintError::MissingImage("thumb.png".into())));
    assert_eq!(*log.lock(), vec!["first"]);
}

#[test]
fn test_tab_painters_receive_tab_index() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let context = context_for(
        Region::TabbedPaneTab,
        StyleBuilder::new().painter(
            PaintMethod::TabbedPaneTabBackground,
            None,
            painter_fn("tabs", move |_, _, call| {
                sink.lock().push(call.tab_index);
                Ok(())
            }),
        ),
    );

    let painter = context.painter();
    let mut surface = RecordingSurface::new();
    for index in 0..3 {
        painter
            .paint_tabbed_pane_tab_background(&context, &mut surface, bounds(), index, None)
            .unwrap();
    }
    assert_eq!(*seen.lock(), vec![Some(0), Some(1), Some(2)]);
}
