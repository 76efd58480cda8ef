//! Horizon Synth - a themeable, region-based look-and-feel.
//!
//! This is the umbrella crate that re-exports all public APIs and adds the
//! widget-delegate layer that connects components to the style engine.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use horizon_synth::prelude::*;
//! use horizon_synth::render::{Rect, RecordingSurface};
//!
//! let loader = StyleLoader::new(ImageCatalog::new());
//! let repository = loader.load_str(r##"
//!     [[style]]
//!     id = "default"
//!     colors = { BACKGROUND = "#C0C0C0" }
//!
//!     [[bind]]
//!     style = "default"
//!     type = "region"
//!     key = ".*"
//! "##)?;
//!
//! let factory = Arc::new(StyleFactory::new(repository));
//! let button = Component::new(WidgetKind::Button).with_bounds(Rect::new(0.0, 0.0, 80.0, 24.0));
//! let ui = WidgetKind::Button.create_ui(&factory, &button);
//!
//! let mut surface = RecordingSurface::new();
//! ui.update(&button, &mut surface)?;
//! assert_eq!(surface.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod widget;

pub use horizon_synth_core::{SessionError, SessionId, logging};
pub use horizon_synth_style::{
    BindingKind, BindingPrecedence, CascadeMode, ColorType, ComponentState, DelegatingPainter, Error, ImageCatalog,
    ImageLoader, LookAndFeel, PainterCatalog, PropertyValue, Region, StyleBuilder, StyleFactory, StyleFactoryProvider,
    StyleLoader, StyleRepository, StyleSetBuilder, SynthConfig, SynthContext, SynthSessions,
};
pub use widget::{Component, CompositeUi, SynthUi, UiConstructor, WidgetKind, WidgetPainterClient};

/// Drawing surface and geometry.
pub mod render {
    pub use horizon_synth_render::*;
}

/// Styles, painters and resolution.
pub mod style {
    pub use horizon_synth_style::*;
}

/// Prelude module with commonly used types.
pub mod prelude {
    pub use horizon_synth_style::prelude::*;

    pub use crate::widget::{Component, SynthUi, WidgetKind, WidgetPainterClient};
}
