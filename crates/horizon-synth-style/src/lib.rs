//! Region-based style resolution and painter dispatch for Horizon Synth.
//!
//! This crate turns a theme description into immutable styles and, at paint
//! time, finds the style and painter for every widget region:
//!
//! - **Styles**: fonts, colors, insets, opacity and named properties, with
//!   per-state overrides
//! - **Bindings**: attach styles to components by region or by name pattern
//! - **Painters**: register painters per paint operation and direction;
//!   duplicate registrations fan out in registration order
//! - **Dispatch**: every paint call finds the most specific painter, or
//!   quietly paints nothing
//! - **Descriptions**: load a whole style set from TOML
//!
//! # Example
//!
//! ```
//! use horizon_synth_render::{Color, Rect, RecordingSurface, Surface};
//! use horizon_synth_style::prelude::*;
//!
//! let mut set = StyleSetBuilder::new();
//! set.define(
//!     "buttons",
//!     StyleBuilder::new()
//!         .color(ColorType::Background, Color::GRAY)
//!         .painter(
//!             PaintMethod::ButtonBackground,
//!             None,
//!             painter_fn("fill", |ctx, surface, call| {
//!                 if let Some(color) = ctx.color(ColorType::Background) {
//!                     surface.fill_rect(call.bounds, color);
//!                 }
//!                 Ok(())
//!             }),
//!         ),
//! )?;
//! set.bind("buttons", BindingKind::Region, "Button")?;
//!
//! let factory = StyleFactory::new(set.build());
//! let context = factory.context(Region::Button, None, ComponentState::ENABLED);
//!
//! let mut surface = RecordingSurface::new();
//! context
//!     .painter()
//!     .paint_button_background(&context, &mut surface, Rect::new(0.0, 0.0, 80.0, 24.0))?;
//! assert_eq!(surface.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod color_type;
pub mod config;
pub mod context;
pub mod dispatch;
pub mod factory;
pub mod loader;
pub mod painter;
pub mod property;
pub mod region;
pub mod resolve;
pub mod state;
pub mod style;
pub mod style_set;

mod error;

pub use color_type::ColorType;
pub use config::SynthConfig;
pub use context::SynthContext;
pub use dispatch::DelegatingPainter;
pub use error::{Error, Result};
pub use factory::{LookAndFeel, StyleFactory, StyleFactoryProvider, SynthSessions};
pub use loader::{ImageCatalog, ImageLoader, PainterCatalog, StyleLoader};
pub use property::PropertyValue;
pub use region::Region;
pub use resolve::{BindingKind, BindingPrecedence, CascadeMode, StyleRepository, StyleResolver};
pub use state::ComponentState;
pub use style::{StateBuilder, StateInfo, Style, StyleBuilder};
pub use style_set::StyleSetBuilder;

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::color_type::ColorType;
    pub use crate::config::SynthConfig;
    pub use crate::context::SynthContext;
    pub use crate::factory::{LookAndFeel, StyleFactory, StyleFactoryProvider, SynthSessions};
    pub use crate::loader::{ImageCatalog, ImageLoader, PainterCatalog, StyleLoader};
    pub use crate::painter::{
        AggregatePainter, Direction, FnPainter, ImagePainter, NullPainter, PaintCall, PaintMethod,
        PainterHandle, SynthPainter, SynthPainterExt, painter_fn,
    };
    pub use crate::property::PropertyValue;
    pub use crate::region::Region;
    pub use crate::resolve::{BindingKind, BindingPrecedence, CascadeMode, StyleRepository};
    pub use crate::state::ComponentState;
    pub use crate::style::{Style, StyleBuilder};
    pub use crate::style_set::StyleSetBuilder;
}
