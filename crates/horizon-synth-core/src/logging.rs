//! Logging facilities for Horizon Synth.
//!
//! Horizon Synth uses the `tracing` crate for instrumentation. Nothing is printed
//! unless the application installs a subscriber:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_synth_style::resolve=trace")
//!     .init();
//! ```
//!
//! Style resolution and painter dispatch run once per paint call, so they log at
//! `trace` level only. Building and publishing a style set logs at `debug`.

/// Span names used throughout Horizon Synth for tracing.
///
/// These constants can be used to filter traces for specific subsystems.
pub mod span_names {
    /// Style set construction span.
    pub const BUILD: &str = "horizon_synth::build";
    /// Description loading span.
    pub const LOAD: &str = "horizon_synth::load";
    /// Widget update (background + border painting) span.
    pub const UPDATE: &str = "horizon_synth::update";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Session cache target.
    pub const SESSION: &str = "horizon_synth_core::session";
    /// Style set building target.
    pub const BUILD: &str = "horizon_synth_style::build";
    /// Binding resolution target.
    pub const RESOLVE: &str = "horizon_synth_style::resolve";
    /// Painter dispatch target.
    pub const DISPATCH: &str = "horizon_synth_style::dispatch";
    /// Description loader target.
    pub const LOADER: &str = "horizon_synth_style::loader";
    /// Look-and-feel factory target.
    pub const FACTORY: &str = "horizon_synth_style::factory";
    /// Widget delegate target.
    pub const WIDGET: &str = "horizon_synth::widget";
}
