//! Widget delegates.
//!
//! A widget does not paint itself. When the look-and-feel is installed, every
//! component gets a delegate created from its [`WidgetKind`]. The delegate
//! holds the style resolved for the component and paints its background and
//! border through the style's painters.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use horizon_synth::prelude::*;
//! use horizon_synth::render::{Rect, RecordingSurface};
//!
//! let mut set = StyleSetBuilder::new();
//! set.define("sliders", StyleBuilder::new().opaque(false))?;
//! set.bind("sliders", BindingKind::Region, "Slider.*")?;
//! let factory = Arc::new(StyleFactory::new(set.build()));
//!
//! let slider = Component::new(WidgetKind::Slider)
//!     .with_bounds(Rect::new(0.0, 0.0, 200.0, 20.0))
//!     .with_orientation(Direction::Horizontal)
//!     .with_part(Region::SliderTrack, Rect::new(0.0, 8.0, 200.0, 4.0))
//!     .with_part(Region::SliderThumb, Rect::new(90.0, 0.0, 20.0, 20.0));
//!
//! let ui = WidgetKind::Slider.create_ui(&factory, &slider);
//! let mut surface = RecordingSurface::new();
//! ui.update(&slider, &mut surface)?;
//! assert!(surface.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fmt;
use std::sync::Arc;

use horizon_synth_core::logging::{span_names, targets};
use horizon_synth_render::{PaintResult, Rect, Surface};
use horizon_synth_style::painter::{Direction, DirectionArg, PaintCall, PaintMethod, SynthPainter};
use horizon_synth_style::{ColorType, ComponentState, Region, Style, StyleFactory, SynthContext};
use parking_lot::RwLock;

/// A component as the look-and-feel sees it.
///
/// Only what painting needs is kept: the widget kind, the optional component
/// name used by name bindings, the current state, the bounds and the layout
/// of any sub-regions.
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    kind: WidgetKind,
    name: Option<Arc<str>>,
    state: ComponentState,
    bounds: Rect,
    orientation: Option<Direction>,
    parts: Vec<(Region, Rect)>,
}

impl Component {
    /// An enabled, unnamed component with empty bounds.
    pub fn new(kind: WidgetKind) -> Self {
        Self {
            kind,
            name: None,
            state: ComponentState::ENABLED,
            bounds: Rect::ZERO,
            orientation: None,
            parts: Vec::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<Arc<str>>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_state(mut self, state: ComponentState) -> Self {
        self.state = state;
        self
    }

    pub fn with_bounds(mut self, bounds: Rect) -> Self {
        self.bounds = bounds;
        self
    }

    /// Orientation passed to painters of directed operations.
    pub fn with_orientation(mut self, orientation: Direction) -> Self {
        self.orientation = Some(orientation);
        self
    }

    /// Add a laid-out sub-region. Parts are painted in the order added.
    pub fn with_part(mut self, region: Region, bounds: Rect) -> Self {
        self.parts.push((region, bounds));
        self
    }

    pub fn kind(&self) -> WidgetKind {
        self.kind
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn state(&self) -> ComponentState {
        self.state
    }

    /// Update the state, e.g. on hover or press.
    pub fn set_state(&mut self, state: ComponentState) {
        self.state = state;
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn orientation(&self) -> Option<Direction> {
        self.orientation
    }

    pub fn parts(&self) -> &[(Region, Rect)] {
        &self.parts
    }
}

/// The paint-time capabilities of a widget delegate.
pub trait SynthUi: Send + Sync + fmt::Debug {
    /// The paint context for `component` in its current state.
    fn context(&self, component: &Component) -> SynthContext;

    /// Paint the component's border.
    fn paint_border(&self, component: &Component, surface: &mut dyn Surface) -> PaintResult;

    /// Paint the component's background, then its sub-regions.
    fn update(&self, component: &Component, surface: &mut dyn Surface) -> PaintResult;

    /// Re-resolve the held style, after a new style set was published or the
    /// component was renamed.
    fn refresh(&self, component: &Component);
}

static_assertions::assert_obj_safe!(SynthUi);

/// Builds the delegate for a component.
pub type UiConstructor = fn(&Arc<StyleFactory>, &Component) -> Box<dyn SynthUi>;

macro_rules! widget_kinds {
    ($($kind:ident => $region:ident, [$($sub:ident),*], $ctor:expr;)*) => {
        /// Every kind of widget the look-and-feel can create a delegate for.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum WidgetKind {
            $($kind,)*
        }

        impl WidgetKind {
            /// All widget kinds.
            pub const ALL: &'static [WidgetKind] = &[$(WidgetKind::$kind,)*];

            /// The region the whole widget paints as.
            pub fn region(self) -> Region {
                match self {
                    $(Self::$kind => Region::$region,)*
                }
            }

            /// Sub-regions the widget's delegate paints besides its own region.
            pub fn sub_regions(self) -> &'static [Region] {
                match self {
                    $(Self::$kind => &[$(Region::$sub),*],)*
                }
            }

            /// The function that builds this kind's delegate.
            pub fn constructor(self) -> UiConstructor {
                match self {
                    $(Self::$kind => $ctor,)*
                }
            }
        }
    };
}

widget_kinds! {
    Button => Button, [], WidgetPainterClient::create;
    CheckBox => CheckBox, [], WidgetPainterClient::create;
    CheckBoxMenuItem => CheckBoxMenuItem, [], WidgetPainterClient::create;
    ColorChooser => ColorChooser, [], WidgetPainterClient::create;
    ComboBox => ComboBox, [], WidgetPainterClient::create;
    DesktopIcon => DesktopIcon, [], WidgetPainterClient::create;
    DesktopPane => DesktopPane, [], WidgetPainterClient::create;
    EditorPane => EditorPane, [], WidgetPainterClient::create;
    FileChooser => FileChooser, [], WidgetPainterClient::create;
    FormattedTextField => FormattedTextField, [], WidgetPainterClient::create;
    InternalFrame => InternalFrame, [InternalFrameTitlePane], CompositeUi::create;
    Label => Label, [], WidgetPainterClient::create;
    List => List, [], WidgetPainterClient::create;
    Menu => Menu, [], WidgetPainterClient::create;
    MenuBar => MenuBar, [], WidgetPainterClient::create;
    MenuItem => MenuItem, [], WidgetPainterClient::create;
    OptionPane => OptionPane, [], WidgetPainterClient::create;
    Panel => Panel, [], WidgetPainterClient::create;
    PasswordField => PasswordField, [], WidgetPainterClient::create;
    PopupMenu => PopupMenu, [], WidgetPainterClient::create;
    ProgressBar => ProgressBar, [], WidgetPainterClient::create;
    RadioButton => RadioButton, [], WidgetPainterClient::create;
    RadioButtonMenuItem => RadioButtonMenuItem, [], WidgetPainterClient::create;
    RootPane => RootPane, [], WidgetPainterClient::create;
    ScrollBar => ScrollBar, [ScrollBarTrack, ScrollBarThumb], CompositeUi::create;
    ScrollPane => ScrollPane, [], WidgetPainterClient::create;
    Separator => Separator, [], WidgetPainterClient::create;
    Slider => Slider, [SliderTrack, SliderThumb], CompositeUi::create;
    Spinner => Spinner, [], WidgetPainterClient::create;
    SplitPane => SplitPane, [SplitPaneDivider], CompositeUi::create;
    TabbedPane => TabbedPane, [TabbedPaneTabArea, TabbedPaneTab, TabbedPaneContent], CompositeUi::create;
    Table => Table, [], WidgetPainterClient::create;
    TableHeader => TableHeader, [], WidgetPainterClient::create;
    TextArea => TextArea, [], WidgetPainterClient::create;
    TextField => TextField, [], WidgetPainterClient::create;
    TextPane => TextPane, [], WidgetPainterClient::create;
    ToggleButton => ToggleButton, [], WidgetPainterClient::create;
    ToolBar => ToolBar, [ToolBarContent], CompositeUi::create;
    ToolTip => ToolTip, [], WidgetPainterClient::create;
    Tree => Tree, [TreeCell], CompositeUi::create;
    Viewport => Viewport, [], WidgetPainterClient::create;
}

impl WidgetKind {
    /// Create the delegate for `component`.
    pub fn create_ui(self, factory: &Arc<StyleFactory>, component: &Component) -> Box<dyn SynthUi> {
        (self.constructor())(factory, component)
    }
}

/// A delegate that paints one region.
///
/// The style is resolved once when the delegate is created and held until
/// [`SynthUi::refresh`] is called.
pub struct WidgetPainterClient {
    region: Region,
    factory: Arc<StyleFactory>,
    style: RwLock<Arc<Style>>,
}

impl WidgetPainterClient {
    /// A delegate for `region` of `component`.
    pub fn new(factory: &Arc<StyleFactory>, region: Region, component: &Component) -> Self {
        Self {
            region,
            factory: Arc::clone(factory),
            style: RwLock::new(factory.style(region, component.name())),
        }
    }

    fn create(factory: &Arc<StyleFactory>, component: &Component) -> Box<dyn SynthUi> {
        Box::new(Self::new(factory, component.kind().region(), component))
    }

    /// The region this delegate paints.
    pub fn region(&self) -> Region {
        self.region
    }

    /// The currently held style.
    pub fn style(&self) -> Arc<Style> {
        Arc::clone(&self.style.read())
    }

    /// Fill and paint the background of this region at `bounds`.
    ///
    /// An opaque style has its background color filled first; the region's
    /// background painter runs on top of it.
    pub fn paint_background_at(
        &self,
        context: &SynthContext,
        surface: &mut dyn Surface,
        bounds: Rect,
        orientation: Option<Direction>,
        tab_index: Option<usize>,
    ) -> PaintResult {
        if context.is_opaque()
            && let Some(color) = context.color(ColorType::Background)
        {
            surface.fill_rect(bounds, color);
        }
        match self.region.background_method() {
            Some(method) => paint_method(context, surface, method, bounds, orientation, tab_index),
            None => Ok(()),
        }
    }

    /// Paint the border of this region at `bounds`.
    pub fn paint_border_at(
        &self,
        context: &SynthContext,
        surface: &mut dyn Surface,
        bounds: Rect,
        orientation: Option<Direction>,
        tab_index: Option<usize>,
    ) -> PaintResult {
        match self.region.border_method() {
            Some(method) => paint_method(context, surface, method, bounds, orientation, tab_index),
            None => Ok(()),
        }
    }
}

impl SynthUi for WidgetPainterClient {
    fn context(&self, component: &Component) -> SynthContext {
        let context = SynthContext::new(self.region, self.style())
            .with_state(component.state())
            .with_default_font(self.factory.config().default_font.clone());
        match &component.name {
            Some(name) => context.with_name(Arc::clone(name)),
            None => context,
        }
    }

    fn paint_border(&self, component: &Component, surface: &mut dyn Surface) -> PaintResult {
        let context = self.context(component);
        self.paint_border_at(&context, surface, component.bounds(), component.orientation(), None)
    }

    fn update(&self, component: &Component, surface: &mut dyn Surface) -> PaintResult {
        let _span = tracing::trace_span!(span_names::UPDATE, region = %self.region).entered();
        let context = self.context(component);
        self.paint_background_at(&context, surface, component.bounds(), component.orientation(), None)
    }

    fn refresh(&self, component: &Component) {
        *self.style.write() = self.factory.style(self.region, component.name());
    }
}

impl fmt::Debug for WidgetPainterClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WidgetPainterClient")
            .field("region", &self.region)
            .finish_non_exhaustive()
    }
}

/// A delegate for widgets made of several regions.
///
/// The widget's own region is painted first, then every laid-out part of the
/// component in order, each with its own style. Tabs receive their index among
/// the component's tab parts.
#[derive(Debug)]
pub struct CompositeUi {
    root: WidgetPainterClient,
    parts: Vec<WidgetPainterClient>,
}

impl CompositeUi {
    /// A delegate for `component` and its kind's sub-regions.
    pub fn new(factory: &Arc<StyleFactory>, component: &Component) -> Self {
        let kind = component.kind();
        Self {
            root: WidgetPainterClient::new(factory, kind.region(), component),
            parts: kind
                .sub_regions()
                .iter()
                .map(|region| WidgetPainterClient::new(factory, *region, component))
                .collect(),
        }
    }

    fn create(factory: &Arc<StyleFactory>, component: &Component) -> Box<dyn SynthUi> {
        Box::new(Self::new(factory, component))
    }

    /// The delegate for one of this widget's sub-regions.
    pub fn part(&self, region: Region) -> Option<&WidgetPainterClient> {
        self.parts.iter().find(|part| part.region() == region)
    }
}

impl SynthUi for CompositeUi {
    fn context(&self, component: &Component) -> SynthContext {
        self.root.context(component)
    }

    fn paint_border(&self, component: &Component, surface: &mut dyn Surface) -> PaintResult {
        self.root.paint_border(component, surface)
    }

    fn update(&self, component: &Component, surface: &mut dyn Surface) -> PaintResult {
        self.root.update(component, surface)?;

        let mut tabs = 0;
        for (region, bounds) in component.parts() {
            let Some(part) = self.part(*region) else {
                tracing::trace!(target: targets::WIDGET, %region, kind = ?component.kind(), "skipping foreign part");
                continue;
            };
            let tab_index = (*region == Region::TabbedPaneTab).then(|| {
                tabs += 1;
                tabs - 1
            });
            let context = part.context(component);
            part.paint_background_at(&context, surface, *bounds, component.orientation(), tab_index)?;
            part.paint_border_at(&context, surface, *bounds, component.orientation(), tab_index)?;
        }
        Ok(())
    }

    fn refresh(&self, component: &Component) {
        self.root.refresh(component);
        for part in &self.parts {
            part.refresh(component);
        }
    }
}

fn paint_method(
    context: &SynthContext,
    surface: &mut dyn Surface,
    method: PaintMethod,
    bounds: Rect,
    orientation: Option<Direction>,
    tab_index: Option<usize>,
) -> PaintResult {
    let mut call = PaintCall::new(method, bounds);
    if method.direction_arg() != DirectionArg::Plain {
        call = call.with_direction(orientation);
    }
    if method.direction_arg() == DirectionArg::Tab
        && let Some(index) = tab_index
    {
        call = call.with_tab_index(index);
    }
    context.painter().paint(context, surface, &call)
}

static_assertions::assert_impl_all!(Component: Send, Sync);
static_assertions::assert_impl_all!(WidgetPainterClient: Send, Sync);
