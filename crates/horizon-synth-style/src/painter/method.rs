//! The closed set of paint operations and the call record passed to painters.
//!
//! Every paint entry point a widget delegate may invoke is one variant of
//! [`PaintMethod`]. The [`SynthPainterExt`] trait adds one typed convenience
//! method per variant on top of the single [`SynthPainter::paint`] entry point,
//! so call sites read `painter.paint_slider_thumb_background(ctx, surface,
//! bounds, Direction::Horizontal)`.

use std::fmt;

use horizon_synth_render::{PaintResult, Rect, Surface};

use super::SynthPainter;
use crate::context::SynthContext;
use crate::{Error, Result};

/// A direction or orientation argument.
///
/// Arrow buttons take one of the four compass directions; sliders, scroll bars,
/// separators and friends take an orientation. The two families never compare
/// equal to each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
    Horizontal,
    Vertical,
}

impl Direction {
    /// Parse a direction name as used in theme descriptions (case-insensitive).
    pub fn parse(name: &str) -> Result<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "north" | "top" => Ok(Self::North),
            "south" | "bottom" => Ok(Self::South),
            "east" | "right" => Ok(Self::East),
            "west" | "left" => Ok(Self::West),
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            _ => Err(Error::unknown_constant("direction", name)),
        }
    }

    /// Whether this is an orientation rather than a compass direction.
    pub fn is_orientation(self) -> bool {
        matches!(self, Self::Horizontal | Self::Vertical)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        };
        f.write_str(name)
    }
}

/// Which direction argument a paint method accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectionArg {
    /// No direction; lookups always use the wildcard slot.
    Plain,
    /// A direction is always supplied.
    Directed,
    /// A direction may or may not be supplied.
    MaybeDirected,
    /// A tab index plus an optional orientation.
    Tab,
}

/// One paint call as seen by a painter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaintCall {
    /// The operation being painted.
    pub method: PaintMethod,
    /// Where to paint.
    pub bounds: Rect,
    /// Direction or orientation, when the operation has one.
    pub direction: Option<Direction>,
    /// Tab index for tabbed-pane tab operations.
    pub tab_index: Option<usize>,
}

impl PaintCall {
    /// A call with no direction and no tab index.
    pub fn new(method: PaintMethod, bounds: Rect) -> Self {
        Self {
            method,
            bounds,
            direction: None,
            tab_index: None,
        }
    }

    /// Set the direction.
    pub fn with_direction(mut self, direction: impl Into<Option<Direction>>) -> Self {
        self.direction = direction.into();
        self
    }

    /// Set the tab index.
    pub fn with_tab_index(mut self, tab_index: usize) -> Self {
        self.tab_index = Some(tab_index);
        self
    }
}

macro_rules! paint_methods {
    ($( $variant:ident => $fn_name:ident, $name:literal, $arg:ident; )+) => {
        /// Every paint operation a widget delegate can request.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum PaintMethod {
            $( $variant, )+
        }

        impl PaintMethod {
            /// All paint methods, in name order.
            pub const ALL: &'static [PaintMethod] = &[ $( PaintMethod::$variant, )+ ];

            /// Lower-case method name used in theme descriptions (e.g. `"buttonbackground"`).
            pub fn name(self) -> &'static str {
                match self {
                    $( PaintMethod::$variant => $name, )+
                }
            }

            /// The direction argument this method takes.
            pub fn direction_arg(self) -> DirectionArg {
                match self {
                    $( PaintMethod::$variant => DirectionArg::$arg, )+
                }
            }
        }

        /// Typed paint entry points, one per [`PaintMethod`].
        ///
        /// Implemented for every [`SynthPainter`]; each method builds the
        /// matching [`PaintCall`] and forwards to [`SynthPainter::paint`].
        pub trait SynthPainterExt: SynthPainter {
            $( paint_methods!(@entry $arg $variant $fn_name); )+
        }

        impl<T: SynthPainter + ?Sized> SynthPainterExt for T {}
    };

    (@entry Plain $variant:ident $fn_name:ident) => {
        fn $fn_name(
            &self,
            context: &SynthContext,
            surface: &mut dyn Surface,
            bounds: Rect,
        ) -> PaintResult {
            self.paint(context, surface, &PaintCall::new(PaintMethod::$variant, bounds))
        }
    };
    (@entry Directed $variant:ident $fn_name:ident) => {
        fn $fn_name(
            &self,
            context: &SynthContext,
            surface: &mut dyn Surface,
            bounds: Rect,
            direction: Direction,
        ) -> PaintResult {
            let call = PaintCall::new(PaintMethod::$variant, bounds).with_direction(direction);
            self.paint(context, surface, &call)
        }
    };
    (@entry MaybeDirected $variant:ident $fn_name:ident) => {
        fn $fn_name(
            &self,
            context: &SynthContext,
            surface: &mut dyn Surface,
            bounds: Rect,
            direction: Option<Direction>,
        ) -> PaintResult {
            let call = PaintCall::new(PaintMethod::$variant, bounds).with_direction(direction);
            self.paint(context, surface, &call)
        }
    };
    (@entry Tab $variant:ident $fn_name:ident) => {
        fn $fn_name(
            &self,
            context: &SynthContext,
            surface: &mut dyn Surface,
            bounds: Rect,
            tab_index: usize,
            direction: Option<Direction>,
        ) -> PaintResult {
            let call = PaintCall::new(PaintMethod::$variant, bounds)
                .with_direction(direction)
                .with_tab_index(tab_index);
            self.paint(context, surface, &call)
        }
    };
}

paint_methods! {
    ArrowButtonBackground => paint_arrow_button_background, "arrowbuttonbackground", Plain;
    ArrowButtonBorder => paint_arrow_button_border, "arrowbuttonborder", Plain;
    ArrowButtonForeground => paint_arrow_button_foreground, "arrowbuttonforeground", Directed;
    ButtonBackground => paint_button_background, "buttonbackground", Plain;
    ButtonBorder => paint_button_border, "buttonborder", Plain;
    CheckBoxBackground => paint_check_box_background, "checkboxbackground", Plain;
    CheckBoxBorder => paint_check_box_border, "checkboxborder", Plain;
    CheckBoxMenuItemBackground => paint_check_box_menu_item_background, "checkboxmenuitembackground", Plain;
    CheckBoxMenuItemBorder => paint_check_box_menu_item_border, "checkboxmenuitemborder", Plain;
    ColorChooserBackground => paint_color_chooser_background, "colorchooserbackground", Plain;
    ColorChooserBorder => paint_color_chooser_border, "colorchooserborder", Plain;
    ComboBoxBackground => paint_combo_box_background, "comboboxbackground", Plain;
    ComboBoxBorder => paint_combo_box_border, "comboboxborder", Plain;
    DesktopIconBackground => paint_desktop_icon_background, "desktopiconbackground", Plain;
    DesktopIconBorder => paint_desktop_icon_border, "desktopiconborder", Plain;
    DesktopPaneBackground => paint_desktop_pane_background, "desktoppanebackground", Plain;
    DesktopPaneBorder => paint_desktop_pane_border, "desktoppaneborder", Plain;
    EditorPaneBackground => paint_editor_pane_background, "editorpanebackground", Plain;
    EditorPaneBorder => paint_editor_pane_border, "editorpaneborder", Plain;
    FileChooserBackground => paint_file_chooser_background, "filechooserbackground", Plain;
    FileChooserBorder => paint_file_chooser_border, "filechooserborder", Plain;
    FormattedTextFieldBackground => paint_formatted_text_field_background, "formattedtextfieldbackground", Plain;
    FormattedTextFieldBorder => paint_formatted_text_field_border, "formattedtextfieldborder", Plain;
    InternalFrameBackground => paint_internal_frame_background, "internalframebackground", Plain;
    InternalFrameBorder => paint_internal_frame_border, "internalframeborder", Plain;
    InternalFrameTitlePaneBackground => paint_internal_frame_title_pane_background, "internalframetitlepanebackground", Plain;
    InternalFrameTitlePaneBorder => paint_internal_frame_title_pane_border, "internalframetitlepaneborder", Plain;
    LabelBackground => paint_label_background, "labelbackground", Plain;
    LabelBorder => paint_label_border, "labelborder", Plain;
    ListBackground => paint_list_background, "listbackground", Plain;
    ListBorder => paint_list_border, "listborder", Plain;
    MenuBackground => paint_menu_background, "menubackground", Plain;
    MenuBarBackground => paint_menu_bar_background, "menubarbackground", Plain;
    MenuBarBorder => paint_menu_bar_border, "menubarborder", Plain;
    MenuBorder => paint_menu_border, "menuborder", Plain;
    MenuItemBackground => paint_menu_item_background, "menuitembackground", Plain;
    MenuItemBorder => paint_menu_item_border, "menuitemborder", Plain;
    OptionPaneBackground => paint_option_pane_background, "optionpanebackground", Plain;
    OptionPaneBorder => paint_option_pane_border, "optionpaneborder", Plain;
    PanelBackground => paint_panel_background, "panelbackground", Plain;
    PanelBorder => paint_panel_border, "panelborder", Plain;
    PasswordFieldBackground => paint_password_field_background, "passwordfieldbackground", Plain;
    PasswordFieldBorder => paint_password_field_border, "passwordfieldborder", Plain;
    PopupMenuBackground => paint_popup_menu_background, "popupmenubackground", Plain;
    PopupMenuBorder => paint_popup_menu_border, "popupmenuborder", Plain;
    ProgressBarBackground => paint_progress_bar_background, "progressbarbackground", MaybeDirected;
    ProgressBarBorder => paint_progress_bar_border, "progressbarborder", MaybeDirected;
    ProgressBarForeground => paint_progress_bar_foreground, "progressbarforeground", Directed;
    RadioButtonBackground => paint_radio_button_background, "radiobuttonbackground", Plain;
    RadioButtonBorder => paint_radio_button_border, "radiobuttonborder", Plain;
    RadioButtonMenuItemBackground => paint_radio_button_menu_item_background, "radiobuttonmenuitembackground", Plain;
    RadioButtonMenuItemBorder => paint_radio_button_menu_item_border, "radiobuttonmenuitemborder", Plain;
    RootPaneBackground => paint_root_pane_background, "rootpanebackground", Plain;
    RootPaneBorder => paint_root_pane_border, "rootpaneborder", Plain;
    ScrollBarBackground => paint_scroll_bar_background, "scrollbarbackground", MaybeDirected;
    ScrollBarBorder => paint_scroll_bar_border, "scrollbarborder", MaybeDirected;
    ScrollBarThumbBackground => paint_scroll_bar_thumb_background, "scrollbarthumbbackground", Directed;
    ScrollBarThumbBorder => paint_scroll_bar_thumb_border, "scrollbarthumbborder", Directed;
    ScrollBarTrackBackground => paint_scroll_bar_track_background, "scrollbartrackbackground", MaybeDirected;
    ScrollBarTrackBorder => paint_scroll_bar_track_border, "scrollbartrackborder", MaybeDirected;
    ScrollPaneBackground => paint_scroll_pane_background, "scrollpanebackground", Plain;
    ScrollPaneBorder => paint_scroll_pane_border, "scrollpaneborder", Plain;
    SeparatorBackground => paint_separator_background, "separatorbackground", MaybeDirected;
    SeparatorBorder => paint_separator_border, "separatorborder", MaybeDirected;
    SeparatorForeground => paint_separator_foreground, "separatorforeground", Directed;
    SliderBackground => paint_slider_background, "sliderbackground", MaybeDirected;
    SliderBorder => paint_slider_border, "sliderborder", MaybeDirected;
    SliderThumbBackground => paint_slider_thumb_background, "sliderthumbbackground", Directed;
    SliderThumbBorder => paint_slider_thumb_border, "sliderthumbborder", Directed;
    SliderTrackBackground => paint_slider_track_background, "slidertrackbackground", MaybeDirected;
    SliderTrackBorder => paint_slider_track_border, "slidertrackborder", MaybeDirected;
    SpinnerBackground => paint_spinner_background, "spinnerbackground", Plain;
    SpinnerBorder => paint_spinner_border, "spinnerborder", Plain;
    SplitPaneBackground => paint_split_pane_background, "splitpanebackground", Plain;
    SplitPaneBorder => paint_split_pane_border, "splitpaneborder", Plain;
    SplitPaneDividerBackground => paint_split_pane_divider_background, "splitpanedividerbackground", MaybeDirected;
    SplitPaneDividerForeground => paint_split_pane_divider_foreground, "splitpanedividerforeground", Directed;
    SplitPaneDragDivider => paint_split_pane_drag_divider, "splitpanedragdivider", Directed;
    TabbedPaneBackground => paint_tabbed_pane_background, "tabbedpanebackground", Plain;
    TabbedPaneBorder => paint_tabbed_pane_border, "tabbedpaneborder", Plain;
    TabbedPaneContentBackground => paint_tabbed_pane_content_background, "tabbedpanecontentbackground", Plain;
    TabbedPaneContentBorder => paint_tabbed_pane_content_border, "tabbedpanecontentborder", Plain;
    TabbedPaneTabAreaBackground => paint_tabbed_pane_tab_area_background, "tabbedpanetabareabackground", MaybeDirected;
    TabbedPaneTabAreaBorder => paint_tabbed_pane_tab_area_border, "tabbedpanetabareaborder", MaybeDirected;
    TabbedPaneTabBackground => paint_tabbed_pane_tab_background, "tabbedpanetabbackground", Tab;
    TabbedPaneTabBorder => paint_tabbed_pane_tab_border, "tabbedpanetabborder", Tab;
    TableBackground => paint_table_background, "tablebackground", Plain;
    TableBorder => paint_table_border, "tableborder", Plain;
    TableHeaderBackground => paint_table_header_background, "tableheaderbackground", Plain;
    TableHeaderBorder => paint_table_header_border, "tableheaderborder", Plain;
    TextAreaBackground => paint_text_area_background, "textareabackground", Plain;
    TextAreaBorder => paint_text_area_border, "textareaborder", Plain;
    TextFieldBackground => paint_text_field_background, "textfieldbackground", Plain;
    TextFieldBorder => paint_text_field_border, "textfieldborder", Plain;
    TextPaneBackground => paint_text_pane_background, "textpanebackground", Plain;
    TextPaneBorder => paint_text_pane_border, "textpaneborder", Plain;
    ToggleButtonBackground => paint_toggle_button_background, "togglebuttonbackground", Plain;
    ToggleButtonBorder => paint_toggle_button_border, "togglebuttonborder", Plain;
    ToolBarBackground => paint_tool_bar_background, "toolbarbackground", MaybeDirected;
    ToolBarBorder => paint_tool_bar_border, "toolbarborder", MaybeDirected;
    ToolBarContentBackground => paint_tool_bar_content_background, "toolbarcontentbackground", MaybeDirected;
    ToolBarContentBorder => paint_tool_bar_content_border, "toolbarcontentborder", MaybeDirected;
    ToolBarDragWindowBackground => paint_tool_bar_drag_window_background, "toolbardragwindowbackground", MaybeDirected;
    ToolBarDragWindowBorder => paint_tool_bar_drag_window_border, "toolbardragwindowborder", MaybeDirected;
    ToolTipBackground => paint_tool_tip_background, "tooltipbackground", Plain;
    ToolTipBorder => paint_tool_tip_border, "tooltipborder", Plain;
    TreeBackground => paint_tree_background, "treebackground", Plain;
    TreeBorder => paint_tree_border, "treeborder", Plain;
    TreeCellBackground => paint_tree_cell_background, "treecellbackground", Plain;
    TreeCellBorder => paint_tree_cell_border, "treecellborder", Plain;
    TreeCellFocus => paint_tree_cell_focus, "treecellfocus", Plain;
    ViewportBackground => paint_viewport_background, "viewportbackground", Plain;
    ViewportBorder => paint_viewport_border, "viewportborder", Plain;
}

impl PaintMethod {
    /// Look up a method by its description name (case-insensitive).
    ///
    /// A leading `paint` is accepted, so both `"buttonbackground"` and
    /// `"paintButtonBackground"` name the same method.
    pub fn from_name(name: &str) -> Option<Self> {
        let lower = name.trim().to_ascii_lowercase();
        let bare = lower.strip_prefix("paint").unwrap_or(&lower);
        Self::ALL.iter().copied().find(|m| m.name() == bare)
    }

    /// Parse a method name, failing with [`Error::UnknownConstant`].
    pub fn parse(name: &str) -> Result<Self> {
        Self::from_name(name).ok_or_else(|| Error::unknown_constant("paint method", name))
    }
}

impl fmt::Display for PaintMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique_and_lower_case() {
        let mut names: Vec<_> = PaintMethod::ALL.iter().map(|m| m.name()).collect();
        assert!(names.iter().all(|n| *n == n.to_ascii_lowercase()));
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), PaintMethod::ALL.len());
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(
            PaintMethod::from_name("buttonbackground"),
            Some(PaintMethod::ButtonBackground)
        );
        assert_eq!(
            PaintMethod::from_name("paintArrowButtonForeground"),
            Some(PaintMethod::ArrowButtonForeground)
        );
        assert!(PaintMethod::from_name("buttonglow").is_none());
        assert!(matches!(
            PaintMethod::parse("buttonglow"),
            Err(Error::UnknownConstant { kind: "paint method", .. })
        ));
    }

    #[test]
    fn direction_arguments() {
        assert_eq!(PaintMethod::ButtonBackground.direction_arg(), DirectionArg::Plain);
        assert_eq!(PaintMethod::ArrowButtonForeground.direction_arg(), DirectionArg::Directed);
        assert_eq!(PaintMethod::SliderTrackBackground.direction_arg(), DirectionArg::MaybeDirected);
        assert_eq!(PaintMethod::TabbedPaneTabBackground.direction_arg(), DirectionArg::Tab);
    }

    #[test]
    fn parse_directions() {
        assert_eq!(Direction::parse("NORTH").unwrap(), Direction::North);
        assert_eq!(Direction::parse("vertical").unwrap(), Direction::Vertical);
        assert!(Direction::Vertical.is_orientation());
        assert!(!Direction::North.is_orientation());
        assert!(Direction::parse("up").is_err());
    }
}
