//! Widget regions.
//!
//! A region is a visually distinct area that can be styled on its own. Most
//! regions correspond to a whole widget type; sub-regions (a slider's thumb, a
//! tabbed pane's tab area) are parts of one.

use std::fmt;

use crate::painter::PaintMethod;

macro_rules! regions {
    ($( $variant:ident => $name:literal, $sub:literal, $bg:expr, $border:expr; )+) => {
        /// Every region the look-and-feel knows how to style.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Region {
            $( $variant, )+
        }

        impl Region {
            /// All regions.
            pub const ALL: &'static [Region] = &[ $( Region::$variant, )+ ];

            /// The region name used by region bindings (e.g. `"ScrollBarThumb"`).
            pub fn name(self) -> &'static str {
                match self {
                    $( Region::$variant => $name, )+
                }
            }

            /// Whether this region is part of a larger widget.
            pub fn is_sub_region(self) -> bool {
                match self {
                    $( Region::$variant => $sub, )+
                }
            }

            /// The operation that paints this region's background, if it has one.
            pub fn background_method(self) -> Option<PaintMethod> {
                match self {
                    $( Region::$variant => $bg, )+
                }
            }

            /// The operation that paints this region's border, if it has one.
            pub fn border_method(self) -> Option<PaintMethod> {
                match self {
                    $( Region::$variant => $border, )+
                }
            }
        }
    };
}

regions! {
    ArrowButton => "ArrowButton", false, Some(PaintMethod::ArrowButtonBackground), Some(PaintMethod::ArrowButtonBorder);
    Button => "Button", false, Some(PaintMethod::ButtonBackground), Some(PaintMethod::ButtonBorder);
    CheckBox => "CheckBox", false, Some(PaintMethod::CheckBoxBackground), Some(PaintMethod::CheckBoxBorder);
    CheckBoxMenuItem => "CheckBoxMenuItem", false, Some(PaintMethod::CheckBoxMenuItemBackground), Some(PaintMethod::CheckBoxMenuItemBorder);
    ColorChooser => "ColorChooser", false, Some(PaintMethod::ColorChooserBackground), Some(PaintMethod::ColorChooserBorder);
    ComboBox => "ComboBox", false, Some(PaintMethod::ComboBoxBackground), Some(PaintMethod::ComboBoxBorder);
    DesktopPane => "DesktopPane", false, Some(PaintMethod::DesktopPaneBackground), Some(PaintMethod::DesktopPaneBorder);
    DesktopIcon => "DesktopIcon", false, Some(PaintMethod::DesktopIconBackground), Some(PaintMethod::DesktopIconBorder);
    EditorPane => "EditorPane", false, Some(PaintMethod::EditorPaneBackground), Some(PaintMethod::EditorPaneBorder);
    FileChooser => "FileChooser", false, Some(PaintMethod::FileChooserBackground), Some(PaintMethod::FileChooserBorder);
    FormattedTextField => "FormattedTextField", false, Some(PaintMethod::FormattedTextFieldBackground), Some(PaintMethod::FormattedTextFieldBorder);
    InternalFrame => "InternalFrame", false, Some(PaintMethod::InternalFrameBackground), Some(PaintMethod::InternalFrameBorder);
    InternalFrameTitlePane => "InternalFrameTitlePane", false, Some(PaintMethod::InternalFrameTitlePaneBackground), Some(PaintMethod::InternalFrameTitlePaneBorder);
    Label => "Label", false, Some(PaintMethod::LabelBackground), Some(PaintMethod::LabelBorder);
    List => "List", false, Some(PaintMethod::ListBackground), Some(PaintMethod::ListBorder);
    Menu => "Menu", false, Some(PaintMethod::MenuBackground), Some(PaintMethod::MenuBorder);
    MenuBar => "MenuBar", false, Some(PaintMethod::MenuBarBackground), Some(PaintMethod::MenuBarBorder);
    MenuItem => "MenuItem", false, Some(PaintMethod::MenuItemBackground), Some(PaintMethod::MenuItemBorder);
    MenuItemAccelerator => "MenuItemAccelerator", true, None, None;
    OptionPane => "OptionPane", false, Some(PaintMethod::OptionPaneBackground), Some(PaintMethod::OptionPaneBorder);
    Panel => "Panel", false, Some(PaintMethod::PanelBackground), Some(PaintMethod::PanelBorder);
    PasswordField => "PasswordField", false, Some(PaintMethod::PasswordFieldBackground), Some(PaintMethod::PasswordFieldBorder);
    PopupMenu => "PopupMenu", false, Some(PaintMethod::PopupMenuBackground), Some(PaintMethod::PopupMenuBorder);
    PopupMenuSeparator => "PopupMenuSeparator", false, Some(PaintMethod::SeparatorBackground), Some(PaintMethod::SeparatorBorder);
    ProgressBar => "ProgressBar", false, Some(PaintMethod::ProgressBarBackground), Some(PaintMethod::ProgressBarBorder);
    RadioButton => "RadioButton", false, Some(PaintMethod::RadioButtonBackground), Some(PaintMethod::RadioButtonBorder);
    RadioButtonMenuItem => "RadioButtonMenuItem", false, Some(PaintMethod::RadioButtonMenuItemBackground), Some(PaintMethod::RadioButtonMenuItemBorder);
    RootPane => "RootPane", false, Some(PaintMethod::RootPaneBackground), Some(PaintMethod::RootPaneBorder);
    ScrollBar => "ScrollBar", false, Some(PaintMethod::ScrollBarBackground), Some(PaintMethod::ScrollBarBorder);
    ScrollBarTrack => "ScrollBarTrack", true, Some(PaintMethod::ScrollBarTrackBackground), Some(PaintMethod::ScrollBarTrackBorder);
    ScrollBarThumb => "ScrollBarThumb", true, Some(PaintMethod::ScrollBarThumbBackground), Some(PaintMethod::ScrollBarThumbBorder);
    ScrollPane => "ScrollPane", false, Some(PaintMethod::ScrollPaneBackground), Some(PaintMethod::ScrollPaneBorder);
    Separator => "Separator", false, Some(PaintMethod::SeparatorBackground), Some(PaintMethod::SeparatorBorder);
    Slider => "Slider", false, Some(PaintMethod::SliderBackground), Some(PaintMethod::SliderBorder);
    SliderTrack => "SliderTrack", true, Some(PaintMethod::SliderTrackBackground), Some(PaintMethod::SliderTrackBorder);
    SliderThumb => "SliderThumb", true, Some(PaintMethod::SliderThumbBackground), Some(PaintMethod::SliderThumbBorder);
    Spinner => "Spinner", false, Some(PaintMethod::SpinnerBackground), Some(PaintMethod::SpinnerBorder);
    SplitPane => "SplitPane", false, Some(PaintMethod::SplitPaneBackground), Some(PaintMethod::SplitPaneBorder);
    SplitPaneDivider => "SplitPaneDivider", true, Some(PaintMethod::SplitPaneDividerBackground), None;
    TabbedPane => "TabbedPane", false, Some(PaintMethod::TabbedPaneBackground), Some(PaintMethod::TabbedPaneBorder);
    TabbedPaneTab => "TabbedPaneTab", true, Some(PaintMethod::TabbedPaneTabBackground), Some(PaintMethod::TabbedPaneTabBorder);
    TabbedPaneTabArea => "TabbedPaneTabArea", true, Some(PaintMethod::TabbedPaneTabAreaBackground), Some(PaintMethod::TabbedPaneTabAreaBorder);
    TabbedPaneContent => "TabbedPaneContent", true, Some(PaintMethod::TabbedPaneContentBackground), Some(PaintMethod::TabbedPaneContentBorder);
    Table => "Table", false, Some(PaintMethod::TableBackground), Some(PaintMethod::TableBorder);
    TableHeader => "TableHeader", false, Some(PaintMethod::TableHeaderBackground), Some(PaintMethod::TableHeaderBorder);
    TextArea => "TextArea", false, Some(PaintMethod::TextAreaBackground), Some(PaintMethod::TextAreaBorder);
    TextField => "TextField", false, Some(PaintMethod::TextFieldBackground), Some(PaintMethod::TextFieldBorder);
    TextPane => "TextPane", false, Some(PaintMethod::TextPaneBackground), Some(PaintMethod::TextPaneBorder);
    ToggleButton => "ToggleButton", false, Some(PaintMethod::ToggleButtonBackground), Some(PaintMethod::ToggleButtonBorder);
    ToolBar => "ToolBar", false, Some(PaintMethod::ToolBarBackground), Some(PaintMethod::ToolBarBorder);
    ToolBarContent => "ToolBarContent", true, Some(PaintMethod::ToolBarContentBackground), Some(PaintMethod::ToolBarContentBorder);
    ToolBarDragWindow => "ToolBarDragWindow", false, Some(PaintMethod::ToolBarDragWindowBackground), Some(PaintMethod::ToolBarDragWindowBorder);
    ToolTip => "ToolTip", false, Some(PaintMethod::ToolTipBackground), Some(PaintMethod::ToolTipBorder);
    ToolBarSeparator => "ToolBarSeparator", false, None, None;
    Tree => "Tree", false, Some(PaintMethod::TreeBackground), Some(PaintMethod::TreeBorder);
    TreeCell => "TreeCell", true, Some(PaintMethod::TreeCellBackground), Some(PaintMethod::TreeCellBorder);
    Viewport => "Viewport", false, Some(PaintMethod::ViewportBackground), Some(PaintMethod::ViewportBorder);
}

impl Region {
    /// Look up a region by name (case-insensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|r| r.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for region in Region::ALL {
            assert_eq!(Region::from_name(region.name()), Some(*region));
        }
        assert_eq!(Region::from_name("sliderthumb"), Some(Region::SliderThumb));
        assert_eq!(Region::from_name("Knob"), None);
    }

    #[test]
    fn sub_regions() {
        assert!(Region::SliderThumb.is_sub_region());
        assert!(Region::TabbedPaneTabArea.is_sub_region());
        assert!(!Region::Slider.is_sub_region());
        assert!(!Region::Button.is_sub_region());
    }

    #[test]
    fn background_and_border_methods() {
        assert_eq!(Region::Button.background_method(), Some(PaintMethod::ButtonBackground));
        assert_eq!(Region::Button.border_method(), Some(PaintMethod::ButtonBorder));
        assert_eq!(Region::SplitPaneDivider.border_method(), None);
        assert_eq!(Region::MenuItemAccelerator.background_method(), None);
    }

    #[test]
    fn popup_menu_separator_paints_as_separator() {
        let popup = Region::PopupMenuSeparator;
        assert_eq!(popup.background_method(), Region::Separator.background_method());
        assert_eq!(popup.border_method(), Some(PaintMethod::SeparatorBorder));
        assert!(!popup.is_sub_region());
    }
}
