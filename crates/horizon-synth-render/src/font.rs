//! Font descriptions.
//!
//! A [`Font`] here is only a description (family, size, style). Resolving it to
//! glyphs is the job of whatever text stack the surface uses.

use serde::{Deserialize, Serialize};

/// Font style flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontStyle {
    #[default]
    Plain,
    Bold,
    Italic,
    BoldItalic,
}

impl FontStyle {
    /// Parse a style name as used in theme descriptions.
    ///
    /// Accepts `plain`, `bold`, `italic` and `bold italic` (case-insensitive,
    /// any whitespace or `|` between words).
    pub fn from_name(name: &str) -> Option<Self> {
        let mut bold = false;
        let mut italic = false;
        for word in name
            .split(|c: char| c.is_whitespace() || c == '|')
            .filter(|w| !w.is_empty())
        {
            match word.to_ascii_lowercase().as_str() {
                "plain" => {}
                "bold" => bold = true,
                "italic" => italic = true,
                _ => return None,
            }
        }
        Some(match (bold, italic) {
            (false, false) => Self::Plain,
            (true, false) => Self::Bold,
            (false, true) => Self::Italic,
            (true, true) => Self::BoldItalic,
        })
    }

    /// Whether the style is bold.
    pub fn is_bold(self) -> bool {
        matches!(self, Self::Bold | Self::BoldItalic)
    }

    /// Whether the style is italic.
    pub fn is_italic(self) -> bool {
        matches!(self, Self::Italic | Self::BoldItalic)
    }
}

/// A font description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// Family name (e.g. "Dialog", "Inter").
    pub family: String,
    /// Point size.
    pub size: f32,
    /// Style flags.
    #[serde(default)]
    pub style: FontStyle,
}

impl Font {
    /// Create a plain font.
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            size,
            style: FontStyle::Plain,
        }
    }

    /// Return a copy with the given style.
    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    /// Return a copy with the given size.
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new("Dialog", 12.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn style_names() {
        assert_eq!(FontStyle::from_name("plain"), Some(FontStyle::Plain));
        assert_eq!(FontStyle::from_name("BOLD"), Some(FontStyle::Bold));
        assert_eq!(FontStyle::from_name("bold italic"), Some(FontStyle::BoldItalic));
        assert_eq!(FontStyle::from_name("italic|bold"), Some(FontStyle::BoldItalic));
        assert_eq!(FontStyle::from_name("heavy"), None);
    }

    #[test]
    fn font_builders() {
        let font = Font::new("Inter", 13.0).with_style(FontStyle::Bold).with_size(14.0);
        assert_eq!(font.family, "Inter");
        assert_eq!(font.size, 14.0);
        assert!(font.style.is_bold());
        assert!(!font.style.is_italic());
    }

    #[test]
    fn font_deserializes_with_default_style() {
        let font: Font = toml::from_str("family = \"Dialog\"\nsize = 11.0").unwrap();
        assert_eq!(font, Font::new("Dialog", 11.0));
    }
}
