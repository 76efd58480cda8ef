//! Color slots a style can define.

use std::fmt;

use crate::{Error, Result};

/// A typesafe key into a style's color map.
///
/// The five standard slots cover what every region paints with. Themes may
/// define further slots by numeric id through [`ColorType::Custom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorType {
    /// Foreground color of a region.
    Foreground,
    /// Background color of a region.
    Background,
    /// Foreground color of text in a region.
    TextForeground,
    /// Background color of text in a region.
    TextBackground,
    /// Color used to indicate focus.
    Focus,
    /// Application-defined slot.
    Custom(u16),
}

impl ColorType {
    /// Number of standard slots. Custom ids start here.
    pub const STANDARD_COUNT: u16 = 5;

    /// Numeric id of the slot.
    pub fn id(self) -> u16 {
        match self {
            Self::Foreground => 0,
            Self::Background => 1,
            Self::TextForeground => 2,
            Self::TextBackground => 3,
            Self::Focus => 4,
            Self::Custom(id) => id,
        }
    }

    /// Map a numeric id back to a slot.
    pub fn from_id(id: u16) -> Self {
        match id {
            0 => Self::Foreground,
            1 => Self::Background,
            2 => Self::TextForeground,
            3 => Self::TextBackground,
            4 => Self::Focus,
            other => Self::Custom(other),
        }
    }

    /// Parse a slot name as used in theme descriptions.
    ///
    /// Accepts the standard names (`BACKGROUND`, `text_foreground`, ...) in any
    /// case, or a decimal id.
    pub fn parse(name: &str) -> Result<Self> {
        let upper = name.trim().to_ascii_uppercase();
        match upper.as_str() {
            "FOREGROUND" => Ok(Self::Foreground),
            "BACKGROUND" => Ok(Self::Background),
            "TEXT_FOREGROUND" => Ok(Self::TextForeground),
            "TEXT_BACKGROUND" => Ok(Self::TextBackground),
            "FOCUS" => Ok(Self::Focus),
            _ => upper
                .parse::<u16>()
                .map(Self::from_id)
                .map_err(|_| Error::unknown_constant("color type", name)),
        }
    }
}

impl fmt::Display for ColorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Foreground => write!(f, "FOREGROUND"),
            Self::Background => write!(f, "BACKGROUND"),
            Self::TextForeground => write!(f, "TEXT_FOREGROUND"),
            Self::TextBackground => write!(f, "TEXT_BACKGROUND"),
            Self::Focus => write!(f, "FOCUS"),
            Self::Custom(id) => write!(f, "{id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_standard_slots() {
        for id in 0..ColorType::STANDARD_COUNT + 2 {
            assert_eq!(ColorType::from_id(id).id(), id);
        }
        assert_eq!(ColorType::from_id(9), ColorType::Custom(9));
    }

    #[test]
    fn parse_names() {
        assert_eq!(ColorType::parse("BACKGROUND").unwrap(), ColorType::Background);
        assert_eq!(ColorType::parse("text_foreground").unwrap(), ColorType::TextForeground);
        assert_eq!(ColorType::parse("12").unwrap(), ColorType::Custom(12));
        assert!(ColorType::parse("SHADOW").is_err());
    }
}
