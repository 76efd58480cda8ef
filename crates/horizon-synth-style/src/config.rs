//! Look-and-feel configuration.
//!
//! ```
//! use horizon_synth_style::{BindingPrecedence, SynthConfig};
//!
//! let config = SynthConfig::from_toml_str(r#"
//! binding_precedence = "region_first"
//! cache_capacity = 256
//!
//! [default_font]
//! family = "Inter"
//! size = 13.0
//! "#).unwrap();
//!
//! assert_eq!(config.binding_precedence, BindingPrecedence::RegionFirst);
//! assert_eq!(config.default_font.family, "Inter");
//! ```

use std::path::Path;

use horizon_synth_render::Font;
use serde::{Deserialize, Serialize};

use crate::resolve::{BindingPrecedence, CascadeMode};
use crate::{Error, Result};

/// Settings for a [`StyleFactory`](crate::StyleFactory).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthConfig {
    /// Which kind of binding wins when both match.
    pub binding_precedence: BindingPrecedence,
    /// Pick one matching style, or merge all of them.
    pub cascade: CascadeMode,
    /// Font used when a style defines none.
    pub default_font: Font,
    /// Maximum number of resolved styles kept per published style set.
    pub cache_capacity: usize,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            binding_precedence: BindingPrecedence::default(),
            cascade: CascadeMode::default(),
            default_font: Font::default(),
            cache_capacity: 1024,
        }
    }
}

impl SynthConfig {
    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::from_toml_str(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(SynthConfig::from_toml_str("").unwrap(), SynthConfig::default());
        let config = SynthConfig::default();
        assert_eq!(config.default_font.family, "Dialog");
        assert_eq!(config.cache_capacity, 1024);
        assert_eq!(config.cascade, CascadeMode::Pick);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "cascade = \"merge\"").unwrap();

        let config = SynthConfig::load(file.path()).unwrap();
        assert_eq!(config.cascade, CascadeMode::Merge);
        assert_eq!(config.binding_precedence, BindingPrecedence::NameFirst);
    }

    #[test]
    fn errors() {
        assert!(matches!(
            SynthConfig::from_toml_str("cascade = \"sideways\""),
            Err(Error::Description(_))
        ));
        assert!(matches!(
            SynthConfig::load("/definitely/not/here.toml"),
            Err(Error::Io { .. })
        ));
    }
}
