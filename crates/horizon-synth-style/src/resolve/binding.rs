//! Rules associating styles with components.

use std::fmt;
use std::sync::Arc;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::region::Region;
use crate::style::Style;
use crate::{Error, Result};

/// What a binding pattern is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingKind {
    /// The component name. Case-sensitive; unnamed components never match.
    Name,
    /// The region name. Case-insensitive.
    Region,
}

impl fmt::Display for BindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Region => write!(f, "region"),
        }
    }
}

/// A compiled binding from a pattern to a style.
///
/// Patterns are regular expressions that must match the whole name, so
/// `"Button"` binds the button region but not `"ToggleButton"`, while
/// `".*Button"` binds both.
#[derive(Debug, Clone)]
pub struct Binding {
    kind: BindingKind,
    pattern: String,
    regex: Regex,
    style_id: Arc<str>,
    style: Arc<Style>,
}

impl Binding {
    /// Compile a binding.
    pub fn new(kind: BindingKind, pattern: &str, style_id: impl Into<Arc<str>>, style: Arc<Style>) -> Result<Self> {
        let regex = RegexBuilder::new(&format!("^(?:{pattern})$"))
            .case_insensitive(kind == BindingKind::Region)
            .build()
            .map_err(|source| Error::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
        Ok(Self {
            kind,
            pattern: pattern.to_string(),
            regex,
            style_id: style_id.into(),
            style,
        })
    }

    pub fn kind(&self) -> BindingKind {
        self.kind
    }

    /// The pattern as written.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Id of the bound style.
    pub fn style_id(&self) -> &str {
        &self.style_id
    }

    pub fn style(&self) -> &Arc<Style> {
        &self.style
    }

    /// Whether this binding applies to a component.
    pub fn matches(&self, region: Region, name: Option<&str>) -> bool {
        match self.kind {
            BindingKind::Region => self.regex.is_match(region.name()),
            BindingKind::Name => name.is_some_and(|name| self.regex.is_match(name)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binding(kind: BindingKind, pattern: &str) -> Binding {
        Binding::new(kind, pattern, "s", Style::empty()).unwrap()
    }

    #[test]
    fn region_patterns_match_whole_name_ignoring_case() {
        let button = binding(BindingKind::Region, "button");
        assert!(button.matches(Region::Button, None));
        assert!(!button.matches(Region::ToggleButton, None));

        let any_button = binding(BindingKind::Region, ".*Button");
        assert!(any_button.matches(Region::ToggleButton, None));
        assert!(any_button.matches(Region::ArrowButton, Some("x")));
        assert!(!any_button.matches(Region::Label, None));
    }

    #[test]
    fn name_patterns_are_case_sensitive() {
        let named = binding(BindingKind::Name, "ok|cancel");
        assert!(named.matches(Region::Button, Some("ok")));
        assert!(named.matches(Region::Label, Some("cancel")));
        assert!(!named.matches(Region::Button, Some("OK")));
        assert!(!named.matches(Region::Button, Some("okay")));
        assert!(!named.matches(Region::Button, None));
    }

    #[test]
    fn bad_pattern_is_rejected() {
        let result = Binding::new(BindingKind::Name, "(unclosed", "s", Style::empty());
        assert!(matches!(result, Err(Error::InvalidPattern { ref pattern, .. }) if pattern == "(unclosed"));
    }
}
