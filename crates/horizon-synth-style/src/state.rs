//! Component state masks.

use std::fmt;

use crate::{Error, Result};

bitflags::bitflags! {
    /// Interactive and visual condition of a component.
    ///
    /// Flags combine freely. `ENABLED` and `DISABLED` are mutually exclusive in a
    /// well-formed state, but the type does not enforce it.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
    pub struct ComponentState: u32 {
        const ENABLED    = 1 << 0;
        const MOUSE_OVER = 1 << 1;
        const PRESSED    = 1 << 2;
        const DISABLED   = 1 << 3;
        const FOCUSED    = 1 << 8;
        const SELECTED   = 1 << 9;
        const DEFAULT    = 1 << 10;
    }
}

const STATE_NAMES: &[(&str, ComponentState)] = &[
    ("ENABLED", ComponentState::ENABLED),
    ("MOUSE_OVER", ComponentState::MOUSE_OVER),
    ("PRESSED", ComponentState::PRESSED),
    ("DISABLED", ComponentState::DISABLED),
    ("FOCUSED", ComponentState::FOCUSED),
    ("SELECTED", ComponentState::SELECTED),
    ("DEFAULT", ComponentState::DEFAULT),
];

impl ComponentState {
    /// Whether a state block registered for `self` applies to `state`.
    ///
    /// An empty mask is a wildcard. Otherwise every bit of `self` must be
    /// present in `state`; extra bits in `state` are ignored.
    #[inline]
    pub fn matches(self, state: ComponentState) -> bool {
        self.is_empty() || state.contains(self)
    }

    /// Number of flags set. Among matching masks, more flags is more specific.
    #[inline]
    pub fn specificity(self) -> u32 {
        self.bits().count_ones()
    }

    /// Look up a single flag by name, ignoring case.
    pub fn from_name_ignore_case(name: &str) -> Option<Self> {
        STATE_NAMES
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, flag)| *flag)
    }

    /// Parse a state expression such as `"ENABLED and FOCUSED"`.
    ///
    /// Flags are separated by whitespace, `and`, `|` or `,`. An empty
    /// expression is the wildcard mask.
    pub fn parse(expr: &str) -> Result<Self> {
        let mut state = ComponentState::empty();
        for word in expr
            .split(|c: char| c.is_whitespace() || c == '|' || c == ',')
            .filter(|w| !w.is_empty() && !w.eq_ignore_ascii_case("and"))
        {
            state |= Self::from_name_ignore_case(word).ok_or_else(|| Error::unknown_constant("state", word))?;
        }
        Ok(state)
    }
}

impl fmt::Debug for ComponentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComponentState({self})")
    }
}

impl fmt::Display for ComponentState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "*");
        }
        let mut first = true;
        for (name, flag) in STATE_NAMES {
            if self.contains(*flag) {
                if !first {
                    write!(f, "|")?;
                }
                write!(f, "{name}")?;
                first = false;
            }
        }
        Ok(())
    }
}
