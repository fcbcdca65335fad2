//! The four production rules of the MIU system.
//!
//! | Rule | Applies when            | Rewrite            |
//! |------|-------------------------|--------------------|
//! | 1    | string ends in `I`      | `xI  -> xIU`       |
//! | 2    | string starts with `M`  | `Mx  -> Mxx`       |
//! | 3    | string contains `III`   | `xIIIy -> xUy`     |
//! | 4    | string contains `UU`    | `xUUy -> xy`       |
//!
//! Rule 3 is multi-site: every (possibly overlapping) occurrence of `III` is a
//! distinct application. Rule 4 only ever removes the leftmost `UU`.

mod predicate;
mod sites;
mod transform;

pub use predicate::{rule1_applicable, rule2_applicable, rule3_applicable, rule4_applicable};
pub use sites::rule3_sites;
pub use transform::{apply, apply_rule1, apply_rule2, apply_rule3, apply_rule4};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four rules, without site information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rule {
    /// Append `U` after a trailing `I`.
    One,
    /// Duplicate everything after the leading `M`.
    Two,
    /// Replace one `III` with `U`.
    Three,
    /// Remove the leftmost `UU`.
    Four,
}

impl Rule {
    /// All rules in enumeration order.
    pub const ALL: [Rule; 4] = [Rule::One, Rule::Two, Rule::Three, Rule::Four];

    /// Rule number (1-4).
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
        }
    }

    /// Whether this rule applies to `s` at any site.
    #[must_use]
    pub fn applicable(self, s: &str) -> bool {
        match self {
            Self::One => rule1_applicable(s),
            Self::Two => rule2_applicable(s),
            Self::Three => rule3_applicable(s),
            Self::Four => rule4_applicable(s),
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Which rule produced a transition, and for rule 3, at which site.
///
/// Displays as `1`, `2`, `3@<site>` or `4`, where `<site>` is the zero-based
/// index of the replaced `III` in the source string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RuleLabel {
    /// Rule 1.
    One,
    /// Rule 2.
    Two,
    /// Rule 3 applied at `site`.
    Three {
        /// Start index of the replaced `III`.
        site: usize,
    },
    /// Rule 4.
    Four,
}

impl RuleLabel {
    /// The rule without its site.
    #[must_use]
    pub const fn rule(self) -> Rule {
        match self {
            Self::One => Rule::One,
            Self::Two => Rule::Two,
            Self::Three { .. } => Rule::Three,
            Self::Four => Rule::Four,
        }
    }

    /// Site index for rule 3 labels.
    #[must_use]
    pub const fn site(self) -> Option<usize> {
        match self {
            Self::Three { site } => Some(site),
            _ => None,
        }
    }
}

impl fmt::Display for RuleLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => f.pad("1"),
            Self::Two => f.pad("2"),
            Self::Three { site } => f.pad(&format!("3@{site}")),
            Self::Four => f.pad("4"),
        }
    }
}

/// Error parsing a [`RuleLabel`] from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLabelError(String);

impl fmt::Display for ParseLabelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid rule label {:?}", self.0)
    }
}

impl std::error::Error for ParseLabelError {}

impl FromStr for RuleLabel {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Self::One),
            "2" => Ok(Self::Two),
            "4" => Ok(Self::Four),
            _ => s
                .strip_prefix("3@")
                .and_then(|site| site.parse().ok())
                .map(|site| Self::Three { site })
                .ok_or_else(|| ParseLabelError(s.to_owned())),
        }
    }
}

impl TryFrom<String> for RuleLabel {
    type Error = ParseLabelError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<RuleLabel> for String {
    fn from(label: RuleLabel) -> Self {
        label.to_string()
    }
}
