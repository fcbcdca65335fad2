//! Strings of the MIU system.
//!
//! A [`State`] is a node of the rewriting graph. Two states are the same node
//! iff their string values are identical; there is no other identity.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

/// The three symbols of the MIU alphabet.
pub const ALPHABET: [char; 3] = ['M', 'I', 'U'];

/// The classic axiom of the puzzle.
pub const DEFAULT_AXIOM: &str = "MI";

/// An immutable string over the alphabet {M, I, U}.
///
/// Ordered lexicographically by string value so that node sets and edge maps
/// built from states iterate deterministically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct State(String);

/// Reasons a string is rejected as a [`State`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateError {
    /// The string has no characters.
    Empty,
    /// A character outside {M, I, U}.
    InvalidSymbol {
        /// The offending character.
        symbol: char,
        /// Its byte offset in the input.
        index: usize,
    },
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "empty string is not a state"),
            Self::InvalidSymbol { symbol, index } => {
                write!(f, "invalid symbol {symbol:?} at index {index} (expected M, I or U)")
            }
        }
    }
}

impl std::error::Error for StateError {}

impl State {
    /// Validate `s` and wrap it as a state.
    ///
    /// # Errors
    ///
    /// Returns an error if `s` is empty or contains a symbol other than M, I or U.
    pub fn parse(s: &str) -> Result<Self, StateError> {
        if s.is_empty() {
            return Err(StateError::Empty);
        }
        if let Some((index, symbol)) = s.char_indices().find(|(_, c)| !ALPHABET.contains(c)) {
            return Err(StateError::InvalidSymbol { symbol, index });
        }
        Ok(Self(s.to_owned()))
    }

    /// The classic axiom `MI`.
    #[must_use]
    pub fn axiom() -> Self {
        Self(DEFAULT_AXIOM.to_owned())
    }

    /// Wrap the output of a rule transform.
    ///
    /// Transforms only ever splice symbols already present in a valid state
    /// (plus `U`), so their output needs no re-validation.
    pub(crate) fn from_successor(s: String) -> Self {
        Self(s)
    }

    /// The string value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of symbols.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a validated state; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Deref for State {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for State {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for State {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for State {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for State {
    type Error = StateError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)?;
        Ok(Self(s))
    }
}

impl From<State> for String {
    fn from(state: State) -> Self {
        state.0
    }
}
