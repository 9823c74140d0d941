//! Personal names in `Given /Surname/` form.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Display text bound to a spouse whose name could not be found.
pub const UNKNOWN_NAME: &str = "NULL_NAME";

/// A personal name as written on a `NAME` line.
///
/// The raw form keeps the `/…/` surname delimiters; [`fmt::Display`] drops
/// them, so `Luke /Skywalker/` displays as `Luke Skywalker`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PersonName {
    raw: String,
}

impl PersonName {
    /// Builds a name from the argument tokens of a `NAME` line.
    ///
    /// At least two tokens are required and the last one must be wrapped in
    /// slashes (`/Doe/`).
    #[must_use]
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Option<Self> {
        let last = tokens.last()?.as_ref();
        if tokens.len() < 2 || !is_surname_token(last) {
            return None;
        }
        let raw = tokens
            .iter()
            .map(|t| t.as_ref())
            .collect::<Vec<&str>>()
            .join(" ");
        Some(Self { raw })
    }

    /// The name exactly as written, delimiters included.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The text between the last pair of `/` delimiters.
    #[must_use]
    pub fn surname(&self) -> &str {
        self.surname_span()
            .map_or("", |(open, close)| &self.raw[open + 1..close])
    }

    /// Everything before the surname's opening delimiter, trimmed.
    #[must_use]
    pub fn given(&self) -> &str {
        self.surname_span()
            .map_or(self.raw.as_str(), |(open, _)| &self.raw[..open])
            .trim()
    }

    fn surname_span(&self) -> Option<(usize, usize)> {
        let close = self.raw.rfind('/')?;
        let open = self.raw[..close].rfind('/')?;
        Some((open, close))
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for word in self.raw.split_whitespace() {
            let word = word.trim_matches('/');
            if word.is_empty() {
                continue;
            }
            if !first {
                f.write_str(" ")?;
            }
            f.write_str(word)?;
            first = false;
        }
        Ok(())
    }
}

fn is_surname_token(token: &str) -> bool {
    token.len() >= 2 && token.starts_with('/') && token.ends_with('/')
}

/// The outcome of looking up a spouse's name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ResolvedName {
    /// The referenced individual was found and has a name.
    Known(PersonName),
    /// The individual was not found, or had no name, at lookup time.
    Unknown,
}

impl ResolvedName {
    /// Returns the name if it was resolved.
    #[must_use]
    pub fn known(&self) -> Option<&PersonName> {
        match self {
            Self::Known(name) => Some(name),
            Self::Unknown => None,
        }
    }

    /// Returns true for the unknown sentinel.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

impl From<Option<PersonName>> for ResolvedName {
    fn from(name: Option<PersonName>) -> Self {
        name.map_or(Self::Unknown, Self::Known)
    }
}

impl fmt::Display for ResolvedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(name) => write!(f, "{name}"),
            Self::Unknown => f.write_str(UNKNOWN_NAME),
        }
    }
}
