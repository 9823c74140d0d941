//! Tag vocabulary.
//!
//! Only the subset of tags needed to populate individuals and families is
//! recognized. Anything else is an extension tag and is dropped.

use std::fmt;

/// The nesting level carried by the first token of a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Record level (`0`).
    Record,
    /// Fact level (`1`).
    Fact,
    /// Detail level (`2`).
    Detail,
}

impl Level {
    /// Parses the literal level token. Only `0`, `1` and `2` are levels.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "0" => Some(Self::Record),
            "1" => Some(Self::Fact),
            "2" => Some(Self::Detail),
            _ => None,
        }
    }

    /// The numeric level.
    #[must_use]
    pub const fn depth(self) -> u8 {
        match self {
            Self::Record => 0,
            Self::Fact => 1,
            Self::Detail => 2,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.depth())
    }
}

/// Which record kind a fact tag belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// `INDI` records.
    Individual,
    /// `FAM` records.
    Family,
}

/// Level-0 tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RecordTag {
    /// File header.
    Head,
    /// File trailer.
    Trlr,
    /// Note record. Recognized but not modelled.
    Note,
    /// Individual record.
    Indi,
    /// Family record.
    Fam,
}

impl RecordTag {
    /// Parses a level-0 tag.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "HEAD" => Some(Self::Head),
            "TRLR" => Some(Self::Trlr),
            "NOTE" => Some(Self::Note),
            "INDI" => Some(Self::Indi),
            "FAM" => Some(Self::Fam),
            _ => None,
        }
    }

    /// The tag as written.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Head => "HEAD",
            Self::Trlr => "TRLR",
            Self::Note => "NOTE",
            Self::Indi => "INDI",
            Self::Fam => "FAM",
        }
    }

    /// The record kind this tag opens, if it opens one.
    #[must_use]
    pub const fn kind(self) -> Option<RecordKind> {
        match self {
            Self::Indi => Some(RecordKind::Individual),
            Self::Fam => Some(RecordKind::Family),
            Self::Head | Self::Trlr | Self::Note => None,
        }
    }
}

impl fmt::Display for RecordTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Level-1 tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FactTag {
    /// Personal name.
    Name,
    /// Gender.
    Sex,
    /// Birth event.
    Birt,
    /// Death event.
    Deat,
    /// Marriage event.
    Marr,
    /// Divorce event.
    Div,
    /// Child-of-family pointer.
    Famc,
    /// Spouse-of-family pointer.
    Fams,
    /// Husband pointer.
    Husb,
    /// Wife pointer.
    Wife,
    /// Child pointer.
    Chil,
}

impl FactTag {
    /// Parses a level-1 tag.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "NAME" => Some(Self::Name),
            "SEX" => Some(Self::Sex),
            "BIRT" => Some(Self::Birt),
            "DEAT" => Some(Self::Deat),
            "MARR" => Some(Self::Marr),
            "DIV" => Some(Self::Div),
            "FAMC" => Some(Self::Famc),
            "FAMS" => Some(Self::Fams),
            "HUSB" => Some(Self::Husb),
            "WIFE" => Some(Self::Wife),
            "CHIL" => Some(Self::Chil),
            _ => None,
        }
    }

    /// The tag as written.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "NAME",
            Self::Sex => "SEX",
            Self::Birt => "BIRT",
            Self::Deat => "DEAT",
            Self::Marr => "MARR",
            Self::Div => "DIV",
            Self::Famc => "FAMC",
            Self::Fams => "FAMS",
            Self::Husb => "HUSB",
            Self::Wife => "WIFE",
            Self::Chil => "CHIL",
        }
    }

    /// The record kind this tag is allowed in.
    #[must_use]
    pub const fn scope(self) -> RecordKind {
        match self {
            Self::Name | Self::Sex | Self::Birt | Self::Deat | Self::Famc | Self::Fams => {
                RecordKind::Individual
            }
            Self::Marr | Self::Div | Self::Husb | Self::Wife | Self::Chil => RecordKind::Family,
        }
    }

    /// Returns the event this tag opens for a following `DATE`, if any.
    #[must_use]
    pub const fn event(self) -> Option<EventTag> {
        match self {
            Self::Birt => Some(EventTag::Birth),
            Self::Deat => Some(EventTag::Death),
            Self::Marr => Some(EventTag::Marriage),
            Self::Div => Some(EventTag::Divorce),
            _ => None,
        }
    }
}

impl fmt::Display for FactTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Events that a level-2 `DATE` can be attached to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventTag {
    /// `BIRT`: the individual's birth date.
    Birth,
    /// `DEAT`: the individual's death date.
    Death,
    /// `MARR`: the family's marriage date.
    Marriage,
    /// `DIV`: the family's divorce date.
    Divorce,
}

/// Level-2 tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DetailTag {
    /// Date of the preceding event.
    Date,
}

impl DetailTag {
    /// Parses a level-2 tag.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "DATE" => Some(Self::Date),
            _ => None,
        }
    }
}
