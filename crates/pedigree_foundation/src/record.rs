//! The two reconstructed record types: [`Individual`] and [`Family`].

use std::collections::BTreeSet;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::date::GedcomDate;
use crate::name::{PersonName, ResolvedName};

/// Gender recorded on a `SEX` line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Gender {
    /// `SEX M`.
    Male,
    /// `SEX F`.
    Female,
    /// No accepted `SEX` line.
    #[default]
    Unknown,
}

impl Gender {
    /// Parses the single `SEX` argument. Only `M` and `F` are accepted.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "M" => Some(Self::Male),
            "F" => Some(Self::Female),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "M"),
            Self::Female => write!(f, "F"),
            Self::Unknown => write!(f, "?"),
        }
    }
}

/// A person, reconstructed from an `INDI` block.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Individual {
    /// Identifier in `@token@` form, unique within the file.
    pub id: String,
    /// Full name; `None` until an accepted `NAME` line.
    pub name: Option<PersonName>,
    /// Gender.
    pub gender: Gender,
    /// Birth date; `None` means unknown.
    pub birth_date: Option<GedcomDate>,
    /// Death date; `None` means unknown, not "still alive".
    pub death_date: Option<GedcomDate>,
    /// The family this individual is a child of (`FAMC`, last write wins).
    pub child_of_family: Option<String>,
    /// Families this individual is a spouse in (`FAMS`).
    pub spouse_of_families: BTreeSet<String>,
}

impl Individual {
    /// Creates an empty individual with the given id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            gender: Gender::Unknown,
            birth_date: None,
            death_date: None,
            child_of_family: None,
            spouse_of_families: BTreeSet::new(),
        }
    }

    /// Surname, if the individual has a name.
    #[must_use]
    pub fn surname(&self) -> Option<&str> {
        self.name.as_ref().map(PersonName::surname)
    }

    /// Returns true if this individual is a spouse in the given family.
    #[must_use]
    pub fn is_spouse_in(&self, family_id: &str) -> bool {
        self.spouse_of_families.contains(family_id)
    }
}

/// A spouse pointer on a family, with the name resolved when it was seen.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpouseRef {
    /// The referenced individual's id.
    pub id: String,
    /// The name found at lookup time.
    pub name: ResolvedName,
}

impl SpouseRef {
    /// Creates a spouse reference.
    #[must_use]
    pub fn new(id: impl Into<String>, name: ResolvedName) -> Self {
        Self {
            id: id.into(),
            name,
        }
    }
}

/// A couple and their children, reconstructed from a `FAM` block.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Family {
    /// Identifier in `@token@` form, unique within the file.
    pub id: String,
    /// Marriage date.
    pub married_date: Option<GedcomDate>,
    /// Divorce date.
    pub divorced_date: Option<GedcomDate>,
    /// `HUSB` pointer.
    pub husband: Option<SpouseRef>,
    /// `WIFE` pointer.
    pub wife: Option<SpouseRef>,
    /// Ids of the children (membership only).
    pub children: BTreeSet<String>,
}

impl Family {
    /// Creates an empty family with the given id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            married_date: None,
            divorced_date: None,
            husband: None,
            wife: None,
            children: BTreeSet::new(),
        }
    }

    /// Husband's id.
    #[must_use]
    pub fn husband_id(&self) -> Option<&str> {
        self.husband.as_ref().map(|s| s.id.as_str())
    }

    /// Wife's id.
    #[must_use]
    pub fn wife_id(&self) -> Option<&str> {
        self.wife.as_ref().map(|s| s.id.as_str())
    }

    /// Iterates the spouse pointers that are present, husband first.
    pub fn spouses(&self) -> impl Iterator<Item = &SpouseRef> {
        self.husband.iter().chain(self.wife.iter())
    }

    /// Adds a child id. Returns false if it was already present.
    pub fn add_child(&mut self, id: impl Into<String>) -> bool {
        self.children.insert(id.into())
    }

    /// Returns true if the family lists the given child.
    #[must_use]
    pub fn has_child(&self, id: &str) -> bool {
        self.children.contains(id)
    }
}
