//! Level classification.
//!
//! Classification is split in two steps:
//!
//! ```text
//! tokens + &ParseContext ──classify──▶ Classified | RejectReason
//!                                           │
//!        &mut ParseContext + &mut RecordBuilder ◀──apply──┘
//! ```
//!
//! [`LevelClassifier::classify`] is a pure function of the current context
//! and the line, so every acceptance rule can be tested without building
//! records. [`LevelClassifier::apply`] performs the side effects of an
//! accepted line. A rejected line never reaches `apply`, which is what keeps
//! rejection free of side effects.

use pedigree_foundation::{GedcomDate, Gender, PersonName, SpouseRef};

use crate::builder::RecordBuilder;
use crate::context::ParseContext;
use crate::report::{LineOutcome, RejectReason};
use crate::vocabulary::{DetailTag, EventTag, FactTag, Level, RecordKind, RecordTag};

/// The typed meaning of an accepted line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Classified<'a> {
    /// A level-0 line. `id` is present for `INDI` and `FAM`.
    Record {
        /// The record tag.
        tag: RecordTag,
        /// The new record's id.
        id: Option<&'a str>,
    },
    /// A level-1 line.
    Fact {
        /// The fact tag.
        tag: FactTag,
        /// The validated argument.
        value: FactValue<'a>,
    },
    /// A level-2 `DATE` attached to the open event.
    Date {
        /// The event the date belongs to.
        event: EventTag,
        /// The date.
        date: GedcomDate,
    },
}

/// The validated argument of a level-1 line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FactValue<'a> {
    /// `NAME`.
    Name(PersonName),
    /// `SEX`.
    Gender(Gender),
    /// `BIRT`, `DEAT`, `MARR`, `DIV`: no argument.
    Event,
    /// `FAMC`, `FAMS`, `HUSB`, `WIFE`, `CHIL`: a record id.
    Pointer(&'a str),
}

/// Classifies tokenized lines against the level 0, 1 and 2 grammars.
pub struct LevelClassifier;

impl LevelClassifier {
    /// Decides what a line means in the given context.
    ///
    /// # Errors
    ///
    /// Returns the reason the line must be dropped. No state is involved, so
    /// a rejected line cannot have changed anything.
    pub fn classify<'a>(
        tokens: &[&'a str],
        context: &ParseContext,
    ) -> Result<Classified<'a>, RejectReason> {
        let level = tokens
            .first()
            .and_then(|token| Level::from_token(token))
            .ok_or(RejectReason::BadLevel)?;

        match level {
            Level::Record => Self::classify_record(tokens),
            Level::Fact => Self::classify_fact(tokens, context),
            Level::Detail => Self::classify_detail(tokens, context),
        }
    }

    /// Classifies and, if accepted, applies a line.
    pub fn process(
        tokens: &[&str],
        context: &mut ParseContext,
        builder: &mut RecordBuilder,
    ) -> LineOutcome {
        match Self::classify(tokens, context) {
            Ok(classified) => Self::apply(classified, context, builder),
            Err(reason) => LineOutcome::Rejected(reason),
        }
    }

    /// Applies an accepted line to the context and the in-progress records.
    ///
    /// Returns [`RejectReason::WrongRecordContext`] without touching anything
    /// if the record the line targets is not in progress.
    pub fn apply(
        classified: Classified<'_>,
        context: &mut ParseContext,
        builder: &mut RecordBuilder,
    ) -> LineOutcome {
        match classified {
            Classified::Record { tag, id } => {
                match (tag.kind(), id) {
                    (Some(RecordKind::Individual), Some(id)) => builder.start_individual(id),
                    (Some(RecordKind::Family), Some(id)) => builder.start_family(id),
                    _ => {}
                }
                context.enter_record(tag);
            }
            Classified::Fact { tag, value } => {
                if !Self::apply_fact(tag, value, builder) {
                    return LineOutcome::Rejected(RejectReason::WrongRecordContext);
                }
                context.enter_fact(tag);
            }
            Classified::Date { event, date } => {
                if !Self::apply_date(event, date, builder) {
                    return LineOutcome::Rejected(RejectReason::WrongRecordContext);
                }
            }
        }
        LineOutcome::Accepted
    }

    fn classify_record<'a>(tokens: &[&'a str]) -> Result<Classified<'a>, RejectReason> {
        let first = tokens.get(1).and_then(|token| RecordTag::from_token(token));
        let second = tokens.get(2).and_then(|token| RecordTag::from_token(token));

        match (first, second, tokens.len()) {
            // `0 NOTE <text>` takes any text; `0 <id> NOTE` takes none
            (Some(RecordTag::Note), _, _) | (None, Some(RecordTag::Note), 3) => {
                Ok(Classified::Record {
                    tag: RecordTag::Note,
                    id: None,
                })
            }
            (Some(tag @ (RecordTag::Head | RecordTag::Trlr)), _, 2) => {
                Ok(Classified::Record { tag, id: None })
            }
            (None, Some(tag @ (RecordTag::Indi | RecordTag::Fam)), 3) => Ok(Classified::Record {
                tag,
                id: Some(tokens[1]),
            }),
            (Some(_), _, _) | (None, Some(_), _) => Err(RejectReason::BadArguments),
            (None, None, _) => Err(RejectReason::UnknownTag),
        }
    }

    fn classify_fact<'a>(
        tokens: &[&'a str],
        context: &ParseContext,
    ) -> Result<Classified<'a>, RejectReason> {
        let tag = tokens
            .get(1)
            .and_then(|token| FactTag::from_token(token))
            .ok_or(RejectReason::UnknownTag)?;
        if !context.admits(tag) {
            return Err(RejectReason::WrongRecordContext);
        }

        let args = &tokens[2..];
        let value = match tag {
            FactTag::Name => PersonName::from_tokens(args).map(FactValue::Name),
            FactTag::Sex => match args {
                [code] => Gender::from_code(code).map(FactValue::Gender),
                _ => None,
            },
            FactTag::Birt | FactTag::Deat | FactTag::Marr | FactTag::Div => {
                args.is_empty().then_some(FactValue::Event)
            }
            FactTag::Famc | FactTag::Fams | FactTag::Husb | FactTag::Wife | FactTag::Chil => {
                match args {
                    [id] => Some(FactValue::Pointer(*id)),
                    _ => None,
                }
            }
        };

        value
            .map(|value| Classified::Fact { tag, value })
            .ok_or(RejectReason::BadArguments)
    }

    fn classify_detail<'a>(
        tokens: &[&'a str],
        context: &ParseContext,
    ) -> Result<Classified<'a>, RejectReason> {
        tokens
            .get(1)
            .and_then(|token| DetailTag::from_token(token))
            .ok_or(RejectReason::UnknownTag)?;
        let event = context
            .open_event()
            .ok_or(RejectReason::MissingEventContext)?;

        match tokens {
            [_, _, day, month, year] => GedcomDate::from_tokens(day, month, year)
                .map(|date| Classified::Date { event, date })
                .ok_or(RejectReason::BadArguments),
            _ => Err(RejectReason::BadArguments),
        }
    }

    fn apply_fact(tag: FactTag, value: FactValue<'_>, builder: &mut RecordBuilder) -> bool {
        match tag.scope() {
            RecordKind::Individual => {
                let Some(individual) = builder.individual_mut() else {
                    return false;
                };
                match (tag, value) {
                    (_, FactValue::Name(name)) => individual.name = Some(name),
                    (_, FactValue::Gender(gender)) => individual.gender = gender,
                    (FactTag::Famc, FactValue::Pointer(id)) => {
                        individual.child_of_family = Some(id.to_string());
                    }
                    (FactTag::Fams, FactValue::Pointer(id)) => {
                        individual.spouse_of_families.insert(id.to_string());
                    }
                    _ => {}
                }
            }
            RecordKind::Family => {
                // Resolve before borrowing the family: the lookup reads the
                // in-progress individual too.
                let spouse = match value {
                    FactValue::Pointer(id) if matches!(tag, FactTag::Husb | FactTag::Wife) => {
                        Some(SpouseRef::new(id, builder.lookup_name(id)))
                    }
                    _ => None,
                };
                let Some(family) = builder.family_mut() else {
                    return false;
                };
                match (tag, value) {
                    (FactTag::Husb, _) => family.husband = spouse,
                    (FactTag::Wife, _) => family.wife = spouse,
                    (FactTag::Chil, FactValue::Pointer(id)) => {
                        family.add_child(id);
                    }
                    _ => {}
                }
            }
        }
        true
    }

    fn apply_date(event: EventTag, date: GedcomDate, builder: &mut RecordBuilder) -> bool {
        match event {
            EventTag::Birth | EventTag::Death => {
                let Some(individual) = builder.individual_mut() else {
                    return false;
                };
                if event == EventTag::Birth {
                    individual.birth_date = Some(date);
                } else {
                    individual.death_date = Some(date);
                }
            }
            EventTag::Marriage | EventTag::Divorce => {
                let Some(family) = builder.family_mut() else {
                    return false;
                };
                if event == EventTag::Marriage {
                    family.married_date = Some(date);
                } else {
                    family.divorced_date = Some(date);
                }
            }
        }
        true
    }
}
