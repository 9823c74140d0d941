//! Per-line classification outcomes and reports.
//!
//! A rejected line is an ordinary outcome carrying its [`RejectReason`],
//! never an error.

use std::fmt;

/// Why a line was dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RejectReason {
    /// The first token is not `0`, `1` or `2`.
    BadLevel,
    /// The tag is not part of the recognized vocabulary at this level.
    UnknownTag,
    /// The tag is known but its arguments have the wrong shape.
    BadArguments,
    /// The tag belongs to the other record kind (or no record is open).
    WrongRecordContext,
    /// A `DATE` line with no preceding `BIRT`, `DEAT`, `MARR` or `DIV`.
    MissingEventContext,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::BadLevel => "bad level",
            Self::UnknownTag => "unknown tag",
            Self::BadArguments => "bad arguments",
            Self::WrongRecordContext => "wrong record context",
            Self::MissingEventContext => "missing event context",
        };
        f.write_str(text)
    }
}

/// The result of classifying one line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineOutcome {
    /// The line matched a grammar and its effects were applied.
    Accepted,
    /// The line was dropped; nothing changed.
    Rejected(RejectReason),
}

impl LineOutcome {
    /// Returns true for [`LineOutcome::Accepted`].
    #[must_use]
    pub fn is_accepted(self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// The rejection reason, if rejected.
    #[must_use]
    pub fn reason(self) -> Option<RejectReason> {
        match self {
            Self::Accepted => None,
            Self::Rejected(reason) => Some(reason),
        }
    }
}

/// One echoed input line: `level|tag|Y or N|arguments`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineReport {
    /// Line number in the input (1-indexed).
    pub line_number: usize,
    /// The level token as written.
    pub level: String,
    /// The tag. For `0 <id> INDI` lines this is the record tag.
    pub tag: String,
    /// Arguments. For `0 <id> INDI` lines this is the id.
    pub arguments: Vec<String>,
    /// Whether the line was accepted.
    pub outcome: LineOutcome,
}

impl LineReport {
    /// Builds a report from a tokenized line.
    #[must_use]
    pub fn new(line_number: usize, tokens: &[&str], outcome: LineOutcome) -> Self {
        let level = tokens.first().copied().unwrap_or_default().to_string();
        let (tag, arguments): (&str, &[&str]) = match tokens {
            [_, id, tag @ ("INDI" | "FAM")] => (*tag, std::slice::from_ref(id)),
            [_, tag, rest @ ..] => (*tag, rest),
            _ => ("", &tokens[..0]),
        };
        Self {
            line_number,
            level,
            tag: tag.to_string(),
            arguments: arguments.iter().map(ToString::to_string).collect(),
            outcome,
        }
    }
}

impl fmt::Display for LineReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let flag = if self.outcome.is_accepted() { "Y" } else { "N" };
        write!(
            f,
            "{}|{}|{}|{}",
            self.level,
            self.tag,
            flag,
            self.arguments.join(" ")
        )
    }
}

/// Line counters for one parse.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseStats {
    /// Non-empty lines classified.
    pub lines: usize,
    /// Lines accepted.
    pub accepted: usize,
    /// Lines rejected.
    pub rejected: usize,
    /// `FAMC` back-links added by the cross-reference pass.
    pub children_linked: usize,
    /// `FAMC` pointers naming a family that was never completed.
    pub dangling_references: usize,
}

impl ParseStats {
    /// Counts one classified line.
    pub fn record(&mut self, outcome: LineOutcome) {
        self.lines += 1;
        if outcome.is_accepted() {
            self.accepted += 1;
        } else {
            self.rejected += 1;
        }
    }
}
