// ********* Input data structures ***********

use std::error::Error;
use std::fmt::Display;

/// A single voter's ranked choices, most preferred first.
///
/// A ballot may be empty, or become empty while the tally runs and its
/// candidates get eliminated. Such ballots simply stop counting.
#[derive(Eq, PartialEq, Debug, Clone, Default, Hash)]
pub struct Ballot {
    /// Candidate names in decreasing order of preference.
    pub choices: Vec<String>,
}

impl Ballot {
    pub fn new(choices: Vec<String>) -> Ballot {
        Ballot { choices }
    }

    /// The candidate this ballot currently counts towards, if any.
    pub fn first_choice(&self) -> Option<&str> {
        self.choices.first().map(|s| s.as_str())
    }

    pub fn is_exhausted(&self) -> bool {
        self.choices.is_empty()
    }
}

impl From<Vec<String>> for Ballot {
    fn from(choices: Vec<String>) -> Ballot {
        Ballot::new(choices)
    }
}

impl<S: Into<String>> FromIterator<S> for Ballot {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Ballot {
        Ballot::new(iter.into_iter().map(|s| s.into()).collect())
    }
}

/// One entry of the tie-breaking table: when `winner` and `loser` tie for
/// last place, `loser` is the one eliminated.
///
/// The table is consulted in both directions, so a single orientation of a
/// given pair of candidates is enough (and wanted: both orientations at once
/// are contradictory and fail the tally).
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct TieBreak {
    pub winner: String,
    pub loser: String,
}

impl TieBreak {
    /// `candidate` survives a last-place tie against `other`.
    pub fn preferred_over(candidate: &str, other: &str) -> TieBreak {
        TieBreak {
            winner: candidate.to_string(),
            loser: other.to_string(),
        }
    }

    /// `candidate` loses a last-place tie against `other`. The mirror of
    /// [`TieBreak::preferred_over`].
    pub fn defeated_by(candidate: &str, other: &str) -> TieBreak {
        TieBreak {
            winner: other.to_string(),
            loser: candidate.to_string(),
        }
    }
}

// ******** Output data structures *********

/// The elimination performed by one round.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Elimination {
    pub candidate: String,
    /// First-place votes the candidate held when it was eliminated.
    pub first_place_votes: u64,
}

/// The outcome of a completed tally: the winning candidate and the
/// elimination trace, one entry per round in round order.
///
/// The winner never appears in the trace.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct TallyResult {
    pub winner: String,
    pub eliminations: Vec<Elimination>,
}

/// Errors that prevent the tally from completing.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum TallyError {
    /// The election contains no ballots at all.
    NoBallots,
    /// No ballot carries a first-place choice (all of them are empty).
    NoFirstChoices,
    /// Two candidates tied for last place and the tie-breaking table orders
    /// them in neither direction. The fields are in comparison order: the
    /// challenger first, then the provisional eliminee it was compared to.
    MissingTieBreak(String, String),
    /// The tie-breaking table orders the two tied candidates in both
    /// directions at once. Same field order as `MissingTieBreak`.
    ContradictoryTieBreak(String, String),
}

impl Error for TallyError {}

impl Display for TallyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TallyError::NoBallots => write!(f, "ballots must be non-empty"),
            TallyError::NoFirstChoices => {
                write!(f, "no ballot carries a first-place choice")
            }
            TallyError::MissingTieBreak(a, b) => {
                write!(f, "no tie-breaking entry between {:?} and {:?}", a, b)
            }
            TallyError::ContradictoryTieBreak(a, b) => {
                write!(f, "contradictory tie-breaking entries between {:?} and {:?}", a, b)
            }
        }
    }
}
