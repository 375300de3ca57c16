use std::fmt;

use serde::Serialize;

/// One of the two simulated parties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Party {
    Blue,
    Red,
}

impl Party {
    /// The other party.
    #[inline]
    pub fn opponent(self) -> Party {
        match self {
            Party::Blue => Party::Red,
            Party::Red => Party::Blue,
        }
    }

    /// Signed contribution of one voter of this party to a district lean
    /// (+1 for Blue, -1 for Red).
    #[inline]
    pub(crate) fn lean_value(self) -> i32 {
        match self {
            Party::Blue => 1,
            Party::Red => -1,
        }
    }
}

impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Party::Blue => write!(f, "blue"),
            Party::Red => write!(f, "red"),
        }
    }
}

/// Outcome of a district count: the majority party, or an exact tie at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winner {
    Party(Party),
    Tie,
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Winner::Party(party) => write!(f, "{party}"),
            Winner::Tie => write!(f, "tie"),
        }
    }
}

/// District counts per outcome over a whole partition.
/// Entries always sum to the number of districts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Score {
    pub blue: u32,
    pub red: u32,
    pub tie: u32,
}

impl Score {
    /// Number of districts won outright by `party`.
    #[inline]
    pub fn get(&self, party: Party) -> u32 {
        match party {
            Party::Blue => self.blue,
            Party::Red => self.red,
        }
    }

    /// Total number of districts counted.
    #[inline] pub fn total(&self) -> u32 { self.blue + self.red + self.tie }

    /// Tally one district outcome.
    pub(crate) fn record(&mut self, winner: Winner) {
        match winner {
            Winner::Party(Party::Blue) => self.blue += 1,
            Winner::Party(Party::Red) => self.red += 1,
            Winner::Tie => self.tie += 1,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "blue={} red={} tie={}", self.blue, self.red, self.tie)
    }
}
