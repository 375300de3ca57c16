use std::cmp::Ordering;

use crate::partition::Partition;
use crate::types::{Party, Score, Winner};

impl Partition {
    /// Winner of a district: the party with the strict majority of members,
    /// or a tie at a lean of exactly zero. Exact integer comparison.
    pub fn winner(&self, district: u32) -> Winner {
        match self.lean(district).cmp(&0) {
            Ordering::Greater => Winner::Party(Party::Blue),
            Ordering::Less => Winner::Party(Party::Red),
            Ordering::Equal => Winner::Tie,
        }
    }

    /// District counts per winner. Pure read, O(number of districts).
    pub fn score(&self) -> Score {
        let mut score = Score::default();
        for district in 0..self.num_districts() as u32 {
            score.record(self.winner(district));
        }
        score
    }

    /// Signed lean of a district from `party`'s point of view.
    /// Positive means `party` holds the majority there.
    #[inline]
    pub fn net_advantage(&self, district: u32, party: Party) -> i32 {
        self.lean(district) * party.lean_value()
    }
}
