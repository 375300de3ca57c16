use rand::Rng;
use rand::seq::SliceRandom;

use crate::types::Party;

/// The full N×N array of simulated voters, row-major.
/// Built once per run and never resized; party labels are immutable.
#[derive(Debug, Clone)]
pub struct VoterGrid {
    width: usize,
    parties: Vec<Party>,
}

impl VoterGrid {
    /// Build a grid with a balanced, randomly ordered party assignment
    /// (exactly half of the voters in each party).
    pub(crate) fn generate<R: Rng + ?Sized>(width: usize, rng: &mut R) -> Self {
        let len = width * width;
        debug_assert!(len % 2 == 0, "voter count must be even for a balanced split");

        let mut parties = Vec::with_capacity(len);
        parties.extend(std::iter::repeat_n(Party::Blue, len / 2));
        parties.extend(std::iter::repeat_n(Party::Red, len - len / 2));
        parties.shuffle(rng);

        Self { width, parties }
    }

    /// Width (and height) of the grid.
    #[inline] pub fn width(&self) -> usize { self.width }

    /// Total number of voters.
    #[inline] pub fn len(&self) -> usize { self.parties.len() }

    #[inline] pub fn is_empty(&self) -> bool { self.parties.is_empty() }

    /// Party label of a voter.
    #[inline]
    pub fn party(&self, voter: usize) -> Party {
        debug_assert!(voter < self.parties.len(), "voter out of range");
        self.parties[voter]
    }

    /// Row-major index of the voter at `(x, y)`.
    #[inline] pub fn index(&self, x: usize, y: usize) -> usize { y * self.width + x }

    /// Grid position `(x, y)` of a voter.
    #[inline]
    pub fn position(&self, voter: usize) -> (usize, usize) {
        (voter % self.width, voter / self.width)
    }

    /// 4-neighborhood of a voter, clipped at the grid edge.
    pub(crate) fn neighbors(&self, voter: usize) -> impl Iterator<Item = usize> + '_ {
        let (x, y) = self.position(voter);
        let width = self.width;
        [
            (x > 0).then(|| voter - 1),
            (x + 1 < width).then(|| voter + 1),
            (y > 0).then(|| voter - width),
            (y + 1 < width).then(|| voter + width),
        ]
        .into_iter()
        .flatten()
    }
}
