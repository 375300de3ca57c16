use crate::grid::VoterGrid;
use crate::partition::Partition;

impl Partition {
    /// Exchange the district memberships of voters `a` and `b`, updating
    /// both member lists, both cached leans, and both assignments together.
    ///
    /// Returns the pair of districts that changed. District sizes are
    /// untouched: the swap exchanges members, never adds or removes them.
    pub(crate) fn exchange(&mut self, grid: &VoterGrid, a: usize, b: usize) -> (u32, u32) {
        assert!(a < self.num_voters(), "voter {} out of range", a);
        assert!(b < self.num_voters(), "voter {} out of range", b);

        let (da, db) = (self.assignment(a), self.assignment(b));
        assert!(da != db, "voters {} and {} must be in different districts", a, b);

        // District da loses voter a and gains voter b; db the reverse.
        let delta = grid.party(b).lean_value() - grid.party(a).lean_value();

        self.membership.exchange(a, b);
        self.leans[da as usize] += delta;
        self.leans[db as usize] -= delta;

        (da, db)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Party;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn build() -> (VoterGrid, Partition) {
        let mut rng = StdRng::seed_from_u64(11);
        let grid = VoterGrid::generate(4, &mut rng);
        let partition = Partition::build(&grid, 4);
        (grid, partition)
    }

    /// Find a cross-district adjacent pair with differing parties, scanning
    /// seeds for a grid that has one (almost every balanced grid does).
    fn build_with_mixed_pair() -> (VoterGrid, Partition, usize, usize) {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let grid = VoterGrid::generate(4, &mut rng);
            let partition = Partition::build(&grid, 4);
            for a in 0..grid.len() {
                for b in grid.neighbors(a).collect::<Vec<_>>() {
                    if partition.assignment(a) != partition.assignment(b)
                        && grid.party(a) != grid.party(b)
                    {
                        return (grid, partition, a, b);
                    }
                }
            }
        }
        panic!("no seed produced a mixed cross-district pair");
    }

    #[test]
    fn exchange_keeps_leans_in_sync_with_recount() {
        let (grid, mut partition, a, b) = build_with_mixed_pair();
        let (da, db) = partition.exchange(&grid, a, b);

        assert_eq!(partition.lean(da), partition.recount(&grid, da));
        assert_eq!(partition.lean(db), partition.recount(&grid, db));
    }

    #[test]
    fn exchange_moves_lean_by_two_for_mixed_pair() {
        let (grid, mut partition, a, b) = build_with_mixed_pair();
        let (da, db) = (partition.assignment(a), partition.assignment(b));
        let (lean_a, lean_b) = (partition.lean(da), partition.lean(db));

        partition.exchange(&grid, a, b);

        let expected = if grid.party(b) == Party::Blue { 2 } else { -2 };
        assert_eq!(partition.lean(da), lean_a + expected);
        assert_eq!(partition.lean(db), lean_b - expected);
    }

    #[test]
    fn exchange_swaps_back_references() {
        let (grid, mut partition, a, b) = build_with_mixed_pair();
        let (da, db) = (partition.assignment(a), partition.assignment(b));

        partition.exchange(&grid, a, b);

        assert_eq!(partition.assignment(a), db);
        assert_eq!(partition.assignment(b), da);
    }

    #[test]
    #[should_panic(expected = "must be in different districts")]
    fn exchange_panics_within_one_district() {
        let (grid, mut partition) = build();
        let district = partition.assignment(0);
        let same = (1..grid.len()).find(|&v| partition.assignment(v) == district).unwrap();
        partition.exchange(&grid, 0, same);
    }
}
