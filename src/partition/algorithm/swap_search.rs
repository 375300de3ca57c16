use rand::Rng;
use smallvec::{SmallVec, smallvec};

use crate::grid::VoterGrid;
use crate::partition::Partition;
use crate::types::Party;

/// Desirability of one district for the help party, given its net advantage.
///
/// Without `favor_tie` only outright wins count. With it, a tie is worth half
/// a win, so turning a loss into a tie (or keeping a tie out of loss) can
/// justify a swap on its own.
fn district_value(net: i32, favor_tie: bool) -> i32 {
    match (net, favor_tie) {
        (n, false) if n > 0 => 1,
        (n, true) if n > 0 => 2,
        (0, true) => 1,
        _ => 0,
    }
}

impl Partition {
    /// One swap attempt biased toward `help`: pick a random voter and a random
    /// cross-district 4-neighbor, and exchange their memberships if doing so
    /// strictly improves the two districts' combined value for the help party.
    ///
    /// Equal-value candidates are rejected; only strict improvements commit.
    /// The search retries with fresh voters up to one attempt per voter in the
    /// grid, then gives up. An exhausted budget is a silent no-op: the returned
    /// set is empty and no state has changed.
    pub(crate) fn search_swap<R: Rng + ?Sized>(
        &mut self,
        grid: &VoterGrid,
        rng: &mut R,
        help: Party,
        favor_tie: bool,
    ) -> SmallVec<[u32; 2]> {
        let budget = grid.len();

        for _ in 0..budget {
            let a = rng.random_range(0..grid.len());
            let da = self.assignment(a);

            // Candidate partners: grid-adjacent voters in another district.
            let partners = grid.neighbors(a)
                .filter(|&v| self.assignment(v) != da)
                .collect::<SmallVec<[usize; 4]>>();
            if partners.is_empty() { continue } // interior voter, try another
            let b = partners[rng.random_range(0..partners.len())];
            let db = self.assignment(b);

            // A same-party trade cannot move either lean.
            let delta = grid.party(b).lean_value() - grid.party(a).lean_value();
            if delta == 0 { continue }

            // Hypothetical post-swap advantage for both districts.
            let net_a = (self.lean(da) + delta) * help.lean_value();
            let net_b = (self.lean(db) - delta) * help.lean_value();

            let before = district_value(self.net_advantage(da, help), favor_tie)
                + district_value(self.net_advantage(db, help), favor_tie);
            let after = district_value(net_a, favor_tie) + district_value(net_b, favor_tie);
            if after <= before { continue }

            let (d1, d2) = self.exchange(grid, a, b);
            return smallvec![d1, d2];
        }

        SmallVec::new()
    }
}
