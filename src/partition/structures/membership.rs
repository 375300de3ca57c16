/// Membership maintains a total assignment of voters to districts,
/// with O(1) find/exchange and per-district member lists.
#[derive(Debug, Clone)]
pub(crate) struct Membership {
    members: Vec<Vec<usize>>, // members[d] = voters currently in district d
    district: Vec<u32>,       // district[v] = d when v is in members[d]
    position: Vec<usize>,     // position[v] = i when members[d][i] is v
}

impl Membership {
    /// Build a membership table from a complete assignment slice.
    pub(crate) fn from_assignments(num_districts: usize, assignments: &[u32]) -> Self {
        assert!(num_districts > 0, "must have at least one district");

        let mut members = vec![Vec::new(); num_districts];
        let mut position = vec![0; assignments.len()];
        for (voter, &district) in assignments.iter().enumerate() {
            assert!((district as usize) < num_districts, "district out of range");
            position[voter] = members[district as usize].len();
            members[district as usize].push(voter);
        }

        Self { members, district: assignments.to_vec(), position }
    }

    /// Number of districts.
    #[inline] pub fn num_districts(&self) -> usize { self.members.len() }

    /// Universe size (number of voters addressable by index).
    #[inline] pub fn num_voters(&self) -> usize { self.district.len() }

    /// Return the district that `voter` currently belongs to.
    #[inline]
    pub fn find(&self, voter: usize) -> u32 {
        debug_assert!(voter < self.district.len(), "voter out of range");
        self.district[voter]
    }

    /// Returns a reference to the voters currently in `district`.
    #[inline]
    pub fn get(&self, district: u32) -> &[usize] {
        debug_assert!((district as usize) < self.members.len(), "district out of range");
        &self.members[district as usize]
    }

    /// Get a complete slice of assignments for each voter.
    #[inline] pub fn assignments(&self) -> &[u32] { &self.district }

    /// Exchange the district memberships of voters `a` and `b` in place.
    /// Each takes the other's member-list slot, so district sizes never change.
    /// Panics if both voters are in the same district.
    pub(crate) fn exchange(&mut self, a: usize, b: usize) {
        debug_assert!(a < self.district.len(), "voter out of range");
        debug_assert!(b < self.district.len(), "voter out of range");

        let (da, db) = (self.district[a], self.district[b]);
        assert!(da != db, "voters must be in different districts");

        let (pa, pb) = (self.position[a], self.position[b]);
        self.members[da as usize][pa] = b;
        self.members[db as usize][pb] = a;
        self.district.swap(a, b);
        self.position.swap(a, b);
    }
}
