use crate::grid::VoterGrid;
use crate::partition::Membership;

/// Axis-aligned bounds of one district in grid coordinates (max-exclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistrictBounds {
    pub x1: usize,
    pub y1: usize,
    pub x2: usize,
    pub y2: usize,
}

/// A fixed decomposition of the voter grid into equal square districts,
/// with a cached signed lean per district.
///
/// The lean of a district is (#Blue - #Red) among its members. It is updated
/// incrementally on every exchange and must always equal a fresh recount.
#[derive(Debug, Clone)]
pub struct Partition {
    pub(super) membership: Membership,
    pub(super) leans: Vec<i32>,
    bounds: Vec<DistrictBounds>,
    district_size: usize,
}

impl Partition {
    /// Tile `grid` into square districts of `district_size` voters each,
    /// assigning every voter to exactly one district and counting leans.
    ///
    /// Geometry must already be validated; sizes that do not tile panic.
    pub(crate) fn build(grid: &VoterGrid, district_size: usize) -> Self {
        let side = district_size.isqrt();
        assert!(side * side == district_size, "district_size must be a perfect square");
        assert!(side > 0 && grid.width() % side == 0, "grid width must be a multiple of the district side");

        let per_row = grid.width() / side;
        let num_districts = per_row * per_row;

        let assignments = (0..grid.len())
            .map(|voter| {
                let (x, y) = grid.position(voter);
                ((y / side) * per_row + (x / side)) as u32
            })
            .collect::<Vec<_>>();
        let membership = Membership::from_assignments(num_districts, &assignments);

        let leans = (0..num_districts)
            .map(|district| {
                membership.get(district as u32).iter()
                    .map(|&voter| grid.party(voter).lean_value())
                    .sum()
            })
            .collect();

        let bounds = (0..num_districts)
            .map(|district| {
                let (dx, dy) = (district % per_row, district / per_row);
                DistrictBounds {
                    x1: dx * side,
                    y1: dy * side,
                    x2: (dx + 1) * side,
                    y2: (dy + 1) * side,
                }
            })
            .collect();

        Self { membership, leans, bounds, district_size }
    }

    /// Number of districts in this partition.
    #[inline] pub fn num_districts(&self) -> usize { self.membership.num_districts() }

    /// Number of voters every district holds, before and after any swap.
    #[inline] pub fn district_size(&self) -> usize { self.district_size }

    /// Number of voters in the underlying grid.
    #[inline] pub fn num_voters(&self) -> usize { self.membership.num_voters() }

    /// Get the district assignment of a given voter.
    #[inline] pub fn assignment(&self, voter: usize) -> u32 { self.membership.find(voter) }

    /// Get a complete slice of assignments for each voter.
    #[inline] pub fn assignments(&self) -> &[u32] { self.membership.assignments() }

    /// Get the current members of a given district.
    #[inline] pub fn members(&self, district: u32) -> &[usize] { self.membership.get(district) }

    /// Cached signed lean of a district (#Blue - #Red among members).
    #[inline]
    pub fn lean(&self, district: u32) -> i32 {
        debug_assert!((district as usize) < self.leans.len(), "district out of range");
        self.leans[district as usize]
    }

    /// Grid-coordinate bounds of the square a district started from.
    #[inline]
    pub fn bounds(&self, district: u32) -> DistrictBounds {
        self.bounds[district as usize]
    }

    /// Literal recount of a district's lean over its current members.
    /// The cached value must always agree with this; used for checks and tests.
    pub fn recount(&self, grid: &VoterGrid, district: u32) -> i32 {
        self.members(district).iter()
            .map(|&voter| grid.party(voter).lean_value())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn build(width: usize, district_size: usize) -> (VoterGrid, Partition) {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = VoterGrid::generate(width, &mut rng);
        let partition = Partition::build(&grid, district_size);
        (grid, partition)
    }

    #[test]
    fn build_tiles_grid_exactly() {
        let (grid, partition) = build(6, 9);
        assert_eq!(partition.num_districts(), 4);

        // every voter in exactly one district, every district full
        let mut seen = vec![0u32; grid.len()];
        for district in 0..partition.num_districts() as u32 {
            assert_eq!(partition.members(district).len(), 9);
            for &voter in partition.members(district) {
                seen[voter] += 1;
            }
        }
        assert!(seen.iter().all(|&n| n == 1));
    }

    #[test]
    fn build_assigns_by_square_blocks() {
        let (grid, partition) = build(4, 4);
        // voters of the top-left 2x2 block share district 0
        assert_eq!(partition.assignment(grid.index(0, 0)), 0);
        assert_eq!(partition.assignment(grid.index(1, 0)), 0);
        assert_eq!(partition.assignment(grid.index(0, 1)), 0);
        assert_eq!(partition.assignment(grid.index(1, 1)), 0);
        // and the bottom-right block shares district 3
        assert_eq!(partition.assignment(grid.index(2, 2)), 3);
        assert_eq!(partition.assignment(grid.index(3, 3)), 3);
    }

    #[test]
    fn build_counts_leans_correctly() {
        let (grid, partition) = build(6, 4);
        for district in 0..partition.num_districts() as u32 {
            assert_eq!(partition.lean(district), partition.recount(&grid, district));
        }
    }

    #[test]
    fn bounds_cover_the_grid() {
        let (_, partition) = build(6, 9);
        let area: usize = (0..partition.num_districts() as u32)
            .map(|d| {
                let b = partition.bounds(d);
                (b.x2 - b.x1) * (b.y2 - b.y1)
            })
            .sum();
        assert_eq!(area, 36);
    }

    #[test]
    #[should_panic(expected = "district_size must be a perfect square")]
    fn build_panics_on_non_square_district() {
        build(6, 8);
    }
}
