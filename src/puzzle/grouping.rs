//! Grouping solutions by rotation and flip equivalence

use super::solution::Solution;
use super::symmetry::{flip_horizontal, flip_vertical, rotate_clockwise};

/// Partition solutions into groups of boards that are transformations of one
/// another.
///
/// Two boards belong together when one equals the other rotated clockwise by
/// 0, 90, 180 or 270 degrees, either as-is or followed by a single flip
/// across the vertical or horizontal axis. Each incoming board is compared
/// against the first member of every existing group in order and joins the
/// first group that matches; when none does, it opens a new group. Group
/// order follows first occurrence and members keep their input order, so the
/// output is a total, disjoint partition of the input.
///
/// # Examples
///
/// ```
/// use queens::puzzle::{find_all_queen_placements, group_similar_boards};
///
/// let solutions = find_all_queen_placements();
/// let groups = group_similar_boards(&solutions);
/// assert_eq!(groups.len(), 12);
/// ```
pub fn group_similar_boards(solutions: &[Solution]) -> Vec<Vec<Solution>> {
    let mut groups: Vec<Vec<Solution>> = Vec::new();

    for solution in solutions {
        match groups.iter_mut().find(|group| is_similar(solution, &group[0])) {
            Some(group) => group.push(solution.clone()),
            None => groups.push(vec![solution.clone()]),
        }
    }

    groups
}

/// Test `candidate` against the representative's rotation orbit, checking
/// each rotation step as-is and under each single axis flip.
fn is_similar(candidate: &Solution, representative: &Solution) -> bool {
    let target = candidate.cells();
    let mut transformed = representative.cells().clone();

    for _ in 0..4 {
        if *target == transformed
            || *target == flip_vertical(&transformed)
            || *target == flip_horizontal(&transformed)
        {
            return true;
        }

        transformed = rotate_clockwise(&transformed);
    }

    false
}
