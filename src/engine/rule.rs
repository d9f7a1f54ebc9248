use std::sync::OnceLock;

/// Neighbor counts range over `0..=8`
const NEIGHBOR_COUNTS: usize = 9;
/// One row of outcomes for dead cells, one for live cells
const PERMUTATIONS: usize = 2 * NEIGHBOR_COUNTS;
type RuleTable = [bool; PERMUTATIONS];

/// Returns whether a cell is alive in the next generation
///
/// `alive` is the cell's current state and `neighbors` the number of live
/// cells in its Moore neighborhood.
#[inline]
pub(super) fn next_state(alive: bool, neighbors: u8) -> bool {
    debug_assert!(neighbors <= 8, "neighbor count out of range");
    get_rule_table()[table_index(alive, neighbors)]
}

#[inline]
fn table_index(alive: bool, neighbors: u8) -> usize {
    usize::from(alive) * NEIGHBOR_COUNTS + usize::from(neighbors)
}

/// Returns a Singleton lookup table for the B3/S23 ruleset
///
/// Equivalent to calling [`generate_rule_table`] once and storing the result
fn get_rule_table() -> &'static RuleTable {
    static CELL: OnceLock<RuleTable> = OnceLock::new();
    CELL.get_or_init(generate_rule_table)
}

/// Creates the lookup table for the B3/S23 ruleset
///
/// A cell is alive next generation iff it has exactly 3 live neighbors, or
/// it is alive now and has exactly 2.
fn generate_rule_table() -> RuleTable {
    let mut table = [false; PERMUTATIONS];
    for alive in [false, true] {
        for neighbors in 0..NEIGHBOR_COUNTS as u8 {
            table[table_index(alive, neighbors)] = match (alive, neighbors) {
                (true, 2) | (_, 3) => true,
                _ => false,
            };
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rules_match_conway_life() {
        assert!(next_state(true, 2));
        assert!(next_state(true, 3));
        assert!(next_state(false, 3));

        assert!(!next_state(true, 0));
        assert!(!next_state(true, 1));
        assert!(!next_state(true, 4));
        assert!(!next_state(false, 2));
        assert!(!next_state(false, 4));
    }

    #[test]
    fn only_three_births_and_two_three_survivals() {
        let table = generate_rule_table();
        let births: Vec<u8> = (0..=8).filter(|&n| table[table_index(false, n)]).collect();
        let survivals: Vec<u8> = (0..=8).filter(|&n| table[table_index(true, n)]).collect();

        assert_eq!(births, vec![3]);
        assert_eq!(survivals, vec![2, 3]);
    }
}
