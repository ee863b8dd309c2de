//! First-occurrence linear search.

/// Sentinel shown to operators when a search finds nothing.
pub const NOT_FOUND: i64 = -1;

/// Index of the first element equal to `target` at or after `start`.
///
/// A `start` past the end of `numbers` finds nothing.
#[must_use]
pub fn linear_search(numbers: &[i64], target: i64, start: usize) -> Option<usize> {
    numbers
        .get(start..)?
        .iter()
        .position(|&n| n == target)
        .map(|offset| start + offset)
}

/// Render a search result using the [`NOT_FOUND`] sentinel.
#[must_use]
pub fn as_sentinel(result: Option<usize>) -> i64 {
    result.map_or(NOT_FOUND, |index| index as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ODDS: [i64; 8] = [1, 3, 5, 7, 9, 11, 13, 15];

    #[test]
    fn finds_target_in_sorted_list() {
        assert_eq!(linear_search(&ODDS, 7, 0), Some(3));
    }

    #[test]
    fn returns_first_occurrence() {
        assert_eq!(linear_search(&[4, 2, 4, 2], 2, 0), Some(1));
    }

    #[test]
    fn honours_start_index() {
        assert_eq!(linear_search(&[4, 2, 4, 2], 4, 1), Some(2));
        assert_eq!(linear_search(&[4, 2, 4, 2], 4, 3), None);
    }

    #[test]
    fn absent_target_is_not_found() {
        assert_eq!(linear_search(&ODDS, 8, 0), None);
        assert_eq!(as_sentinel(linear_search(&ODDS, 8, 0)), NOT_FOUND);
    }

    #[test]
    fn start_beyond_end_is_not_found() {
        assert_eq!(linear_search(&ODDS, 1, ODDS.len()), None);
        assert_eq!(linear_search(&ODDS, 1, ODDS.len() + 5), None);
        assert_eq!(linear_search(&[], 1, 0), None);
    }

    #[test]
    fn sentinel_passes_indices_through() {
        assert_eq!(as_sentinel(Some(3)), 3);
    }
}
