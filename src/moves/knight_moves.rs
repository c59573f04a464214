//! Knight jump offsets.

use crate::game_state::chess_types::Square;

/// L-shaped `(d_row, d_col)` jumps.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// On-board knight destinations from `square`, occupancy ignored.
#[inline]
pub fn knight_targets(square: Square) -> impl Iterator<Item = Square> {
    KNIGHT_OFFSETS
        .into_iter()
        .filter_map(move |(d_row, d_col)| square.offset(d_row, d_col))
}

#[cfg(test)]
mod tests {
    use super::knight_targets;
    use crate::game_state::chess_types::Square;

    #[test]
    fn knight_targets_from_center_and_corner() {
        let d4 = Square::new(4, 3);
        assert_eq!(knight_targets(d4).count(), 8);
        let a1 = Square::new(7, 0);
        let targets: Vec<Square> = knight_targets(a1).collect();
        assert_eq!(targets.len(), 2);
        assert!(targets.contains(&Square::new(5, 1)));
        assert!(targets.contains(&Square::new(6, 2)));
    }
}
