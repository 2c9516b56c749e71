//! Parity test deciding whether a board can reach the goal at all.
//!
//! Every move keeps the parity of the inversion count on odd boards
//! (a horizontal move changes nothing, a vertical one jumps over an even number of tiles).
//! On even boards a vertical move flips both the inversion parity and the parity
//! of the blank's row, so their sum is what stays constant.

use crate::state::PuzzleState;

/// Number of pairs of non-blank tiles that are in the wrong relative order
pub fn inversions(tiles: &[u8]) -> usize {
    let mut cnt = 0;
    for (i, &a) in tiles.iter().enumerate() {
        if a == 0 {
            continue;
        }
        cnt += tiles[i + 1..].iter().filter(|&&b| b != 0 && a > b).count();
    }
    cnt
}

pub fn is_solvable(state: &PuzzleState<'_>) -> bool {
    let size = state.size();
    let inversions = inversions(state.tiles());
    if size % 2 == 1 {
        inversions % 2 == 0
    } else {
        // 1-indexed, the goal has the blank on row 1 and no inversions
        let blank_row_from_bottom = size - state.blank_pos() / size;
        (inversions + blank_row_from_bottom) % 2 == 1
    }
}
