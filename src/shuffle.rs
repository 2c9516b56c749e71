use log::debug;
use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

use crate::data::{Pos, DIRECTIONS};
use crate::state::PuzzleState;

/// Makes `move_count` blank moves from `start`, each picked uniformly from the legal ones.
///
/// Moves never change solvability so if `start` is solvable (e.g. the goal),
/// so is the result. Undoing the previous move is allowed.
pub fn random_walk<'a, R: Rng + ?Sized>(
    start: &PuzzleState<'_>,
    move_count: usize,
    rng: &mut R,
) -> PuzzleState<'a> {
    let size = start.size();
    let mut tiles = start.tiles().to_vec();
    let mut blank = Pos::from_index(start.blank_pos(), size);

    let mut targets = Vec::with_capacity(DIRECTIONS.len());
    for _ in 0..move_count {
        targets.clear();
        targets.extend(DIRECTIONS.iter().filter_map(|&dir| blank.step(dir, size)));
        // at least 2 on any board we allow
        if let Some(&target) = targets.choose(rng) {
            tiles.swap(blank.index(size), target.index(size));
            blank = target;
        }
    }

    debug!("Shuffled {}x{} board with {} moves", size, size, move_count);
    PuzzleState::root(size, tiles, blank.index(size))
}

/// Random solvable board `move_count` moves away from `state`
pub fn generate_random_solvable<'a>(state: &PuzzleState<'_>, move_count: usize) -> PuzzleState<'a> {
    random_walk(state, move_count, &mut thread_rng())
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn shuffled_boards_are_solvable() {
        let mut rng = StdRng::seed_from_u64(42);
        for size in 2..=6 {
            let goal = PuzzleState::goal(size).unwrap();
            for &moves in &[0, 1, 7, 50, 333] {
                let shuffled = random_walk(&goal, moves, &mut rng);
                assert!(shuffled.is_solvable(), "{}", shuffled);
                assert_eq!(shuffled.size(), size);
                assert_eq!(shuffled.depth(), 0);
                assert!(shuffled.parent().is_none());
                assert_eq!(shuffled.tiles()[shuffled.blank_pos()], 0);
            }
        }
    }

    #[test]
    fn zero_moves_is_identity() {
        let goal = PuzzleState::goal(4).unwrap();
        let same = random_walk(&goal, 0, &mut StdRng::seed_from_u64(1));
        assert_eq!(same, goal);
    }

    #[test]
    fn one_move_is_a_neighbor() {
        let goal = PuzzleState::goal(3).unwrap();
        let neighbors: Vec<_> = goal
            .valid_moves()
            .into_iter()
            .filter_map(|dir| goal.apply(dir))
            .collect();
        for seed in 0..20 {
            let shuffled = random_walk(&goal, 1, &mut StdRng::seed_from_u64(seed));
            assert!(neighbors.contains(&shuffled));
        }
    }

    #[test]
    fn seeded_walks_are_reproducible() {
        let goal = PuzzleState::goal(5).unwrap();
        let a = random_walk(&goal, 250, &mut StdRng::seed_from_u64(7));
        let b = random_walk(&goal, 250, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn shuffling_via_state() {
        let goal = PuzzleState::goal(4).unwrap();
        let shuffled = goal.shuffle(160, &mut StdRng::seed_from_u64(3));
        assert!(shuffled.is_solvable());
        assert!(generate_random_solvable(&goal, 160).is_solvable());
    }
}
