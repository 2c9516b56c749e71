pub mod stats;

mod node;

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use fnv::FnvHashSet;
use log::{debug, info, trace};
use typed_arena::Arena;

use crate::heuristic::Heuristic;
use crate::state::PuzzleState;

use self::node::SearchNode;
use self::stats::Stats;

/// Greedy best-first search - the frontier is ordered by the heuristic alone,
/// path length is ignored so the solution is not necessarily the shortest.
///
/// Every state the search creates is allocated in `arena`, the returned goal
/// borrows from it and its `path()` leads back to `initial`.
///
/// Returns `None` when the frontier runs out or after `max_nodes` pops,
/// the latter is recognizable by `stats.nodes_expanded == max_nodes`.
/// Unsolvable boards are not detected, check `is_solvable` first.
pub fn search<'a, H: Heuristic + ?Sized>(
    arena: &'a Arena<PuzzleState<'a>>,
    initial: PuzzleState<'a>,
    heuristic: &H,
    max_nodes: usize,
) -> (Option<&'a PuzzleState<'a>>, Stats) {
    debug!(
        "Search called: {}, max nodes {}",
        heuristic.name(),
        max_nodes
    );

    let mut stats = Stats::default();

    let mut to_visit = BinaryHeap::new();
    let mut closed: FnvHashSet<&'a PuzzleState<'a>> = FnvHashSet::default();

    let start: &'a PuzzleState<'a> = arena.alloc(initial);
    let h = heuristic.estimate(start);
    stats.start_heuristic = h;
    stats.end_heuristic = h;
    stats.created += 1;
    to_visit.push(Reverse(SearchNode::new(h, 0, start)));
    let mut next_seq = 1;

    loop {
        stats.max_queue_size = stats.max_queue_size.max(to_visit.len());
        let cur = match to_visit.pop() {
            Some(Reverse(node)) => node,
            None => break,
        };
        stats.nodes_expanded += 1;
        stats.nodes_explored_at_steps.push(stats.nodes_expanded);
        trace!("Expanding {:?}", cur);

        if cur.state.is_goal() {
            stats.end_heuristic = 0;
            debug!(
                "Solved at depth {} after {} expansions",
                cur.state.depth(),
                stats.nodes_expanded
            );
            return (Some(cur.state), stats);
        }
        stats.end_heuristic = cur.h;

        // duplicates are only filtered here, not when pushing
        let unique = closed.insert(cur.state);

        // checked for duplicates too so expansions never exceed the limit
        if stats.nodes_expanded >= max_nodes {
            debug!("Reached node limit, last h: {}", cur.h);
            return (None, stats);
        }

        if !unique {
            stats.duplicates += 1;
            continue;
        }

        if stats.nodes_expanded % 100_000 == 0 {
            info!(
                "Expanded {} nodes, frontier {}, current h: {}",
                stats.nodes_expanded,
                to_visit.len(),
                cur.h
            );
        }

        for dir in cur.state.valid_moves() {
            let neighbor = match cur.state.apply(dir) {
                Some(neighbor) => neighbor,
                None => continue,
            };
            if closed.contains(&neighbor) {
                continue;
            }

            let h = heuristic.estimate(&neighbor);
            let neighbor: &'a PuzzleState<'a> = arena.alloc(neighbor);
            stats.created += 1;
            to_visit.push(Reverse(SearchNode::new(h, next_seq, neighbor)));
            next_seq += 1;
        }
    }

    debug!("Frontier exhausted after {} expansions", stats.nodes_expanded);
    (None, stats)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::config::HeuristicKind;
    use crate::heuristic::{LinearConflict, ManhattanDistance, MisplacedTiles, NilssonSequence};
    use crate::shuffle::random_walk;

    fn state(tiles: &[usize]) -> PuzzleState<'static> {
        PuzzleState::from_tiles(3, tiles).unwrap()
    }

    #[test]
    fn already_solved() {
        let arena = Arena::new();
        let goal = PuzzleState::goal(4).unwrap();
        let (solution, stats) = search(&arena, goal, &ManhattanDistance, 10);
        let solution = solution.unwrap();
        assert_eq!(solution.depth(), 0);
        assert_eq!(solution.path().len(), 1);
        assert_eq!(stats.nodes_expanded, 1);
        assert_eq!(stats.created, 1);
        assert_eq!(stats.start_heuristic, 0);
        assert_eq!(stats.end_heuristic, 0);
    }

    #[test]
    fn one_move() {
        let arena = Arena::new();
        let start = state(&[1, 2, 3, 4, 5, 6, 7, 0, 8]);
        let (solution, stats) = search(&arena, start, &ManhattanDistance, 100_000);
        let solution = solution.unwrap();
        assert!(solution.is_goal());
        assert_eq!(solution.depth(), 1);
        assert_eq!(solution.moves().to_string(), "r");
        assert_eq!(stats.nodes_expanded, 2);
        assert_eq!(stats.start_heuristic, 1);
        assert_eq!(stats.end_heuristic, 0);
    }

    #[test]
    fn few_moves() {
        let arena = Arena::new();
        let start = state(&[1, 2, 3, 0, 4, 6, 7, 5, 8]);
        let (solution, stats) = search(&arena, start.clone(), &ManhattanDistance, 100_000);
        let solution = solution.unwrap();

        let path = solution.path();
        assert_eq!(path[0].depth(), 0);
        assert_eq!(path[0], &start);
        assert!(path.last().unwrap().is_goal());
        assert_eq!(solution.depth(), 3);
        assert_eq!(path.len(), 4);
        assert_eq!(solution.moves().to_string(), "rdr");

        assert_eq!(stats.nodes_expanded, 4);
        assert_eq!(stats.created, 9);
        assert_eq!(stats.max_queue_size, 6);
        assert_eq!(stats.duplicates, 0);
        assert_eq!(stats.start_heuristic, 3);
        assert_eq!(stats.nodes_explored_at_steps, vec![1, 2, 3, 4]);
    }

    #[test]
    fn path_is_connected() {
        let mut rng = StdRng::seed_from_u64(5);
        let goal = PuzzleState::goal(3).unwrap();
        let start = random_walk(&goal, 60, &mut rng);

        let arena = Arena::new();
        let (solution, _) = search(&arena, start.clone(), &LinearConflict, 1_000_000);
        let solution = solution.unwrap();

        let path = solution.path();
        assert_eq!(path[0], &start);
        assert!(path.last().unwrap().is_goal());
        for (i, pair) in path.windows(2).enumerate() {
            let child = pair[0].apply(pair[1].dir().unwrap()).unwrap();
            assert_eq!(&child, pair[1]);
            assert_eq!(pair[1].depth() as usize, i + 1);
        }
        assert_eq!(solution.moves().len(), path.len() - 1);
    }

    #[test]
    fn every_heuristic_solves_3x3() {
        // more than the number of states and pushes so it must terminate with a solution
        const LIMIT: usize = 1_000_000;

        let mut rng = StdRng::seed_from_u64(11);
        let goal = PuzzleState::goal(3).unwrap();
        for _ in 0..3 {
            let start = random_walk(&goal, 90, &mut rng);
            for kind in HeuristicKind::ALL.iter() {
                let arena = Arena::new();
                let (solution, stats) = search(&arena, start.clone(), kind.heuristic(), LIMIT);
                let solution = solution.unwrap();
                assert!(solution.is_goal(), "{}", kind);
                assert_eq!(stats.end_heuristic, 0);
                assert!(stats.nodes_expanded > 0 && stats.nodes_expanded < LIMIT);
                assert_eq!(stats.nodes_explored_at_steps.len(), stats.nodes_expanded);
                assert_eq!(solution.path()[0], &start);
            }
        }
    }

    #[test]
    fn node_limit() {
        // every tile far from home
        let start = PuzzleState::from_tiles(
            4,
            &[0, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6, 5, 4, 3, 2, 1],
        )
        .unwrap();
        assert!(start.is_solvable());

        let arena = Arena::new();
        let h = ManhattanDistance.estimate(&start);
        let (solution, stats) = search(&arena, start, &ManhattanDistance, 10);
        assert!(solution.is_none());
        assert_eq!(stats.nodes_expanded, 10);
        assert_eq!(stats.start_heuristic, h);
        assert!(stats.end_heuristic > 0);
        assert!(stats.created >= 10);
    }

    #[test]
    fn unsolvable_hits_node_limit() {
        for tiles in [[1, 2, 3, 4, 5, 6, 8, 7, 0], [1, 2, 3, 6, 4, 0, 7, 5, 8]].iter() {
            let start = state(tiles);
            assert!(!start.is_solvable());

            let arena = Arena::new();
            let (solution, stats) = search(&arena, start, &MisplacedTiles, 1000);
            assert!(solution.is_none());
            assert_eq!(stats.nodes_expanded, 1000);
        }
    }

    #[test]
    fn unsolvable_exhausts_frontier() {
        // 2x2 has only 12 reachable boards
        let start = PuzzleState::from_tiles(2, &[2, 1, 3, 0]).unwrap();
        assert!(!start.is_solvable());

        let arena = Arena::new();
        let (solution, stats) = search(&arena, start, &NilssonSequence, 1000);
        assert!(solution.is_none());
        assert!(stats.nodes_expanded < 1000);
        assert_eq!(stats.unique_expanded(), 12);
        assert_eq!(stats.left_in_queue(), 0);
    }

    #[test]
    fn deterministic() {
        let goal = PuzzleState::goal(4).unwrap();
        let start = random_walk(&goal, 40, &mut StdRng::seed_from_u64(99));

        let arena1 = Arena::new();
        let (solution1, stats1) = search(&arena1, start.clone(), &ManhattanDistance, 200_000);
        let arena2 = Arena::new();
        let (solution2, stats2) = search(&arena2, start, &ManhattanDistance, 200_000);

        assert_eq!(stats1, stats2);
        assert_eq!(
            solution1.map(|s| s.moves()),
            solution2.map(|s| s.moves())
        );
    }

    #[test]
    fn trait_objects() {
        let arena = Arena::new();
        let heuristic: &dyn Heuristic = &LinearConflict;
        let start = state(&[1, 2, 3, 4, 5, 6, 7, 0, 8]);
        let (solution, _) = search(&arena, start, heuristic, 100);
        assert_eq!(solution.unwrap().depth(), 1);
    }
}
