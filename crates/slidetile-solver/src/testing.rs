//! Test utilities: a brute-force reference solver and board strategies.
//!
//! The reference solver is a plain breadth-first search, used to check that
//! the A* results are optimal.

use std::{
    collections::{HashMap, VecDeque},
    sync::OnceLock,
};

use proptest::prelude::*;
use slidetile_core::{Board, Direction, Slide};

/// Returns the shortest slide count from `board` to the goal, or `None` if the
/// goal is unreachable.
///
/// Explores the whole reachable component in the worst case, so keep it to
/// small boards.
pub(crate) fn bfs_distance(board: &Board) -> Option<usize> {
    let mut distances = HashMap::from([(board.clone(), 0)]);
    let mut queue = VecDeque::from([board.clone()]);
    while let Some(current) = queue.pop_front() {
        let distance = distances[&current];
        if current.is_goal() {
            return Some(distance);
        }
        for (_, next) in current.successors() {
            distances.entry(next).or_insert_with_key(|next| {
                queue.push_back(next.clone());
                distance + 1
            });
        }
    }
    None
}

/// Distance to the goal of every solvable 3×3 board, computed once by a
/// breadth-first search outward from the goal.
pub(crate) fn goal_distances_3x3() -> &'static HashMap<Board, usize> {
    static DISTANCES: OnceLock<HashMap<Board, usize>> = OnceLock::new();
    DISTANCES.get_or_init(|| {
        let goal = Board::goal(3);
        let mut distances = HashMap::from([(goal.clone(), 0)]);
        let mut queue = VecDeque::from([goal]);
        while let Some(current) = queue.pop_front() {
            let distance = distances[&current];
            for (_, next) in current.successors() {
                distances.entry(next).or_insert_with_key(|next| {
                    queue.push_back(next.clone());
                    distance + 1
                });
            }
        }
        distances
    })
}

/// Applies `slides` to `board` in order and returns the final board.
///
/// # Panics
///
/// Panics if any slide is illegal at the point it is applied.
#[track_caller]
pub(crate) fn replay<I>(board: &Board, slides: I) -> Board
where
    I: IntoIterator<Item = Slide>,
{
    slides.into_iter().fold(board.clone(), |current, slide| {
        current
            .apply(slide)
            .unwrap_or_else(|err| panic!("cannot apply {slide} to\n{current}\n{err}"))
    })
}

/// Every ordering of the tiles `0..len`.
pub(crate) fn all_permutations(len: u16) -> Vec<Vec<u16>> {
    if len == 0 {
        return vec![Vec::new()];
    }
    let mut result = Vec::new();
    for shorter in all_permutations(len - 1) {
        for i in 0..=shorter.len() {
            let mut tiles = shorter.clone();
            tiles.insert(i, len - 1);
            result.push(tiles);
        }
    }
    result
}

/// Strategy producing uniformly shuffled tiles for an N×N board.
pub(crate) fn permutation(dimension: usize) -> impl Strategy<Value = Vec<u16>> {
    let len = u16::try_from(dimension * dimension).unwrap();
    Just((0..len).collect::<Vec<_>>()).prop_shuffle()
}

/// Strategy producing boards reached from the goal by up to `max_len` random slides.
///
/// Illegal directions are skipped, so the result is always solvable.
pub(crate) fn random_walk(dimension: usize, max_len: usize) -> impl Strategy<Value = Board> {
    prop::collection::vec(prop::sample::select(Direction::ALL.to_vec()), 0..=max_len).prop_map(
        move |directions| {
            directions
                .into_iter()
                .fold(Board::goal(dimension), |board, direction| {
                    board.slide(direction).unwrap_or(board)
                })
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bfs_distance_on_known_boards() {
        assert_eq!(bfs_distance(&Board::goal(3)), Some(0));
        let two = Board::from_tiles(&[1, 2, 3, 4, 0, 5, 7, 8, 6]).unwrap();
        assert_eq!(bfs_distance(&two), Some(2));
        let swapped = Board::from_tiles(&[2, 1, 3, 0]).unwrap();
        assert_eq!(bfs_distance(&swapped), None);
    }

    #[test]
    fn test_all_permutations_counts() {
        assert_eq!(all_permutations(4).len(), 24);
        let mut sorted = all_permutations(3);
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 6);
    }

    #[test]
    fn test_goal_distance_table_agrees_with_bfs() {
        let table = goal_distances_3x3();
        let board = Board::from_tiles(&[4, 1, 3, 7, 2, 6, 0, 5, 8]).unwrap();
        assert_eq!(Some(table[&board]), bfs_distance(&board));
    }
}
