//! Adjacency on the 3x3 grid.

use super::super::Position;

/// True iff cells `i` and `j` are at Chebyshev distance at most one.
///
/// Indices outside 0-8 are never adjacent to anything. A cell is adjacent
/// to itself; the engine never asks that because destinations must be empty.
pub fn is_adjacent(i: usize, j: usize) -> bool {
    match (Position::from_index(i), Position::from_index(j)) {
        (Some(a), Some(b)) => a.is_adjacent(b),
        _ => false,
    }
}
