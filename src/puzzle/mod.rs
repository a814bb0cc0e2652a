//! The 15-puzzle: a 4×4 sliding-tile board.
//!
//! Cells are stored row-major, `0` marks the empty slot. The board only
//! changes by swapping the empty slot with an orthogonal neighbour or by a
//! full reshuffle, so exactly one empty slot exists at all times.

use std::fmt;

use rand::RngExt;

/// Tiles per side.
pub const SIDE: usize = 4;

/// Total cells on the board.
pub const CELLS: usize = SIDE * SIDE;

/// Marker value for the empty slot.
pub const EMPTY: u8 = 0;

/// The arrangement that counts as solved.
pub const SOLVED: [u8; CELLS] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, EMPTY];

/// What a call to [`Board::move_tile`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Index was empty, out of range, or not next to the empty slot.
    Ignored,
    /// Tile slid into the empty slot.
    Moved,
    /// Tile slid and the board is now solved, after `moves` moves.
    Solved { moves: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tiles: [u8; CELLS],
    empty: usize,
    moves: u32,
}

impl Board {
    /// A solved board with no moves made.
    pub fn new() -> Self {
        Self {
            tiles: SOLVED,
            empty: CELLS - 1,
            moves: 0,
        }
    }

    /// Build a board from an explicit arrangement. Returns `None` unless the
    /// cells are exactly a permutation of `0..=15`.
    pub fn from_tiles(tiles: [u8; CELLS]) -> Option<Self> {
        let mut seen = [false; CELLS];
        for &tile in &tiles {
            let slot = seen.get_mut(tile as usize)?;
            if *slot {
                return None;
            }
            *slot = true;
        }
        let empty = tiles.iter().position(|&t| t == EMPTY)?;
        Some(Self {
            tiles,
            empty,
            moves: 0,
        })
    }

    pub fn tiles(&self) -> &[u8; CELLS] {
        &self.tiles
    }

    pub fn empty_index(&self) -> usize {
        self.empty
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn is_solved(&self) -> bool {
        self.tiles == SOLVED
    }

    /// Cell index currently holding `tile`, if it is on the board.
    pub fn position_of(&self, tile: u8) -> Option<usize> {
        self.tiles.iter().position(|&t| t == tile)
    }

    /// Shuffle with the thread-local RNG.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    /// Fisher–Yates over all 16 cells, then reset the move counter.
    ///
    /// Solvability is not checked: half of all permutations cannot be solved.
    pub fn shuffle_with<R: RngExt>(&mut self, rng: &mut R) {
        for i in (1..CELLS).rev() {
            let j = rng.random_range(0..=i);
            self.tiles.swap(i, j);
        }
        self.moves = 0;
        self.empty = self.position_of(EMPTY).unwrap_or(CELLS - 1);
    }

    /// Slide the tile at `index` into the empty slot if they are orthogonal
    /// neighbours.
    pub fn move_tile(&mut self, index: usize) -> MoveOutcome {
        if index >= CELLS || index == self.empty {
            return MoveOutcome::Ignored;
        }
        if !is_adjacent(index, self.empty) {
            return MoveOutcome::Ignored;
        }

        self.tiles.swap(index, self.empty);
        self.empty = index;
        self.moves += 1;

        if self.is_solved() {
            MoveOutcome::Solved { moves: self.moves }
        } else {
            MoveOutcome::Moved
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Row/column distance is exactly one along one axis and zero along the other.
fn is_adjacent(a: usize, b: usize) -> bool {
    let (row_a, col_a) = (a / SIDE, a % SIDE);
    let (row_b, col_b) = (b / SIDE, b % SIDE);
    let dr = row_a.abs_diff(row_b);
    let dc = col_a.abs_diff(col_b);
    (dr == 1 && dc == 0) || (dr == 0 && dc == 1)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(SIDE) {
            for &tile in row {
                if tile == EMPTY {
                    write!(f, "[  ]")?;
                } else {
                    write!(f, "[{tile:>2}]")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// One move away from solved: 15 and the empty slot are swapped.
    fn almost_solved() -> Board {
        let mut tiles = SOLVED;
        tiles.swap(14, 15);
        Board::from_tiles(tiles).unwrap()
    }

    #[test]
    fn new_board_is_solved() {
        let board = Board::new();
        assert!(board.is_solved());
        assert_eq!(board.empty_index(), 15);
        assert_eq!(board.moves(), 0);
    }

    #[test]
    fn from_tiles_rejects_duplicates() {
        let mut tiles = SOLVED;
        tiles[0] = 2;
        assert!(Board::from_tiles(tiles).is_none());
    }

    #[test]
    fn from_tiles_rejects_out_of_range() {
        let mut tiles = SOLVED;
        tiles[0] = 16;
        assert!(Board::from_tiles(tiles).is_none());
    }

    #[test]
    fn from_tiles_finds_empty_slot() {
        let board = almost_solved();
        assert_eq!(board.empty_index(), 14);
    }

    #[test]
    fn adjacency_is_orthogonal_only() {
        assert!(is_adjacent(5, 1));
        assert!(is_adjacent(5, 9));
        assert!(is_adjacent(5, 4));
        assert!(is_adjacent(5, 6));
        assert!(!is_adjacent(5, 0));
        assert!(!is_adjacent(5, 10));
        assert!(!is_adjacent(5, 5));
        assert!(!is_adjacent(5, 13));
    }

    #[test]
    fn adjacency_does_not_wrap_rows() {
        // 3 is the end of row 0, 4 the start of row 1.
        assert!(!is_adjacent(3, 4));
        assert!(!is_adjacent(7, 8));
    }

    #[test]
    fn clicking_empty_slot_is_ignored() {
        let mut board = Board::new();
        assert_eq!(board.move_tile(15), MoveOutcome::Ignored);
        assert_eq!(board.moves(), 0);
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut board = Board::new();
        assert_eq!(board.move_tile(16), MoveOutcome::Ignored);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn legal_move_swaps_and_counts() {
        let mut board = Board::new();
        assert_eq!(board.move_tile(11), MoveOutcome::Moved);
        assert_eq!(board.tiles()[15], 12);
        assert_eq!(board.tiles()[11], EMPTY);
        assert_eq!(board.empty_index(), 11);
        assert_eq!(board.moves(), 1);
    }

    #[test]
    fn finishing_move_reports_solved_with_count() {
        let mut board = almost_solved();
        assert_eq!(board.move_tile(15), MoveOutcome::Solved { moves: 1 });
        assert!(board.is_solved());
    }

    #[test]
    fn moving_back_into_solved_state_counts_all_moves() {
        let mut board = Board::new();
        assert_eq!(board.move_tile(14), MoveOutcome::Moved);
        assert_eq!(board.move_tile(15), MoveOutcome::Solved { moves: 2 });
    }

    #[test]
    fn shuffle_resets_moves() {
        let mut board = Board::new();
        board.move_tile(14);
        board.shuffle();
        assert_eq!(board.moves(), 0);
        assert_eq!(board.tiles()[board.empty_index()], EMPTY);
    }

    #[test]
    fn display_draws_four_rows() {
        let text = Board::new().to_string();
        assert_eq!(text.lines().count(), 4);
        assert!(text.starts_with("[ 1][ 2][ 3][ 4]"));
        assert!(text.lines().last().unwrap().ends_with("[15][  ]"));
    }
}
