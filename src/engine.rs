use std::fmt;

use crate::rng::Xorshift;

/// A direction to move/merge tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

/// Whether the game is still accepting effective moves.
///
/// `Ended` is only entered when a [`Grid::make_move`] call finds the board
/// completely full, and only left via [`Grid::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Running,
    Ended,
}

/// The 2048 game grid: an N×N board of tile exponents plus score, empty-cell
/// accounting and the spawn PRNG.
///
/// Cells hold exponents, not tile values: `0` is an empty cell and `v > 0`
/// displays as `2^v`. The board is row-major. All operations run to
/// completion without blocking and the instance is exclusively owned by its
/// creator; callers that share a grid across threads must serialize access
/// themselves.
///
/// A fixed `(size, seed)` pair plus a fixed move sequence reproduces the
/// exact same boards and score on every run:
/// ```
/// use tui_2048::engine::{Grid, Move};
///
/// let mut a = Grid::new(4, 7);
/// let mut b = Grid::new(4, 7);
/// for dir in [Move::Left, Move::Up, Move::Right, Move::Down] {
///     a.make_move(dir);
///     b.make_move(dir);
/// }
/// assert_eq!(a.data(), b.data());
/// assert_eq!(a.score(), b.score());
/// ```
#[derive(Debug, Clone)]
pub struct Grid {
    size: usize,
    empty_count: usize,
    score: u64,
    state: State,
    prng: Xorshift,
    cells: Vec<u8>,
}

impl Grid {
    /// Largest supported side length.
    pub const MAX_SIZE: usize = 40;

    /// Allocate an all-empty `size`×`size` board and spawn the first tile.
    ///
    /// A seed of `0` is remapped to `1` by the generator. Panics if `size`
    /// is `0` or exceeds [`Grid::MAX_SIZE`].
    pub fn new(size: usize, seed: u32) -> Self {
        assert!(
            (1..=Self::MAX_SIZE).contains(&size),
            "grid size {size} out of range 1..={}",
            Self::MAX_SIZE
        );
        let mut grid = Self {
            size,
            empty_count: size * size,
            score: 0,
            state: State::Running,
            prng: Xorshift::new(seed),
            cells: vec![0; size * size],
        };
        grid.spawn_tile();
        grid
    }

    /// Apply a move in `dir`, spawning one tile if the board changed.
    ///
    /// Game-over detection is lazy: a call that finds the board already full
    /// flips the state to [`State::Ended`] and returns without touching the
    /// board, even if a merge would still have been possible. Repeated calls
    /// on a full board stay no-ops until [`Grid::reset`].
    pub fn make_move(&mut self, dir: Move) {
        if self.empty_count == 0 {
            self.state = State::Ended;
            return;
        }
        if self.slide(dir) {
            self.spawn_tile();
        }
    }

    /// Accumulated score. Never decreases; each merge adds the value of the
    /// tile it formed.
    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of empty cells. Always equals the number of zero entries in
    /// [`Grid::data`].
    pub fn empty_cells(&self) -> usize {
        self.empty_count
    }

    /// Row-major snapshot of the tile exponents. Read-only.
    pub fn data(&self) -> &[u8] {
        &self.cells
    }

    /// Clear the board, spawn one tile and resume running.
    ///
    /// The score carries over: a reset starts a fresh board, not a fresh
    /// accumulator.
    pub fn reset(&mut self) {
        self.cells.fill(0);
        self.empty_count = self.size * self.size;
        self.state = State::Running;
        self.spawn_tile();
    }

    /// Slide and merge every line toward the `dir` edge. Returns whether the
    /// board changed.
    ///
    /// All four directions run the same traversal, parameterized by the
    /// leading-edge index, the stride between lines and the step along a
    /// line. Each line keeps a compaction cursor at its leading edge; tiles
    /// slide into it, merge with it, or advance it. A merge steps the cursor
    /// past the merged tile, so a tile formed this move can never merge
    /// again in the same move.
    fn slide(&mut self, dir: Move) -> bool {
        let size = self.size as isize;
        let (start, line_stride, step) = match dir {
            Move::Up => (0, 1, size),
            Move::Down => (size * size - 1, -1, -size),
            Move::Left => (0, size, 1),
            Move::Right => (size * size - 1, -size, -1),
        };
        let mut modified = false;
        for line in 0..size {
            let mut top = start + line * line_stride;
            let mut it = top + step;
            for _ in 1..self.size {
                if self.cells[it as usize] == 0 {
                    // nothing to move
                } else if self.cells[top as usize] == 0 {
                    self.cells.swap(top as usize, it as usize);
                    modified = true;
                } else if self.cells[top as usize] == self.cells[it as usize] {
                    self.cells[it as usize] = 0;
                    self.empty_count += 1;
                    self.cells[top as usize] += 1;
                    self.score += 1 << self.cells[top as usize];
                    top += step;
                    modified = true;
                } else {
                    top += step;
                    if top != it {
                        // close the gap left by earlier merges/slides
                        self.cells.swap(top as usize, it as usize);
                        modified = true;
                    }
                }
                it += step;
            }
        }
        modified
    }

    /// Place a new tile in a uniformly chosen empty cell.
    ///
    /// Consumes exactly two generator outputs: the first picks the slot
    /// among empty cells, the second picks the value. Tile 4 (exponent 2)
    /// spawns one time in four, tile 2 (exponent 1) otherwise.
    fn spawn_tile(&mut self) {
        assert!(self.empty_count > 0, "spawn on a full board");
        let mut slot = (self.prng.next() % self.empty_count as u32) as usize;
        let value = if self.prng.next() % 4 == 0 { 2 } else { 1 };
        for cell in self.cells.iter_mut() {
            if *cell == 0 {
                if slot == 0 {
                    *cell = value;
                    self.empty_count -= 1;
                    return;
                }
                slot -= 1;
            }
        }
        unreachable!("empty-cell count out of sync with the board");
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        for r in 0..self.size {
            if r > 0 {
                writeln!(f, "{}", "-".repeat(self.size * 8 - 1))?;
            }
            let row: Vec<String> = (0..self.size)
                .map(|c| match self.cells[r * self.size + c] {
                    0 => " ".repeat(7),
                    v => format!("{:^7}", 1u64 << v),
                })
                .collect();
            writeln!(f, "{}", row.join("|"))?;
        }
        Ok(())
    }
}
