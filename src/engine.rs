use log::trace;
use rand::Rng;
use std::fmt;
use std::num::NonZeroU8;
use std::str::FromStr;

/// Number of cells on a board (4x4, row-major).
pub const CELLS: usize = 16;

/// Number of cells in a row.
pub const ROW_LEN: usize = 4;

/// Chance that a spawned tile is a 4 rather than a 2.
pub const SPAWN_FOUR_PROBABILITY: f64 = 0.1;

// Output position `i` of a single counter-clockwise rotation draws from input
// position `ROTATION[i]`.
const ROTATION: [usize; CELLS] = [3, 7, 11, 15, 2, 6, 10, 14, 1, 5, 9, 13, 0, 4, 8, 12];

// Largest exponent `Tile::new` accepts. Sixteen such tiles sum to 2^52, so no
// sequence of shifts can merge past `DOUBLED_EXPONENT_CAP`.
const MAX_EXPONENT: u8 = 48;

// `Tile::doubled` stops here; `1 << 63` is the largest power of two in a u64.
const DOUBLED_EXPONENT_CAP: u8 = 63;

/// A direction to slide/merge tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in the order the stuck check tries them.
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Counter-clockwise quarter turns that bring this direction onto the left axis.
    #[inline]
    pub fn rotations(self) -> usize {
        match self {
            Direction::Up => 1,
            Direction::Down => 3,
            Direction::Left => 0,
            Direction::Right => 2,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown direction '{0}' (expected up, down, left or right)")]
pub struct ParseDirectionError(pub String);

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

/// A tile value: always a power of two, at least 2.
///
/// Stored as its exponent, so `Option<Tile>` is a single byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tile(NonZeroU8);

impl Tile {
    /// The 2 tile.
    pub const TWO: Tile = Tile(match NonZeroU8::new(1) {
        Some(e) => e,
        None => unreachable!(),
    });

    /// The 4 tile.
    pub const FOUR: Tile = Tile(match NonZeroU8::new(2) {
        Some(e) => e,
        None => unreachable!(),
    });

    /// Build a tile from its numeric value. `None` unless `value` is a power of two >= 2.
    ///
    /// ```
    /// use game_2048::engine::Tile;
    /// assert_eq!(Tile::new(8).map(Tile::value), Some(8));
    /// assert!(Tile::new(6).is_none());
    /// assert!(Tile::new(1).is_none());
    /// ```
    pub fn new(value: u64) -> Option<Tile> {
        if value < 2 || !value.is_power_of_two() {
            return None;
        }
        let exponent = value.trailing_zeros() as u8;
        if exponent > MAX_EXPONENT {
            return None;
        }
        NonZeroU8::new(exponent).map(Tile)
    }

    /// Numeric value, e.g. 2, 4, 8, ...
    #[inline]
    pub fn value(self) -> u64 {
        1 << self.0.get()
    }

    /// Base-two exponent of the value (1 for a 2 tile).
    #[inline]
    pub fn exponent(self) -> u8 {
        self.0.get()
    }

    /// The tile produced by merging two copies of this one.
    ///
    /// Saturates at 2^63 so `value` always fits in a u64; merges on a board
    /// built from `Tile::new` values never get there.
    #[inline]
    pub fn doubled(self) -> Tile {
        if self.0.get() >= DOUBLED_EXPONENT_CAP {
            return self;
        }
        Tile(self.0.saturating_add(1))
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A single cell: empty or holding a tile.
pub type Cell = Option<Tile>;

/// Four consecutive cells, used while shifting.
pub type Row = [Cell; ROW_LEN];

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("expected 16 cells, got {0}")]
    CellCount(usize),
    #[error("cell {index}: '{token}' is not a number")]
    InvalidToken { index: usize, token: String },
    #[error("cell {index}: {value} is not a power of two >= 2")]
    InvalidTile { index: usize, value: u64 },
}

/// A 4x4 board of optional tiles, row-major (`index = row * 4 + column`).
///
/// Every operation returns a new `Board`; none of them mutate `self`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board([Cell; CELLS]);

impl Board {
    /// A constant empty board.
    pub const EMPTY: Board = Board([None; CELLS]);

    /// Wrap raw cells.
    #[inline]
    pub fn from_cells(cells: [Cell; CELLS]) -> Self {
        Board(cells)
    }

    /// Borrow the raw cells.
    #[inline]
    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.0
    }

    /// Build a board from numeric values, `0` meaning empty.
    ///
    /// ```
    /// use game_2048::engine::{Board, BoardError};
    /// let b = Board::from_values([2, 0, 0, 0, 0, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]).unwrap();
    /// assert_eq!(b.count_empty(), 14);
    /// let err = Board::from_values([3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]).unwrap_err();
    /// assert_eq!(err, BoardError::InvalidTile { index: 0, value: 3 });
    /// ```
    pub fn from_values(values: [u64; CELLS]) -> Result<Self, BoardError> {
        let mut cells = [None; CELLS];
        for (index, &value) in values.iter().enumerate() {
            if value == 0 {
                continue;
            }
            cells[index] = Some(Tile::new(value).ok_or(BoardError::InvalidTile { index, value })?);
        }
        Ok(Board(cells))
    }

    /// Numeric values of every cell, `0` for empty.
    pub fn values(&self) -> [u64; CELLS] {
        self.0.map(|cell| cell.map_or(0, Tile::value))
    }

    /// The cell at `idx` (0..16, row-major).
    #[inline]
    pub fn cell(&self, idx: usize) -> Cell {
        self.0[idx]
    }

    /// Row `r` (0..4), left to right.
    #[inline]
    pub fn row(&self, r: usize) -> Row {
        let start = r * ROW_LEN;
        [self.0[start], self.0[start + 1], self.0[start + 2], self.0[start + 3]]
    }

    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.0.iter().copied()
    }

    /// Rotate the grid 90 degrees counter-clockwise `times` times.
    ///
    /// ```
    /// use game_2048::engine::Board;
    /// let b: Board = "2 4 8 16  0 0 0 0  0 0 0 0  0 0 0 32".parse().unwrap();
    /// assert_eq!(b.rotate_left(1).row(0)[0].map(|t| t.value()), Some(16));
    /// assert_eq!(b.rotate_left(1).rotate_left(3), b);
    /// ```
    pub fn rotate_left(self, times: usize) -> Self {
        let mut cells = self.0;
        for _ in 0..times % 4 {
            cells = ROTATION.map(|from| cells[from]);
        }
        Board(cells)
    }

    /// Slide/merge every row towards column 0.
    fn shift_rows_left(self) -> Self {
        let mut cells = [None; CELLS];
        for r in 0..ROW_LEN {
            let shifted = shift_row_left(self.row(r));
            cells[r * ROW_LEN..(r + 1) * ROW_LEN].copy_from_slice(&shifted);
        }
        Board(cells)
    }

    /// Return the board resulting from sliding/merging tiles in `dir` (no random insert).
    ///
    /// ```
    /// use game_2048::engine::{Board, Direction};
    /// let b: Board = "0 0 0 0  2 0 0 0  0 0 0 0  0 0 0 0".parse().unwrap();
    /// assert!(b.shift(Direction::Up).cell(0).is_some());
    /// assert!(b.shift(Direction::Down).cell(12).is_some());
    /// assert!(b.shift(Direction::Right).cell(7).is_some());
    /// ```
    pub fn shift(self, dir: Direction) -> Self {
        let turns = dir.rotations();
        self.rotate_left(turns)
            .shift_rows_left()
            .rotate_left((4 - turns) % 4)
    }

    /// Insert a 2 (90%) or 4 (10%) into a uniformly chosen empty cell.
    /// A full board is returned unchanged.
    ///
    /// Deterministic example using a seeded RNG:
    /// ```
    /// use game_2048::engine::Board;
    /// use rand::{SeedableRng, rngs::StdRng};
    /// let mut rng = StdRng::seed_from_u64(123);
    /// let b = Board::EMPTY.spawn_value(&mut rng).spawn_value(&mut rng);
    /// assert_eq!(b.count_empty(), 14);
    /// ```
    pub fn spawn_value<R: Rng + ?Sized>(self, rng: &mut R) -> Self {
        let empty = self.count_empty();
        if empty == 0 {
            return self;
        }
        let nth = rng.gen_range(0..empty);
        let tile = random_tile(rng);
        let mut cells = self.0;
        if let Some(idx) = self.empty_indices().nth(nth) {
            trace!("spawning {} at cell {}", tile, idx);
            cells[idx] = Some(tile);
        }
        Board(cells)
    }

    /// Convenience: like `spawn_value` but uses thread-local RNG.
    pub fn spawn_value_thread(self) -> Self {
        let mut rng = rand::thread_rng();
        self.spawn_value(&mut rng)
    }

    /// Empty board plus one spawned tile.
    pub fn new_game<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Board::EMPTY.spawn_value(rng)
    }

    /// Shift, then spawn a tile only if the shift changed the board.
    ///
    /// ```
    /// use game_2048::engine::{Board, Direction};
    /// use rand::{SeedableRng, rngs::StdRng};
    /// let mut rng = StdRng::seed_from_u64(1);
    /// let b: Board = "2 0 0 0  0 0 0 0  0 0 0 0  0 0 0 0".parse().unwrap();
    /// assert_eq!(b.make_move(Direction::Left, &mut rng), b);
    /// assert_eq!(b.make_move(Direction::Right, &mut rng).count_empty(), 14);
    /// ```
    pub fn make_move<R: Rng + ?Sized>(self, dir: Direction, rng: &mut R) -> Self {
        let moved = self.shift(dir);
        if moved != self { moved.spawn_value(rng) } else { self }
    }

    /// True if no direction changes the board.
    ///
    /// ```
    /// use game_2048::engine::Board;
    /// // Nothing can slide on an empty board either.
    /// assert!(Board::EMPTY.is_stuck());
    /// ```
    pub fn is_stuck(self) -> bool {
        Direction::ALL.iter().all(|&dir| self.shift(dir) == self)
    }

    pub fn count_empty(&self) -> usize {
        self.0.iter().filter(|cell| cell.is_none()).count()
    }

    /// Indices of empty cells in increasing order.
    pub fn empty_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(idx, cell)| cell.is_none().then_some(idx))
    }

    /// The highest tile on the board, if any.
    pub fn highest_tile(&self) -> Option<Tile> {
        self.0.iter().flatten().copied().max()
    }

    /// Sum of all tile values. Shifting never changes it.
    pub fn sum(&self) -> u64 {
        self.0.iter().flatten().map(|t| t.value()).sum()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({:?})", self.values())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..ROW_LEN {
            if r > 0 {
                writeln!(f, "-------------------------------")?;
            }
            let row: Vec<String> = self.row(r).iter().map(format_cell).collect();
            writeln!(f, "{}", row.join("|"))?;
        }
        Ok(())
    }
}

/// Parses 16 whitespace-separated values; `0` or `.` is an empty cell.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        if tokens.len() != CELLS {
            return Err(BoardError::CellCount(tokens.len()));
        }
        let mut values = [0u64; CELLS];
        for (index, token) in tokens.into_iter().enumerate() {
            values[index] = match token {
                "." => 0,
                _ => token.parse().map_err(|_| BoardError::InvalidToken {
                    index,
                    token: token.to_string(),
                })?,
            };
        }
        Board::from_values(values)
    }
}

impl From<[Cell; CELLS]> for Board { fn from(cells: [Cell; CELLS]) -> Self { Board::from_cells(cells) } }
impl From<Board> for [Cell; CELLS] { fn from(b: Board) -> Self { b.0 } }

/// A board with no tiles.
pub fn make_empty_board() -> Board {
    Board::EMPTY
}

/// Rotate `board` 90 degrees counter-clockwise `times` times.
pub fn rotate_left(board: Board, times: usize) -> Board {
    board.rotate_left(times)
}

/// Slide/merge tiles in the given direction. No randomness.
pub fn shift(board: Board, direction: Direction) -> Board {
    board.shift(direction)
}

/// True iff all 16 cells match.
pub fn boards_equal(a: &Board, b: &Board) -> bool {
    a == b
}

/// Insert a random 2 (90%) or 4 (10%) tile using thread-local RNG.
///
/// For reproducible behavior, prefer `Board::spawn_value(&mut impl Rng)`.
pub fn spawn_value(board: Board) -> Board {
    board.spawn_value_thread()
}

/// True if no move in any direction changes the board.
pub fn is_stuck(board: Board) -> bool {
    board.is_stuck()
}

/// Slide and merge one row towards index 0.
///
/// Tiles are visited left to right; each slides over empty cells and merges
/// into an equal neighbour unless that cell already took a merge this pass.
///
/// ```
/// use game_2048::engine::{shift_row_left, Tile};
/// let two = Some(Tile::TWO);
/// let four = Some(Tile::FOUR);
/// assert_eq!(shift_row_left([two, two, two, two]), [four, four, None, None]);
/// ```
pub fn shift_row_left(row: Row) -> Row {
    let mut row = row;
    let mut locked = [false; ROW_LEN];
    for i in 1..ROW_LEN {
        let Some(tile) = row[i] else { continue };
        for j in (0..i).rev() {
            match row[j] {
                None => {
                    row[j] = Some(tile);
                    row[j + 1] = None;
                }
                Some(other) => {
                    if other == tile && !locked[j] {
                        row[j] = Some(tile.doubled());
                        row[j + 1] = None;
                        locked[j] = true;
                    }
                    break;
                }
            }
        }
    }
    row
}

fn random_tile<R: Rng + ?Sized>(rng: &mut R) -> Tile {
    if rng.gen_bool(SPAWN_FOUR_PROBABILITY) { Tile::FOUR } else { Tile::TWO }
}

fn format_cell(cell: &Cell) -> String {
    match cell {
        None => " ".repeat(7),
        Some(tile) => format!("{:^7}", tile.value()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn row(values: [u64; 4]) -> Row {
        values.map(Tile::new)
    }

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn it_shift_row_left() {
        assert_eq!(shift_row_left(row([0, 0, 0, 0])), row([0, 0, 0, 0]));
        assert_eq!(shift_row_left(row([2, 4, 2, 4])), row([2, 4, 2, 4]));
        assert_eq!(shift_row_left(row([2, 2, 4, 4])), row([4, 8, 0, 0]));
        assert_eq!(shift_row_left(row([2, 0, 0, 2])), row([4, 0, 0, 0]));
        assert_eq!(shift_row_left(row([0, 0, 0, 8])), row([8, 0, 0, 0]));
    }

    #[test]
    fn it_never_merges_twice() {
        assert_eq!(shift_row_left(row([2, 2, 2, 2])), row([4, 4, 0, 0]));
        assert_eq!(shift_row_left(row([4, 2, 2, 0])), row([4, 4, 0, 0]));
        assert_eq!(shift_row_left(row([2, 2, 2, 0])), row([4, 2, 0, 0]));
        assert_eq!(shift_row_left(row([0, 2, 2, 2])), row([4, 2, 0, 0]));
    }

    #[test]
    fn it_slides_then_merges() {
        assert_eq!(shift_row_left(row([2, 0, 2, 4])), row([4, 4, 0, 0]));
        assert_eq!(shift_row_left(row([0, 4, 0, 4])), row([8, 0, 0, 0]));
    }

    #[test]
    fn it_blocks_unequal_neighbours() {
        assert_eq!(shift_row_left(row([2, 4, 2, 0])), row([2, 4, 2, 0]));
        assert_eq!(shift_row_left(row([2, 0, 4, 2])), row([2, 4, 2, 0]));
    }

    #[test]
    fn test_rotate_left_once() {
        let b = board("128 2 4 8  0 0 0 16  0 0 0 32  0 0 0 64");
        let r = b.rotate_left(1);
        // Right column becomes the top row.
        assert_eq!(&r.values()[0..4], &[8, 16, 32, 64]);
        // Top-left corner goes to bottom-left.
        assert_eq!(r.values()[12], 128);
    }

    #[test]
    fn test_rotate_left_zero_is_identity() {
        let b = board("2 4 0 0  0 8 0 0  0 0 16 0  0 0 0 32");
        assert_eq!(b.rotate_left(0), b);
        assert_eq!(b.rotate_left(4), b);
    }

    #[test]
    fn test_rotation_round_trip() {
        let b = board("2 4 8 16  32 64 128 256  512 1024 2048 4096  0 2 0 4");
        for k in 0..4 {
            assert_eq!(rotate_left(rotate_left(b, k), (4 - k) % 4), b);
        }
    }

    #[test]
    fn test_direction_rotations() {
        assert_eq!(Direction::Up.rotations(), 1);
        assert_eq!(Direction::Down.rotations(), 3);
        assert_eq!(Direction::Left.rotations(), 0);
        assert_eq!(Direction::Right.rotations(), 2);
    }

    #[test]
    fn test_single_tile_each_direction() {
        let b = board("0 0 0 0  2 0 0 0  0 0 0 0  0 0 0 0");
        let only = |b: Board| b.empty_indices().count() == 15;
        let up = shift(b, Direction::Up);
        assert!(only(up) && up.cell(0).is_some());
        let down = shift(b, Direction::Down);
        assert!(only(down) && down.cell(12).is_some());
        assert_eq!(shift(b, Direction::Left), b);
        let right = shift(b, Direction::Right);
        assert!(only(right) && right.cell(7).is_some());
    }

    #[test]
    fn test_move_left() {
        let b = board("2 4 8 16  2 8 8 4  4 0 0 4  2 0 0 4");
        assert_eq!(shift(b, Direction::Left), board("2 4 8 16  2 16 4 0  8 0 0 0  2 4 0 0"));
    }

    #[test]
    fn test_move_right() {
        let b = board("2 4 8 16  2 8 8 4  4 0 0 4  2 0 0 4");
        assert_eq!(shift(b, Direction::Right), board("2 4 8 16  0 2 16 4  0 0 0 8  0 0 2 4"));
    }

    #[test]
    fn test_move_up() {
        let b = board("2 2 4 2  4 8 0 0  8 8 0 0  16 4 4 4");
        assert_eq!(shift(b, Direction::Up), board("2 2 8 2  4 16 0 4  8 4 0 0  16 0 0 0"));
    }

    #[test]
    fn test_move_down() {
        let b = board("2 2 4 2  4 8 0 0  8 8 0 0  16 4 4 4");
        assert_eq!(shift(b, Direction::Down), board("2 0 0 0  4 2 0 0  8 16 0 2  16 4 8 4"));
    }

    #[test]
    fn test_boards_equal() {
        let a = board("2 0 0 0  0 0 0 0  0 0 0 0  0 0 0 4");
        assert!(boards_equal(&a, &a));
        assert!(boards_equal(&make_empty_board(), &Board::EMPTY));
        assert!(!boards_equal(&a, &Board::EMPTY));
    }

    #[test]
    fn test_stuck_full_board_without_pairs() {
        let b = board("2 4 2 4  4 2 4 2  2 4 2 4  4 2 4 2");
        assert!(is_stuck(b));
    }

    #[test]
    fn test_not_stuck_with_adjacent_pair() {
        // Horizontal pair in the last row.
        assert!(!is_stuck(board("2 4 2 4  4 2 4 2  2 4 2 4  4 2 8 8")));
        // Vertical pair in the first column.
        assert!(!is_stuck(board("2 4 2 4  2 8 4 2  4 2 8 4  8 4 2 8")));
    }

    #[test]
    fn test_not_stuck_with_empty_cell() {
        assert!(!is_stuck(board("2 4 2 4  4 2 4 2  2 4 0 4  4 2 4 2")));
    }

    #[test]
    fn it_spawns_into_empty_cells_only() {
        let mut rng = StdRng::seed_from_u64(7);
        let b = board("2 4 2 4  4 2 4 2  2 4 0 4  4 2 4 2");
        let spawned = b.spawn_value(&mut rng);
        assert_eq!(spawned.count_empty(), 0);
        for idx in 0..CELLS {
            if idx != 10 {
                assert_eq!(spawned.cell(idx), b.cell(idx));
            }
        }
        assert!(matches!(spawned.cell(10), Some(t) if t == Tile::TWO || t == Tile::FOUR));
    }

    #[test]
    fn it_spawn_on_full_board_is_noop() {
        let mut rng = StdRng::seed_from_u64(11);
        let b = board("2 4 2 4  4 2 4 2  2 4 2 4  4 2 4 2");
        assert_eq!(b.spawn_value(&mut rng), b);
        assert_eq!(spawn_value(b), b);
    }

    #[test]
    fn it_fills_board_with_thread_rng() {
        let mut game = make_empty_board();
        for _ in 0..CELLS {
            game = spawn_value(game);
        }
        assert_eq!(game.count_empty(), 0);
    }

    #[test]
    fn it_spawns_mostly_twos() {
        let mut rng = StdRng::seed_from_u64(2048);
        let fours = (0..10_000)
            .filter(|_| Board::EMPTY.spawn_value(&mut rng).highest_tile() == Some(Tile::FOUR))
            .count();
        // Expected ~1000.
        assert!((800..1200).contains(&fours), "fours = {fours}");
    }

    #[test]
    fn it_tile_new() {
        assert_eq!(Tile::new(2), Some(Tile::TWO));
        assert_eq!(Tile::new(4), Some(Tile::FOUR));
        assert_eq!(Tile::new(2048).map(Tile::exponent), Some(11));
        assert_eq!(Tile::new(0), None);
        assert_eq!(Tile::new(1), None);
        assert_eq!(Tile::new(12), None);
        assert_eq!(Tile::TWO.doubled(), Tile::FOUR);
    }

    #[test]
    fn it_doubled_stays_within_u64() {
        let mut tile = Tile::new(1 << MAX_EXPONENT).unwrap();
        for _ in 0..100 {
            tile = tile.doubled();
        }
        assert_eq!(tile.exponent(), DOUBLED_EXPONENT_CAP);
        assert_eq!(tile.value(), 1 << 63);
    }

    #[test]
    fn it_parses_boards() {
        let b: Board = ". 2 . 4  0 0 0 0  0 0 0 0  0 0 0 2048".parse().unwrap();
        assert_eq!(b.values()[1], 2);
        assert_eq!(b.highest_tile().map(Tile::value), Some(2048));
        assert_eq!("2 2".parse::<Board>(), Err(BoardError::CellCount(2)));
        assert_eq!(
            "x 0 0 0  0 0 0 0  0 0 0 0  0 0 0 0".parse::<Board>(),
            Err(BoardError::InvalidToken { index: 0, token: "x".to_string() })
        );
        assert_eq!(
            "0 0 0 0  0 0 0 0  0 0 0 0  0 0 0 6".parse::<Board>(),
            Err(BoardError::InvalidTile { index: 15, value: 6 })
        );
    }

    #[test]
    fn it_parses_directions() {
        assert_eq!("Up".parse(), Ok(Direction::Up));
        assert_eq!("RIGHT".parse(), Ok(Direction::Right));
        assert!("north".parse::<Direction>().is_err());
    }

    #[test]
    fn it_displays_board() {
        let b = board("2 0 0 0  0 0 0 0  0 0 0 0  0 0 0 2048");
        let text = b.to_string();
        assert_eq!(text.lines().count(), 7);
        assert!(text.starts_with("   2   |"));
        assert!(text.lines().last().unwrap().ends_with("| 2048  "));
    }

    #[test]
    fn it_sum_and_highest() {
        let b = board("2 4 0 0  0 0 8 0  0 0 0 0  0 0 0 0");
        assert_eq!(b.sum(), 14);
        assert_eq!(b.highest_tile(), Tile::new(8));
        assert_eq!(Board::EMPTY.highest_tile(), None);
    }
}
