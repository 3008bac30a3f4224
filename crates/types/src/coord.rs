//! Rank/file/position value types and bounds-checked directional arithmetic.

use std::fmt;
use std::str::FromStr;

use crate::{ChessError, BOARD_SIZE};

/// Board row, 1-8 from White's side
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    R1 = 1,
    R2,
    R3,
    R4,
    R5,
    R6,
    R7,
    R8,
}

/// Board column, a-h from White's left
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum File {
    A = 1,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl Rank {
    pub const ALL: [Rank; 8] = [
        Rank::R1,
        Rank::R2,
        Rank::R3,
        Rank::R4,
        Rank::R5,
        Rank::R6,
        Rank::R7,
        Rank::R8,
    ];

    /// Rank from its number (1-8)
    pub fn from_number(n: i8) -> Option<Self> {
        if (1..=BOARD_SIZE as i8).contains(&n) {
            Some(Self::ALL[(n - 1) as usize])
        } else {
            None
        }
    }

    /// 1-based rank number
    #[inline]
    pub fn number(self) -> i8 {
        self as i8
    }

    /// 0-based index for array lookups
    #[inline]
    pub fn index(self) -> usize {
        self as usize - 1
    }

    pub fn as_char(self) -> char {
        (b'0' + self as u8) as char
    }
}

impl File {
    pub const ALL: [File; 8] = [
        File::A,
        File::B,
        File::C,
        File::D,
        File::E,
        File::F,
        File::G,
        File::H,
    ];

    /// File from its number (1 = a, 8 = h)
    pub fn from_number(n: i8) -> Option<Self> {
        if (1..=BOARD_SIZE as i8).contains(&n) {
            Some(Self::ALL[(n - 1) as usize])
        } else {
            None
        }
    }

    /// 1-based file number
    #[inline]
    pub fn number(self) -> i8 {
        self as i8
    }

    /// 0-based index for array lookups
    #[inline]
    pub fn index(self) -> usize {
        self as usize - 1
    }

    pub fn as_char(self) -> char {
        (b'a' + self as u8 - 1) as char
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Which side of the board a step moves toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Increasing rank
    TowardBlack,
    /// Decreasing rank
    TowardWhite,
    /// Decreasing file
    TowardA,
    /// Increasing file
    TowardH,
}

impl Direction {
    /// (rank delta, file delta) for a single step
    pub fn delta(self) -> (i8, i8) {
        match self {
            Direction::TowardBlack => (1, 0),
            Direction::TowardWhite => (-1, 0),
            Direction::TowardA => (0, -1),
            Direction::TowardH => (0, 1),
        }
    }
}

/// A square on the board
///
/// Both coordinates are always on the board; every constructor and step is
/// checked, so a `Position` can index the tile grid without further checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub rank: Rank,
    pub file: File,
}

impl Position {
    /// Checked constructor from 1-based rank and file numbers
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_chess_types::{ChessError, Position};
    ///
    /// assert_eq!(Position::new(4, 5).unwrap().to_string(), "e4");
    /// assert_eq!(Position::new(9, 1), Err(ChessError::OutOfRange { rank: 9, file: 1 }));
    /// assert_eq!(Position::new(1, 0), Err(ChessError::OutOfRange { rank: 1, file: 0 }));
    /// ```
    pub fn new(rank: i8, file: i8) -> Result<Self, ChessError> {
        match (Rank::from_number(rank), File::from_number(file)) {
            (Some(rank), Some(file)) => Ok(Self { rank, file }),
            _ => Err(ChessError::OutOfRange { rank, file }),
        }
    }

    pub const fn from_parts(rank: Rank, file: File) -> Self {
        Self { rank, file }
    }

    /// Shift by raw rank and file deltas
    pub fn offset(self, d_rank: i8, d_file: i8) -> Result<Self, ChessError> {
        Self::new(
            self.rank.number().saturating_add(d_rank),
            self.file.number().saturating_add(d_file),
        )
    }

    /// Step `steps` squares in `direction`
    pub fn toward(self, direction: Direction, steps: i8) -> Result<Self, ChessError> {
        let (dr, df) = direction.delta();
        self.offset(dr.saturating_mul(steps), df.saturating_mul(steps))
    }

    pub fn to_black(self, steps: i8) -> Result<Self, ChessError> {
        self.toward(Direction::TowardBlack, steps)
    }

    pub fn to_white(self, steps: i8) -> Result<Self, ChessError> {
        self.toward(Direction::TowardWhite, steps)
    }

    pub fn to_a(self, steps: i8) -> Result<Self, ChessError> {
        self.toward(Direction::TowardA, steps)
    }

    pub fn to_h(self, steps: i8) -> Result<Self, ChessError> {
        self.toward(Direction::TowardH, steps)
    }

    /// Light/dark parity: a square is dark when `(file + rank)` is even (a1 is dark)
    pub fn is_dark(self) -> bool {
        (self.file.number() + self.rank.number()) % 2 == 0
    }

    /// All 64 squares, rank 1 first, files a-h within each rank
    pub fn all() -> impl Iterator<Item = Position> {
        Rank::ALL
            .into_iter()
            .flat_map(|rank| File::ALL.into_iter().map(move |file| Position { rank, file }))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file, self.rank)
    }
}

impl FromStr for Position {
    type Err = ChessError;

    /// Parse algebraic square notation (`"e4"`, case-insensitive file)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(ChessError::InvalidSquare(s.to_string()));
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(ChessError::InvalidSquare(s.to_string()));
        }
        Position::new((rank - b'0') as i8, (file - b'a' + 1) as i8)
    }
}
