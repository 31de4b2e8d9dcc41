#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Display, Formatter},
    ops::Not,
};

/// The state of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CellState {
    /// The cell is dead.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "0"))]
    Dead = 0,

    /// The cell is alive.
    #[cfg_attr(feature = "serde", serde(rename = "1"))]
    Alive = 1,
}

impl CellState {
    /// The state as a single bit, `0` for dead and `1` for alive.
    #[inline]
    pub const fn bit(self) -> u8 {
        self as u8
    }

    /// The state corresponding to a bit, [`Dead`](Self::Dead) for `0` and
    /// [`Alive`](Self::Alive) for anything else.
    #[inline]
    pub const fn from_bit(bit: u8) -> Self {
        if bit == 0 {
            Self::Dead
        } else {
            Self::Alive
        }
    }

    /// Whether the cell is alive.
    #[inline]
    pub const fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }
}

impl Not for CellState {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        match self {
            Self::Dead => Self::Alive,
            Self::Alive => Self::Dead,
        }
    }
}

impl Display for CellState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dead => write!(f, "0"),
            Self::Alive => write!(f, "1"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_round_trip() {
        assert_eq!(CellState::from_bit(0), CellState::Dead);
        assert_eq!(CellState::from_bit(1), CellState::Alive);
        assert_eq!(CellState::Dead.bit(), 0);
        assert_eq!(CellState::Alive.bit(), 1);
    }

    #[test]
    fn test_not() {
        assert_eq!(!CellState::Dead, CellState::Alive);
        assert_eq!(!CellState::Alive, CellState::Dead);
    }
}
