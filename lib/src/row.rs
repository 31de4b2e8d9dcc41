use crate::cell::CellState;
use std::fmt::{self, Display, Formatter};

/// A single generation of the automaton.
///
/// A row is an immutable sequence of cells. Its length is fixed when it is
/// created and never changes across generations; deriving the next generation
/// always allocates a new row instead of mutating the old one.
///
/// The automaton behaves as if the row were surrounded by an infinite field of
/// dead cells, so [`get`](Self::get) returns [`Dead`](CellState::Dead) for any
/// index outside the row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Row {
    /// The cells of the row.
    cells: Vec<CellState>,
}

impl Row {
    /// Create the seed row for a run of `steps` time steps.
    ///
    /// The row has length `2 * steps + 1` and is all dead except for a single
    /// living cell exactly at the center, index `steps`.
    ///
    /// `steps = 0` is the degenerate one-row case: the seed is the single-cell
    /// row `1`.
    pub fn seed(steps: usize) -> Self {
        let mut cells = vec![CellState::Dead; 2 * steps + 1];
        cells[steps] = CellState::Alive;
        Self { cells }
    }

    /// The number of cells in the row.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the row has no cells.
    ///
    /// This is never true for a row created by [`seed`](Self::seed).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The state of the cell at `index`, under the zero boundary condition.
    ///
    /// Indices outside the row read as [`Dead`](CellState::Dead).
    #[inline]
    pub fn get(&self, index: isize) -> CellState {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.cells.get(i).copied())
            .unwrap_or(CellState::Dead)
    }

    /// The cells of the row as a slice.
    #[inline]
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// An iterator over the cells of the row.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = CellState> + '_ {
        self.cells.iter().copied()
    }
}

impl FromIterator<CellState> for Row {
    fn from_iter<T: IntoIterator<Item = CellState>>(iter: T) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl Display for Row {
    /// Renders the row as the literal characters `0` and `1` with no
    /// separators, one character per cell.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{cell}")?;
        }
        Ok(())
    }
}
