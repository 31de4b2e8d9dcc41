use crate::{cell::CellState, error::RuleError};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::{
    fmt::{self, Debug, Display, Formatter},
    str::FromStr,
};

/// An elementary cellular automaton rule in Wolfram's numbering scheme.
///
/// The rule number is an 8-bit integer that encodes the complete next-state
/// lookup table: bit `k` (counting from the least significant bit) gives the
/// next state of a cell whose neighborhood `(left, center, right)` has the
/// value `left * 4 + center * 2 + right`.
///
/// So the neighborhood `111` maps to the highest bit of the rule number, and
/// `000` to its lowest bit. For example, rule 30 is `00011110` in binary, so
/// the neighborhoods `001`, `010`, `011` and `100` produce a living cell and
/// the other four produce a dead cell.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub struct Rule(u8);

impl Rule {
    /// Create a rule from its Wolfram number.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::OutOfRange`] if the number is greater than 255.
    pub const fn new(number: u32) -> Result<Self, RuleError> {
        if number > u8::MAX as u32 {
            Err(RuleError::OutOfRange)
        } else {
            Ok(Self(number as u8))
        }
    }

    /// The Wolfram number of the rule.
    #[inline]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Bit `index` of the rule number, counting from the least significant bit.
    #[inline]
    pub(crate) const fn bit(self, index: u8) -> CellState {
        debug_assert!(index < 8);
        CellState::from_bit(self.0 >> index & 1)
    }
}

impl Debug for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Rule({} = {:#010b})", self.0, self.0)
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Rule {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number = s.trim().parse().map_err(|_| RuleError::NotANumber)?;
        Self::new(number)
    }
}

impl TryFrom<u32> for Rule {
    type Error = RuleError;

    fn try_from(number: u32) -> Result<Self, Self::Error> {
        Self::new(number)
    }
}

impl From<Rule> for u32 {
    fn from(rule: Rule) -> Self {
        rule.0.into()
    }
}

/// The lookup table of a rule.
///
/// The table is indexed by the 3-bit neighborhood value and answers, for any
/// neighborhood `(left, center, right)`, the next state of the center cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleTable {
    /// The lookup table, indexed by the neighborhood value.
    table: [CellState; 8],
}

impl RuleTable {
    /// Create the lookup table of a rule.
    pub fn new(rule: Rule) -> Self {
        let mut table = [CellState::Dead; 8];
        for (index, state) in table.iter_mut().enumerate() {
            *state = rule.bit(index as u8);
        }
        Self { table }
    }

    /// The next state of a cell from the states of its neighborhood.
    ///
    /// The neighborhood value is `left * 4 + center * 2 + right`, and the
    /// result is the corresponding bit of the rule number.
    #[inline]
    pub const fn next_state(&self, left: CellState, center: CellState, right: CellState) -> CellState {
        let index = left.bit() << 2 | center.bit() << 1 | right.bit();
        self.table[index as usize]
    }
}

impl From<Rule> for RuleTable {
    fn from(rule: Rule) -> Self {
        Self::new(rule)
    }
}
