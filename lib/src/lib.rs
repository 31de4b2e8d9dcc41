//! A library for generating elementary cellular automata.
//!
//! An elementary cellular automaton is a one-dimensional automaton where the
//! next state of a cell depends only on its own state and the states of its
//! two immediate neighbors. The 256 possible rules are numbered according to
//! [Wolfram's scheme](https://mathworld.wolfram.com/ElementaryCellularAutomaton.html).
//!
//! Starting from a single living cell, the library computes successive
//! generations under a fixed zero boundary condition, and can render the
//! result as a plain PBM (P1) image.

#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::use_self)]
#![warn(missing_docs)]

mod automaton;
mod cell;
mod config;
mod error;
mod pbm;
mod row;
mod rule;

pub use automaton::{next_row, Generations};
pub use cell::CellState;
pub use config::Config;
pub use error::{ConfigError, RuleError};
pub use pbm::{pbm_string, write_pbm};
pub use row::Row;
pub use rule::{Rule, RuleTable};
