use crate::{error::ConfigError, rule::Rule};
#[cfg(feature = "clap")]
use clap::Args;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration of an automaton run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(Args))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// The Wolfram rule number of the automaton, from 0 to 255.
    pub rule: Rule,

    /// The number of time steps.
    ///
    /// The image has `steps + 1` rows: the seed row and one row per step.
    pub steps: usize,
}

impl Config {
    /// Create a new configuration.
    #[inline]
    pub const fn new(rule: Rule, steps: usize) -> Self {
        Self { rule, steps }
    }

    /// Create a configuration from plain integers.
    ///
    /// # Errors
    ///
    /// Returns an error if the rule number is greater than 255 or the step
    /// count is zero.
    pub fn try_new(rule: u32, steps: usize) -> Result<Self, ConfigError> {
        let config = Self::new(Rule::new(rule)?, steps);
        config.check()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// The image must have at least one time step. The engine itself accepts
    /// `steps = 0` as a degenerate one-row run, so this check only applies to
    /// configurations supplied by a host program.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ZeroSteps`] if the step count is zero.
    pub const fn check(&self) -> Result<(), ConfigError> {
        if self.steps == 0 {
            Err(ConfigError::ZeroSteps)
        } else {
            Ok(())
        }
    }

    /// The width of the image, `2 * steps + 1`.
    #[inline]
    pub const fn width(&self) -> usize {
        2 * self.steps + 1
    }

    /// The height of the image, `steps + 1`.
    #[inline]
    pub const fn height(&self) -> usize {
        self.steps + 1
    }
}
