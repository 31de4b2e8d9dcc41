use crate::{
    row::Row,
    rule::{Rule, RuleTable},
};
use std::iter::FusedIterator;

/// Compute the next generation from `previous`.
///
/// The new row has the same length as `previous`. The cell at index `i` is
/// the rule lookup of the neighborhood `(previous[i - 1], previous[i],
/// previous[i + 1])`, where neighbors outside the row read as dead.
///
/// The result is read only from `previous`, never from cells already written
/// into the new row.
pub fn next_row(previous: &Row, table: &RuleTable) -> Row {
    (0..previous.len() as isize)
        .map(|i| table.next_state(previous.get(i - 1), previous.get(i), previous.get(i + 1)))
        .collect()
}

/// A lazy iterator over the generations of an elementary cellular automaton.
///
/// The iterator yields exactly `steps + 1` rows: the seed row first, then one
/// row per time step, each derived from its immediate predecessor. Only the
/// current row is kept in memory, so the whole image never needs to be
/// materialized at once.
///
/// The computation is pure: two iterators created with the same rule and step
/// count yield identical sequences of rows.
///
/// # Example
///
/// ```
/// use elementary_lib::{Generations, Rule};
///
/// let rule = Rule::new(30)?;
/// let rows: Vec<String> = Generations::new(rule, 2).map(|row| row.to_string()).collect();
/// assert_eq!(rows, ["00100", "01110", "11001"]);
/// # Ok::<(), elementary_lib::RuleError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Generations {
    /// The lookup table of the rule.
    table: RuleTable,

    /// The next row to be yielded.
    current: Option<Row>,

    /// The number of rows that remain to be yielded.
    remaining: usize,
}

impl Generations {
    /// Create an iterator over the `steps + 1` generations of a rule,
    /// starting from [`Row::seed`].
    pub fn new(rule: Rule, steps: usize) -> Self {
        Self {
            table: RuleTable::new(rule),
            current: Some(Row::seed(steps)),
            remaining: steps + 1,
        }
    }
}

impl Iterator for Generations {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let row = self.current.take()?;
        if self.remaining > 0 {
            self.current = Some(next_row(&row, &self.table));
        }
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Generations {}

impl FusedIterator for Generations {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::CellState;

    /// Build a row from a string of `0`s and `1`s.
    fn row(s: &str) -> Row {
        s.chars()
            .map(|c| CellState::from_bit(u8::from(c == '1')))
            .collect()
    }

    fn table(number: u32) -> RuleTable {
        RuleTable::new(Rule::new(number).unwrap())
    }

    #[test]
    fn test_next_row_rule_30() {
        assert_eq!(next_row(&row("010"), &table(30)), row("111"));
        assert_eq!(next_row(&row("00100"), &table(30)), row("01110"));
        assert_eq!(next_row(&row("01110"), &table(30)), row("11001"));
    }

    #[test]
    fn test_next_row_preserves_length() {
        for number in [0, 30, 90, 110, 255] {
            let table = table(number);
            let mut current = Row::seed(4);

            for _ in 0..8 {
                let next = next_row(&current, &table);
                assert_eq!(next.len(), current.len());
                current = next;
            }
        }
    }

    #[test]
    fn test_single_cell_boundary() {
        // On a length-1 row of a living cell, both neighbors read as dead, so
        // only the neighborhood 010 is ever evaluated: the result is bit 2 of
        // the rule number.
        for number in 0..=255 {
            let next = next_row(&row("1"), &table(number));
            let expected: Row = [CellState::from_bit((number >> 2 & 1) as u8)]
                .into_iter()
                .collect();
            assert_eq!(next, expected);
        }
    }

    #[test]
    fn test_generations_count() {
        for steps in 0..5 {
            let generations = Generations::new(Rule::new(110).unwrap(), steps);
            assert_eq!(generations.len(), steps + 1);
            assert_eq!(generations.count(), steps + 1);
        }
    }

    #[test]
    fn test_generations_deterministic() {
        let rule = Rule::new(110).unwrap();
        let first: Vec<Row> = Generations::new(rule, 16).collect();
        let second: Vec<Row> = Generations::new(rule, 16).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_rule_0_dies_out() {
        let mut generations = Generations::new(Rule::new(0).unwrap(), 4);

        assert_eq!(generations.next(), Some(row("000010000")));
        assert!(generations.all(|row| row.iter().all(|cell| !cell.is_alive())));
    }

    #[test]
    fn test_rule_255_fills_up() {
        let mut generations = Generations::new(Rule::new(255).unwrap(), 4);

        assert_eq!(generations.next(), Some(row("000010000")));
        assert!(generations.all(|row| row.iter().all(CellState::is_alive)));
    }
}
