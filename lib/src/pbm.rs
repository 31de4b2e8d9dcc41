use crate::{automaton::Generations, config::Config};
use std::io::{self, Write};

/// Write the automaton described by `config` as a plain PBM (P1) image.
///
/// The first line is the header `P1 <width> <height>`, followed by one line
/// per generation, seed row first, each rendered as `0`/`1` characters with
/// no separators.
///
/// Rows are streamed to the writer as they are produced, so the memory usage
/// is bounded by the width of the image rather than its area.
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
pub fn write_pbm<W: Write>(writer: &mut W, config: &Config) -> io::Result<()> {
    writeln!(writer, "P1 {} {}", config.width(), config.height())?;

    for row in Generations::new(config.rule, config.steps) {
        writeln!(writer, "{row}")?;
    }

    Ok(())
}

/// Render the automaton described by `config` as a plain PBM (P1) image in a
/// [`String`].
///
/// This materializes the whole image; for large runs prefer streaming with
/// [`write_pbm`].
pub fn pbm_string(config: &Config) -> String {
    let mut buffer = Vec::new();

    // Writing to a Vec<u8> cannot fail.
    write_pbm(&mut buffer, config).unwrap();

    String::from_utf8(buffer).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;

    fn config(rule: u32, steps: usize) -> Config {
        Config::new(Rule::new(rule).unwrap(), steps)
    }

    #[test]
    fn test_rule_30_one_step() {
        assert_eq!(pbm_string(&config(30, 1)), "P1 3 2\n010\n111\n");
    }

    #[test]
    fn test_rule_30_two_steps() {
        assert_eq!(pbm_string(&config(30, 2)), "P1 5 3\n00100\n01110\n11001\n");
    }

    #[test]
    fn test_degenerate_zero_steps() {
        assert_eq!(pbm_string(&config(30, 0)), "P1 1 1\n1\n");
    }

    #[test]
    fn test_rule_90_sierpinski() {
        assert_eq!(
            pbm_string(&config(90, 3)),
            "P1 7 4\n0001000\n0010100\n0100010\n1010101\n"
        );
    }

    #[test]
    fn test_header_dimensions() {
        for steps in 1..6 {
            let image = pbm_string(&config(110, steps));
            let mut lines = image.lines();

            let header = lines.next().unwrap();
            assert_eq!(header, format!("P1 {} {}", 2 * steps + 1, steps + 1));

            let rows: Vec<&str> = lines.collect();
            assert_eq!(rows.len(), steps + 1);
            assert!(rows.iter().all(|row| row.len() == 2 * steps + 1));
        }
    }
}
