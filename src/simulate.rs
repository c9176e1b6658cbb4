use std::io;
use std::io::Write;
use std::num::ParseIntError;

use tracing::trace;

use crate::board::Board;

/// Write `generations` renderings of `board` to `out`, starting with its current state. Each
/// rendering is followed by an empty line.
///
/// The board is advanced after every rendering, so it ends up `generations` steps ahead of where
/// it started, one past the last state written.
pub fn write_generations<W: Write>(
    board: &mut Board,
    generations: usize,
    out: &mut W,
) -> io::Result<()> {
    for generation in 0..generations {
        trace!(generation, "Writing generation");

        writeln!(out, "{board}")?;
        board.advance();
    }

    Ok(())
}

/// Parse a generation count. Any 32-bit integer is accepted; negative counts run nothing, the
/// same as zero.
pub fn parse_generations(s: &str) -> Result<usize, ParseIntError> {
    let n: i32 = s.parse()?;

    Ok(usize::try_from(n).unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::parse_generations;
    use super::write_generations;
    use crate::board::Board;

    #[test]
    fn zero_generations_writes_nothing() {
        let mut board: Board = ".O.\n.O.\n.O.\n".parse().unwrap();
        let start = board.clone();
        let mut out = Vec::new();

        write_generations(&mut board, 0, &mut out).unwrap();

        assert!(out.is_empty());
        assert_eq!(board, start);
    }

    #[test]
    fn last_advance_is_not_written() {
        let mut board: Board = "...\nOOO\n...\n".parse().unwrap();
        let mut out = Vec::new();

        write_generations(&mut board, 2, &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert_eq!(out, "...\nOOO\n...\n\n.O.\n.O.\n.O.\n\n");

        // one step past the last written state
        assert_eq!(board.to_string(), "...\nOOO\n...\n");
    }

    #[test]
    fn negative_generations_run_nothing() {
        assert_eq!(parse_generations("-1"), Ok(0));
        assert_eq!(parse_generations("0"), Ok(0));
        assert_eq!(parse_generations("+3"), Ok(3));
    }

    #[test]
    fn malformed_generations_fail() {
        assert!(parse_generations("three").is_err());
        assert!(parse_generations("1.5").is_err());
        assert!(parse_generations("").is_err());
    }
}
