use std::io;
use std::io::Write;

use anyhow::Context;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use life::board::Board;
use life::simulate;

const USAGE: &str = "Usage: life <file> <generations>";

fn main() -> anyhow::Result<()> {
    // Logs go to stderr, stdout only carries the boards
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let [_, path, generations] = args.as_slice() else {
        println!("{USAGE}");
        return Ok(());
    };

    let mut board = match Board::open(path) {
        Ok(board) => board,
        Err(e) => {
            println!("{e}");
            return Ok(());
        }
    };

    let generations = simulate::parse_generations(generations)
        .with_context(|| format!("Invalid generation count \"{generations}\""))?;

    debug!(
        rows = board.rows(),
        cols = board.cols(),
        generations,
        "Running"
    );

    let mut stdout = io::BufWriter::new(io::stdout().lock());
    simulate::write_generations(&mut board, generations, &mut stdout)
        .context("Failed to write generations")?;
    stdout.flush().context("Failed to flush stdout")?;

    Ok(())
}
