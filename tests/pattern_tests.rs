use std::path::PathBuf;

use life::board::Board;
use life::board::InvalidBoard;

fn pattern_files(dir: &str) -> anyhow::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        paths.push(entry?.path());
    }

    paths.sort();

    Ok(paths)
}

#[test]
fn test_patterns() -> anyhow::Result<()> {
    let mut tested = 0;
    let mut failed = Vec::new();

    for path in pattern_files("tests/patterns")? {
        let text = std::fs::read_to_string(&path)?;

        match Board::open(&path) {
            Ok(board) if board.to_string() == text => tested += 1,
            Ok(board) => failed.push((path, format!("rendered as\n{board}"))),
            Err(e) => failed.push((path, e.to_string())),
        }
    }

    if !failed.is_empty() {
        for (path, err) in &failed {
            eprintln!("Failed to round trip {:?}: {}", path, err);
        }

        panic!(
            "{}/{} patterns failed",
            failed.len(),
            tested + failed.len()
        );
    }

    assert!(tested > 0, "no patterns found");

    Ok(())
}

#[test]
fn test_invalid_patterns() -> anyhow::Result<()> {
    let paths = pattern_files("tests/invalid")?;
    assert!(!paths.is_empty(), "no invalid patterns found");

    for path in paths {
        assert_eq!(Board::open(&path), Err(InvalidBoard), "{path:?} was accepted");
    }

    Ok(())
}
