use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};

use advent::{read_input, Day, InputFromFileError, SearchLimits, Solve, DAYS};

#[test]
fn test_examples() -> Result<()> {
    let mut files: Vec<_> = fs::read_dir(project_path("res/test/examples"))?
        .map(|f| f.map(|f| f.path()))
        .collect::<Result<_, _>>()?;
    files.retain(|path| path.extension().map_or(false, |ext| ext == "txt"));
    files.sort_unstable();
    let mut days_tested = Vec::new();
    for path in files {
        println!("Solving {}", path.display());
        let number = day_number(&path)?;
        let day = Day::from_number(number, SearchLimits::default())
            .ok_or_else(|| anyhow!("no solver for {}", path.display()))?;
        let answer = day.solve(&read_input(&path)?)?;
        let expected = fs::read_to_string(path.with_extension("out"))?;
        assert_eq!(expected.trim_end(), answer.to_string(), "{}", path.display());
        days_tested.push(number);
    }
    days_tested.dedup();
    assert_eq!(DAYS.to_vec(), days_tested);
    Ok(())
}

#[test]
fn missing_input_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("day4.txt");
    match read_input(&path) {
        Err(InputFromFileError::Io { path: error_path, .. }) => assert_eq!(path, error_path),
        Ok(_) => panic!("read a file that does not exist"),
    }
}

#[test]
fn read_input_from_file() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("day5.txt");
    fs::write(&path, "3-5\n\n4\n")?;
    let answer = Day::from_number(5, SearchLimits::default())
        .unwrap()
        .solve(&read_input(&path)?)?;
    assert_eq!("Part 1: 1\nPart 2: 3", answer.to_string());
    Ok(())
}

/// `day11-server.txt` is day 11
fn day_number(path: &Path) -> Result<u8> {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .and_then(|s| s.strip_prefix("day"))
        .ok_or_else(|| anyhow!("unexpected file name {}", path.display()))?;
    let digits: String = stem.chars().take_while(char::is_ascii_digit).collect();
    Ok(digits.parse()?)
}

fn project_path(path: impl AsRef<Path>) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(path)
}
