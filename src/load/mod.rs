// src/load/mod.rs
pub mod raw_table;
pub mod zips;

pub use raw_table::RawTable;
pub use zips::read_zipped_csv;

use anyhow::{Context, Result};
use glob::{glob_with, MatchOptions, Pattern};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// List the files directly inside `dir` whose names match `pattern`, in
/// lexicographic order. Hidden files are never matched by a wildcard.
pub fn discover_inputs(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let escaped = Pattern::escape(&dir.to_string_lossy());
    let full = format!("{}/{}", escaped.trim_end_matches('/'), pattern);
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..Default::default()
    };
    let mut paths: Vec<PathBuf> = glob_with(&full, options)
        .with_context(|| format!("Failed to read glob pattern '{}'", full))?
        .filter_map(|entry| entry.ok())
        .filter(|p| p.is_file())
        .collect();
    paths.sort();
    debug!(pattern = %full, found = paths.len(), "discovered inputs");
    Ok(paths)
}

/// Read every archive in `paths` and stack them into one table, first file's
/// rows first.
#[instrument(level = "info", skip(paths), fields(files = paths.len()))]
pub fn load_tables(paths: &[PathBuf]) -> Result<RawTable> {
    let mut tables = Vec::with_capacity(paths.len());
    for path in paths {
        let table = read_zipped_csv(path)?;
        info!(file = %path.display(), rows = table.len(), "loaded");
        tables.push(table);
    }
    RawTable::concat(tables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{csv_text, row, write_zip};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn discovers_only_matching_files_in_order() -> Result<()> {
        let dir = tempdir()?;
        write_zip(dir.path(), "b.csv.zip", &csv_text(&[]))?;
        write_zip(dir.path(), "a.csv.zip", &csv_text(&[]))?;
        write_zip(dir.path(), ".hidden.csv.zip", &csv_text(&[]))?;
        fs::write(dir.path().join("notes.txt"), "ignore me")?;
        fs::create_dir(dir.path().join("nested"))?;
        write_zip(&dir.path().join("nested"), "c.csv.zip", &csv_text(&[]))?;

        let found = discover_inputs(dir.path(), "*.csv.zip")?;
        let names: Vec<_> = found
            .iter()
            .filter_map(|p| p.file_name()?.to_str())
            .collect();
        assert_eq!(names, ["a.csv.zip", "b.csv.zip"]);
        Ok(())
    }

    #[test]
    fn hidden_archives_are_skipped() -> Result<()> {
        let dir = tempdir()?;
        write_zip(dir.path(), ".partial.csv.zip", &csv_text(&[]))?;
        assert!(discover_inputs(dir.path(), "*.csv.zip")?.is_empty());
        Ok(())
    }

    #[test]
    fn missing_directory_finds_nothing() -> Result<()> {
        let dir = tempdir()?;
        let found = discover_inputs(&dir.path().join("absent"), "*.csv.zip")?;
        assert!(found.is_empty());
        Ok(())
    }

    #[test]
    fn loads_files_in_sequence() -> Result<()> {
        let dir = tempdir()?;
        let first = write_zip(
            dir.path(),
            "part1.csv.zip",
            &csv_text(&[
                row(0, "admin.", "basic.4y", "may", 5),
                row(1, "admin.", "basic.4y", "may", 6),
                row(2, "admin.", "basic.4y", "may", 7),
            ]),
        )?;
        let second = write_zip(
            dir.path(),
            "part2.csv.zip",
            &csv_text(&[
                row(0, "retired", "basic.4y", "jun", 8),
                row(1, "retired", "basic.4y", "jun", 9),
            ]),
        )?;

        let table = load_tables(&[first, second])?;
        let day = table.column("day")?;
        let days: Vec<&str> = table.rows.iter().map(|r| r[day].as_str()).collect();
        assert_eq!(days, ["5", "6", "7", "8", "9"]);
        Ok(())
    }

    #[test]
    fn no_files_is_an_error() {
        assert!(load_tables(&[]).is_err());
    }
}
