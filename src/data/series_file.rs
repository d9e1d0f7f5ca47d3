//! Plain-text series loader: one sample per line, value in the first column.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result, anyhow};

use crate::domain::Series;

pub fn load_series(path: &Path) -> Result<Series> {
    let file = File::open(path).context(format!("Failed to open series file: {:?}", path))?;
    parse_series(BufReader::new(file))
        .with_context(|| format!("Failed to read series from {:?}", path))
}

/// Parses the first whitespace-separated token of each line. Blank lines are
/// skipped; anything else that is not a number is an error naming the line.
pub fn parse_series<R: BufRead>(reader: R) -> Result<Series> {
    let mut values = Vec::new();

    for (line_idx, line) in reader.lines().enumerate() {
        let line = line.context(format!("Failed to read line {}", line_idx + 1))?;
        let Some(token) = line.split_whitespace().next() else {
            continue;
        };
        let value: f64 = token.parse().map_err(|e| {
            anyhow!("Line {}: cannot parse {:?} as a number ({e})", line_idx + 1, token)
        })?;
        values.push(value);
    }

    Ok(Series::new(values)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn takes_first_column_and_skips_blank_lines() {
        let text = "1800.5 2024-01-02 09:00\n\n1801.25\t7\n   \n1799.0\n";
        let series = parse_series(Cursor::new(text)).unwrap();
        assert_eq!(series.values(), &[1800.5, 1801.25, 1799.0]);
    }

    #[test]
    fn reports_bad_line_number() {
        let err = parse_series(Cursor::new("1.0\n2.0\nabc 3\n")).unwrap_err();
        assert!(err.to_string().contains("Line 3"), "{err}");
    }

    #[test]
    fn empty_file_is_empty_input() {
        let err = parse_series(Cursor::new("\n\n")).unwrap_err();
        assert!(err.to_string().contains("Empty input"), "{err}");
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let err = parse_series(Cursor::new("1.0\nNaN\n")).unwrap_err();
        assert!(err.to_string().contains("Non-finite"), "{err}");
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "100\n102\n101\n105\n99").unwrap();

        let series = load_series(file.path()).unwrap();
        assert_eq!(series.len(), 5);
        assert_eq!(series[3], 105.0);
    }

    #[test]
    fn missing_file_has_context() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_series(&dir.path().join("missing.txt")).unwrap_err();
        assert!(err.to_string().contains("Failed to open series file"), "{err}");
    }
}
