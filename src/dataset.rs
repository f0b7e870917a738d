//! # Dataset
//!
//! Loads the 2-D samples the search fits against: plain text, one sample per
//! line, two whitespace-separated decimal tokens per line, no header. Loading
//! is strict; a malformed line aborts the whole load with a `Parse` error
//! before any search logic runs.
//!
//! ## Example
//!
//! ```rust
//! use std::io::Cursor;
//! use evoline::dataset::Dataset;
//!
//! let dataset = Dataset::from_reader(Cursor::new("0.0 1.0\n1.0 3.0\n")).unwrap();
//! assert_eq!(dataset.len(), 2);
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{RegressionError, Result};

/// An immutable (x, y) sample.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

/// An ordered, immutable collection of samples, loaded once and treated as
/// read-only for the remainder of execution.
#[derive(Debug, Clone)]
pub struct Dataset {
    points: Vec<DataPoint>,
}

impl Dataset {
    /// Builds a dataset from already-parsed points.
    pub fn from_points(points: Vec<DataPoint>) -> Self {
        Self { points }
    }

    /// Loads a dataset from a file path.
    ///
    /// # Errors
    ///
    /// Returns `RegressionError::Io` if the file cannot be opened or read,
    /// and `RegressionError::Parse` if any line is malformed.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Loads a dataset from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        let mut points = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            points.push(Self::parse_line(&line, index + 1)?);
        }

        debug!(points = points.len(), "dataset loaded");
        Ok(Self { points })
    }

    fn parse_line(line: &str, line_number: usize) -> Result<DataPoint> {
        let tokens: Vec<&str> = line.split_whitespace().collect();

        if tokens.len() != 2 {
            return Err(RegressionError::Parse(format!(
                "line {}: expected two numeric tokens, got {:?}",
                line_number, line
            )));
        }

        let x = Self::parse_value(tokens[0], line_number)?;
        let y = Self::parse_value(tokens[1], line_number)?;

        Ok(DataPoint { x, y })
    }

    fn parse_value(token: &str, line_number: usize) -> Result<f64> {
        let value: f64 = token.parse().map_err(|_| {
            RegressionError::Parse(format!(
                "line {}: invalid numeric token {:?}",
                line_number, token
            ))
        })?;

        if !value.is_finite() {
            return Err(RegressionError::Parse(format!(
                "line {}: non-finite value {:?}",
                line_number, token
            )));
        }

        Ok(value)
    }

    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parses_two_column_data() {
        let dataset = Dataset::from_reader(Cursor::new("0.0 1.0\n1.5 -3.25\n2 5\n")).unwrap();

        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.points()[0], DataPoint { x: 0.0, y: 1.0 });
        assert_eq!(dataset.points()[1], DataPoint { x: 1.5, y: -3.25 });
        assert_eq!(dataset.points()[2], DataPoint { x: 2.0, y: 5.0 });
    }

    #[test]
    fn test_rejects_non_numeric_token() {
        let err = Dataset::from_reader(Cursor::new("abc 3.0\n")).unwrap_err();

        match err {
            RegressionError::Parse(msg) => assert!(msg.contains("line 1")),
            other => panic!("expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_wrong_token_count() {
        assert!(Dataset::from_reader(Cursor::new("1.0\n")).is_err());
        assert!(Dataset::from_reader(Cursor::new("1.0 2.0 3.0\n")).is_err());
    }

    #[test]
    fn test_rejects_blank_line() {
        let err = Dataset::from_reader(Cursor::new("1.0 2.0\n\n3.0 4.0\n")).unwrap_err();

        match err {
            RegressionError::Parse(msg) => assert!(msg.contains("line 2")),
            other => panic!("expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_non_finite_value() {
        assert!(Dataset::from_reader(Cursor::new("inf 2.0\n")).is_err());
        assert!(Dataset::from_reader(Cursor::new("1.0 NaN\n")).is_err());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = Dataset::from_path("definitely/not/a/real/file.txt").unwrap_err();

        assert!(matches!(err, RegressionError::Io(_)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_data_point_round_trips_through_json() {
        let point = DataPoint { x: 1.5, y: -2.0 };
        let json = serde_json::to_string(&point).unwrap();
        let back: DataPoint = serde_json::from_str(&json).unwrap();

        assert_eq!(point, back);
    }
}
