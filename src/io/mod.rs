//! Reading room scans and putting them in outline order.
//!
//! Scans are CSV files whose first field holds three whitespace-separated
//! coordinates, e.g.
//!
//! ```text
//! X
//! "1.25 0.50 2.10"
//! "1.30 0.52 0.02"
//! ```

mod ordering;

pub use ordering::{order_points, StartPolicy};

use std::path::Path;

use crate::error::{LoadError, Result};
use crate::math::Point3;

/// Parses CSV text into points.
///
/// A first line whose leading field holds no numbers is the header; any other
/// first line is read as data.
/// Blank lines are skipped and fields after the first comma are ignored.
///
/// # Errors
///
/// Returns `LoadError::ColumnCount` if a row does not hold exactly three
/// values, `LoadError::NotNumeric` if a value does not parse, and
/// `LoadError::Empty` if no points were read. Line numbers are 1-based.
pub fn parse_points(text: &str) -> Result<Vec<Point3>> {
    let mut points = Vec::new();
    let mut rows = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .peekable();

    if rows.peek().is_some_and(|&(_, row)| is_header(row)) {
        rows.next();
    }
    for (line, row) in rows {
        points.push(parse_row(line, row)?);
    }

    if points.is_empty() {
        return Err(LoadError::Empty.into());
    }
    Ok(points)
}

fn first_field(row: &str) -> &str {
    row.split(',').next().unwrap_or_default().trim().trim_matches('"')
}

fn is_header(row: &str) -> bool {
    !first_field(row)
        .split_whitespace()
        .any(|token| token.parse::<f64>().is_ok())
}

fn parse_row(line: usize, row: &str) -> std::result::Result<Point3, LoadError> {
    let values: Vec<&str> = first_field(row).split_whitespace().collect();
    let [x, y, z] = values[..] else {
        return Err(LoadError::ColumnCount {
            line,
            found: values.len(),
        });
    };
    let number = |value: &str| {
        value.parse::<f64>().map_err(|_| LoadError::NotNumeric {
            line,
            value: value.to_owned(),
        })
    };
    Ok(Point3::new(number(x)?, number(y)?, number(z)?))
}

/// Reads and parses a scan file.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, otherwise the errors
/// of [`parse_points`].
pub fn load_points(path: impl AsRef<Path>) -> Result<Vec<Point3>> {
    let text = std::fs::read_to_string(path).map_err(LoadError::from)?;
    parse_points(&text)
}

/// Reads a scan file and orders it for segmentation.
///
/// # Errors
///
/// See [`load_points`].
pub fn load_ordered(path: impl AsRef<Path>, start: StartPolicy) -> Result<Vec<Point3>> {
    Ok(order_points(&load_points(path)?, start))
}
