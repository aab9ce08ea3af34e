//! CSV boundary for point sets.
//!
//! Reads tabular data with `x` and `y` header columns into points, the
//! only way point sets enter from the outside. Malformed and non-finite
//! records are rejected here; the geometric core assumes finite
//! coordinates and never re-checks them.

use ordered_float::NotNan;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use crate::data::Point;

#[derive(Debug)]
pub enum ParseError {
  Io(io::Error),
  /// The header row does not name both an `x` and a `y` column.
  MissingHeader,
  /// A record has fewer fields than the header requires.
  MissingField { line: usize, column: &'static str },
  /// A field could not be parsed as a number.
  InvalidNumber { line: usize, value: String },
  /// A field parsed as NaN or an infinity.
  NonFinite { line: usize, value: String },
}

impl fmt::Display for ParseError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ParseError::Io(err) => write!(f, "{}", err),
      ParseError::MissingHeader => write!(f, "header must name 'x' and 'y' columns"),
      ParseError::MissingField { line, column } => {
        write!(f, "line {}: missing '{}' field", line, column)
      }
      ParseError::InvalidNumber { line, value } => {
        write!(f, "line {}: invalid number '{}'", line, value)
      }
      ParseError::NonFinite { line, value } => {
        write!(f, "line {}: non-finite coordinate '{}'", line, value)
      }
    }
  }
}

impl std::error::Error for ParseError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      ParseError::Io(err) => Some(err),
      _ => None,
    }
  }
}

impl From<io::Error> for ParseError {
  fn from(err: io::Error) -> ParseError {
    ParseError::Io(err)
  }
}

/// Read a CSV file with `x`,`y` headers into a point set.
pub fn read_points_csv(path: impl AsRef<Path>) -> Result<Vec<Point<NotNan<f64>>>, ParseError> {
  parse_points_csv(&fs::read_to_string(path)?)
}

/// Parse CSV text with `x`,`y` headers into a point set.
///
/// Column order is free and extra columns are ignored; fields are
/// addressed by header name, matching how the reference data is written.
/// Line numbers in errors are 1-based and count the header.
///
/// # Examples
///
/// ```rust
/// # use giftwrap::loader::parse_points_csv;
/// # use giftwrap::data::Point;
/// let pts = parse_points_csv("x,y\n0,0\n1.5,-2\n").unwrap();
/// assert_eq!(pts.len(), 2);
/// assert_eq!(pts[1], Point::new_nn([1.5, -2.0]));
/// ```
pub fn parse_points_csv(text: &str) -> Result<Vec<Point<NotNan<f64>>>, ParseError> {
  let mut lines = text.lines().enumerate();
  let header = lines.next().ok_or(ParseError::MissingHeader)?.1;
  let columns: Vec<&str> = header.split(',').map(str::trim).collect();
  let x_col = columns
    .iter()
    .position(|&name| name == "x")
    .ok_or(ParseError::MissingHeader)?;
  let y_col = columns
    .iter()
    .position(|&name| name == "y")
    .ok_or(ParseError::MissingHeader)?;

  let mut points = Vec::new();
  for (index, record) in lines {
    if record.trim().is_empty() {
      continue;
    }
    let line = index + 1;
    let fields: Vec<&str> = record.split(',').map(str::trim).collect();
    let x = parse_field(&fields, x_col, "x", line)?;
    let y = parse_field(&fields, y_col, "y", line)?;
    points.push(Point::new([x, y]));
  }
  Ok(points)
}

fn parse_field(
  fields: &[&str],
  column: usize,
  name: &'static str,
  line: usize,
) -> Result<NotNan<f64>, ParseError> {
  let raw = *fields.get(column).ok_or(ParseError::MissingField {
    line,
    column: name,
  })?;
  let value: f64 = raw.parse().map_err(|_| ParseError::InvalidNumber {
    line,
    value: raw.to_string(),
  })?;
  if !value.is_finite() {
    return Err(ParseError::NonFinite {
      line,
      value: raw.to_string(),
    });
  }
  NotNan::new(value).map_err(|_| ParseError::NonFinite {
    line,
    value: raw.to_string(),
  })
}
