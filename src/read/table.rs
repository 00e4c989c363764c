use std::io::BufRead;
use std::path::Path;

use crate::error::{PlotError, Result};
use crate::read::open_file;

const COMMENT: char = '#';

/// A histogram bin: a sample value and the number of times it was seen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bin {
    pub value: f64,
    pub count: f64,
}

/// Bins in the order they were read.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Table {
    bins: Vec<Bin>,
}

impl Table {
    pub fn new(bins: Vec<Bin>) -> Self {
        Self { bins }
    }

    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    /// First column, in file order.
    pub fn values(&self) -> Vec<f64> {
        self.bins.iter().map(|b| b.value).collect()
    }

    /// Second column, in file order.
    pub fn counts(&self) -> Vec<f64> {
        self.bins.iter().map(|b| b.count).collect()
    }

    /// Smallest and biggest sample value, or None for an empty table.
    pub fn value_bounds(&self) -> Option<(f64, f64)> {
        bounds(self.bins.iter().map(|b| b.value))
    }

    /// Smallest and biggest count, or None for an empty table.
    pub fn count_bounds(&self) -> Option<(f64, f64)> {
        bounds(self.bins.iter().map(|b| b.count))
    }
}

fn bounds(iter: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    iter.fold(None, |acc, x| match acc {
        None => Some((x, x)),
        Some((min, max)) => Some((min.min(x), max.max(x))),
    })
}

impl From<Vec<(f64, f64)>> for Table {
    fn from(pairs: Vec<(f64, f64)>) -> Self {
        Self::new(
            pairs
                .into_iter()
                .map(|(value, count)| Bin { value, count })
                .collect(),
        )
    }
}

/// Reads whitespace separated `value count` lines.
///
/// Blank lines and `#` comments are ignored.  Any other line must hold exactly
/// two finite numbers, or reading fails with `PlotError::DataFormat`.
#[derive(Debug, Default)]
pub struct TableReader;

impl TableReader {
    pub fn read(&self, path: &Path) -> Result<Table> {
        let table = self.read_lines(open_file(path)?)?;
        debug!(
            "Read {} bins from {} ({} samples)",
            table.len(),
            path.display(),
            table.counts().iter().sum::<f64>()
        );
        Ok(table)
    }

    pub fn read_lines<T: BufRead>(&self, input: T) -> Result<Table> {
        let mut bins = Vec::new();
        for (index, line) in input.lines().enumerate() {
            let line = line?;
            if let Some(bin) = self.parse_line(index + 1, &line)? {
                bins.push(bin);
            }
        }
        Ok(Table::new(bins))
    }

    fn parse_line(&self, number: usize, line: &str) -> Result<Option<Bin>> {
        let data = match line.find(COMMENT) {
            Some(pos) => &line[..pos],
            None => line,
        };
        let fields: Vec<&str> = data.split_whitespace().collect();
        match fields.len() {
            0 => {
                debug!("Skipping line {}: '{}'", number, line);
                Ok(None)
            }
            2 => Ok(Some(Bin {
                value: Self::parse_field(number, fields[0])?,
                count: Self::parse_field(number, fields[1])?,
            })),
            n => Err(PlotError::data_format(
                number,
                format!("expected 2 columns, found {}", n),
            )),
        }
    }

    fn parse_field(number: usize, field: &str) -> Result<f64> {
        match field.parse::<f64>() {
            Ok(n) if n.is_finite() => Ok(n),
            Ok(_) => Err(PlotError::data_format(
                number,
                format!("'{}' is not a finite number", field),
            )),
            Err(parse_error) => Err(PlotError::data_format(
                number,
                format!("cannot parse '{}' ({})", field, parse_error),
            )),
        }
    }
}
