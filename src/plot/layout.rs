use std::fmt;
use std::ops::Range;
use std::str::FromStr;

use crate::read::Table;

/// Width used by the adaptive policy when there is no gap to measure.
pub const FALLBACK_BAR_WIDTH: f64 = 1000.0;
/// Width used by the fixed policy.
pub const FIXED_BAR_WIDTH: f64 = 1.0;
/// Fraction of the minimum gap between values covered by a bar.
const GAP_FILL: f64 = 0.8;
/// Fraction of the data extent added on each side of the x axis.
const MARGIN_RATIO: f64 = 0.1;
/// Constant padding added on each side of the x axis.
const MARGIN_PADDING: f64 = 1000.0;

/// How the width of the bars is decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarWidthMode {
    /// Bars fill 80% of the smallest gap between sample values, and the x
    /// axis is padded around the data.
    Adaptive,
    /// Bars are one unit wide and the axis range fits the data.
    Fixed,
}

impl Default for BarWidthMode {
    fn default() -> Self {
        BarWidthMode::Adaptive
    }
}

impl FromStr for BarWidthMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "adaptive" => Ok(BarWidthMode::Adaptive),
            "fixed" => Ok(BarWidthMode::Fixed),
            _ => Err(format!("unknown bar width mode '{}'", s)),
        }
    }
}

impl fmt::Display for BarWidthMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BarWidthMode::Adaptive => write!(f, "adaptive"),
            BarWidthMode::Fixed => write!(f, "fixed"),
        }
    }
}

/// Parameters derived from the data before drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// Horizontal extent of every bar (always positive).
    pub bar_width: f64,
    /// Explicit x display range.  None means fitting the axis to the bars.
    pub x_range: Option<Range<f64>>,
}

impl Layout {
    pub fn new(table: &Table, mode: BarWidthMode) -> Self {
        match mode {
            BarWidthMode::Adaptive => Self {
                bar_width: Self::adaptive_width(&table.values()),
                x_range: table.value_bounds().map(|(min, max)| {
                    let margin = (max - min) * MARGIN_RATIO + MARGIN_PADDING;
                    min - margin..max + margin
                }),
            },
            BarWidthMode::Fixed => Self {
                bar_width: FIXED_BAR_WIDTH,
                x_range: None,
            },
        }
    }

    fn adaptive_width(values: &[f64]) -> f64 {
        if values.len() < 2 {
            return FALLBACK_BAR_WIDTH;
        }
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));
        // Repeated values give no gap; they must not collapse bars to nothing
        sorted
            .windows(2)
            .map(|w| w[1] - w[0])
            .filter(|gap| *gap > 0.0)
            .fold(None, |acc: Option<f64>, gap| {
                Some(acc.map_or(gap, |min| min.min(gap)))
            })
            .map_or(FALLBACK_BAR_WIDTH, |gap| gap * GAP_FILL)
    }

    /// The x range the chart will show: the explicit one if any, otherwise
    /// every bar plus a 5% pad.
    pub fn x_axis(&self, table: &Table) -> Range<f64> {
        if let Some(range) = &self.x_range {
            return range.clone();
        }
        match table.value_bounds() {
            Some((min, max)) => {
                let start = min - self.bar_width / 2.0;
                let end = max + self.bar_width / 2.0;
                let pad = (end - start) * 0.05;
                start - pad..end + pad
            }
            None => 0.0..1.0,
        }
    }

    /// The y range the chart will show: from zero (or the lowest count, if
    /// negative) to the highest count plus a 5% pad.
    pub fn y_axis(&self, table: &Table) -> Range<f64> {
        match table.count_bounds() {
            Some((min, max)) if max > 0.0 => min.min(0.0)..max * 1.05,
            Some((min, _)) if min < 0.0 => min * 1.05..0.0,
            _ => 0.0..1.0,
        }
    }
}
