use std::ops::Range;

// Units-based suffixes for tick labels.
const UNITS: &[&str] = &["", " K", " M", " G", " T", " P"];

/// Formats axis tick values with a precision and a unit suffix chosen from
/// the span of the axis, so that -32768..32767 reads as "-32.8 K".."32.8 K".
#[derive(Debug, Clone)]
pub struct TickFormatter {
    /// Decimals digits to be used
    decimals: usize,
    /// Number of times the value is divided by 1000
    divisor: u8,
}

impl TickFormatter {
    pub fn new(range: &Range<f64>) -> TickFormatter {
        let span = (range.end - range.start).abs();
        if span == 0.0 || !span.is_finite() {
            return TickFormatter {
                decimals: 3,
                divisor: 0,
            };
        }
        let log = span.log10() as i64;
        if log <= 0 {
            TickFormatter {
                decimals: (-log as usize).min(8) + 3,
                divisor: 0,
            }
        } else if log < 4 {
            // Below ten thousand plain numbers read fine
            TickFormatter {
                decimals: (3 - log as usize).min(2),
                divisor: 0,
            }
        } else {
            TickFormatter {
                decimals: log.rem_euclid(3) as usize,
                divisor: ((log - 1) / 3).min(UNITS.len() as i64 - 1) as u8,
            }
        }
    }

    pub fn format(&self, number: f64) -> String {
        let value = number / 1000_f64.powi(self.divisor.into());
        // -0.0 would print as "-0"
        let value = if value == 0.0 { 0.0 } else { value };
        format!(
            "{:.*}{}",
            self.decimals,
            value,
            UNITS[self.divisor as usize]
        )
    }
}
