pub use self::chart::Chart;
pub use self::layout::{BarWidthMode, Layout, FALLBACK_BAR_WIDTH, FIXED_BAR_WIDTH};

mod chart;
mod layout;

use std::path::Path;

use crate::error::Result;
use crate::read::TableReader;

const INPUT_SUFFIX: &str = ".txt";
const OUTPUT_SUFFIX: &str = "_plot.png";

/// A struct holding the options to render a histogram chart.
#[derive(Debug, Clone, Builder)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct PlotOptions {
    /// Text appended to the "Audio Histogram - " caption.
    #[builder(setter(into), default)]
    pub title: String,
    /// Policy for the width of the bars and the x axis range.
    #[builder(default)]
    pub mode: BarWidthMode,
    /// Resolution of the image, in dots per inch.
    #[builder(default = "300")]
    pub dpi: u32,
    /// Width and height of the image, in inches.
    #[builder(default = "(12.0, 6.0)")]
    pub figure_size: (f64, f64),
}

impl PlotOptionsBuilder {
    fn validate(&self) -> std::result::Result<(), String> {
        if self.dpi == Some(0) {
            return Err("DPI should be bigger than zero".to_owned());
        }
        if let Some((width, height)) = self.figure_size {
            if !(width > 0.0 && height > 0.0) {
                return Err(format!("Invalid figure size {}x{}", width, height));
            }
        }
        Ok(())
    }
}

impl PlotOptions {
    /// Image dimensions in pixels.
    pub fn pixels(&self) -> (u32, u32) {
        let (width, height) = self.figure_size;
        let dpi = self.dpi as f64;
        (
            ((width * dpi).round() as u32).max(1),
            ((height * dpi).round() as u32).max(1),
        )
    }
}

/// Path of the image rendered for `filename`: a trailing ".txt" is replaced
/// by "_plot.png" (which is simply appended for any other name).
pub fn output_path(filename: &str) -> String {
    let stem = filename.strip_suffix(INPUT_SUFFIX).unwrap_or(filename);
    format!("{}{}", stem, OUTPUT_SUFFIX)
}

/// Reads a two-column histogram file and renders it as a bar chart next to
/// it.  Returns the path of the image.
pub fn plot_histogram(filename: &str, options: &PlotOptions) -> Result<String> {
    let table = TableReader::default().read(Path::new(filename))?;
    let layout = Layout::new(&table, options.mode);
    debug!(
        "Bar width {} ({} mode), x range {:?}",
        layout.bar_width, options.mode, layout.x_range
    );
    let output = output_path(filename);
    Chart::new(&table, &layout, options).save(Path::new(&output))?;
    Ok(output)
}
