use std::error::Error;
use std::path::Path;

use plotters::prelude::*;

use crate::error::{PlotError, Result};
use crate::format::TickFormatter;
use crate::plot::{Layout, PlotOptions};
use crate::read::Table;

const BAR_COLOR: RGBColor = RGBColor(31, 119, 180);
const FONT: &str = "sans-serif";
const POINTS_PER_INCH: f64 = 72.0;

/// A bar chart of a histogram table, ready to be written as a bitmap.
pub struct Chart<'a> {
    table: &'a Table,
    layout: &'a Layout,
    caption: String,
    size: (u32, u32),
    dpi: u32,
}

impl<'a> Chart<'a> {
    pub fn new(table: &'a Table, layout: &'a Layout, options: &PlotOptions) -> Self {
        Self {
            table,
            layout,
            caption: format!("Audio Histogram - {}", options.title),
            size: options.pixels(),
            dpi: options.dpi,
        }
    }

    /// Draws the chart into `path`.  The image format follows the extension.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.draw(path)
            .map_err(|error| render_error(&error.to_string()))
    }

    // Converts typographic points into pixels at the chart resolution.
    fn px(&self, points: f64) -> u32 {
        (points * self.dpi as f64 / POINTS_PER_INCH).round() as u32
    }

    fn draw(&self, path: &Path) -> std::result::Result<(), Box<dyn Error>> {
        let root = BitMapBackend::new(path, self.size).into_drawing_area();
        root.fill(&WHITE)?;

        let x_range = self.layout.x_axis(self.table);
        let y_range = self.layout.y_axis(self.table);
        let x_ticks = TickFormatter::new(&x_range);
        let y_ticks = TickFormatter::new(&y_range);

        let mut chart = ChartBuilder::on(&root)
            .margin(self.px(4.0))
            .caption(&self.caption, (FONT, self.px(12.0)))
            .x_label_area_size(self.px(30.0))
            .y_label_area_size(self.px(48.0))
            .build_cartesian_2d(x_range, y_range)?;

        chart
            .configure_mesh()
            .max_light_lines(0)
            .bold_line_style(BLACK.mix(0.3).stroke_width(1))
            .label_style((FONT, self.px(10.0)))
            .axis_desc_style((FONT, self.px(10.0)))
            .x_desc("Sample Value")
            .y_desc("Count")
            .x_label_formatter(&|x: &f64| x_ticks.format(*x))
            .y_label_formatter(&|y: &f64| y_ticks.format(*y))
            .draw()?;

        let half = self.layout.bar_width / 2.0;
        chart.draw_series(self.table.bins().iter().map(|bin| {
            Rectangle::new(
                [(bin.value - half, 0.0), (bin.value + half, bin.count)],
                BAR_COLOR.filled(),
            )
        }))?;

        root.present()?;
        Ok(())
    }
}

// Text is drawn with a system font, found through fontconfig on Linux.
fn render_error(message: &str) -> PlotError {
    if message.to_lowercase().contains("font") {
        PlotError::Render(format!(
            "{} (a '{}' system font is required to draw text)",
            message, FONT
        ))
    } else {
        PlotError::Render(message.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::{BarWidthMode, PlotOptionsBuilder};

    #[test]
    fn sizes_follow_resolution() {
        let table = Table::default();
        let layout = Layout::new(&table, BarWidthMode::Adaptive);
        let options = PlotOptionsBuilder::default()
            .title("left")
            .build()
            .unwrap();
        let chart = Chart::new(&table, &layout, &options);
        assert_eq!(chart.caption, "Audio Histogram - left");
        assert_eq!(chart.size, (3600, 1800));
        assert_eq!(chart.px(12.0), 50);
        assert_eq!(chart.px(72.0), 300);

        let options = PlotOptionsBuilder::default().dpi(72).build().unwrap();
        let chart = Chart::new(&table, &layout, &options);
        assert_eq!(chart.size, (864, 432));
        assert_eq!(chart.px(10.0), 10);
    }

    #[test]
    fn font_errors_name_the_font() {
        let error = render_error("Font error: No font family found");
        assert_eq!(
            error.to_string(),
            "Could not render plot: Font error: No font family found \
             (a 'sans-serif' system font is required to draw text)"
        );
        let error = render_error("Backend error: Permission denied");
        assert_eq!(
            error.to_string(),
            "Could not render plot: Backend error: Permission denied"
        );
    }
}
