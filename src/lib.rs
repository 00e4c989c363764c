//! # Getting Started
//! Add the following to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! histplot = "*"
//! ```
//!
//! ```rust,no_run
//! use histplot::plot::{self, BarWidthMode, PlotOptionsBuilder};
//!
//! // Render "left_plot.png" from a file of `value count` lines, with bars as
//! // wide as 80% of the smallest gap between values.
//! let options = PlotOptionsBuilder::default()
//!     .title("left channel")
//!     .mode(BarWidthMode::Adaptive)
//!     .build()
//!     .unwrap();
//! let output = plot::plot_histogram("left.txt", &options).unwrap();
//! println!("Plot saved as {}", output);
//! ```

#[macro_use]
extern crate log;
#[macro_use]
extern crate derive_builder;

mod error;
mod format;
pub mod plot;
pub mod read;

pub use error::{PlotError, Result};
