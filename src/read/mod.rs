pub use self::table::{Bin, Table, TableReader};

mod table;

use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

use crate::error::{PlotError, Result};

/// Return io::BufRead from a path.  Fails with `PlotError::FileOpen` if the
/// path cannot be opened.
fn open_file(path: &Path) -> Result<Box<dyn io::BufRead>> {
    match File::open(path) {
        Ok(fd) => Ok(Box::new(BufReader::new(fd))),
        Err(error) => Err(PlotError::file_open(path, error)),
    }
}
