//! Late-fee reporting for library checkout records, plus a few helpers for
//! working with `yyyy-mm-dd` date strings.

pub mod csv_handler;
pub mod date_utils;
pub mod error;
pub mod fee_engine;
pub mod util;

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::Path;

use log::info;

pub use date_utils::{add_date_range, date_range, reformat_dates, DatedValue};
pub use error::{FeeError, Result};
pub use fee_engine::{FeeEngine, FeeReportRow, LATE_FEE_PER_DAY};

/// Computes late fees per patron from the checkout file at `infile` and
/// writes a `patron_id,late_fees` summary to `outfile`.
///
/// Nothing is written if reading or parsing fails. A failure while writing
/// may leave a partial report behind.
pub fn fees_report(infile: impl AsRef<Path>, outfile: impl AsRef<Path>) -> Result<()> {
    let (infile, outfile) = (infile.as_ref(), outfile.as_ref());

    let file = File::open(infile).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => FeeError::InputNotFound(infile.to_path_buf()),
        _ => FeeError::Io(e),
    })?;
    let mut engine = FeeEngine::default();
    engine.load_records(csv_handler::load_csv_file(BufReader::new(file)))?;

    let out = File::create(outfile).map_err(|source| FeeError::Output {
        path: outfile.to_path_buf(),
        source,
    })?;
    csv_handler::write_fees_csv(&engine, BufWriter::new(out))?;
    info!("Late fee report for {} patrons written to {}", engine.len(), outfile.display());
    Ok(())
}
