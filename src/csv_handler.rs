use std::io::{Read, Write};
use chrono::NaiveDate;
use csv::StringRecord;
use log::debug;
use crate::date_utils::parse_date;
use crate::error::{FeeError, Result};
use crate::fee_engine::FeeEngine;

/// Date format used by the `date_due` and `date_returned` columns.
pub const CHECKOUT_DATE_FORMAT: &str = "%m/%d/%Y";

/// Number of leading columns every checkout row must carry.
pub const CHECKOUT_FIELDS: usize = 6;

pub const REPORT_HEADER: [&str; 2] = ["patron_id", "late_fees"];

/// A single book loan, in the column order of the checkout file.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutRecord {
    pub book_uid: String,
    pub isbn_13: String,
    pub patron_id: String,
    pub date_checkout: String,
    pub date_due: NaiveDate,
    pub date_returned: NaiveDate,
}

impl CheckoutRecord {
    /// Builds a record from the positional fields of a CSV row. Fields past
    /// the sixth are ignored.
    pub fn from_record(record: &StringRecord) -> Result<Self> {
        if record.len() < CHECKOUT_FIELDS {
            return Err(FeeError::MalformedRow {
                line: record.position().map_or(0, |pos| pos.line()),
                found: record.len(),
            });
        }
        Ok(CheckoutRecord {
            book_uid: record[0].to_string(),
            isbn_13: record[1].to_string(),
            patron_id: record[2].to_string(),
            date_checkout: record[3].to_string(),
            date_due: parse_date(&record[4], CHECKOUT_DATE_FORMAT)?,
            date_returned: parse_date(&record[5], CHECKOUT_DATE_FORMAT)?,
        })
    }

    /// Whole days between the due date and the return; negative for early returns.
    pub fn days_late(&self) -> i64 {
        (self.date_returned - self.date_due).num_days()
    }
}

/// Reads checkout records from CSV. The first row is always discarded as a
/// header, whatever it contains.
pub fn load_csv_file<R: Read>(reader: R) -> impl Iterator<Item = Result<CheckoutRecord>> {
    let records = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader)
        .into_records();
    records.map(|result| {
        let record = result?;
        CheckoutRecord::from_record(&record)
    })
}

/// Writes the per-patron summary as CSV. The header is written even when no
/// patron has been seen.
pub fn write_fees_csv<W: Write>(engine: &FeeEngine, writer: W) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    writer.write_record(REPORT_HEADER)?;
    for row in engine.patrons() {
        writer.serialize(row)?;
    }
    writer.flush()?;
    debug!("Wrote late fees for {} patrons", engine.len());
    Ok(())
}
