use indexmap::IndexMap;
use log::trace;
use serde::Serialize;
use crate::csv_handler::CheckoutRecord;
use crate::error::Result;

type PatronID = String;

/// Fee charged for every whole day a book is returned past its due date.
pub const LATE_FEE_PER_DAY: f64 = 0.25;

/// Fee owed for a single return that was `delay` days late. Early and
/// on-time returns cost nothing.
#[inline]
pub fn late_fee(delay: i64) -> f64 {
    if delay > 0 {
        LATE_FEE_PER_DAY * delay as f64
    } else {
        0.0
    }
}

/// One line of the summary report.
#[derive(Debug, PartialEq, Serialize)]
pub struct FeeReportRow {
    pub patron_id: PatronID,
    pub late_fees: String,
}

/// Accumulates late fees per patron, remembering the order in which
/// patrons were first seen.
#[derive(Debug, Default)]
pub struct FeeEngine {
    fees: IndexMap<PatronID, f64>,
}

impl FeeEngine {

    /// Applies every record in turn, stopping at the first one that failed to parse.
    pub fn load_records(
        &mut self,
        records: impl Iterator<Item = Result<CheckoutRecord>>,
    ) -> Result<()> {
        for record in records {
            self.record_return(&record?);
        }
        Ok(())
    }

    pub fn record_return(&mut self, record: &CheckoutRecord) {
        let delay = record.days_late();
        let fee = late_fee(delay);
        trace!(
            "Book {} returned by patron {} with delay {} days, fee {:.2}",
            record.book_uid, record.patron_id, delay, fee
        );
        *self.fees.entry(record.patron_id.clone()).or_insert(0.0) += fee;
    }

    pub fn fee_for(&self, patron_id: &str) -> Option<f64> {
        self.fees.get(patron_id).copied()
    }

    pub fn len(&self) -> usize {
        self.fees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fees.is_empty()
    }

    pub fn patrons(&self) -> impl Iterator<Item = FeeReportRow> + '_ {
        self.fees.iter().map(|(patron_id, fees)| FeeReportRow {
            patron_id: patron_id.clone(),
            late_fees: format!("{:.2}", fees),
        })
    }
}
