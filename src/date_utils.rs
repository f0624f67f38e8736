//! Helpers for `yyyy-mm-dd` date strings: display reformatting and daily
//! date ranges.

use chrono::NaiveDate;

use crate::error::{FeeError, Result};

/// Input format accepted by every helper in this module.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Output format produced by [`reformat_dates`], e.g. `01 Jan 2001`.
pub const DISPLAY_DATE_FORMAT: &str = "%d %b %Y";

/// A date paired with the value it was assigned by [`add_date_range`].
pub type DatedValue<T> = (NaiveDate, T);

pub(crate) fn parse_date(value: &str, format: &'static str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, format).map_err(|source| FeeError::InvalidDate {
        value: value.to_string(),
        format,
        source,
    })
}

/// Re-formats each `yyyy-mm-dd` string as `dd Mon yyyy`, preserving order.
pub fn reformat_dates<S: AsRef<str>>(old_dates: &[S]) -> Result<Vec<String>> {
    old_dates
        .iter()
        .map(|old_date| {
            parse_date(old_date.as_ref(), ISO_DATE_FORMAT)
                .map(|date| date.format(DISPLAY_DATE_FORMAT).to_string())
        })
        .collect()
}

/// Returns `n` consecutive calendar days beginning at `start`.
///
/// A negative `n` is rejected with [`FeeError::InvalidArgument`]; zero yields
/// an empty range.
pub fn date_range(start: &str, n: i64) -> Result<Vec<NaiveDate>> {
    let count = usize::try_from(n)
        .map_err(|_| FeeError::InvalidArgument(format!("date count must be non-negative, got {n}")))?;
    let first = parse_date(start, ISO_DATE_FORMAT)?;

    let dates: Vec<NaiveDate> = std::iter::successors(Some(first), |date| date.succ_opt())
        .take(count)
        .collect();
    if dates.len() < count {
        return Err(FeeError::InvalidArgument(format!(
            "{count} days starting at {start} runs past the last representable date"
        )));
    }
    Ok(dates)
}

/// Pairs every element of `values` with a day of the range starting at
/// `start_date`, in order.
pub fn add_date_range<T>(values: Vec<T>, start_date: &str) -> Result<Vec<DatedValue<T>>> {
    let n = i64::try_from(values.len())
        .map_err(|_| FeeError::InvalidArgument(format!("too many values: {}", values.len())))?;
    let dates = date_range(start_date, n)?;
    Ok(dates.into_iter().zip(values).collect())
}
