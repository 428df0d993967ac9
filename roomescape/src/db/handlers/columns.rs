//! Text encoding of date and time columns.
//!
//! Both tables keep calendar dates and times of day as ISO text. Writes go through the
//! `encode_*` functions; reads go through the `*_column` functions, which report a value
//! that does not parse as [`sqlx::Error::ColumnDecode`] naming the offending column.

use chrono::{NaiveDate, NaiveTime};
use sqlx::Row;
use sqlx::sqlite::SqliteRow;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_STORAGE_FORMAT: &str = "%H:%M:%S";
// HH:MM:SS[.fff] first, then the short HH:MM form
const TIME_FORMATS: [&str; 3] = ["%H:%M:%S%.f", "%H:%M:%S", "%H:%M"];

pub(crate) fn encode_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub(crate) fn encode_time(time: NaiveTime) -> String {
    time.format(TIME_STORAGE_FORMAT).to_string()
}

pub(crate) fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).ok()
}

pub(crate) fn parse_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    TIME_FORMATS.iter().find_map(|format| NaiveTime::parse_from_str(raw, format).ok())
}

pub(crate) fn date_column(row: &SqliteRow, column: &str) -> Result<NaiveDate, sqlx::Error> {
    let raw: String = row.try_get(column)?;
    parse_date(&raw).ok_or_else(|| decode_error(column, format!("{raw:?} is not a YYYY-MM-DD date")))
}

pub(crate) fn time_column(row: &SqliteRow, column: &str) -> Result<NaiveTime, sqlx::Error> {
    let raw: String = row.try_get(column)?;
    parse_time(&raw).ok_or_else(|| decode_error(column, format!("{raw:?} is not an HH:MM[:SS] time")))
}

fn decode_error(column: &str, message: String) -> sqlx::Error {
    sqlx::Error::ColumnDecode {
        index: format!("{column:?}"),
        source: message.into(),
    }
}
