//! Treasury-yield history sources.
//!
//! The yield chart only needs a date-keyed table of yields per tenor. Where
//! that table comes from sits behind [`YieldHistorySource`]; the CSV source
//! reads a local file and never fetches anything over the network.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{FileError, FileResult};

/// Date format of the `date` column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// YIELD HISTORY
// =============================================================================

/// Yields in percent, one column per tenor, keyed by date.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct YieldHistory {
    tenors: Vec<String>,
    rows: BTreeMap<NaiveDate, Vec<Option<f64>>>,
}

impl YieldHistory {
    /// Creates an empty history with the given tenor labels.
    #[must_use]
    pub fn new(tenors: Vec<String>) -> Self {
        Self {
            tenors,
            rows: BTreeMap::new(),
        }
    }

    /// Inserts one dated row. Missing observations are `None`.
    ///
    /// # Errors
    ///
    /// Fails if the row width differs from the number of tenors or the date
    /// is already present.
    pub fn insert(&mut self, date: NaiveDate, values: Vec<Option<f64>>) -> Result<(), String> {
        if values.len() != self.tenors.len() {
            return Err(format!(
                "expected {} values, found {}",
                self.tenors.len(),
                values.len()
            ));
        }
        if self.rows.contains_key(&date) {
            return Err(format!("duplicate date {date}"));
        }
        self.rows.insert(date, values);
        Ok(())
    }

    /// Tenor labels in column order.
    #[must_use]
    pub fn tenors(&self) -> &[String] {
        &self.tenors
    }

    /// Number of dated rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// First and last dates.
    #[must_use]
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.rows.keys().next()?;
        let last = self.rows.keys().next_back()?;
        Some((*first, *last))
    }

    /// Observations for one tenor in date order, skipping gaps.
    ///
    /// An unknown tenor yields an empty series.
    #[must_use]
    pub fn series(&self, tenor: &str) -> Vec<(NaiveDate, f64)> {
        let Some(col) = self.tenors.iter().position(|t| t.eq_ignore_ascii_case(tenor)) else {
            return Vec::new();
        };

        self.rows
            .iter()
            .filter_map(|(date, values)| values[col].map(|v| (*date, v)))
            .collect()
    }

    /// Most recent observation for one tenor.
    #[must_use]
    pub fn latest(&self, tenor: &str) -> Option<(NaiveDate, f64)> {
        self.series(tenor).last().copied()
    }
}

// =============================================================================
// SOURCES
// =============================================================================

/// Provider of a treasury-yield history.
pub trait YieldHistorySource {
    /// Short description for logs and error messages.
    fn source_name(&self) -> String;

    /// Loads the full history.
    ///
    /// # Errors
    ///
    /// Any failure to read or interpret the data fails the whole load.
    fn load(&self) -> FileResult<YieldHistory>;
}

/// CSV-based yield history.
///
/// Layout: a `date` column (`YYYY-MM-DD`) followed by one column per tenor,
/// for example `date,5Y,10Y,30Y`. Values are percentages; blank cells are
/// missing observations.
#[derive(Debug, Clone)]
pub struct CsvYieldHistorySource {
    file_path: PathBuf,
}

impl CsvYieldHistorySource {
    /// Create a new CSV yield history source.
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    /// Path of the CSV file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }
}

impl YieldHistorySource for CsvYieldHistorySource {
    fn source_name(&self) -> String {
        self.file_path.display().to_string()
    }

    fn load(&self) -> FileResult<YieldHistory> {
        let file = File::open(&self.file_path).map_err(|e| FileError::io(&self.file_path, e))?;
        let history = read_yield_history_csv(BufReader::new(file), &self.source_name())?;

        info!(
            path = %self.file_path.display(),
            rows = history.len(),
            tenors = ?history.tenors(),
            "loaded yield history"
        );
        Ok(history)
    }
}

/// Reads a yield history CSV from any reader.
///
/// # Errors
///
/// Fails on a missing or misnamed `date` column, no tenor columns, an
/// unparsable date or value, a row of the wrong width, or a repeated date.
pub fn read_yield_history_csv<R: Read>(reader: R, source_name: &str) -> FileResult<YieldHistory> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let mut columns = headers.iter();
    match columns.next() {
        Some(first) if first.eq_ignore_ascii_case("date") => {}
        other => {
            return Err(FileError::parse(
                source_name,
                0,
                format!("first column must be 'date', found {other:?}"),
            ))
        }
    }

    let tenors: Vec<String> = columns.map(str::to_string).collect();
    if tenors.is_empty() {
        return Err(FileError::parse(source_name, 0, "no tenor columns"));
    }

    let mut history = YieldHistory::new(tenors);

    for (index, result) in reader.records().enumerate() {
        let row = result?;
        let record = index as u64 + 1;

        let mut fields = row.iter();
        let date_text = fields.next().unwrap_or_default();
        let date = NaiveDate::parse_from_str(date_text, DATE_FORMAT).map_err(|e| {
            FileError::parse(source_name, record, format!("invalid date '{date_text}': {e}"))
        })?;

        let values = fields
            .map(|cell| parse_cell(cell, source_name, record))
            .collect::<FileResult<Vec<_>>>()?;

        history
            .insert(date, values)
            .map_err(|reason| FileError::parse(source_name, record, reason))?;
    }

    debug!(source = source_name, rows = history.len(), "parsed yield history");
    Ok(history)
}

fn parse_cell(cell: &str, source_name: &str, record: u64) -> FileResult<Option<f64>> {
    if cell.is_empty() {
        return Ok(None);
    }
    match cell.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(FileError::parse(
            source_name,
            record,
            format!("invalid yield '{cell}'"),
        )),
    }
}
