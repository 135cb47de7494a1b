//! Portfolio loaders.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use gilt_core::Instrument;
use gilt_portfolio::{Holding, Portfolio, PortfolioBuilder};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{FileError, FileResult};

// =============================================================================
// RECORDS
// =============================================================================

/// One instrument row.
///
/// CSV header: `name,face_value,coupon_rate,maturity_years,market_price,yield_to_maturity`.
/// Rates are fractions (0.05 for 5%); `market_price` is a currency amount.
#[derive(Debug, Clone, Deserialize)]
pub struct HoldingRecord {
    /// Instrument name.
    pub name: String,
    /// Face value.
    pub face_value: Decimal,
    /// Annual coupon rate.
    pub coupon_rate: Decimal,
    /// Whole years to maturity.
    pub maturity_years: i64,
    /// Market price in currency units.
    pub market_price: Decimal,
    /// Yield to maturity.
    pub yield_to_maturity: f64,
}

impl HoldingRecord {
    /// Converts the row into a holding.
    ///
    /// Negative maturities are rejected here because they cannot be stored;
    /// a zero maturity is passed through and fails when duration is
    /// calculated.
    fn into_holding(self, source_name: &str, record: u64) -> FileResult<Holding> {
        let maturity = u32::try_from(self.maturity_years).map_err(|_| {
            FileError::parse(
                source_name,
                record,
                format!(
                    "maturity_years = {} for '{}' is out of range",
                    self.maturity_years, self.name
                ),
            )
        })?;

        Ok(Holding::builder()
            .id(self.name)
            .instrument(Instrument::new(
                self.face_value,
                self.coupon_rate,
                self.yield_to_maturity,
                maturity,
            ))
            .market_value(self.market_price)
            .build()?)
    }
}

/// JSON layout: either a bare array of rows or a named object.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonPortfolio {
    Named {
        name: String,
        holdings: Vec<HoldingRecord>,
    },
    Bare(Vec<HoldingRecord>),
}

// =============================================================================
// LOADERS
// =============================================================================

/// Loads a portfolio, choosing the format from the file extension.
///
/// # Errors
///
/// Returns `UnsupportedFormat` for extensions other than `.csv` and `.json`,
/// and any error of the format-specific loader.
pub fn load_portfolio(path: impl AsRef<Path>, name: &str) -> FileResult<Portfolio> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match ext.as_deref() {
        Some("csv") => load_portfolio_csv(path, name),
        Some("json") => load_portfolio_json(path, name),
        _ => Err(FileError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// Loads a portfolio from a CSV file.
///
/// # Errors
///
/// Fails if the file cannot be opened, a row is malformed, or the rows do
/// not form a valid portfolio (empty, duplicate names, non-positive prices).
pub fn load_portfolio_csv(path: impl AsRef<Path>, name: &str) -> FileResult<Portfolio> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| FileError::io(path, e))?;

    let portfolio = read_portfolio_csv(BufReader::new(file), &path.display().to_string(), name)?;
    info!(
        path = %path.display(),
        holdings = portfolio.holding_count(),
        "loaded CSV portfolio"
    );
    Ok(portfolio)
}

/// Reads a CSV portfolio from any reader.
///
/// `source_name` labels parse errors.
///
/// # Errors
///
/// Same as [`load_portfolio_csv`], minus the I/O open failure.
pub fn read_portfolio_csv<R: Read>(
    reader: R,
    source_name: &str,
    name: &str,
) -> FileResult<Portfolio> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);

    let mut holdings = Vec::new();
    for (index, result) in reader.deserialize().enumerate() {
        let row: HoldingRecord = result?;
        let record = index as u64 + 1;
        debug!(record, name = %row.name, "read holding row");
        holdings.push(row.into_holding(source_name, record)?);
    }

    Ok(PortfolioBuilder::new()
        .name(name)
        .add_holdings(holdings)
        .build()?)
}

/// Loads a portfolio from a JSON file.
///
/// Accepts a bare array of rows or `{"name": ..., "holdings": [...]}`. A name
/// in the file takes precedence over `name`.
///
/// # Errors
///
/// Fails if the file cannot be opened, the JSON is malformed, or the rows do
/// not form a valid portfolio.
pub fn load_portfolio_json(path: impl AsRef<Path>, name: &str) -> FileResult<Portfolio> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| FileError::io(path, e))?;

    let portfolio = read_portfolio_json(BufReader::new(file), &path.display().to_string(), name)?;
    info!(
        path = %path.display(),
        holdings = portfolio.holding_count(),
        "loaded JSON portfolio"
    );
    Ok(portfolio)
}

/// Reads a JSON portfolio from any reader.
///
/// # Errors
///
/// Same as [`load_portfolio_json`], minus the I/O open failure.
pub fn read_portfolio_json<R: Read>(
    reader: R,
    source_name: &str,
    name: &str,
) -> FileResult<Portfolio> {
    let (name, records) = match serde_json::from_reader(reader)? {
        JsonPortfolio::Named { name, holdings } => (name, holdings),
        JsonPortfolio::Bare(holdings) => (name.to_string(), holdings),
    };

    let holdings = records
        .into_iter()
        .enumerate()
        .map(|(index, record)| record.into_holding(source_name, index as u64 + 1))
        .collect::<FileResult<Vec<_>>>()?;

    Ok(PortfolioBuilder::new()
        .name(name)
        .add_holdings(holdings)
        .build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gilt_portfolio::PortfolioError;
    use rust_decimal_macros::dec;

    const SAMPLE: &str = "\
name,face_value,coupon_rate,maturity_years,market_price,yield_to_maturity
Bond A,1000000,0.05,5,980000,0.052
Bond B,500000,0.045,7,510000,0.047
";

    #[test]
    fn test_read_csv() {
        let portfolio = read_portfolio_csv(SAMPLE.as_bytes(), "sample", "Sample").unwrap();

        assert_eq!(portfolio.name, "Sample");
        assert_eq!(portfolio.holding_count(), 2);

        let b = &portfolio.holdings[1];
        assert_eq!(b.id, "Bond B");
        assert_eq!(b.instrument.face_value, dec!(500000));
        assert_eq!(b.instrument.coupon_rate, dec!(0.045));
        assert_eq!(b.instrument.maturity_periods, 7);
        assert_eq!(b.market_value, dec!(510000));
    }

    #[test]
    fn test_read_csv_trims_whitespace() {
        let csv = "name, face_value, coupon_rate, maturity_years, market_price, yield_to_maturity\n\
                   Bond A , 100 , 0.05 , 3 , 99 , 0.05\n";
        let portfolio = read_portfolio_csv(csv.as_bytes(), "ws", "WS").unwrap();
        assert_eq!(portfolio.holdings[0].id, "Bond A");
    }

    #[test]
    fn test_negative_maturity_names_record() {
        let csv = format!("{SAMPLE}Bond C,750000,0.06,-10,740000,0.059\n");
        let err = read_portfolio_csv(csv.as_bytes(), "sample", "Sample").unwrap_err();

        match err {
            FileError::Parse { record, reason, .. } => {
                assert_eq!(record, 3);
                assert!(reason.contains("Bond C"));
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_maturity_is_loaded() {
        let csv = format!("{SAMPLE}Bond C,750000,0.06,0,740000,0.059\n");
        let portfolio = read_portfolio_csv(csv.as_bytes(), "sample", "Sample").unwrap();
        assert_eq!(portfolio.holdings[2].instrument.maturity_periods, 0);
    }

    #[test]
    fn test_malformed_number() {
        let csv = format!("{SAMPLE}Bond C,lots,0.06,10,740000,0.059\n");
        let err = read_portfolio_csv(csv.as_bytes(), "sample", "Sample").unwrap_err();
        assert!(matches!(err, FileError::Csv(_)));
    }

    #[test]
    fn test_header_only_is_empty_portfolio() {
        let csv = "name,face_value,coupon_rate,maturity_years,market_price,yield_to_maturity\n";
        let err = read_portfolio_csv(csv.as_bytes(), "empty", "Empty").unwrap_err();
        assert!(matches!(
            err,
            FileError::Portfolio(PortfolioError::EmptyPortfolio)
        ));
    }

    #[test]
    fn test_read_json_named() {
        let json = r#"{
            "name": "From File",
            "holdings": [
                {"name": "Bond C", "face_value": 750000, "coupon_rate": 0.06,
                 "maturity_years": 10, "market_price": 740000, "yield_to_maturity": 0.059}
            ]
        }"#;
        let portfolio = read_portfolio_json(json.as_bytes(), "json", "Fallback").unwrap();

        assert_eq!(portfolio.name, "From File");
        assert_eq!(portfolio.holdings[0].instrument.maturity_periods, 10);
        assert_eq!(portfolio.holdings[0].market_value, dec!(740000));
    }

    #[test]
    fn test_read_json_bare() {
        let json = r#"[
            {"name": "Bond A", "face_value": 1000000, "coupon_rate": 0.05,
             "maturity_years": 5, "market_price": 980000, "yield_to_maturity": 0.052}
        ]"#;
        let portfolio = read_portfolio_json(json.as_bytes(), "json", "Fallback").unwrap();

        assert_eq!(portfolio.name, "Fallback");
        assert_eq!(portfolio.holdings[0].id, "Bond A");
    }

    #[test]
    fn test_unsupported_extension() {
        let err = load_portfolio("bonds.xlsx", "X").unwrap_err();
        assert!(matches!(err, FileError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = load_portfolio("/nonexistent/bonds.csv", "X").unwrap_err();
        assert!(matches!(err, FileError::Io { .. }));
    }
}
