//! CSV Data Loader Module
//! Parses raw CSV bytes into a [`Table`] using Polars.

use crate::data::table::Table;
use crate::error::{ExplorerError, ExplorerResult};
use polars::prelude::*;
use std::collections::HashMap;
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, info};

/// Field contents treated as absent, on top of empty fields.
const MISSING_TOKENS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn missing_tokens() -> NullValues {
    NullValues::AllColumns(MISSING_TOKENS.iter().map(|t| (*t).into()).collect())
}

/// Handles CSV parsing with Polars.
pub struct DataLoader;

impl DataLoader {
    /// Read a CSV file from disk and parse it.
    pub fn load_path(path: &Path) -> ExplorerResult<Table> {
        let bytes = std::fs::read(path)?;
        info!(path = %path.display(), bytes = bytes.len(), "reading CSV");
        Self::load_bytes(&bytes)
    }

    /// Parse raw CSV bytes. Any structural problem yields [`ExplorerError::Parse`].
    pub fn load_bytes(bytes: &[u8]) -> ExplorerResult<Table> {
        if bytes.iter().all(|b| b.is_ascii_whitespace()) {
            return Err(ExplorerError::Parse(
                "No columns to parse from file".to_string(),
            ));
        }

        let headers = Self::normalized_headers(bytes)?;

        let df = match Self::read_inferred(bytes) {
            Ok(df) => df,
            // Inference can pick a dtype some value does not fit (an integer
            // beyond i64). Re-read as text and type each column by casting.
            Err(first) => {
                debug!(error = %first, "typed read failed, retrying as text");
                Self::read_as_text(bytes)
                    .and_then(Self::type_text_columns)
                    .map_err(|e| ExplorerError::Parse(e.to_string()))?
            }
        };

        if df.width() != headers.len() {
            return Err(ExplorerError::Parse(format!(
                "expected {} columns from header, parsed {}",
                headers.len(),
                df.width()
            )));
        }

        // Polars has its own naming for blank and repeated headers; replace
        // them positionally with the normalized names.
        let columns: Vec<Column> = df
            .get_columns()
            .iter()
            .zip(&headers)
            .map(|(col, name)| {
                let mut col = col.clone();
                col.rename(name.as_str().into());
                col
            })
            .collect();
        let df = DataFrame::new(columns)?;

        debug!(rows = df.height(), columns = df.width(), "parsed CSV");
        Table::from_dataframe(df)
    }

    fn read_with(bytes: &[u8], infer_schema_length: Option<usize>) -> PolarsResult<DataFrame> {
        let options = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(infer_schema_length)
            .map_parse_options(|parse| parse.with_null_values(Some(missing_tokens())));

        options
            .into_reader_with_file_handle(Cursor::new(bytes))
            .finish()
    }

    /// Scan every row for schema inference so a late text value demotes the
    /// column instead of failing the read.
    fn read_inferred(bytes: &[u8]) -> PolarsResult<DataFrame> {
        Self::read_with(bytes, None)
    }

    /// Every column as `String`; missing tokens are still nulls.
    fn read_as_text(bytes: &[u8]) -> PolarsResult<DataFrame> {
        Self::read_with(bytes, Some(0))
    }

    /// Cast each text column to the narrowest of Int64 and Float64 that holds
    /// every present value. Columns with no present value stay text.
    fn type_text_columns(df: DataFrame) -> PolarsResult<DataFrame> {
        let columns: Vec<Column> = df
            .get_columns()
            .iter()
            .map(|col| {
                if col.null_count() == col.len() {
                    return col.clone();
                }
                let series = col.as_materialized_series();
                [DataType::Int64, DataType::Float64]
                    .iter()
                    .find_map(|dtype| series.strict_cast(dtype).ok())
                    .map(Column::from)
                    .unwrap_or_else(|| col.clone())
            })
            .collect();
        DataFrame::new(columns)
    }

    /// Header names with blank cells named `Unnamed: {i}` and repeats
    /// suffixed `.1`, `.2`, ...
    pub fn normalized_headers(bytes: &[u8]) -> ExplorerResult<Vec<String>> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(bytes);
        let raw = reader
            .headers()
            .map_err(|e| ExplorerError::Parse(e.to_string()))?;

        if raw.is_empty() {
            return Err(ExplorerError::Parse(
                "No columns to parse from file".to_string(),
            ));
        }

        let mut names: Vec<String> = Vec::with_capacity(raw.len());
        let mut repeats: HashMap<String, usize> = HashMap::new();

        for (i, cell) in raw.iter().enumerate() {
            let base = if cell.trim().is_empty() {
                format!("Unnamed: {}", i)
            } else {
                cell.to_string()
            };

            let mut name = base.clone();
            while names.contains(&name) {
                let n = repeats.entry(base.clone()).or_insert(0);
                *n += 1;
                name = format!("{}.{}", base, n);
            }
            names.push(name);
        }

        Ok(names)
    }
}
