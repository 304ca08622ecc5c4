//! Naive comma-separated text handling.
//!
//! Rows are split on `'\n'` and fields on `','`. There is no quoting, escaping
//! or type coercion; use [`column_f64`] to coerce a column into floats.

use std::io::Read;
use std::num::ParseFloatError;

use thiserror::Error;

/// Rows of raw, untrimmed fields.
pub type Rows = Vec<Vec<String>>;

/// Errors that can occur while reading or coercing delimited text.
#[derive(Error, Debug)]
pub enum DelimitedError {
    /// Reading the source failed or it was not valid UTF-8.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A row had fewer fields than the requested column index.
    #[error("row {row} has no column {column}")]
    MissingColumn {
        /// Zero-based index of the offending row.
        row: usize,
        /// Requested column index.
        column: usize,
    },

    /// A field could not be parsed as a float.
    #[error("row {row}, column {column}: {source}")]
    ParseFloat {
        /// Zero-based index of the offending row.
        row: usize,
        /// Column index of the field.
        column: usize,
        /// The underlying parse failure.
        #[source]
        source: ParseFloatError,
    },
}

/// Splits `text` into rows and fields.
///
/// A trailing newline produces a final row holding one empty field.
///
/// ```
/// let rows = cosiest_lattice::delimited::split_rows("year,temp\n1880,-0.16\n");
/// assert_eq!(rows[1], ["1880", "-0.16"]);
/// assert_eq!(rows[2], [""]);
/// ```
pub fn split_rows(text: &str) -> Rows {
    text.split('\n')
        .map(|row| row.split(',').map(str::to_owned).collect())
        .collect()
}

/// Reads all of `reader` as UTF-8 and splits it with [`split_rows`].
pub fn read_rows<R: Read>(mut reader: R) -> Result<Rows, DelimitedError> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(split_rows(&text))
}

/// Coerces `column` of every row into an `f64`.
///
/// Fields are trimmed before parsing. Blank rows (a single empty field, as left
/// by a trailing newline) are skipped.
pub fn column_f64(rows: &[Vec<String>], column: usize) -> Result<Vec<f64>, DelimitedError> {
    rows.iter()
        .enumerate()
        .filter(|(_, fields)| !is_blank(fields))
        .map(|(row, fields)| {
            let field = fields
                .get(column)
                .ok_or(DelimitedError::MissingColumn { row, column })?;
            field
                .trim()
                .parse::<f64>()
                .map_err(|source| DelimitedError::ParseFloat {
                    row,
                    column,
                    source,
                })
        })
        .collect()
}

fn is_blank(fields: &[String]) -> bool {
    matches!(fields, [only] if only.trim().is_empty())
}
