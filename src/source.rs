// 📂 Source - CSV rows in, formatted lines out
// Each data row becomes a Row keyed by header name. Required columns are
// checked against the header before any row is read.

use crate::error::{SlcspError, SlcspResult};
use crate::record::Row;
use csv::ReaderBuilder;
use std::fmt::Display;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tracing::debug;

// ============================================================================
// READING
// ============================================================================

/// Read every row of a CSV file, requiring the given columns in its header
pub fn read_rows<P: AsRef<Path>>(path: P, required: &[&str]) -> SlcspResult<Vec<Row>> {
    let path = path.as_ref();
    let file = File::open(path)?;
    read_rows_from(file, &path.display().to_string(), required)
}

/// Same as [`read_rows`] over any reader; `source_name` only labels errors
pub fn read_rows_from<R: Read>(
    reader: R,
    source_name: &str,
    required: &[&str],
) -> SlcspResult<Vec<Row>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);

    let headers = rdr.headers()?;
    require_columns(headers.iter(), required, source_name)?;

    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        let row: Row = result?;
        rows.push(row);
    }

    debug!(source = source_name, rows = rows.len(), "read csv source");
    Ok(rows)
}

fn require_columns<'a, I>(actual: I, required: &[&str], source_name: &str) -> SlcspResult<()>
where
    I: Iterator<Item = &'a str>,
{
    let actual_headers: Vec<&str> = actual.collect();

    for column in required {
        if !actual_headers.contains(column) {
            return Err(SlcspError::MissingColumn {
                source_name: source_name.to_string(),
                column: column.to_string(),
            });
        }
    }

    Ok(())
}

// ============================================================================
// WRITING
// ============================================================================

/// Write each line followed by a newline, then flush
pub fn write_lines<W, I, D>(mut writer: W, lines: I) -> SlcspResult<()>
where
    W: Write,
    I: IntoIterator<Item = D>,
    D: Display,
{
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Record, PLANS_COLUMNS, TARGET_COLUMNS, ZIPS_COLUMNS};
    use std::io::Write as _;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_rows_by_header_name() {
        let data = "zipcode,state,county_code,name,rate_area\n\
                    36749,AL,01001,Autauga,11\n\
                    48435,MI,26087,Lapeer,5\n";
        let rows = read_rows_from(data.as_bytes(), "zips.csv", ZIPS_COLUMNS).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].field("zipcode").unwrap(), "36749");
        assert_eq!(rows[0].field("rate_area").unwrap(), "11");
        assert_eq!(rows[1].field("name").unwrap(), "Lapeer");
    }

    #[test]
    fn test_read_rows_keeps_empty_cells() {
        let data = "zipcode,rate\n64148,\n67118,\n";
        let rows = read_rows_from(data.as_bytes(), "slcsp.csv", TARGET_COLUMNS).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].field("rate").unwrap(), "");
    }

    #[test]
    fn test_missing_column_fails_before_rows() {
        let data = "plan_id,state,metal_level,rate_area\n1,TX,Silver,11\n";
        let err = read_rows_from(data.as_bytes(), "plans.csv", PLANS_COLUMNS).unwrap_err();
        assert!(matches!(
            err,
            SlcspError::MissingColumn { ref column, .. } if column == "rate"
        ));
        assert!(err.to_string().contains("plans.csv"));
    }

    #[test]
    fn test_ragged_row_is_csv_error() {
        let data = "zipcode,rate_area\n36749,11,extra\n";
        let err = read_rows_from(data.as_bytes(), "zips.csv", ZIPS_COLUMNS).unwrap_err();
        assert!(matches!(err, SlcspError::Csv(_)));
    }

    #[test]
    fn test_read_rows_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "zipcode,rate\n36749,\n").unwrap();
        let rows = read_rows(file.path(), TARGET_COLUMNS).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].field("zipcode").unwrap(), "36749");
    }

    #[test]
    fn test_read_rows_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_rows(dir.path().join("nope.csv"), TARGET_COLUMNS).unwrap_err();
        assert!(matches!(err, SlcspError::Io(_)));
    }

    #[test]
    fn test_write_lines() {
        let mut out = Vec::new();
        write_lines(&mut out, ["36749,310.12", "48435,"]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "36749,310.12\n48435,\n");
    }
}
