//! Spreadsheet extractor (xlsx, xls, csv).
//!
//! Each sheet becomes one table: the first non-empty row supplies the
//! headers, every following row is data. Confidence is the fraction of
//! non-empty cells, so sparse sheets score lower.

use std::io::Cursor;

use calamine::Reader;

use crate::config::ParserConfig;
use crate::error::{Error, Result};
use crate::model::{ContentElement, TableElement};

/// Extract table elements from spreadsheet bytes.
pub fn extract(
    data: &[u8],
    filename: &str,
    _config: &ParserConfig,
) -> Result<Vec<ContentElement>> {
    if filename.to_lowercase().ends_with(".csv") {
        extract_csv(data, filename)
    } else {
        extract_workbook(data, filename)
    }
}

fn extract_workbook(data: &[u8], filename: &str) -> Result<Vec<ContentElement>> {
    let cursor = Cursor::new(data.to_vec());
    let mut workbook = calamine::open_workbook_auto_from_rs(cursor)
        .map_err(|e| Error::extraction(filename, e))?;

    let mut elements = Vec::new();

    for (sheet_index, sheet_name) in workbook.sheet_names().to_vec().into_iter().enumerate() {
        let range = match workbook.worksheet_range(&sheet_name) {
            Ok(range) => range,
            Err(e) => {
                log::warn!("Skipping sheet {:?}: {}", sheet_name, e);
                continue;
            }
        };

        let mut rows: Vec<Vec<String>> = range
            .rows()
            .map(|row| row.iter().map(cell_to_string).collect())
            .filter(|row: &Vec<String>| row.iter().any(|c| !c.is_empty()))
            .collect();

        if rows.is_empty() {
            log::debug!("Sheet {:?} has no content", sheet_name);
            continue;
        }

        let headers = rows.remove(0);
        let confidence = non_empty_fraction(&headers, &rows);
        let table = TableElement::new(
            format!("table_{}", sheet_index),
            headers,
            rows,
            confidence,
            sheet_index as u32,
        )?
        .with_inferred_types();
        elements.push(ContentElement::Table(table));
    }

    Ok(elements)
}

fn extract_csv(data: &[u8], filename: &str) -> Result<Vec<ContentElement>> {
    // flexible() admits ragged records so the row-width invariant is checked
    // here instead of being silently enforced by the reader.
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(data);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| Error::extraction(filename, e))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| Error::extraction(filename, e))?;
        let row: Vec<String> = record.iter().map(str::to_string).collect();
        if row.iter().any(|c| !c.is_empty()) {
            rows.push(row);
        }
    }

    if headers.is_empty() && rows.is_empty() {
        return Ok(Vec::new());
    }

    let confidence = non_empty_fraction(&headers, &rows);
    let table = TableElement::new("table_0", headers, rows, confidence, 0)?.with_inferred_types();
    Ok(vec![ContentElement::Table(table)])
}

fn cell_to_string(cell: &calamine::Data) -> String {
    match cell {
        calamine::Data::Empty => String::new(),
        calamine::Data::String(s) => s.clone(),
        calamine::Data::Float(f) => f.to_string(),
        calamine::Data::Int(i) => i.to_string(),
        calamine::Data::Bool(b) => b.to_string(),
        calamine::Data::DateTime(dt) => dt.to_string(),
        other => other.to_string(),
    }
}

/// Fraction of non-empty cells across headers and rows.
fn non_empty_fraction(headers: &[String], rows: &[Vec<String>]) -> f32 {
    let total = headers.len() + rows.iter().map(Vec::len).sum::<usize>();
    if total == 0 {
        return 0.0;
    }
    let filled = headers.iter().filter(|c| !c.trim().is_empty()).count()
        + rows
            .iter()
            .flatten()
            .filter(|c| !c.trim().is_empty())
            .count();
    filled as f32 / total as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ColumnType, ElementKind};

    fn extract_csv_str(input: &str) -> Result<Vec<ContentElement>> {
        extract(input.as_bytes(), "data.csv", &ParserConfig::default())
    }

    #[test]
    fn test_csv_two_rows() {
        let elements = extract_csv_str("A,B\n1,2\n3,4\n").unwrap();
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].kind(), ElementKind::Table);

        match &elements[0] {
            ContentElement::Table(t) => {
                assert_eq!(t.headers, vec!["A", "B"]);
                assert_eq!(t.rows.len(), 2);
                assert!(t.rows.iter().all(|r| r.len() == 2));
                assert_eq!(
                    t.data_types,
                    Some(vec![ColumnType::Integer, ColumnType::Integer])
                );
                assert_eq!(t.confidence, 1.0);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_csv_ragged_row_is_malformed() {
        let result = extract_csv_str("A,B\n1,2\n3\n");
        assert!(matches!(
            result,
            Err(Error::MalformedTable {
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn test_csv_confidence_reflects_empty_cells() {
        let elements = extract_csv_str("A,B\n1,\n,4\n").unwrap();
        match &elements[0] {
            // 4 of 6 cells filled
            ContentElement::Table(t) => assert!((t.confidence - 4.0 / 6.0).abs() < 1e-6),
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_csv_empty_input() {
        let elements = extract_csv_str("").unwrap();
        assert!(elements.is_empty());
    }

    #[test]
    fn test_workbook_garbage_fails() {
        let result = extract(b"not a workbook", "data.xlsx", &ParserConfig::default());
        assert!(matches!(result, Err(Error::ExtractionFailed { .. })));
    }
}
