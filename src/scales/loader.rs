//! Scale table loader
//!
//! The table is a CSV file whose first row is a header. Each data row holds
//! a single cell of the form `name;abbreviation;melting;boiling`.

use std::fs::File;
use std::path::Path;

use polars::prelude::*;

use super::parse::ParseMode;
use super::scale::{Catalog, Scale};
use crate::error::CatalogError;

const SUBFIELD_SEPARATOR: char = ';';
const SUBFIELD_COUNT: usize = 4;

/// Load the scale catalog from a CSV file, preserving row order.
pub fn load_catalog(path: &Path, mode: ParseMode) -> Result<Catalog, CatalogError> {
    let file = File::open(path).map_err(|source| CatalogError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let unreadable = |err: PolarsError| CatalogError::Unreadable {
        path: path.to_path_buf(),
        message: err.to_string(),
    };

    // Schema inference length 0 reads every column as a string
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .map_parse_options(|opts| opts.with_truncate_ragged_lines(true))
        .into_reader_with_file_handle(file)
        .finish()
        .map_err(unreadable)?;

    let Some(first) = df.get_columns().first() else {
        return Ok(Catalog::default());
    };
    let cells = first.cast(&DataType::String).map_err(unreadable)?;
    let cells = cells.str().map_err(unreadable)?;

    let mut scales = Vec::with_capacity(cells.len());
    for (i, cell) in cells.into_iter().enumerate() {
        let row = i + 1;
        let text = cell.unwrap_or("");
        if text.trim().is_empty() {
            log::debug!("Skipping blank row {}", row);
            continue;
        }

        let scale = parse_scale_record(row, text, mode)?;
        if scale.is_degenerate() {
            log::warn!(
                "Scale '{}' on row {} has equal melting and boiling points; conversions from it are undefined",
                scale.name,
                row
            );
        }
        scales.push(scale);
    }

    log::info!("Loaded {} scale(s) from {}", scales.len(), path.display());
    Ok(Catalog::new(scales))
}

/// Parse one `name;abbreviation;melting;boiling` cell.
///
/// `row` is only used for error reporting. In lenient mode missing subfields
/// become empty text or zero; extra subfields are always ignored.
pub fn parse_scale_record(row: usize, text: &str, mode: ParseMode) -> Result<Scale, CatalogError> {
    let fields: Vec<&str> = text.split(SUBFIELD_SEPARATOR).collect();

    if fields.len() < SUBFIELD_COUNT {
        if mode.is_strict() {
            return Err(CatalogError::MalformedRow {
                row,
                reason: format!(
                    "expected {} ';'-separated fields, found {}",
                    SUBFIELD_COUNT,
                    fields.len()
                ),
            });
        }
        log::debug!("Row {} has only {} field(s); padding", row, fields.len());
    }

    let field = |i: usize| fields.get(i).copied().unwrap_or("");
    let number = |i: usize, label: &str| {
        mode.parse_number(field(i))
            .ok_or_else(|| CatalogError::MalformedRow {
                row,
                reason: format!("{} '{}' is not a number", label, field(i)),
            })
    };

    Ok(Scale {
        name: field(0).to_string(),
        abbreviation: field(1).to_string(),
        melting_point: number(2, "melting point")?,
        boiling_point: number(3, "boiling point")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_record() {
        let scale = parse_scale_record(1, "Kelvin;K;273.15;373.15", ParseMode::Strict).unwrap();
        assert_eq!(scale, Scale::new("Kelvin", "K", 273.15, 373.15));
    }

    #[test]
    fn test_parse_ignores_extra_fields() {
        let scale = parse_scale_record(1, "Celsius;C;0;100;extra", ParseMode::Strict).unwrap();
        assert_eq!(scale.boiling_point, 100.0);
    }

    #[test]
    fn test_lenient_bad_number_is_zero() {
        let scale = parse_scale_record(2, "Odd;O;cold;hot", ParseMode::Lenient).unwrap();
        assert_eq!(scale.melting_point, 0.0);
        assert_eq!(scale.boiling_point, 0.0);
    }

    #[test]
    fn test_lenient_pads_short_row() {
        let scale = parse_scale_record(2, "Partial;P", ParseMode::Lenient).unwrap();
        assert_eq!(scale.name, "Partial");
        assert_eq!(scale.abbreviation, "P");
        assert_eq!(scale.melting_point, 0.0);
    }

    #[test]
    fn test_strict_bad_number_names_row() {
        let err = parse_scale_record(4, "Odd;O;0;hot", ParseMode::Strict).unwrap_err();
        match err {
            CatalogError::MalformedRow { row, reason } => {
                assert_eq!(row, 4);
                assert!(reason.contains("boiling point"), "{}", reason);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_strict_short_row() {
        let err = parse_scale_record(1, "Partial;P;0", ParseMode::Strict).unwrap_err();
        assert!(matches!(err, CatalogError::MalformedRow { row: 1, .. }));
    }
}
