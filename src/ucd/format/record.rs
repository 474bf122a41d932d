//! `UnicodeData.txt` line parsing.
//!
//! Each line holds 15 positional, `;`-separated fields. Only a handful are
//! used here:
//!
//! ```text
//! [0]  code point (hex)            -> Record::code_point
//! [2]  general category            -> Record::category
//! [12] simple uppercase mapping    -> Record::upper_mapping
//! [13] simple lowercase mapping    -> Record::lower_mapping
//! [14] simple titlecase mapping    -> Record::title_mapping
//! ```

use std::io::BufRead;
use log::{debug, trace};

use crate::ucd::types::error::{Result, UcdError};
use crate::ucd::types::models::{CodePoint, Record};

/// Number of fields in every database line.
pub const FIELD_COUNT: usize = 15;

const FIELD_SEPARATOR: char = ';';

const CODE_POINT: usize = 0;
const CATEGORY: usize = 2;
const UPPERCASE_MAPPING: usize = 12;
const LOWERCASE_MAPPING: usize = 13;
const TITLECASE_MAPPING: usize = 14;

/// Parses a single database line.
///
/// `line_number` is 1-based and only used for diagnostics.
///
/// # Errors
/// - [`UcdError::FieldCount`] if the line does not have exactly 15 fields
/// - [`UcdError::InvalidCodePoint`] if the code point, or a non-empty
///   mapping field, is not made of hex digits only
pub fn parse_record(line: &str, line_number: usize) -> Result<Record> {
    let line = line.trim();
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() != FIELD_COUNT {
        return Err(UcdError::FieldCount {
            line: line_number,
            expected: FIELD_COUNT,
            found: fields.len(),
            content: line.to_string(),
        });
    }

    let hex = |index: usize, name: &'static str| -> Result<CodePoint> {
        let value = fields[index].trim();
        let invalid = || UcdError::InvalidCodePoint {
            line: line_number,
            field: name,
            value: value.to_string(),
            content: line.to_string(),
        };
        // from_str_radix tolerates a leading sign
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        CodePoint::from_str_radix(value, 16).map_err(|_| invalid())
    };
    let optional_hex = |index: usize, name: &'static str| -> Result<Option<CodePoint>> {
        if fields[index].trim().is_empty() {
            Ok(None)
        } else {
            hex(index, name).map(Some)
        }
    };

    let record = Record {
        code_point: hex(CODE_POINT, "code point")?,
        category: fields[CATEGORY].to_string(),
        upper_mapping: optional_hex(UPPERCASE_MAPPING, "uppercase mapping")?,
        lower_mapping: optional_hex(LOWERCASE_MAPPING, "lowercase mapping")?,
        title_mapping: optional_hex(TITLECASE_MAPPING, "titlecase mapping")?,
    };
    trace!("Parsed line {}: {:?}", line_number, record);
    Ok(record)
}

/// Parses every line of a database stream.
///
/// Blank lines are skipped. The first malformed line aborts the whole parse,
/// so callers never see a partial record set. A line that is not UTF-8 is a
/// format error carrying its line number, not an I/O error.
pub fn parse_records<R: BufRead>(reader: R) -> Result<Vec<Record>> {
    let mut records = Vec::new();
    for (index, bytes) in reader.split(b'\n').enumerate() {
        let bytes = bytes?;
        let line = String::from_utf8(bytes).map_err(|e| UcdError::InvalidUtf8 {
            line: index + 1,
            content: String::from_utf8_lossy(e.as_bytes()).into_owned(),
        })?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(parse_record(&line, index + 1)?);
    }
    debug!("Parsed {} records", records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_named_fields() {
        let line = "01C5;LATIN CAPITAL LETTER D WITH SMALL LETTER Z WITH CARON;Lt;0;L;\
                    <compat> 0044 017E;;;;N;LATIN LETTER CAPITAL D SMALL Z HACEK;;01C4;01C6;01C5";
        let record = parse_record(line, 7).unwrap();
        assert_eq!(record.code_point, 0x01C5);
        assert_eq!(record.category, "Lt");
        assert_eq!(record.upper_mapping, Some(0x01C4));
        assert_eq!(record.lower_mapping, Some(0x01C6));
        assert_eq!(record.title_mapping, Some(0x01C5));
    }

    #[test]
    fn empty_mapping_is_none() {
        let record = parse_record("0030;DIGIT ZERO;Nd;0;EN;;0;0;0;N;;;;;", 1).unwrap();
        assert_eq!(record.upper_mapping, None);
        assert_eq!(record.lower_mapping, None);
        assert_eq!(record.title_mapping, None);
    }

    #[test]
    fn trailing_carriage_return_is_ignored() {
        let line = "0061;LATIN SMALL LETTER A;Ll;0;L;;;;;N;;;0041;;0041\r";
        let record = parse_record(line, 1).unwrap();
        assert_eq!(record.title_mapping, Some(0x0041));
    }

    #[test]
    fn bad_mapping_field_reports_field_name() {
        let err = parse_record("0061;LATIN SMALL LETTER A;Ll;0;L;;;;;N;;;zz;;", 3).unwrap_err();
        match err {
            UcdError::InvalidCodePoint { line, field, value, .. } => {
                assert_eq!(line, 3);
                assert_eq!(field, "uppercase mapping");
                assert_eq!(value, "zz");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn signed_hex_is_rejected() {
        let err = parse_record("+41;X;Lu;0;L;;;;;N;;;;0061;", 2).unwrap_err();
        match err {
            UcdError::InvalidCodePoint { line, field, value, .. } => {
                assert_eq!(line, 2);
                assert_eq!(field, "code point");
                assert_eq!(value, "+41");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = parse_record("0041;X;Lu;0;L;;;;;N;;;;+61;", 2).unwrap_err();
        assert!(matches!(
            err,
            UcdError::InvalidCodePoint { field: "lowercase mapping", .. }
        ));
    }

    #[test]
    fn too_many_fields_is_rejected() {
        let err = parse_record("0061;A;Ll;0;L;;;;;N;;;0041;;0041;extra", 1).unwrap_err();
        assert!(matches!(err, UcdError::FieldCount { found: 16, .. }));
    }
}
