//! Delimited table reader with encoding auto-detection.
//!
//! Produces raw string cells keyed by line number. No reservoir-specific
//! logic here; column meaning lives in [`crate::dataset`].

use std::path::Path;

use crate::error::{TableError, TableResult};

/// Default delimiter for exported reservoir tables.
pub const DEFAULT_DELIMITER: char = ';';

/// Cell spellings treated as missing values, compared lowercase.
///
/// The usual spreadsheet and dataframe export markers, plus a lone dash.
const MISSING_MARKERS: [&str; 15] = [
    "nan",
    "-nan",
    "na",
    "n/a",
    "#n/a",
    "#n/a n/a",
    "#na",
    "<na>",
    "null",
    "none",
    "1.#ind",
    "-1.#ind",
    "1.#qnan",
    "-1.#qnan",
    "-",
];

/// One data row with its 1-based line number in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub line: usize,
    pub cells: Vec<String>,
}

impl RawRow {
    /// Cell at `index`, or `""` when the row is short.
    pub fn cell(&self, index: usize) -> &str {
        self.cells.get(index).map(String::as_str).unwrap_or("")
    }
}

/// Header row plus data rows.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<RawRow>,
}

/// Result of parsing with metadata
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed table
    pub table: RawTable,
    /// Detected encoding
    pub encoding: String,
    /// Delimiter used
    pub delimiter: char,
}

/// Detect the encoding of raw bytes using chardet
pub fn detect_encoding(bytes: &[u8]) -> String {
    let result = chardet::detect(bytes);
    let charset = result.0;

    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" | "" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to a string using the specified encoding.
///
/// Unknown encodings fall back to lossy UTF-8. A leading byte-order mark is
/// removed so it does not end up in the first header.
pub fn decode_content(bytes: &[u8], encoding: &str) -> String {
    // Latin-1 labels map to windows-1252, as browsers do
    let decoded = match encoding.to_lowercase().as_str() {
        "iso-8859-1" | "latin-1" | "latin1" | "windows-1252" | "cp1252" => {
            encoding_rs::WINDOWS_1252.decode(bytes).0.into_owned()
        }
        _ => String::from_utf8_lossy(bytes).into_owned(),
    };

    match decoded.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => decoded,
    }
}

/// Parse one cell as a number.
///
/// `Ok(None)` marks a missing value (blank or a NaN-like marker) that the
/// caller zero-fills. Thousands separators are not supported.
pub fn parse_cell(raw: &str) -> Result<Option<f64>, std::num::ParseFloatError> {
    let trimmed = raw.trim().trim_matches('"').trim();
    if trimmed.is_empty() || MISSING_MARKERS.contains(&trimmed.to_lowercase().as_str()) {
        return Ok(None);
    }
    let value: f64 = trimmed.parse()?;
    Ok(if value.is_nan() { None } else { Some(value) })
}

/// Parse delimited text into a [`RawTable`].
///
/// The first non-empty line is the header. Rows may be shorter or longer
/// than the header; blank rows are skipped.
///
/// # Example
/// ```ignore
/// use wellmap::parse_table;
///
/// let table = parse_table("Perm (mD);Gross_Height (m)\n1;10\n1;20", ';').unwrap();
/// assert_eq!(table.rows.len(), 2);
/// assert_eq!(table.rows[1].cell(1), "20");
/// ```
pub fn parse_table(content: &str, delimiter: char) -> TableResult<RawTable> {
    if content.trim().is_empty() {
        return Err(TableError::Empty);
    }
    if !delimiter.is_ascii() {
        return Err(TableError::InvalidDelimiter(delimiter));
    }

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(TableError::NoHeaders);
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let line = record
            .position()
            .map(|p| line_at(content, p.byte() as usize))
            .unwrap_or(0);
        rows.push(RawRow {
            line,
            cells: record.iter().map(str::to_string).collect(),
        });
    }

    Ok(RawTable { headers, rows })
}

/// 1-based source line of the first non-blank byte at or after `offset`.
///
/// Record positions may point at blank lines the reader skipped.
fn line_at(content: &str, offset: usize) -> usize {
    let bytes = content.as_bytes();
    let mut start = offset.min(bytes.len());
    while start < bytes.len() && matches!(bytes[start], b'\n' | b'\r') {
        start += 1;
    }
    bytes[..start].iter().filter(|&&b| b == b'\n').count() + 1
}

/// Parse raw bytes with encoding auto-detection.
pub fn parse_table_bytes(bytes: &[u8], delimiter: char) -> TableResult<ParseResult> {
    if bytes.is_empty() {
        return Err(TableError::Empty);
    }
    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding);
    let table = parse_table(&content, delimiter)?;

    Ok(ParseResult {
        table,
        encoding,
        delimiter,
    })
}

/// Read and parse a table file with encoding auto-detection.
///
/// # Example
/// ```ignore
/// let result = parse_table_file("/data/sensitivity.csv", ';')?;
/// println!("Encoding: {}, rows: {}", result.encoding, result.table.rows.len());
/// ```
pub fn parse_table_file<P: AsRef<Path>>(path: P, delimiter: char) -> TableResult<ParseResult> {
    let bytes = std::fs::read(path.as_ref())?;
    parse_table_bytes(&bytes, delimiter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_table() {
        let table = parse_table("perm;height\n1;10\n2;20", ';').unwrap();

        assert_eq!(table.headers, vec!["perm", "height"]);
        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].cell(0), "1");
        assert_eq!(table.rows[1].cell(1), "20");
    }

    #[test]
    fn test_line_numbers_follow_source() {
        let table = parse_table("a;b\n1;2\n\n3;4\n", ';').unwrap();

        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].line, 2);
        assert_eq!(table.rows[1].line, 4);
    }

    #[test]
    fn test_line_numbers_after_several_blank_lines() {
        let table = parse_table("a;b\r\n\r\n\r\n1;2\r\n3;4", ';').unwrap();

        assert_eq!(table.rows[0].line, 4);
        assert_eq!(table.rows[1].line, 5);
    }

    #[test]
    fn test_delimiter_only_rows_skipped() {
        let table = parse_table("a;b;c\n1;2;3\n;;\n", ';').unwrap();
        assert_eq!(table.rows.len(), 1);
    }

    #[test]
    fn test_short_rows_read_as_blank() {
        let table = parse_table("a;b;c\n1;2", ';').unwrap();

        assert_eq!(table.rows[0].cell(1), "2");
        assert_eq!(table.rows[0].cell(2), "");
        assert_eq!(table.rows[0].cell(99), "");
    }

    #[test]
    fn test_quoted_headers() {
        let table = parse_table("\"Perm (mD)\";\"Gross_Height (m)\"\n1;10", ';').unwrap();
        assert_eq!(table.headers[0], "Perm (mD)");
        assert_eq!(table.headers[1], "Gross_Height (m)");
    }

    #[test]
    fn test_empty_table_error() {
        assert!(matches!(parse_table("", ';'), Err(TableError::Empty)));
        assert!(matches!(parse_table("  \n ", ';'), Err(TableError::Empty)));
        assert!(matches!(parse_table_bytes(b"", ';'), Err(TableError::Empty)));
    }

    #[test]
    fn test_blank_header_error() {
        assert!(matches!(parse_table(";;\n1;2;3", ';'), Err(TableError::NoHeaders)));
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        assert!(matches!(
            parse_table("a§b\n1§2", '§'),
            Err(TableError::InvalidDelimiter('§'))
        ));
    }

    #[test]
    fn test_parse_cell_values() {
        assert_eq!(parse_cell("1.5").unwrap(), Some(1.5));
        assert_eq!(parse_cell(" -3 ").unwrap(), Some(-3.0));
        assert_eq!(parse_cell("1e3").unwrap(), Some(1000.0));
        assert_eq!(parse_cell("").unwrap(), None);
        assert_eq!(parse_cell("NaN").unwrap(), None);
        assert_eq!(parse_cell("n/a").unwrap(), None);
        assert_eq!(parse_cell("#N/A").unwrap(), None);
        assert_eq!(parse_cell("#NA").unwrap(), None);
        assert_eq!(parse_cell("<NA>").unwrap(), None);
        assert_eq!(parse_cell("-NaN").unwrap(), None);
        assert_eq!(parse_cell("NULL").unwrap(), None);
        assert!(parse_cell("abc").is_err());
    }

    #[test]
    fn test_bom_stripped() {
        let bytes = b"\xef\xbb\xbfPerm (mD);h\n1;2";
        let result = parse_table_bytes(bytes, ';').unwrap();
        assert_eq!(result.table.headers[0], "Perm (mD)");
    }

    #[test]
    fn test_latin1_decoding() {
        // "Épaisseur" in ISO-8859-1
        let bytes: &[u8] = &[0xC9, 0x70, 0x61, 0x69, 0x73, 0x73, 0x65, 0x75, 0x72];
        let decoded = decode_content(bytes, "iso-8859-1");
        assert_eq!(decoded, "Épaisseur");
    }

    #[test]
    fn test_latin1_high_symbols() {
        assert_eq!(decode_content(&[0xA4], "iso-8859-1"), "¤");
        assert_eq!(decode_content(&[0x80], "latin1"), "€");
        assert_eq!(decode_content(&[0xBD], "windows-1252"), "½");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = parse_table_file("/definitely/not/here.csv", ';');
        assert!(matches!(result, Err(TableError::Io(_))));
    }
}
