//! Line codec for the glossary file.
//!
//! A CSV-like encoding: fields are joined with `,`, and any field holding a
//! comma, quote or line break is wrapped in double quotes with inner quotes
//! doubled. [`parse_record`] is the exact inverse of [`serialize_record`] for
//! values without line breaks.

/// Canonical header line written at the top of every glossary file.
pub const HEADER: &str = "Workbook,Term,Definition,Example";

/// Number of fields in a record.
pub const FIELD_COUNT: usize = 4;

/// Column prefix used to recognise a header on the first line.
const HEADER_PREFIX: &str = "workbook,term";

/// Escape a single field for writing.
pub fn escape_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Join fields into one line (without a trailing newline).
pub fn serialize_record<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(|f| escape_field(f.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Split a line into raw, unescaped fields.
///
/// Never fails: an unterminated quote is treated as closed at end of line.
/// Fields are returned untrimmed.
pub fn parse_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                chars.next();
                current.push('"');
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }

    fields.push(current);
    fields
}

/// Returns `true` if `line` is the canonical header (case-insensitive).
pub fn is_header(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(HEADER)
}

/// Looser check applied to the first line of a file only: any line whose
/// first two columns are exactly `workbook` and `term`.
pub fn looks_like_header(line: &str) -> bool {
    let line = line.trim().to_ascii_lowercase();
    line.strip_prefix(HEADER_PREFIX)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with(','))
}
