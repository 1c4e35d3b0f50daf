//! One-shot dataset loading from CSV.
//!
//! Expected format:
//!   header: any column order, must contain `state`, `abbr` and one column per [`Dimension`] key
//!   data:   one record per line; extra columns are ignored
//!
//! - Empty lines are skipped.
//! - A line with fewer fields than the header is rejected.
//! - Fields may be double-quoted; quoted fields can hold commas and `""` escapes.
//! - Non-numeric or non-finite (`nan`, `inf`) text in a dimension column rejects the whole load.
//! - An optional `id` column is parsed when present.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::data::dimension::Dimension;
use crate::data::record::{Dataset, Record};
use crate::error::{AxisplotError, Result};

const LABEL_COLUMN: &str = "state";
const CODE_COLUMN: &str = "abbr";
const ID_COLUMN: &str = "id";

/// Open and parse a CSV dataset from disk.
pub fn load_dataset(path: impl AsRef<Path>) -> Result<Dataset> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| AxisplotError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = parse_dataset(BufReader::new(file)).map_err(|e| match e {
        AxisplotError::Io { source, .. } => AxisplotError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;
    tracing::info!("Loaded {} records from {:?}", dataset.len(), path);
    Ok(dataset)
}

/// Parse a CSV dataset from any buffered reader.
pub fn parse_dataset<R: BufRead>(reader: R) -> Result<Dataset> {
    let mut columns: Option<ColumnMap> = None;
    let mut records = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|source| AxisplotError::Io {
            path: Default::default(),
            source,
        })?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }
        let fields = split_fields(line, line_no)?;
        let fields: Vec<&str> = fields.iter().map(String::as_str).collect();
        match &columns {
            None => columns = Some(ColumnMap::from_header(&fields, line_no)?),
            Some(map) => records.push(map.record(&fields, line_no)?),
        }
    }

    if columns.is_none() {
        return Err(AxisplotError::Csv {
            line: 1,
            message: "missing header row".into(),
        });
    }
    Dataset::new(records)
}

/// Split one CSV line. Whitespace around unquoted fields is trimmed; a quoted
/// field keeps its content verbatim.
fn split_fields(line: &str, line_no: usize) -> Result<Vec<String>> {
    let mut fields = Vec::new();
    let mut field = String::new();
    // Length of the quoted content once its closing quote has been seen.
    let mut closed_at: Option<usize> = None;
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            match ch {
                '"' if chars.peek() == Some(&'"') => {
                    field.push('"');
                    chars.next();
                }
                '"' => {
                    in_quotes = false;
                    closed_at = Some(field.len());
                }
                _ => field.push(ch),
            }
            continue;
        }
        match ch {
            '"' if closed_at.is_none() && field.trim().is_empty() => {
                field.clear();
                in_quotes = true;
            }
            ',' => fields.push(finish_field(&mut field, closed_at.take())),
            _ => field.push(ch),
        }
    }
    if in_quotes {
        return Err(AxisplotError::Csv {
            line: line_no,
            message: "unterminated quoted field".into(),
        });
    }
    fields.push(finish_field(&mut field, closed_at));
    Ok(fields)
}

fn finish_field(field: &mut String, closed_at: Option<usize>) -> String {
    let mut text = std::mem::take(field);
    match closed_at {
        Some(len) => {
            text.truncate(len);
            text
        }
        None => text.trim().to_string(),
    }
}

/// Column positions resolved from the header row.
struct ColumnMap {
    width: usize,
    id: Option<usize>,
    label: usize,
    code: usize,
    dims: HashMap<Dimension, usize>,
}

impl ColumnMap {
    fn from_header(fields: &[&str], line: usize) -> Result<Self> {
        let find = |name: &str| fields.iter().position(|f| *f == name);
        let require = |name: &str| {
            find(name).ok_or_else(|| AxisplotError::Csv {
                line,
                message: format!("missing required column '{name}'"),
            })
        };
        let mut dims = HashMap::new();
        for dim in Dimension::ALL {
            dims.insert(dim, require(dim.key())?);
        }
        Ok(Self {
            width: fields.len(),
            id: find(ID_COLUMN),
            label: require(LABEL_COLUMN)?,
            code: require(CODE_COLUMN)?,
            dims,
        })
    }

    fn record(&self, fields: &[&str], line: usize) -> Result<Record> {
        if fields.len() < self.width {
            return Err(AxisplotError::Csv {
                line,
                message: format!("expected {} fields, found {}", self.width, fields.len()),
            });
        }
        let mut record = Record::new(fields[self.label], fields[self.code]);
        if let Some(col) = self.id {
            record.id = fields[col].parse().ok();
        }
        for (dim, &col) in &self.dims {
            let text = fields[col];
            *record.value_mut(*dim) = text
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| AxisplotError::Csv {
                    line,
                    message: format!("column '{}' is not numeric: '{}'", dim.key(), text),
                })?;
        }
        Ok(record)
    }
}
