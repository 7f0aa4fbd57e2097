//! Record collections: loading, field ordering and writing.
//!
//! A record file holds one record per line as `id,string_field,integer_field,floating_field`.
//! Records are loaded once and sorted as a slice of references, so sorting only reorders
//! the references and never moves record data.

use crate::error::SortError;
use crate::sorter::{SortOptions, Sorter};
use std::cmp::Ordering;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Errors raised while reading, sorting or writing records.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error(transparent)]
    Sort(#[from] SortError),
}

/// One row of a record file.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub id: i32,
    pub string_field: String,
    pub integer_field: i32,
    pub floating_field: f32,
}

impl Record {
    /// Parses one `id,string,integer,float` line. The string field cannot contain commas.
    pub fn parse_line(line: &str) -> Result<Self, String> {
        let mut parts = line.trim_end_matches(['\r', '\n']).split(',');
        let mut next = |name: &str| {
            parts
                .next()
                .ok_or_else(|| format!("missing {name} column"))
        };

        let id = next("id")?;
        let string_field = next("string")?;
        let integer_field = next("integer")?;
        let floating_field = next("float")?;
        if parts.next().is_some() {
            return Err("expected 4 columns".to_string());
        }

        Ok(Record {
            id: id
                .trim()
                .parse()
                .map_err(|e| format!("invalid id `{id}`: {e}"))?,
            string_field: string_field.to_string(),
            integer_field: integer_field
                .trim()
                .parse()
                .map_err(|e| format!("invalid integer `{integer_field}`: {e}"))?,
            floating_field: floating_field
                .trim()
                .parse()
                .map_err(|e| format!("invalid float `{floating_field}`: {e}"))?,
        })
    }
}

impl fmt::Display for Record {
    /// Writes the record back in file form, the float with six decimals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{:.6}",
            self.id, self.string_field, self.integer_field, self.floating_field
        )
    }
}

/// The record field to order by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Field {
    #[default]
    String,
    Integer,
    Float,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::String, Field::Integer, Field::Float];

    /// Lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            Field::String => "string",
            Field::Integer => "integer",
            Field::Float => "float",
        }
    }

    /// The comparator ordering records by this field.
    pub fn comparator(self) -> fn(&&Record, &&Record) -> Ordering {
        match self {
            Field::String => compare_string,
            Field::Integer => compare_integer,
            Field::Float => compare_float,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = SortError;

    /// Accepts the field names and the numeric identifiers `1` (string), `2` (integer)
    /// and `3` (float).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "string" | "str" => Ok(Field::String),
            "2" | "integer" | "int" => Ok(Field::Integer),
            "3" | "float" | "double" => Ok(Field::Float),
            other => Err(SortError::InvalidArgument(format!(
                "unknown field `{other}`, expected 1 (string), 2 (integer) or 3 (float)"
            ))),
        }
    }
}

fn compare_string(a: &&Record, b: &&Record) -> Ordering {
    a.string_field.as_bytes().cmp(b.string_field.as_bytes())
}

fn compare_integer(a: &&Record, b: &&Record) -> Ordering {
    a.integer_field.cmp(&b.integer_field)
}

fn compare_float(a: &&Record, b: &&Record) -> Ordering {
    a.floating_field.total_cmp(&b.floating_field)
}

/// Reads every record from `reader`, skipping blank lines.
pub fn load_records<R: BufRead>(reader: R) -> Result<Vec<Record>, RecordError> {
    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record = Record::parse_line(&line).map_err(|reason| RecordError::Parse {
            line: index + 1,
            reason,
        })?;
        records.push(record);
    }
    debug!(count = records.len(), "loaded records");
    Ok(records)
}

/// Writes `records` to `writer`, one per line.
pub fn write_records<W: Write>(mut writer: W, records: &[&Record]) -> Result<(), RecordError> {
    for record in records {
        writeln!(writer, "{record}")?;
    }
    writer.flush()?;
    Ok(())
}

/// Sorts record references by `field`.
pub fn sort_records(
    records: &mut [&Record],
    field: Field,
    options: SortOptions,
) -> Result<(), RecordError> {
    debug!(
        count = records.len(),
        %field,
        algorithm = %options.algorithm,
        "sorting records"
    );
    Sorter::from_options(options)
        .comparator(field.comparator())
        .sort(records)?;
    Ok(())
}
