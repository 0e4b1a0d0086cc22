//! Fixed 8-column record types.
//!
//! Column semantics are positional in the source data; the [`Column`] enum
//! exists for internal addressing only. Column order is the external
//! contract and must not change.

use crate::error::{NormalizeError, Result};

/// Number of columns in the fixed record schema.
pub const FIELD_COUNT: usize = 8;

/// Literal first field of the header row.
pub const HEADER_LITERAL: &str = "Timestamp";

/// Field delimiter for input and output.
pub const DELIMITER: char = ',';

/// Quote character used by the minimal quoting rule.
pub const QUOTE: char = '"';

/// Columns of the fixed schema, in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Timestamp,
    Address,
    PostalCode,
    FullName,
    FirstDuration,
    SecondDuration,
    TotalDuration,
    Notes,
}

impl Column {
    /// All columns in wire order.
    pub const ALL: [Column; FIELD_COUNT] = [
        Column::Timestamp,
        Column::Address,
        Column::PostalCode,
        Column::FullName,
        Column::FirstDuration,
        Column::SecondDuration,
        Column::TotalDuration,
        Column::Notes,
    ];

    /// Zero-based position of the column in the record.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Column::Timestamp => "Timestamp",
            Column::Address => "Address",
            Column::PostalCode => "PostalCode",
            Column::FullName => "FullName",
            Column::FirstDuration => "FirstDuration",
            Column::SecondDuration => "SecondDuration",
            Column::TotalDuration => "TotalDuration",
            Column::Notes => "Notes",
        }
    }
}

/// Returns true when the row's first field equals the header literal.
pub fn is_header_row(fields: &[String]) -> bool {
    fields.first().is_some_and(|field| field == HEADER_LITERAL)
}

/// Join fields with [`DELIMITER`], with no further quoting or escaping.
///
/// The single definition of how a row becomes a line; both normalized rows
/// and the passed-through header go through here.
pub fn join_fields(fields: &[String]) -> String {
    let mut line = String::new();
    for (position, field) in fields.iter().enumerate() {
        if position > 0 {
            line.push(DELIMITER);
        }
        line.push_str(field);
    }
    line
}

/// One input row after encoding repair: exactly eight valid-UTF-8 fields.
///
/// Immutable once constructed; every downstream transform derives new values
/// instead of mutating this record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedRecord {
    fields: Vec<String>,
}

impl SanitizedRecord {
    /// Build a record from sanitized fields, rejecting any shape other than
    /// exactly [`FIELD_COUNT`] columns.
    pub fn from_fields(fields: Vec<String>) -> Result<Self> {
        if fields.len() != FIELD_COUNT {
            return Err(NormalizeError::FieldCount {
                found: fields.len(),
            });
        }
        Ok(Self { fields })
    }

    pub fn field(&self, column: Column) -> &str {
        &self.fields[column.index()]
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn timestamp(&self) -> &str {
        self.field(Column::Timestamp)
    }

    pub fn address(&self) -> &str {
        self.field(Column::Address)
    }

    pub fn postal_code(&self) -> &str {
        self.field(Column::PostalCode)
    }

    pub fn full_name(&self) -> &str {
        self.field(Column::FullName)
    }

    pub fn first_duration(&self) -> &str {
        self.field(Column::FirstDuration)
    }

    pub fn second_duration(&self) -> &str {
        self.field(Column::SecondDuration)
    }

    // No accessor for TotalDuration: the input value is always discarded and
    // recomputed from the two duration columns.

    pub fn notes(&self) -> &str {
        self.field(Column::Notes)
    }
}

/// One output row, every field already in its serialized form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedRecord {
    fields: [String; FIELD_COUNT],
}

impl NormalizedRecord {
    pub fn new(fields: [String; FIELD_COUNT]) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Serialize as one output line: fields joined by the delimiter, no
    /// further quoting or escaping.
    pub fn to_line(&self) -> String {
        join_fields(&self.fields)
    }
}
