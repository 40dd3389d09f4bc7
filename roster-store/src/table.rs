//! CSV codec for the canonical roster schema
//!
//! Parsing normalizes whatever the file contains against [`COLUMNS`]:
//! columns are located by header name, missing canonical columns read as
//! empty, extra columns are dropped, and the typed [`Employee`] struct
//! fixes the order on the way out. Serialization writes the canonical
//! header and quotes every non-numeric field.

use crate::employee::{COLUMNS, Employee};
use crate::error::{ParseError, StoreError, StoreResult};
use csv::{QuoteStyle, ReaderBuilder, WriterBuilder};
use std::fmt;
use std::str::FromStr;

/// Date cell format, symmetric with `NaiveDate`'s `FromStr`
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse decoded file text into the canonical table.
pub(crate) fn parse_table(text: &str) -> Result<Vec<Employee>, ParseError> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());
    let headers = reader.headers()?.clone();

    // Position of each canonical column in this particular file, if present.
    let positions: Vec<Option<usize>> = COLUMNS
        .iter()
        .map(|name| headers.iter().position(|header| header.trim() == *name))
        .collect();

    let mut employees = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        // 1-based row number counting the header, for log context
        let row = index + 2;
        let cells: [&str; COLUMNS.len()] = std::array::from_fn(|column| {
            positions[column]
                .and_then(|position| record.get(position))
                .unwrap_or("")
        });

        employees.push(Employee {
            id: parse_number(cells[0], row, COLUMNS[0])?,
            name: cells[1].to_string(),
            position: cells[2].to_string(),
            salary: parse_number(cells[3], row, COLUMNS[3])?,
            gender: parse_optional(cells[4], row, COLUMNS[4])?,
            birth_date: parse_optional(cells[5], row, COLUMNS[5])?,
            hire_year: parse_optional(cells[6], row, COLUMNS[6])?,
            nationality: cells[7].to_string(),
            mobile: cells[8].to_string(),
        });
    }
    Ok(employees)
}

/// Serialize the table: canonical header row, UTF-8, non-numeric fields quoted.
pub(crate) fn serialize_table(employees: &[Employee]) -> StoreResult<Vec<u8>> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::NonNumeric)
        .from_writer(Vec::new());
    writer.write_record(COLUMNS)?;
    for employee in employees {
        writer.write_record([
            employee.id.to_string(),
            employee.name.clone(),
            employee.position.clone(),
            employee.salary.to_string(),
            employee
                .gender
                .map(|gender| gender.as_str().to_string())
                .unwrap_or_default(),
            employee
                .birth_date
                .map(|date| date.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            employee
                .hire_year
                .map(|year| year.to_string())
                .unwrap_or_default(),
            employee.nationality.clone(),
            employee.mobile.clone(),
        ])?;
    }
    writer
        .into_inner()
        .map_err(|err| StoreError::Io(err.into_error()))
}

/// Required numeric cell; empty reads as the type's zero value.
fn parse_number<T>(raw: &str, row: usize, column: &'static str) -> Result<T, ParseError>
where
    T: FromStr + Default,
    T::Err: fmt::Display,
{
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(T::default());
    }
    trimmed.parse().map_err(|err: T::Err| ParseError::Field {
        row,
        column,
        message: err.to_string(),
    })
}

/// Optional cell; empty reads as `None`.
fn parse_optional<T>(raw: &str, row: usize, column: &'static str) -> Result<Option<T>, ParseError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse()
        .map(Some)
        .map_err(|err: T::Err| ParseError::Field {
            row,
            column,
            message: err.to_string(),
        })
}
