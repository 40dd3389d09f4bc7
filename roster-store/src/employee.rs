//! Employee record model
//!
//! One strongly typed record per roster row. The canonical column set and
//! order are fixed here ([`COLUMNS`]); the CSV codec normalizes every loaded
//! file against it.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Canonical CSV column names, in fixed order.
///
/// Every saved file carries exactly these columns; every loaded file is
/// normalized to them (missing columns backfilled empty, extras dropped).
pub const COLUMNS: [&str; 9] = [
    "ID",
    "Name",
    "Position",
    "Salary",
    "Gender",
    "Birth Date",
    "Hire Year",
    "Nationality",
    "Mobile",
];

/// Employee gender
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Canonical cell value for this gender
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized gender cell value
#[derive(Debug, Error)]
#[error("unknown gender: {0}")]
pub struct UnknownGender(pub String);

impl FromStr for Gender {
    type Err = UnknownGender;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("male") {
            Ok(Gender::Male)
        } else if s.eq_ignore_ascii_case("female") {
            Ok(Gender::Female)
        } else {
            Err(UnknownGender(s.to_string()))
        }
    }
}

/// One employee record
///
/// Values are taken verbatim from the caller; range checks (id >= 1,
/// salary >= 0, hire year within [1900, current year]) belong to the input
/// layer, and id uniqueness is never enforced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Employee number, intended unique but not checked
    pub id: u32,
    pub name: String,
    pub position: String,
    pub salary: Decimal,
    /// Empty cell loads as `None`
    pub gender: Option<Gender>,
    /// ISO `%Y-%m-%d` in the CSV cell
    pub birth_date: Option<NaiveDate>,
    pub hire_year: Option<i32>,
    pub nationality: String,
    /// Kept as text so leading zeros survive
    pub mobile: String,
}
