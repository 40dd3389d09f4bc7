//! # roster-store
//!
//! Flat-file employee roster - record management only, no UI dependency.
//!
//! ## Scope
//!
//! This crate handles HOW the roster is kept:
//! - Typed [`Employee`] records against a fixed canonical column set
//! - Load with an encoding fallback chain (UTF-8, UTF-8 BOM,
//!   windows-1256, ISO-8859-6, then a byte-level sniffer)
//! - Add / delete / read-only snapshot over the in-memory table
//! - All-or-nothing save to one UTF-8 CSV file, non-numeric fields quoted
//!
//! Presentation (forms, labels, localization) stays in application code.
//!
//! ## Example
//!
//! ```ignore
//! use roster_store::{Decimal, Employee, RosterStore};
//!
//! let mut store = RosterStore::open("employees.csv")?;
//! store.add(Employee {
//!     id: 1,
//!     name: "Ann".into(),
//!     position: "Eng".into(),
//!     salary: Decimal::from(1000),
//!     gender: None,
//!     birth_date: None,
//!     hire_year: None,
//!     nationality: String::new(),
//!     mobile: String::new(),
//! });
//! if !store.delete(7) {
//!     println!("no employee with id 7");
//! }
//! store.save()?;
//! ```

mod config;
mod employee;
mod encoding;
mod error;
mod store;
mod table;

// Re-exports
pub use config::StoreConfig;
pub use employee::{COLUMNS, Employee, Gender, UnknownGender};
pub use error::{StoreError, StoreResult};
pub use store::RosterStore;

// Field types used to build records
pub use chrono::NaiveDate;
pub use rust_decimal::Decimal;
