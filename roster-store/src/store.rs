//! Roster store - owns the in-memory table and the backing CSV file
//!
//! A passive container plus four operations (load, add, delete, save); all
//! control flow stays with the caller. Create one store per session and
//! pass it by reference to whatever drives it.

use crate::employee::Employee;
use crate::error::{StoreError, StoreResult};
use crate::{encoding, table};
use std::ffi::OsString;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Employee roster backed by one flat CSV file
#[derive(Debug)]
pub struct RosterStore {
    path: PathBuf,
    employees: Vec<Employee>,
}

impl RosterStore {
    /// Open the store against `path`, loading the file if it exists.
    ///
    /// An absent file is an empty roster. A file that no supported
    /// encoding can read is [`StoreError::Undecodable`]; callers that
    /// prefer the old degrade-to-empty behavior can fall back to
    /// [`RosterStore::empty`].
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let mut store = Self::empty(path);
        store.reload()?;
        Ok(store)
    }

    /// An empty roster over `path`, without touching the file.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            employees: Vec::new(),
        }
    }

    /// Re-read the backing file, replacing the in-memory table.
    ///
    /// Runs the encoding fallback chain: each clean decode is parsed in
    /// turn and the first that yields a table wins. Exhausting every
    /// candidate (including the sniffer guess) is reported, not swallowed.
    pub fn reload(&mut self) -> StoreResult<()> {
        let raw = match fs::read(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(path = %self.path.display(), "roster file absent, starting empty");
                self.employees = Vec::new();
                return Ok(());
            }
            Err(err) => return Err(err.into()),
        };

        for candidate in encoding::decode_candidates(&raw) {
            match table::parse_table(&candidate.text) {
                Ok(employees) => {
                    info!(
                        path = %self.path.display(),
                        encoding = %candidate.encoding,
                        rows = employees.len(),
                        "roster loaded"
                    );
                    self.employees = employees;
                    return Ok(());
                }
                Err(err) => {
                    warn!(
                        encoding = %candidate.encoding,
                        error = %err,
                        "decoded text did not parse, trying next encoding"
                    );
                }
            }
        }

        error!(path = %self.path.display(), "no supported encoding produced a roster table");
        Err(StoreError::Undecodable {
            path: self.path.clone(),
        })
    }

    /// Append a record to the in-memory table.
    ///
    /// Pure append: no uniqueness check, no field validation; the input
    /// layer owns the range constraints.
    pub fn add(&mut self, employee: Employee) {
        info!(id = employee.id, "employee added");
        self.employees.push(employee);
    }

    /// Remove every record whose id equals `id`.
    ///
    /// Returns whether anything was removed; a miss is a no-op outcome,
    /// not an error.
    pub fn delete(&mut self, id: u32) -> bool {
        let before = self.employees.len();
        self.employees.retain(|employee| employee.id != id);
        let removed = before - self.employees.len();
        if removed > 0 {
            info!(id, removed, "employee deleted");
            true
        } else {
            warn!(id, "employee not found for deletion");
            false
        }
    }

    /// Persist the whole table to the backing file, UTF-8, all-or-nothing.
    ///
    /// The table is written to a sibling temp file and renamed over the
    /// target, so a failed save leaves the previous file intact.
    pub fn save(&self) -> StoreResult<()> {
        match self.try_save() {
            Ok(()) => {
                info!(
                    path = %self.path.display(),
                    rows = self.employees.len(),
                    "roster saved"
                );
                Ok(())
            }
            Err(err) => {
                error!(path = %self.path.display(), error = %err, "failed to save roster");
                Err(err)
            }
        }
    }

    fn try_save(&self) -> StoreResult<()> {
        let data = table::serialize_table(&self.employees)?;
        let mut tmp_name = OsString::from(self.path.as_os_str());
        tmp_name.push(".tmp");
        let tmp_path = PathBuf::from(tmp_name);
        fs::write(&tmp_path, &data)?;
        if let Err(err) = fs::rename(&tmp_path, &self.path) {
            // Don't leave the sibling temp file behind
            let _ = fs::remove_file(&tmp_path);
            return Err(err.into());
        }
        Ok(())
    }

    /// Read-only snapshot of the current table, in insertion order.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    /// Backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}
