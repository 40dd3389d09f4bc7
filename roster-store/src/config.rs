//! Store configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Meaning |
//! |----------|---------|---------|
//! | ROSTER_CSV_PATH | employees.csv | Backing CSV file |

/// Backing-file configuration
///
/// The library API takes explicit paths; this is for binaries and demos
/// that want the conventional env-var override.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path of the backing CSV file
    pub csv_path: String,
}

impl StoreConfig {
    /// Load configuration from environment variables, with defaults.
    pub fn from_env() -> Self {
        Self {
            csv_path: std::env::var("ROSTER_CSV_PATH")
                .unwrap_or_else(|_| "employees.csv".to_string()),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            csv_path: "employees.csv".to_string(),
        }
    }
}
