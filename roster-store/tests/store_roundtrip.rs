//! Integration tests driving the store through real files

use roster_store::{Decimal, Employee, Gender, NaiveDate, RosterStore, StoreError};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn record(id: u32, name: &str, position: &str, salary: i64) -> Employee {
    Employee {
        id,
        name: name.to_string(),
        position: position.to_string(),
        salary: Decimal::from(salary),
        gender: None,
        birth_date: None,
        hire_year: None,
        nationality: String::new(),
        mobile: String::new(),
    }
}

#[test]
fn test_absent_file_loads_empty() {
    let dir = tempdir().unwrap();
    let store = RosterStore::open(dir.path().join("missing.csv")).unwrap();
    assert!(store.is_empty());
}

#[test]
fn test_scenario_add_delete_save_load() {
    let dir = tempdir().unwrap();
    let path: PathBuf = dir.path().join("employees.csv");

    let mut store = RosterStore::open(&path).unwrap();
    assert!(store.is_empty());

    store.add(record(1, "Ann", "Eng", 1000));
    store.add(record(2, "Bo", "Mgr", 2000));
    assert!(store.delete(1));

    assert_eq!(store.len(), 1);
    assert_eq!(store.employees()[0].id, 2);

    store.save().unwrap();
    let reloaded = RosterStore::open(&path).unwrap();
    assert_eq!(reloaded.employees(), store.employees());
}

#[test]
fn test_round_trip_preserves_every_field() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("employees.csv");

    let full = Employee {
        id: 5,
        name: "\u{645}\u{62d}\u{645}\u{62f}".to_string(), // محمد
        position: "Director".to_string(),
        salary: "2500.50".parse().unwrap(),
        gender: Some(Gender::Male),
        birth_date: NaiveDate::from_ymd_opt(1985, 12, 31),
        hire_year: Some(2010),
        nationality: "\u{623}\u{631}\u{62f}\u{646}\u{64a}".to_string(),
        mobile: "0791112233".to_string(),
    };

    let mut store = RosterStore::empty(&path);
    store.add(full.clone());
    store.add(record(6, "Bo", "Mgr", 2000));
    store.save().unwrap();

    let reloaded = RosterStore::open(&path).unwrap();
    assert_eq!(reloaded.employees(), &[full, record(6, "Bo", "Mgr", 2000)][..]);
}

#[test]
fn test_delete_is_idempotent() {
    let dir = tempdir().unwrap();
    let mut store = RosterStore::open(dir.path().join("employees.csv")).unwrap();
    store.add(record(1, "Ann", "Eng", 1000));
    store.add(record(2, "Bo", "Mgr", 2000));

    assert!(store.delete(1));
    assert!(!store.delete(1)); // second call is a no-op
    assert_eq!(store.len(), 1);
}

#[test]
fn test_saved_file_quotes_non_numeric_fields() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("employees.csv");
    let mut store = RosterStore::empty(&path);
    store.add(record(1, "Ann", "Eng", 1000));
    store.save().unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("\"ID\",\"Name\",\"Position\",\"Salary\""));
    assert!(text.contains("1,\"Ann\",\"Eng\",1000"));
}

#[test]
fn test_missing_column_is_backfilled() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("employees.csv");
    fs::write(&path, "ID,Name,Position,Salary\n1,Ann,Eng,1000\n").unwrap();

    let store = RosterStore::open(&path).unwrap();
    assert_eq!(store.len(), 1);
    let employee = &store.employees()[0];
    assert_eq!(employee.name, "Ann");
    assert_eq!(employee.gender, None);
    assert_eq!(employee.nationality, "");
    assert_eq!(employee.mobile, "");
}

#[test]
fn test_loads_utf8_with_bom() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("employees.csv");
    let mut raw = b"\xEF\xBB\xBF".to_vec();
    raw.extend_from_slice("ID,Name,Position,Salary\n1,\u{639}\u{644}\u{64a},Eng,1000\n".as_bytes());
    fs::write(&path, raw).unwrap();

    let store = RosterStore::open(&path).unwrap();
    // A clean first header means the ID column was found, not backfilled.
    assert_eq!(store.employees()[0].id, 1);
    assert_eq!(store.employees()[0].name, "\u{639}\u{644}\u{64a}");
}

#[test]
fn test_loads_windows_1256() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("employees.csv");
    let name = "\u{645}\u{62d}\u{645}\u{62f} \u{639}\u{644}\u{64a}"; // محمد علي
    let text = format!("ID,Name,Position,Salary\n1,{name},Eng,1000\n");
    let (raw, _, had_unmappable) = encoding_rs::WINDOWS_1256.encode(&text);
    assert!(!had_unmappable);
    fs::write(&path, raw).unwrap();

    let store = RosterStore::open(&path).unwrap();
    assert_eq!(store.employees()[0].name, name);
}

#[test]
fn test_loads_iso_8859_6() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("employees.csv");
    // Letters from the block the Arabic code pages lay out identically,
    // so whichever legacy decode wins yields the same text.
    let name = "\u{62d}\u{627}\u{631}\u{633}"; // حارس
    let text = format!("ID,Name,Position,Salary\n1,{name},Eng,1000\n");
    let (raw, _, had_unmappable) = encoding_rs::ISO_8859_6.encode(&text);
    assert!(!had_unmappable);
    fs::write(&path, raw).unwrap();

    let store = RosterStore::open(&path).unwrap();
    assert_eq!(store.employees()[0].name, name);
}

#[test]
fn test_unreadable_table_is_reported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("employees.csv");
    // Decodes fine everywhere, but the ID cell never parses, so every
    // candidate fails and the chain is exhausted.
    fs::write(&path, "ID,Name,Position,Salary\nnot-a-number,Ann,Eng,1000\n").unwrap();

    let err = RosterStore::open(&path).unwrap_err();
    assert!(matches!(err, StoreError::Undecodable { .. }));
}

#[test]
fn test_save_to_missing_directory_surfaces_io_error() {
    let dir = tempdir().unwrap();
    let mut store = RosterStore::empty(dir.path().join("no-such-dir").join("employees.csv"));
    store.add(record(1, "Ann", "Eng", 1000));

    let err = store.save().unwrap_err();
    assert!(matches!(err, StoreError::Io(_)));
}

#[test]
fn test_failed_save_keeps_old_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("employees.csv");
    fs::write(&path, "ID,Name,Position,Salary\n1,Ann,Eng,1000\n").unwrap();
    // A directory squatting on the temp path makes the write step fail.
    fs::create_dir(dir.path().join("employees.csv.tmp")).unwrap();

    let mut store = RosterStore::empty(&path);
    store.add(record(2, "Bo", "Mgr", 2000));
    let err = store.save().unwrap_err();
    assert!(matches!(err, StoreError::Io(_)));

    // All-or-nothing: the previous file is untouched.
    let reloaded = RosterStore::open(&path).unwrap();
    assert_eq!(reloaded.len(), 1);
    assert_eq!(reloaded.employees()[0].name, "Ann");
}

#[test]
fn test_failed_rename_removes_temp_file() {
    let dir = tempdir().unwrap();
    // The target itself is a directory, so the final rename must fail.
    let path = dir.path().join("employees.csv");
    fs::create_dir(&path).unwrap();

    let mut store = RosterStore::empty(&path);
    store.add(record(1, "Ann", "Eng", 1000));
    let err = store.save().unwrap_err();
    assert!(matches!(err, StoreError::Io(_)));

    // The sibling temp file is cleaned up on the failure path.
    assert!(!dir.path().join("employees.csv.tmp").exists());
}

#[test]
fn test_save_leaves_no_temp_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("employees.csv");
    let mut store = RosterStore::empty(&path);
    store.add(record(1, "Ann", "Eng", 1000));
    store.save().unwrap();

    let entries: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec!["employees.csv"]);
}
