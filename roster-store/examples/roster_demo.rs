//! Roster Demo - drives the store the way a form front-end would
//!
//! Walks the whole surface: open (with the degrade-to-empty choice made
//! here, in the caller), add, list, delete, save, reload.
//!
//! Run: cargo run -p roster-store --example roster_demo
//! Override the file with ROSTER_CSV_PATH=/tmp/employees.csv

use roster_store::{Decimal, Employee, Gender, NaiveDate, RosterStore, StoreConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let config = StoreConfig::from_env();
    println!("=== Roster Demo ===\n");

    // === 1. Open the store ===
    println!("1. Opening roster at {} ...", config.csv_path);
    let mut store = match RosterStore::open(&config.csv_path) {
        Ok(store) => store,
        Err(err) => {
            // The library reports an unreadable file; whether to start
            // over empty is this layer's decision.
            eprintln!("   could not read roster ({err}), starting empty");
            RosterStore::empty(&config.csv_path)
        }
    };
    println!("   {} record(s) loaded.\n", store.len());

    // === 2. Add employees ===
    println!("2. Adding two employees...");
    store.add(Employee {
        id: 1,
        name: "Ann".to_string(),
        position: "Eng".to_string(),
        salary: Decimal::from(1000),
        gender: Some(Gender::Female),
        birth_date: NaiveDate::from_ymd_opt(1990, 4, 2),
        hire_year: Some(2015),
        nationality: "Jordanian".to_string(),
        mobile: "0790001122".to_string(),
    });
    store.add(Employee {
        id: 2,
        name: "Bo".to_string(),
        position: "Mgr".to_string(),
        salary: Decimal::from(2000),
        gender: Some(Gender::Male),
        birth_date: None,
        hire_year: Some(2019),
        nationality: String::new(),
        mobile: String::new(),
    });

    // === 3. List ===
    println!("3. Current roster:");
    for employee in store.employees() {
        println!(
            "   #{:<4} {:<12} {:<8} {}",
            employee.id, employee.name, employee.position, employee.salary
        );
    }
    println!();

    // === 4. Delete ===
    println!("4. Deleting employee 1...");
    if store.delete(1) {
        println!("   employee 1 deleted");
    }
    println!("   Deleting employee 99 (does not exist)...");
    if !store.delete(99) {
        println!("   employee 99 not found");
    }
    println!();

    // === 5. Save and reload ===
    println!("5. Saving...");
    store.save()?;
    store.reload()?;
    println!("   {} record(s) after reload.", store.len());

    Ok(())
}
