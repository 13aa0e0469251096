mod common;

use std::fs;

use common::{date, expense};
use jangorithm::{
    account::Account,
    cli::App,
    clock::FixedClock,
    config::{Config, ConfigManager},
    storage::{JsonStore, Storage, ACCOUNTS_KEY, EXPENSES_KEY},
};
use tempfile::TempDir;

#[test]
fn fixed_expense_registered_on_load_survives_reload() {
    let temp = TempDir::new().expect("temp dir");
    let store = JsonStore::new(temp.path()).expect("store");
    store
        .save_expenses(&[expense("2025-04-30", "식비", 15_000, "회식")])
        .expect("seed expenses");

    let clock = FixedClock(date(2025, 5, 1));
    let mut app = App::load(store.clone(), Config::default(), &clock).expect("load");
    assert_eq!(app.expenses().len(), 2);
    app.flush().expect("flush");

    let stored = store.load_expenses().expect("reload");
    assert_eq!(stored.len(), 2);
    assert!(stored.iter().any(|r| r.memo == "월세" && r.date == "2025-05-01"));

    let again = App::load(store, Config::default(), &clock).expect("second load");
    assert_eq!(again.expenses().len(), 2);
}

#[test]
fn corrupted_expense_file_starts_empty_without_failing() {
    let temp = TempDir::new().expect("temp dir");
    let store = JsonStore::new(temp.path()).expect("store");
    fs::write(store.path_for(EXPENSES_KEY), "<<garbage>>").unwrap();

    let app = App::load(store, Config::default(), &FixedClock(date(2025, 5, 2))).expect("load");
    assert!(app.expenses().is_empty());
}

#[test]
fn accounts_are_stored_with_camel_case_keys() {
    let temp = TempDir::new().expect("temp dir");
    let store = JsonStore::new(temp.path()).expect("store");
    let accounts = vec![Account::new("지영", "카카오뱅크")
        .with_nickname("비상금")
        .with_kind("입출금", "저축")
        .with_balances(500_000, 650_000)];
    store.save_accounts(&accounts).unwrap();

    let raw = fs::read_to_string(store.path_for(ACCOUNTS_KEY)).unwrap();
    assert!(raw.contains("\"previousAmount\": 500000"));
    assert_eq!(store.load_accounts().unwrap(), accounts);
}

#[test]
fn configured_rules_drive_registration() {
    let temp = TempDir::new().expect("temp dir");
    let manager = ConfigManager::with_base_dir(temp.path());
    let mut config = Config::default();
    config.recurring = vec![jangorithm::expense::RecurringRule::new(
        "고정지출",
        "통신비",
        55_000,
        20,
    )];
    manager.save(&config).unwrap();

    let store = JsonStore::new(temp.path()).unwrap();
    let loaded = manager.load().unwrap();
    let app = App::load(store, loaded, &FixedClock(date(2025, 7, 20))).unwrap();
    assert_eq!(app.expenses().len(), 1);
    assert_eq!(app.expenses().records()[0].memo, "통신비");
}
