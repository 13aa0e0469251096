#![allow(dead_code)]

use std::path::Path;

use assert_cmd::Command;
use chrono::NaiveDate;
use jangorithm::expense::{ExpenseDraft, ExpenseRecord};

/// Builds a CLI invocation isolated to `home` with the clock pinned to `today`.
pub fn cli(home: &Path, today: &str) -> Command {
    let mut cmd = Command::cargo_bin("jangorithm").expect("binary built");
    cmd.env("JANGORITHM_HOME", home)
        .env("JANGORITHM_TODAY", today)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn expense(date: &str, category: &str, amount: u64, memo: &str) -> ExpenseRecord {
    ExpenseDraft::new(date, category, amount, memo)
        .into_record()
        .expect("valid expense")
}
