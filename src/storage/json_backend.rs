use std::{
    fs, io,
    path::PathBuf,
};

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{
    account::Account,
    expense::ExpenseRecord,
    utils::{
        fs::{ensure_dir, write_atomic},
        paths,
    },
};

use super::{Result, Storage, ACCOUNTS_KEY, EXPENSES_KEY};

/// One pretty-printed JSON array per storage key under a base directory.
#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        ensure_dir(&root)?;
        Ok(Self { root })
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        paths::store_file_in(&self.root, key)
    }

    fn load_list<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        let path = self.path_for(key);
        let data = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };
        Ok(parse_list(key, &data))
    }

    fn save_list<T: Serialize>(&self, key: &str, items: &[T]) -> Result<()> {
        let json = serde_json::to_string_pretty(items)?;
        write_atomic(&self.path_for(key), &json)?;
        tracing::debug!(key, count = items.len(), "saved list");
        Ok(())
    }
}

impl Storage for JsonStore {
    fn load_expenses(&self) -> Result<Vec<ExpenseRecord>> {
        self.load_list(EXPENSES_KEY)
    }

    fn save_expenses(&self, records: &[ExpenseRecord]) -> Result<()> {
        self.save_list(EXPENSES_KEY, records)
    }

    fn load_accounts(&self) -> Result<Vec<Account>> {
        self.load_list(ACCOUNTS_KEY)
    }

    fn save_accounts(&self, accounts: &[Account]) -> Result<()> {
        self.save_list(ACCOUNTS_KEY, accounts)
    }
}

/// Parses a stored list, discarding anything that is not a JSON array and
/// skipping individual entries that fail to deserialize.
fn parse_list<T: DeserializeOwned>(key: &str, data: &str) -> Vec<T> {
    if data.trim().is_empty() {
        return Vec::new();
    }
    let items = match serde_json::from_str::<Value>(data) {
        Ok(Value::Array(items)) => items,
        Ok(_) => {
            tracing::warn!(key, "stored data is not a list; starting empty");
            return Vec::new();
        }
        Err(err) => {
            tracing::warn!(key, error = %err, "stored data is unreadable; starting empty");
            return Vec::new();
        }
    };
    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match serde_json::from_value(item) {
            Ok(parsed) => Some(parsed),
            Err(err) => {
                tracing::warn!(key, index, error = %err, "skipping malformed entry");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn store_with_temp_dir() -> (JsonStore, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let store = JsonStore::new(temp.path().join("data")).expect("json store");
        (store, temp)
    }

    fn sample_records() -> Vec<ExpenseRecord> {
        let day = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();
        vec![
            ExpenseRecord::new(day, "식비", 10_000, "점심"),
            ExpenseRecord::new(day, "고정지출", 1_000_000, "월세"),
        ]
    }

    #[test]
    fn missing_files_load_as_empty() {
        let (store, _guard) = store_with_temp_dir();
        assert!(store.load_expenses().unwrap().is_empty());
        assert!(store.load_accounts().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_expenses() {
        let (store, _guard) = store_with_temp_dir();
        let records = sample_records();
        store.save_expenses(&records).expect("save");
        assert!(store.path_for(EXPENSES_KEY).exists());
        assert_eq!(store.load_expenses().expect("load"), records);
    }

    #[test]
    fn unparsable_json_is_treated_as_empty() {
        let (store, _guard) = store_with_temp_dir();
        fs::write(store.path_for(EXPENSES_KEY), "{not json").unwrap();
        assert!(store.load_expenses().unwrap().is_empty());
    }

    #[test]
    fn non_array_json_is_treated_as_empty() {
        let (store, _guard) = store_with_temp_dir();
        fs::write(store.path_for(ACCOUNTS_KEY), r#"{"owner":"민수"}"#).unwrap();
        assert!(store.load_accounts().unwrap().is_empty());
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let (store, _guard) = store_with_temp_dir();
        let good = &sample_records()[0];
        let json = format!(
            r#"[{}, {{"id": 17, "date": "2025-04-02"}}, "oops"]"#,
            serde_json::to_string(good).unwrap()
        );
        fs::write(store.path_for(EXPENSES_KEY), json).unwrap();
        let loaded = store.load_expenses().unwrap();
        assert_eq!(loaded, vec![good.clone()]);
    }

    #[test]
    fn accounts_use_their_own_key() {
        let (store, _guard) = store_with_temp_dir();
        let accounts = vec![Account::new("민수", "국민은행").with_balances(0, 100)];
        store.save_accounts(&accounts).unwrap();
        assert!(store.path_for(ACCOUNTS_KEY).exists());
        assert!(!store.path_for(EXPENSES_KEY).exists());
        assert_eq!(store.load_accounts().unwrap(), accounts);
    }
}
