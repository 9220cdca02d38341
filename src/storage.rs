//! Local key/value storage
//!
//! A small string-to-string store in SQLite, used the way a browser page uses
//! `localStorage`: one value per fixed key, read and written synchronously.

use anyhow::{Context, Result};
use rusqlite::{params, Connection};
use std::path::Path;

pub struct LocalStorage {
    conn: Connection,
}

impl LocalStorage {
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create storage directory {}", parent.display())
                })?;
            }
        }

        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open storage at {}", path.display()))?;

        let mut storage = LocalStorage { conn };
        storage.init_schema()?;

        Ok(storage)
    }

    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let mut storage = LocalStorage { conn };
        storage.init_schema()?;
        Ok(storage)
    }

    fn init_schema(&mut self) -> Result<()> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS local_storage (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            ) WITHOUT ROWID;
            ",
        )?;

        Ok(())
    }

    pub fn get_item(&self, key: &str) -> Result<Option<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT value FROM local_storage WHERE key = ?1")?;

        let result = stmt.query_row(params![key], |row| row.get::<_, String>(0));

        match result {
            Ok(value) => Ok(Some(value)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO local_storage (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    pub fn remove_item(&self, key: &str) -> Result<()> {
        self.conn
            .execute("DELETE FROM local_storage WHERE key = ?1", params![key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_none() {
        let storage = LocalStorage::new_in_memory().unwrap();
        assert_eq!(storage.get_item("waterIntake").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites() {
        let storage = LocalStorage::new_in_memory().unwrap();
        storage.set_item("k", "one").unwrap();
        storage.set_item("k", "two").unwrap();
        assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("two"));
    }

    #[test]
    fn test_remove_item() {
        let storage = LocalStorage::new_in_memory().unwrap();
        storage.set_item("k", "v").unwrap();
        storage.remove_item("k").unwrap();
        assert_eq!(storage.get_item("k").unwrap(), None);
        // Removing again is fine
        storage.remove_item("k").unwrap();
    }

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.db");

        {
            let storage = LocalStorage::open(&path).unwrap();
            storage.set_item("waterIntake", "[]").unwrap();
        }

        let storage = LocalStorage::open(&path).unwrap();
        assert_eq!(storage.get_item("waterIntake").unwrap().as_deref(), Some("[]"));
    }
}
