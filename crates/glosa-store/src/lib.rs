use std::path::Path;

use chrono::{DateTime, Utc};
use glosa_core::store::{EntryStore, StoreError};
use glosa_types::{StoredEntry, WordInfo};
use rusqlite::{Connection, ErrorCode, OptionalExtension, params};

/// SQLite-backed word store
#[derive(Debug)]
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (or create) the database file, creating parent directories as needed
    pub fn open(db_path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                StoreError::Backend(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        tracing::info!("Opening word store at {}", db_path.display());
        let conn = Connection::open(db_path).map_err(backend)?;
        Self::with_connection(conn)
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(backend)?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        conn.execute(
            r#"
            CREATE TABLE IF NOT EXISTS words (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                word TEXT NOT NULL UNIQUE,
                dict_entry TEXT NOT NULL,
                time_added TEXT NOT NULL
            )
            "#,
            [],
        )
        .map_err(backend)?;

        Ok(SqliteStore { conn })
    }
}

fn backend(e: rusqlite::Error) -> StoreError {
    StoreError::Backend(e.to_string())
}

fn parse_time(raw: &str) -> Result<DateTime<Utc>, StoreError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| StoreError::Backend(format!("Invalid time_added '{raw}': {e}")))
}

fn to_entry(word: String, dict_entry: String, time_added: String) -> Result<StoredEntry, StoreError> {
    Ok(StoredEntry {
        word,
        entry: serde_json::from_str(&dict_entry)?,
        time_added: parse_time(&time_added)?,
    })
}

impl EntryStore for SqliteStore {
    fn add(&mut self, word: &str, entry: &WordInfo, time_added: DateTime<Utc>) -> Result<(), StoreError> {
        let dict_entry = serde_json::to_string(entry)?;

        self.conn
            .execute(
                "INSERT INTO words (word, dict_entry, time_added) VALUES (?1, ?2, ?3)",
                params![word, dict_entry, time_added.to_rfc3339()],
            )
            .map_err(|e| match e.sqlite_error_code() {
                Some(ErrorCode::ConstraintViolation) => StoreError::Duplicate(word.to_string()),
                _ => backend(e),
            })?;

        Ok(())
    }

    fn get(&self, word: &str) -> Result<Option<StoredEntry>, StoreError> {
        let row = self
            .conn
            .query_row(
                "SELECT word, dict_entry, time_added FROM words WHERE word = ?1",
                [word],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                    ))
                },
            )
            .optional()
            .map_err(backend)?;

        row.map(|(word, dict_entry, time_added)| to_entry(word, dict_entry, time_added))
            .transpose()
    }

    fn delete(&mut self, word: &str) -> Result<bool, StoreError> {
        let removed = self
            .conn
            .execute("DELETE FROM words WHERE word = ?1", [word])
            .map_err(backend)?;
        Ok(removed > 0)
    }

    fn list(&self) -> Result<Vec<StoredEntry>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT word, dict_entry, time_added FROM words ORDER BY id")
            .map_err(backend)?;

        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })
            .map_err(backend)?;

        let mut entries = Vec::new();
        for row in rows {
            let (word, dict_entry, time_added) = row.map_err(backend)?;
            match to_entry(word, dict_entry, time_added) {
                Ok(entry) => entries.push(entry),
                // One bad row should not hide the rest of the word list
                Err(e) => tracing::warn!("Skipping unreadable stored word: {}", e),
            }
        }

        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use glosa_types::{Definition, DefinitionSource};
    use tempfile::tempdir;

    use super::*;

    fn info(word: &str) -> WordInfo {
        WordInfo::from_network(
            word,
            vec![Definition {
                word_type: "verb".into(),
                definition: "to handle or direct".into(),
                example: Some("manage a shop".into()),
                synonyms: vec!["run".into(), "direct".into()],
            }],
            vec!["hantera".into()],
            DefinitionSource::Thesaurus,
        )
    }

    #[test]
    fn test_add_get_delete() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let now = Utc::now();

        store.add("manage", &info("manage"), now).unwrap();

        let row = store.get("manage").unwrap().unwrap();
        assert_eq!(row.word, "manage");
        assert_eq!(row.entry, info("manage"));
        assert_eq!(row.time_added, now);

        assert!(store.get("absent").unwrap().is_none());

        assert!(store.delete("manage").unwrap());
        assert!(!store.delete("manage").unwrap());
        assert!(store.get("manage").unwrap().is_none());
    }

    #[test]
    fn test_duplicate_word_rejected() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.add("run", &info("run"), Utc::now()).unwrap();

        let err = store.add("run", &info("run"), Utc::now()).unwrap_err();
        assert!(matches!(err, StoreError::Duplicate(word) if word == "run"));
    }

    #[test]
    fn test_list_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("words.db");

        {
            let mut store = SqliteStore::open(&path).unwrap();
            store.add("run", &info("run"), Utc::now()).unwrap();
            store.add("walk", &info("walk"), Utc::now()).unwrap();
        }

        let store = SqliteStore::open(&path).unwrap();
        let words: Vec<String> = store.list().unwrap().into_iter().map(|e| e.word).collect();
        assert_eq!(words, vec!["run", "walk"]);
    }

    #[test]
    fn test_list_skips_corrupt_rows() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.add("run", &info("run"), Utc::now()).unwrap();
        store
            .conn
            .execute(
                "INSERT INTO words (word, dict_entry, time_added) VALUES ('bad', 'not json', 'x')",
                [],
            )
            .unwrap();

        let entries = store.list().unwrap();
        assert_eq!(entries.len(), 1);
        assert!(matches!(store.get("bad"), Err(StoreError::Encoding(_))));
    }
}
