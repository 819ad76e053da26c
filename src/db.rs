//! SQLite-backed board/card store.
//!
//! The database lives at `~/.boardpulse/boardpulse.db`. Board property
//! schemas and card property maps are persisted as JSON columns; rows come
//! back `ORDER BY rowid` so the digest's enumeration order is stable. The
//! digest layer only reads; the upsert helpers exist for ingest and test
//! fixtures.

use std::collections::HashMap;
use std::path::PathBuf;

use rusqlite::{params, Connection};

use crate::error::StoreError;
use crate::store::BoardStore;
use crate::types::{Block, Board, PropertyDef, PropertyValue};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS boards (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL DEFAULT '',
    card_properties TEXT NOT NULL DEFAULT '[]'
);
CREATE TABLE IF NOT EXISTS blocks (
    id TEXT PRIMARY KEY,
    board_id TEXT NOT NULL,
    title TEXT NOT NULL DEFAULT '',
    type TEXT NOT NULL,
    properties TEXT NOT NULL DEFAULT '{}',
    delete_at INTEGER NOT NULL DEFAULT 0
);
CREATE INDEX IF NOT EXISTS idx_blocks_board ON blocks(board_id);
";

pub struct BoardDb {
    conn: Connection,
}

impl BoardDb {
    /// Borrow the underlying connection for ad-hoc queries.
    pub fn conn_ref(&self) -> &Connection {
        &self.conn
    }

    /// Open (or create) the database at `~/.boardpulse/boardpulse.db` and
    /// apply the schema.
    pub fn open() -> Result<Self, StoreError> {
        let path = Self::db_path()?;
        Self::open_at(path)
    }

    /// Open a database at an explicit path. Useful for testing.
    pub fn open_at(path: PathBuf) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(StoreError::CreateDir)?;
            }
        }

        let conn = Connection::open(&path)?;

        // WAL for better concurrent read performance
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        conn.execute_batch(SCHEMA)?;

        Ok(Self { conn })
    }

    fn db_path() -> Result<PathBuf, StoreError> {
        let home = dirs::home_dir().ok_or(StoreError::HomeDirNotFound)?;
        Ok(home.join(".boardpulse").join("boardpulse.db"))
    }

    /// Insert or replace a board, including its property schema.
    pub fn upsert_board(&self, board: &Board) -> Result<(), StoreError> {
        let card_properties = serde_json::to_string(&board.card_properties)?;
        self.conn.execute(
            "INSERT INTO boards (id, title, card_properties)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(id) DO UPDATE SET
                 title = excluded.title,
                 card_properties = excluded.card_properties",
            params![board.id, board.title, card_properties],
        )?;
        Ok(())
    }

    /// Insert or replace a block, including its property-value map.
    pub fn upsert_block(&self, block: &Block) -> Result<(), StoreError> {
        let properties = serde_json::to_string(&block.properties)?;
        self.conn.execute(
            "INSERT INTO blocks (id, board_id, title, type, properties, delete_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             ON CONFLICT(id) DO UPDATE SET
                 board_id = excluded.board_id,
                 title = excluded.title,
                 type = excluded.type,
                 properties = excluded.properties,
                 delete_at = excluded.delete_at",
            params![
                block.id,
                block.board_id,
                block.title,
                block.block_type,
                properties,
                block.delete_at
            ],
        )?;
        Ok(())
    }
}

impl BoardStore for BoardDb {
    fn list_boards(&self) -> Result<Vec<Board>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, title, card_properties FROM boards ORDER BY rowid")?;
        let rows = stmt.query_map([], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?;

        let mut boards = Vec::new();
        for row in rows {
            let (id, title, props_json) = row?;
            let card_properties: Vec<PropertyDef> = serde_json::from_str(&props_json)?;
            boards.push(Board {
                id,
                title,
                card_properties,
            });
        }
        Ok(boards)
    }

    fn list_blocks_for_board(&self, board_id: &str) -> Result<Vec<Block>, StoreError> {
        let mut stmt = self.conn.prepare(
            "SELECT id, board_id, title, type, properties, delete_at
             FROM blocks WHERE board_id = ?1 ORDER BY rowid",
        )?;
        let rows = stmt.query_map(params![board_id], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, String>(3)?,
                row.get::<_, String>(4)?,
                row.get::<_, i64>(5)?,
            ))
        })?;

        let mut blocks = Vec::new();
        for row in rows {
            let (id, board_id, title, block_type, props_json, delete_at) = row?;
            let properties: HashMap<String, PropertyValue> = serde_json::from_str(&props_json)?;
            blocks.push(Block {
                id,
                board_id,
                title,
                block_type,
                delete_at,
                properties,
            });
        }
        Ok(blocks)
    }
}

pub mod test_utils {
    use super::BoardDb;

    /// Create a temporary database for testing.
    ///
    /// We leak the `TempDir` so the directory persists for the duration of
    /// the test; the OS cleans test temp dirs up.
    pub fn test_db() -> BoardDb {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("test.db");
        std::mem::forget(dir);
        BoardDb::open_at(path).expect("Failed to open test database")
    }
}
