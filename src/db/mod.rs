//! SQLite database module

mod migrations;
pub mod quotes;

pub use quotes::Cotacao;

use crate::error::Result;
use parking_lot::Mutex;
use rusqlite::Connection;
use std::path::Path;

/// SQLite database wrapper
///
/// The connection rides behind a mutex; inserts to the append-only cotacoes
/// table serialize here, which is the only cross-request coordination the
/// server needs.
pub struct QuoteDb {
    conn: Mutex<Connection>,
}

impl QuoteDb {
    /// Open (or create) the database at the given path
    pub fn new(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        Self::init(conn)
    }

    /// Open an in-memory database, used by tests
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::init(conn)
    }

    fn init(conn: Connection) -> Result<Self> {
        // Enable WAL mode for better concurrent access
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;

        let db = Self {
            conn: Mutex::new(conn),
        };
        db.run_migrations()?;

        Ok(db)
    }

    fn run_migrations(&self) -> Result<()> {
        let conn = self.conn.lock();
        migrations::run_migrations(&conn)
    }

    /// Insert a new quote and return the stored row
    pub fn insert_cotacao(&self, valor: f64) -> Result<Cotacao> {
        let conn = self.conn.lock();
        Ok(quotes::insert_cotacao(&conn, valor)?)
    }

    /// Most recent quotes, newest first
    pub fn recent_cotacoes(&self, limit: i64) -> Result<Vec<Cotacao>> {
        let conn = self.conn.lock();
        Ok(quotes::recent_cotacoes(&conn, limit)?)
    }

    /// Number of stored quotes
    pub fn count_cotacoes(&self) -> Result<i64> {
        let conn = self.conn.lock();
        Ok(quotes::count_cotacoes(&conn)?)
    }
}
