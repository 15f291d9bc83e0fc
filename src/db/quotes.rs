//! Cotacoes Database Module
//!
//! Append-only log of fetched USD/BRL quotes. One row per successful upstream
//! fetch; rows are never updated after insertion.

use rusqlite::{params, Connection, Result};
use serde::{Deserialize, Serialize};

/// A stored quote row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cotacao {
    pub id: i64,
    pub valor: f64,
    pub created_at: String,
    pub updated_at: String,
    pub deleted_at: Option<String>,
}

/// Insert a new quote and return the stored row
pub fn insert_cotacao(conn: &Connection, valor: f64) -> Result<Cotacao> {
    conn.execute(
        "INSERT INTO cotacoes (valor, created_at, updated_at)
         VALUES (?1, datetime('now'), datetime('now'))",
        params![valor],
    )?;

    let id = conn.last_insert_rowid();
    get_cotacao(conn, id)
}

/// Fetch a single quote row by id
pub fn get_cotacao(conn: &Connection, id: i64) -> Result<Cotacao> {
    conn.query_row(
        "SELECT id, valor, created_at, updated_at, deleted_at
         FROM cotacoes
         WHERE id = ?1",
        params![id],
        row_to_cotacao,
    )
}

/// Get the most recent quotes, newest first
pub fn recent_cotacoes(conn: &Connection, limit: i64) -> Result<Vec<Cotacao>> {
    let mut stmt = conn.prepare(
        "SELECT id, valor, created_at, updated_at, deleted_at
         FROM cotacoes
         ORDER BY id DESC
         LIMIT ?1",
    )?;

    let rows = stmt.query_map(params![limit], row_to_cotacao)?;
    rows.collect()
}

/// Count all stored quotes
pub fn count_cotacoes(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM cotacoes", [], |row| row.get(0))
}

fn row_to_cotacao(row: &rusqlite::Row<'_>) -> Result<Cotacao> {
    Ok(Cotacao {
        id: row.get(0)?,
        valor: row.get(1)?,
        created_at: row.get(2)?,
        updated_at: row.get(3)?,
        deleted_at: row.get(4)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::migrations;

    fn create_test_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        migrations::run_migrations(&conn).unwrap();
        conn
    }

    #[test]
    fn test_insert_returns_stored_row() {
        let conn = create_test_db();

        let cotacao = insert_cotacao(&conn, 5.25).unwrap();
        assert_eq!(cotacao.valor, 5.25);
        assert!(cotacao.id > 0);
        assert!(!cotacao.created_at.is_empty());
        assert!(cotacao.deleted_at.is_none());
    }

    #[test]
    fn test_inserts_are_append_only() {
        let conn = create_test_db();

        insert_cotacao(&conn, 5.25).unwrap();
        insert_cotacao(&conn, 5.26).unwrap();
        insert_cotacao(&conn, 5.25).unwrap();

        assert_eq!(count_cotacoes(&conn).unwrap(), 3);

        let recent = recent_cotacoes(&conn, 10).unwrap();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].valor, 5.25);
        assert_eq!(recent[1].valor, 5.26);
    }

    #[test]
    fn test_valor_serializes_as_json_number() {
        let conn = create_test_db();

        let cotacao = insert_cotacao(&conn, 5.25).unwrap();
        let json = serde_json::to_value(&cotacao).unwrap();
        assert_eq!(json["valor"], 5.25);
        assert!(json["deleted_at"].is_null());
    }
}
