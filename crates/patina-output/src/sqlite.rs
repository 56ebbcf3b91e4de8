//! SQLite history backend (feature `sqlite`).
//!
//! Creates a single `history.db` file in the configured output directory
//! with one `environment_history` table.

use std::path::Path;

use patina_sim::HistoryPoint;
use rusqlite::Connection;

use crate::writer::HistoryWriter;
use crate::OutputResult;

/// Writes recorded history points to an SQLite database.
pub struct SqliteHistoryWriter {
    conn:     Connection,
    finished: bool,
}

impl SqliteHistoryWriter {
    /// Open (or create) `history.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join("history.db"))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS environment_history (
                 time_days           REAL NOT NULL,
                 temperature_c       REAL NOT NULL,
                 humidity_pct        REAL NOT NULL,
                 light_klux          REAL NOT NULL,
                 degradation_percent REAL NOT NULL
             );",
        )?;

        Ok(Self { conn, finished: false })
    }
}

impl HistoryWriter for SqliteHistoryWriter {
    fn write_point(&mut self, point: &HistoryPoint) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO environment_history \
             (time_days, temperature_c, humidity_pct, light_klux, degradation_percent) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![
                point.time_days,
                point.temperature_c,
                point.humidity_pct,
                point.light_klux,
                point.degradation_percent,
            ],
        )?;
        Ok(())
    }

    fn write_points(&mut self, points: &[HistoryPoint]) -> OutputResult<()> {
        if points.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO environment_history \
                 (time_days, temperature_c, humidity_pct, light_klux, degradation_percent) \
                 VALUES (?1, ?2, ?3, ?4, ?5)",
            )?;
            for point in points {
                stmt.execute(rusqlite::params![
                    point.time_days,
                    point.temperature_c,
                    point.humidity_pct,
                    point.light_klux,
                    point.degradation_percent,
                ])?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
