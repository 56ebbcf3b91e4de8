//! `patina-output` — history export writers for the patina framework.
//!
//! Two backends are provided behind Cargo features:
//!
//! | Feature  | Backend | Files created               |
//! |----------|---------|-----------------------------|
//! | *(none)* | CSV     | `environment_history.csv`   |
//! | `sqlite` | SQLite  | `history.db`                |
//!
//! Both implement [`HistoryWriter`]. Stream samples live by driving the
//! simulation with a [`RecordingObserver`], or dump a finished run's buffer
//! with [`export_history`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use patina_output::{CsvHistoryWriter, RecordingObserver};
//!
//! let writer = CsvHistoryWriter::new(Path::new("./output")).unwrap();
//! let mut obs = RecordingObserver::new(writer);
//! sim.start(Instant::now(), &mut obs);
//! // ... poll ...
//! obs.finish();
//! obs.take_error().map(|e| eprintln!("export error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use csv::CsvHistoryWriter;
pub use error::{OutputError, OutputResult};
pub use observer::RecordingObserver;
pub use writer::{export_history, HistoryWriter};

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteHistoryWriter;
