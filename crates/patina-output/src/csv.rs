//! CSV history backend.
//!
//! Creates `environment_history.csv` in the configured output directory,
//! one row per recorded history point.

use std::fs::File;
use std::path::Path;

use csv::Writer;
use patina_sim::HistoryPoint;

use crate::writer::HistoryWriter;
use crate::OutputResult;

/// Writes recorded history points to a CSV file.
pub struct CsvHistoryWriter {
    history:  Writer<File>,
    finished: bool,
}

impl CsvHistoryWriter {
    /// Open (or create) `environment_history.csv` in `dir` and write the
    /// header row.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut history = Writer::from_path(dir.join("environment_history.csv"))?;
        history.write_record([
            "time_days",
            "temperature_c",
            "humidity_pct",
            "light_klux",
            "degradation_percent",
        ])?;

        Ok(Self { history, finished: false })
    }
}

impl HistoryWriter for CsvHistoryWriter {
    fn write_point(&mut self, point: &HistoryPoint) -> OutputResult<()> {
        self.history.write_record(&[
            point.time_days.to_string(),
            point.temperature_c.to_string(),
            point.humidity_pct.to_string(),
            point.light_klux.to_string(),
            point.degradation_percent.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.history.flush()?;
        Ok(())
    }
}
