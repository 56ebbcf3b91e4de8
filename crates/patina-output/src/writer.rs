//! The `HistoryWriter` trait implemented by all backend writers.

use patina_sim::{HistoryBuffer, HistoryPoint};

use crate::OutputResult;

/// Trait implemented by the CSV and SQLite history writers.
///
/// Methods report failures to the caller; when a writer is driven through a
/// [`RecordingObserver`](crate::RecordingObserver) the first failure is
/// stashed there and retrieved with
/// [`take_error`](crate::RecordingObserver::take_error) after the run.
pub trait HistoryWriter {
    /// Write one recorded history point.
    fn write_point(&mut self, point: &HistoryPoint) -> OutputResult<()>;

    /// Write a batch of points. Backends with transactions override this;
    /// the default just loops.
    fn write_points(&mut self, points: &[HistoryPoint]) -> OutputResult<()> {
        for point in points {
            self.write_point(point)?;
        }
        Ok(())
    }

    /// Flush and close the underlying handle.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

/// Dump everything a history buffer currently holds, oldest first, and
/// finish the writer. This is the "export data" operation hosts bind to a
/// button.
pub fn export_history<W: HistoryWriter>(
    history: &HistoryBuffer,
    writer:  &mut W,
) -> OutputResult<()> {
    let points: Vec<HistoryPoint> = history.iter().copied().collect();
    writer.write_points(&points)?;
    writer.finish()
}
