//! `RecordingObserver<W>` — bridges `SimObserver` to a `HistoryWriter`.

use patina_sim::{HistoryPoint, SimObserver};

use crate::writer::HistoryWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that streams every recorded sample to a
/// [`HistoryWriter`] backend (CSV or SQLite).
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value. After the run, close the stream with
/// [`finish`][Self::finish] and check [`take_error`][Self::take_error].
pub struct RecordingObserver<W: HistoryWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: HistoryWriter> RecordingObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Flush and close the backend. Idempotent, like the writer itself.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Take the stored write error (if any) after the run.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: HistoryWriter> SimObserver for RecordingObserver<W> {
    fn on_sample(&mut self, point: &HistoryPoint) {
        let result = self.writer.write_point(point);
        self.store_err(result);
    }
}
