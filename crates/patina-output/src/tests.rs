//! Integration tests for patina-output.

use patina_sim::HistoryPoint;

fn point(time_days: f64) -> HistoryPoint {
    HistoryPoint {
        time_days,
        temperature_c:       22.5,
        humidity_pct:        55.0,
        light_klux:          0.15,
        degradation_percent: time_days / 100.0,
    }
}

#[cfg(test)]
mod csv_tests {
    use std::time::Instant;

    use patina_sim::{HistoryBuffer, Simulation};
    use tempfile::TempDir;

    use super::point;
    use crate::csv::CsvHistoryWriter;
    use crate::observer::RecordingObserver;
    use crate::writer::{export_history, HistoryWriter};

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_file_created() {
        let dir = tmp();
        let _w = CsvHistoryWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("environment_history.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvHistoryWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("environment_history.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            ["time_days", "temperature_c", "humidity_pct", "light_klux", "degradation_percent"]
        );
    }

    #[test]
    fn csv_point_round_trip() {
        let dir = tmp();
        let mut w = CsvHistoryWriter::new(dir.path()).unwrap();
        w.write_point(&point(12.5)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("environment_history.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        // f64::to_string is shortest-roundtrip, so parsing back is exact.
        assert_eq!(rows[0][0].parse::<f64>().unwrap(), 12.5);
        assert_eq!(rows[0][1].parse::<f64>().unwrap(), 22.5);
        assert_eq!(rows[0][2].parse::<f64>().unwrap(), 55.0);
        assert_eq!(rows[0][3].parse::<f64>().unwrap(), 0.15);
        assert_eq!(rows[0][4].parse::<f64>().unwrap(), 0.125);
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvHistoryWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not fail
    }

    #[test]
    fn export_writes_buffer_oldest_first() {
        let mut history = HistoryBuffer::with_capacity(3);
        for i in 0..5 {
            history.push(point(i as f64));
        }

        let dir = tmp();
        let mut w = CsvHistoryWriter::new(dir.path()).unwrap();
        export_history(&history, &mut w).unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("environment_history.csv")).unwrap();
        let times: Vec<f64> = rdr
            .records()
            .map(|r| r.unwrap()[0].parse().unwrap())
            .collect();
        // Capacity 3 kept only the newest window, in recording order.
        assert_eq!(times, vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn export_of_empty_buffer_is_header_only() {
        let dir = tmp();
        let mut w = CsvHistoryWriter::new(dir.path()).unwrap();
        export_history(&HistoryBuffer::new(), &mut w).unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("environment_history.csv")).unwrap();
        assert_eq!(rdr.records().count(), 0);
    }

    #[test]
    fn integration_streaming_run() {
        let mut sim = Simulation::new();
        sim.set_running(true);

        let dir = tmp();
        let writer = CsvHistoryWriter::new(dir.path()).unwrap();
        let mut obs = RecordingObserver::new(writer);

        // Initial point on start plus records at ticks 10..50.
        sim.start(Instant::now(), &mut obs);
        sim.step(50, &mut obs);
        obs.finish();
        assert!(obs.take_error().is_none(), "no write errors expected");

        let mut rdr = csv::Reader::from_path(dir.path().join("environment_history.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 6, "expected 1 initial + 5 cadence rows, got {}", rows.len());
        assert_eq!(rows[0][0].parse::<f64>().unwrap(), 0.0);
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use super::point;
    use crate::sqlite::SqliteHistoryWriter;
    use crate::writer::HistoryWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteHistoryWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("history.db").exists());
    }

    #[test]
    fn sqlite_point_round_trip() {
        let dir = tmp();
        let mut w = SqliteHistoryWriter::new(dir.path()).unwrap();
        w.write_point(&point(12.5)).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("history.db")).unwrap();
        let (time, temp, rh, lux, deg): (f64, f64, f64, f64, f64) = conn
            .query_row(
                "SELECT time_days, temperature_c, humidity_pct, light_klux, degradation_percent \
                 FROM environment_history",
                [],
                |r| Ok((r.get(0)?, r.get(1)?, r.get(2)?, r.get(3)?, r.get(4)?)),
            )
            .unwrap();
        assert_eq!(time, 12.5);
        assert_eq!(temp, 22.5);
        assert_eq!(rh, 55.0);
        assert_eq!(lux, 0.15);
        assert_eq!(deg, 0.125);
    }

    #[test]
    fn sqlite_batch_write_counts() {
        let dir = tmp();
        let mut w = SqliteHistoryWriter::new(dir.path()).unwrap();
        let points: Vec<_> = (0..25).map(|i| point(i as f64)).collect();
        w.write_points(&points).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("history.db")).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM environment_history", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 25);
    }

    #[test]
    fn sqlite_empty_batch_ok() {
        let dir = tmp();
        let mut w = SqliteHistoryWriter::new(dir.path()).unwrap();
        w.write_points(&[]).unwrap();
    }

    #[test]
    fn sqlite_finish_idempotent() {
        let dir = tmp();
        let mut w = SqliteHistoryWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}
