//! timelapse — wall-clock playback demo for the patina engine.
//!
//! Ages a synthetic parchment canvas under poor-storage conditions in real
//! time. The scheduler is polled the way a UI event loop would poll it, so
//! ticks fire on the 100 ms wall-clock cadence, frames render as samples
//! are recorded, and every recorded point streams into
//! `environment_history.csv`.

use std::path::Path;
use std::time::{Duration, Instant};
use std::{fs, thread};

use anyhow::Result;

use patina_core::ScenarioPreset;
use patina_image::ImageBuffer;
use patina_output::{CsvHistoryWriter, HistoryWriter, RecordingObserver};
use patina_sim::{HistoryPoint, SimError, SimObserver, Simulation};

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR:  &str = "output/timelapse";
const CANVAS_SIZE: u32  = 64;
const CHECKER_PX:  u32  = 8;
const SPEED:       f64  = 20.0; // 2 simulated days per tick
const RUN_SECS:    u64  = 3;
const POLL_EVERY:  Duration = Duration::from_millis(20);

const LIGHT_TONE: [u8; 4] = [222, 203, 164, 255];
const DARK_TONE:  [u8; 4] = [201, 177, 130, 255];

// ── Canvas ────────────────────────────────────────────────────────────────────

/// Checkerboard of two parchment tones, stand-in for a scanned artifact.
fn parchment_canvas() -> Result<ImageBuffer> {
    let mut pixels = Vec::with_capacity((CANVAS_SIZE * CANVAS_SIZE * 4) as usize);
    for y in 0..CANVAS_SIZE {
        for x in 0..CANVAS_SIZE {
            let tone = if (x / CHECKER_PX + y / CHECKER_PX) % 2 == 0 {
                LIGHT_TONE
            } else {
                DARK_TONE
            };
            pixels.extend_from_slice(&tone);
        }
    }
    Ok(ImageBuffer::new(CANVAS_SIZE, CANVAS_SIZE, pixels)?)
}

fn mean_rgb(image: &ImageBuffer) -> [f64; 3] {
    let mut sums = [0.0f64; 3];
    for px in image.as_bytes().chunks_exact(4) {
        sums[0] += px[0] as f64;
        sums[1] += px[1] as f64;
        sums[2] += px[2] as f64;
    }
    let count = image.pixel_count() as f64;
    sums.map(|s| s / count)
}

// ── Observer stack ────────────────────────────────────────────────────────────

/// Prints recorded samples as they stream into the CSV writer.
struct TimelapseObserver<W: HistoryWriter> {
    inner:  RecordingObserver<W>,
    frames: usize,
    errors: usize,
}

impl<W: HistoryWriter> TimelapseObserver<W> {
    fn new(inner: RecordingObserver<W>) -> Self {
        Self { inner, frames: 0, errors: 0 }
    }
}

impl<W: HistoryWriter> SimObserver for TimelapseObserver<W> {
    fn on_sample(&mut self, point: &HistoryPoint) {
        println!(
            "  day {:7.1} | {:8.5} % degraded",
            point.time_days, point.degradation_percent
        );
        self.inner.on_sample(point);
    }

    fn on_frame(&mut self, _frame: &ImageBuffer) {
        self.frames += 1;
    }

    fn on_error(&mut self, error: &SimError) {
        self.errors += 1;
        eprintln!("simulation error: {error}");
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    println!("=== timelapse — patina deterioration engine ===");
    println!("Conditions: poor storage  |  Speed: {SPEED}x  |  Wall time: {RUN_SECS} s");
    println!();

    // 1. Synthetic canvas standing in for a scanned artifact.
    let canvas = parchment_canvas()?;
    let source_mean = mean_rgb(&canvas);

    // 2. Poor-storage conditions from day zero, canvas installed.
    let mut sim = Simulation::builder()
        .environment(ScenarioPreset::PoorStorage.environment())
        .speed_multiplier(SPEED)
        .source_image(canvas)
        .build()?;

    // 3. Stream recorded samples to CSV.
    fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvHistoryWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = TimelapseObserver::new(RecordingObserver::new(writer));

    // 4. Play in real time, polling faster than the tick period.
    sim.set_running(true);
    sim.start(Instant::now(), &mut obs);
    let deadline = Instant::now() + Duration::from_secs(RUN_SECS);
    while Instant::now() < deadline {
        sim.poll(Instant::now(), &mut obs);
        thread::sleep(POLL_EVERY);
    }
    sim.pause();

    // 5. Close the export and surface any write error.
    obs.inner.finish();
    if let Some(e) = obs.inner.take_error() {
        eprintln!("export error: {e}");
    }

    // 6. Summary.
    let final_mean = sim.current_frame().map(mean_rgb).unwrap_or(source_mean);
    println!();
    println!("Playback complete:");
    println!("  ticks executed : {}", sim.tick_count());
    println!("  exposure       : {}", sim.exposure());
    println!("  history points : {}", sim.history().len());
    println!("  frames rendered: {}", obs.frames);
    println!("  tick errors    : {}", obs.errors);
    println!(
        "  mean RGB drift : [{:.1}, {:.1}, {:.1}] -> [{:.1}, {:.1}, {:.1}]",
        source_mean[0], source_mean[1], source_mean[2],
        final_mean[0], final_mean[1], final_mean[2],
    );
    println!(
        "History written to {}",
        Path::new(OUTPUT_DIR).join("environment_history.csv").display()
    );

    Ok(())
}
