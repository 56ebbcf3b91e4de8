//! museum — preset survey demo for the patina deterioration engine.
//!
//! Evaluates every scenario preset at its bundled exposure and prints the
//! resulting degradation table, then plays a museum-conditions simulation
//! forward by manual ticks and writes its snapshot to JSON, the payload a
//! host front-end would consume.

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use patina_core::ScenarioPreset;
use patina_kinetics::DegradationEngine;
use patina_sim::{NoopObserver, Simulation};

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR:    &str = "output/museum";
const SNAPSHOT_FILE: &str = "snapshot.json";
const SPEED:         f64  = 10.0;
const STEP_TICKS:    u32  = 600; // one simulated minute of playback

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    println!("=== museum — patina deterioration engine ===");
    println!();

    // 1. Survey every scenario preset with a plain kinetics engine.
    let engine = DegradationEngine::new();
    println!(
        "{:<14} {:>5} {:>5} {:>6} {:>12} {:>10} {:>10}",
        "Preset", "°C", "%RH", "klux", "Exposure(d)", "Deg(%)", "Visual(%)"
    );
    println!("{}", "-".repeat(70));
    for preset in ScenarioPreset::ALL {
        let env = preset.environment();
        let sample = engine.sample_at(&env, preset.exposure().total_days());
        println!(
            "{:<14} {:>5.1} {:>5.0} {:>6.2} {:>12.1} {:>10.4} {:>10.2}",
            preset.name(),
            env.temperature_c(),
            env.humidity_pct(),
            env.light_klux(),
            sample.total_days,
            sample.degradation_percent(),
            sample.visual_degradation_fraction * 100.0,
        );
    }
    println!();

    // 2. Play museum conditions forward by manual ticks.
    let mut sim = Simulation::builder()
        .preset(ScenarioPreset::Museum)
        .speed_multiplier(SPEED)
        .build()?;
    let mut observer = NoopObserver;
    sim.set_running(true);
    sim.start(Instant::now(), &mut observer);
    sim.step(STEP_TICKS, &mut observer);
    sim.stop();

    let snapshot = sim.snapshot();
    println!("After {STEP_TICKS} manual ticks at {SPEED}x speed:");
    println!("  exposure    : {}", snapshot.exposure);
    println!("  degradation : {:.4} %", snapshot.sample.degradation_percent());
    println!("  color left  : {:.4} %", snapshot.sample.color_remaining_percent());
    println!("  history     : {} points", snapshot.history_len);
    println!();

    // 3. Persist the snapshot for host front-ends.
    fs::create_dir_all(OUTPUT_DIR)?;
    let path = Path::new(OUTPUT_DIR).join(SNAPSHOT_FILE);
    fs::write(&path, serde_json::to_string_pretty(&snapshot)?)?;
    println!("Snapshot written to {}", path.display());

    Ok(())
}
