//! ward: runs the triage model on its default 15×15 ward.
//!
//! Builds the default configuration (two doctors, two patients), runs it for
//! `total_ticks`, prints the efficiency series and the final ward state, and
//! exports both CSV files to `output/ward/`.  Set `RUST_LOG=debug` to see
//! deaths and treatments as they happen.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use triage_agent::AgentStore;
use triage_core::{Tick, TriageConfig};
use triage_output::{CsvWriter, MetricsCollector, OutputWriter, SimOutputObserver};
use triage_sim::{EfficiencyReport, SimBuilder, SimObserver};
use triage_spatial::SpatialGrid;

// ── Constants ─────────────────────────────────────────────────────────────────

const OUTPUT_DIR:  &str = "output/ward";
const PRINT_EVERY: usize = 10;

// ── Observer fan-out ──────────────────────────────────────────────────────────

/// Feeds both the in-memory collector and the CSV observer.
struct WardObserver<W: OutputWriter> {
    collector: MetricsCollector,
    export:    SimOutputObserver<W>,
}

impl<W: OutputWriter> SimObserver for WardObserver<W> {
    fn on_tick_start(&mut self, tick: Tick, report: &EfficiencyReport) {
        self.collector.on_tick_start(tick, report);
        self.export.on_tick_start(tick, report);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore, grid: &SpatialGrid) {
        self.collector.on_snapshot(tick, agents, grid);
        self.export.on_snapshot(tick, agents, grid);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.export.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::init();

    let config = TriageConfig::default();
    println!("=== ward: triage grid simulation ===");
    println!(
        "Grid: {}x{}  |  Doctors: {}  |  Patients: {}  |  Ticks: {}  |  Seed: {}",
        config.width,
        config.height,
        config.doctor_count,
        config.patient_count,
        config.total_ticks,
        config.seed
    );
    println!();

    // 1. Build.
    let mut sim = SimBuilder::new(config).build()?;

    // 2. Output.
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = WardObserver {
        collector: MetricsCollector::new(),
        export:    SimOutputObserver::new(writer),
    };

    // 3. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.export.take_error() {
        eprintln!("output error: {e}");
    }

    // 4. Efficiency series.
    println!("{:<8} {:<12} {:<6} {:<6} {:<6}", "Tick", "Efficiency", "Saved", "Dead", "Alive");
    println!("{}", "-".repeat(40));
    let series = obs.collector.efficiency();
    for (i, row) in series.iter().enumerate() {
        if i % PRINT_EVERY == 0 || i + 1 == series.len() {
            println!(
                "{:<8} {:<12.3} {:<6} {:<6} {:<6}",
                row.tick, row.efficiency, row.saved, row.dead, row.alive
            );
        }
    }
    println!();

    // 5. Final ward state.
    println!("{:<8} {:<8} {:<10} {:<8} {:<8}", "Agent", "Role", "Cell", "Injury", "TTL");
    println!("{}", "-".repeat(44));
    for view in sim.views() {
        let (injury, ttl) = match view.patient() {
            Some(p) if p.is_alive() => (p.injury_level().to_string(), p.ttl().to_string()),
            Some(_) => ("-".to_owned(), "dead".to_owned()),
            None => ("".to_owned(), "".to_owned()),
        };
        println!(
            "{:<8} {:<8} {:<10} {:<8} {:<8}",
            view.id.0,
            view.role().as_str(),
            view.pos.to_string(),
            injury,
            ttl
        );
    }
    println!();

    println!("Final efficiency: {:.3}", sim.efficiency());
    println!("Simulation complete in {:.3} s; CSV written to {OUTPUT_DIR}/", elapsed.as_secs_f64());
    log::info!("finished at {}", sim.tick());

    Ok(())
}
