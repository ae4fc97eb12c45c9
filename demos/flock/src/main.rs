//! flock — two-species demo for the swarm flocking framework.
//!
//! Starlings flock tightly and keep clear of hawks; hawks are drawn toward
//! starlings but ignore each other.  The population is spawned on the first
//! tick, respawned halfway through, and written to `output/flock/` as CSV.
//!
//! Set `RUST_LOG=debug` to see per-tick grid statistics.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use tracing::info;

use swarm_agent::AgentStore;
use swarm_core::{SimConfig, SpeciesId, Tick, Vec3};
use swarm_output::{CsvWriter, OutputWriter, SimOutputObserver};
use swarm_sim::{SimBuilder, SimObserver, TickSummary};
use swarm_spawn::SpawnReport;
use swarm_species::{InteractionRule, SpeciesDefinition, SpeciesSetup, SwarmConfig, SwarmConfigBuilder};

// ── Constants ─────────────────────────────────────────────────────────────────

const STARLINGS:             u32 = 4_000;
const HAWKS:                 u32 = 40;
const TOTAL_TICKS:           u64 = 600; // 10 s at 60 Hz
const OUTPUT_INTERVAL_TICKS: u64 = 60;
const OUTPUT_DIR:            &str = "output/flock";

// ── Species configuration ─────────────────────────────────────────────────────

fn build_swarm() -> Result<SwarmConfig> {
    let mut b = SwarmConfigBuilder::new();
    let starling = b.add_template(SpeciesDefinition::new("starling", 8.0));
    let hawk = b.add_template(SpeciesDefinition::new("hawk", 10.0));

    // Species indices follow add_species order: 0 = starlings, 1 = hawks.
    let flock = InteractionRule {
        separation_radius: 1.0,
        flocking_radius:   3.0,
        separation_weight: 1.5,
        alignment_weight:  1.0,
        cohesion_weight:   0.8,
    };
    let flee = InteractionRule {
        separation_radius: 6.0,
        separation_weight: 4.0,
        ..InteractionRule::NONE
    };
    let hunt = InteractionRule {
        flocking_radius: 12.0,
        cohesion_weight: 2.0,
        ..InteractionRule::NONE
    };

    b.add_species(
        SpeciesSetup::new(Some(starling), STARLINGS)
            .spawn_sphere(Vec3::ZERO, 25.0)
            .initial_speed(4.0)
            .rule_toward(0, flock)
            .rule_toward(1, flee),
    );
    b.add_species(
        SpeciesSetup::new(Some(hawk), HAWKS)
            .spawn_sphere(Vec3::new(0.0, 30.0, 0.0), 10.0)
            .initial_speed(6.0)
            .rule_toward(0, hunt),
    );

    Ok(b.build()?)
}

// ── Observer wrapper to count rows ────────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    snapshot_rows: usize,
    summary_rows:  usize,
    spawns:        usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, snapshot_rows: 0, summary_rows: 0, spawns: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_spawn(&mut self, tick: Tick, report: &SpawnReport) {
        self.spawns += 1;
        info!(%tick, spawned = report.spawned, seed = report.base_seed, "spawn processed");
    }

    fn on_tick_end(&mut self, summary: &TickSummary) {
        self.summary_rows += 1;
        self.inner.on_tick_end(summary);
    }

    fn on_snapshot(&mut self, tick: Tick, agents: &AgentStore) {
        self.snapshot_rows += agents.count;
        self.inner.on_snapshot(tick, agents);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let swarm = build_swarm()?;
    println!("=== flock — swarm flocking demo ===");
    println!(
        "Species: {}  |  Agents: {}  |  Ticks: {TOTAL_TICKS}",
        swarm.species_count(),
        swarm.total_population(),
    );
    println!();

    let config = SimConfig {
        total_ticks:           TOTAL_TICKS,
        output_interval_ticks: OUTPUT_INTERVAL_TICKS,
        ..SimConfig::default()
    };

    let mut sim = SimBuilder::new(config, swarm).spawn_on_start(true).build()?;

    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer));

    let t0 = Instant::now();
    sim.run_ticks(TOTAL_TICKS / 2, &mut obs)?;
    sim.request_spawn();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    println!("Simulation complete in {:.3} s ({})", elapsed.as_secs_f64(), sim.clock);
    println!("  spawns processed    : {}", obs.spawns);
    println!("  agent_snapshots.csv : {} rows", obs.snapshot_rows);
    println!("  tick_summaries.csv  : {} rows", obs.summary_rows);
    println!();

    // Per-species centroid and mean speed.
    println!("{:<10} {:>7} {:>28} {:>10}", "Species", "Agents", "Centroid", "Speed");
    println!("{}", "-".repeat(58));
    for s in 0..sim.swarm.species_count() {
        let species = SpeciesId(s as u16);
        let name = sim.swarm.species_template(species).map_or("?", |t| t.name.as_str());
        let slots: Vec<usize> = (0..sim.agents.count)
            .filter(|&i| sim.agents.species[i] == species)
            .collect();
        if slots.is_empty() {
            continue;
        }
        let n = slots.len() as f32;
        let centroid = slots.iter().map(|&i| sim.agents.position[i]).sum::<Vec3>() / n;
        let speed = slots.iter().map(|&i| sim.agents.velocity[i].length()).sum::<f32>() / n;
        println!(
            "{:<10} {:>7} {:>28} {:>10.3}",
            name,
            slots.len(),
            format!("({:.2}, {:.2}, {:.2})", centroid.x, centroid.y, centroid.z),
            speed,
        );
    }

    Ok(())
}
