//! pursuit: a headless run of the chase simulation.
//!
//! A player and two robots share a 16×12 tile map.  The player sprints to a
//! random tile every few seconds of virtual time; the robots search for it as
//! a squad.  A CSV trace lands in `output/pursuit`.
//!
//! ```text
//! pursuit [MAP.json]
//! ```
//!
//! Without an argument the embedded `data/map.json` is used.  Set `RUST_LOG`
//! (`debug` shows every behavior switch) to see what the robots are doing.

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};

use chase_agent::AgentStore;
use chase_core::{AgentId, AgentSettings, Frame, SimConfig};
use chase_output::{CsvWriter, OutputWriter, SimOutputObserver};
use chase_sim::{SimBuilder, SimObserver};
use chase_spatial::{load_map_path, load_map_reader, Graph, TileGrid};

// ── Constants ─────────────────────────────────────────────────────────────────

const DEFAULT_MAP:           &str = include_str!("../data/map.json");
const CANVAS_WIDTH:          f64  = 800.0;
const CANVAS_HEIGHT:         f64  = 600.0;
const ROBOT_COUNT:           usize = 2;
const ROBOT_RUN_SPEED:       f64  = 0.09;
const SEED:                  u64  = 42;
const FRAME_MS:              f64  = 32.0;
const TOTAL_FRAMES:          u64  = 3_000; // 96 s of virtual time
const RETARGET_FRAMES:       u64  = 150;   // player picks a new goal every 4.8 s
const OUTPUT_INTERVAL_FRAMES: u64 = 5;
const OUTPUT_DIR:            &str = "output/pursuit";

// ── Observer wrapper to count rows ───────────────────────────────────────────

struct CountingObserver<W: OutputWriter> {
    inner:         SimOutputObserver<W>,
    snapshot_rows: usize,
    summary_rows:  usize,
}

impl<W: OutputWriter> CountingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, snapshot_rows: 0, summary_rows: 0 }
    }
}

impl<W: OutputWriter> SimObserver for CountingObserver<W> {
    fn on_frame_end(&mut self, frame: Frame, elapsed_ms: f64, agents: usize) {
        self.summary_rows += 1;
        self.inner.on_frame_end(frame, elapsed_ms, agents);
    }

    fn on_snapshot(&mut self, frame: Frame, agents: &AgentStore, graph: &Graph) {
        self.snapshot_rows += agents.len();
        self.inner.on_snapshot(frame, agents, graph);
    }

    fn on_sim_end(&mut self, final_frame: Frame) {
        self.inner.on_sim_end(final_frame);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 1. Map.
    let map = match std::env::args().nth(1) {
        Some(path) => load_map_path(Path::new(&path)).with_context(|| format!("loading map {path}"))?,
        None => load_map_reader(DEFAULT_MAP.as_bytes())?,
    };
    let grid = TileGrid::from_map(&map, CANVAS_WIDTH, CANVAS_HEIGHT)?;

    // 2. Sim: the player is agent 0, robots follow.
    let config = SimConfig {
        frame_ms:               FRAME_MS,
        total_frames:           TOTAL_FRAMES,
        seed:                   SEED,
        output_interval_frames: OUTPUT_INTERVAL_FRAMES,
    };
    let robot_settings = AgentSettings { run_speed: ROBOT_RUN_SPEED, ..AgentSettings::default() };
    let mut builder = SimBuilder::new(config.clone(), grid).agent(AgentSettings::default(), None);
    for _ in 0..ROBOT_COUNT {
        builder = builder.agent(robot_settings, None);
    }
    let mut sim = builder.build()?;

    let player = AgentId(0);
    let robots: Vec<AgentId> = sim.agents.agent_ids().skip(1).collect();
    sim.command(player, |agent, _| agent.stay_put())?;
    for &robot in &robots {
        sim.command(robot, |agent, _| agent.search_for(player, robots.clone()))?;
    }
    log::info!(
        "{} robots hunting the player for {} frames of {} ms",
        robots.len(),
        config.total_frames,
        config.frame_ms
    );

    // 3. Output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = CountingObserver::new(SimOutputObserver::new(writer));

    // 4. Run, sending the player somewhere new every RETARGET_FRAMES.
    let t0 = Instant::now();
    while sim.current_frame() < config.end_frame() {
        if let Some(goal) = sim.random_node() {
            sim.command(player, |agent, ctx| agent.run_to(goal, ctx))?;
        }
        let left = config.end_frame().0 - sim.current_frame().0;
        sim.run_frames(RETARGET_FRAMES.min(left), &mut obs)?;
    }
    obs.on_sim_end(sim.current_frame());
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        log::error!("output error: {e}");
    }

    // 5. Summary.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  agent_snapshots.csv : {} rows", obs.snapshot_rows);
    println!("  frame_summaries.csv : {} rows", obs.summary_rows);
    println!();

    println!("{:<8} {:<16} {:<10} {:<6}", "Agent", "Behavior", "Tile", "Alert");
    println!("{}", "-".repeat(42));
    for agent in sim.agents.iter() {
        let tile = agent
            .closest_tile(&sim.graph)
            .map_or_else(|| "-".to_owned(), |t| t.to_string());
        println!(
            "{:<8} {:<16} {:<10} {:<6}",
            agent.id().0,
            agent.behavior_name(),
            tile,
            if agent.is_alert() { "yes" } else { "no" },
        );
    }

    Ok(())
}
