//! downtown — a few blocks of city with every vehicle kind on the road.
//!
//! ```text
//! cargo run -p downtown                     # built-in config
//! cargo run -p downtown -- config.json      # SimConfig from JSON
//! RUST_LOG=ts_vehicle=debug cargo run -p downtown   # log every crash
//! ```
//!
//! Writes `vehicle_snapshots.csv` and `tick_summaries.csv` to
//! `output/downtown/`.

use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use ts_core::{SimConfig, Terrain, Tick};
use ts_grid::{CityGrid, load_roster_reader, parse_map};
use ts_output::{CsvWriter, SimOutputObserver};
use ts_sim::{SimBuilder, SimObserver, TickReport};
use ts_vehicle::Vehicle;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:                  u64 = 42;
const TOTAL_TICKS:           u64 = 300;
const SIGNAL_PERIOD_TICKS:   u64 = 8;
const OUTPUT_INTERVAL_TICKS: u64 = 5;
const OUTPUT_DIR:            &str = "output/downtown";

// ── Built-in city ─────────────────────────────────────────────────────────────

// Two avenues crossing two streets, lights at the junctions, crosswalks on
// the approaches, a park with a bike trail in the middle.
const MAP: &str = "\
12 16
WWWWWWWWWWWWWWWW
WSSSCLSSSSSCLSSW
WSGGGCGGGGGCGGSW
WCGTTTTTTTTTTGCW
WLCGGGGGGGGGTCLW
WSGGGGGGGGGGTGSW
WSGGGGGGGGGGTGSW
WCGTTTTTTTTTTGCW
WLCGGGGGGGGGGCLW
WSGGGCGGGGGCGGSW
WSSSCLSSSSSCLSSW
WWWWWWWWWWWWWWWW
";

const ROSTER_CSV: &str = "\
kind,x,y,direction\n\
car,2,1,east\n\
car,14,10,west\n\
taxi,8,1,west\n\
taxi,1,6,south\n\
truck,8,10,east\n\
truck,14,5,north\n\
bicycle,3,3,east\n\
bicycle,12,6,south\n\
atv,7,5,west\n\
pedestrian,2,2,east\n\
pedestrian,13,9,north\n\
human,6,8,west\n\
";

// ── Observer ──────────────────────────────────────────────────────────────────

/// Forwards to the CSV observer and keeps a few run-wide tallies.
struct CountingObserver<O: SimObserver> {
    inner:         O,
    summary_rows:  u64,
    snapshot_rows: u64,
    peak_dead:     usize,
}

impl<O: SimObserver> SimObserver for CountingObserver<O> {
    fn on_tick_start(&mut self, tick: Tick) {
        self.inner.on_tick_start(tick);
    }

    fn on_tick_end(&mut self, report: &TickReport) {
        self.summary_rows += 1;
        self.inner.on_tick_end(report);
    }

    fn on_snapshot(&mut self, tick: Tick, vehicles: &[Vehicle]) {
        self.snapshot_rows += vehicles.len() as u64;
        let dead = vehicles.iter().filter(|v| !v.is_alive()).count();
        self.peak_dead = self.peak_dead.max(dead);
        self.inner.on_snapshot(tick, vehicles);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 1. Configuration.
    let config = match std::env::args().nth(1) {
        Some(path) => load_config(Path::new(&path))?,
        None => SimConfig {
            total_ticks:           TOTAL_TICKS,
            seed:                  SEED,
            signal_period_ticks:   SIGNAL_PERIOD_TICKS,
            output_interval_ticks: OUTPUT_INTERVAL_TICKS,
        },
    };

    println!("=== downtown — grid traffic ===");
    println!(
        "Ticks: {}  |  Seed: {}  |  Signal period: {}",
        config.total_ticks, config.seed, config.signal_period_ticks
    );
    println!();

    // 2. Map and fleet.
    let grid = parse_map(MAP).context("parsing built-in map")?;
    let vehicles = load_roster_reader(Cursor::new(ROSTER_CSV), &grid)
        .context("loading built-in roster")?;
    println!("Map: {}x{}  |  Vehicles: {}", grid.width(), grid.height(), vehicles.len());

    // 3. Sim.
    let mut sim = SimBuilder::new(config, grid).vehicles(vehicles).build()?;

    // 4. Output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = CountingObserver {
        inner:         SimOutputObserver::new(writer),
        summary_rows:  0,
        snapshot_rows: 0,
        peak_dead:     0,
    };

    // 5. Run.
    let t0 = Instant::now();
    let summary = sim.run(&mut obs);
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  moves: {}  blocked: {}", summary.moved, summary.blocked);
    println!(
        "  deaths: {}  revivals: {}  peak dead at a snapshot: {}",
        summary.deaths, summary.revivals, obs.peak_dead
    );
    println!("  vehicle_snapshots.csv : {} rows", obs.snapshot_rows);
    println!("  tick_summaries.csv    : {} rows", obs.summary_rows);
    println!();

    // 6. Final positions.
    println!("{:<6} {:<12} {:<10} {:<7} {:<6}", "Id", "Kind", "Cell", "Facing", "State");
    println!("{}", "-".repeat(45));
    for v in sim.vehicles() {
        let state = if v.is_alive() {
            "alive".to_string()
        } else {
            format!("dead {}", v.respawn_countdown())
        };
        println!(
            "{:<6} {:<12} {:<10} {:<7} {:<6}",
            v.id().0,
            v.kind().as_str(),
            v.cell().to_string(),
            v.direction().letter(),
            state
        );
    }
    println!();
    print!("{}", render(&sim.grid, sim.vehicles()));

    Ok(())
}

fn load_config(path: &Path) -> Result<SimConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: SimConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    tracing::info!(path = %path.display(), "config loaded");
    Ok(config)
}

/// The map with each live vehicle drawn as the capitalised first letter of
/// its kind.
fn render(grid: &CityGrid, vehicles: &[Vehicle]) -> String {
    let mut rows = vec![vec![' '; grid.width() as usize]; grid.height() as usize];
    for (cell, terrain) in grid.cells() {
        rows[cell.y as usize][cell.x as usize] = match terrain {
            Terrain::Wall => '#',
            Terrain::Grass | Terrain::Trail => ' ',
            Terrain::Street | Terrain::Light | Terrain::Crosswalk => '.',
        };
    }
    for v in vehicles.iter().filter(|v| v.is_alive()) {
        let marker = v.kind().as_str().chars().next().unwrap_or('?').to_ascii_uppercase();
        rows[v.cell().y as usize][v.cell().x as usize] = marker;
    }
    rows.into_iter().map(|r| r.into_iter().collect::<String>() + "\n").collect()
}
