//! two-ap-crossing — smallest roamsim demo.
//!
//! One station walks a straight line through the overlapping cells of two
//! access points and hands over once near the midpoint.  Scale comment:
//! swap the embedded scenario for a file with hundreds of stations and
//! random mobility to exercise the parallel tick phases.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;

use roam_assoc::HandoverEvent;
use roam_core::Tick;
use roam_output::{CsvWriter, SimOutputObserver};
use roam_scenario::Scenario;
use roam_sim::{SimBuilder, SimObserver};

// ── Scenario ──────────────────────────────────────────────────────────────────

// sta1 crosses from x=10 to x=90 over 20 s; ap1/ap2 sit at x=30 and x=70
// with 40 m cells, so coverage overlaps between x=30 and x=70.
const SCENARIO_TOML: &str = r#"
[sim]
total_ticks             = 21
seed                    = 42
snapshot_interval_ticks = 5

[propagation]
path_loss_exponent = 3.5
noise_floor_dbm    = -91.0

[handover]
margin_db   = 3.0
dwell_ticks = 2

[[station]]
name      = "sta1"
mac       = "00:00:00:00:00:01"
position  = [10.0, 50.0, 0.0]
waypoints = [{ start = 0, from = [10.0, 50.0, 0.0], stop = 20, to = [90.0, 50.0, 0.0] }]

[[ap]]
name         = "ap1"
ssid         = "roam-net"
channel      = 1
position     = [30.0, 50.0, 0.0]
tx_power_dbm = 20.0
range        = 40.0

[[ap]]
name         = "ap2"
ssid         = "roam-net"
channel      = 11
position     = [70.0, 50.0, 0.0]
tx_power_dbm = 20.0
range        = 40.0
"#;

// ── Observer wrapper to print handovers live ──────────────────────────────────

struct PrintingObserver<W: roam_output::OutputWriter> {
    inner:     SimOutputObserver<W>,
    handovers: Vec<HandoverEvent>,
}

impl<W: roam_output::OutputWriter> PrintingObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, handovers: Vec::new() }
    }
}

impl<W: roam_output::OutputWriter> SimObserver for PrintingObserver<W> {
    fn on_handover(&mut self, event: &HandoverEvent) {
        self.handovers.push(*event);
        self.inner.on_handover(event);
    }

    fn on_snapshot(
        &mut self,
        tick:      Tick,
        stations:  &roam_sim::StationStore,
        positions: &[roam_core::Point3],
        assoc:     &[roam_assoc::AssociationState],
    ) {
        self.inner.on_snapshot(tick, stations, positions, assoc);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== two-ap-crossing — roamsim ===");

    // 1. Load the embedded scenario.
    let scenario = Scenario::from_toml_str(SCENARIO_TOML)?;
    println!(
        "Scenario: {} stations, {} APs, {} ticks, seed {}",
        scenario.stations.len(),
        scenario.aps.len(),
        scenario.config.total_ticks,
        scenario.config.seed,
    );
    println!();

    // 2. Keep name lookups for the report before the scenario moves into
    //    the builder.
    let ap_names: Vec<String> = scenario.aps.iter().map(|ap| ap.name.clone()).collect();
    let station_names: Vec<String> = scenario.stations.iter().map(|s| s.name.clone()).collect();

    // 3. Build sim.
    let mut sim = SimBuilder::from_scenario(scenario).build()?;

    // 4. Set up CSV output.
    std::fs::create_dir_all("output/two-ap-crossing")?;
    let writer = CsvWriter::new(Path::new("output/two-ap-crossing"))?;
    let mut obs = PrintingObserver::new(SimOutputObserver::new(writer));

    // 5. Run.
    let t0 = Instant::now();
    sim.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 6. Handover report.
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!();
    println!("{:<6} {:<8} {:<8} {:<8} {:<10}", "Tick", "Station", "From", "To", "RSSI dBm");
    println!("{}", "-".repeat(44));
    let name_of = |ap: Option<roam_core::ApId>| match ap {
        Some(id) => ap_names[id.index()].clone(),
        None     => "-".to_string(),
    };
    for event in &obs.handovers {
        println!(
            "{:<6} {:<8} {:<8} {:<8} {:<10}",
            event.tick.0,
            station_names[event.station.index()],
            name_of(event.from),
            name_of(event.to),
            event
                .rssi_dbm
                .map(|r| format!("{r:.1}"))
                .unwrap_or_else(|| "-".to_string()),
        );
    }
    println!();
    println!("Output written to output/two-ap-crossing/");

    Ok(())
}
