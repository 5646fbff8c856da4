//! saigon — end-to-end demo of the greenroute traffic core.
//!
//! Loads an embedded District 1 road table and congestion profile, builds
//! the service, and runs every query for a Monday 08:00 departure.
//!
//! ```text
//! RUST_LOG=debug cargo run -p saigon -- [planner-config.json]
//! ```
//!
//! The optional JSON file overrides any subset of `PlannerConfig`.

mod fixture;

use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use log::info;

use gr_core::{GeoPoint, TimeSlot};
use gr_network::{load_flat_segments_reader, RoadNetworkBuilder};
use gr_planner::{AreaScan, Forecast, PlannerConfig, Resolution, Stop, TrafficService};
use gr_predict::{load_profile_reader, Predictor};

use fixture::{PROFILE_CSV, SEGMENTS_CSV};

// ── Places ────────────────────────────────────────────────────────────────────

const BEN_THANH:    GeoPoint = GeoPoint { lat: 10.7725, lon: 106.6980 };
const OPERA_HOUSE:  GeoPoint = GeoPoint { lat: 10.7768, lon: 106.7031 };
const NOTRE_DAME:   GeoPoint = GeoPoint { lat: 10.7798, lon: 106.6990 };
const POST_OFFICE:  GeoPoint = GeoPoint { lat: 10.7800, lon: 106.6999 };
const BACH_DANG:    GeoPoint = GeoPoint { lat: 10.7740, lon: 106.7065 };
const TAN_DINH:     GeoPoint = GeoPoint { lat: 10.7900, lon: 106.6910 };
const THAO_DIEN:    GeoPoint = GeoPoint { lat: 10.8030, lon: 106.7320 };

fn load_config(path: Option<&Path>) -> Result<PlannerConfig> {
    let Some(path) = path else {
        return Ok(PlannerConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading planner config {}", path.display()))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("parsing planner config {}", path.display()))?;
    info!("planner config loaded from {}", path.display());
    Ok(config)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("=== saigon — greenroute traffic core ===");
    println!();

    // 1. Configuration.
    let config_path = std::env::args().nth(1);
    let config = load_config(config_path.as_deref().map(Path::new))?;

    // 2. Classifier artifact: vocabulary + lookup model.
    let artifact = load_profile_reader(Cursor::new(PROFILE_CSV))?;
    println!(
        "Profile: {} slots over {} streets",
        artifact.model.len(),
        artifact.vocabulary.len()
    );

    // 3. Road network, restricted to streets the classifier knows.
    let dataset = load_flat_segments_reader(Cursor::new(SEGMENTS_CSV))?;
    let vocabulary = artifact.vocabulary.clone();
    let network = RoadNetworkBuilder::from_dataset(dataset)
        .retain_streets(move |name| vocabulary.contains(name))
        .build();
    let stats = network.stats();
    println!(
        "Network: {} segments, {} indexed nodes ({} duplicate, {} unknown-street rows dropped)",
        stats.segments_indexed, stats.nodes_indexed, stats.duplicates, stats.unknown_street
    );

    // 4. Service.
    let service = TrafficService::builder()
        .network(Arc::new(network))
        .predictor(Arc::new(Predictor::from_artifact(artifact)))
        .config(config)
        .build()?;
    let monday_8am = TimeSlot::new(8, 0)?;
    println!("Departure slot: {monday_8am}");
    println!();

    // 5. Street resolution.
    println!("{:<14} {:<22}", "Place", "Street");
    println!("{}", "-".repeat(36));
    for (name, pos) in [("Ben Thanh", BEN_THANH), ("Opera House", OPERA_HOUSE), ("Thao Dien", THAO_DIEN)] {
        let street = match service.resolve_street(pos)? {
            Resolution::Street(s) => s,
            Resolution::Unresolved(reason) => format!("({reason})"),
        };
        println!("{name:<14} {street:<22}");
    }
    println!();

    // 6. Timeline at the market.
    match service.forecast_timeline(BEN_THANH, TimeSlot::new(7, 0)?, None)? {
        Forecast::Timeline { street, entries } => {
            println!("Timeline for {street}:");
            for e in entries {
                println!("  {}  LOS {}  {}", e.clock_time.format("%H:%M"), e.los, e.severity);
            }
        }
        Forecast::NoData(reason) => println!("Timeline: no data ({reason})"),
    }
    println!();

    // 7. Clear roads around the cathedral.
    match service.scan_clear_segments(NOTRE_DAME, 0.6, monday_8am)? {
        AreaScan::Segments(clear) => {
            println!("Clear segments within 0.6 km of Notre Dame: {}", clear.len());
            for c in &clear {
                println!("  {} {:<16} LOS {}", c.segment, c.street, c.los);
            }
        }
        AreaScan::NoRoadsNearby => println!("No roads within 0.6 km of Notre Dame"),
    }
    println!();

    // 8. Green route.
    let route = service.plan_green_route(BEN_THANH, TAN_DINH, monday_8am)?;
    println!("Green route Ben Thanh -> Tan Dinh ({} hops, {:?}):", route.len(), route.stop);
    for hop in route.hops() {
        println!("  {}  {}", hop.pos, hop.street.as_deref().unwrap_or("(destination)"));
    }
    println!();

    // 9. Itinerary order.
    let stops = [
        Stop::new("Bach Dang wharf", BACH_DANG),
        Stop::new("Post office", POST_OFFICE),
        Stop::new("Opera House", OPERA_HOUSE),
        Stop::new("Tan Dinh church", TAN_DINH),
    ];
    let order = service.sequence_stops(BEN_THANH, &stops)?;
    println!("Visit order from Ben Thanh: {}", order.join(" -> "));
    println!();

    // 10. Modes and departure advice.
    println!("{:<12} {:>8} {:>8}", "Mode", "km", "min");
    println!("{}", "-".repeat(30));
    for m in service.rank_modes(BEN_THANH, THAO_DIEN, monday_8am)? {
        println!("{:<12} {:>8.1} {:>8.1}", m.mode.as_str(), m.distance_km, m.minutes);
    }
    println!();

    let advice = service.advise_departure(BEN_THANH, monday_8am)?;
    println!("Departure advice: {}", advice.message());
    println!("{}", serde_json::to_string_pretty(&advice)?);

    Ok(())
}
