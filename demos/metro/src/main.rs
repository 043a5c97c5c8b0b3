//! metro — demo delivery network for the dln crates.
//!
//! Builds a twelve-location network (five hubs, seven customers), then walks
//! through the core features: distance vs travel-time pathfinding, greedy
//! delivery scheduling over two incremental passes, congestion-aware routing
//! against seeded rush-hour history, and the brute-force multi-stop route
//! optimizer.
//!
//! All table rendering lives here — the library crates only return data.
//! Run with `RUST_LOG=debug` to see assignment and drop diagnostics.

use rustc_hash::FxHashMap;
use tracing_subscriber::EnvFilter;

use dln_core::{Location, LocationId, Road, Timestamp};
use dln_network::{CostMetric, LogisticsNetwork, NetworkResult};
use dln_schedule::{Delivery, DeliveryScheduler, Priority, Vehicle};
use dln_traffic::CongestionPredictor;

fn main() -> NetworkResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let network = build_network()?;
    display_network(&network);

    run_pathfinding(&network);
    run_scheduling(&network);
    run_adaptive_routing(&network);
    run_route_optimizer(&network)?;

    Ok(())
}

// ── Network construction ──────────────────────────────────────────────────────

fn build_network() -> NetworkResult<LogisticsNetwork> {
    let mut net = LogisticsNetwork::new();

    net.add_location(Location::hub("H1", "Central Hub"));
    net.add_location(Location::hub("H2", "North Hub"));
    net.add_location(Location::hub("H3", "South Hub"));
    net.add_location(Location::hub("H4", "East Hub"));
    net.add_location(Location::hub("H5", "West Hub"));

    net.add_location(Location::customer("C1", "Customer North"));
    net.add_location(Location::customer("C2", "Customer South"));
    net.add_location(Location::customer("C3", "Customer East"));
    net.add_location(Location::customer("C4", "Customer West"));
    net.add_location(Location::customer("C5", "Customer Central"));
    net.add_location(Location::customer("C6", "Customer Northeast"));
    net.add_location(Location::customer("C7", "Customer Southwest"));

    // Central connections.
    net.add_road(Road::new("R1", "H1", "C5", 30.0))?;
    net.add_road(Road::new("R2", "H1", "H2", 80.0))?;
    net.add_road(Road::new("R3", "H1", "H3", 75.0))?;
    net.add_road(Road::new("R4", "H1", "H4", 90.0))?;
    net.add_road(Road::new("R5", "H1", "H5", 85.0))?;

    // North area.
    net.add_road(Road::new("R6", "H2", "C1", 40.0))?;
    net.add_road(Road::new("R7", "H2", "C6", 35.0))?;
    net.add_road(Road::new("R8", "H2", "H4", 60.0))?;

    // South area.
    net.add_road(Road::new("R9", "H3", "C2", 40.0))?;
    net.add_road(Road::new("R10", "H3", "C7", 30.0))?;
    net.add_road(Road::new("R11", "H3", "H5", 58.0))?;

    // East area.
    net.add_road(Road::new("R12", "H4", "C3", 42.0))?;
    net.add_road(Road::new("R13", "H4", "C6", 33.0))?;

    // West area.
    net.add_road(Road::new("R14", "H5", "C4", 30.0))?;
    net.add_road(Road::new("R15", "H5", "C7", 35.0))?;

    // Cross connections.
    net.add_road(Road::new("R16", "C5", "C1", 70.0))?;
    net.add_road(Road::new("R17", "C5", "C3", 65.0))?;
    net.add_road(Road::new("R18", "C6", "C3", 28.0))?;
    net.add_road(Road::new("R19", "C7", "C4", 30.0))?;

    // Pre-congested alternatives.
    net.add_road(Road::new("R20", "H1", "H4", 75.0).with_congestion(2.0))?;
    net.add_road(Road::new("R21", "C5", "C2", 60.0).with_congestion(1.5))?;

    Ok(net)
}

fn display_network(net: &LogisticsNetwork) {
    println!("Initial network structure:");
    let mut ids: Vec<_> = net.location_ids().collect();
    ids.sort();
    for id in ids {
        let loc = net.location(id).expect("id came from the network");
        let kind = if loc.is_hub { "hub" } else { "customer" };
        println!("  {id} ({}, {kind})", loc.name);
        for road in net.connected_roads(id) {
            println!(
                "    -> {:<4} dist {:>5.1}  congestion {:>3.1}  speed {:>5.1}  time {:.2}h",
                road.destination.as_str(),
                road.distance,
                road.congestion,
                road.avg_speed,
                road.travel_time(),
            );
        }
    }
}

// ── Pathfinding ───────────────────────────────────────────────────────────────

fn run_pathfinding(net: &LogisticsNetwork) {
    println!("\n=== Pathfinding: H1 -> C6 ===");
    let start = LocationId::from("H1");
    let end = LocationId::from("C6");

    let shortest = net.find_path(&start, &end, CostMetric::Distance);
    let fastest = net.find_path(&start, &end, CostMetric::TravelTime);
    println!(
        "  shortest (distance): {}  ({:.1} km)",
        render_path(&shortest),
        net.path_distance(&shortest),
    );
    println!(
        "  fastest (time):      {}  ({:.2} h)",
        render_path(&fastest),
        net.path_travel_time(&fastest),
    );
}

fn render_path(path: &[LocationId]) -> String {
    if path.is_empty() {
        return "(no path)".to_string();
    }
    path.iter()
        .map(LocationId::as_str)
        .collect::<Vec<_>>()
        .join(" -> ")
}

// ── Scheduling ────────────────────────────────────────────────────────────────

fn run_scheduling(net: &LogisticsNetwork) {
    println!("\n=== Delivery scheduling ===");
    let now = Timestamp::now();
    let mut scheduler = DeliveryScheduler::new();

    scheduler.add_vehicle(Vehicle::new("V1", 15.0, "H1"));
    scheduler.add_vehicle(Vehicle::new("V2", 20.0, "H2"));
    scheduler.add_vehicle(Vehicle::new("V3", 10.0, "H3"));

    scheduler.add_delivery(Delivery::new("D1", "C1", 10.0, now.plus_hours(2), 1.5, Priority::High));
    scheduler.add_delivery(Delivery::new("D2", "C4", 7.0, now.plus_hours(10), 2.0, Priority::Medium));
    scheduler.add_delivery(Delivery::new("D3", "C7", 10.0, now.plus_hours(15), 1.0, Priority::Low));
    scheduler.add_delivery(Delivery::new("D4", "C2", 6.0, now.plus_hours(2), 1.0, Priority::High));

    let report = scheduler.schedule_deliveries(now);
    println!("-- first pass: {} assigned, {} dropped", report.assigned.len(), report.dropped.len());
    display_schedule(net, &scheduler);

    // Second pass continues from the mutated fleet state.
    scheduler.add_delivery(Delivery::new("D5", "C3", 5.0, now.plus_hours(9), 1.0, Priority::Low));
    scheduler.add_delivery(Delivery::new("D6", "C6", 6.0, now.plus_hours(4), 1.0, Priority::High));

    let report = scheduler.schedule_deliveries(now);
    println!("-- second pass: {} assigned, {} dropped", report.assigned.len(), report.dropped.len());
    display_schedule(net, &scheduler);
}

fn display_schedule(net: &LogisticsNetwork, scheduler: &DeliveryScheduler) {
    let mut vehicle_ids: Vec<_> = scheduler.schedule().keys().collect();
    vehicle_ids.sort();

    for vehicle_id in vehicle_ids {
        let vehicle = scheduler.vehicle(vehicle_id).expect("row implies vehicle");
        println!(
            "  vehicle {} (load {:.1}/{:.1}, available: {})",
            vehicle_id,
            vehicle.current_load(),
            vehicle.capacity,
            vehicle.is_available(),
        );

        let deliveries = &scheduler.schedule()[vehicle_id];
        if deliveries.is_empty() {
            println!("    no deliveries assigned");
            continue;
        }

        let mut at = vehicle.location.clone();
        for d in deliveries {
            let route = net.find_path(&at, &d.destination, CostMetric::TravelTime);
            println!(
                "    {} -> {:<3} load {:>4.1}  {:<6}  route {} ({:.2}h)",
                d.id,
                d.destination.as_str(),
                d.load,
                d.priority.to_string(),
                render_path(&route),
                net.path_travel_time(&route),
            );
            at = d.destination.clone();
        }
    }
}

// ── Adaptive routing ──────────────────────────────────────────────────────────

fn run_adaptive_routing(net: &LogisticsNetwork) {
    println!("\n=== Adaptive routing: H1 -> C6 ===");
    let mut predictor = CongestionPredictor::new();

    // Seed a week of rush-hour history on the northern corridor.
    for day in 0..7 {
        let morning = Timestamp(day * 86_400 + 8 * 3_600);
        predictor.history_mut().record(&"R2".into(), morning, 2.5);
        predictor.history_mut().record(&"R7".into(), morning, 2.0);
    }

    let start = LocationId::from("H1");
    let end = LocationId::from("C6");
    for hour in [6, 8, 14] {
        let t = Timestamp(hour * 3_600);
        let route = net.find_adaptive_route(&predictor, &start, &end, t);
        println!("  {hour:02}:00  {}", render_path(&route));
    }
}

// ── Route optimizer ───────────────────────────────────────────────────────────

fn run_route_optimizer(net: &LogisticsNetwork) -> NetworkResult<()> {
    println!("\n=== Route optimizer: H3 over C1, C4, C7 ===");

    let loads: FxHashMap<LocationId, f64> = [
        (LocationId::from("C1"), 5.0),
        (LocationId::from("C4"), 8.0),
        (LocationId::from("C7"), 4.0),
    ]
    .into_iter()
    .collect();

    let deadlines: FxHashMap<LocationId, f64> = loads
        .keys()
        .map(|id| (id.clone(), 10.0))
        .collect();

    match net.plan_route(&LocationId::from("H3"), &loads, &deadlines, 30.0) {
        Ok(plan) => {
            println!("  optimal order: {}  ({:.2}h)", render_path(&plan.stops), plan.total_time);
            Ok(())
        }
        Err(err) => {
            println!("  {err}");
            Err(err)
        }
    }
}
