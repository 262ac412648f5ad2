//! Room box estimation from a scan file.
//!
//! Usage:
//! ```text
//! cargo run --example estimate -- map.csv          # random sampling
//! cargo run --example estimate -- map.csv 42       # seeded, reproducible
//! ```

use rand::rngs::StdRng;
use rand::SeedableRng;
use roombox::io::{load_ordered, StartPolicy};
use roombox::operations::{EstimateRoom, EstimatorParams};

fn main() -> roombox::Result<()> {
    // Default: WARN for everything, INFO for roombox.
    // Override with RUST_LOG env var (e.g. RUST_LOG=roombox=trace).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("roombox=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: estimate <scan.csv> [seed]");
        std::process::exit(2);
    };
    let mut rng = match args.next().and_then(|s| s.parse::<u64>().ok()) {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let points = load_ordered(&path, StartPolicy::default())?;
    let room = EstimateRoom::new(EstimatorParams::default()).execute(&points, &mut rng)?;

    println!("segments: {:?}", room.path.bounds());
    println!(
        "floor z = {:.4} ({} inliers), ceiling z = {:.4} ({} inliers)",
        room.floor.z, room.floor.inliers, room.ceiling.z, room.ceiling.inliers
    );
    for (i, v) in room.bounding_box.vertices.iter().enumerate() {
        println!("{i}: ({:.4}, {:.4}, {:.4})", v.x, v.y, v.z);
    }
    Ok(())
}
