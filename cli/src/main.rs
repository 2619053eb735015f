#[macro_use]
extern crate log;

use anyhow::Result;
use structopt::StructOpt;

use model::{Dashboard, Model};

/// Summarize Bluebikes station traffic, optionally near a time of day, and
/// write the per-station markers a map layer consumes.
#[derive(StructOpt)]
struct Args {
    /// The path to the station information JSON feed
    #[structopt(long)]
    stations: String,
    /// The path to a trips CSV file
    #[structopt(long)]
    trips: String,
    /// Minute of day (0-1439) to filter near, or -1 for all trips
    #[structopt(long, default_value = "-1")]
    minute: i32,
    /// Write the stations as a GeoJSON FeatureCollection here
    #[structopt(long)]
    out_geojson: Option<String>,
    /// Write a per-station summary CSV here
    #[structopt(long)]
    out_csv: Option<String>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::from_args();

    let model = Model::load(&args.stations, &args.trips)?;
    let mut dashboard = Dashboard::new(model);
    dashboard.set_control(args.minute)?;

    let snapshot = dashboard.snapshot();
    info!(
        "{} stations, busiest has {} trips under {:?}",
        snapshot.stations.len(),
        snapshot.stations.iter().map(|s| s.total).max().unwrap_or(0),
        snapshot.filter
    );

    if let Some(path) = &args.out_geojson {
        fs_err::write(path, dashboard.export_geojson().to_string())?;
        info!("Wrote {path}");
    }
    if let Some(path) = &args.out_csv {
        fs_err::write(path, dashboard.export_to_csv()?)?;
        info!("Wrote {path}");
    }
    Ok(())
}
