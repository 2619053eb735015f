#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate log;

mod dashboard;
mod export;
mod scale;
mod time_filter;
mod traffic;

use anyhow::Result;

use bluebikes::{Station, Trip};

pub use self::dashboard::{Dashboard, TrafficSnapshot};
pub use self::scale::{flow_balance, SqrtScale};
pub use self::time_filter::TimeFilter;
pub use self::traffic::{aggregate, StationTraffic};

/// The loaded data: the station list and every trip, both read-only
/// snapshots once built.
pub struct Model {
    pub stations: Vec<Station>,
    pub trips: Vec<Trip>,
}

impl Model {
    pub fn load(stations_path: &str, trips_path: &str) -> Result<Self> {
        let stations = bluebikes::stations::load(std::fs::File::open(stations_path)?)?;
        let trips = bluebikes::trips::load(std::fs::File::open(trips_path)?)?;
        info!(
            "Loaded {} stations and {} trips",
            stations.len(),
            trips.len()
        );
        Ok(Self { stations, trips })
    }

    pub fn empty() -> Self {
        Self {
            stations: Vec::new(),
            trips: Vec::new(),
        }
    }
}
