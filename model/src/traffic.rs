use std::collections::BTreeMap;

use bluebikes::{Station, StationID, Trip};

/// Per-station counts for one trip set. Always rebuilt from scratch; a pass
/// never edits the previous pass's output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StationTraffic {
    pub station_id: StationID,
    pub departures: usize,
    pub arrivals: usize,
    pub total: usize,
}

/// Counts how many trips leave from and arrive at each station. Output is in
/// station order. Trips referencing ids outside `stations` count towards
/// nothing.
pub fn aggregate<'a>(
    stations: &[Station],
    trips: impl IntoIterator<Item = &'a Trip>,
) -> Vec<StationTraffic> {
    let mut departures_per_station: BTreeMap<&StationID, usize> = BTreeMap::new();
    let mut arrivals_per_station: BTreeMap<&StationID, usize> = BTreeMap::new();
    for trip in trips {
        *departures_per_station
            .entry(&trip.start_station)
            .or_insert(0) += 1;
        *arrivals_per_station.entry(&trip.end_station).or_insert(0) += 1;
    }

    stations
        .iter()
        .map(|station| {
            let departures = departures_per_station
                .get(&station.station_id)
                .copied()
                .unwrap_or(0);
            let arrivals = arrivals_per_station
                .get(&station.station_id)
                .copied()
                .unwrap_or(0);
            StationTraffic {
                station_id: station.station_id.clone(),
                departures,
                arrivals,
                total: departures + arrivals,
            }
        })
        .collect()
}
