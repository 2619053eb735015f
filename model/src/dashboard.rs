use anyhow::Result;

use crate::scale::SqrtScale;
use crate::time_filter::TimeFilter;
use crate::traffic::{aggregate, StationTraffic};
use crate::Model;

/// One pass's output for the map layer: per-station counts, in station-list
/// order, and the radius scale calibrated to them. A snapshot is never edited
/// after it's published; the next pass builds a fresh one.
#[derive(Clone, Debug, PartialEq)]
pub struct TrafficSnapshot {
    pub filter: TimeFilter,
    pub stations: Vec<StationTraffic>,
    pub radius: SqrtScale,
}

/// Owns the loaded data and the current time filter, and recomputes the
/// snapshot on every filter change. There's no incremental bookkeeping; each
/// pass starts from the full trip set, so repeating a control value repeats
/// the output exactly.
pub struct Dashboard {
    model: Model,
    snapshot: TrafficSnapshot,
}

impl Dashboard {
    pub fn new(model: Model) -> Self {
        let snapshot = recompute(&model, TimeFilter::None);
        Self { model, snapshot }
    }

    pub fn model(&self) -> &Model {
        &self.model
    }

    pub fn snapshot(&self) -> &TrafficSnapshot {
        &self.snapshot
    }

    /// The single entry point for the time slider: -1 clears the filter,
    /// 0 to 1439 filters near that minute.
    pub fn set_control(&mut self, value: i32) -> Result<&TrafficSnapshot> {
        let filter = TimeFilter::from_control(value)?;
        Ok(self.set_filter(filter))
    }

    pub fn set_filter(&mut self, filter: TimeFilter) -> &TrafficSnapshot {
        self.snapshot = recompute(&self.model, filter);
        &self.snapshot
    }
}

fn recompute(model: &Model, filter: TimeFilter) -> TrafficSnapshot {
    let stations = aggregate(
        &model.stations,
        model.trips.iter().filter(|trip| filter.matches(trip)),
    );
    let max_traffic = stations.iter().map(|s| s.total).max().unwrap_or(0);
    let radius = match filter {
        TimeFilter::None => SqrtScale::unfiltered(max_traffic),
        TimeFilter::Near(_) => SqrtScale::filtered(max_traffic),
    };
    info!("Recomputed traffic with {filter:?}: busiest station has {max_traffic} trips");
    TrafficSnapshot {
        filter,
        stations,
        radius,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};

    use bluebikes::{Station, StationID, Trip};

    use super::*;

    fn at(minutes: u16) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(u32::from(minutes) / 60, u32::from(minutes) % 60, 0)
            .unwrap()
    }

    fn fixture() -> Model {
        let station = |id: &str| Station {
            station_id: StationID::new(id),
            name: id.to_string(),
            lon: -71.09,
            lat: 42.36,
        };
        let trip = |start: &str, end: &str, t1: u16, t2: u16| Trip {
            start_station: StationID::new(start),
            end_station: StationID::new(end),
            started_at: at(t1),
            ended_at: at(t2),
        };
        Model {
            stations: vec![station("A"), station("B")],
            trips: vec![
                trip("A", "B", 600, 620),
                trip("B", "A", 650, 700),
                trip("A", "A", 0, 30),
            ],
        }
    }

    #[test]
    fn initial_state_is_unfiltered() {
        let dashboard = Dashboard::new(fixture());
        let snapshot = dashboard.snapshot();
        assert_eq!(snapshot.filter, TimeFilter::None);
        assert_eq!(snapshot.stations[0].total, 4);
        assert_eq!(snapshot.stations[1].total, 2);
    }

    #[test]
    fn filtering_drops_out_of_window_trips() {
        let mut dashboard = Dashboard::new(fixture());
        let snapshot = dashboard.set_control(600).unwrap();
        // The midnight A->A trip is out of the window
        assert_eq!(snapshot.stations[0].departures, 1);
        assert_eq!(snapshot.stations[0].arrivals, 1);
        assert_eq!(snapshot.stations[1].total, 2);
    }

    #[test]
    fn same_control_value_twice_is_identical() {
        let mut dashboard = Dashboard::new(fixture());
        let first = dashboard.set_control(600).unwrap().clone();
        let second = dashboard.set_control(600).unwrap().clone();
        assert_eq!(first, second);
    }

    #[test]
    fn clearing_the_filter_restores_the_initial_snapshot() {
        let mut dashboard = Dashboard::new(fixture());
        let initial = dashboard.snapshot().clone();
        dashboard.set_control(300).unwrap();
        let cleared = dashboard.set_control(-1).unwrap();
        assert_eq!(*cleared, initial);
    }

    #[test]
    fn out_of_range_control_is_rejected() {
        let mut dashboard = Dashboard::new(fixture());
        assert!(dashboard.set_control(1440).is_err());
        // A failed decode leaves the previous snapshot in place
        assert_eq!(dashboard.snapshot().filter, TimeFilter::None);
    }

    #[test]
    fn empty_model_still_produces_a_snapshot() {
        let mut dashboard = Dashboard::new(Model::empty());
        let snapshot = dashboard.set_control(600).unwrap();
        assert!(snapshot.stations.is_empty());
        assert_eq!(snapshot.radius.eval(0), 3.0);
    }
}
