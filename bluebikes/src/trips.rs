use anyhow::Result;
use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::StationID;

/// One rental. The station ids aren't guaranteed to match the station feed;
/// nothing here resolves them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub start_station: StationID,
    pub end_station: StationID,
    pub started_at: NaiveDateTime,
    pub ended_at: NaiveDateTime,
}

impl Trip {
    /// Minutes since midnight of the start, in [0, 1439]. The date is ignored.
    pub fn start_minutes(&self) -> u16 {
        minutes_since_midnight(self.started_at)
    }

    /// Minutes since midnight of the end, in [0, 1439]. The date is ignored.
    pub fn end_minutes(&self) -> u16 {
        minutes_since_midnight(self.ended_at)
    }
}

fn minutes_since_midnight(t: NaiveDateTime) -> u16 {
    (t.hour() * 60 + t.minute()) as u16
}

pub fn load<R: std::io::Read>(reader: R) -> Result<Vec<Trip>> {
    let mut trips = Vec::new();
    for rec in csv::Reader::from_reader(reader).deserialize() {
        let rec: Record = rec?;
        trips.push(Trip {
            start_station: rec.start_station_id,
            end_station: rec.end_station_id,
            started_at: NaiveDateTime::parse_from_str(&rec.started_at, "%Y-%m-%d %H:%M:%S")?,
            ended_at: NaiveDateTime::parse_from_str(&rec.ended_at, "%Y-%m-%d %H:%M:%S")?,
        });
    }
    Ok(trips)
}

#[derive(Deserialize)]
struct Record {
    started_at: String,
    ended_at: String,
    start_station_id: StationID,
    end_station_id: StationID,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_parses_timestamps() {
        let raw = "started_at,ended_at,start_station_id,end_station_id\n\
                   2024-03-05 08:12:30,2024-03-05 08:40:02,A32000,B32001\n";
        let trips = load(raw.as_bytes()).unwrap();
        assert_eq!(trips.len(), 1);
        assert_eq!(trips[0].start_station, StationID::new("A32000"));
        assert_eq!(trips[0].start_minutes(), 8 * 60 + 12);
        assert_eq!(trips[0].end_minutes(), 8 * 60 + 40);
    }

    #[test]
    fn load_rejects_malformed_timestamp() {
        let raw = "started_at,ended_at,start_station_id,end_station_id\n\
                   03/05/2024 08:12,2024-03-05 08:40:02,A32000,B32001\n";
        assert!(load(raw.as_bytes()).is_err());
    }
}
