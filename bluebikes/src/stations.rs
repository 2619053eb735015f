use std::collections::BTreeSet;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// A station's `short_name` from the feed, the key trips reference.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StationID(String);

impl StationID {
    pub fn new<S: Into<String>>(x: S) -> Self {
        Self(x.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Station {
    pub station_id: StationID,
    pub name: String,
    pub lon: f64,
    pub lat: f64,
}

/// Parses the Bluebikes station information feed, shaped
/// `{"data": {"stations": [...]}}`.
pub fn load<R: std::io::Read>(reader: R) -> Result<Vec<Station>> {
    let feed: Feed = serde_json::from_reader(reader)?;

    let mut seen = BTreeSet::new();
    let mut stations = Vec::new();
    let mut skipped = 0;
    for rec in feed.data.stations {
        // The feed has a few virtual stations without one
        let short_name = match rec.short_name {
            Some(x) if !x.is_empty() => x,
            _ => {
                skipped += 1;
                continue;
            }
        };
        let station_id = StationID(short_name);
        if !seen.insert(station_id.clone()) {
            bail!("Duplicate station {:?}", station_id);
        }
        stations.push(Station {
            station_id,
            name: rec.name,
            lon: rec.lon,
            lat: rec.lat,
        });
    }
    if skipped > 0 {
        info!("Skipped {skipped} stations missing a short_name");
    }
    Ok(stations)
}

#[derive(Deserialize)]
struct Feed {
    data: FeedData,
}

#[derive(Deserialize)]
struct FeedData {
    stations: Vec<Record>,
}

#[derive(Deserialize)]
struct Record {
    short_name: Option<String>,
    name: String,
    lon: f64,
    lat: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_keeps_feed_order_and_skips_nameless() {
        let raw = r#"{"data": {"stations": [
            {"short_name": "A32000", "name": "Central Square", "lon": -71.10, "lat": 42.36},
            {"name": "Mobile Temporary", "lon": -71.05, "lat": 42.35},
            {"short_name": "B32001", "name": "Kendall T", "lon": -71.08, "lat": 42.36}
        ]}}"#;
        let stations = load(raw.as_bytes()).unwrap();
        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].station_id, StationID::new("A32000"));
        assert_eq!(stations[1].station_id, StationID::new("B32001"));
        assert_eq!(stations[1].name, "Kendall T");
    }

    #[test]
    fn load_rejects_duplicate_short_names() {
        let raw = r#"{"data": {"stations": [
            {"short_name": "A32000", "name": "One", "lon": -71.1, "lat": 42.3},
            {"short_name": "A32000", "name": "Two", "lon": -71.2, "lat": 42.4}
        ]}}"#;
        assert!(load(raw.as_bytes()).is_err());
    }
}
