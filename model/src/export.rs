use anyhow::Result;
use geojson::{Feature, FeatureCollection, GeoJson, Geometry, JsonObject, Value};
use serde::Serialize;

use bluebikes::StationID;

use crate::scale::flow_balance;
use crate::Dashboard;

impl Dashboard {
    /// One Point feature per station, carrying the derived values the map
    /// layer styles markers with. Aggregation preserves station order, so the
    /// station list and the snapshot line up index-by-index.
    pub fn export_geojson(&self) -> GeoJson {
        let snapshot = self.snapshot();
        let mut features = Vec::new();
        for (station, traffic) in self.model().stations.iter().zip(&snapshot.stations) {
            let mut props = JsonObject::new();
            props.insert(
                "station_id".to_string(),
                traffic.station_id.as_str().into(),
            );
            props.insert("name".to_string(), station.name.clone().into());
            props.insert("departures".to_string(), traffic.departures.into());
            props.insert("arrivals".to_string(), traffic.arrivals.into());
            props.insert("total_traffic".to_string(), traffic.total.into());
            props.insert(
                "radius".to_string(),
                snapshot.radius.eval(traffic.total).into(),
            );
            props.insert(
                "flow_balance".to_string(),
                flow_balance(traffic.departures, traffic.total).into(),
            );

            features.push(Feature {
                bbox: None,
                geometry: Some(Geometry::new(Value::Point(vec![station.lon, station.lat]))),
                id: None,
                properties: Some(props),
                foreign_members: None,
            });
        }
        GeoJson::FeatureCollection(FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        })
    }

    pub fn export_to_csv(&self) -> Result<String> {
        let snapshot = self.snapshot();
        let mut out = Vec::new();
        {
            let mut writer = csv::Writer::from_writer(&mut out);
            for (station, traffic) in self.model().stations.iter().zip(&snapshot.stations) {
                writer.serialize(ExportStationRow {
                    station_id: traffic.station_id.clone(),
                    name: station.name.clone(),
                    lon: station.lon,
                    lat: station.lat,
                    departures: traffic.departures,
                    arrivals: traffic.arrivals,
                    total_traffic: traffic.total,
                    radius: snapshot.radius.eval(traffic.total),
                    flow_balance: flow_balance(traffic.departures, traffic.total),
                })?;
            }
            writer.flush()?;
        }
        let out = String::from_utf8(out)?;
        Ok(out)
    }
}

#[derive(Serialize)]
struct ExportStationRow {
    station_id: StationID,
    name: String,
    lon: f64,
    lat: f64,
    departures: usize,
    arrivals: usize,
    total_traffic: usize,
    radius: f64,
    flow_balance: f64,
}
