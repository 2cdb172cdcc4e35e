//! Network loader backed by two static JSON files.
//!
//! `stations.json` lists the stations:
//!
//! ```json
//! [{ "id": 1, "shortName": "MX", "longName": "Montreux" }]
//! ```
//!
//! `distances.json` lists the lines, each with its segments in order:
//!
//! ```json
//! [{ "name": "MOB", "distances": [{ "parent": "MX", "child": "CGE", "distance": 0.65 }] }]
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::domain::{Distance, DomainError, StationId};
use crate::network::{Network, Segment, Station};

use super::NetworkLoader;
use super::error::LoaderError;

/// A station record from `stations.json`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationRecord {
    pub short_name: String,
    pub long_name: String,
}

/// A rail line from `distances.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct LineRecord {
    #[serde(default)]
    pub name: String,
    pub distances: Vec<SegmentRecord>,
}

/// One segment of a line, in kilometres.
#[derive(Debug, Clone, Deserialize)]
pub struct SegmentRecord {
    pub parent: String,
    pub child: String,
    pub distance: f64,
}

/// Loads the network from a stations file and a distances file.
#[derive(Debug, Clone)]
pub struct JsonNetworkLoader {
    stations_path: PathBuf,
    distances_path: PathBuf,
}

impl JsonNetworkLoader {
    /// Create a loader for the given files. Nothing is read until
    /// [`NetworkLoader::load`] is called.
    pub fn new(stations_path: impl Into<PathBuf>, distances_path: impl Into<PathBuf>) -> Self {
        Self {
            stations_path: stations_path.into(),
            distances_path: distances_path.into(),
        }
    }

    fn load_stations(&self, network: &mut Network) -> Result<(), LoaderError> {
        let records: Vec<StationRecord> = read_json(&self.stations_path)?;

        for record in records {
            let id = StationId::parse(&record.short_name)
                .map_err(|e| invalid_data(&self.stations_path, DomainError::from(e)))?;
            network.add_station(Station::new(id, record.long_name));
        }

        Ok(())
    }

    fn load_segments(&self, network: &mut Network) -> Result<(), LoaderError> {
        let lines: Vec<LineRecord> = read_json(&self.distances_path)?;

        for line in lines {
            for record in line.distances {
                let segment = parse_segment(&record).map_err(|e| LoaderError::InvalidData {
                    path: self.distances_path.clone(),
                    message: format!(
                        "line {:?}, segment {}-{}: {e}",
                        line.name, record.parent, record.child
                    ),
                })?;
                network.add_segment(segment);
            }
        }

        Ok(())
    }
}

impl NetworkLoader for JsonNetworkLoader {
    fn load(&self) -> Result<Network, LoaderError> {
        let mut network = Network::new();
        self.load_stations(&mut network)?;
        self.load_segments(&mut network)?;
        Ok(network)
    }
}

fn parse_segment(record: &SegmentRecord) -> Result<Segment, DomainError> {
    Ok(Segment::new(
        StationId::parse(&record.parent)?,
        StationId::parse(&record.child)?,
        Distance::from_kilometers(record.distance)?,
    ))
}

fn invalid_data(path: &Path, err: DomainError) -> LoaderError {
    LoaderError::InvalidData {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

/// Read and deserialize a JSON file.
fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, LoaderError> {
    if !path.exists() {
        return Err(LoaderError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = std::fs::read_to_string(path).map_err(|e| LoaderError::Io {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    serde_json::from_str(&contents).map_err(|e| LoaderError::Json {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::{DijkstraPathFinder, PathFinder};
    use tempfile::{TempDir, tempdir};

    fn id(s: &str) -> StationId {
        StationId::parse(s).unwrap()
    }

    fn km(v: f64) -> Distance {
        Distance::from_kilometers(v).unwrap()
    }

    /// Write both fixture files into a fresh temp dir.
    fn fixtures(stations: &str, distances: &str) -> (TempDir, JsonNetworkLoader) {
        let dir = tempdir().unwrap();
        let stations_path = dir.path().join("stations.json");
        let distances_path = dir.path().join("distances.json");
        std::fs::write(&stations_path, stations).unwrap();
        std::fs::write(&distances_path, distances).unwrap();
        let loader = JsonNetworkLoader::new(stations_path, distances_path);
        (dir, loader)
    }

    const THREE_STATIONS: &str = r#"[
        {"id": 1, "shortName": "MX", "longName": "Montreux"},
        {"id": 2, "shortName": "CGE", "longName": "Montreux-Collège"},
        {"id": 3, "shortName": "VUAR", "longName": "Vuarennes"}
    ]"#;

    const MOB_LINE: &str = r#"[
        {"name": "MOB", "distances": [
            {"parent": "MX", "child": "CGE", "distance": 0.65},
            {"parent": "CGE", "child": "VUAR", "distance": 0.35}
        ]}
    ]"#;

    #[test]
    fn loads_stations() {
        let (_dir, loader) = fixtures(
            r#"[{"id": 1, "shortName": "MX", "longName": "Montreux"},
                {"id": 2, "shortName": "ZW", "longName": "Zweisimmen"}]"#,
            "[]",
        );
        let network = loader.load().unwrap();

        assert_eq!(network.station_count(), 2);
        assert!(network.has_station(&id("MX")));
        assert!(network.has_station(&id("ZW")));
        assert_eq!(network.station(&id("MX")).unwrap().name(), "Montreux");
    }

    #[test]
    fn loads_segments() {
        let (_dir, loader) = fixtures(THREE_STATIONS, MOB_LINE);
        let network = loader.load().unwrap();

        assert_eq!(network.segment_count(), 2);
        assert_eq!(network.direct_distance(&id("MX"), &id("CGE")), Some(km(0.65)));
        assert_eq!(network.direct_distance(&id("VUAR"), &id("CGE")), Some(km(0.35)));
    }

    #[test]
    fn normalizes_lowercase_codes() {
        let (_dir, loader) = fixtures(
            r#"[{"shortName": "mx", "longName": "Montreux"},
                {"shortName": "cge", "longName": "Montreux-Collège"}]"#,
            r#"[{"name": "MOB", "distances": [{"parent": "mx", "child": "cge", "distance": 1}]}]"#,
        );
        let network = loader.load().unwrap();

        assert!(network.has_station(&id("MX")));
        assert_eq!(network.direct_distance(&id("MX"), &id("CGE")), Some(km(1.0)));
    }

    #[test]
    fn loaded_network_routes_end_to_end() {
        let (_dir, loader) = fixtures(THREE_STATIONS, MOB_LINE);
        let network = loader.load().unwrap();

        let path = DijkstraPathFinder::new()
            .find_path(&network, &id("MX"), &id("VUAR"))
            .unwrap();

        assert_eq!(path.station_ids(), vec!["MX", "CGE", "VUAR"]);
        assert_eq!(path.total_distance(), km(1.0));
        assert_eq!(path.segment_distances(), &[km(0.65), km(0.35)]);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let loader = JsonNetworkLoader::new(
            dir.path().join("missing.json"),
            dir.path().join("distances.json"),
        );

        assert!(matches!(loader.load(), Err(LoaderError::NotFound { .. })));
    }

    #[test]
    fn malformed_json_is_rejected() {
        let (_dir, loader) = fixtures("{not json", "[]");
        let err = loader.load().unwrap_err();

        assert!(matches!(err, LoaderError::Json { .. }));
        assert!(err.to_string().contains("stations.json"));
    }

    #[test]
    fn wrong_shape_is_rejected() {
        let (_dir, loader) = fixtures(THREE_STATIONS, r#"[{"name": "MOB"}]"#);
        assert!(matches!(loader.load(), Err(LoaderError::Json { .. })));
    }

    #[test]
    fn invalid_station_code_is_rejected() {
        let (_dir, loader) = fixtures(r#"[{"shortName": "", "longName": "Nowhere"}]"#, "[]");
        assert!(matches!(loader.load(), Err(LoaderError::InvalidData { .. })));
    }

    #[test]
    fn negative_distance_is_rejected() {
        let (_dir, loader) = fixtures(
            THREE_STATIONS,
            r#"[{"name": "MOB", "distances": [{"parent": "MX", "child": "CGE", "distance": -1}]}]"#,
        );
        let err = loader.load().unwrap_err();

        assert!(matches!(err, LoaderError::InvalidData { .. }));
        assert!(err.to_string().contains("MX-CGE"));
    }
}
