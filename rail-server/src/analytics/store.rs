//! Trip record storage.

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use uuid::Uuid;

use crate::domain::{AnalyticCode, Distance};

use super::aggregate::DistanceAggregate;
use super::period::{GroupBy, Period};
use super::record::RouteRecord;

/// Persists trip records and aggregates their distances.
pub trait RouteRecordStore: Send + Sync {
    /// Store a record, replacing any record with the same id.
    fn save(&self, record: RouteRecord);

    /// Sum distances per analytic code (and per time bucket when grouping)
    /// over the records created within `period`.
    ///
    /// Results are ordered by analytic code, then group key.
    fn aggregated_distances(&self, period: &Period, group_by: GroupBy) -> Vec<DistanceAggregate>;
}

/// Thread-safe in-memory record store.
///
/// Each instance owns its records; tests create a fresh store (or call
/// [`InMemoryRouteRecordStore::clear`]) to stay isolated.
#[derive(Debug, Default)]
pub struct InMemoryRouteRecordStore {
    records: RwLock<HashMap<Uuid, RouteRecord>>,
}

impl InMemoryRouteRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every record.
    pub fn clear(&self) {
        self.write().clear();
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, HashMap<Uuid, RouteRecord>> {
        self.records.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, HashMap<Uuid, RouteRecord>> {
        self.records.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl RouteRecordStore for InMemoryRouteRecordStore {
    fn save(&self, record: RouteRecord) {
        self.write().insert(record.id, record);
    }

    fn aggregated_distances(&self, period: &Period, group_by: GroupBy) -> Vec<DistanceAggregate> {
        let mut totals: BTreeMap<(AnalyticCode, Option<String>), Distance> = BTreeMap::new();

        for record in self.read().values() {
            if !period.contains(record.created_at) {
                continue;
            }
            let key = (record.analytic_code.clone(), group_by.key(record.created_at));
            let total = totals.entry(key).or_insert_with(Distance::zero);
            *total = *total + record.distance;
        }

        totals
            .into_iter()
            .map(|((code, group), total)| DistanceAggregate::new(code, total, period, group))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn code(s: &str) -> AnalyticCode {
        AnalyticCode::parse(s).unwrap()
    }

    fn km(v: f64) -> Distance {
        Distance::from_kilometers(v).unwrap()
    }

    fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 10, 30, 0).unwrap()
    }

    fn record(c: &str, d: f64, when: DateTime<Utc>) -> RouteRecord {
        RouteRecord::new(Uuid::new_v4(), code(c), km(d), when)
    }

    fn store_with_records() -> InMemoryRouteRecordStore {
        let store = InMemoryRouteRecordStore::new();
        store.save(record("PASSENGER", 10.0, at(2025, 1, 15)));
        store.save(record("PASSENGER", 5.5, at(2025, 2, 3)));
        store.save(record("FREIGHT", 20.0, at(2025, 2, 3)));
        store.save(record("PASSENGER", 1.0, at(2024, 12, 31)));
        store
    }

    #[test]
    fn empty_store_has_no_aggregates() {
        let store = InMemoryRouteRecordStore::new();
        assert!(store.is_empty());
        assert!(store.aggregated_distances(&Period::all(), GroupBy::None).is_empty());
    }

    #[test]
    fn totals_per_code() {
        let store = store_with_records();
        let aggregates = store.aggregated_distances(&Period::all(), GroupBy::None);

        assert_eq!(aggregates.len(), 2);
        assert_eq!(aggregates[0].analytic_code, code("FREIGHT"));
        assert_eq!(aggregates[0].total_distance, km(20.0));
        assert_eq!(aggregates[1].analytic_code, code("PASSENGER"));
        assert_eq!(aggregates[1].total_distance, km(16.5));
        assert!(aggregates.iter().all(|a| a.group.is_none()));
    }

    #[test]
    fn filters_by_period() {
        let store = store_with_records();
        let period = Period::parse(Some("2025-01-01"), Some("2025-12-31")).unwrap();
        let aggregates = store.aggregated_distances(&period, GroupBy::None);

        let passenger = aggregates
            .iter()
            .find(|a| a.analytic_code == code("PASSENGER"))
            .unwrap();
        assert_eq!(passenger.total_distance, km(15.5));
        assert_eq!(passenger.period_start, period.from());
        assert_eq!(passenger.period_end, period.to());
    }

    #[test]
    fn groups_by_month() {
        let store = store_with_records();
        let aggregates = store.aggregated_distances(&Period::all(), GroupBy::Month);

        let groups: Vec<(&str, Option<&str>, f64)> = aggregates
            .iter()
            .map(|a| {
                (
                    a.analytic_code.as_str(),
                    a.group.as_deref(),
                    a.total_distance.kilometers(),
                )
            })
            .collect();

        assert_eq!(
            groups,
            vec![
                ("FREIGHT", Some("2025-02"), 20.0),
                ("PASSENGER", Some("2024-12"), 1.0),
                ("PASSENGER", Some("2025-01"), 10.0),
                ("PASSENGER", Some("2025-02"), 5.5),
            ]
        );
    }

    #[test]
    fn groups_by_year() {
        let store = store_with_records();
        let aggregates = store.aggregated_distances(&Period::all(), GroupBy::Year);

        let passenger_2025 = aggregates
            .iter()
            .find(|a| a.analytic_code == code("PASSENGER") && a.group.as_deref() == Some("2025"))
            .unwrap();
        assert_eq!(passenger_2025.total_distance, km(15.5));
    }

    #[test]
    fn save_replaces_same_id() {
        let store = InMemoryRouteRecordStore::new();
        let id = Uuid::new_v4();
        store.save(RouteRecord::new(id, code("A"), km(1.0), at(2025, 1, 1)));
        store.save(RouteRecord::new(id, code("A"), km(2.0), at(2025, 1, 1)));

        assert_eq!(store.len(), 1);
    }

    #[test]
    fn clear_removes_everything() {
        let store = store_with_records();
        assert_eq!(store.len(), 4);
        store.clear();
        assert!(store.is_empty());
    }
}
