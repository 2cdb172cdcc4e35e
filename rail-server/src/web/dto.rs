//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analytics::DistanceAggregate;
use crate::auth::{FieldErrors, User};
use crate::network::Station;

/// Request to compute and record a route.
///
/// Fields are optional so that missing ones can be reported together.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRouteRequest {
    #[serde(default)]
    pub from_station_id: Option<String>,
    #[serde(default)]
    pub to_station_id: Option<String>,
    #[serde(default)]
    pub analytic_code: Option<String>,
}

/// The required fields of a [`CreateRouteRequest`], all present and non-empty.
#[derive(Debug)]
pub struct RouteFields {
    pub from_station_id: String,
    pub to_station_id: String,
    pub analytic_code: String,
}

impl CreateRouteRequest {
    /// Names of the required fields that are missing or empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("fromStationId", &self.from_station_id),
            ("toStationId", &self.to_station_id),
            ("analyticCode", &self.analytic_code),
        ]
        .into_iter()
        .filter(|(_, value)| value.as_deref().is_none_or(str::is_empty))
        .map(|(name, _)| name)
        .collect()
    }

    /// Take the required fields, or the "Missing required fields" message.
    pub fn into_fields(self) -> Result<RouteFields, String> {
        let missing = self.missing_fields();
        match (self.from_station_id, self.to_station_id, self.analytic_code) {
            (Some(from_station_id), Some(to_station_id), Some(analytic_code))
                if missing.is_empty() =>
            {
                Ok(RouteFields {
                    from_station_id,
                    to_station_id,
                    analytic_code,
                })
            }
            _ => Err(format!("Missing required fields: {}", missing.join(", "))),
        }
    }
}

/// A computed and recorded route.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResponse {
    pub id: Uuid,
    pub from_station_id: String,
    pub to_station_id: String,
    pub analytic_code: String,
    pub distance_km: f64,
    /// Station ids from origin to destination
    pub path: Vec<String>,
    /// Station names, one per path entry
    pub station_names: Vec<String>,
    /// Segment lengths, one fewer than path entries
    pub segment_distances: Vec<f64>,
    /// RFC 3339 timestamp
    pub created_at: String,
}

/// A station in the station list.
#[derive(Debug, Serialize)]
pub struct StationResponse {
    pub id: String,
    pub name: String,
}

impl StationResponse {
    pub fn from_station(station: &Station) -> Self {
        Self {
            id: station.id().to_string(),
            name: station.name().to_string(),
        }
    }
}

/// Query parameters for distance statistics.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub group_by: Option<String>,
}

/// Distance statistics response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub from: Option<String>,
    pub to: Option<String>,
    pub group_by: &'static str,
    pub items: Vec<AggregateItem>,
}

/// One aggregated total.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateItem {
    pub analytic_code: String,
    pub total_distance_km: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period_end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

impl AggregateItem {
    pub fn from_aggregate(aggregate: &DistanceAggregate) -> Self {
        let format_date = |d: chrono::NaiveDate| d.format("%Y-%m-%d").to_string();
        Self {
            analytic_code: aggregate.analytic_code.to_string(),
            total_distance_km: aggregate.total_distance.kilometers(),
            period_start: aggregate.period_start.map(format_date),
            period_end: aggregate.period_end.map(format_date),
            group: aggregate.group.clone(),
        }
    }
}

/// Public view of a user.
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

impl UserSummary {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
        }
    }
}

/// Successful registration response.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
    pub user: UserSummary,
}

/// The authenticated user.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub roles: Vec<&'static str>,
}

impl MeResponse {
    pub fn from_user(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            roles: user.roles().iter().map(|r| r.as_str()).collect(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}

/// Per-field validation or conflict response.
#[derive(Debug, Serialize)]
pub struct FieldErrorResponse {
    pub errors: FieldErrors,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::Period;
    use crate::domain::{AnalyticCode, Distance, StationId};

    #[test]
    fn missing_fields_listed_in_order() {
        let req: CreateRouteRequest =
            serde_json::from_str(r#"{"toStationId": "", "analyticCode": "X"}"#).unwrap();
        assert_eq!(req.missing_fields(), vec!["fromStationId", "toStationId"]);
        assert_eq!(
            req.into_fields().unwrap_err(),
            "Missing required fields: fromStationId, toStationId"
        );
    }

    #[test]
    fn complete_request() {
        let req: CreateRouteRequest = serde_json::from_str(
            r#"{"fromStationId": "MX", "toStationId": "CGE", "analyticCode": "ANA-123"}"#,
        )
        .unwrap();
        let fields = req.into_fields().unwrap();
        assert_eq!(fields.from_station_id, "MX");
        assert_eq!(fields.analytic_code, "ANA-123");
    }

    #[test]
    fn aggregate_item_omits_absent_fields() {
        let aggregate = DistanceAggregate::new(
            AnalyticCode::parse("FREIGHT").unwrap(),
            Distance::from_kilometers(12.5).unwrap(),
            &Period::all(),
            None,
        );
        let json = serde_json::to_value(AggregateItem::from_aggregate(&aggregate)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"analyticCode": "FREIGHT", "totalDistanceKm": 12.5})
        );
    }

    #[test]
    fn aggregate_item_with_period_and_group() {
        let period = Period::parse(Some("2025-01-01"), Some("2025-01-31")).unwrap();
        let aggregate = DistanceAggregate::new(
            AnalyticCode::parse("FREIGHT").unwrap(),
            Distance::from_kilometers(1.0).unwrap(),
            &period,
            Some("2025-01".to_string()),
        );
        let json = serde_json::to_value(AggregateItem::from_aggregate(&aggregate)).unwrap();
        assert_eq!(json["periodStart"], "2025-01-01");
        assert_eq!(json["periodEnd"], "2025-01-31");
        assert_eq!(json["group"], "2025-01");
    }

    #[test]
    fn station_response() {
        let station = Station::new(StationId::parse("mx").unwrap(), "Montreux");
        let json = serde_json::to_value(StationResponse::from_station(&station)).unwrap();
        assert_eq!(json, serde_json::json!({"id": "MX", "name": "Montreux"}));
    }
}
