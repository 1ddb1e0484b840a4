//! JSON envelopes and query parameters for the web API.
//!
//! Every response carries a `success` flag. On success `data` holds the
//! records; on failure `data` is a human-readable reason and nothing else
//! is present.

use serde::{Deserialize, Serialize};

use crate::domain::{Stop, TrainRoute};

/// Milliseconds since the Unix epoch, stamped on every response.
fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Standard response envelope.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub time_stamp: i64,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    /// A successful response carrying `data`.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            time_stamp: now_millis(),
            data,
        }
    }
}

impl Envelope<String> {
    /// A failed response with a reason.
    pub fn failure(reason: impl Into<String>) -> Self {
        Self {
            success: false,
            time_stamp: now_millis(),
            data: reason.into(),
        }
    }
}

/// Response for a route lookup: train identity alongside the stops.
#[derive(Debug, Serialize)]
pub struct RouteEnvelope {
    pub success: bool,
    pub time_stamp: i64,
    pub train_no: String,
    pub train_name: String,
    pub data: Vec<Stop>,
}

impl From<TrainRoute> for RouteEnvelope {
    fn from(route: TrainRoute) -> Self {
        Self {
            success: true,
            time_stamp: now_millis(),
            train_no: route.train_no,
            train_name: route.train_name,
            data: route.stops,
        }
    }
}

/// `?trainNo=`
#[derive(Debug, Deserialize)]
pub struct TrainQuery {
    #[serde(rename = "trainNo")]
    pub train_no: Option<String>,
}

/// `?from=&to=`
#[derive(Debug, Deserialize)]
pub struct StationPairQuery {
    pub from: Option<String>,
    pub to: Option<String>,
}

/// `?from=&to=&date=DD-MM-YYYY`
#[derive(Debug, Deserialize)]
pub struct TrainsOnDateQuery {
    pub from: Option<String>,
    pub to: Option<String>,
    pub date: Option<String>,
}

/// `?code=`
#[derive(Debug, Deserialize)]
pub struct StationQuery {
    pub code: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_shape() {
        let json = serde_json::to_value(Envelope::failure("No Train Found")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["data"], "No Train Found");
        assert!(json["time_stamp"].as_i64().unwrap() > 0);
        assert_eq!(json.as_object().unwrap().len(), 3);
    }

    #[test]
    fn ok_with_empty_list_is_array() {
        let json = serde_json::to_value(Envelope::ok(Vec::<Stop>::new())).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], serde_json::json!([]));
    }

    #[test]
    fn route_envelope_shape() {
        let route = TrainRoute {
            train_no: "12951".into(),
            train_name: "MUMBAI RAJDHANI".into(),
            stops: vec![],
        };
        let json = serde_json::to_value(RouteEnvelope::from(route)).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["train_no"], "12951");
        assert_eq!(json["train_name"], "MUMBAI RAJDHANI");
        assert!(json["data"].is_array());
    }
}
