//! Normalized train descriptor.

use serde::Serialize;

use super::{RunningDays, TravelDate};

/// One train as described by the upstream's train-info and station-pair
/// records.
///
/// Times are kept as the upstream writes them (`"HH:MM"` or `"HH.MM"`).
/// `from_*`/`to_*` are the boarding and alighting stations of the query,
/// `source_*`/`dstn_*` the train's origin and terminus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Train {
    pub train_no: String,
    pub train_name: String,

    /// Upstream-internal identifier, needed to request the route.
    pub train_id: String,

    pub source_stn_name: String,
    pub source_stn_code: String,
    pub dstn_stn_name: String,
    pub dstn_stn_code: String,
    pub from_stn_name: String,
    pub from_stn_code: String,
    pub to_stn_name: String,
    pub to_stn_code: String,

    pub from_time: String,
    pub to_time: String,
    pub travel_time: String,

    pub running_days: RunningDays,

    /// Service class, e.g. "SF" or "RAJ", when the upstream supplies it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub train_type: Option<String>,

    /// Distance between the queried stations in km, when supplied.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km: Option<u32>,
}

impl Train {
    /// Whether the train runs on the given date.
    pub fn runs_on(&self, date: &TravelDate) -> bool {
        self.running_days.runs_on(date.weekday_index())
    }
}
