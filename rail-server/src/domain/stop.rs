//! Route (timetable) entries.

use serde::Serialize;

/// Placeholder for an arrival or departure time that doesn't apply, such
/// as the arrival at the origin.
pub const NO_TIME: &str = "--";

/// One stop on a train's route, in origin-to-destination order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stop {
    pub source_stn_name: String,
    pub source_stn_code: String,

    /// `"HH:MM"`, or [`NO_TIME`] at the origin
    pub arrive: String,

    /// `"HH:MM"`, or [`NO_TIME`] at the destination
    pub depart: String,

    /// Days elapsed since leaving the origin, starting at 1.
    pub day: u32,

    /// Distance from the origin in km.
    pub distance: u32,

    /// Railway zone the station belongs to.
    pub zone: String,
}

/// A train's identity together with its full route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainRoute {
    pub train_no: String,
    pub train_name: String,
    pub stops: Vec<Stop>,
}
