//! Route payloads (`data.aspx?Action=TRAINROUTE`).

use tracing::{debug, warn};

use crate::domain::{NO_TIME, Stop};

use super::error::ParseError;
use super::fields::Fields;
use super::schema::{FIELD_SEPARATOR, RECORD_MARKER, STOP_FIELD_COUNT, StopField};

/// Message when no usable stop rows remain.
pub const ROUTE_NOT_AVAILABLE: &str = "Route not available";

/// Parse a route payload into stops, origin first.
///
/// Rows are the segments after each [`RECORD_MARKER`]; text before the
/// first marker is preamble. Rows that don't look like stops (too few
/// fields, non-numeric distance or day) are skipped, since the upstream
/// appends metadata rows. If nothing usable remains the payload is a
/// format error: a real train always has stops.
pub fn parse_route(raw: &str) -> Result<Vec<Stop>, ParseError> {
    let stops: Vec<Stop> = raw
        .split(RECORD_MARKER)
        .skip(1)
        .enumerate()
        .filter_map(|(row, text)| {
            let stop = map_stop(text);
            if stop.is_none() {
                debug!(row, "skipping non-stop route row");
            }
            stop
        })
        .collect();

    if stops.is_empty() {
        warn!("route payload held no stop rows");
        return Err(ParseError::format(ROUTE_NOT_AVAILABLE));
    }

    debug!(count = stops.len(), "parsed route payload");
    Ok(stops)
}

fn map_stop(row: &str) -> Option<Stop> {
    let fields = Fields::split_non_empty(row, FIELD_SEPARATOR);
    if fields.len() < STOP_FIELD_COUNT {
        return None;
    }

    let get = |field: StopField| fields.get(field.index()).trim();

    let code = get(StopField::StnCode);
    if code.is_empty() {
        return None;
    }

    let distance = parse_distance(get(StopField::Distance))?;
    let day = get(StopField::Day).parse::<u32>().ok().filter(|&d| d >= 1)?;

    Some(Stop {
        source_stn_name: get(StopField::StnName).to_string(),
        source_stn_code: code.to_string(),
        arrive: normalize_time(get(StopField::Arrive)),
        depart: normalize_time(get(StopField::Depart)),
        day,
        distance,
        zone: get(StopField::Zone).to_string(),
    })
}

/// Whole kilometres; fractional distances are rounded.
fn parse_distance(s: &str) -> Option<u32> {
    if let Ok(km) = s.parse::<u32>() {
        return Some(km);
    }
    let km = s.parse::<f64>().ok()?;
    (km.is_finite() && km >= 0.0).then(|| km.round() as u32)
}

/// `"HH:MM"` for clock times (the upstream sometimes writes `HH.MM`),
/// [`NO_TIME`] for anything else ("First", "Last", "-").
pub(super) fn normalize_time(s: &str) -> String {
    let bytes = s.as_bytes();
    let is_clock = bytes.len() == 5
        && (bytes[2] == b':' || bytes[2] == b'.')
        && [0, 1, 3, 4].iter().all(|&i| bytes[i].is_ascii_digit());

    if is_clock {
        format!("{}:{}", &s[..2], &s[3..])
    } else {
        NO_TIME.to_string()
    }
}
