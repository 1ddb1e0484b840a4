//! Station-pair payloads (`getTrains.aspx?Station_From=&Station_To=`).

use tracing::{debug, warn};

use crate::domain::Train;

use super::error::ParseError;
use super::schema::{RECORD_MARKER, SECTION_DELIMITER, sentinel};
use super::train::{leading_message, map_train};

/// Message for a payload without the station-pair structure.
pub const UNRECOGNIZED_PAYLOAD: &str = "Unrecognized response from upstream";

/// Parse a station-pair payload into trains, in upstream order.
///
/// Each section holding a [`RECORD_MARKER`] carries one train record.
/// Records that don't map onto a [`Train`] are skipped and logged; they
/// never fail the whole payload. The upstream's "no direct trains" answer
/// is an empty list, not an error; so is a header with no records. A
/// payload with neither sections nor records (an HTML error page, say) is
/// a format error.
pub fn parse_between(raw: &str) -> Result<Vec<Train>, ParseError> {
    if raw.trim().is_empty() {
        return Err(ParseError::format("Empty response from upstream"));
    }

    let message = leading_message(raw);
    if message.starts_with(sentinel::TRY_AGAIN) {
        return Err(ParseError::Unavailable(sentinel::TRY_AGAIN.to_string()));
    }
    for not_found in [
        sentinel::FROM_STATION_NOT_FOUND,
        sentinel::TO_STATION_NOT_FOUND,
    ] {
        if message.starts_with(not_found) {
            return Err(ParseError::NotFound(not_found.to_string()));
        }
    }
    if message.starts_with(sentinel::NO_DIRECT_TRAINS) {
        debug!("upstream reports no direct trains");
        return Ok(Vec::new());
    }
    if !raw.contains(SECTION_DELIMITER) && !raw.contains(RECORD_MARKER) {
        return Err(ParseError::format(UNRECOGNIZED_PAYLOAD));
    }

    let mut trains = Vec::new();
    for (section_idx, section) in raw
        .split(SECTION_DELIMITER)
        .enumerate()
        .filter(|(_, s)| !s.is_empty())
    {
        let Some((_, record)) = section.split_once(RECORD_MARKER) else {
            continue;
        };
        match map_train(record) {
            Ok(train) => trains.push(train),
            Err(e) => warn!(section = section_idx, error = %e, "skipping malformed train record"),
        }
    }

    debug!(count = trains.len(), "parsed station-pair payload");
    Ok(trains)
}
