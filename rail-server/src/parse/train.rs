//! Train-info payloads (`getTrains.aspx?TrainNo=`).

use crate::domain::{RunningDays, Train};

use super::error::ParseError;
use super::fields::Fields;
use super::schema::{FIELD_SEPARATOR, RECORD_MARKER, SECTION_DELIMITER, TrainField, sentinel};

/// Message for a payload that carries no train record at all.
pub const INVALID_TRAIN_NUMBER: &str = "Invalid Train Number";

/// Message for the upstream's explicit "no such train" answer.
pub const NO_TRAIN_FOUND: &str = "No Train Found";

/// Parse a single-train payload.
///
/// The payload is split into sections on [`SECTION_DELIMITER`]; the train
/// record is the text after the first [`RECORD_MARKER`] up to the end of its
/// section.
///
/// # Examples
///
/// ```
/// use rail_server::parse::parse_train;
///
/// let raw = "~~~~~~~~^12951~MUMBAI RAJDHANI~NEW DELHI~NDLS~MUMBAI CENTRAL~MMCT\
///            ~NEW DELHI~NDLS~MUMBAI CENTRAL~MMCT~16.55~08.35~15.40~1111111~4512~~~~~~~~";
/// let train = parse_train(raw).unwrap();
/// assert_eq!(train.train_no, "12951");
/// assert_eq!(train.train_id, "4512");
/// assert_eq!(train.running_days.to_string(), "1111111");
///
/// assert!(parse_train("").is_err());
/// ```
pub fn parse_train(raw: &str) -> Result<Train, ParseError> {
    let message = leading_message(raw);
    if message.starts_with(sentinel::TRAIN_NOT_FOUND) {
        return Err(ParseError::NotFound(NO_TRAIN_FOUND.to_string()));
    }
    if message.starts_with(sentinel::TRY_AGAIN) {
        return Err(ParseError::Unavailable(sentinel::TRY_AGAIN.to_string()));
    }

    let record = first_record(raw).ok_or_else(|| ParseError::format(INVALID_TRAIN_NUMBER))?;
    map_train(record)
}

/// The text of the first section with field padding stripped, where the
/// upstream puts its sentinel messages.
pub(super) fn leading_message(raw: &str) -> &str {
    raw.trim_start()
        .trim_start_matches(FIELD_SEPARATOR)
        .split(SECTION_DELIMITER)
        .next()
        .unwrap_or("")
        .trim_matches(FIELD_SEPARATOR)
        .trim()
}

/// Record text following the first record marker, up to the end of its
/// section.
fn first_record(raw: &str) -> Option<&str> {
    raw.split(SECTION_DELIMITER)
        .find_map(|section| section.split_once(RECORD_MARKER).map(|(_, record)| record))
}

/// Map one record (the text after its marker) onto a [`Train`].
pub(super) fn map_train(record: &str) -> Result<Train, ParseError> {
    let fields = Fields::split_non_empty(strip_label(record), FIELD_SEPARATOR);

    let train_no = fields.get(TrainField::TrainNo.index()).trim();
    if !is_numeric(train_no) {
        return Err(ParseError::format(format!(
            "train record has no train number: {train_no:?}"
        )));
    }

    let required = |field: TrainField| -> Result<String, ParseError> {
        let value = fields.get(field.index()).trim();
        if value.is_empty() {
            return Err(ParseError::format(format!(
                "train record is missing {}",
                field.name()
            )));
        }
        Ok(value.to_string())
    };

    let optional =
        |field: TrainField| Some(fields.get(field.index()).trim()).filter(|v| !v.is_empty());

    let running_days = RunningDays::parse(fields.get(TrainField::RunningDays.index()).trim())
        .map_err(|e| ParseError::format(e.to_string()))?;

    Ok(Train {
        train_no: train_no.to_string(),
        train_name: required(TrainField::TrainName)?,
        train_id: required(TrainField::TrainId)?,
        source_stn_name: required(TrainField::SourceStnName)?,
        source_stn_code: required(TrainField::SourceStnCode)?,
        dstn_stn_name: required(TrainField::DstnStnName)?,
        dstn_stn_code: required(TrainField::DstnStnCode)?,
        from_stn_name: required(TrainField::FromStnName)?,
        from_stn_code: required(TrainField::FromStnCode)?,
        to_stn_name: required(TrainField::ToStnName)?,
        to_stn_code: required(TrainField::ToStnCode)?,
        from_time: required(TrainField::FromTime)?,
        to_time: required(TrainField::ToTime)?,
        travel_time: required(TrainField::TravelTime)?,
        running_days,
        train_type: optional(TrainField::TrainType).map(str::to_string),
        distance_km: optional(TrainField::DistanceKm).and_then(|d| d.parse().ok()),
    })
}

/// Drop a non-numeric label sitting between the marker and the train
/// number.
fn strip_label(record: &str) -> &str {
    let record = record.trim_start_matches(FIELD_SEPARATOR);
    let Some((label, rest)) = record.split_once(FIELD_SEPARATOR) else {
        return record;
    };
    let next = rest
        .trim_start_matches(FIELD_SEPARATOR)
        .split(FIELD_SEPARATOR)
        .next()
        .unwrap_or("");
    if !is_numeric(label.trim()) && is_numeric(next.trim()) {
        rest
    } else {
        record
    }
}

fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::fixtures::{TrainRecord, between_payload, train_payload};

    #[test]
    fn parse_well_formed_record() {
        let raw = train_payload(&TrainRecord::new("12345", "RouteName", "1010100"));
        let train = parse_train(&raw).unwrap();

        assert_eq!(train.train_no, "12345");
        assert_eq!(train.train_name, "RouteName");
        assert_eq!(train.train_id, "9912345");
        assert_eq!(train.source_stn_code, "NDLS");
        assert_eq!(train.dstn_stn_code, "BCT");
        assert_eq!(train.from_time, "10.30");
        assert_eq!(train.to_time, "18.45");
        assert_eq!(train.travel_time, "08.15");
        assert_eq!(train.running_days.to_string(), "1010100");
        assert_eq!(train.train_type.as_deref(), Some("SF"));
        assert_eq!(train.distance_km, Some(1384));
    }

    #[test]
    fn labelled_record() {
        let raw = "~~~~~~~~^Train1~12345~RouteName~NEW DELHI~NDLS~MUMBAI CENTRAL~BCT\
                   ~NEW DELHI~NDLS~MUMBAI CENTRAL~BCT~10.30~18.45~08.15~1111111~4512~~~~~~~~";
        let train = parse_train(raw).unwrap();

        assert_eq!(train.train_no, "12345");
        assert_eq!(train.train_name, "RouteName");
        assert_eq!(train.from_time, "10.30");
        assert_eq!(train.train_id, "4512");
        assert_eq!(train.running_days.to_string(), "1111111");
    }

    #[test]
    fn labelled_record_in_station_pair_payload() {
        let raw = between_payload(&[TrainRecord::new("12951", "RAJDHANI", "1111111")])
            .replacen('^', "^Train1~", 1);
        let trains = crate::parse::parse_between(&raw).unwrap();
        assert_eq!(trains.len(), 1);
        assert_eq!(trains[0].train_no, "12951");
    }

    #[test]
    fn non_numeric_train_number_fails() {
        let raw = "^SPECIAL~RouteName~NEW DELHI~NDLS~MUMBAI~BCT~NEW DELHI~NDLS~MUMBAI~BCT\
                   ~10.30~18.45~08.15~1111111~4512";
        assert_eq!(parse_train(raw).unwrap_err().kind(), "format");
    }

    #[test]
    fn strip_label_cases() {
        assert_eq!(strip_label("Train1~12345~Name"), "12345~Name");
        assert_eq!(strip_label("12345~Name~"), "12345~Name~");
        assert_eq!(strip_label("~~12345~Name"), "12345~Name");
        assert_eq!(strip_label("Label~Name~12345"), "Label~Name~12345");
        assert_eq!(strip_label("12345"), "12345");
    }

    #[test]
    fn from_time_kept_verbatim() {
        let mut record = TrainRecord::new("12345", "RouteName", "1111111");
        record.from_time = "10.30";
        let train = parse_train(&train_payload(&record)).unwrap();
        assert_eq!(train.from_time, "10.30");
    }

    #[test]
    fn empty_payload_is_invalid_train_number() {
        assert_eq!(
            parse_train(""),
            Err(ParseError::Format(INVALID_TRAIN_NUMBER.into()))
        );
    }

    #[test]
    fn payload_without_marker_is_format_error() {
        let err = parse_train("<html><body>Server Error</body></html>").unwrap_err();
        assert_eq!(err.kind(), "format");
    }

    #[test]
    fn not_found_sentinel() {
        let err = parse_train("~~~~~Train not found~~~~~~~~").unwrap_err();
        assert_eq!(err, ParseError::NotFound(NO_TRAIN_FOUND.into()));
    }

    #[test]
    fn try_again_sentinel() {
        let err = parse_train("~~~~~Please try again after some time.~~~~~~~~").unwrap_err();
        assert_eq!(err.kind(), "unavailable");
        assert_eq!(err.to_string(), sentinel::TRY_AGAIN);
    }

    #[test]
    fn short_running_days_padded() {
        let raw = train_payload(&TrainRecord::new("12345", "Weekly Exp", "001"));
        let train = parse_train(&raw).unwrap();
        assert_eq!(train.running_days.to_string(), "0010000");
    }

    #[test]
    fn bad_running_days_fail() {
        let raw = train_payload(&TrainRecord::new("12345", "Odd Exp", "1x11111"));
        assert_eq!(parse_train(&raw).unwrap_err().kind(), "format");
    }

    #[test]
    fn truncated_record_fails() {
        // Stops before running days and train id
        let raw = "^12345~SHORT EXP~NEW DELHI~NDLS~MUMBAI~BCT~NEW DELHI~NDLS~MUMBAI~BCT~10.30~18.45";
        let err = parse_train(raw).unwrap_err();
        assert_eq!(err.kind(), "format");
    }

    #[test]
    fn padding_fields_are_ignored() {
        let raw = "~~~~~~~~^12345~~PADDED EXP~~~NEW DELHI~NDLS~MUMBAI~BCT~NEW DELHI~NDLS\
                   ~MUMBAI~BCT~06.00~~20.00~14.00~0000011~777~~~~~~~~";
        let train = parse_train(raw).unwrap();
        assert_eq!(train.train_name, "PADDED EXP");
        assert_eq!(train.to_time, "20.00");
        assert_eq!(train.train_id, "777");
        assert_eq!(train.train_type, None);
        assert_eq!(train.distance_km, None);
    }

    #[test]
    fn record_ends_at_section_delimiter() {
        let raw = format!(
            "{}~~~~~~~~trailing~metadata~that~is~not~part~of~the~record",
            train_payload(&TrainRecord::new("12345", "RouteName", "1111111"))
        );
        let train = parse_train(&raw).unwrap();
        assert_eq!(train.distance_km, Some(1384));
    }
}
