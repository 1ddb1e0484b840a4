//! Declared layout of the upstream's text formats.
//!
//! Every delimiter, sentinel and field position the parsers rely on lives
//! here, so a change in the upstream format is fixed in one place.

/// Separates sections of a train payload. Records never contain a run
/// this long.
pub const SECTION_DELIMITER: &str = "~~~~~~~~";

/// Marks the start of a train record or a route row.
pub const RECORD_MARKER: char = '^';

/// Separates fields within a record.
pub const FIELD_SEPARATOR: char = '~';

/// Sentinel messages the upstream sends in place of data.
pub mod sentinel {
    pub const TRY_AGAIN: &str = "Please try again after some time.";
    pub const TRAIN_NOT_FOUND: &str = "Train not found";
    pub const FROM_STATION_NOT_FOUND: &str = "From station not found";
    pub const TO_STATION_NOT_FOUND: &str = "To station not found";
    pub const NO_DIRECT_TRAINS: &str = "No direct trains found";
}

/// Field positions within a train record (after the record marker, with
/// empty fields dropped).
///
/// The train number is all digits. Some payloads put a non-numeric label
/// between the marker and the number (`^Train1~12345~...`); positions are
/// counted after that label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrainField {
    TrainNo = 0,
    TrainName = 1,
    SourceStnName = 2,
    SourceStnCode = 3,
    DstnStnName = 4,
    DstnStnCode = 5,
    FromStnName = 6,
    FromStnCode = 7,
    ToStnName = 8,
    ToStnCode = 9,
    FromTime = 10,
    ToTime = 11,
    TravelTime = 12,
    RunningDays = 13,
    TrainId = 14,
    TrainType = 15,
    DistanceKm = 16,
}

impl TrainField {
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Field name as it appears in the normalized record.
    pub const fn name(self) -> &'static str {
        match self {
            TrainField::TrainNo => "train_no",
            TrainField::TrainName => "train_name",
            TrainField::SourceStnName => "source_stn_name",
            TrainField::SourceStnCode => "source_stn_code",
            TrainField::DstnStnName => "dstn_stn_name",
            TrainField::DstnStnCode => "dstn_stn_code",
            TrainField::FromStnName => "from_stn_name",
            TrainField::FromStnCode => "from_stn_code",
            TrainField::ToStnName => "to_stn_name",
            TrainField::ToStnCode => "to_stn_code",
            TrainField::FromTime => "from_time",
            TrainField::ToTime => "to_time",
            TrainField::TravelTime => "travel_time",
            TrainField::RunningDays => "running_days",
            TrainField::TrainId => "train_id",
            TrainField::TrainType => "train_type",
            TrainField::DistanceKm => "distance_km",
        }
    }
}

/// Field positions within a route row (after the record marker, with
/// empty fields dropped).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopField {
    Serial = 0,
    StnCode = 1,
    StnName = 2,
    Arrive = 3,
    Depart = 4,
    Halt = 5,
    Distance = 6,
    Day = 7,
    Platform = 8,
    Zone = 9,
}

impl StopField {
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Rows with fewer fields than this are not stops.
pub const STOP_FIELD_COUNT: usize = StopField::Zone.index() + 1;

/// Structure of the live station board page.
pub mod board {
    /// The table holding the board rows.
    pub const CONTAINER: &str = "table.DataTable";

    /// One per row: "<train no><train name>".
    pub const NAME: &str = ".name";

    /// Between origin and destination in the route line.
    pub const ROUTE_SEPARATOR: char = '→';

    pub const TRAIN_NO_LEN: usize = 5;
    pub const TIME_LEN: usize = 5;
}
