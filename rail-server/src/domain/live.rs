//! Live station board entries.

use serde::Serialize;

/// One row of a station's live board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiveEntry {
    pub train_no: String,
    pub train_name: String,
    pub source_stn_name: String,
    pub dstn_stn_name: String,

    /// Scheduled time at this station, `"HH:MM"`, or `"--"` when the board
    /// shows none.
    pub time_at: String,

    /// Whatever the board prints after the time (platform, delay).
    pub detail: String,
}
