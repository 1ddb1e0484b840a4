//! Domain types for the rail data service.
//!
//! Identifiers and dates validate at construction, so handlers reject bad
//! input before any upstream request is made. Records produced by the
//! parsers are plain data owned by a single request.

mod date;
mod live;
mod running_days;
mod station;
mod stop;
mod train;
mod train_number;

pub use date::{InvalidDate, TravelDate, weekday_index};
pub use live::LiveEntry;
pub use running_days::{InvalidRunningDays, RunningDays};
pub use station::{InvalidStationCode, StationCode};
pub use stop::{NO_TIME, Stop, TrainRoute};
pub use train::Train;
pub use train_number::{InvalidTrainNumber, TrainNumber};
