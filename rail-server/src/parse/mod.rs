//! Parsers for the upstream railway-information site.
//!
//! Each parser is a pure function from one raw response body to typed
//! records. Nothing here performs I/O or keeps state between calls, so the
//! parsers can run concurrently for any number of requests.
//!
//! The text formats are described once, in [`schema`].

mod between;
mod error;
mod fields;
mod live;
mod route;
pub mod schema;
mod train;

#[cfg(test)]
pub(crate) mod fixtures;

pub use between::{UNRECOGNIZED_PAYLOAD, parse_between};
pub use error::ParseError;
pub use fields::Fields;
pub use live::{BOARD_PARSE_ERROR, parse_live_board, parse_live_board_str};
pub use route::{ROUTE_NOT_AVAILABLE, parse_route};
pub use train::{INVALID_TRAIN_NUMBER, NO_TRAIN_FOUND, parse_train};
