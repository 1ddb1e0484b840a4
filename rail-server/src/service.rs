//! The client-facing rail operations.
//!
//! [`RailService`] pairs an [`UpstreamSource`] with the parsers: one fetch
//! per operation, except [`RailService::route`], which needs the train's
//! internal id from a first lookup before it can ask for the route.

use tracing::{info, warn};

use crate::domain::{LiveEntry, StationCode, Train, TrainNumber, TrainRoute, TravelDate};
use crate::parse::{ParseError, parse_between, parse_live_board_str, parse_route, parse_train};
use crate::upstream::{UpstreamError, UpstreamSource};

/// Longest raw payload excerpt written to the logs.
const MAX_LOGGED_SAMPLE: usize = 500;

/// Errors from a rail operation.
#[derive(Debug, thiserror::Error)]
pub enum RailError {
    /// The upstream could not be reached or answered with an error status
    #[error("{0}")]
    Transport(#[from] UpstreamError),

    /// The upstream answered with something we could not parse
    #[error("{0}")]
    Format(String),

    /// The upstream explicitly reported zero matches
    #[error("{0}")]
    NotFound(String),

    /// The upstream asked us to come back later
    #[error("{0}")]
    Unavailable(String),

    /// The caller's request was missing or had a bad parameter
    #[error("{0}")]
    InvalidInput(String),
}

impl RailError {
    /// Classify a parse failure, logging it with a sample of the payload.
    fn from_parse(err: ParseError, operation: &'static str, raw: &str) -> Self {
        let kind = err.kind();
        match err {
            ParseError::Format(message) => {
                let sample: String = raw.chars().take(MAX_LOGGED_SAMPLE).collect();
                warn!(operation, kind, %message, %sample, "unrecognized upstream payload");
                RailError::Format(message)
            }
            ParseError::NotFound(message) => {
                info!(operation, kind, %message, "upstream reported no match");
                RailError::NotFound(message)
            }
            ParseError::Unavailable(message) => {
                warn!(operation, kind, %message, "upstream unavailable");
                RailError::Unavailable(message)
            }
        }
    }
}

/// Steps of the two-call route lookup.
enum RouteLookup {
    AwaitingTrainInfo,
    AwaitingRoute(Train),
    Done(TrainRoute),
}

/// Rail operations over an upstream source.
///
/// Holds no per-request state; one instance serves all requests.
#[derive(Debug)]
pub struct RailService<S> {
    upstream: S,
}

impl<S: UpstreamSource> RailService<S> {
    pub fn new(upstream: S) -> Self {
        Self { upstream }
    }

    /// The underlying upstream source.
    pub fn upstream(&self) -> &S {
        &self.upstream
    }

    /// Look up one train by its public number.
    pub async fn lookup_train(&self, train_no: &TrainNumber) -> Result<Train, RailError> {
        let raw = self.upstream.fetch_train(train_no).await?;
        parse_train(&raw).map_err(|e| RailError::from_parse(e, "lookup_train", &raw))
    }

    /// All trains between two stations, in upstream order.
    pub async fn trains_between(
        &self,
        from: &StationCode,
        to: &StationCode,
    ) -> Result<Vec<Train>, RailError> {
        let raw = self.upstream.fetch_between(from, to).await?;
        parse_between(&raw).map_err(|e| RailError::from_parse(e, "trains_between", &raw))
    }

    /// Trains between two stations that run on the given date.
    pub async fn trains_on_date(
        &self,
        from: &StationCode,
        to: &StationCode,
        date: &TravelDate,
    ) -> Result<Vec<Train>, RailError> {
        let trains = self.trains_between(from, to).await?;
        Ok(trains.into_iter().filter(|t| t.runs_on(date)).collect())
    }

    /// A train's identity and full route.
    ///
    /// The route is keyed by the upstream's internal train id, so the train
    /// is looked up first. If that lookup fails its error is returned and
    /// the route is never requested.
    pub async fn route(&self, train_no: &TrainNumber) -> Result<TrainRoute, RailError> {
        let mut state = RouteLookup::AwaitingTrainInfo;
        loop {
            state = match state {
                RouteLookup::AwaitingTrainInfo => {
                    RouteLookup::AwaitingRoute(self.lookup_train(train_no).await?)
                }
                RouteLookup::AwaitingRoute(train) => {
                    let raw = self.upstream.fetch_route(&train.train_id).await?;
                    let stops = parse_route(&raw)
                        .map_err(|e| RailError::from_parse(e, "route", &raw))?;
                    RouteLookup::Done(TrainRoute {
                        train_no: train.train_no,
                        train_name: train.train_name,
                        stops,
                    })
                }
                RouteLookup::Done(route) => return Ok(route),
            };
        }
    }

    /// A station's live board.
    pub async fn live_board(&self, station: &StationCode) -> Result<Vec<LiveEntry>, RailError> {
        let raw = self.upstream.fetch_live_board(station).await?;
        parse_live_board_str(&raw).map_err(|e| RailError::from_parse(e, "live_board", &raw))
    }
}
