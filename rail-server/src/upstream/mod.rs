//! Clients for the upstream railway-information site (erail).
//!
//! The upstream has no documented API. It answers plain GET requests with
//! delimited text (train lookups, station pairs, routes) or HTML (live
//! station boards). Clients here only move bytes: they return the raw body
//! and leave all interpretation to [`crate::parse`].

mod client;
mod error;
mod mock;

use std::future::Future;

use crate::domain::{StationCode, TrainNumber};

pub use client::{ErailClient, UpstreamConfig};
pub use error::UpstreamError;
pub use mock::MockUpstream;

/// Source of raw upstream response bodies.
///
/// This abstraction allows the service to be tested against recorded or
/// synthetic payloads.
pub trait UpstreamSource: Send + Sync {
    /// Train-info lookup by public train number.
    fn fetch_train(
        &self,
        train_no: &TrainNumber,
    ) -> impl Future<Output = Result<String, UpstreamError>> + Send;

    /// Trains running between two stations.
    fn fetch_between(
        &self,
        from: &StationCode,
        to: &StationCode,
    ) -> impl Future<Output = Result<String, UpstreamError>> + Send;

    /// Route of a train, keyed by the upstream's internal train id.
    fn fetch_route(
        &self,
        train_id: &str,
    ) -> impl Future<Output = Result<String, UpstreamError>> + Send;

    /// Live board page for a station.
    fn fetch_live_board(
        &self,
        station: &StationCode,
    ) -> impl Future<Output = Result<String, UpstreamError>> + Send;
}
