//! Recorded upstream responses, for development and tests.
//!
//! Serves payloads from memory instead of the network, and records every
//! request made so tests can check which upstream calls happened.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use tracing::debug;

use crate::domain::{StationCode, TrainNumber};

use super::UpstreamSource;
use super::error::UpstreamError;

/// Upstream stand-in that serves recorded payloads.
///
/// Each request maps to a key: `train-{train_no}`, `between-{from}-{to}`,
/// `route-{train_id}` or `live-{station}`. Requests without a recorded
/// payload fail with [`UpstreamError::NotRecorded`], which behaves like a
/// transport failure.
#[derive(Debug, Default)]
pub struct MockUpstream {
    responses: HashMap<String, String>,
    calls: Mutex<Vec<String>>,
}

impl MockUpstream {
    /// Create an empty mock; every request fails until payloads are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load payloads from a directory.
    ///
    /// Each regular file is one payload, keyed by its file stem (e.g.
    /// `train-12951.txt`, `live-NDLS.html`).
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, UpstreamError> {
        let mut mock = Self::new();

        for entry in std::fs::read_dir(dir.as_ref())? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            let Some(key) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            let body = std::fs::read_to_string(&path)?;
            mock.responses.insert(key.to_string(), body);
        }

        debug!(count = mock.responses.len(), dir = %dir.as_ref().display(), "loaded recorded responses");
        Ok(mock)
    }

    /// Record the train-info payload for a train number.
    pub fn with_train(self, train_no: &str, body: impl Into<String>) -> Self {
        self.with(format!("train-{train_no}"), body)
    }

    /// Record the station-pair payload for a from/to pair.
    pub fn with_between(self, from: &str, to: &str, body: impl Into<String>) -> Self {
        self.with(format!("between-{from}-{to}"), body)
    }

    /// Record the route payload for an internal train id.
    pub fn with_route(self, train_id: &str, body: impl Into<String>) -> Self {
        self.with(format!("route-{train_id}"), body)
    }

    /// Record the live board page for a station.
    pub fn with_live_board(self, station: &str, body: impl Into<String>) -> Self {
        self.with(format!("live-{station}"), body)
    }

    fn with(mut self, key: String, body: impl Into<String>) -> Self {
        self.responses.insert(key, body.into());
        self
    }

    /// Keys of all requests made so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Number of requests made so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or_default()
    }

    fn respond(&self, key: String) -> Result<String, UpstreamError> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(key.clone());
        }
        self.responses
            .get(&key)
            .cloned()
            .ok_or(UpstreamError::NotRecorded(key))
    }
}

impl UpstreamSource for MockUpstream {
    async fn fetch_train(&self, train_no: &TrainNumber) -> Result<String, UpstreamError> {
        self.respond(format!("train-{train_no}"))
    }

    async fn fetch_between(
        &self,
        from: &StationCode,
        to: &StationCode,
    ) -> Result<String, UpstreamError> {
        self.respond(format!("between-{from}-{to}"))
    }

    async fn fetch_route(&self, train_id: &str) -> Result<String, UpstreamError> {
        self.respond(format!("route-{train_id}"))
    }

    async fn fetch_live_board(&self, station: &StationCode) -> Result<String, UpstreamError> {
        self.respond(format!("live-{station}"))
    }
}
