//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::domain::{LiveEntry, StationCode, Train, TrainNumber, TravelDate};
use crate::parse::INVALID_TRAIN_NUMBER;
use crate::service::RailError;
use crate::upstream::UpstreamSource;

use super::dto::*;
use super::state::AppState;

/// Message when `getTrainOn` is called without a date.
const MISSING_DATE: &str = "Please Add Specific Date";

/// Create the application router.
pub fn create_router<S: UpstreamSource + 'static>(state: AppState<S>) -> Router {
    let api = Router::new()
        .route("/getTrain", get(get_train::<S>))
        .route("/betweenStations", get(between_stations::<S>))
        .route("/getTrainOn", get(trains_on_date::<S>))
        .route("/getRoute", get(get_route::<S>))
        .route("/stationLive", get(station_live::<S>));

    Router::new()
        .route("/health", get(health))
        .nest("/api/train", api)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Look up a single train.
async fn get_train<S: UpstreamSource>(
    State(state): State<AppState<S>>,
    Query(query): Query<TrainQuery>,
) -> Result<Json<Envelope<Train>>, RailError> {
    let train_no = train_number(&query.train_no)?;
    let train = state.rail.lookup_train(&train_no).await?;
    Ok(Json(Envelope::ok(train)))
}

/// All trains between two stations.
async fn between_stations<S: UpstreamSource>(
    State(state): State<AppState<S>>,
    Query(query): Query<StationPairQuery>,
) -> Result<Json<Envelope<Vec<Train>>>, RailError> {
    let from = station_code(&query.from, "from")?;
    let to = station_code(&query.to, "to")?;
    let trains = state.rail.trains_between(&from, &to).await?;
    Ok(Json(Envelope::ok(trains)))
}

/// Trains between two stations running on a given date.
async fn trains_on_date<S: UpstreamSource>(
    State(state): State<AppState<S>>,
    Query(query): Query<TrainsOnDateQuery>,
) -> Result<Json<Envelope<Vec<Train>>>, RailError> {
    let from = station_code(&query.from, "from")?;
    let to = station_code(&query.to, "to")?;
    let date = required(&query.date, MISSING_DATE)?;
    let date = TravelDate::parse(date).map_err(|e| RailError::InvalidInput(e.to_string()))?;

    let trains = state.rail.trains_on_date(&from, &to, &date).await?;
    Ok(Json(Envelope::ok(trains)))
}

/// A train's route.
async fn get_route<S: UpstreamSource>(
    State(state): State<AppState<S>>,
    Query(query): Query<TrainQuery>,
) -> Result<Json<RouteEnvelope>, RailError> {
    let train_no = train_number(&query.train_no)?;
    let route = state.rail.route(&train_no).await?;
    Ok(Json(RouteEnvelope::from(route)))
}

/// A station's live board.
async fn station_live<S: UpstreamSource>(
    State(state): State<AppState<S>>,
    Query(query): Query<StationQuery>,
) -> Result<Json<Envelope<Vec<LiveEntry>>>, RailError> {
    let station = station_code(&query.code, "station")?;
    let entries = state.rail.live_board(&station).await?;
    Ok(Json(Envelope::ok(entries)))
}

/// A present, non-blank query parameter.
fn required<'a>(value: &'a Option<String>, message: &str) -> Result<&'a str, RailError> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| RailError::InvalidInput(message.to_string()))
}

fn train_number(value: &Option<String>) -> Result<TrainNumber, RailError> {
    let raw = required(value, "Please provide a train number")?;
    TrainNumber::parse(raw).map_err(|_| RailError::InvalidInput(INVALID_TRAIN_NUMBER.to_string()))
}

fn station_code(value: &Option<String>, which: &str) -> Result<StationCode, RailError> {
    let raw = required(value, &format!("Please provide a {which} station code"))?;
    StationCode::parse_normalized(raw)
        .map_err(|e| RailError::InvalidInput(format!("Invalid {which} station: {e}")))
}

impl IntoResponse for RailError {
    fn into_response(self) -> Response {
        let status = match &self {
            // Upstream answered; the client gets a normal failure body
            RailError::Format(_) | RailError::NotFound(_) => StatusCode::OK,
            RailError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            RailError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            RailError::Transport(e) => {
                error!(error = %e, "upstream transport failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(Envelope::failure(self.to_string()))).into_response()
    }
}
