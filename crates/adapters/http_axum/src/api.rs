//! JSON handlers for the status API.
//!
//! Both endpoints are infallible: the store cannot fail, so there is no
//! error mapping here. Transport-level failures are axum's problem.

use axum::Json;
use axum::extract::State;
use serde::Serialize;

use smartroom_app::ports::StatusStore;
use smartroom_domain::status::DeviceStatus;

use crate::state::AppState;

/// Response body for the toggle endpoint.
///
/// The dashboard ignores this body and re-fetches `/status`; it is kept
/// for clients that want the new value without a second round trip.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleResponse {
    /// The light-monitoring flag after the flip.
    pub monitor_light: bool,
}

/// `GET /status`
pub async fn status<S: StatusStore + 'static>(
    State(state): State<AppState<S>>,
) -> Json<DeviceStatus> {
    Json(state.store.snapshot())
}

/// `POST /toggle-light`
pub async fn toggle_light<S: StatusStore + 'static>(
    State(state): State<AppState<S>>,
) -> Json<ToggleResponse> {
    let monitor_light = state.store.toggle_light_monitoring();
    tracing::debug!(monitor_light, "light monitoring toggled");
    Json(ToggleResponse { monitor_light })
}
