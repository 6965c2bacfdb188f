use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct Status {
    pub status: &'static str,
    pub port: u16,
    pub message: &'static str,
}

pub async fn status(State(state): State<AppState>) -> Json<Status> {
    Json(Status {
        status: "Server is running",
        port: state.port,
        message: "Developmental screening backend API",
    })
}

#[derive(Serialize)]
pub struct Health {
    pub status: &'static str,
}

pub async fn health_check() -> Json<Health> {
    Json(Health { status: "ok" })
}
