//! Service info, health and not-found handlers

use axum::{extract::State, response::Json};
use serde::Serialize;

use crate::app::AppState;
use crate::config::API_VERSION;
use crate::core::{error::CoreError, response::timestamp};

pub async fn home(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "message": "Bienvenue sur notre API de données DevOps",
        "version": API_VERSION,
        "environment": state.config.env,
        "timestamp": timestamp(),
        "endpoints": {
            "/": "Page d'accueil",
            "/health": "Vérification de santé",
            "/data": "Récupération de données",
            "/stats": "Statistiques de l'API"
        }
    }))
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
}

/// Always 200; used by monitoring.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: API_VERSION,
        timestamp: timestamp(),
    })
}

pub async fn not_found() -> CoreError {
    CoreError::endpoint_not_found()
}
