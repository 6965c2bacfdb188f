use std::path::PathBuf;
use std::sync::Arc;

use screener_ai::{GeminiClient, Recommender};
use screener_engine::Engine;
use screener_export::styles::DocumentStyles;

use crate::config::ServerConfig;

/// Shared application state, injected into all route handlers via Axum state.
#[derive(Clone)]
pub struct AppState {
    pub recommender: Arc<Recommender>,
    pub data_dir: PathBuf,
    pub port: u16,
    pub styles: Arc<DocumentStyles>,
}

impl AppState {
    pub fn from_config(config: &ServerConfig) -> Self {
        let engine = Engine::new(config.engine);
        let recommender = match &config.ai {
            Some(gemini) => {
                Recommender::with_generator(engine, Box::new(GeminiClient::new(gemini.clone())))
            }
            None => Recommender::rules_only(engine),
        };
        Self::new(recommender, config.data_dir.clone(), config.port)
    }

    pub fn new(recommender: Recommender, data_dir: PathBuf, port: u16) -> Self {
        Self {
            recommender: Arc::new(recommender),
            data_dir,
            port,
            styles: Arc::new(DocumentStyles::default()),
        }
    }
}
