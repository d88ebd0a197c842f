use std::env;

use serde::{Deserialize, Serialize};

use self::model::ModelInfoConfig;
use self::ui::UiConfig;

pub mod model;
pub mod ui;

#[derive(Serialize, Deserialize, Clone)]
pub struct Config {
    pub ui: UiConfig,
    pub model: ModelInfoConfig,

    /// Serve pre-computed translations instead of live model inference
    pub demo_mode: bool,
    /// Artificial delay before revealing a translation, 0 disables
    pub result_delay_ms: u64,
}

impl Config {
    pub fn new() -> Self {
        let demo_mode = env::var("DEMO_MODE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(true);

        let result_delay_ms = env::var("RESULT_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(500); // matches the original demo's spinner pause

        Config {
            ui: UiConfig::default(),
            model: ModelInfoConfig::default(),

            demo_mode,
            result_delay_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_demo_deployment() {
        let config = Config::new();
        assert!(config.demo_mode);
        assert_eq!(config.result_delay_ms, 500);
        assert_eq!(config.ui.sample_preview_chars, 60);
        assert_eq!(config.model.base_model, "NLLB-200");
        assert_eq!(config.model.parameters, "600M");
        assert_eq!(config.model.training_pairs, 268);
        assert_eq!(config.model.corpus_size, "~30KB text");
    }
}
