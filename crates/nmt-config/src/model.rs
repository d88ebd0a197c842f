use serde::{Deserialize, Serialize};

fn default_base_model() -> String {
    "NLLB-200".to_string()
}

fn default_parameters() -> String {
    "600M".to_string()
}

fn default_training_pairs() -> u32 {
    268
}

fn default_corpus_size() -> String {
    "~30KB text".to_string()
}

fn default_model_hub_url() -> String {
    "https://huggingface.co/Faruna01/igala-nmt".to_string()
}

/// Static model-card metrics shown in the sidebar. Display-only; none of
/// this affects session logic.
#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ModelInfoConfig {
    #[serde(default = "default_base_model")]
    pub base_model: String,
    #[serde(default = "default_parameters")]
    pub parameters: String,
    #[serde(default = "default_training_pairs")]
    pub training_pairs: u32,
    #[serde(default = "default_corpus_size")]
    pub corpus_size: String,
    #[serde(default = "default_model_hub_url")]
    pub model_hub_url: String,
}

impl Default for ModelInfoConfig {
    fn default() -> Self {
        Self {
            base_model: default_base_model(),
            parameters: default_parameters(),
            training_pairs: default_training_pairs(),
            corpus_size: default_corpus_size(),
            model_hub_url: default_model_hub_url(),
        }
    }
}
