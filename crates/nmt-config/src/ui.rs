use serde::{Deserialize, Serialize};

fn default_sample_preview_chars() -> usize {
    60
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    /// Truncation width for sample sentence labels
    #[serde(default = "default_sample_preview_chars")]
    pub sample_preview_chars: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            sample_preview_chars: default_sample_preview_chars(),
        }
    }
}
