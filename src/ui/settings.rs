use serde::{Deserialize, Serialize};

use crate::engine::gemini_client::GeminiConfig;

#[derive(Serialize, Deserialize, Clone)]
pub struct UiSettings {
    pub ui_scale: f32,

    /// Stored as-is; an empty key falls back to GOOGLE_API_KEY.
    pub api_key: String,
    pub extract_model: String,
    pub chat_model: String,
}

impl Default for UiSettings {
    fn default() -> Self {
        let gemini = GeminiConfig::default();

        Self {
            ui_scale: 1.0,
            api_key: gemini.api_key,
            extract_model: gemini.extract_model,
            chat_model: gemini.chat_model,
        }
    }
}

impl UiSettings {
    pub fn gemini_config(&self) -> GeminiConfig {
        GeminiConfig {
            api_key: self.api_key.clone(),
            extract_model: self.extract_model.clone(),
            chat_model: self.chat_model.clone(),
        }
    }
}
