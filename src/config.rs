use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::color::Color;
use crate::error::DrawResult;

/// Editor settings, persisted as pretty-printed JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Initial outline colour of the foreground provider
    pub foreground_color: Color,
    /// Initial fill colour of the background provider
    pub background_color: Color,
    /// Canvas and export background
    pub canvas_color: Color,
    pub stroke_width: f32,
    pub antialias: bool,
    /// Extension of saved drawings, without the dot
    pub document_extension: String,
    /// Accepted export formats; the first one is the default
    pub export_extensions: Vec<String>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            foreground_color: Color::RED,
            background_color: Color::BLUE,
            canvas_color: Color::WHITE,
            stroke_width: 2.0,
            antialias: true,
            document_extension: "jvd".to_string(),
            export_extensions: ["jpg", "jpeg", "gif", "png"].map(String::from).to_vec(),
        }
    }
}

impl EditorConfig {
    pub fn load(path: impl AsRef<Path>) -> DrawResult<Self> {
        let json = fs::read_to_string(path.as_ref())?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Load settings, falling back to defaults when the file does not exist
    pub fn load_or_default(path: impl AsRef<Path>) -> DrawResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::info!("No settings at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> DrawResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), json)?;
        Ok(())
    }

    pub fn default_export_extension(&self) -> &str {
        self.export_extensions.first().map(String::as_str).unwrap_or("png")
    }
}
