use std::path::{Path, PathBuf};

use crate::color::{ColorProvider, ColorStatus};
use crate::config::EditorConfig;
use crate::document::{Document, ObjectListModel};
use crate::error::DrawResult;
use crate::file_handler;
use crate::panels;
use crate::tools::{ShapeTool, ToolType};

/// Everything one open drawing needs: the document, its list view, the colour
/// providers, the placement tool and the path it was last saved to.
#[derive(Debug)]
pub struct DrawingApp {
    config: EditorConfig,
    document: Document,
    list: ObjectListModel,
    foreground: ColorProvider,
    background: ColorProvider,
    status: ColorStatus,
    tool: ShapeTool,
    saved_path: Option<PathBuf>,
}

impl Default for DrawingApp {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl DrawingApp {
    pub fn new(config: EditorConfig) -> Self {
        let document = Document::new();
        let foreground = ColorProvider::new("foreground", config.foreground_color);
        let background = ColorProvider::new("background", config.background_color);

        Self {
            list: ObjectListModel::new(&document),
            status: ColorStatus::new(foreground.clone(), background.clone()),
            tool: ShapeTool::new(ToolType::default(), foreground.clone(), background.clone()),
            document,
            foreground,
            background,
            saved_path: None,
            config,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn list(&self) -> &ObjectListModel {
        &self.list
    }

    pub fn foreground(&self) -> &ColorProvider {
        &self.foreground
    }

    pub fn background(&self) -> &ColorProvider {
        &self.background
    }

    /// Text of the colour status bar
    pub fn status_text(&self) -> String {
        self.status.text()
    }

    pub fn tool(&self) -> &ShapeTool {
        &self.tool
    }

    pub fn tool_mut(&mut self) -> &mut ShapeTool {
        &mut self.tool
    }

    pub fn select_tool(&mut self, tool_type: ToolType) {
        self.tool.set_tool_type(tool_type);
    }

    pub fn saved_path(&self) -> Option<&Path> {
        self.saved_path.as_deref()
    }

    /// Replace the drawing with a file's content and remember its path
    pub fn open(&mut self, path: &Path) -> DrawResult<usize> {
        let count = file_handler::load_document(&self.document, path, &self.config)?;
        self.tool.reset();
        self.saved_path = Some(path.to_path_buf());
        Ok(count)
    }

    /// Save to the remembered path. `None` means there is none yet and the
    /// caller has to ask for one and use [`save_as`](Self::save_as).
    pub fn save(&mut self) -> DrawResult<Option<PathBuf>> {
        match self.saved_path.clone() {
            Some(path) => self.save_as(&path).map(Some),
            None => Ok(None),
        }
    }

    pub fn save_as(&mut self, path: &Path) -> DrawResult<PathBuf> {
        let written = file_handler::save_document(&self.document, path, &self.config)?;
        self.saved_path = Some(written.clone());
        Ok(written)
    }

    pub fn export(&self, path: &Path) -> DrawResult<PathBuf> {
        file_handler::export_document(&self.document, path, &self.config)
    }

    /// True when closing now would lose changes
    pub fn is_edited(&self) -> DrawResult<bool> {
        file_handler::is_document_edited(&self.document, self.saved_path())
    }

    /// Lay out the drawing canvas in the remaining space of `ui`, route the
    /// pointer to the placement tool and paint.
    pub fn show_canvas(&mut self, ui: &mut egui::Ui) -> DrawResult<()> {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::click());
        let rect = response.rect;

        let result = panels::handle_canvas_input(&response, rect.min, &mut self.tool, &self.document);
        if let Err(err) = &result {
            log::warn!("Canvas input rejected: {}", err);
        }

        panels::paint_canvas(&painter, rect, &self.document, Some(&self.tool), &self.config);
        result.map(|_| ())
    }
}
