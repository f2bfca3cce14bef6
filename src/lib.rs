#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod config;
pub mod document;
pub mod editor;
pub mod element;
pub mod error;
pub mod event;
pub mod file_handler;
pub mod format;
pub mod geometry;
pub mod id_generator;
pub mod panels;
pub mod renderer;
pub mod tools;

pub use app::DrawingApp;
pub use color::{Color, ColorProvider, ColorStatus};
pub use config::EditorConfig;
pub use document::{Document, ListAction, ObjectListModel};
pub use editor::ShapeEditor;
pub use element::{Shape, ShapeKind, ShapeRef, ShapeVisitor};
pub use error::{DrawError, DrawResult};
pub use geometry::{Point, Rect};
pub use renderer::{BoundingBoxCalculator, Rasterizer};
pub use tools::{ShapeTool, ToolType};
