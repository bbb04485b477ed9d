#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod components;
pub mod config;
pub mod element;
pub mod error;
pub mod export;
pub mod geometry;
pub mod id_generator;
pub mod input;
pub mod inspector;
pub mod panels;
pub mod renderer;
pub mod scene;

pub use app::FigureApp;
pub use config::EditorConfig;
pub use element::{Element, ElementKind, Field, Geometry, Property, Style};
pub use error::{ConfigError, ExportError, PropertyError};
pub use export::{ExportJob, Exporter};
pub use id_generator::ElementId;
pub use input::{InteractionController, PointerEvent};
pub use renderer::{DrawList, render};
pub use scene::Scene;
