//! PNG export.
//!
//! The draw list is written as SVG, decoded with `usvg`, rasterized with
//! `resvg` and encoded with `image`. [`Exporter::spawn`] runs the same
//! pipeline on a worker thread so the UI never blocks on it.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures::channel::oneshot;
use image::{DynamicImage, ImageFormat, RgbaImage};
use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg::{self, fontdb};

use crate::error::ExportError;
use crate::geometry::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::renderer::{DrawList, svg_document};

pub const EXPORT_FILE_NAME: &str = "figure.png";

pub const EXPORT_WIDTH: u32 = CANVAS_WIDTH as u32;
pub const EXPORT_HEIGHT: u32 = CANVAS_HEIGHT as u32;

type ExportResult = Result<Vec<u8>, ExportError>;

/// Rasterizes draw lists to PNG. Cheap to clone; the font database is shared.
#[derive(Clone)]
pub struct Exporter {
    fontdb: Arc<fontdb::Database>,
}

impl std::fmt::Debug for Exporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Exporter")
            .field("fonts", &self.fontdb.len())
            .finish()
    }
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Exporter {
    /// Loading system fonts takes a while, so it happens once here
    pub fn new(load_system_fonts: bool) -> Self {
        let mut db = fontdb::Database::new();
        if load_system_fonts {
            db.load_system_fonts();
        }
        log::debug!("Export font database has {} faces", db.len());
        Self {
            fontdb: Arc::new(db),
        }
    }

    /// Render a draw list to PNG bytes on the calling thread
    pub fn export_raster(&self, list: &DrawList) -> ExportResult {
        let svg = svg_document::to_svg_string(list);

        let options = usvg::Options {
            fontdb: Arc::clone(&self.fontdb),
            ..usvg::Options::default()
        };
        let tree = usvg::Tree::from_str(&svg, &options)?;

        let mut pixmap =
            Pixmap::new(EXPORT_WIDTH, EXPORT_HEIGHT).ok_or(ExportError::Allocate {
                width: EXPORT_WIDTH,
                height: EXPORT_HEIGHT,
            })?;
        resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());

        let rgba: Vec<u8> = pixmap
            .pixels()
            .iter()
            .flat_map(|pixel| {
                let color = pixel.demultiply();
                [color.red(), color.green(), color.blue(), color.alpha()]
            })
            .collect();
        let image = RgbaImage::from_raw(EXPORT_WIDTH, EXPORT_HEIGHT, rgba).ok_or(
            ExportError::Allocate {
                width: EXPORT_WIDTH,
                height: EXPORT_HEIGHT,
            },
        )?;

        let mut bytes = Vec::new();
        DynamicImage::ImageRgba8(image).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
        log::info!("Rendered {} byte PNG", bytes.len());
        Ok(bytes)
    }

    /// Run [`Exporter::export_raster`] on a worker thread.
    ///
    /// The job owns its draw list, so later scene edits don't affect it.
    pub fn spawn(&self, list: DrawList) -> ExportJob {
        let (sender, receiver) = oneshot::channel();
        let exporter = self.clone();

        let spawned = std::thread::Builder::new()
            .name("figure-export".to_owned())
            .spawn(move || {
                let result = exporter.export_raster(&list);
                if sender.send(result).is_err() {
                    log::debug!("Export finished after its job was dropped");
                }
            });
        if let Err(err) = spawned {
            // The sender went down with the closure, so the job reports Cancelled
            log::error!("Failed to start export worker: {err}");
        }

        ExportJob { receiver }
    }
}

/// A running export
#[derive(Debug)]
pub struct ExportJob {
    receiver: oneshot::Receiver<ExportResult>,
}

impl ExportJob {
    /// Poll without blocking; `None` while the worker is still busy
    pub fn try_finish(&mut self) -> Option<ExportResult> {
        match self.receiver.try_recv() {
            Ok(result) => result,
            Err(oneshot::Canceled) => Some(Err(ExportError::Cancelled)),
        }
    }

    pub async fn finish(self) -> ExportResult {
        self.receiver
            .await
            .unwrap_or(Err(ExportError::Cancelled))
    }
}

/// Write PNG bytes to `dir/name`, returning the full path
pub fn save_png(dir: &Path, name: &str, bytes: &[u8]) -> Result<PathBuf, ExportError> {
    let path = dir.join(name);
    std::fs::write(&path, bytes)?;
    log::info!("Saved export to {}", path.display());
    Ok(path)
}
