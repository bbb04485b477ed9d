use eframe_figure::element::ElementKind;
use eframe_figure::export::{EXPORT_FILE_NAME, Exporter, save_png};
use eframe_figure::{Scene, render};
use futures::executor::block_on;

fn exporter() -> Exporter {
    Exporter::new(false)
}

#[test]
fn test_png_round_trip() {
    let mut scene = Scene::new();
    scene.add_element(ElementKind::Rectangle);
    let list = render(scene.elements(), scene.selected_id(), false);

    let bytes = exporter().export_raster(&list).unwrap();
    let image = image::load_from_memory(&bytes).unwrap().to_rgba8();

    assert_eq!(image.dimensions(), (1200, 800));
    // Inside the rectangle
    assert!(image.get_pixel(300, 220)[3] > 0);
    // Transparent background
    assert_eq!(image.get_pixel(10, 10)[3], 0);
}

#[test]
fn test_background_job_uses_snapshot() {
    let mut scene = Scene::new();
    scene.add_element(ElementKind::Ellipse);
    let job = exporter().spawn(render(scene.elements(), None, true));

    // Edits after spawning don't reach the job
    scene.clear();

    let bytes = block_on(job.finish()).unwrap();
    let image = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert!(image.get_pixel(360, 280)[3] > 0);
}

#[test]
fn test_connector_and_text_export() {
    let mut scene = Scene::new();
    scene.add_element(ElementKind::Connector);
    scene.add_element(ElementKind::Text);
    let list = render(scene.elements(), scene.selected_id(), true);

    let bytes = exporter().export_raster(&list).unwrap();
    let image = image::load_from_memory(&bytes).unwrap().to_rgba8();
    // Start handle of the connector
    assert!(image.get_pixel(180, 180)[3] > 0);
}

#[test]
fn test_save_png_writes_file() {
    let dir = std::env::temp_dir().join(format!("eframe_figure_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let bytes = exporter().export_raster(&Default::default()).unwrap();
    let path = save_png(&dir, EXPORT_FILE_NAME, &bytes).unwrap();

    assert_eq!(path, dir.join("figure.png"));
    assert_eq!(std::fs::read(&path).unwrap(), bytes);
    std::fs::remove_dir_all(&dir).unwrap();
}
