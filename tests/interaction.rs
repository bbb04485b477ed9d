use eframe_figure::element::{ElementKind, Endpoint, Geometry, Shape};
use eframe_figure::geometry::{canvas_rect, map_pointer_to_scene, view_transform};
use eframe_figure::input::{DragMode, InteractionController, PointerDownOutcome};
use eframe_figure::{PointerEvent, Scene};
use egui::emath::RectTransform;
use egui::{Rect, pos2, vec2};

/// Screen and scene coordinates coincide
fn identity_view() -> RectTransform {
    view_transform(canvas_rect())
}

#[test]
fn test_snap_to_grid() {
    let view = identity_view();
    assert_eq!(map_pointer_to_scene(pos2(101.0, 103.0), &view, true), pos2(100.0, 104.0));
}

#[test]
fn test_drag_moves_by_pointer_delta() {
    let view = identity_view();
    for grab in [pos2(210.0, 170.0), pos2(390.0, 270.0)] {
        let mut scene = Scene::new();
        let id = scene.add_element(ElementKind::Rectangle);
        scene.select(None);
        let mut controller = InteractionController::new();

        assert_eq!(
            controller.pointer_down(&mut scene, grab, &view, false),
            PointerDownOutcome::Grabbed(id)
        );
        assert_eq!(scene.selected_id(), Some(id));

        assert!(controller.pointer_move(&mut scene, grab + vec2(50.0, 30.0), &view, false));
        controller.pointer_up();

        assert_eq!(scene.get(id).unwrap().geometry.anchor(), pos2(250.0, 190.0));
        assert!(!controller.is_dragging());
    }
}

#[test]
fn test_drag_through_event_stream() {
    let view = identity_view();
    let mut scene = Scene::new();
    let id = scene.add_element(ElementKind::Ellipse);
    let mut controller = InteractionController::new();

    let events = [
        PointerEvent::Down { position: pos2(361.0, 281.0) },
        PointerEvent::Move { position: pos2(381.0, 301.0) },
        PointerEvent::Move { position: pos2(401.0, 321.0) },
        PointerEvent::Up,
        // After the release further moves change nothing
        PointerEvent::Move { position: pos2(900.0, 700.0) },
    ];
    for event in &events {
        controller.handle_event(&mut scene, event, &view, false);
    }

    assert_eq!(scene.get(id).unwrap().geometry.anchor(), pos2(400.0, 320.0));
}

#[test]
fn test_second_pointer_down_rejected() {
    let view = identity_view();
    let mut scene = Scene::new();
    let rect = scene.add_element(ElementKind::Rectangle);
    let ellipse = scene.add_element(ElementKind::Ellipse);
    let mut controller = InteractionController::new();

    // Rectangle only, away from the ellipse
    controller.pointer_down(&mut scene, pos2(210.0, 170.0), &view, false);
    let session = *controller.session().unwrap();
    assert_eq!(session.target, rect);

    let outcome = controller.pointer_down(&mut scene, pos2(440.0, 280.0), &view, false);
    assert_eq!(outcome, PointerDownOutcome::Rejected);
    assert_eq!(controller.session(), Some(&session));
    assert_eq!(scene.selected_id(), Some(rect));

    controller.pointer_up();
    assert_eq!(
        controller.pointer_down(&mut scene, pos2(440.0, 280.0), &view, false),
        PointerDownOutcome::Grabbed(ellipse)
    );
}

#[test]
fn test_background_press_deselects() {
    let view = identity_view();
    let mut scene = Scene::new();
    scene.add_element(ElementKind::Rectangle);
    let mut controller = InteractionController::new();

    let outcome = controller.pointer_down(&mut scene, pos2(1000.0, 700.0), &view, true);
    assert_eq!(outcome, PointerDownOutcome::Deselected);
    assert_eq!(scene.selected_id(), None);
    assert!(!controller.is_dragging());
}

#[test]
fn test_connector_endpoint_drag() {
    let view = identity_view();
    let mut scene = Scene::new();
    let id = scene.add_element(ElementKind::Connector);
    let mut controller = InteractionController::new();

    controller.pointer_down(&mut scene, pos2(362.0, 258.0), &view, true);
    assert_eq!(controller.session().map(|s| s.mode), Some(DragMode::ConnectorEnd));

    controller.pointer_move(&mut scene, pos2(501.0, 299.0), &view, true);
    controller.pointer_up();

    let connector = scene.get(id).and_then(|e| e.as_connector()).unwrap();
    assert_eq!(connector.endpoint(Endpoint::End), pos2(500.0, 300.0));
    assert_eq!(connector.endpoint(Endpoint::Start), pos2(180.0, 180.0));
}

#[test]
fn test_connector_body_not_grabbable() {
    let view = identity_view();
    let mut scene = Scene::new();
    scene.add_element(ElementKind::Connector);
    let mut controller = InteractionController::new();

    let outcome = controller.pointer_down(&mut scene, pos2(270.0, 220.0), &view, false);
    assert_eq!(outcome, PointerDownOutcome::Deselected);
}

#[test]
fn test_removed_target_ends_drag() {
    let view = identity_view();
    let mut scene = Scene::new();
    let id = scene.add_element(ElementKind::Text);
    let mut controller = InteractionController::new();

    controller.pointer_down(&mut scene, pos2(265.0, 235.0), &view, false);
    assert!(controller.is_dragging());

    scene.remove_element(id);
    assert!(!controller.pointer_move(&mut scene, pos2(300.0, 300.0), &view, false));
    assert!(!controller.is_dragging());
}

#[test]
fn test_scaled_view_maps_to_scene() {
    // Canvas shown at half size, offset by (100, 50)
    let view = view_transform(Rect::from_min_size(pos2(100.0, 50.0), vec2(600.0, 400.0)));
    let mut scene = Scene::new();
    let id = scene.add_element(ElementKind::Rectangle);
    let mut controller = InteractionController::new();

    let outcome = controller.pointer_down(&mut scene, pos2(205.0, 135.0), &view, false);
    assert_eq!(outcome, PointerDownOutcome::Grabbed(id));

    controller.pointer_move(&mut scene, pos2(230.0, 150.0), &view, false);
    let Geometry::Rectangle(rect) = &scene.get(id).unwrap().geometry else {
        panic!("expected a rectangle");
    };
    assert_eq!((rect.x, rect.y), (250.0, 190.0));
}
