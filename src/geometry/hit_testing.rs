use egui::Pos2;

use crate::element::{Element, Endpoint, Geometry, Shape};
use crate::id_generator::ElementId;

/// Which part of an element a pointer-down landed on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitHandle {
    /// The shape itself; grabbing it moves the whole element
    Body,
    /// A connector endpoint handle
    Endpoint(Endpoint),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub id: ElementId,
    pub handle: HitHandle,
}

/// Find the top-most element under `pos`, in scene coordinates.
///
/// Later elements draw on top, so the scene is walked back to front.
pub fn hit_test(elements: &[Element], pos: Pos2) -> Option<Hit> {
    elements.iter().rev().find_map(|element| {
        let handle = match &element.geometry {
            Geometry::Connector(connector) => HitHandle::Endpoint(connector.handle_at(pos)?),
            shape if shape.hit_test(pos) => HitHandle::Body,
            _ => return None,
        };
        Some(Hit {
            id: element.id,
            handle,
        })
    })
}
