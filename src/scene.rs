use egui::Pos2;

use crate::element::{DUPLICATE_OFFSET, Element, ElementKind, Endpoint, Property, Shape, factory};
use crate::id_generator::{ElementId, generate_id};

/// The editor's only mutable state: the ordered elements plus the selection.
///
/// Element order is draw order; later elements are drawn on top. The
/// selection is checked on every write, so it always names a live element or
/// nothing.
#[derive(Debug, Default, Clone)]
pub struct Scene {
    elements: Vec<Element>,
    selected: Option<ElementId>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    pub fn selected_id(&self) -> Option<ElementId> {
        self.selected
    }

    pub fn selected(&self) -> Option<&Element> {
        self.selected.and_then(|id| self.get(id))
    }

    /// Append a default element of `kind` and select it
    pub fn add_element(&mut self, kind: ElementKind) -> ElementId {
        let element = factory::create(generate_id(), kind);
        let id = element.id;
        log::info!("Adding {kind} {id}");
        self.elements.push(element);
        self.selected = Some(id);
        id
    }

    /// Write `property` to the selected element.
    ///
    /// Returns `false`, leaving the scene untouched, when `id` isn't the
    /// selection or the property doesn't belong to the element's kind.
    pub fn update_element(&mut self, id: ElementId, property: Property) -> bool {
        if self.selected != Some(id) {
            log::debug!("Ignoring {:?} for unselected element {id}", property.field());
            return false;
        }
        let Some(element) = self.get_mut(id) else {
            return false;
        };
        match element.apply(&property) {
            Ok(()) => true,
            Err(err) => {
                log::warn!("Rejected property write on {id}: {err}");
                false
            }
        }
    }

    /// Copy the selected element, shifted by [`DUPLICATE_OFFSET`], and select the copy
    pub fn duplicate_element(&mut self, id: ElementId) -> Option<ElementId> {
        if self.selected != Some(id) {
            return None;
        }
        let copy = self.get(id)?.duplicate(generate_id(), DUPLICATE_OFFSET);
        let new_id = copy.id;
        log::info!("Duplicated {id} as {new_id}");
        self.elements.push(copy);
        self.selected = Some(new_id);
        Some(new_id)
    }

    pub fn duplicate_selected(&mut self) -> Option<ElementId> {
        self.duplicate_element(self.selected?)
    }

    /// Remove an element, dropping the selection along with it if needed
    pub fn remove_element(&mut self, id: ElementId) -> Option<Element> {
        let index = self.elements.iter().position(|e| e.id == id)?;
        let removed = self.elements.remove(index);
        if self.selected == Some(id) {
            self.selected = None;
        }
        log::info!("Removed {} {id}", removed.kind());
        Some(removed)
    }

    pub fn remove_selected(&mut self) -> Option<Element> {
        self.remove_element(self.selected?)
    }

    pub fn clear(&mut self) {
        log::info!("Clearing {} elements", self.elements.len());
        self.elements.clear();
        self.selected = None;
    }

    /// Select an element, or nothing. Ids that aren't live select nothing.
    pub fn select(&mut self, id: Option<ElementId>) {
        let id = id.filter(|&id| self.get(id).is_some());
        if self.selected != id {
            log::debug!("Selection changed to {id:?}");
        }
        self.selected = id;
    }

    /// Move an element so its anchor lands on `anchor`, keeping its size
    pub fn move_element(&mut self, id: ElementId, anchor: Pos2) -> bool {
        match self.get_mut(id) {
            Some(element) => {
                element.geometry.set_anchor(anchor);
                true
            }
            None => false,
        }
    }

    /// Put one end of a connector at `pos`
    pub fn set_endpoint(&mut self, id: ElementId, endpoint: Endpoint, pos: Pos2) -> bool {
        match self.get_mut(id).and_then(Element::as_connector_mut) {
            Some(connector) => {
                connector.set_endpoint(endpoint, pos);
                true
            }
            None => false,
        }
    }
}
