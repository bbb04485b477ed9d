//! Pointer interaction state machine.
//!
//! ```text
//!            pointer-down on a handle
//!   ┌──────┐ ─────────────────────────► ┌──────────┐
//!   │ Idle │                            │ Dragging │ ◄─┐ pointer-move
//!   └──────┘ ◄───────────────────────── └──────────┘ ──┘
//!                  pointer-up
//! ```
//!
//! A pointer-down while dragging is rejected, so a running drag can never be
//! replaced or lost halfway through.

use egui::emath::RectTransform;
use egui::{Pos2, Vec2};

use super::PointerEvent;
use crate::element::{Endpoint, Shape};
use crate::geometry::{HitHandle, hit_test, map_pointer_to_scene};
use crate::id_generator::ElementId;
use crate::scene::Scene;

/// What a drag does to its target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    /// Translate the whole element
    Move,
    /// Drag the start point of a connector
    ConnectorStart,
    /// Drag the end point of a connector
    ConnectorEnd,
}

impl From<HitHandle> for DragMode {
    fn from(handle: HitHandle) -> Self {
        match handle {
            HitHandle::Body => DragMode::Move,
            HitHandle::Endpoint(Endpoint::Start) => DragMode::ConnectorStart,
            HitHandle::Endpoint(Endpoint::End) => DragMode::ConnectorEnd,
        }
    }
}

/// A drag in progress
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    pub mode: DragMode,
    pub target: ElementId,
    /// Pointer position minus element anchor at grab time; zero for endpoint drags
    pub offset: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging(Session),
}

impl InteractionState {
    /// Validates whether a transition to the new state is allowed
    pub fn can_transition_to(&self, next: &InteractionState) -> bool {
        match (self, next) {
            (InteractionState::Idle, _) => true,
            (InteractionState::Dragging(_), InteractionState::Idle) => true,
            // A second drag can't start on top of a running one
            (InteractionState::Dragging(_), InteractionState::Dragging(_)) => false,
        }
    }
}

/// Result of a pointer-down
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerDownOutcome {
    /// A drag started on this element, which is now selected
    Grabbed(ElementId),
    /// Empty canvas was hit and the selection was cleared
    Deselected,
    /// A drag was already running; the press was ignored
    Rejected,
}

/// Interprets pointer sequences against the scene, one drag at a time
#[derive(Debug, Default)]
pub struct InteractionController {
    state: InteractionState,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<&Session> {
        match &self.state {
            InteractionState::Dragging(session) => Some(session),
            InteractionState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, InteractionState::Dragging(_))
    }

    fn transition_to(&mut self, next: InteractionState) -> bool {
        if !self.state.can_transition_to(&next) {
            log::debug!("Rejected transition {:?} -> {:?}", self.state, next);
            return false;
        }
        log::debug!("Interaction {:?} -> {:?}", self.state, next);
        self.state = next;
        true
    }

    /// Feed one pointer event. Returns true if the scene changed.
    pub fn handle_event(
        &mut self,
        scene: &mut Scene,
        event: &PointerEvent,
        view: &RectTransform,
        snap: bool,
    ) -> bool {
        match *event {
            PointerEvent::Down { position } => {
                self.pointer_down(scene, position, view, snap) != PointerDownOutcome::Rejected
            }
            PointerEvent::Move { position } => self.pointer_move(scene, position, view, snap),
            PointerEvent::Up => {
                self.pointer_up();
                false
            }
        }
    }

    pub fn pointer_down(
        &mut self,
        scene: &mut Scene,
        device: Pos2,
        view: &RectTransform,
        snap: bool,
    ) -> PointerDownOutcome {
        if self.is_dragging() {
            log::debug!("Pointer-down during a drag, ignoring");
            return PointerDownOutcome::Rejected;
        }

        // Hit testing uses the exact position; the drag itself follows the snapped one.
        let exact = view.inverse().transform_pos(device);
        let Some(hit) = hit_test(scene.elements(), exact) else {
            scene.select(None);
            return PointerDownOutcome::Deselected;
        };
        let Some(element) = scene.get(hit.id) else {
            return PointerDownOutcome::Deselected;
        };

        let mode = DragMode::from(hit.handle);
        let offset = match mode {
            DragMode::Move => map_pointer_to_scene(device, view, snap) - element.geometry.anchor(),
            DragMode::ConnectorStart | DragMode::ConnectorEnd => Vec2::ZERO,
        };
        let session = Session {
            mode,
            target: hit.id,
            offset,
        };

        if !self.transition_to(InteractionState::Dragging(session)) {
            return PointerDownOutcome::Rejected;
        }
        scene.select(Some(hit.id));
        log::info!("Grabbed {} with {mode:?}", hit.id);
        PointerDownOutcome::Grabbed(hit.id)
    }

    pub fn pointer_move(
        &mut self,
        scene: &mut Scene,
        device: Pos2,
        view: &RectTransform,
        snap: bool,
    ) -> bool {
        let Some(session) = self.session().copied() else {
            return false;
        };
        let pos = map_pointer_to_scene(device, view, snap);

        let applied = match session.mode {
            DragMode::Move => scene.move_element(session.target, pos - session.offset),
            DragMode::ConnectorStart => scene.set_endpoint(session.target, Endpoint::Start, pos),
            DragMode::ConnectorEnd => scene.set_endpoint(session.target, Endpoint::End, pos),
        };

        if !applied {
            log::debug!("Drag target {} is gone, ending drag", session.target);
            self.transition_to(InteractionState::Idle);
        }
        applied
    }

    /// Ends any drag, wherever the pointer is
    pub fn pointer_up(&mut self) {
        if self.is_dragging() {
            self.transition_to(InteractionState::Idle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_table() {
        let session = Session {
            mode: DragMode::Move,
            target: crate::id_generator::generate_id(),
            offset: Vec2::ZERO,
        };
        let idle = InteractionState::Idle;
        let dragging = InteractionState::Dragging(session);

        assert!(idle.can_transition_to(&dragging));
        assert!(idle.can_transition_to(&idle));
        assert!(dragging.can_transition_to(&idle));
        assert!(!dragging.can_transition_to(&dragging));
    }

    #[test]
    fn test_drag_mode_from_handle() {
        assert_eq!(DragMode::from(HitHandle::Body), DragMode::Move);
        assert_eq!(
            DragMode::from(HitHandle::Endpoint(Endpoint::End)),
            DragMode::ConnectorEnd
        );
    }
}
