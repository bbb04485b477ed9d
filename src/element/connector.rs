use egui::{Pos2, Rect, Vec2, pos2};
use serde::{Deserialize, Serialize};

use super::common::finite_or_zero;
use super::{ElementKind, Property, Shape};
use crate::error::PropertyError;

/// Radius of the endpoint grab handles, in scene units
pub const HANDLE_RADIUS: f32 = 8.0;

/// One of the two independently draggable ends of a connector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Endpoint {
    Start,
    End,
}

/// Straight arrow from `(x1, y1)` to `(x2, y2)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connector {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl Connector {
    pub fn new(start: Pos2, end: Pos2) -> Self {
        Self {
            x1: finite_or_zero(start.x),
            y1: finite_or_zero(start.y),
            x2: finite_or_zero(end.x),
            y2: finite_or_zero(end.y),
        }
    }

    pub fn start(&self) -> Pos2 {
        pos2(self.x1, self.y1)
    }

    pub fn end(&self) -> Pos2 {
        pos2(self.x2, self.y2)
    }

    pub fn endpoint(&self, endpoint: Endpoint) -> Pos2 {
        match endpoint {
            Endpoint::Start => self.start(),
            Endpoint::End => self.end(),
        }
    }

    pub fn set_endpoint(&mut self, endpoint: Endpoint, pos: Pos2) {
        let (x, y) = (finite_or_zero(pos.x), finite_or_zero(pos.y));
        match endpoint {
            Endpoint::Start => (self.x1, self.y1) = (x, y),
            Endpoint::End => (self.x2, self.y2) = (x, y),
        }
    }

    /// The handle under `pos`, if any. The end handle is drawn last, so it wins.
    pub fn handle_at(&self, pos: Pos2) -> Option<Endpoint> {
        [Endpoint::End, Endpoint::Start]
            .into_iter()
            .find(|&endpoint| self.endpoint(endpoint).distance(pos) <= HANDLE_RADIUS)
    }
}

impl Default for Connector {
    fn default() -> Self {
        Self::new(pos2(180.0, 180.0), pos2(360.0, 260.0))
    }
}

impl Shape for Connector {
    fn kind(&self) -> ElementKind {
        ElementKind::Connector
    }

    fn anchor(&self) -> Pos2 {
        self.start()
    }

    fn set_anchor(&mut self, anchor: Pos2) {
        let delta = anchor - self.start();
        self.translate(delta);
    }

    fn translate(&mut self, delta: Vec2) {
        let (start, end) = (self.start() + delta, self.end() + delta);
        self.set_endpoint(Endpoint::Start, start);
        self.set_endpoint(Endpoint::End, end);
    }

    fn bounds(&self) -> Rect {
        Rect::from_two_pos(self.start(), self.end())
    }

    // Only the handles are grabbable, not the shaft.
    fn hit_test(&self, pos: Pos2) -> bool {
        self.handle_at(pos).is_some()
    }

    fn apply(&mut self, property: &Property) -> Result<(), PropertyError> {
        Err(self.not_applicable(property))
    }
}
