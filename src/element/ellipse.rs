use egui::{Pos2, Rect, Vec2, pos2, vec2};
use serde::{Deserialize, Serialize};

use super::common::finite_or_zero;
use super::{ElementKind, Property, Shape};
use crate::error::PropertyError;

/// Ellipse given by its center and two radii
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ellipse {
    pub cx: f32,
    pub cy: f32,
    pub rx: f32,
    pub ry: f32,
}

impl Ellipse {
    pub fn new(cx: f32, cy: f32, rx: f32, ry: f32) -> Self {
        Self {
            cx: finite_or_zero(cx),
            cy: finite_or_zero(cy),
            rx: finite_or_zero(rx),
            ry: finite_or_zero(ry),
        }
    }

    pub fn radius(&self) -> Vec2 {
        vec2(self.rx, self.ry)
    }
}

impl Default for Ellipse {
    fn default() -> Self {
        Self::new(360.0, 280.0, 90.0, 60.0)
    }
}

impl Shape for Ellipse {
    fn kind(&self) -> ElementKind {
        ElementKind::Ellipse
    }

    fn anchor(&self) -> Pos2 {
        pos2(self.cx, self.cy)
    }

    fn set_anchor(&mut self, anchor: Pos2) {
        self.cx = finite_or_zero(anchor.x);
        self.cy = finite_or_zero(anchor.y);
    }

    fn translate(&mut self, delta: Vec2) {
        self.set_anchor(self.anchor() + delta);
    }

    fn bounds(&self) -> Rect {
        Rect::from_center_size(self.anchor(), self.radius() * 2.0)
    }

    fn hit_test(&self, pos: Pos2) -> bool {
        if self.rx <= 0.0 || self.ry <= 0.0 {
            return false;
        }
        let dx = (pos.x - self.cx) / self.rx;
        let dy = (pos.y - self.cy) / self.ry;
        dx * dx + dy * dy <= 1.0
    }

    fn apply(&mut self, property: &Property) -> Result<(), PropertyError> {
        match property {
            Property::RadiusX(v) => self.rx = finite_or_zero(*v),
            Property::RadiusY(v) => self.ry = finite_or_zero(*v),
            other => return Err(self.not_applicable(other)),
        }
        Ok(())
    }
}
