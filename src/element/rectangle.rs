use egui::{Pos2, Rect, Vec2, pos2, vec2};
use serde::{Deserialize, Serialize};

use super::common::finite_or_zero;
use super::{ElementKind, Property, Shape};
use crate::error::PropertyError;

/// Axis-aligned rectangle with optional rounded corners
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub corner_radius: f32,
}

impl Rectangle {
    pub fn new(x: f32, y: f32, width: f32, height: f32, corner_radius: f32) -> Self {
        Self {
            x: finite_or_zero(x),
            y: finite_or_zero(y),
            width: finite_or_zero(width),
            height: finite_or_zero(height),
            corner_radius: finite_or_zero(corner_radius),
        }
    }

    pub fn size(&self) -> Vec2 {
        vec2(self.width, self.height)
    }
}

impl Default for Rectangle {
    fn default() -> Self {
        Self::new(200.0, 160.0, 200.0, 120.0, 16.0)
    }
}

impl Shape for Rectangle {
    fn kind(&self) -> ElementKind {
        ElementKind::Rectangle
    }

    fn anchor(&self) -> Pos2 {
        pos2(self.x, self.y)
    }

    fn set_anchor(&mut self, anchor: Pos2) {
        self.x = finite_or_zero(anchor.x);
        self.y = finite_or_zero(anchor.y);
    }

    fn translate(&mut self, delta: Vec2) {
        self.set_anchor(self.anchor() + delta);
    }

    fn bounds(&self) -> Rect {
        Rect::from_min_size(self.anchor(), self.size())
    }

    fn hit_test(&self, pos: Pos2) -> bool {
        self.bounds().contains(pos)
    }

    fn apply(&mut self, property: &Property) -> Result<(), PropertyError> {
        match property {
            Property::Width(v) => self.width = finite_or_zero(*v),
            Property::Height(v) => self.height = finite_or_zero(*v),
            Property::CornerRadius(v) => self.corner_radius = finite_or_zero(*v),
            other => return Err(self.not_applicable(other)),
        }
        Ok(())
    }
}
