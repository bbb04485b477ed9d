use std::fmt;

use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

mod common;
pub mod connector;
pub mod ellipse;
mod property;
pub mod rectangle;
pub mod text;

pub use common::{
    DEFAULT_FILL, DEFAULT_FONT_SIZE, DEFAULT_STROKE, DEFAULT_STROKE_WIDTH, DEFAULT_TEXT_FILL,
    DUPLICATE_OFFSET,
};
pub use connector::{Connector, Endpoint};
pub use ellipse::Ellipse;
pub use property::{Field, Property};
pub use rectangle::Rectangle;
pub use text::Text;

use crate::error::PropertyError;
use crate::id_generator::ElementId;
pub(crate) use common::finite_or_zero;

/// The four kinds of shape a figure is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Rectangle,
    Ellipse,
    Text,
    Connector,
}

impl ElementKind {
    pub const ALL: [ElementKind; 4] = [
        ElementKind::Rectangle,
        ElementKind::Ellipse,
        ElementKind::Text,
        ElementKind::Connector,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ElementKind::Rectangle => "rectangle",
            ElementKind::Ellipse => "ellipse",
            ElementKind::Text => "text",
            ElementKind::Connector => "connector",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geometry shared by every kind of element
pub trait Shape {
    fn kind(&self) -> ElementKind;

    /// The point a move drag is measured against
    fn anchor(&self) -> Pos2;

    /// Move the shape so its anchor lands on `anchor`, keeping its size
    fn set_anchor(&mut self, anchor: Pos2);

    fn translate(&mut self, delta: Vec2);

    /// Axis-aligned bounds in scene units
    fn bounds(&self) -> Rect;

    /// Whether a pointer-down at `pos` grabs this shape
    fn hit_test(&self, pos: Pos2) -> bool;

    /// Write a kind-specific property. Style properties are handled by [`Element`].
    fn apply(&mut self, property: &Property) -> Result<(), PropertyError>;

    fn not_applicable(&self, property: &Property) -> PropertyError {
        PropertyError::NotApplicable {
            field: property.field(),
            kind: self.kind(),
        }
    }
}

/// Kind-specific part of an element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    Rectangle(Rectangle),
    Ellipse(Ellipse),
    Text(Text),
    Connector(Connector),
}

impl Shape for Geometry {
    fn kind(&self) -> ElementKind {
        match self {
            Geometry::Rectangle(r) => r.kind(),
            Geometry::Ellipse(e) => e.kind(),
            Geometry::Text(t) => t.kind(),
            Geometry::Connector(c) => c.kind(),
        }
    }

    fn anchor(&self) -> Pos2 {
        match self {
            Geometry::Rectangle(r) => r.anchor(),
            Geometry::Ellipse(e) => e.anchor(),
            Geometry::Text(t) => t.anchor(),
            Geometry::Connector(c) => c.anchor(),
        }
    }

    fn set_anchor(&mut self, anchor: Pos2) {
        match self {
            Geometry::Rectangle(r) => r.set_anchor(anchor),
            Geometry::Ellipse(e) => e.set_anchor(anchor),
            Geometry::Text(t) => t.set_anchor(anchor),
            Geometry::Connector(c) => c.set_anchor(anchor),
        }
    }

    fn translate(&mut self, delta: Vec2) {
        match self {
            Geometry::Rectangle(r) => r.translate(delta),
            Geometry::Ellipse(e) => e.translate(delta),
            Geometry::Text(t) => t.translate(delta),
            Geometry::Connector(c) => c.translate(delta),
        }
    }

    fn bounds(&self) -> Rect {
        match self {
            Geometry::Rectangle(r) => r.bounds(),
            Geometry::Ellipse(e) => e.bounds(),
            Geometry::Text(t) => t.bounds(),
            Geometry::Connector(c) => c.bounds(),
        }
    }

    fn hit_test(&self, pos: Pos2) -> bool {
        match self {
            Geometry::Rectangle(r) => r.hit_test(pos),
            Geometry::Ellipse(e) => e.hit_test(pos),
            Geometry::Text(t) => t.hit_test(pos),
            Geometry::Connector(c) => c.hit_test(pos),
        }
    }

    fn apply(&mut self, property: &Property) -> Result<(), PropertyError> {
        match self {
            Geometry::Rectangle(r) => r.apply(property),
            Geometry::Ellipse(e) => e.apply(property),
            Geometry::Text(t) => t.apply(property),
            Geometry::Connector(c) => c.apply(property),
        }
    }
}

/// Paint settings; colors are kept as the CSS strings they were entered as
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f32,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: DEFAULT_FILL.to_owned(),
            stroke: DEFAULT_STROKE.to_owned(),
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

/// One shape in the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub id: ElementId,
    pub style: Style,
    pub geometry: Geometry,
}

impl Element {
    pub fn kind(&self) -> ElementKind {
        self.geometry.kind()
    }

    /// Write one property, rejecting fields that don't belong to this kind
    pub fn apply(&mut self, property: &Property) -> Result<(), PropertyError> {
        match property {
            Property::Fill(color) => self.style.fill = color.clone(),
            Property::Stroke(color) => self.style.stroke = color.clone(),
            Property::StrokeWidth(width) => self.style.stroke_width = finite_or_zero(*width),
            other => self.geometry.apply(other)?,
        }
        Ok(())
    }

    /// Deep copy under a new id, shifted by `offset`
    pub fn duplicate(&self, id: ElementId, offset: Vec2) -> Element {
        let mut copy = self.clone();
        copy.id = id;
        copy.geometry.translate(offset);
        copy
    }

    pub fn as_connector(&self) -> Option<&Connector> {
        match &self.geometry {
            Geometry::Connector(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_connector_mut(&mut self) -> Option<&mut Connector> {
        match &mut self.geometry {
            Geometry::Connector(c) => Some(c),
            _ => None,
        }
    }
}

/// Factory functions for creating elements with their default geometry and style
pub mod factory {
    use super::*;

    pub fn create(id: ElementId, kind: ElementKind) -> Element {
        let geometry = match kind {
            ElementKind::Rectangle => Geometry::Rectangle(Rectangle::default()),
            ElementKind::Ellipse => Geometry::Ellipse(Ellipse::default()),
            ElementKind::Text => Geometry::Text(Text::default()),
            ElementKind::Connector => Geometry::Connector(Connector::default()),
        };
        let mut style = Style::default();
        if kind == ElementKind::Text {
            style.fill = DEFAULT_TEXT_FILL.to_owned();
        }
        Element { id, style, geometry }
    }
}
