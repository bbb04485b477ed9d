use super::ElementKind;

/// Inspector-editable properties, without a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Width,
    Height,
    CornerRadius,
    RadiusX,
    RadiusY,
    Content,
    FontSize,
    Fill,
    Stroke,
    StrokeWidth,
}

const RECTANGLE_FIELDS: &[Field] = &[
    Field::Width,
    Field::Height,
    Field::CornerRadius,
    Field::Fill,
    Field::Stroke,
    Field::StrokeWidth,
];
const ELLIPSE_FIELDS: &[Field] = &[
    Field::RadiusX,
    Field::RadiusY,
    Field::Fill,
    Field::Stroke,
    Field::StrokeWidth,
];
const TEXT_FIELDS: &[Field] = &[
    Field::Content,
    Field::FontSize,
    Field::Fill,
    Field::Stroke,
    Field::StrokeWidth,
];
const CONNECTOR_FIELDS: &[Field] = &[Field::Fill, Field::Stroke, Field::StrokeWidth];

impl Field {
    /// Fields the inspector shows for an element kind, in display order
    pub fn for_kind(kind: ElementKind) -> &'static [Field] {
        match kind {
            ElementKind::Rectangle => RECTANGLE_FIELDS,
            ElementKind::Ellipse => ELLIPSE_FIELDS,
            ElementKind::Text => TEXT_FIELDS,
            ElementKind::Connector => CONNECTOR_FIELDS,
        }
    }

    pub fn applies_to(self, kind: ElementKind) -> bool {
        Self::for_kind(kind).contains(&self)
    }

    pub fn is_numeric(self) -> bool {
        !matches!(self, Field::Content | Field::Fill | Field::Stroke)
    }

    pub fn is_color(self) -> bool {
        matches!(self, Field::Fill | Field::Stroke)
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Width => "W",
            Field::Height => "H",
            Field::CornerRadius => "Radius",
            Field::RadiusX => "RX",
            Field::RadiusY => "RY",
            Field::Content => "Text",
            Field::FontSize => "Font Size",
            Field::Fill => "Fill",
            Field::Stroke => "Stroke",
            Field::StrokeWidth => "Stroke W",
        }
    }
}

/// A typed write to a single field of an element
#[derive(Debug, Clone, PartialEq)]
pub enum Property {
    Width(f32),
    Height(f32),
    CornerRadius(f32),
    RadiusX(f32),
    RadiusY(f32),
    Content(String),
    FontSize(f32),
    Fill(String),
    Stroke(String),
    StrokeWidth(f32),
}

impl Property {
    pub fn field(&self) -> Field {
        match self {
            Property::Width(_) => Field::Width,
            Property::Height(_) => Field::Height,
            Property::CornerRadius(_) => Field::CornerRadius,
            Property::RadiusX(_) => Field::RadiusX,
            Property::RadiusY(_) => Field::RadiusY,
            Property::Content(_) => Field::Content,
            Property::FontSize(_) => Field::FontSize,
            Property::Fill(_) => Field::Fill,
            Property::Stroke(_) => Field::Stroke,
            Property::StrokeWidth(_) => Field::StrokeWidth,
        }
    }
}
