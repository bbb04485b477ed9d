//! Property inspector logic.
//!
//! Turns raw user input for one [`Field`] of the selected element into a typed
//! [`Property`] and hands it to [`Scene::update_element`]. The egui side lives
//! in `panels::inspector_panel`.

use crate::color;
use crate::element::{Element, Field, Geometry, Property};
use crate::scene::Scene;

/// Numeric input as the inspector stores it: anything that isn't a finite
/// number becomes 0.
pub fn coerce_number(input: &str) -> f32 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed.parse::<f32>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

/// Typed write for a numeric field; `None` for text and color fields
pub fn numeric_property(field: Field, value: f32) -> Option<Property> {
    let value = if value.is_finite() { value } else { 0.0 };
    let property = match field {
        Field::Width => Property::Width(value),
        Field::Height => Property::Height(value),
        Field::CornerRadius => Property::CornerRadius(value),
        Field::RadiusX => Property::RadiusX(value),
        Field::RadiusY => Property::RadiusY(value),
        Field::FontSize => Property::FontSize(value),
        Field::StrokeWidth => Property::StrokeWidth(value),
        Field::Content | Field::Fill | Field::Stroke => return None,
    };
    Some(property)
}

/// Build the typed write for `field` from raw input.
///
/// Colors must be hex; anything else yields `None`.
pub fn property_from_input(field: Field, input: &str) -> Option<Property> {
    if field.is_numeric() {
        return numeric_property(field, coerce_number(input));
    }
    if !field.is_color() {
        return Some(Property::Content(input.to_owned()));
    }

    let hex = input.trim();
    if !color::is_hex(hex) {
        log::debug!("Ignoring non-hex color input {input:?}");
        return None;
    }
    if field == Field::Fill {
        Some(Property::Fill(hex.to_owned()))
    } else {
        Some(Property::Stroke(hex.to_owned()))
    }
}

/// Set one field of the selected element from raw input.
///
/// A no-op when nothing is selected, when the field doesn't belong to the
/// selected kind, or when a color isn't hex.
pub fn set_field(scene: &mut Scene, field: Field, input: &str) -> bool {
    let Some(id) = scene.selected_id() else {
        return false;
    };
    match property_from_input(field, input) {
        Some(property) => scene.update_element(id, property),
        None => false,
    }
}

/// Set a numeric field of the selected element, as a drag widget reports it
pub fn set_number(scene: &mut Scene, field: Field, value: f32) -> bool {
    let Some(id) = scene.selected_id() else {
        return false;
    };
    match numeric_property(field, value) {
        Some(property) => scene.update_element(id, property),
        None => false,
    }
}

/// Current value of a numeric field, if the element has it
pub fn numeric_value(element: &Element, field: Field) -> Option<f32> {
    let value = match (&element.geometry, field) {
        (_, Field::StrokeWidth) => element.style.stroke_width,
        (Geometry::Rectangle(r), Field::Width) => r.width,
        (Geometry::Rectangle(r), Field::Height) => r.height,
        (Geometry::Rectangle(r), Field::CornerRadius) => r.corner_radius,
        (Geometry::Ellipse(e), Field::RadiusX) => e.rx,
        (Geometry::Ellipse(e), Field::RadiusY) => e.ry,
        (Geometry::Text(t), Field::FontSize) => t.font_size,
        _ => return None,
    };
    Some(value)
}

/// Picker value for a stored color: `#rrggbb` with alpha dropped, or
/// [`color::FALLBACK_HEX`] when the stored string doesn't parse
pub fn color_to_hex(stored: &str) -> String {
    color::to_hex(stored)
}

/// Hex value for the color picker of `field`
pub fn color_value(element: &Element, field: Field) -> Option<String> {
    match field {
        Field::Fill => Some(color_to_hex(&element.style.fill)),
        Field::Stroke => Some(color_to_hex(&element.style.stroke)),
        _ => None,
    }
}

pub fn text_value(element: &Element, field: Field) -> Option<&str> {
    match (&element.geometry, field) {
        (Geometry::Text(t), Field::Content) => Some(&t.content),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementKind;

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number("42"), 42.0);
        assert_eq!(coerce_number(" 3.5 "), 3.5);
        assert_eq!(coerce_number("-7"), -7.0);
        assert_eq!(coerce_number(""), 0.0);
        assert_eq!(coerce_number("abc"), 0.0);
        assert_eq!(coerce_number("NaN"), 0.0);
        assert_eq!(coerce_number("inf"), 0.0);
    }

    #[test]
    fn test_property_from_input() {
        assert_eq!(
            property_from_input(Field::Width, "12"),
            Some(Property::Width(12.0))
        );
        assert_eq!(
            property_from_input(Field::Fill, "#00ff00"),
            Some(Property::Fill("#00ff00".into()))
        );
        assert_eq!(property_from_input(Field::Stroke, "red"), None);
        assert_eq!(
            property_from_input(Field::Content, "  spaced "),
            Some(Property::Content("  spaced ".into()))
        );
    }

    #[test]
    fn test_values_for_kind() {
        let mut scene = Scene::new();
        scene.add_element(ElementKind::Ellipse);
        let ellipse = scene.selected().unwrap();

        assert_eq!(numeric_value(ellipse, Field::RadiusX), Some(90.0));
        assert_eq!(numeric_value(ellipse, Field::Width), None);
        assert_eq!(numeric_value(ellipse, Field::StrokeWidth), Some(2.0));
        assert_eq!(text_value(ellipse, Field::Content), None);
        assert_eq!(color_value(ellipse, Field::Fill).as_deref(), Some("#ffffff"));
    }

    #[test]
    fn test_set_number_targets_selection() {
        let mut scene = Scene::new();
        assert!(!set_number(&mut scene, Field::Width, 10.0));

        let id = scene.add_element(ElementKind::Rectangle);
        assert!(set_number(&mut scene, Field::Width, 64.0));
        assert!(!set_number(&mut scene, Field::Content, 1.0));
        assert!(!set_number(&mut scene, Field::RadiusX, 5.0));
        assert_eq!(numeric_value(scene.get(id).unwrap(), Field::Width), Some(64.0));
    }
}
