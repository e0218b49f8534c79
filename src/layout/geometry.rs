//! Aspect-preserving scaling and bounds clamping.
//!
//! Both functions are total over their documented domain and do no
//! validation; callers (see [`crate::layout_pictures`]) check inputs first.

use crate::foundation::core::Size;

/// Scale a rectangle of aspect `element_aspect` (width / height) into `bounds`.
///
/// An element relatively wider than the box is width-bound and takes the
/// full box width; otherwise it is height-bound and takes the full box
/// height. The result keeps `element_aspect` and never exceeds `bounds` on
/// the bound axis.
///
/// Requires `element_aspect > 0` and a box with positive width and height.
pub fn scale_to_fit(element_aspect: f64, bounds: Size) -> Size {
    let box_aspect = bounds.width / bounds.height;
    if element_aspect > box_aspect {
        Size::new(bounds.width, bounds.width / element_aspect)
    } else {
        Size::new(bounds.height * element_aspect, bounds.height)
    }
}

/// Shift `top` up so that `top + height` does not pass `canvas_height`.
///
/// Position only: `height` is never changed, so an element taller than the
/// canvas comes back with a negative top and still overflows upward.
pub fn clamp_bottom(top: f64, height: f64, canvas_height: f64) -> f64 {
    if top + height > canvas_height {
        canvas_height - height
    } else {
        top
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/geometry.rs"]
mod tests;
