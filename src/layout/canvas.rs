use crate::foundation::{
    core::{Point, Size},
    error::{SlideFitError, SlideFitResult},
    math::{LENGTH_EPSILON, approx_eq},
};

/// Fixed canvas geometry for one layout pass, in inches.
///
/// Passed explicitly to every layout call; nothing here is global.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Full slide width.
    pub width: f64,
    /// Full slide height. Pictures are clamped against this edge.
    pub height: f64,
    /// Width of the box pictures are scaled into.
    pub content_width: f64,
    /// Height of the picture drawing area measured from the canvas top.
    /// Smaller than `height`; the strip below is reserved.
    pub content_height: f64,
    /// Left edge assigned to every picture.
    pub picture_left: f64,
    /// Gap between stacked elements.
    pub margin: f64,
    /// How vertical space is shared among pictures.
    pub partition: PartitionMode,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 13.33,
            height: 7.5,
            content_width: 13.0,
            content_height: 6.3,
            picture_left: 0.2,
            margin: 0.2,
            partition: PartitionMode::Static,
        }
    }
}

/// Vertical partitioning strategy for the picture region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartitionMode {
    /// One budget, `available / count - margin`, computed before the first
    /// picture and shared by all of them.
    #[default]
    Static,
    /// Budget re-derived before each picture from the space still left
    /// below the cursor, split among the pictures not yet placed.
    Remaining,
}

impl CanvasConfig {
    /// Validate that all lengths are usable for layout.
    pub fn validate(&self) -> SlideFitResult<()> {
        for (name, value) in [
            ("width", self.width),
            ("height", self.height),
            ("content_width", self.content_width),
            ("content_height", self.content_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SlideFitError::validation(format!(
                    "canvas {name} must be finite and > 0"
                )));
            }
        }
        for (name, value) in [
            ("picture_left", self.picture_left),
            ("margin", self.margin),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SlideFitError::validation(format!(
                    "canvas {name} must be finite and >= 0"
                )));
            }
        }
        if exceeds(self.content_height, self.height) {
            return Err(SlideFitError::validation(
                "canvas content_height must not exceed height",
            ));
        }
        if exceeds(self.picture_left + self.content_width, self.width) {
            return Err(SlideFitError::validation(
                "canvas picture_left + content_width must not exceed width",
            ));
        }
        Ok(())
    }
}

fn exceeds(len: f64, limit: f64) -> bool {
    len > limit && !approx_eq(len, limit, LENGTH_EPSILON)
}

/// A fixed rectangle assigned to a normalized element, in inches.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BoxGeometry {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl BoxGeometry {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn validate(&self, what: &str) -> SlideFitResult<()> {
        if !self.left.is_finite() || !self.top.is_finite() {
            return Err(SlideFitError::validation(format!(
                "{what} left/top must be finite"
            )));
        }
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(SlideFitError::validation(format!(
                "{what} width must be finite and > 0"
            )));
        }
        if !self.height.is_finite() || self.height <= 0.0 {
            return Err(SlideFitError::validation(format!(
                "{what} height must be finite and > 0"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/canvas.rs"]
mod tests;
