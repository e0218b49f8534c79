pub use kurbo::{Point, Rect, Size};

/// English Metric Units per inch.
pub const EMUS_PER_INCH: i64 = 914_400;
/// English Metric Units per typographic point.
pub const EMUS_PER_PT: i64 = 12_700;
/// Typographic points per inch.
pub const POINTS_PER_INCH: f64 = 72.0;

/// A length in English Metric Units, the integer unit deck containers persist.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize,
    serde::Deserialize,
)]
#[serde(transparent)]
pub struct Emu(pub i64);

impl Emu {
    /// Convert a length in inches, rounding to the nearest EMU.
    pub fn from_inches(inches: f64) -> Self {
        Self((inches * EMUS_PER_INCH as f64).round() as i64)
    }

    /// Convert a length in points, rounding to the nearest EMU.
    pub fn from_points(pt: f64) -> Self {
        Self((pt * EMUS_PER_PT as f64).round() as i64)
    }

    pub fn inches(self) -> f64 {
        self.0 as f64 / EMUS_PER_INCH as f64
    }

    pub fn points(self) -> f64 {
        self.0 as f64 / EMUS_PER_PT as f64
    }
}

/// Horizontal paragraph alignment carried on text-bearing elements.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlign {
    /// Left aligned.
    Left,
    /// Centered.
    Center,
    /// Right aligned.
    Right,
    /// Alignment inherited from the layout/master.
    #[default]
    Inherit,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
