//! Text auto-fit: choosing a font size so text fills a box.

pub mod metric;

use crate::slide::element::Element;

/// Font constraints for one fit request.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FitRequest {
    /// Font family to set on success.
    pub font_family: String,
    /// Largest size to try, in points.
    pub max_size_pt: f64,
    /// Fit using bold metrics and set bold on success.
    #[serde(default)]
    pub bold: bool,
}

impl FitRequest {
    pub fn new(font_family: impl Into<String>, max_size_pt: f64, bold: bool) -> Self {
        Self {
            font_family: font_family.into(),
            max_size_pt,
            bold,
        }
    }
}

/// Why a fit could not be performed. Always recoverable: the caller keeps
/// the geometry it already applied and moves on.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum TextFitFailure {
    /// The element carries no text frame.
    #[error("element has no text frame")]
    NoTextFrame,
    /// The text frame is empty.
    #[error("text frame is empty")]
    NoText,
    /// The box has a non-positive or non-finite size.
    #[error("box {width}x{height}in cannot hold text")]
    DegenerateBox {
        /// Box width in inches.
        width: f64,
        /// Box height in inches.
        height: f64,
    },
    /// Even the smallest size overflows the box.
    #[error("text does not fit at {min_size_pt}pt")]
    DoesNotFit {
        /// Smallest size tried, in points.
        min_size_pt: f64,
    },
}

/// A service that sizes an element's text to its box.
///
/// On success the implementation records the chosen font on the element and
/// returns the size in points. Implementations must be shareable across the
/// worker threads used for parallel deck formatting.
pub trait TextFit: Sync {
    fn fit_text(&self, element: &mut Element, request: &FitRequest)
    -> Result<f64, TextFitFailure>;
}

pub use metric::MetricTextFit;
