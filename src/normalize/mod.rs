//! Fixed-geometry normalizers for title and placeholder elements.

pub mod placeholder;
pub mod title;

use crate::{
    foundation::error::{SlideFitError, SlideFitResult},
    layout::canvas::BoxGeometry,
    slide::element::Element,
    textfit::{FitRequest, TextFit, TextFitFailure},
};

/// Target rectangle and font constraints for one element role.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BoxStyle {
    pub geometry: BoxGeometry,
    pub font: FitRequest,
    /// Text written into the box before fitting. `None` keeps existing text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replacement_text: Option<String>,
}

impl BoxStyle {
    /// Title box: 12in wide, 0.52in tall, 0.5in from the top.
    pub fn title() -> Self {
        Self {
            geometry: BoxGeometry::new(0.2, 0.5, 12.0, 0.52),
            font: FitRequest::new("Verdana", 24.0, true),
            replacement_text: None,
        }
    }

    /// Section placeholder box; its text is cleared.
    pub fn placeholder() -> Self {
        Self {
            geometry: BoxGeometry::new(0.91, 1.87, 11.5, 3.12),
            font: FitRequest::new("Verdana", 60.0, true),
            replacement_text: Some(String::new()),
        }
    }

    pub fn validate(&self, what: &str) -> SlideFitResult<()> {
        self.geometry.validate(what)?;
        if !self.font.max_size_pt.is_finite() || self.font.max_size_pt < 1.0 {
            return Err(SlideFitError::validation(format!(
                "{what} font max_size_pt must be finite and >= 1"
            )));
        }
        if self.font.font_family.trim().is_empty() {
            return Err(SlideFitError::validation(format!(
                "{what} font_family must be non-empty"
            )));
        }
        Ok(())
    }
}

/// Non-fatal text fit problem recorded while normalizing an element.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FitDiagnostic {
    /// Shape identifier of the element.
    pub element_id: u32,
    /// Failure message.
    pub message: String,
}

/// Run the fitter and downgrade a failure to a logged diagnostic.
pub(crate) fn fit_or_report(
    element: &mut Element,
    request: &FitRequest,
    fitter: &dyn TextFit,
) -> Option<FitDiagnostic> {
    match fitter.fit_text(element, request) {
        Ok(size_pt) => {
            tracing::debug!(element_id = element.id, size_pt, "fitted text");
            None
        }
        Err(failure) => {
            tracing::warn!(element_id = element.id, %failure, "error fitting text");
            Some(diagnostic(element.id, &failure))
        }
    }
}

fn diagnostic(element_id: u32, failure: &TextFitFailure) -> FitDiagnostic {
    FitDiagnostic {
        element_id,
        message: failure.to_string(),
    }
}

pub use placeholder::normalize_placeholder;
pub use title::{TitleOutcome, normalize_title};
