use crate::{
    foundation::core::TextAlign,
    normalize::{BoxStyle, FitDiagnostic, fit_or_report},
    slide::element::Element,
    textfit::TextFit,
};

/// Outcome of normalizing a title.
#[derive(Clone, Debug, PartialEq)]
pub struct TitleOutcome {
    /// Bottom edge of the title; pictures start here.
    pub cursor: f64,
    /// Text fit failure, if any. Geometry is applied regardless.
    pub diagnostic: Option<FitDiagnostic>,
}

/// Move the title into its fixed box, left-align it and fit its text.
pub fn normalize_title(
    element: &mut Element,
    style: &BoxStyle,
    fitter: &dyn TextFit,
) -> TitleOutcome {
    element.set_frame(style.geometry.origin(), style.geometry.size());
    element.style.align = TextAlign::Left;
    if let Some(text) = &style.replacement_text {
        element.text = Some(text.clone());
    }

    let diagnostic = fit_or_report(element, &style.font, fitter);
    TitleOutcome {
        cursor: element.bottom(),
        diagnostic,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/normalize/title.rs"]
mod tests;
