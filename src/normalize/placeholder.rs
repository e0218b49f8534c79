use crate::{
    normalize::{BoxStyle, FitDiagnostic, fit_or_report},
    slide::element::Element,
    textfit::TextFit,
};

/// Reset a placeholder text box to its fixed rectangle and refit its text.
///
/// Produces no cursor. A fit failure (an emptied box is the common case) is
/// returned as a diagnostic; the new geometry is kept either way.
pub fn normalize_placeholder(
    element: &mut Element,
    style: &BoxStyle,
    fitter: &dyn TextFit,
) -> Option<FitDiagnostic> {
    if let Some(text) = &style.replacement_text {
        element.text = Some(text.clone());
    }
    element.set_frame(style.geometry.origin(), style.geometry.size());
    fit_or_report(element, &style.font, fitter)
}

#[cfg(test)]
#[path = "../../tests/unit/normalize/placeholder.rs"]
mod tests;
