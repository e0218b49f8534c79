use super::*;
use crate::{
    slide::element::ElementKind,
    textfit::{FitRequest, MetricTextFit, TextFitFailure},
};

struct FailingFit;

impl TextFit for FailingFit {
    fn fit_text(
        &self,
        _element: &mut Element,
        _request: &FitRequest,
    ) -> Result<f64, TextFitFailure> {
        Err(TextFitFailure::DoesNotFit { min_size_pt: 1.0 })
    }
}

fn title(text: &str) -> Element {
    Element::new(3, ElementKind::Title, 1.0, 0.1, 8.0, 1.5).with_text(text)
}

#[test]
fn title_moves_to_fixed_box_and_returns_bottom_edge() {
    let mut e = title("Results");
    let out = normalize_title(&mut e, &BoxStyle::title(), &MetricTextFit::default());

    assert_eq!((e.left, e.top, e.width, e.height), (0.2, 0.5, 12.0, 0.52));
    assert_eq!(e.style.align, TextAlign::Left);
    assert_eq!(out.cursor, 0.5 + 0.52);
    assert_eq!(out.diagnostic, None);
    assert_eq!(e.style.font_size_pt, Some(24.0));
}

#[test]
fn fit_failure_keeps_geometry_and_is_reported() {
    let mut e = title("Results");
    let out = normalize_title(&mut e, &BoxStyle::title(), &FailingFit);

    assert_eq!((e.left, e.top, e.width, e.height), (0.2, 0.5, 12.0, 0.52));
    let diag = out.diagnostic.unwrap();
    assert_eq!(diag.element_id, 3);
    assert!(diag.message.contains("does not fit"));
    assert!((out.cursor - 1.02).abs() < 1e-12);
}

#[test]
fn empty_title_is_a_non_fatal_diagnostic() {
    let mut e = title("");
    let out = normalize_title(&mut e, &BoxStyle::title(), &MetricTextFit::default());
    assert_eq!(out.diagnostic.unwrap().message, "text frame is empty");
    assert_eq!(e.height, 0.52);
}
