use super::*;
use crate::{
    deck::model::Shape,
    foundation::core::Emu,
    textfit::{FitRequest, MetricTextFit, TextFitFailure},
};

fn shape(id: u32, shape_type: u32, rect: [f64; 4], text: Option<&str>) -> Shape {
    Shape {
        id,
        name: format!("shape {id}"),
        shape_type,
        is_title: false,
        left: Emu::from_inches(rect[0]),
        top: Emu::from_inches(rect[1]),
        width: Emu::from_inches(rect[2]),
        height: Emu::from_inches(rect[3]),
        text: text.map(str::to_string),
        style: Default::default(),
    }
}

fn title(id: u32, text: &str) -> Shape {
    Shape {
        is_title: true,
        ..shape(id, 14, [1.0, 0.2, 10.0, 1.2], Some(text))
    }
}

fn picture(id: u32, w: f64, h: f64) -> Shape {
    shape(id, 13, [5.0, 5.0, w, h], None)
}

fn slide(shapes: Vec<Shape>) -> Slide {
    Slide { shapes }
}

fn sample_deck() -> Deck {
    let mut slides = vec![slide(vec![title(1, "Cover")])];
    for n in 2..=6 {
        slides.push(slide(vec![title(1, &format!("Section {n}")), picture(2, 4.0, 3.0)]));
    }
    slides.push(slide(vec![
        title(1, "Results"),
        picture(2, 4.0, 3.0),
        picture(3, 1.0, 1.0),
        shape(4, 1, [0.0, 7.0, 2.0, 0.3], Some("footer")),
    ]));
    slides.push(slide(vec![title(1, "Legends"), picture(2, 4.0, 3.0)]));
    Deck { slides }
}

#[test]
fn picture_slide_is_stacked_below_normalized_title() {
    let mut deck = sample_deck();
    let report = format_deck(
        &mut deck,
        &FormatConfig::default(),
        &MetricTextFit::default(),
        &Threading::default(),
    )
    .unwrap();

    let s7 = &deck.slides[6];
    assert_eq!(s7.shapes[0].top, Emu::from_inches(0.5));
    assert_eq!(s7.shapes[0].height, Emu::from_inches(0.52));
    assert_eq!(s7.shapes[0].style.align, crate::foundation::core::TextAlign::Left);

    let cursor = 0.5 + 0.52;
    let budget = (6.3 - cursor) / 2.0 - 0.2;
    assert_eq!(s7.shapes[1].left, Emu::from_inches(0.2));
    assert_eq!(s7.shapes[1].top, Emu::from_inches(cursor));
    assert_eq!(s7.shapes[1].height, Emu::from_inches(budget));
    assert_eq!(s7.shapes[2].height, Emu::from_inches(budget));
    assert_eq!(s7.shapes[2].width, Emu::from_inches(budget));
    assert!(s7.shapes[2].top > s7.shapes[1].top);
    assert_eq!(s7.shapes[3].left, Emu(0));

    let r7 = &report.slides[6];
    assert_eq!(r7.title.as_deref(), Some("Results"));
    assert_eq!(r7.titles_normalized, 1);
    assert_eq!(r7.pictures_laid_out, 2);
    assert!(r7.diagnostics.is_empty());
    assert_eq!(report.pictures_laid_out(), 2);
}

#[test]
fn early_and_skipped_slides_keep_their_pictures() {
    let original = sample_deck();
    let mut deck = original.clone();
    format_deck(
        &mut deck,
        &FormatConfig::default(),
        &MetricTextFit::default(),
        &Threading::default(),
    )
    .unwrap();

    // Cover title is never normalized.
    assert_eq!(deck.slides[0], original.slides[0]);
    // Slides 2..6: title moved, picture untouched.
    assert_eq!(deck.slides[3].shapes[0].top, Emu::from_inches(0.5));
    assert_eq!(deck.slides[3].shapes[1], original.slides[3].shapes[1]);
    // "Legends" slide pictures untouched.
    assert_eq!(deck.slides[7].shapes[1], original.slides[7].shapes[1]);
}

#[test]
fn section_marker_box_is_reset_with_non_fatal_diagnostic() {
    let mut s = slide(vec![shape(
        8,
        17,
        [3.0, 3.0, 2.0, 1.0],
        Some("<change layout for title slide>"),
    )]);
    let report = format_slide(&mut s, 1, &FormatConfig::default(), &MetricTextFit::default())
        .unwrap();

    assert_eq!(report.placeholders_normalized, 1);
    assert_eq!(s.shapes[0].left, Emu::from_inches(0.91));
    assert_eq!(s.shapes[0].width, Emu::from_inches(11.5));
    assert_eq!(s.shapes[0].text.as_deref(), Some(""));
    assert!(matches!(
        &report.diagnostics[..],
        [Diagnostic::TextFit(FitDiagnostic { element_id: 8, .. })]
    ));
}

#[test]
fn crowded_slide_reports_layout_diagnostic_and_keeps_going() {
    let mut shapes = vec![title(1, "Crowded")];
    for id in 2..42 {
        shapes.push(picture(id, 1.0, 1.0));
    }
    let original = slide(shapes);
    let mut s = original.clone();
    let report = format_slide(&mut s, 7, &FormatConfig::default(), &MetricTextFit::default())
        .unwrap();

    assert_eq!(report.pictures_laid_out, 0);
    assert!(matches!(report.diagnostics[..], [Diagnostic::Layout { .. }]));
    assert_eq!(s.shapes[1..], original.shapes[1..]);
    assert_eq!(s.shapes[0].top, Emu::from_inches(0.5));
}

#[test]
fn slide_without_title_stacks_from_canvas_top() {
    let mut s = slide(vec![picture(1, 2.0, 2.0)]);
    let report = format_slide(&mut s, 9, &FormatConfig::default(), &MetricTextFit::default())
        .unwrap();
    assert_eq!(s.shapes[0].top, Emu(0));
    assert_eq!(s.shapes[0].height, Emu::from_inches(6.3 - 0.2));
    assert!((report.cursor - 6.3).abs() < 1e-9);
}

#[test]
fn failing_fitter_never_aborts_the_deck() {
    struct Refuse;
    impl TextFit for Refuse {
        fn fit_text(
            &self,
            _element: &mut Element,
            _request: &FitRequest,
        ) -> Result<f64, TextFitFailure> {
            Err(TextFitFailure::NoText)
        }
    }

    let mut deck = sample_deck();
    let report = format_deck(
        &mut deck,
        &FormatConfig::default(),
        &Refuse,
        &Threading::default(),
    )
    .unwrap();
    // One title diagnostic per slide from 2 onward.
    assert_eq!(report.diagnostics().count(), 7);
    assert_eq!(report.pictures_laid_out(), 2);
}

#[test]
fn parallel_formatting_matches_sequential() {
    let cfg = FormatConfig::default();
    let fitter = MetricTextFit::default();

    let mut seq = sample_deck();
    let seq_report = format_deck(&mut seq, &cfg, &fitter, &Threading::default()).unwrap();

    let mut par = sample_deck();
    let threading = Threading {
        parallel: true,
        threads: Some(2),
    };
    let par_report = format_deck(&mut par, &cfg, &fitter, &threading).unwrap();

    assert_eq!(seq, par);
    assert_eq!(seq_report, par_report);
}

#[test]
fn zero_threads_is_rejected() {
    let mut deck = sample_deck();
    let threading = Threading {
        parallel: true,
        threads: Some(0),
    };
    let err = format_deck(
        &mut deck,
        &FormatConfig::default(),
        &MetricTextFit::default(),
        &threading,
    )
    .unwrap_err();
    assert!(err.to_string().contains("threads"));
}

#[test]
fn inventory_lists_every_shape_in_inches() {
    let deck = sample_deck();
    let rows = inventory(&deck);
    assert_eq!(rows.len(), 1 + 5 * 2 + 4 + 2);
    let row = &rows[1];
    assert_eq!(row.slide, 2);
    assert_eq!(
        row.to_string(),
        "id: 1, height: 1.20, width: 10.00, left: 1.00, type: 14, name: shape 1"
    );
}
