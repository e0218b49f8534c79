use std::fmt;

use rayon::prelude::*;

use crate::{
    deck::config::FormatConfig,
    deck::model::{Deck, Slide},
    foundation::error::{SlideFitError, SlideFitResult},
    layout::pictures::layout_pictures,
    normalize::{FitDiagnostic, normalize_placeholder, normalize_title},
    slide::element::{Element, ElementKind},
    textfit::TextFit,
};

/// A non-fatal problem found while formatting a slide.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Diagnostic {
    /// Text could not be fitted; the element's geometry was still applied.
    TextFit(FitDiagnostic),
    /// Pictures were left untouched because their geometry broke a layout
    /// precondition.
    Layout {
        /// Reason reported by the layout engine.
        message: String,
    },
}

/// What happened to one slide.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct SlideReport {
    /// 1-based slide position.
    pub index: usize,
    /// Slide title text, if the slide has a title placeholder.
    pub title: Option<String>,
    pub titles_normalized: usize,
    pub placeholders_normalized: usize,
    pub pictures_laid_out: usize,
    /// Final layout cursor in inches.
    pub cursor: f64,
    pub diagnostics: Vec<Diagnostic>,
}

/// Reports for every slide, in deck order.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct DeckReport {
    pub slides: Vec<SlideReport>,
}

impl DeckReport {
    pub fn pictures_laid_out(&self) -> usize {
        self.slides.iter().map(|s| s.pictures_laid_out).sum()
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = (usize, &Diagnostic)> {
        self.slides
            .iter()
            .flat_map(|s| s.diagnostics.iter().map(move |d| (s.index, d)))
    }
}

/// How slides are scheduled across threads.
#[derive(Clone, Debug, Default)]
pub struct Threading {
    /// Format slides concurrently; each slide is owned by one worker.
    pub parallel: bool,
    /// Override rayon worker threads (parallel mode only).
    pub threads: Option<usize>,
}

/// Format one slide in place.
///
/// Placeholder boxes and titles are normalized in shape order; the last
/// title's bottom edge becomes the picture cursor (0 when there is none).
/// Pictures are then stacked if the deck policy selects this slide.
#[tracing::instrument(skip(slide, config, fitter))]
pub fn format_slide(
    slide: &mut Slide,
    index: usize,
    config: &FormatConfig,
    fitter: &dyn TextFit,
) -> SlideFitResult<SlideReport> {
    let title = slide.title_text().map(str::to_string);
    let mut elements = slide.elements(index, &config.policy);
    let mut report = SlideReport {
        index,
        title: title.clone(),
        ..SlideReport::default()
    };

    let mut cursor = 0.0;
    for element in &mut elements {
        match element.kind {
            ElementKind::PlaceholderTextBox => {
                let diag = normalize_placeholder(element, &config.placeholder, fitter);
                report.diagnostics.extend(diag.map(Diagnostic::TextFit));
                report.placeholders_normalized += 1;
            }
            ElementKind::Title => {
                let out = normalize_title(element, &config.title, fitter);
                report.diagnostics.extend(out.diagnostic.map(Diagnostic::TextFit));
                report.titles_normalized += 1;
                cursor = out.cursor;
            }
            ElementKind::PictureShape | ElementKind::Other => {}
        }
    }

    if config.policy.lays_out_pictures(index, title.as_deref()) {
        let mut pictures = elements
            .iter_mut()
            .filter(|e| e.kind == ElementKind::PictureShape)
            .collect::<Vec<&mut Element>>();
        match layout_pictures(&mut pictures, cursor, &config.canvas) {
            Ok(end) => {
                report.pictures_laid_out = pictures.len();
                cursor = end;
            }
            Err(SlideFitError::InvalidGeometry(message)) => {
                tracing::warn!(slide = index, %message, "skipped picture layout");
                report.diagnostics.push(Diagnostic::Layout { message });
            }
            Err(e) => return Err(e),
        }
    }
    report.cursor = cursor;

    slide.apply(&elements)?;
    tracing::info!(
        slide = index,
        titles = report.titles_normalized,
        placeholders = report.placeholders_normalized,
        pictures = report.pictures_laid_out,
        "formatted slide"
    );
    Ok(report)
}

/// Validate `config` and `deck`, then format every slide.
///
/// Reports come back in slide order whether or not slides ran in parallel.
#[tracing::instrument(skip(deck, config, fitter))]
pub fn format_deck(
    deck: &mut Deck,
    config: &FormatConfig,
    fitter: &dyn TextFit,
    threading: &Threading,
) -> SlideFitResult<DeckReport> {
    config.validate()?;
    deck.validate()?;

    let slides = if threading.parallel {
        let pool = build_thread_pool(threading.threads)?;
        pool.install(|| {
            deck.slides
                .par_iter_mut()
                .enumerate()
                .map(|(idx, slide)| format_slide(slide, idx + 1, config, fitter))
                .collect::<SlideFitResult<Vec<_>>>()
        })?
    } else {
        deck.slides
            .iter_mut()
            .enumerate()
            .map(|(idx, slide)| format_slide(slide, idx + 1, config, fitter))
            .collect::<SlideFitResult<Vec<_>>>()?
    };

    Ok(DeckReport { slides })
}

fn build_thread_pool(threads: Option<usize>) -> SlideFitResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(SlideFitError::validation(
            "threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder.build().map_err(|e| {
        SlideFitError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}"))
    })
}

/// One row of a deck inventory.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ShapeSummary {
    /// 1-based slide position.
    pub slide: usize,
    pub id: u32,
    pub name: String,
    pub shape_type: u32,
    /// Inches.
    pub left: f64,
    /// Inches.
    pub width: f64,
    /// Inches.
    pub height: f64,
}

impl fmt::Display for ShapeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id: {}, height: {:.2}, width: {:.2}, left: {:.2}, type: {}, name: {}",
            self.id, self.height, self.width, self.left, self.shape_type, self.name
        )
    }
}

/// List every shape in the deck with its geometry in inches.
pub fn inventory(deck: &Deck) -> Vec<ShapeSummary> {
    deck.slides
        .iter()
        .enumerate()
        .flat_map(|(idx, slide)| {
            slide.shapes.iter().map(move |shape| ShapeSummary {
                slide: idx + 1,
                id: shape.id,
                name: shape.name.clone(),
                shape_type: shape.shape_type,
                left: shape.left.inches(),
                width: shape.width.inches(),
                height: shape.height.inches(),
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/pipeline/format.rs"]
mod tests;
