use crate::{
    foundation::core::POINTS_PER_INCH,
    slide::element::Element,
    textfit::{FitRequest, TextFit, TextFitFailure},
};

/// Font-agnostic fitter driven by average glyph metrics.
///
/// Each glyph is assumed to advance `advance_em` of the font size (scaled
/// by `bold_advance_scale` for bold) and each line to take `line_height_em`.
/// Text is greedily word-wrapped to the box width; the largest whole-point
/// size whose wrapped block fits the box height wins.
#[derive(Clone, Debug, PartialEq)]
pub struct MetricTextFit {
    pub advance_em: f64,
    pub bold_advance_scale: f64,
    pub line_height_em: f64,
    /// Smallest size tried, in points.
    pub min_size_pt: f64,
}

impl Default for MetricTextFit {
    fn default() -> Self {
        Self {
            advance_em: 0.6,
            bold_advance_scale: 1.08,
            line_height_em: 1.2,
            min_size_pt: 1.0,
        }
    }
}

impl MetricTextFit {
    fn fits(&self, text: &str, box_w_pt: f64, box_h_pt: f64, size_pt: f64, bold: bool) -> bool {
        let scale = if bold { self.bold_advance_scale } else { 1.0 };
        let advance = size_pt * self.advance_em * scale;
        let per_line = (box_w_pt / advance).floor();
        if per_line.is_nan() || per_line < 1.0 {
            return false;
        }
        let lines = wrapped_line_count(text, per_line as usize);
        lines as f64 * size_pt * self.line_height_em <= box_h_pt
    }

    fn largest_fitting_size(
        &self,
        text: &str,
        box_w_pt: f64,
        box_h_pt: f64,
        request: &FitRequest,
    ) -> Option<f64> {
        if !request.max_size_pt.is_finite() {
            return None;
        }
        let mut size = request.max_size_pt.floor();
        while size >= self.min_size_pt {
            if self.fits(text, box_w_pt, box_h_pt, size, request.bold) {
                return Some(size);
            }
            size -= 1.0;
        }
        None
    }
}

impl TextFit for MetricTextFit {
    fn fit_text(
        &self,
        element: &mut Element,
        request: &FitRequest,
    ) -> Result<f64, TextFitFailure> {
        let text = element.text.as_deref().ok_or(TextFitFailure::NoTextFrame)?;
        if text.trim().is_empty() {
            return Err(TextFitFailure::NoText);
        }
        let (width, height) = (element.width, element.height);
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(TextFitFailure::DegenerateBox { width, height });
        }

        let size = self
            .largest_fitting_size(
                text,
                width * POINTS_PER_INCH,
                height * POINTS_PER_INCH,
                request,
            )
            .ok_or(TextFitFailure::DoesNotFit {
                min_size_pt: self.min_size_pt,
            })?;

        element.style.font_family = Some(request.font_family.clone());
        element.style.bold = request.bold;
        element.style.font_size_pt = Some(size);
        Ok(size)
    }
}

/// Lines needed to greedily wrap `text` at `per_line` characters.
///
/// Explicit newlines start a new paragraph; words longer than a line are
/// broken across as many lines as they need.
pub(crate) fn wrapped_line_count(text: &str, per_line: usize) -> usize {
    let per_line = per_line.max(1);
    let mut lines = 0usize;
    for para in text.lines() {
        let mut para_lines = 1usize;
        let mut used = 0usize;
        for word in para.split_whitespace() {
            let len = word.chars().count();
            let need = if used == 0 { len } else { used + 1 + len };
            if need <= per_line {
                used = need;
                continue;
            }
            if used > 0 {
                para_lines += 1;
            }
            let extra = (len - 1) / per_line;
            para_lines += extra;
            used = len - extra * per_line;
        }
        lines += para_lines;
    }
    lines.max(1)
}

#[cfg(test)]
#[path = "../../tests/unit/textfit/metric.rs"]
mod tests;
