use crate::{
    foundation::core::{Point, Size},
    foundation::error::{SlideFitError, SlideFitResult},
    foundation::math::{ensure_finite, ensure_positive_finite},
    layout::canvas::{CanvasConfig, PartitionMode},
    layout::geometry::{clamp_bottom, scale_to_fit},
    slide::element::Element,
};

/// Computed position and size for one picture.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// Top-left corner after clamping.
    pub origin: Point,
    /// Size from the aspect-preserving fit.
    pub size: Size,
    /// Height budget the picture was fitted against.
    pub budget: f64,
}

/// Result of planning a picture region without touching any element.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PicturePlan {
    /// One placement per picture, in input order.
    pub placements: Vec<Placement>,
    /// Cursor after the last picture (`top + height + margin`).
    pub cursor: f64,
}

/// Plan a vertical stack of pictures starting at `top`.
///
/// Pictures keep their input order. With [`PartitionMode::Static`] every
/// picture is fitted against the same budget,
/// `(content_height - top) / count - margin`, fixed before the first one is
/// placed. After fitting, each picture sits at `picture_left` and the current
/// cursor, is shifted up if it would cross the canvas bottom, and the cursor
/// moves to its bottom edge plus `margin`.
///
/// Fails with [`SlideFitError::InvalidGeometry`] if a picture has a
/// non-positive or non-finite size, `top` is not finite, or no positive
/// budget is left.
pub fn plan_pictures(
    sizes: &[Size],
    top: f64,
    canvas: &CanvasConfig,
) -> SlideFitResult<PicturePlan> {
    ensure_finite(top, "layout cursor")?;
    if sizes.is_empty() {
        return Ok(PicturePlan {
            placements: Vec::new(),
            cursor: top,
        });
    }

    let mut aspects = Vec::with_capacity(sizes.len());
    for (idx, size) in sizes.iter().enumerate() {
        let w = ensure_positive_finite(size.width, &format!("picture {idx} width"))?;
        let h = ensure_positive_finite(size.height, &format!("picture {idx} height"))?;
        aspects.push(w / h);
    }

    let count = sizes.len();
    let static_budget = share(canvas, top, count)?;

    let mut cursor = top;
    let mut placements = Vec::with_capacity(count);
    for (idx, &aspect) in aspects.iter().enumerate() {
        let budget = match canvas.partition {
            PartitionMode::Static => static_budget,
            PartitionMode::Remaining => share(canvas, cursor, count - idx)?,
        };
        let size = scale_to_fit(aspect, Size::new(canvas.content_width, budget));
        let y = clamp_bottom(cursor, size.height, canvas.height);
        let origin = Point::new(canvas.picture_left, y);
        tracing::debug!(
            idx,
            budget,
            x = origin.x,
            y = origin.y,
            w = size.width,
            h = size.height,
            "placed picture"
        );
        placements.push(Placement {
            origin,
            size,
            budget,
        });
        cursor = y + size.height + canvas.margin;
    }

    Ok(PicturePlan { placements, cursor })
}

/// Lay out `pictures` top to bottom from `top` and return the final cursor.
///
/// Mutates `left`, `top`, `width` and `height` of every picture and nothing
/// else. The whole plan is validated before the first write, so on error no
/// picture has been modified.
///
/// Not guaranteed idempotent: the budget is derived from whatever cursor is
/// passed in, and a second pass fits geometry that the document model has
/// already rounded, so repeated runs may drift.
pub fn layout_pictures(
    pictures: &mut [&mut Element],
    top: f64,
    canvas: &CanvasConfig,
) -> SlideFitResult<f64> {
    let sizes = pictures.iter().map(|p| p.size()).collect::<Vec<_>>();
    let plan = plan_pictures(&sizes, top, canvas)?;
    for (picture, placement) in pictures.iter_mut().zip(&plan.placements) {
        picture.set_frame(placement.origin, placement.size);
    }
    Ok(plan.cursor)
}

fn share(canvas: &CanvasConfig, cursor: f64, count: usize) -> SlideFitResult<f64> {
    let available = canvas.content_height - cursor;
    let budget = available / count as f64 - canvas.margin;
    if !budget.is_finite() || budget <= 0.0 {
        return Err(SlideFitError::invalid_geometry(format!(
            "no vertical space for {count} picture(s) below {cursor:.3}in \
             (budget {budget:.3}in)"
        )));
    }
    Ok(budget)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/pictures.rs"]
mod tests;
