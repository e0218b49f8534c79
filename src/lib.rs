//! Slidefit reformats slide decks into a fixed house layout.
//!
//! A deck is a list of slides, each an ordered list of shapes with geometry
//! in EMU. Slidefit classifies shapes into layout roles, gives titles and
//! placeholder boxes fixed rectangles with auto-fitted text, and stacks a
//! slide's pictures top to bottom in the space left under the title.
//!
//! # Pipeline overview
//!
//! 1. **Classify**: `Shape -> ElementKind` per slide, driven by [`DeckPolicy`]
//! 2. **Normalize**: titles and placeholders get fixed geometry ([`BoxStyle`]) and refitted text ([`TextFit`])
//! 3. **Lay out**: pictures are scaled into equal vertical budgets below the title ([`layout_pictures`])
//! 4. **Persist**: elements (inches) are written back to shapes (EMU) via [`Slide::apply`]
//!
//! Constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Plan, then commit**: picture layout validates every input before writing any geometry.
//! - **Non-fatal text fitting**: a box whose text cannot be fitted keeps its new geometry and
//!   surfaces a [`Diagnostic`] instead of aborting the slide.
//! - **Slide independence**: slides share no mutable state, so [`format_deck`] can run them on a
//!   rayon pool.
#![forbid(unsafe_code)]

mod deck;
mod foundation;
mod layout;
mod normalize;
mod pipeline;
mod slide;
mod textfit;

pub use deck::classify::{
    SHAPE_TYPE_PICTURE, SHAPE_TYPE_PLACEHOLDER, SHAPE_TYPE_TEXT_BOX, SlideContext, classify_shape,
};
pub use deck::config::{DeckPolicy, FormatConfig};
pub use deck::model::{Deck, Shape, Slide};
pub use foundation::core::{
    EMUS_PER_INCH, EMUS_PER_PT, Emu, POINTS_PER_INCH, Point, Rect, Size, TextAlign,
};
pub use foundation::error::{SlideFitError, SlideFitResult};
pub use layout::canvas::{BoxGeometry, CanvasConfig, PartitionMode};
pub use layout::geometry::{clamp_bottom, scale_to_fit};
pub use layout::pictures::{Placement, PicturePlan, layout_pictures, plan_pictures};
pub use normalize::{BoxStyle, FitDiagnostic, TitleOutcome, normalize_placeholder, normalize_title};
pub use pipeline::format::{
    DeckReport, Diagnostic, ShapeSummary, SlideReport, Threading, format_deck, format_slide,
    inventory,
};
pub use slide::element::{Element, ElementKind, TextStyle};
pub use textfit::{FitRequest, MetricTextFit, TextFit, TextFitFailure};
