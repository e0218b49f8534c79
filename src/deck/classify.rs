use crate::{deck::config::DeckPolicy, deck::model::Shape, slide::element::ElementKind};

/// Shape type code for a picture.
pub const SHAPE_TYPE_PICTURE: u32 = 13;
/// Shape type code for a placeholder (titles are placeholders).
pub const SHAPE_TYPE_PLACEHOLDER: u32 = 14;
/// Shape type code for a free-standing text box.
pub const SHAPE_TYPE_TEXT_BOX: u32 = 17;

/// Per-slide facts needed to classify its shapes.
#[derive(Clone, Copy, Debug)]
pub struct SlideContext<'a> {
    /// 1-based slide position in the deck.
    pub index: usize,
    /// Text of the slide's title placeholder, if any.
    pub title: Option<&'a str>,
}

/// Assign a layout role to a document shape.
pub fn classify_shape(shape: &Shape, ctx: SlideContext<'_>, policy: &DeckPolicy) -> ElementKind {
    match shape.shape_type {
        SHAPE_TYPE_PICTURE => ElementKind::PictureShape,
        SHAPE_TYPE_PLACEHOLDER
            if ctx.index >= policy.title_from_slide
                && ctx.title.is_some()
                && shape.text.as_deref() == ctx.title =>
        {
            ElementKind::Title
        }
        SHAPE_TYPE_TEXT_BOX if shape.text.as_deref() == Some(policy.section_marker.as_str()) => {
            ElementKind::PlaceholderTextBox
        }
        _ => ElementKind::Other,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/deck/classify.rs"]
mod tests;
