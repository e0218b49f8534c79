use crate::foundation::core::{Point, Rect, Size, TextAlign};

/// Role of an element on a slide.
///
/// Classification is supplied by the caller (see [`crate::classify_shape`]);
/// the layout engine never derives it from geometry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// Slide title placeholder.
    Title,
    /// Picture stacked by the region layout engine.
    PictureShape,
    /// Text box reset to the fixed placeholder rectangle.
    PlaceholderTextBox,
    /// Anything else; never touched.
    Other,
}

/// Font settings applied when text is fitted into a box.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextStyle {
    /// Paragraph alignment.
    #[serde(default)]
    pub align: TextAlign,
    /// Font family, if one was chosen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Font size in points, if one was chosen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size_pt: Option<f64>,
    /// Bold weight.
    #[serde(default)]
    pub bold: bool,
}

/// A rectangular visual item on a slide, in inches.
///
/// `left`/`top` are measured from the canvas's top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    /// Shape identifier from the document, used in diagnostics.
    pub id: u32,
    /// Caller-supplied role.
    pub kind: ElementKind,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    /// Text content. `None` means the element has no text frame at all.
    pub text: Option<String>,
    pub style: TextStyle,
}

impl Element {
    /// Create an element with no text frame.
    pub fn new(id: u32, kind: ElementKind, left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            id,
            kind,
            left,
            top,
            width,
            height,
            text: None,
            style: TextStyle::default(),
        }
    }

    /// Attach text content.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// `width / height`, derived from the current geometry every time.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn frame(&self) -> Rect {
        Rect::from_origin_size(Point::new(self.left, self.top), self.size())
    }

    /// Overwrite position and size in one step.
    pub fn set_frame(&mut self, origin: Point, size: Size) {
        self.left = origin.x;
        self.top = origin.y;
        self.width = size.width;
        self.height = size.height;
    }

    pub fn has_text_frame(&self) -> bool {
        self.text.is_some()
    }
}
