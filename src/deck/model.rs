use std::{collections::BTreeSet, fs::File, io::BufReader, path::Path};

use crate::{
    deck::classify::{SlideContext, classify_shape},
    deck::config::DeckPolicy,
    foundation::core::Emu,
    foundation::error::{SlideFitError, SlideFitResult},
    slide::element::{Element, ElementKind, TextStyle},
};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// A slide deck as persisted on disk.
///
/// Geometry is stored in EMU; the layout core works in inches and sees the
/// deck only through [`Slide::elements`] and [`Slide::apply`].
pub struct Deck {
    /// Slides in presentation order.
    pub slides: Vec<Slide>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// One slide: an ordered list of shapes (back to front).
pub struct Slide {
    #[serde(default)]
    pub shapes: Vec<Shape>,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A shape with its document-level type code and geometry.
pub struct Shape {
    /// Shape identifier, unique within its slide.
    pub id: u32,
    /// Authoring name.
    #[serde(default)]
    pub name: String,
    /// Container shape type code (13 picture, 14 placeholder, 17 text box, ...).
    pub shape_type: u32,
    /// Marks the slide's title placeholder.
    #[serde(default)]
    pub is_title: bool,
    pub left: Emu,
    pub top: Emu,
    pub width: Emu,
    pub height: Emu,
    /// Text content; absent when the shape has no text frame.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default)]
    pub style: TextStyle,
}

impl Deck {
    /// Parse a deck from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> SlideFitResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| SlideFitError::serde(format!("parse deck JSON: {e}")))
    }

    /// Parse a deck from a JSON string.
    pub fn from_json_str(s: &str) -> SlideFitResult<Self> {
        serde_json::from_str(s).map_err(|e| SlideFitError::serde(format!("parse deck JSON: {e}")))
    }

    /// Parse a deck from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SlideFitResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SlideFitError::validation(format!("open deck JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_string_pretty(&self) -> SlideFitResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| SlideFitError::serde(format!("serialize deck JSON: {e}")))
    }

    /// Write pretty-printed JSON to `path`, replacing any existing file.
    pub fn write_path(&self, path: impl AsRef<Path>) -> SlideFitResult<()> {
        let path = path.as_ref();
        let json = self.to_json_string_pretty()?;
        std::fs::write(path, json).map_err(|e| {
            SlideFitError::Other(anyhow::anyhow!("write deck JSON '{}': {e}", path.display()))
        })
    }

    /// Validate per-slide shape ids and geometry.
    pub fn validate(&self) -> SlideFitResult<()> {
        for (idx, slide) in self.slides.iter().enumerate() {
            let mut seen = BTreeSet::new();
            for shape in &slide.shapes {
                if !seen.insert(shape.id) {
                    return Err(SlideFitError::validation(format!(
                        "slide {} has duplicate shape id {}",
                        idx + 1,
                        shape.id
                    )));
                }
                if shape.width.0 < 0 || shape.height.0 < 0 {
                    return Err(SlideFitError::validation(format!(
                        "slide {} shape {} has negative size",
                        idx + 1,
                        shape.id
                    )));
                }
            }
        }
        Ok(())
    }
}

impl Slide {
    /// Text of the first shape flagged as the title placeholder.
    pub fn title_text(&self) -> Option<&str> {
        self.shapes
            .iter()
            .find(|s| s.is_title)
            .and_then(|s| s.text.as_deref())
    }

    /// Convert shapes into classified layout elements (inches), in shape order.
    pub fn elements(&self, index: usize, policy: &DeckPolicy) -> Vec<Element> {
        let ctx = SlideContext {
            index,
            title: self.title_text(),
        };
        self.shapes
            .iter()
            .map(|shape| Element {
                id: shape.id,
                kind: classify_shape(shape, ctx, policy),
                left: shape.left.inches(),
                top: shape.top.inches(),
                width: shape.width.inches(),
                height: shape.height.inches(),
                text: shape.text.clone(),
                style: shape.style.clone(),
            })
            .collect()
    }

    /// Persist geometry, text and style of classified elements back to shapes.
    ///
    /// `elements` must come from [`Slide::elements`] on this slide. Elements
    /// classified as [`ElementKind::Other`] are never written.
    pub fn apply(&mut self, elements: &[Element]) -> SlideFitResult<()> {
        if elements.len() != self.shapes.len() {
            return Err(SlideFitError::validation(format!(
                "cannot apply {} elements to a slide with {} shapes",
                elements.len(),
                self.shapes.len()
            )));
        }
        if let Some((shape, element)) = self
            .shapes
            .iter()
            .zip(elements)
            .find(|(shape, element)| shape.id != element.id)
        {
            return Err(SlideFitError::validation(format!(
                "element {} does not match shape {}",
                element.id, shape.id
            )));
        }
        for (shape, element) in self.shapes.iter_mut().zip(elements) {
            if element.kind == ElementKind::Other {
                continue;
            }
            shape.left = Emu::from_inches(element.left);
            shape.top = Emu::from_inches(element.top);
            shape.width = Emu::from_inches(element.width);
            shape.height = Emu::from_inches(element.height);
            shape.text = element.text.clone();
            shape.style = element.style.clone();
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/deck/model.rs"]
mod tests;
