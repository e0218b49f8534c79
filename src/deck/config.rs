use std::{fs::File, io::BufReader, path::Path};

use crate::{
    foundation::error::{SlideFitError, SlideFitResult},
    layout::canvas::CanvasConfig,
    normalize::BoxStyle,
};

/// Which slides and shapes a formatting pass touches.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DeckPolicy {
    /// First slide (1-based) whose pictures are laid out.
    pub picture_start_slide: usize,
    /// Slide titles whose pictures are left alone.
    pub skip_picture_titles: Vec<String>,
    /// Exact text that marks a text box as a section placeholder.
    pub section_marker: String,
    /// First slide (1-based) whose title is normalized.
    pub title_from_slide: usize,
}

impl Default for DeckPolicy {
    fn default() -> Self {
        Self {
            picture_start_slide: 7,
            skip_picture_titles: vec!["Legends".to_string()],
            section_marker: "<change layout for title slide>".to_string(),
            title_from_slide: 2,
        }
    }
}

impl DeckPolicy {
    /// Whether pictures on slide `index` (1-based) with title `title` are laid out.
    pub fn lays_out_pictures(&self, index: usize, title: Option<&str>) -> bool {
        if index < self.picture_start_slide {
            return false;
        }
        match title {
            Some(t) => !self.skip_picture_titles.iter().any(|s| s == t),
            None => true,
        }
    }
}

/// Complete configuration for one formatting run.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FormatConfig {
    #[serde(default)]
    pub canvas: CanvasConfig,
    #[serde(default = "BoxStyle::title")]
    pub title: BoxStyle,
    #[serde(default = "BoxStyle::placeholder")]
    pub placeholder: BoxStyle,
    #[serde(default)]
    pub policy: DeckPolicy,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            title: BoxStyle::title(),
            placeholder: BoxStyle::placeholder(),
            policy: DeckPolicy::default(),
        }
    }
}

impl FormatConfig {
    /// Parse a configuration from a JSON reader. Missing sections take defaults.
    pub fn from_reader<R: std::io::Read>(r: R) -> SlideFitResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| SlideFitError::serde(format!("parse format config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse a configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> SlideFitResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            SlideFitError::validation(format!("open format config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Validate canvas geometry, box styles and policy.
    pub fn validate(&self) -> SlideFitResult<()> {
        self.canvas.validate()?;
        self.title.validate("title")?;
        self.placeholder.validate("placeholder")?;
        if self.policy.picture_start_slide == 0 {
            return Err(SlideFitError::validation(
                "policy picture_start_slide must be >= 1 (slides are 1-based)",
            ));
        }
        if self.policy.title_from_slide == 0 {
            return Err(SlideFitError::validation(
                "policy title_from_slide must be >= 1 (slides are 1-based)",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/deck/config.rs"]
mod tests;
