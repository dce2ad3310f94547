use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use reel_core::CarouselOptions;
use thiserror::Error;

use crate::tui::theme::Theme;

/// Slides shown when neither the command line nor a config file names any.
pub const SHOWCASE_SLIDES: &[(&str, &str)] = &[
    ("Homelander", "butcher"),
    ("Maeve", "maeve"),
    ("Black Noir", "hughei"),
    ("A-Train", "atrain"),
];

/// Errors produced when parsing a [`SlideSpec`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlideSpecError {
    #[error("slide entry is empty")]
    Empty,
    #[error("slide '{0}' has an empty image name")]
    MissingImage(String),
}

/// One slide as described by the user: a caption and an image resource name.
///
/// Parsed from `NAME` (caption defaults to the name) or `TITLE=NAME`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideSpec {
    pub title: String,
    pub image: String,
}

impl SlideSpec {
    #[must_use]
    pub fn new(title: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            image: image.into(),
        }
    }

    /// The default showcase line-up.
    #[must_use]
    pub fn showcase() -> Vec<Self> {
        SHOWCASE_SLIDES
            .iter()
            .map(|(title, image)| Self::new(*title, *image))
            .collect()
    }
}

impl FromStr for SlideSpec {
    type Err = SlideSpecError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.is_empty() {
            return Err(SlideSpecError::Empty);
        }
        match value.split_once('=') {
            Some((title, image)) => {
                let (title, image) = (title.trim(), image.trim());
                if image.is_empty() {
                    return Err(SlideSpecError::MissingImage(title.to_string()));
                }
                let title = if title.is_empty() { image } else { title };
                Ok(Self::new(title, image))
            }
            None => Ok(Self::new(value, value)),
        }
    }
}

impl fmt::Display for SlideSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.title == self.image {
            write!(f, "{}", self.image)
        } else {
            write!(f, "{}={}", self.title, self.image)
        }
    }
}

/// Everything the terminal showcase needs to run.
#[derive(Debug, Clone)]
pub struct ShowcaseConfig {
    pub slides: Vec<SlideSpec>,
    /// Directory image resources are looked up in.
    pub assets_dir: PathBuf,
    pub carousel: CarouselOptions,
    pub theme: Theme,
    /// Open the carousel immediately and exit once it is dismissed.
    pub direct: bool,
}

impl ShowcaseConfig {
    #[must_use]
    pub fn new(slides: Vec<SlideSpec>, assets_dir: impl Into<PathBuf>) -> Self {
        Self {
            slides,
            assets_dir: assets_dir.into(),
            carousel: CarouselOptions::default(),
            theme: Theme::default(),
            direct: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_name_is_its_own_title() {
        let spec: SlideSpec = "butcher".parse().expect("parses");
        assert_eq!(spec, SlideSpec::new("butcher", "butcher"));
        assert_eq!(spec.to_string(), "butcher");
    }

    #[test]
    fn title_and_image_split_on_equals() {
        let spec: SlideSpec = " Black Noir = hughei ".parse().expect("parses");
        assert_eq!(spec, SlideSpec::new("Black Noir", "hughei"));
        assert_eq!(spec.to_string(), "Black Noir=hughei");
    }

    #[test]
    fn empty_title_falls_back_to_image() {
        let spec: SlideSpec = "=maeve".parse().expect("parses");
        assert_eq!(spec.title, "maeve");
    }

    #[test]
    fn rejects_empty_specs() {
        assert_eq!("  ".parse::<SlideSpec>(), Err(SlideSpecError::Empty));
        assert_eq!(
            "A-Train=".parse::<SlideSpec>(),
            Err(SlideSpecError::MissingImage("A-Train".to_string()))
        );
    }

    #[test]
    fn showcase_has_four_slides() {
        let slides = SlideSpec::showcase();
        assert_eq!(slides.len(), 4);
        assert_eq!(slides[2], SlideSpec::new("Black Noir", "hughei"));
    }
}
