use std::path::PathBuf;

use reel::{ShowcaseConfig, SlideSpec, Theme};
use reel_core::CarouselOptions;

mod errors;
mod summary;

pub(crate) use errors::{ConfigError, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub slides: Vec<SlideSpec>,
    pub assets_dir: PathBuf,
    pub carousel: CarouselOptions,
    pub theme_name: String,
    pub theme: Theme,
    pub direct: bool,
    pub log_level: String,
    pub log_file: PathBuf,
}

impl ResolvedConfig {
    /// The subset of the configuration the terminal UI consumes.
    pub fn showcase(&self) -> ShowcaseConfig {
        let mut config = ShowcaseConfig::new(self.slides.clone(), self.assets_dir.clone());
        config.carousel = self.carousel;
        config.theme = self.theme;
        config.direct = self.direct;
        config
    }

    /// Print a human readable summary of the effective configuration.
    pub fn print_summary(&self) {
        summary::print_summary(self);
    }
}
