use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use reel::app_dirs;
use reel::logging::DEFAULT_LEVEL;
use reel::tui::theme;
use reel::SlideSpec;
use reel_core::{CarouselOptions, DEFAULT_INTERVAL, MAX_FILL_DELAY, MAX_INTERVAL};
use serde::Deserialize;

use super::resolved::{ConfigError, ResolvedConfig, SettingSource};
use crate::cli::CliArgs;

const DEFAULT_ASSETS_DIR: &str = "assets";

/// Mirror of the configuration file before CLI overrides and validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    pub(super) carousel: CarouselSection,
    pub(super) slides: SlidesSection,
    pub(super) ui: UiSection,
    pub(super) logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct CarouselSection {
    pub(super) interval_secs: Option<u64>,
    pub(super) fill_delay_ms: Option<u64>,
    pub(super) animate: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct SlidesSection {
    pub(super) assets_dir: Option<PathBuf>,
    /// Entries in `NAME` or `TITLE=NAME` form.
    pub(super) items: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
    pub(super) theme: Option<String>,
    pub(super) direct: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
    pub(super) level: Option<String>,
    pub(super) file: Option<PathBuf>,
}

impl RawConfig {
    /// Apply CLI overrides on top of the raw configuration values.
    ///
    /// Positional slides are kept on `cli` and picked up by [`Self::resolve`].
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(dir) = &cli.assets {
            self.slides.assets_dir = Some(dir.clone());
        }
        if let Some(secs) = cli.interval {
            self.carousel.interval_secs = Some(secs);
        }
        if let Some(theme) = &cli.theme {
            self.ui.theme = Some(theme.clone());
        }
        if cli.direct {
            self.ui.direct = Some(true);
        }
        if let Some(level) = &cli.log_level {
            self.logging.level = Some(level.clone());
        }
        if let Some(file) = &cli.log_file {
            self.logging.file = Some(file.clone());
        }
    }

    /// Validate and fill defaults, producing a [`ResolvedConfig`].
    pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
        let interval_secs = self
            .carousel
            .interval_secs
            .unwrap_or(DEFAULT_INTERVAL.as_secs());
        if interval_secs == 0 || interval_secs > MAX_INTERVAL.as_secs() {
            let origin = detect_source(
                cli.interval.is_some(),
                "REEL__CAROUSEL__INTERVAL_SECS",
                "--interval",
                "carousel.interval_secs",
            );
            let reason = if interval_secs == 0 {
                "must be greater than zero".to_string()
            } else {
                format!("must not exceed {} seconds", MAX_INTERVAL.as_secs())
            };
            return Err(ConfigError::invalid(
                "carousel.interval_secs",
                interval_secs.to_string(),
                origin,
                reason,
            )
            .into());
        }

        let defaults = CarouselOptions::default();
        let fill_delay = self
            .carousel
            .fill_delay_ms
            .map_or(defaults.fill_delay, Duration::from_millis);
        if fill_delay > MAX_FILL_DELAY {
            let origin = detect_source(
                false,
                "REEL__CAROUSEL__FILL_DELAY_MS",
                "",
                "carousel.fill_delay_ms",
            );
            return Err(ConfigError::invalid(
                "carousel.fill_delay_ms",
                fill_delay.as_millis().to_string(),
                origin,
                format!("must not exceed {} milliseconds", MAX_FILL_DELAY.as_millis()),
            )
            .into());
        }

        let carousel = CarouselOptions {
            interval: Duration::from_secs(interval_secs),
            fill_delay,
            animated: self.carousel.animate.unwrap_or(defaults.animated),
            ..defaults
        };

        let slides = if cli.items.is_empty() {
            match self.slides.items {
                Some(items) => parse_items(&items)?,
                None => SlideSpec::showcase(),
            }
        } else {
            cli.items.clone()
        };
        if slides.is_empty() {
            bail!("slides.items must name at least one slide");
        }

        let theme_name = self
            .ui
            .theme
            .unwrap_or_else(|| theme::DEFAULT_THEME_NAME.to_string());
        let Some(theme) = theme::by_name(&theme_name) else {
            bail!(
                "unknown theme '{theme_name}' (available: {})",
                theme::names().join(", ")
            );
        };

        let assets_dir = absolutize(
            self.slides
                .assets_dir
                .unwrap_or_else(|| PathBuf::from(DEFAULT_ASSETS_DIR)),
        )?;
        let log_file = match self.logging.file {
            Some(file) => absolutize(file)?,
            None => app_dirs::default_log_file()?,
        };

        Ok(ResolvedConfig {
            slides,
            assets_dir,
            carousel,
            theme_name,
            theme,
            direct: self.ui.direct.unwrap_or(false),
            log_level: self
                .logging
                .level
                .unwrap_or_else(|| DEFAULT_LEVEL.to_string()),
            log_file,
        })
    }
}

fn parse_items(items: &[String]) -> Result<Vec<SlideSpec>> {
    items
        .iter()
        .filter(|item| !item.trim().is_empty())
        .map(|item| {
            item.parse::<SlideSpec>()
                .with_context(|| format!("invalid entry '{item}' in slides.items"))
        })
        .collect()
}

fn absolutize(path: PathBuf) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path);
    }
    let cwd = env::current_dir().context("failed to read the current directory")?;
    Ok(cwd.join(path))
}

fn detect_source(
    cli_present: bool,
    env_var: &'static str,
    cli_flag: &'static str,
    key: &'static str,
) -> SettingSource {
    if cli_present {
        return SettingSource::CliFlag(cli_flag);
    }
    if env::var_os(env_var).is_some() {
        return SettingSource::Environment(env_var);
    }
    SettingSource::ConfigKey(key)
}
