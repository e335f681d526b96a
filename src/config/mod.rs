// SPDX-License-Identifier: MPL-2.0
//! Widget configuration surface, set by the host before the first reload.
//!
//! The carousel never reacts to configuration mutation by itself: the host
//! changes fields and then issues a `Reload` message, mirroring a retained
//! UI widget's explicit refresh contract.
//!
//! The TOML load/save helpers let a host persist a carousel appearance in a
//! `carousel.toml` next to its other settings:
//!
//! ```no_run
//! use iced_carousel::config::{self, CarouselConfig};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.show_indicator = false;
//! config::save(&config).expect("failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::error::Result;
use iced::{Color, ContentFit};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "carousel.toml";
const APP_NAME: &str = "IcedCarousel";

/// How a slide image fills its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SlideFill {
    /// Scale to cover the whole cell, cropping overflow.
    #[default]
    Cover,
    /// Scale to fit inside the cell, letterboxing the remainder.
    Contain,
}

impl SlideFill {
    /// Maps the fill mode onto Iced's content-fit strategy.
    #[must_use]
    pub fn content_fit(self) -> ContentFit {
        match self {
            SlideFill::Cover => ContentFit::Cover,
            SlideFill::Contain => ContentFit::Contain,
        }
    }
}

/// An RGBA color that serializes as four floats in `[0.0, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba(pub [f32; 4]);

impl Rgba {
    pub const BLACK: Rgba = Rgba([0.0, 0.0, 0.0, 1.0]);
    pub const WHITE: Rgba = Rgba([1.0, 1.0, 1.0, 1.0]);

    /// Converts into an Iced color.
    #[must_use]
    pub fn color(self) -> Color {
        let [r, g, b, a] = self.0;
        Color { r, g, b, a }
    }

    /// The same color with its alpha channel replaced.
    #[must_use]
    pub fn with_alpha(self, alpha: f32) -> Rgba {
        let [r, g, b, _] = self.0;
        Rgba([r, g, b, alpha])
    }
}

/// Host-facing configuration for a carousel instance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CarouselConfig {
    /// Fill mode for slides in the inline widget.
    #[serde(default)]
    pub slide_fill: SlideFill,
    /// Fill mode for slides in the full-screen viewer.
    #[serde(default)]
    pub full_screen_slide_fill: SlideFill,
    /// Loading spinner color for inline slides.
    #[serde(default = "default_spinner_color")]
    pub spinner_color: Rgba,
    /// Loading spinner color for full-screen slides.
    #[serde(default = "default_full_screen_spinner_color")]
    pub full_screen_spinner_color: Rgba,
    /// Tint of inactive page-indicator dots.
    #[serde(default = "default_indicator_tint")]
    pub indicator_tint: Rgba,
    /// Tint of the active page-indicator dot.
    #[serde(default = "default_indicator_active_tint")]
    pub indicator_active_tint: Rgba,
    /// Whether the inline widget shows its page indicator at all.
    #[serde(default = "default_true")]
    pub show_indicator: bool,
    /// Whether tapping a slide opens the full-screen viewer.
    ///
    /// When false, slide presses are silently ignored, like the original
    /// widget without a presenting controller.
    #[serde(default)]
    pub enable_full_screen: bool,
    /// Image for the full-screen back button. `None` hides the back
    /// affordance entirely.
    #[serde(default)]
    pub back_button_icon: Option<PathBuf>,
}

fn default_true() -> bool {
    true
}

fn default_spinner_color() -> Rgba {
    Rgba::BLACK
}

fn default_full_screen_spinner_color() -> Rgba {
    Rgba::WHITE
}

fn default_indicator_tint() -> Rgba {
    Rgba([1.0, 1.0, 1.0, 0.4])
}

fn default_indicator_active_tint() -> Rgba {
    Rgba::WHITE
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            slide_fill: SlideFill::Cover,
            full_screen_slide_fill: SlideFill::Cover,
            spinner_color: default_spinner_color(),
            full_screen_spinner_color: default_full_screen_spinner_color(),
            indicator_tint: default_indicator_tint(),
            indicator_active_tint: default_indicator_active_tint(),
            show_indicator: true,
            enable_full_screen: false,
            back_button_icon: None,
        }
    }
}

impl CarouselConfig {
    /// Derives the configuration used by the nested carousel inside the
    /// full-screen viewer: full-screen fill and spinner colors, its own
    /// indicator always suppressed (the overlay draws a top-level one),
    /// and no nested full-screen.
    #[must_use]
    pub fn for_full_screen(&self) -> CarouselConfig {
        CarouselConfig {
            slide_fill: self.full_screen_slide_fill,
            spinner_color: self.full_screen_spinner_color,
            show_indicator: false,
            enable_full_screen: false,
            ..self.clone()
        }
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<CarouselConfig> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(CarouselConfig::default())
}

pub fn save(config: &CarouselConfig) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<CarouselConfig> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &CarouselConfig, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_matches_original_widget_defaults() {
        let config = CarouselConfig::default();
        assert_eq!(config.slide_fill, SlideFill::Cover);
        assert_eq!(config.spinner_color, Rgba::BLACK);
        assert_eq!(config.full_screen_spinner_color, Rgba::WHITE);
        assert!(config.show_indicator);
        assert!(!config.enable_full_screen);
        assert!(config.back_button_icon.is_none());
    }

    #[test]
    fn full_screen_config_suppresses_nested_chrome() {
        let config = CarouselConfig {
            full_screen_slide_fill: SlideFill::Contain,
            enable_full_screen: true,
            ..CarouselConfig::default()
        };

        let nested = config.for_full_screen();
        assert_eq!(nested.slide_fill, SlideFill::Contain);
        assert_eq!(nested.spinner_color, Rgba::WHITE);
        assert!(!nested.show_indicator);
        assert!(!nested.enable_full_screen);
    }

    #[test]
    fn save_and_load_round_trip_preserves_fields() {
        let config = CarouselConfig {
            slide_fill: SlideFill::Contain,
            show_indicator: false,
            enable_full_screen: true,
            back_button_icon: Some(PathBuf::from("back.png")),
            ..CarouselConfig::default()
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("carousel.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded.slide_fill, SlideFill::Contain);
        assert!(!loaded.show_indicator);
        assert!(loaded.enable_full_screen);
        assert_eq!(loaded.back_button_icon, Some(PathBuf::from("back.png")));
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("carousel.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.show_indicator);
    }

    #[test]
    fn rgba_converts_to_iced_color() {
        let color = Rgba([0.25, 0.5, 0.75, 1.0]).color();
        assert_eq!(color.r, 0.25);
        assert_eq!(color.g, 0.5);
        assert_eq!(color.b, 0.75);
    }

    #[test]
    fn with_alpha_keeps_channels() {
        let faded = Rgba::WHITE.with_alpha(0.4);
        assert_eq!(faded.0, [1.0, 1.0, 1.0, 0.4]);
    }
}
