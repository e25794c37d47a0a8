//! Configuration persistence for annotation styling

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::content::{LabelAlign, LabelLayer, MarkerLayer, MarkerShape};
use crate::domain::Vector;

/// Serializable color representation for config storage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Default for ShapeColor {
    fn default() -> Self {
        // Default red marker color
        Self {
            r: 0.9,
            g: 0.1,
            b: 0.1,
        }
    }
}

impl ShapeColor {
    pub const BLACK: ShapeColor = ShapeColor {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };
    pub const WHITE: ShapeColor = ShapeColor {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Convert to image crate RGBA format (0-255)
    pub fn to_rgba_u8(self) -> [u8; 4] {
        [
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            255,
        ]
    }
}

impl From<ShapeColor> for tiny_skia::Color {
    fn from(c: ShapeColor) -> Self {
        let [r, g, b, a] = c.to_rgba_u8();
        tiny_skia::Color::from_rgba8(r, g, b, a)
    }
}

/// Styling applied to annotations built through the config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationConfig {
    /// Label font size in surface units
    #[serde(default = "default_font_size")]
    pub font_size: f32,
    /// Which point of a label box sits at the anchor
    #[serde(default = "default_label_align")]
    pub label_align: LabelAlign,
    #[serde(default = "default_label_text_color")]
    pub label_text_color: ShapeColor,
    #[serde(default = "default_label_background")]
    pub label_background: ShapeColor,
    #[serde(default)]
    pub marker_shape: MarkerShape,
    #[serde(default = "default_marker_size")]
    pub marker_size: f32,
    #[serde(default)]
    pub marker_color: ShapeColor,
    /// Whether to add shadow/border to markers
    #[serde(default = "default_marker_shadow")]
    pub marker_shadow: bool,
    /// Offset applied to newly created annotations
    #[serde(default = "default_displacement")]
    pub displacement: Vector,
    /// Surface fill behind the plot area
    #[serde(default = "default_background")]
    pub background: ShapeColor,
}

fn default_font_size() -> f32 {
    12.0
}

fn default_label_align() -> LabelAlign {
    LabelAlign::BottomLeft
}

fn default_label_text_color() -> ShapeColor {
    ShapeColor::BLACK
}

fn default_label_background() -> ShapeColor {
    ShapeColor {
        r: 1.0,
        g: 0.98,
        b: 0.85,
    } // Pale yellow
}

fn default_marker_size() -> f32 {
    8.0
}

fn default_marker_shadow() -> bool {
    true
}

fn default_displacement() -> Vector {
    // Labels sit just above and to the right of their anchor
    Vector::new(6.0, -6.0)
}

fn default_background() -> ShapeColor {
    ShapeColor::WHITE
}

impl Default for AnnotationConfig {
    fn default() -> Self {
        Self {
            font_size: default_font_size(),
            label_align: default_label_align(),
            label_text_color: default_label_text_color(),
            label_background: default_label_background(),
            marker_shape: MarkerShape::Circle,
            marker_size: default_marker_size(),
            marker_color: ShapeColor::default(),
            marker_shadow: default_marker_shadow(),
            displacement: default_displacement(),
            background: default_background(),
        }
    }
}

impl AnnotationConfig {
    /// Directory name under the user config dir
    pub const ID: &'static str = "chart-annotation";

    /// Default config file location, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(Self::ID).join("config.json"))
    }

    /// Load configuration from the default location, or return defaults if unavailable
    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => {
                log::warn!("No config directory available, using defaults");
                Self::default()
            }
        }
    }

    /// Load configuration from `path`, falling back to defaults on any error
    pub fn load_from(path: &Path) -> Self {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) => {
                log::warn!("Could not read config {}, using defaults: {}", path.display(), err);
                return Self::default();
            }
        };
        match serde_json::from_str(&text) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Error parsing config {}, using defaults: {}", path.display(), err);
                Self::default()
            }
        }
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path().context("No config directory available")?;
        self.save_to(&path)
    }

    /// Save configuration to `path` as pretty JSON, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let result = (|| -> Result<()> {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            let json = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
            fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
        })();
        if let Err(err) = &result {
            log::error!("Failed to save config: {:?}", err);
        }
        result
    }

    /// A label styled from this config
    pub fn label(&self, text: impl Into<String>) -> LabelLayer {
        LabelLayer::new(text)
            .with_font_size(self.font_size)
            .with_align(self.label_align)
            .with_colors(self.label_text_color, self.label_background)
    }

    /// A marker styled from this config
    pub fn marker(&self) -> MarkerLayer {
        MarkerLayer::new(self.marker_shape, self.marker_size)
            .with_color(self.marker_color)
            .with_shadow(self.marker_shadow)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_color_to_rgba() {
        assert_eq!(ShapeColor::WHITE.to_rgba_u8(), [255, 255, 255, 255]);
        assert_eq!(ShapeColor::BLACK.to_rgba_u8(), [0, 0, 0, 255]);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = AnnotationConfig {
            font_size: 18.0,
            marker_shape: MarkerShape::Diamond,
            displacement: Vector::new(-2.0, 3.0),
            ..AnnotationConfig::default()
        };
        config.save_to(&path).unwrap();

        assert_eq!(AnnotationConfig::load_from(&path), config);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AnnotationConfig::load_from(&dir.path().join("absent.json"));
        assert_eq!(config, AnnotationConfig::default());
    }

    #[test]
    fn test_malformed_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(AnnotationConfig::load_from(&path), AnnotationConfig::default());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config: AnnotationConfig = serde_json::from_str(r#"{ "marker_size": 20.0 }"#).unwrap();
        assert_eq!(config.marker_size, 20.0);
        assert_eq!(config.font_size, default_font_size());
        assert_eq!(config.displacement, default_displacement());
        assert!(config.marker_shadow);
    }

    #[test]
    fn test_factories_apply_style() {
        let config = AnnotationConfig::default();
        let label = config.label("min");
        assert_eq!(label.font_size, config.font_size);
        assert_eq!(label.align, LabelAlign::BottomLeft);

        let marker = config.marker();
        assert_eq!(marker.size, config.marker_size);
        assert!(marker.shadow);
    }
}
