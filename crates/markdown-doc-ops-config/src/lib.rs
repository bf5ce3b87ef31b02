//! # Backend profiles
//!
//! Every number in the converter that depends on how the target document
//! backend lays out its content lives here rather than inline in the
//! arithmetic. The `Default` profile describes the reference backend; a
//! different backend needs its own values, verified against that backend.
//!
//! Profiles are TOML files. Every section and key is optional, missing values
//! fall back to the reference profile:
//!
//! ```toml
//! [table]
//! cell_offset = 3
//!
//! [blockquote]
//! indent_unit_pt = 36.0
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read profile at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse profile at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// An RGB color with channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
}

impl Rgb {
    pub const fn gray(level: f32) -> Self {
        Self {
            red: level,
            green: level,
            blue: level,
        }
    }
}

/// Relative offsets of a freshly inserted table grid.
///
/// A table of `R` rows and `C` columns inserted at `start` occupies
/// `frame_overhead + R * (cell_stride * C + row_overhead)` units, and the
/// first content position of cell `(r, c)` is
/// `start + cell_offset + r * (cell_stride * C + row_overhead) + c * cell_stride`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableGeometry {
    /// Distance from the insertion index to the first cell's content.
    /// Measured empirically, it cannot be derived from the grid size.
    pub cell_offset: usize,
    /// Units consumed by one empty cell.
    pub cell_stride: usize,
    /// Units consumed by a row on top of its cells.
    pub row_overhead: usize,
    /// Units consumed by the table on top of its rows.
    pub frame_overhead: usize,
}

impl Default for TableGeometry {
    fn default() -> Self {
        Self {
            cell_offset: 3,
            cell_stride: 2,
            row_overhead: 1,
            frame_overhead: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlockquoteStyle {
    /// Indent per nesting level, applied to both start and first-line indent.
    pub indent_unit_pt: f64,
    pub border_width_pt: f64,
    pub border_padding_pt: f64,
    pub border_color: Rgb,
}

impl Default for BlockquoteStyle {
    fn default() -> Self {
        Self {
            indent_unit_pt: 36.0,
            border_width_pt: 3.0,
            border_padding_pt: 12.0,
            border_color: Rgb::gray(0.8),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodeStyle {
    pub font_family: String,
    /// Background of fenced and indented blocks. Inline code has none.
    pub block_background: Rgb,
}

impl Default for CodeStyle {
    fn default() -> Self {
        Self {
            font_family: "Courier New".to_string(),
            block_background: Rgb::gray(0.95),
        }
    }
}

/// Bottom border standing in for a horizontal rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleStyle {
    pub width_pt: f64,
    pub padding_pt: f64,
    pub color: Rgb,
}

impl Default for RuleStyle {
    fn default() -> Self {
        Self {
            width_pt: 1.0,
            padding_pt: 6.0,
            color: Rgb::gray(0.75),
        }
    }
}

/// Size requested for inline images. Markdown carries no image size, so
/// this is the only source of one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageDefaults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width_pt: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_pt: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendProfile {
    pub table: TableGeometry,
    pub blockquote: BlockquoteStyle,
    pub code: CodeStyle,
    pub rule: RuleStyle,
    pub image: ImageDefaults,
}

impl BackendProfile {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let profile: BackendProfile =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(profile))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/markdown-doc-ops");
        PathBuf::from(config_dir.as_ref()).join("profile.toml")
    }
}
