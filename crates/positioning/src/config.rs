//! Positioning configuration
//!
//! Per-component placement defaults and the repositioning frame budget,
//! persisted as camelCase JSON. A missing or unreadable file falls back
//! to the built-in presets.

use geometry::{Alignment, PreferredSide};
use serde::{Deserialize, Deserializer, Serialize};
use std::io::ErrorKind;
use std::path::Path;

use crate::{FloatingKind, PlacementRequest, Result};

/// Frame budget for one recomputation at 60fps
pub const DEFAULT_FRAME_BUDGET_MS: f64 = 16.0;

/// Positioning settings container
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PositioningConfig {
    /// Placement used by tooltips
    #[serde(deserialize_with = "tooltip_request")]
    pub tooltip: PlacementRequest,
    /// Placement used by dropdown panels
    #[serde(deserialize_with = "dropdown_request")]
    pub dropdown: PlacementRequest,
    /// Placement used by select menus
    #[serde(deserialize_with = "select_request")]
    pub select: PlacementRequest,
    /// Tooltip arrow size in pixels
    pub arrow_size: f64,
    /// Recomputations slower than this are logged
    pub frame_budget_ms: f64,
}

impl Default for PositioningConfig {
    fn default() -> Self {
        Self {
            tooltip: FloatingKind::Tooltip.default_request(),
            dropdown: FloatingKind::Dropdown.default_request(),
            select: FloatingKind::Select.default_request(),
            arrow_size: FloatingKind::Tooltip.arrow_size().unwrap_or_default(),
            frame_budget_ms: DEFAULT_FRAME_BUDGET_MS,
        }
    }
}

/// Per-kind request as written in the file; absent fields keep the preset
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RequestOverride {
    preferred_side: Option<PreferredSide>,
    alignment: Option<Alignment>,
    offset: Option<f64>,
    boundary_padding: Option<f64>,
    flip_alignment: Option<bool>,
}

impl RequestOverride {
    fn apply(self, base: PlacementRequest) -> PlacementRequest {
        PlacementRequest {
            preferred_side: self.preferred_side.unwrap_or(base.preferred_side),
            alignment: self.alignment.unwrap_or(base.alignment),
            offset: self.offset.unwrap_or(base.offset),
            boundary_padding: self.boundary_padding.unwrap_or(base.boundary_padding),
            flip_alignment: self.flip_alignment.unwrap_or(base.flip_alignment),
        }
    }
}

fn request_over_preset<'de, D>(
    deserializer: D,
    kind: FloatingKind,
) -> std::result::Result<PlacementRequest, D::Error>
where
    D: Deserializer<'de>,
{
    let overrides = RequestOverride::deserialize(deserializer)?;
    Ok(overrides.apply(kind.default_request()))
}

fn tooltip_request<'de, D>(deserializer: D) -> std::result::Result<PlacementRequest, D::Error>
where
    D: Deserializer<'de>,
{
    request_over_preset(deserializer, FloatingKind::Tooltip)
}

fn dropdown_request<'de, D>(deserializer: D) -> std::result::Result<PlacementRequest, D::Error>
where
    D: Deserializer<'de>,
{
    request_over_preset(deserializer, FloatingKind::Dropdown)
}

fn select_request<'de, D>(deserializer: D) -> std::result::Result<PlacementRequest, D::Error>
where
    D: Deserializer<'de>,
{
    request_over_preset(deserializer, FloatingKind::Select)
}

impl PositioningConfig {
    /// The configured request for a component kind
    pub fn request_for(&self, kind: FloatingKind) -> PlacementRequest {
        match kind {
            FloatingKind::Tooltip => self.tooltip,
            FloatingKind::Dropdown => self.dropdown,
            FloatingKind::Select => self.select,
        }
    }

    /// Arrow size for a component kind, `None` when it draws no arrow
    pub fn arrow_size_for(&self, kind: FloatingKind) -> Option<f64> {
        kind.arrow_size().map(|_| self.arrow_size)
    }

    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No positioning config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str::<PositioningConfig>(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!(
                    "Failed to parse positioning config {}, using defaults: {}",
                    path.display(),
                    e
                );
                Ok(Self::default())
            }
        }
    }

    /// Save settings to disk
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_follow_presets() {
        let config = PositioningConfig::default();
        for kind in FloatingKind::ALL {
            assert_eq!(config.request_for(kind), kind.default_request());
        }
        assert_eq!(config.frame_budget_ms, 16.0);
        assert_eq!(config.arrow_size_for(FloatingKind::Tooltip), Some(8.0));
        assert_eq!(config.arrow_size_for(FloatingKind::Select), None);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = PositioningConfig::load(dir.path().join("positioning.json")).unwrap();
        assert_eq!(config, PositioningConfig::default());
    }

    #[test]
    fn test_malformed_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("positioning.json");
        std::fs::write(&path, "{ not json").unwrap();

        let config = PositioningConfig::load(&path).unwrap();
        assert_eq!(config, PositioningConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("positioning.json");
        std::fs::write(
            &path,
            r#"{"dropdown":{"preferredSide":"auto","alignment":"end"},"frameBudgetMs":8}"#,
        )
        .unwrap();

        let config = PositioningConfig::load(&path).unwrap();
        let dropdown = config.request_for(FloatingKind::Dropdown);
        assert_eq!(dropdown.preferred_side, PreferredSide::Auto);
        assert_eq!(dropdown.alignment, Alignment::End);
        assert_eq!(config.frame_budget_ms, 8.0);
        assert_eq!(config.tooltip, FloatingKind::Tooltip.default_request());
    }

    #[test]
    fn test_partial_override_keeps_preset_spacing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("positioning.json");
        std::fs::write(
            &path,
            r#"{"dropdown":{"preferredSide":"auto"},"tooltip":{"offset":12}}"#,
        )
        .unwrap();

        let config = PositioningConfig::load(&path).unwrap();
        let dropdown = config.request_for(FloatingKind::Dropdown);
        assert_eq!(dropdown.preferred_side, PreferredSide::Auto);
        assert_eq!(dropdown.alignment, Alignment::Start);
        assert_eq!(dropdown.offset, 4.0);
        assert_eq!(dropdown.boundary_padding, 8.0);

        let tooltip = config.request_for(FloatingKind::Tooltip);
        assert_eq!(tooltip.offset, 12.0);
        assert_eq!(tooltip.boundary_padding, 8.0);
        assert_eq!(tooltip.preferred_side, PreferredSide::Top);
    }

    #[test]
    fn test_save_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("positioning.json");

        let mut config = PositioningConfig::default();
        config.tooltip = config.tooltip.with_padding(24.0);
        config.save(&path).unwrap();

        let loaded = PositioningConfig::load(&path).unwrap();
        assert_eq!(loaded.tooltip.boundary_padding, 24.0);
    }

    #[test]
    fn test_directory_path_is_an_error() {
        let dir = TempDir::new().unwrap();
        assert!(PositioningConfig::load(dir.path()).is_err());
    }
}
