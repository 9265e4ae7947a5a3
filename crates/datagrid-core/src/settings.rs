//! Grid display settings with JSON persistence

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use chrono::format::StrftimeItems;
use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSettings {
    /// Rows per page
    pub page_size: usize,
    /// Page sizes offered by the pagination control
    pub page_size_options: Vec<usize>,
    /// `chrono` format string for dates shown in filter chips
    pub date_display_format: String,
    /// Placeholder of the toolbar search input
    pub search_placeholder: String,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            page_size: 10,
            page_size_options: vec![10, 20, 30, 40, 50],
            date_display_format: "%m/%d/%Y".to_string(),
            search_placeholder: "Search...".to_string(),
        }
    }
}

impl GridSettings {
    /// Load settings from `path`, falling back to defaults when it does not exist
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&content)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// `<config dir>/datagrid/settings.json`
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            GridError::Configuration("Could not find config directory".to_string())
        })?;
        Ok(config_dir.join("datagrid").join("settings.json"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(GridError::Configuration(
                "page_size must be greater than zero".to_string(),
            ));
        }
        if self.page_size_options.contains(&0) {
            return Err(GridError::Configuration(
                "page_size_options must not contain zero".to_string(),
            ));
        }
        if !is_valid_date_format(&self.date_display_format) {
            return Err(GridError::Configuration(format!(
                "invalid date_display_format `{}`",
                self.date_display_format
            )));
        }
        Ok(())
    }
}

/// Whether `format` can render a calendar date. Time and offset specifiers
/// such as `%H` or `%z` parse but fail on a date without a time.
pub fn is_valid_date_format(format: &str) -> bool {
    if format.is_empty() {
        return false;
    }
    let mut rendered = String::new();
    write!(
        rendered,
        "{}",
        NaiveDate::default().format_with_items(StrftimeItems::new(format))
    )
    .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = GridSettings::load(&dir.path().join("settings.json")).unwrap();
        assert_eq!(settings, GridSettings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = GridSettings {
            page_size: 25,
            date_display_format: "%Y-%m-%d".to_string(),
            ..Default::default()
        };
        settings.save(&path).unwrap();

        assert_eq!(GridSettings::load(&path).unwrap(), settings);
    }

    #[test]
    fn test_partial_file_uses_defaults_for_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"page_size": 5}"#).unwrap();

        let settings = GridSettings::load(&path).unwrap();
        assert_eq!(settings.page_size, 5);
        assert_eq!(settings.search_placeholder, "Search...");
    }

    #[test]
    fn test_zero_page_size_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"page_size": 0}"#).unwrap();

        assert!(matches!(
            GridSettings::load(&path),
            Err(GridError::Configuration(_))
        ));
    }

    #[test]
    fn test_bad_date_format_is_rejected() {
        assert!(is_valid_date_format("%m/%d/%Y"));
        assert!(!is_valid_date_format("%Q"));
        assert!(!is_valid_date_format(""));
        assert!(is_valid_date_format("%d %B %Y"));

        let settings = GridSettings {
            date_display_format: "%Q".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(GridError::Configuration(_))
        ));
    }

    #[test]
    fn test_time_specifiers_are_rejected_for_dates() {
        assert!(!is_valid_date_format("%H:%M"));
        assert!(!is_valid_date_format("%Y-%m-%d %z"));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"date_display_format": "%H:%M"}"#).unwrap();
        assert!(matches!(
            GridSettings::load(&path),
            Err(GridError::Configuration(_))
        ));
    }

    #[test]
    fn test_malformed_file_is_a_serialization_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            GridSettings::load(&path),
            Err(GridError::Serialization(_))
        ));
    }
}
