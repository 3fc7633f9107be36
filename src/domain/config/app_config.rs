//! Application configuration value object

use serde::{Deserialize, Serialize};

use crate::domain::clipboard::ObservableFormats;

use crate::domain::error::InvalidOutputFormatError;

use super::output_format::OutputFormat;

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub observe_files: Option<bool>,
    pub observe_text: Option<bool>,
    pub observe_images: Option<bool>,
    pub output: Option<String>,
    pub start_paused: Option<bool>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            observe_files: Some(true),
            observe_text: Some(true),
            observe_images: Some(true),
            output: Some("text".to_string()),
            start_paused: Some(false),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            observe_files: other.observe_files.or(self.observe_files),
            observe_text: other.observe_text.or(self.observe_text),
            observe_images: other.observe_images.or(self.observe_images),
            output: other.output.or(self.output),
            start_paused: other.start_paused.or(self.start_paused),
        }
    }

    /// Observation flags, each defaulting to true when unset
    pub fn observable_formats(&self) -> ObservableFormats {
        ObservableFormats {
            files: self.observe_files.unwrap_or(true),
            text: self.observe_text.unwrap_or(true),
            images: self.observe_images.unwrap_or(true),
        }
    }

    /// Get output as parsed OutputFormat, or default if not set
    pub fn output_or_default(&self) -> Result<OutputFormat, InvalidOutputFormatError> {
        match self.output.as_deref() {
            Some(s) => s.parse(),
            None => Ok(OutputFormat::default()),
        }
    }

    /// Get start_paused setting, or false if not set
    pub fn start_paused_or_default(&self) -> bool {
        self.start_paused.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert_eq!(config.observe_files, Some(true));
        assert_eq!(config.observe_text, Some(true));
        assert_eq!(config.observe_images, Some(true));
        assert_eq!(config.output, Some("text".to_string()));
        assert_eq!(config.start_paused, Some(false));
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.observe_files.is_none());
        assert!(config.observe_text.is_none());
        assert!(config.observe_images.is_none());
        assert!(config.output.is_none());
        assert!(config.start_paused.is_none());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            observe_files: Some(true),
            observe_text: Some(true),
            output: Some("text".to_string()),
            ..Default::default()
        };

        let other = AppConfig {
            observe_files: Some(false),
            observe_text: None, // Should not override
            output: Some("json".to_string()),
            ..Default::default()
        };

        let merged = base.merge(other);

        assert_eq!(merged.observe_files, Some(false));
        assert_eq!(merged.observe_text, Some(true));
        assert_eq!(merged.output, Some("json".to_string()));
    }

    #[test]
    fn merge_preserves_base_when_other_is_none() {
        let base = AppConfig {
            observe_images: Some(false),
            start_paused: Some(true),
            ..Default::default()
        };

        let merged = base.merge(AppConfig::empty());

        assert_eq!(merged.observe_images, Some(false));
        assert_eq!(merged.start_paused, Some(true));
    }

    #[test]
    fn observable_formats_default_to_enabled() {
        let formats = AppConfig::empty().observable_formats();
        assert_eq!(formats, ObservableFormats::all());
    }

    #[test]
    fn observable_formats_reflect_flags() {
        let config = AppConfig {
            observe_files: Some(false),
            observe_images: Some(false),
            ..Default::default()
        };
        let formats = config.observable_formats();
        assert!(!formats.files);
        assert!(formats.text);
        assert!(!formats.images);
    }

    #[test]
    fn output_or_default_parses() {
        let config = AppConfig {
            output: Some("json".to_string()),
            ..Default::default()
        };
        assert_eq!(config.output_or_default().unwrap(), OutputFormat::Json);
    }

    #[test]
    fn output_or_default_when_unset() {
        assert_eq!(AppConfig::empty().output_or_default().unwrap(), OutputFormat::Text);
    }

    #[test]
    fn output_or_default_rejects_invalid() {
        let config = AppConfig {
            output: Some("xml".to_string()),
            ..Default::default()
        };
        let err = config.output_or_default().unwrap_err();
        assert_eq!(err.input, "xml");
    }

    #[test]
    fn start_paused_defaults_to_false() {
        assert!(!AppConfig::empty().start_paused_or_default());
    }
}
