//! Showcase configuration: animation timing, defaults and theme.
//!
//! User-level config: `~/.alphaqubit/config.yaml`
//! Project-level config: `.alphaqubit/config.yaml` (wins over user-level)
//!
//! Resolution: explicit `--config` path → project → user → built-in defaults.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::content::SectionId;
use crate::error::{ShowcaseError, ShowcaseResult};
use crate::theme::ThemeConfig;
use crate::widgets::decoder_pipeline::DEFAULT_INTERVAL;
use crate::widgets::CodeDistance;

/// Lower bound for the stage period; anything faster is unreadable.
const MIN_INTERVAL_MS: u64 = 100;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    /// Period of the decoding pipeline animation.
    pub pipeline_interval_ms: u64,
    /// Distance selected when the chart mounts.
    pub default_distance: CodeDistance,
    /// Section to scroll to at startup.
    pub start_section: SectionId,
    pub theme: ThemeConfig,
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self {
            pipeline_interval_ms: DEFAULT_INTERVAL.as_millis() as u64,
            default_distance: CodeDistance::D5,
            start_section: SectionId::Hero,
            theme: ThemeConfig::default(),
        }
    }
}

/// Path to `~/.alphaqubit/`.
fn dirs_path() -> Option<PathBuf> {
    #[cfg(windows)]
    {
        std::env::var("USERPROFILE")
            .ok()
            .map(|p| PathBuf::from(p).join(".alphaqubit"))
    }
    #[cfg(not(windows))]
    {
        std::env::var("HOME")
            .ok()
            .map(|p| PathBuf::from(p).join(".alphaqubit"))
    }
}

impl ShowcaseConfig {
    /// Resolve config from the usual locations. Unreadable or malformed
    /// files are logged and skipped.
    pub fn load() -> Self {
        let project = PathBuf::from(".alphaqubit/config.yaml");
        let user = dirs_path().map(|p| p.join("config.yaml"));

        for path in std::iter::once(project).chain(user) {
            if !path.exists() {
                continue;
            }
            match Self::from_file(&path) {
                Ok(config) => {
                    debug!(path = %path.display(), "config loaded");
                    return config;
                }
                Err(e) => warn!("ignoring config: {e}"),
            }
        }
        Self::default()
    }

    /// Load a specific config file. Errors are surfaced.
    pub fn from_file(path: &Path) -> ShowcaseResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ShowcaseError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self =
            serde_yaml::from_str(&content).map_err(|e| ShowcaseError::ConfigParse {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> ShowcaseResult<()> {
        if self.pipeline_interval_ms < MIN_INTERVAL_MS {
            return Err(ShowcaseError::ConfigParse {
                path: path.display().to_string(),
                reason: format!("pipeline_interval_ms must be at least {MIN_INTERVAL_MS}"),
            });
        }
        crate::theme::Theme::from_config(&self.theme)?;
        Ok(())
    }

    pub fn pipeline_interval(&self) -> Duration {
        Duration::from_millis(self.pipeline_interval_ms.max(MIN_INTERVAL_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, yaml: &str) -> PathBuf {
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, yaml).unwrap();
        path
    }

    #[test]
    fn defaults() {
        let c = ShowcaseConfig::default();
        assert_eq!(c.pipeline_interval(), Duration::from_secs(2));
        assert_eq!(c.default_distance, CodeDistance::D5);
        assert_eq!(c.start_section, SectionId::Hero);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "default_distance: 11\n");
        let c = ShowcaseConfig::from_file(&path).unwrap();
        assert_eq!(c.default_distance, CodeDistance::D11);
        assert_eq!(c.pipeline_interval_ms, 2000);
        assert_eq!(c.theme, ThemeConfig::default());
    }

    #[test]
    fn full_file() {
        let dir = TempDir::new().unwrap();
        let yaml = r##"
pipeline_interval_ms: 750
default_distance: 3
start_section: science
theme:
  accent: "#112233"
"##;
        let path = write(&dir, yaml);
        let c = ShowcaseConfig::from_file(&path).unwrap();
        assert_eq!(c.pipeline_interval(), Duration::from_millis(750));
        assert_eq!(c.default_distance, CodeDistance::D3);
        assert_eq!(c.start_section, SectionId::Science);
        assert_eq!(c.theme.accent, "#112233");
        assert_eq!(c.theme.panel, "#F5F4F0");
    }

    #[test]
    fn rejects_unknown_distance() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "default_distance: 7\n");
        let err = ShowcaseConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ShowcaseError::ConfigParse { .. }));
    }

    #[test]
    fn rejects_too_fast_interval() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "pipeline_interval_ms: 10\n");
        assert!(ShowcaseConfig::from_file(&path).is_err());
    }

    #[test]
    fn rejects_bad_colour() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "theme:\n  accent: gold\n");
        let err = ShowcaseConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ShowcaseError::InvalidColor(_)));
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = ShowcaseConfig::from_file(Path::new("/nonexistent/alphaqubit.yaml")).unwrap_err();
        assert!(matches!(err, ShowcaseError::ConfigRead { .. }));
    }
}
